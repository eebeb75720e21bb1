use super::PatientContext;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Literal substituted for context fields the client did not send.
pub const ABSENT_FIELD: &str = "None";

/// The data URL always declares PNG, whatever was uploaded.
pub const IMAGE_DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub fn build_prompt(context: &PatientContext) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or(ABSENT_FIELD).to_string();

    format!(
        "Patient context:\n\
         - Age: {}\n\
         - Sex: {}\n\
         - Symptoms: {}\n\
         - History: {}\n\
         - Medications: {}\n\
         - Vitals: {}\n\
         \n\
         Task: Interpret the attached EKG image.\n\
         Provide rate, rhythm, axis, conduction, intervals, ischemia changes,\n\
         and overall impression. Be concise but clinically useful.\n",
        field(&context.age),
        field(&context.sex),
        field(&context.symptoms),
        field(&context.history),
        field(&context.meds),
        field(&context.vitals),
    )
}

pub fn image_data_url(image: &[u8]) -> String {
    format!("{}{}", IMAGE_DATA_URL_PREFIX, STANDARD.encode(image))
}
