use serde::{Deserialize, Serialize};

/// Optional clinical context submitted alongside the EKG image.
///
/// Absent fields serialize as `null` and appear in the prompt as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientContext {
    pub age: Option<String>,
    pub sex: Option<String>,
    pub symptoms: Option<String>,
    pub history: Option<String>,
    pub meds: Option<String>,
    pub vitals: Option<String>,
}

impl PatientContext {
    pub const FIELD_NAMES: [&'static str; 6] =
        ["age", "sex", "symptoms", "history", "meds", "vitals"];

    /// Stores a form value under its field name. Returns `false` for names
    /// that are not context fields. Empty values count as absent.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "age" => &mut self.age,
            "sex" => &mut self.sex,
            "symptoms" => &mut self.symptoms,
            "history" => &mut self.history,
            "meds" => &mut self.meds,
            "vitals" => &mut self.vitals,
            _ => return false,
        };
        *slot = if value.is_empty() { None } else { Some(value) };
        true
    }

    /// Fields in display order, paired with their labels.
    pub fn labelled(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("Age", self.age.as_deref()),
            ("Sex", self.sex.as_deref()),
            ("Symptoms", self.symptoms.as_deref()),
            ("History", self.history.as_deref()),
            ("Medications", self.meds.as_deref()),
            ("Vitals", self.vitals.as_deref()),
        ]
    }

    pub fn provided_count(&self) -> usize {
        self.labelled()
            .iter()
            .filter(|(_, value)| value.is_some())
            .count()
    }
}
