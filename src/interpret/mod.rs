mod context;
mod prompt;
mod service;

pub use context::PatientContext;
pub use prompt::{ABSENT_FIELD, IMAGE_DATA_URL_PREFIX, build_prompt, image_data_url};
pub use service::{InterpretationRequest, InterpretationResult, Interpreter};
