use super::pages;
use crate::{
    Error, Result,
    config::{IndexPage, OutputFormat},
    interpret::{InterpretationRequest, Interpreter, PatientContext},
};
use axum::{
    Json,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DOCS_PATH: &str = "/docs";

#[derive(Clone)]
pub struct AppState {
    pub interpreter: Arc<Interpreter>,
    pub output_format: OutputFormat,
    pub index_page: IndexPage,
}

pub async fn index(State(state): State<AppState>) -> Response {
    match state.index_page {
        IndexPage::Form => Html(pages::UPLOAD_FORM).into_response(),
        IndexPage::Docs => (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)]).into_response(),
    }
}

pub async fn docs() -> Html<&'static str> {
    Html(pages::API_DOCS)
}

pub async fn interpret(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response> {
    let request = read_upload(multipart).await?;
    let result = state.interpreter.interpret(request).await?;

    info!(
        "Interpretation complete ({} chars)",
        result.overall_interpretation.len()
    );

    let response = match state.output_format {
        OutputFormat::Json => Json(result).into_response(),
        OutputFormat::Html => Html(pages::render_result(&result)).into_response(),
    };
    Ok(response)
}

/// Collects the image and context fields. Fails before any upstream call
/// when `image` is missing.
async fn read_upload(mut multipart: Multipart) -> Result<InterpretationRequest> {
    let mut image = None;
    let mut context = PatientContext::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            debug!(
                "Received image field ({} bytes, file name {:?})",
                bytes.len(),
                file_name
            );
            image = Some(bytes.to_vec());
            continue;
        }

        if !PatientContext::FIELD_NAMES.contains(&name.as_str()) {
            warn!("Ignoring unexpected form field: {}", name);
            continue;
        }

        let bytes = field.bytes().await?;
        let value = String::from_utf8(bytes.to_vec()).map_err(|_| {
            Error::bad_request(format!("Field '{}' is not valid UTF-8", name))
        })?;
        context.set(&name, value);
    }

    let image = image.ok_or_else(|| Error::bad_request("Missing required field: image"))?;

    Ok(InterpretationRequest { image, context })
}
