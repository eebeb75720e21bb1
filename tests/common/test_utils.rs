use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use ekg_interpreter::{
    config::{IndexPage, LlmConfig, OutputFormat},
    interpret::Interpreter,
    llm::LlmClient,
    server::{self, handlers::AppState},
};
use std::sync::Arc;

pub const TEST_BOUNDARY: &str = "----ekg-test-boundary";

/// Bytes that look like the start of a PNG file
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0xFF];

/// Build the application router around the given LLM client
pub fn create_test_app(
    llm_client: Arc<dyn LlmClient>,
    output_format: OutputFormat,
    index_page: IndexPage,
) -> Router {
    create_test_app_with_limit(llm_client, output_format, index_page, 20 * 1024 * 1024)
}

pub fn create_test_app_with_limit(
    llm_client: Arc<dyn LlmClient>,
    output_format: OutputFormat,
    index_page: IndexPage,
    max_upload_bytes: usize,
) -> Router {
    let interpreter = Interpreter::new(llm_client, &LlmConfig::default());
    let state = AppState {
        interpreter: Arc::new(interpreter),
        output_format,
        index_page,
    };
    server::router(state, max_upload_bytes)
}

/// Hand-built multipart/form-data body
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, name: &str, value: &str) -> Self {
        self.raw(name, value.as_bytes())
    }

    pub fn raw(mut self, name: &str, value: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n",
                TEST_BOUNDARY, name
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(value);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                TEST_BOUNDARY, name, file_name, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn image(self, bytes: &[u8]) -> Self {
        self.file("image", "ekg.png", "image/png", bytes)
    }

    pub fn into_request(mut self, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", TEST_BOUNDARY),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}
