use poem_openapi::Object;

/// Body of unexpected failures (HTTP 500).
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: &str) -> Self {
        Self {
            name: "InternalError".to_string(),
            message: message.to_string(),
        }
    }
}
