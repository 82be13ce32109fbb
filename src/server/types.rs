use serde::{Deserialize, Serialize};

/// Body of the HTML form post.
#[derive(Debug, Default, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
