use thiserror::Error;

/// Failures at the browser edges: window, storage and stylesheet injection.
/// Rendering itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("local storage is not available")]
    NoStorage,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("invalid stylesheet: {0}")]
    Style(#[from] stylist::Error),

    #[error("malformed stored value: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    pub fn dom(value: wasm_bindgen::JsValue) -> Self {
        AppError::Dom(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
