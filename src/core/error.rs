/// Harness-wide Result type
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Main harness error type
///
/// Environment failures (unreachable API, database or browser) convert into
/// these variants and fail the test immediately; there are no retries
/// anywhere in the harness.
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Browser automation errors
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A page element the scenario relies on was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

impl HarnessError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        HarnessError::Configuration(msg.into())
    }

    pub fn element_not_found(msg: impl Into<String>) -> Self {
        HarnessError::ElementNotFound(msg.into())
    }
}
