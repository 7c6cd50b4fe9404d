use reqwest::StatusCode;

/// Expected outcome of an API call.
///
/// Success expectations pair a 200 with a `status` token in the body;
/// error expectations pair an HTTP status with the error message the
/// application echoes in the `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiExpectation {
    Approved,
    Declined,
    BadRequest,
    NotFound,
    MethodNotAllowed,
}

impl ApiExpectation {
    pub fn status_code(self) -> StatusCode {
        match self {
            ApiExpectation::Approved | ApiExpectation::Declined => StatusCode::OK,
            ApiExpectation::BadRequest => StatusCode::BAD_REQUEST,
            ApiExpectation::NotFound => StatusCode::NOT_FOUND,
            ApiExpectation::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// The token carried in the response body: the transaction status for
    /// success outcomes, the error message for failures.
    pub fn body_token(self) -> &'static str {
        match self {
            ApiExpectation::Approved => "APPROVED",
            ApiExpectation::Declined => "DECLINED",
            ApiExpectation::BadRequest => "Bad Request",
            ApiExpectation::NotFound => "Not Found",
            ApiExpectation::MethodNotAllowed => "Method Not Allowed",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ApiExpectation::Approved | ApiExpectation::Declined)
    }
}
