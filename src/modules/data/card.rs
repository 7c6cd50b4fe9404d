//! The card payload and its builder.

use serde::Serialize;

/// Test card the bank simulator always approves.
pub const APPROVED_CARD: &str = "1111222233334444";

/// Test card the bank simulator always declines.
pub const DECLINED_CARD: &str = "5555666677778888";

/// Syntactically complete but unacceptable card number.
pub const ALL_ZEROS_CARD: &str = "0000000000000000";

/// The assembled set of card fields submitted to the UI or the API.
///
/// Every field is a string: leading zeros matter ("01", "07") and negative
/// scenarios need to carry deliberately malformed content unchanged. The
/// builder performs no validation; acceptance and rejection are entirely
/// the application's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPayload {
    pub number: String,
    pub month: String,
    pub year: String,
    pub holder: String,
    pub cvc: String,
}

impl CardPayload {
    pub fn new(
        number: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
        holder: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            month: month.into(),
            year: year.into(),
            holder: holder.into(),
            cvc: cvc.into(),
        }
    }

    /// The card number regrouped into blocks of four digits separated by
    /// spaces, matching the on-screen input mask. An empty number stays
    /// empty; the API path sends [`CardPayload::number`] as submitted.
    pub fn formatted_number(&self) -> String {
        format_with_spaces(&self.number)
    }

    /// Same payload with the number in its on-screen representation.
    pub fn with_formatted_number(&self) -> Self {
        Self {
            number: self.formatted_number(),
            ..self.clone()
        }
    }
}

fn format_with_spaces(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Holder value probing for SQL injection handling.
pub fn sql_injection() -> String {
    "Robert'); DROP TABLE users;--".to_string()
}

/// Holder value probing for markup injection handling.
pub fn xss_injection() -> String {
    "R<script>alert(1)</script>".to_string()
}
