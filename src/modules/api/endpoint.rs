/// Routes of the payment API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Direct card payment
    Pay,
    /// Purchase on credit
    Credit,
    /// Nonexistent route, for negative routing tests
    Unknown,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Pay => "/api/v1/pay",
            Endpoint::Credit => "/api/v1/credit",
            Endpoint::Unknown => "/api/v1/wrong",
        }
    }
}
