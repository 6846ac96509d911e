/// Redeemable gift card code, e.g. `200OFF`. Unique across gift cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GiftCardCode(String);

impl GiftCardCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GiftCardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GiftCardCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GiftCardCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
