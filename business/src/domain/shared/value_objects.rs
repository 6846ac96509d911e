/// An amount of money in minor currency units (cents).
/// Stored amounts are never negative, but a discounted price can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Subtracts a discount without flooring at zero.
    pub fn minus(self, discount: Cents) -> Self {
        Self(self.0 - discount.0)
    }

    /// Renders the amount as dollars, e.g. `$200.00`.
    pub fn formatted(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
