pub mod error;
pub mod health;
pub mod pricing;
pub mod tags;
