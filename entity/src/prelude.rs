pub use super::bank::Entity as Bank;
pub use super::branch::Entity as Branch;
