pub mod availability;
pub mod query;
pub mod session;
