pub mod access_tokens;
pub mod assessment;
pub mod therapist;
pub mod user;

pub use sea_orm;
