pub mod assessment;
pub mod therapist;
pub mod user;
pub mod util;

pub use sea_orm;
