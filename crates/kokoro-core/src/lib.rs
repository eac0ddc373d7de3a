pub mod assessment;
pub mod booking;
