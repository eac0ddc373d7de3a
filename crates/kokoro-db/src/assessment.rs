pub mod answer;
pub mod option;
pub mod query;
pub mod result;
