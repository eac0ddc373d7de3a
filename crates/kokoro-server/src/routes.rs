pub(crate) mod assessments;
pub(crate) mod error;
pub(crate) mod status;
pub(crate) mod swagger;
pub(crate) mod therapists;
