pub mod labels;
pub mod pulls;
pub mod reviews;
