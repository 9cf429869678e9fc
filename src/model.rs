pub mod dataset;
pub mod title;
