pub mod dataset;
pub mod edit;
