//! Field metadata shared by record descriptors

mod validation;

pub use validation::ValidationRules;
