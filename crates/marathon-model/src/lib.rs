mod error;
pub use error::ModelError;

mod fields;

mod domain;
pub use domain::*;
