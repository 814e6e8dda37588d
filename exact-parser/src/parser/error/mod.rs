pub mod kind;

pub use exact_error::Error;
