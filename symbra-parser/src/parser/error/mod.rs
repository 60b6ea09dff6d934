pub mod kind;

pub use symbra_error::Error;
