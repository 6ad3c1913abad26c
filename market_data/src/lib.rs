pub mod errors;
pub mod models;
pub mod providers;

pub use errors::Error;
