pub mod error;
pub mod types;

pub use error::LoadError;
pub use types::{CardSize, WordEntry};
