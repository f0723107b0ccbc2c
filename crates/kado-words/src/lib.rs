pub mod loader;

pub use loader::{WordListLoader, validate_data};
