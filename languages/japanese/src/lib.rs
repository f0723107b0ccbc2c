pub mod jlpt;

pub use jlpt::{JlptLevel, LevelFilter, LevelFilterError};
