pub mod engine;

pub use engine::{clean, remove_path, CleanEntry, CleanMode, CleanReport};
