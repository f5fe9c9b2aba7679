//! Save files under ~/.treehop/ and the high score store built on them.

pub mod high_score;
pub mod json;

pub use high_score::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};
pub use json::{load_json_or_default, save_json, save_path, treehop_dir};
