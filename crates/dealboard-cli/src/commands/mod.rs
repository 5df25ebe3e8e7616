pub mod board;
pub mod common;
pub mod completions;
pub mod list;
