//! Core collision accelerator decoding module

pub mod format;
pub mod reader;
pub mod report;
pub mod types;
pub mod utils;

pub use format::layout::{parse, scan};
pub use reader::{read_file, scan_file};
pub use types::error::{AccelError, Result};
