//! Small browser and formatting utilities.

pub mod dark_mode;
pub mod debounce;
pub mod format;
pub mod markdown;
pub mod storage;
pub mod token;
