pub mod flash;
pub mod format;
