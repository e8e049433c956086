//! Side effects at the edge of the app: clipboard and file export.

pub mod clipboard;
pub mod export;
