pub mod directory;
pub mod sanitize;

pub mod error;
