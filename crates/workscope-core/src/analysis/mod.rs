/// Analysis modules — post-walk aggregation and ranking.

pub mod file_types;
pub mod top_files;

pub use file_types::{extension_key, top_types, NO_EXTENSION};
pub use top_files::{largest_files, newest_files};
