//! Filesystem access for infrastructure configuration discovery
//!
//! Provides normalized path handling, plain reads and first-match lookup
//! over ordered folder lists.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod search;

pub use constants::Folder;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use search::SearchPath;
