//! # Word Graph Model
//!
//! Plain DTOs shared by the loaders, the index, the search and the caller.
//!
//! Design rule: no I/O, no state. Anything that touches a file lives in
//! `storage`.

pub mod word_id;
pub mod path;
pub mod dictionary;
pub mod adjacency;

pub use word_id::WordId;
pub use path::WordPath;
pub use dictionary::Dictionary;
pub use adjacency::{AdjacencyGraph, Neighbors};
