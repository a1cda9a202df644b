// Utilities module
// Lexical path helpers and glob pattern matching

pub mod paths;
pub mod patterns;

pub use paths::{clean_path, join_lexical, relative_path};
pub use patterns::{has_glob_meta, PatternMatcher};
