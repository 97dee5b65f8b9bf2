//! Plugin options: include/exclude patterns, match mode and the options file.

/// Options file loader
mod loader;
/// Module id filter
mod matcher;
/// Option types and validation
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_options,
};
pub use matcher::{
    MatcherError,
    PathFilter,
};
pub use types::{
    ConfigError,
    ExtractOptions,
    Patterns,
    ValidationError,
};
