//! Reference hosts driving a [`Plugin`](crate::plugin::Plugin) outside a bundler.

/// Directory walking build driver
mod build;
/// In-memory emission context
mod memory;
/// Emission context writing into a directory
mod output_dir;

pub use build::{
    BuildError,
    BuildSummary,
    run_build,
};
pub use memory::MemoryContext;
pub use output_dir::OutputDirContext;
