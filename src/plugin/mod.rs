//! Bundler plugin contract and the `extract-drupal-t` plugin.
//!
//! A host offers every module to [`Plugin::transform`] and calls
//! [`Plugin::generate_bundle`] once all modules were offered. Assets are
//! emitted through the [`PluginContext`] the host passes in.

/// `extract-drupal-t` plugin
mod extract;

use std::path::PathBuf;

use thiserror::Error;

pub use extract::ExtractDrupalT;

/// Result of the per-module hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutput {
    /// The module source is left as is.
    Unchanged,
    /// The module source is replaced. [`ExtractDrupalT`] never returns
    /// this; other plugins sharing a host do.
    Transformed {
        /// Rewritten source
        code: String,
    },
}

/// A static file emitted into the bundle output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    /// File name relative to the output directory
    pub file_name: String,
    /// File content
    pub source: String,
}

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Asset '{0}' was already emitted")]
    DuplicateFileName(String),

    #[error("Failed to write asset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Host services available to plugin hooks.
pub trait PluginContext {
    /// Emits a static asset.
    fn emit_asset(&mut self, asset: EmittedAsset) -> Result<(), EmitError>;
}

/// Hooks a bundler host drives during one build.
pub trait Plugin {
    /// Plugin name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Called once per module offered by the host.
    fn transform(&mut self, code: &str, id: &str) -> TransformOutput;

    /// Called once after every module has been offered.
    fn generate_bundle(&self, ctx: &mut dyn PluginContext) -> Result<(), EmitError>;
}
