//! Keeps emitted assets in memory.

use crate::plugin::{
    EmitError,
    EmittedAsset,
    PluginContext,
};

/// Emission context collecting assets in a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryContext {
    /// Assets in emission order
    assets: Vec<EmittedAsset>,
}

impl MemoryContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn assets(&self) -> &[EmittedAsset] {
        &self.assets
    }

    /// Content of the asset named `file_name`, if emitted.
    #[must_use]
    pub fn source_of(&self, file_name: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|asset| asset.file_name == file_name)
            .map(|asset| asset.source.as_str())
    }
}

impl PluginContext for MemoryContext {
    fn emit_asset(&mut self, asset: EmittedAsset) -> Result<(), EmitError> {
        tracing::trace!(file_name = %asset.file_name, bytes = asset.source.len(), "Asset emitted");
        self.assets.push(asset);
        Ok(())
    }
}
