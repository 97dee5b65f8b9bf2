//! Writes emitted assets into an output directory.

use std::collections::HashSet;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use crate::plugin::{
    EmitError,
    EmittedAsset,
    PluginContext,
};

/// Emission context writing each asset to `<out_dir>/<file_name>`.
///
/// A file name can be emitted once per context.
#[derive(Debug, Clone)]
pub struct OutputDirContext {
    /// Target directory, created on first emission
    out_dir: PathBuf,
    /// Names written by this context
    written: HashSet<String>,
}

impl OutputDirContext {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), written: HashSet::new() }
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl PluginContext for OutputDirContext {
    fn emit_asset(&mut self, asset: EmittedAsset) -> Result<(), EmitError> {
        if self.written.contains(&asset.file_name) {
            return Err(EmitError::DuplicateFileName(asset.file_name));
        }

        let path = self.out_dir.join(&asset.file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| EmitError::Io { path: parent.to_path_buf(), source })?;
        }
        fs::write(&path, asset.source.as_bytes())
            .map_err(|source| EmitError::Io { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), "Asset written");
        self.written.insert(asset.file_name);
        Ok(())
    }
}
