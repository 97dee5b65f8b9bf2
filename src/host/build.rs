//! Runs a plugin over every file under a directory.

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::plugin::{
    EmitError,
    Plugin,
    PluginContext,
    TransformOutput,
};

#[derive(Error, Debug)]
pub enum BuildError {
    /// The directory to build does not exist
    #[error("Build root not found: {0:?}")]
    RootNotFound(PathBuf),
    /// Emitting an asset failed
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Counts reported by [`run_build`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Files handed to `transform`
    pub files_offered: usize,
    /// Files skipped because they could not be read as UTF-8 text
    pub files_skipped: usize,
    /// Files the plugin rewrote. The rewritten code is not written back.
    pub files_transformed: usize,
}

/// Offers every file under `root` to the plugin, then emits its assets.
///
/// Files are visited in file-name order. Ids are absolute paths, as bundlers
/// pass them. `.gitignore` rules are honored and symlinks are not followed.
pub fn run_build<P>(
    root: &Path,
    plugin: &mut P,
    ctx: &mut dyn PluginContext,
) -> Result<BuildSummary, BuildError>
where
    P: Plugin + ?Sized,
{
    if !root.is_dir() {
        return Err(BuildError::RootNotFound(root.to_path_buf()));
    }
    tracing::debug!(root = %root.display(), plugin = plugin.name(), "Starting build");

    let mut summary = BuildSummary::default();
    for path in find_source_files(root) {
        let code = match std::fs::read_to_string(&path) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!("Failed to read file {:?}: {}", path, e);
                summary.files_skipped += 1;
                continue;
            }
        };

        let id = std::path::absolute(&path).unwrap_or(path);
        let id = id.to_string_lossy();
        if let TransformOutput::Transformed { code: rewritten } = plugin.transform(&code, &id) {
            tracing::trace!(id = %id, bytes = rewritten.len(), "Module rewritten");
            summary.files_transformed += 1;
        }
        summary.files_offered += 1;
    }

    plugin.generate_bundle(ctx)?;
    tracing::debug!(?summary, "Build finished");
    Ok(summary)
}

/// Lists regular files under `root`.
fn find_source_files(root: &Path) -> Vec<PathBuf> {
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        found_files.push(entry.into_path());
    }

    found_files
}
