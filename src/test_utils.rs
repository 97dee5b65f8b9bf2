//! Test helpers shared by unit test modules.
#![cfg(test)]

use crate::config::ExtractOptions;
use crate::host::MemoryContext;
use crate::manifest::MANIFEST_FILE_NAME;
use crate::plugin::{
    ExtractDrupalT,
    Plugin,
};

/// Creates a plugin, panicking on invalid options.
#[allow(clippy::expect_used)]
pub(crate) fn plugin_with(options: &ExtractOptions) -> ExtractDrupalT {
    ExtractDrupalT::new(options).expect("valid options")
}

/// Runs one build over `(code, id)` modules and returns the emitted
/// `translations.js` content.
#[allow(clippy::expect_used)]
pub(crate) fn build_output(options: ExtractOptions, modules: &[(&str, &str)]) -> String {
    let mut plugin = plugin_with(&options);
    for (code, id) in modules {
        plugin.transform(code, id);
    }

    let mut ctx = MemoryContext::new();
    plugin.generate_bundle(&mut ctx).expect("memory context accepts assets");
    ctx.source_of(MANIFEST_FILE_NAME).expect("manifest emitted").to_string()
}
