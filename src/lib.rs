//! extract-drupal-t
//!
//! Bundler plugin that collects `Drupal.t()` and `Drupal.formatPlural()` call
//! sites from JavaScript sources and emits them as a `translations.js` asset,
//! one `// Drupal.t(...)` comment per call, for Drupal's locale string
//! harvester to pick up.

pub mod config;
pub mod extractor;
pub mod host;
pub mod manifest;
pub mod plugin;
pub mod registry;
mod test_utils;

// Plugin entry points
pub use config::ExtractOptions;
pub use plugin::{
    ExtractDrupalT,
    Plugin,
    PluginContext,
    TransformOutput,
};
