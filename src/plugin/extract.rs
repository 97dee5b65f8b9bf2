//! Collects `Drupal.t` / `Drupal.formatPlural` calls and emits `translations.js`.

use super::{
    EmitError,
    EmittedAsset,
    Plugin,
    PluginContext,
    TransformOutput,
};
use crate::config::{
    ConfigError,
    ExtractOptions,
    PathFilter,
};
use crate::extractor::CallMatcher;
use crate::manifest::{
    MANIFEST_FILE_NAME,
    Manifest,
};
use crate::registry::TranslationRegistry;

/// Bundler plugin writing every translatable call it sees into a
/// `translations.js` asset, one `// Drupal.t(...)` comment per line.
///
/// One instance serves one build: the registry starts empty on construction
/// and is dropped with the plugin.
#[derive(Debug, Clone, Default)]
pub struct ExtractDrupalT {
    /// Decides which module ids are scanned
    filter: PathFilter,
    /// Finds calls in scanned modules
    matcher: CallMatcher,
    /// Calls found during this build
    registry: TranslationRegistry,
}

impl ExtractDrupalT {
    /// Plugin name reported to the host.
    pub const NAME: &'static str = "extract-drupal-t";

    /// Creates a plugin from validated options.
    pub fn new(options: &ExtractOptions) -> Result<Self, ConfigError> {
        options.validate().map_err(ConfigError::ValidationErrors)?;

        Ok(Self {
            filter: PathFilter::new(options)?,
            matcher: CallMatcher::new(options.match_mode),
            registry: TranslationRegistry::new(),
        })
    }

    /// Calls collected so far.
    #[must_use]
    pub const fn registry(&self) -> &TranslationRegistry {
        &self.registry
    }

    /// Manifest for the calls collected so far.
    #[must_use]
    pub fn manifest(&self) -> Manifest {
        Manifest::from_registry(&self.registry)
    }
}

impl Plugin for ExtractDrupalT {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&mut self, code: &str, id: &str) -> TransformOutput {
        if !self.filter.should_scan(id) {
            tracing::trace!(id, "Skipping filtered module");
            return TransformOutput::Unchanged;
        }

        let calls = self.matcher.find_all(code);
        let mut added = 0usize;
        for call in &calls {
            if self.registry.insert(call.text) {
                added += 1;
            }
        }
        tracing::debug!(id, found = calls.len(), added, "Scanned module");

        TransformOutput::Unchanged
    }

    fn generate_bundle(&self, ctx: &mut dyn PluginContext) -> Result<(), EmitError> {
        let manifest = self.manifest();
        tracing::debug!(
            calls = manifest.len(),
            file_name = MANIFEST_FILE_NAME,
            "Emitting manifest"
        );

        ctx.emit_asset(EmittedAsset {
            file_name: MANIFEST_FILE_NAME.to_string(),
            source: manifest.render(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::extractor::MatchMode;
    use crate::test_utils::{
        build_output,
        plugin_with,
    };

    #[rstest]
    fn transform_never_rewrites_source() {
        let mut plugin = ExtractDrupalT::default();

        let output = plugin.transform("Drupal.t('Hi');", "a.js");

        assert_eq!(output, TransformOutput::Unchanged);
    }

    #[rstest]
    fn simple_call_scenario() {
        let output = build_output(
            ExtractOptions::default(),
            &[("const m = Drupal.t('Hello World');", "test.js")],
        );

        assert_eq!(output, "// Drupal.t('Hello World')");
    }

    #[rstest]
    fn sorted_scenario() {
        let output = build_output(
            ExtractOptions::default(),
            &[("Drupal.t('Zebra'); Drupal.t('Apple');", "a.js")],
        );

        assert_eq!(output, "// Drupal.t('Apple')\n// Drupal.t('Zebra')");
    }

    #[rstest]
    fn wrapped_namespace_scenario() {
        let output = build_output(ExtractOptions::default(), &[("(Drupal).t('Hi');", "a.js")]);

        assert_eq!(output, "// Drupal.t('Hi')");
    }

    #[rstest]
    fn no_calls_scenario() {
        let output = build_output(
            ExtractOptions::default(),
            &[("const x = 5; console.log('test');", "a.js")],
        );

        assert_eq!(output, "");
    }

    #[rstest]
    fn registry_spans_modules() {
        let mut plugin = plugin_with(&ExtractOptions::default());

        plugin.transform("Drupal.t('Shared'); Drupal.t('One');", "one.js");
        plugin.transform("Drupal.t('Shared'); Drupal.t('Two');", "two.js");

        assert_that!(plugin.registry().len(), eq(3));
    }

    #[rstest]
    fn filtered_module_registers_nothing() {
        let mut plugin = plugin_with(&ExtractOptions::new().with_include("**/*.js"));

        plugin.transform("Drupal.t('Test');", "test.ts");

        assert_that!(plugin.registry().is_empty(), eq(true));
    }

    #[rstest]
    fn balanced_mode_is_used_when_configured() {
        let options = ExtractOptions::new().with_match_mode(MatchMode::Balanced);

        let output = build_output(options, &[("Drupal.t('Hi @n', {'@n': name(u)});", "a.js")]);

        assert_eq!(output, "// Drupal.t('Hi @n', {'@n': name(u)})");
    }

    #[rstest]
    fn new_rejects_invalid_options() {
        let result = ExtractDrupalT::new(&ExtractOptions::new().with_include("[oops"));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
    }

    #[rstest]
    fn name_is_stable() {
        assert_that!(ExtractDrupalT::default().name(), eq("extract-drupal-t"));
    }
}
