//! Include/exclude filter deciding which module ids are scanned.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobBuilder,
    GlobSet,
    GlobSetBuilder,
};

use super::ExtractOptions;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Compiles a pattern the way the filter does: `*` stays within one path
/// segment, `**` crosses segments.
pub(super) fn compile_glob(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// Decides whether a module id is scanned.
#[derive(Debug, Clone)]
pub struct PathFilter {
    /// Ids under this directory are matched relative to it
    base_dir: Option<PathBuf>,
    /// `None` when no include pattern is configured
    include_set: Option<GlobSet>,
    /// Ids matching any of these are skipped
    exclude_set: GlobSet,
}

impl Default for PathFilter {
    /// Scans every id.
    fn default() -> Self {
        Self { base_dir: None, include_set: None, exclude_set: GlobSet::empty() }
    }
}

impl PathFilter {
    /// Creates a filter from options.
    pub fn new(options: &ExtractOptions) -> Result<Self, MatcherError> {
        let include = options.include.as_ref().map_or(&[][..], |p| p.as_slice());
        let exclude = options.exclude.as_ref().map_or(&[][..], |p| p.as_slice());

        let include_set = if include.is_empty() {
            None
        } else {
            Some(Self::build_glob_set(include, |pattern, source| {
                MatcherError::InvalidIncludePattern { pattern, source }
            })?)
        };

        let exclude_set = Self::build_glob_set(exclude, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { base_dir: options.base_dir.clone(), include_set, exclude_set })
    }

    /// Builds a glob set, reporting the first bad pattern through `make_error`.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = compile_glob(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Returns true if `id` should be scanned.
    ///
    /// Ids carrying a NUL byte belong to virtual modules and are never
    /// scanned. Backslashes are treated as path separators.
    #[must_use]
    pub fn should_scan(&self, id: &str) -> bool {
        if id.contains('\0') {
            return false;
        }

        let normalized = id.replace('\\', "/");
        let path = Path::new(&normalized);
        let candidate = self
            .base_dir
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);

        self.is_match(candidate)
    }

    /// Returns true if the path matches an include pattern (or none are
    /// configured) and no exclude pattern.
    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        self.include_set.as_ref().is_none_or(|set| set.is_match(path))
            && !self.exclude_set.is_match(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn filter(options: &ExtractOptions) -> PathFilter {
        PathFilter::new(options).expect("valid patterns")
    }

    #[rstest]
    #[case::relative("test.js")]
    #[case::nested("src/components/Button.ts")]
    #[case::absolute("/project/src/index.jsx")]
    fn no_patterns_scans_everything(#[case] id: &str) {
        assert_that!(filter(&ExtractOptions::default()).should_scan(id), eq(true));
    }

    #[rstest]
    #[case::top_level("test.js", true)]
    #[case::nested("src/lib/test.js", true)]
    #[case::absolute("/project/src/test.js", true)]
    #[case::other_extension("test.ts", false)]
    fn include_single_pattern(#[case] id: &str, #[case] expected: bool) {
        let options = ExtractOptions::new().with_include("**/*.js");

        assert_that!(filter(&options).should_scan(id), eq(expected));
    }

    #[rstest]
    #[case::plain("main.js", true)]
    #[case::test_file("file.test.js", false)]
    #[case::nested_test_file("src/file.test.js", false)]
    fn exclude_single_pattern(#[case] id: &str, #[case] expected: bool) {
        let options = ExtractOptions::new().with_exclude("**/*.test.js");

        assert_that!(filter(&options).should_scan(id), eq(expected));
    }

    #[rstest]
    fn exclude_wins_over_include() {
        let options = ExtractOptions::new()
            .with_include(&["**/*.js", "**/*.ts"][..])
            .with_exclude(&["**/node_modules/**", "**/dist/**"][..]);
        let filter = filter(&options);

        assert_that!(filter.should_scan("src/index.ts"), eq(true));
        assert_that!(filter.should_scan("node_modules/foo/index.js"), eq(false));
        assert_that!(filter.should_scan("dist/bundle.js"), eq(false));
    }

    #[rstest]
    fn empty_include_list_scans_everything() {
        let options = ExtractOptions::new().with_include(Vec::<String>::new());

        assert_that!(filter(&options).should_scan("anything.css"), eq(true));
    }

    #[rstest]
    fn star_does_not_cross_directories() {
        let options = ExtractOptions::new().with_include("src/*.js");
        let filter = filter(&options);

        assert_that!(filter.should_scan("src/index.js"), eq(true));
        assert_that!(filter.should_scan("src/nested/index.js"), eq(false));
    }

    #[rstest]
    #[case::inside_base("/project/src/index.js", true)]
    #[case::outside_base("/other/src/index.js", false)]
    #[case::relative_id("src/index.js", true)]
    fn base_dir_strips_prefix(#[case] id: &str, #[case] expected: bool) {
        let options = ExtractOptions::new().with_include("src/**/*.js").with_base_dir("/project");

        assert_that!(filter(&options).should_scan(id), eq(expected));
    }

    #[rstest]
    fn backslashes_are_separators() {
        let options = ExtractOptions::new().with_include("src/**/*.js");

        assert_that!(filter(&options).should_scan(r"src\lib\index.js"), eq(true));
    }

    #[rstest]
    fn virtual_modules_are_never_scanned() {
        assert_that!(filter(&ExtractOptions::default()).should_scan("\0virtual:entry"), eq(false));
    }

    #[rstest]
    fn new_with_invalid_include_pattern() {
        let options = ExtractOptions::new().with_include("**/*.{js,ts");

        let result = PathFilter::new(&options);

        assert!(matches!(result, Err(MatcherError::InvalidIncludePattern { .. })));
    }

    #[rstest]
    fn new_with_invalid_exclude_pattern() {
        let options = ExtractOptions::new().with_exclude("[invalid");

        let result = PathFilter::new(&options);

        assert!(matches!(result, Err(MatcherError::InvalidExcludePattern { .. })));
    }

    #[rstest]
    fn base_dir_accessor() {
        let options = ExtractOptions::new().with_base_dir("/project");

        assert_eq!(filter(&options).base_dir(), Some(Path::new("/project")));
    }
}
