//! Android subprojects the adapter can run tests for.

use std::fmt;

use clap::ValueEnum;

/// Gradle subdirectory for fenix, relative to the source root.
pub const FENIX_DIR: &str = "mobile/android/fenix";
/// Gradle subdirectory for focus, relative to the source root.
pub const FOCUS_DIR: &str = "mobile/android/focus-android";
/// Gradle subdirectory for android-components, relative to the source root.
pub const AC_DIR: &str = "mobile/android/android-components";

/// Unit test source root shared by every android-components project.
const AC_TEST_PATH: &str = "src/test/java";

/// Subproject selector.
///
/// `android-components` and `ac` are two spellings of the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Subproject {
    Fenix,
    Focus,
    #[value(name = "android-components", alias = "ac")]
    AndroidComponents,
}

impl Subproject {
    /// Parse an external selector spelling; unknown spellings yield `None`.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "fenix" => Some(Self::Fenix),
            "focus" => Some(Self::Focus),
            "android-components" | "ac" => Some(Self::AndroidComponents),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fenix => "fenix",
            Self::Focus => "focus",
            Self::AndroidComponents => "android-components",
        }
    }

    /// Directory passed to gradle via `-p`.
    pub fn subdir(self) -> &'static str {
        match self {
            Self::Fenix => FENIX_DIR,
            Self::Focus => FOCUS_DIR,
            Self::AndroidComponents => AC_DIR,
        }
    }

    /// Marker separating a test path into its source root and class path.
    pub fn test_path(self) -> String {
        match self {
            Self::Fenix | Self::Focus => format!("{}/app/{AC_TEST_PATH}", self.subdir()),
            Self::AndroidComponents => AC_TEST_PATH.to_string(),
        }
    }

    /// Gradle tasks that start every targeted invocation.
    pub fn base_tasks(self) -> &'static [&'static str] {
        match self {
            Self::Fenix => &["testDebug", "testFenixDebugUnitTest"],
            Self::Focus => &["testFocusDebugUnitTest"],
            Self::AndroidComponents => &[],
        }
    }

    /// Whether each test needs a `:<project>:testDebugUnitTest` qualifier.
    pub fn qualifies_projects(self) -> bool {
        matches!(self, Self::AndroidComponents)
    }
}

impl fmt::Display for Subproject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
