//! Translate test source paths into gradle test filters.
//!
//! Paths arrive either from the command line or from an editor integration,
//! so they may use `\` or `/` and may contain redundant segments. Every
//! operation here normalizes first and then works on `/`-separated strings.

use anyhow::{Result, bail};

/// Directory holding every android-components subproject.
pub const AC_COMPONENTS_DIR: &str = "mobile/android/android-components/components";

/// Source suffixes stripped from the last path segment (at most one).
pub const SOURCE_SUFFIXES: &[&str] = &[".kt", ".java"];

/// Normalize `path` to `/` separators, dropping empty and `.` segments and
/// collapsing `..` against the preceding segment where possible.
///
/// A leading `/` is preserved. An empty result becomes `.`.
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            _ => parts.push(segment),
        }
    }
    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Convert the path of a test file into the dotted class name gradle expects
/// for `--tests`.
///
/// Everything after the last occurrence of `test_path` is kept, the source
/// suffix is dropped and separators become dots:
///
/// ```
/// use android_test::core::path::classname_for_test;
///
/// let class = classname_for_test(
///     "mobile/android/android-components/components/feature/addons/src/test/java/mozilla/components/feature/addons/ui/PermissionsDialogFragmentTest.kt",
///     "src/test/java",
/// )
/// .unwrap();
/// assert_eq!(class, "mozilla.components.feature.addons.ui.PermissionsDialogFragmentTest");
/// ```
pub fn classname_for_test(test: &str, test_path: &str) -> Result<String> {
    let test = normalize_path(test);
    let marker = normalize_path(test_path);
    let Some((_, tail)) = test.rsplit_once(marker.as_str()) else {
        bail!("test {test} is not below {marker}");
    };
    let tail = tail.strip_prefix('/').unwrap_or(tail);
    let tail = strip_source_suffix(tail);
    if tail.is_empty() {
        bail!("test {test} names no class below {marker}");
    }
    Ok(tail.replace('/', "."))
}

/// Derive the hyphenated android-components project name (`feature-addons`)
/// for a test file below [`AC_COMPONENTS_DIR`].
///
/// The project is the directory chain between the components root and the
/// first occurrence of `test_path` after it.
pub fn project_for_ac(test: &str, test_path: &str) -> Result<String> {
    let test = normalize_path(test);
    let marker = normalize_path(test_path);
    let Some((_, below_components)) = test.rsplit_once(AC_COMPONENTS_DIR) else {
        bail!("test {test} is not below {AC_COMPONENTS_DIR}");
    };
    let Some((project_dir, _)) = below_components.split_once(marker.as_str()) else {
        bail!("test {test} is not below {marker}");
    };
    let project_dir = project_dir.strip_prefix('/').unwrap_or(project_dir);
    let project_dir = project_dir.strip_suffix('/').unwrap_or(project_dir);
    if project_dir.is_empty() {
        bail!("test {test} names no project below {AC_COMPONENTS_DIR}");
    }
    Ok(project_dir.replace('/', "-"))
}

fn strip_source_suffix(name: &str) -> &str {
    SOURCE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDONS_TEST: &str = "mobile/android/android-components/components/feature/addons/src/test/java/mozilla/components/feature/addons/ui/PermissionsDialogFragmentTest.kt";

    #[test]
    fn normalize_unifies_separators_and_collapses_segments() {
        assert_eq!(normalize_path(r"a\b/./c//d"), "a/b/c/d");
        assert_eq!(normalize_path("a/b/../c/"), "a/c");
        assert_eq!(normalize_path("../a"), "../a");
        assert_eq!(normalize_path("/../a"), "/a");
        assert_eq!(normalize_path(""), ".");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn classname_for_ac_test() {
        let class = classname_for_test(ADDONS_TEST, "src/test/java").expect("classname");
        assert_eq!(
            class,
            "mozilla.components.feature.addons.ui.PermissionsDialogFragmentTest"
        );
    }

    #[test]
    fn classname_accepts_backslash_paths() {
        let test = ADDONS_TEST.replace('/', "\\");
        let class = classname_for_test(&test, r"src\test\java").expect("classname");
        assert_eq!(
            class,
            "mozilla.components.feature.addons.ui.PermissionsDialogFragmentTest"
        );
    }

    #[test]
    fn classname_splits_on_last_marker() {
        let class = classname_for_test(
            "mobile/android/fenix/app/src/test/java/org/mozilla/fenix/src/test/java/InnerTest.kt",
            "src/test/java",
        )
        .expect("classname");
        assert_eq!(class, "InnerTest");
    }

    #[test]
    fn classname_strips_java_suffix_and_keeps_unknown_suffix() {
        let java = classname_for_test("app/src/test/java/org/example/FooTest.java", "src/test/java")
            .expect("java");
        assert_eq!(java, "org.example.FooTest");

        let bare =
            classname_for_test("app/src/test/java/org/example/FooTest", "src/test/java")
                .expect("bare");
        assert_eq!(bare, "org.example.FooTest");
    }

    #[test]
    fn classname_rejects_missing_marker() {
        let err = classname_for_test("app/src/main/java/Foo.kt", "src/test/java")
            .expect_err("missing marker");
        assert!(err.to_string().contains("src/test/java"));
    }

    #[test]
    fn classname_rejects_marker_without_class() {
        classname_for_test("app/src/test/java/", "src/test/java").expect_err("no class");
    }

    #[test]
    fn classname_round_trips_to_path_without_suffix() {
        let cases = [
            ("mobile/android/fenix/app", "src/test/java", "org/mozilla/fenix/HomeTest"),
            ("components/support/base", "src/test/java", "mozilla/components/support/base/LogTest"),
            ("focus", "app/src/test/java", "org/mozilla/focus/UrlTest"),
        ];
        for (prefix, marker, class_path) in cases {
            let test = format!("{prefix}/{marker}/{class_path}.kt");
            let class = classname_for_test(&test, marker).expect("classname");
            let rebuilt = format!("{prefix}/{marker}/{}", class.replace('.', "/"));
            assert_eq!(rebuilt, format!("{prefix}/{marker}/{class_path}"));
        }
    }

    #[test]
    fn project_for_ac_test() {
        let project = project_for_ac(ADDONS_TEST, "src/test/java").expect("project");
        assert_eq!(project, "feature-addons");
    }

    #[test]
    fn project_for_ac_with_single_directory_project() {
        let project = project_for_ac(
            "mobile/android/android-components/components/concept/src/test/java/FooTest.kt",
            "src/test/java",
        );
        assert_eq!(project.expect("project"), "concept");
    }

    #[test]
    fn project_for_ac_accepts_absolute_checkout_paths() {
        let test = format!("/home/dev/firefox/{ADDONS_TEST}");
        let project = project_for_ac(&test, "src/test/java").expect("project");
        assert_eq!(project, "feature-addons");
    }

    #[test]
    fn project_for_ac_rejects_paths_outside_components() {
        let err = project_for_ac(
            "mobile/android/fenix/app/src/test/java/org/mozilla/fenix/HomeTest.kt",
            "src/test/java",
        )
        .expect_err("outside components");
        assert!(err.to_string().contains(AC_COMPONENTS_DIR));
    }

    #[test]
    fn project_for_ac_rejects_missing_marker() {
        project_for_ac(
            "mobile/android/android-components/components/feature/addons/src/main/java/Foo.kt",
            "src/test/java",
        )
        .expect_err("missing marker");
    }
}
