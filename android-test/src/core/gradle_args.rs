//! Assemble gradle arguments for a selection of android tests.

use anyhow::{Context, Result};

use super::path::{classname_for_test, project_for_ac};
use super::subproject::Subproject;
use super::types::TestObject;

/// Name of the command every request is dispatched to.
pub const GRADLE: &str = "gradle";

/// Gradle task run for each qualified android-components project.
const AC_PROJECT_TASK: &str = "testDebugUnitTest";

/// What to ask gradle for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradleRequest {
    /// Run `tokens` (tasks and `--tests` filters) inside the subproject.
    Targeted {
        subproject: Subproject,
        tokens: Vec<String>,
    },
    /// Rerun every test in the subproject.
    FullRerun { subproject: Subproject },
}

impl GradleRequest {
    pub fn subproject(&self) -> Subproject {
        match self {
            Self::Targeted { subproject, .. } | Self::FullRerun { subproject } => *subproject,
        }
    }

    /// Full argument list handed to gradle.
    pub fn into_args(self) -> Vec<String> {
        match self {
            Self::Targeted { subproject, mut tokens } => {
                tokens.extend(
                    ["-q", "--rerun", "-p", subproject.subdir()].map(str::to_string),
                );
                tokens
            }
            Self::FullRerun { subproject } => ["-q", "test", "--rerun", "-p", subproject.subdir()]
                .map(str::to_string)
                .to_vec(),
        }
    }
}

/// Build the gradle request for `subproject`.
///
/// Tests from `test_objects` are added in order, followed by `test`. An empty
/// `test` counts as absent. android-components with nothing selected falls back
/// to a full rerun.
pub fn assemble(
    subproject: Subproject,
    test: Option<&str>,
    test_objects: &[TestObject],
) -> Result<GradleRequest> {
    let test = test.filter(|test| !test.is_empty());
    if subproject == Subproject::AndroidComponents && test.is_none() && test_objects.is_empty() {
        return Ok(GradleRequest::FullRerun { subproject });
    }

    let test_path = subproject.test_path();
    let mut tokens: Vec<String> = subproject
        .base_tasks()
        .iter()
        .map(|task| task.to_string())
        .collect();
    let selected = test_objects
        .iter()
        .map(|object| object.name.as_str())
        .chain(test);
    for name in selected {
        push_test(&mut tokens, subproject, name, &test_path)
            .with_context(|| format!("translate {name} for {subproject}"))?;
    }
    Ok(GradleRequest::Targeted { subproject, tokens })
}

/// Like [`assemble`], but for an external selector spelling.
///
/// Returns `None` when the selector names no known subproject.
pub fn plan_for_selector(
    selector: &str,
    test: Option<&str>,
    test_objects: &[TestObject],
) -> Result<Option<GradleRequest>> {
    let Some(subproject) = Subproject::from_selector(selector) else {
        return Ok(None);
    };
    assemble(subproject, test, test_objects).map(Some)
}

fn push_test(
    tokens: &mut Vec<String>,
    subproject: Subproject,
    test: &str,
    test_path: &str,
) -> Result<()> {
    if subproject.qualifies_projects() {
        let project = project_for_ac(test, test_path)?;
        tokens.push(format!(":{project}:{AC_PROJECT_TASK}"));
    }
    tokens.push("--tests".to_string());
    tokens.push(classname_for_test(test, test_path)?);
    Ok(())
}
