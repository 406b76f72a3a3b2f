//! Dispatchers that execute an assembled command.

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::{Result, bail};
use tracing::info;

use super::config::AndroidTestConfig;
use super::process::run_command_with_timeout;
use crate::core::gradle_args::GRADLE;
use crate::core::types::DispatchOutcome;

/// Runs a named command with arguments and reports how it ended.
pub trait Dispatcher {
    fn dispatch(&self, command: &str, args: &[String]) -> Result<DispatchOutcome>;
}

/// Runs gradle from the source root.
#[derive(Debug, Clone)]
pub struct GradleDispatcher {
    pub topsrcdir: PathBuf,
    pub command: Vec<String>,
    pub timeout: Duration,
}

impl GradleDispatcher {
    pub fn from_config(topsrcdir: impl Into<PathBuf>, config: &AndroidTestConfig) -> Self {
        Self {
            topsrcdir: topsrcdir.into(),
            command: config.gradle.command.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl Dispatcher for GradleDispatcher {
    fn dispatch(&self, command: &str, args: &[String]) -> Result<DispatchOutcome> {
        if command != GRADLE {
            bail!("unknown command {command}");
        }
        let Some((program, prefix)) = self.command.split_first() else {
            bail!("gradle.command must be a non-empty array");
        };
        let mut cmd = Command::new(program);
        cmd.args(prefix).args(args).current_dir(&self.topsrcdir);
        info!(
            topsrcdir = %self.topsrcdir.display(),
            args = %args.join(" "),
            "running gradle"
        );
        let outcome = run_command_with_timeout(cmd, self.timeout)?;
        Ok(DispatchOutcome {
            code: outcome.status.code(),
            timed_out: outcome.timed_out,
        })
    }
}

/// Prints the command line instead of running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunDispatcher;

impl Dispatcher for DryRunDispatcher {
    fn dispatch(&self, command: &str, args: &[String]) -> Result<DispatchOutcome> {
        println!("{}", render_command_line(command, args));
        Ok(DispatchOutcome::exited(0))
    }
}

/// Render `command` and `args` as a single shell-like line.
///
/// Arguments containing whitespace or quotes are single-quoted.
pub fn render_command_line(command: &str, args: &[String]) -> String {
    std::iter::once(command)
        .chain(args.iter().map(String::as_str))
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');
    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_plain_args() {
        let args = ["-q", "test", "--rerun"].map(str::to_string);
        assert_eq!(render_command_line("gradle", &args), "gradle -q test --rerun");
    }

    #[test]
    fn render_quotes_args_with_spaces() {
        let args = ["-p".to_string(), "my dir".to_string(), "it's".to_string()];
        assert_eq!(
            render_command_line("gradle", &args),
            r"gradle -p 'my dir' 'it'\''s'"
        );
    }

    #[test]
    fn gradle_dispatcher_rejects_other_commands() {
        let dispatcher = GradleDispatcher::from_config(".", &AndroidTestConfig::default());
        let err = dispatcher.dispatch("mach", &[]).expect_err("unknown command");
        assert!(err.to_string().contains("mach"));
    }

    #[cfg(unix)]
    #[test]
    fn gradle_dispatcher_passes_args_and_exit_code() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = AndroidTestConfig {
            gradle: crate::io::config::GradleConfig {
                command: vec![
                    "sh".to_string(),
                    "-c".to_string(),
                    "printf '%s\\n' \"$@\" > args.txt; exit 7".to_string(),
                    "gradle".to_string(),
                ],
            },
            ..AndroidTestConfig::default()
        };
        let dispatcher = GradleDispatcher::from_config(temp.path(), &config);
        let args = ["-q", "--rerun"].map(str::to_string);

        let outcome = dispatcher.dispatch(GRADLE, &args).expect("dispatch");

        assert_eq!(outcome, DispatchOutcome::exited(7));
        let recorded = std::fs::read_to_string(temp.path().join("args.txt")).expect("args");
        assert_eq!(recorded, "-q\n--rerun\n");
    }
}
