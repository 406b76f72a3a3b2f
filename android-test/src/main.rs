//! `android-test`: run Android unit tests through gradle.
//!
//! Translates test file paths into gradle `--tests` filters for fenix, focus or
//! android-components and runs gradle from the source root.

use std::path::PathBuf;

use android_test::android_test::{AndroidTestRequest, run_android_test};
use android_test::core::subproject::Subproject;
use android_test::core::types::DispatchOutcome;
use android_test::exit_codes;
use android_test::io::config::{CONFIG_FILE_NAME, load_config};
use android_test::io::dispatch::{DryRunDispatcher, GradleDispatcher};
use android_test::io::test_objects::load_test_objects;
use android_test::logging;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

#[derive(Parser)]
#[command(name = "android-test", version, about = "Run Android tests.")]
struct Cli {
    /// Android subproject to run tests for (`ac` is short for `android-components`).
    #[arg(long, value_enum, default_value_t = Subproject::Fenix)]
    subproject: Subproject,

    /// Test to run.
    #[arg(long)]
    test: Option<String>,

    /// JSON file with additional tests to run (`[{"name": "<path>"}, ...]`).
    #[arg(long, value_name = "FILE")]
    tests_from: Option<PathBuf>,

    /// Source root gradle runs from; subproject paths are relative to it.
    #[arg(long, value_name = "DIR")]
    topsrcdir: Option<PathBuf>,

    /// Config file (defaults to `<topsrcdir>/.android-test.toml`).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the gradle command instead of running it.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let topsrcdir = match cli.topsrcdir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let test_objects = match &cli.tests_from {
        Some(path) => load_test_objects(path)?,
        None => Vec::new(),
    };
    // The request carries the selector spelling so library callers can pass
    // arbitrary selectors; clap has already rejected unknown ones here.
    let request = AndroidTestRequest {
        subproject: cli.subproject.to_string(),
        test: cli.test,
        test_objects,
    };

    let outcome = if cli.dry_run {
        run_android_test(&DryRunDispatcher, &request)?
    } else {
        let config_path = cli
            .config
            .unwrap_or_else(|| topsrcdir.join(CONFIG_FILE_NAME));
        let config = load_config(&config_path)?;
        let dispatcher = GradleDispatcher::from_config(topsrcdir, &config);
        run_android_test(&dispatcher, &request)?
    };
    Ok(exit_code(outcome))
}

fn exit_code(outcome: Option<DispatchOutcome>) -> i32 {
    match outcome {
        None => exit_codes::OK,
        Some(DispatchOutcome {
            timed_out: true, ..
        }) => exit_codes::TIMED_OUT,
        Some(DispatchOutcome {
            code: Some(code), ..
        }) => code,
        Some(DispatchOutcome { code: None, .. }) => {
            warn!("gradle terminated by signal");
            exit_codes::INVALID
        }
    }
}
