#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Press-kit runtime entry point.
//!
//! On wasm32 this boots the page. Natively it offers `check`, which runs the
//! same parsing and validation the page performs against a local
//! `config.json`, so a broken document is caught before it is deployed.

#[cfg(target_arch = "wasm32")]
fn main() {
    presskit_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<std::process::ExitCode> {
    use clap::Parser;

    native::run(&native::Cli::parse())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};
    use presskit_config::{Configuration, validate};
    use presskit_ui::telemetry::{DEFAULT_LOG_LEVEL, init_logging};

    #[derive(Debug, Parser)]
    #[command(
        name = "presskit",
        about = "Native tooling for the press-kit runtime (the page itself runs as wasm32)"
    )]
    pub(super) struct Cli {
        /// Log filter directive, e.g. `debug` or `presskit_config=debug`.
        #[arg(long, global = true, env = "PRESSKIT_LOG", default_value = DEFAULT_LOG_LEVEL)]
        log_level: String,
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Parse a configuration document and list every finding.
        Check {
            /// Path to the document, usually `config.json`.
            path: PathBuf,
            /// Exit with a failure status when any finding is reported.
            #[arg(long)]
            strict: bool,
        },
    }

    pub(super) fn run(cli: &Cli) -> Result<ExitCode> {
        init_logging(&cli.log_level)?;
        match &cli.command {
            Command::Check { path, strict } => {
                let findings = check_file(path, &mut io::stdout().lock())?;
                Ok(if *strict && findings > 0 {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                })
            }
        }
    }

    fn check_file(path: &Path, out: &mut impl Write) -> Result<usize> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        check_document(&raw, out).with_context(|| format!("{} is unusable", path.display()))
    }

    /// Writes one line per finding and returns how many there were.
    fn check_document(raw: &str, out: &mut impl Write) -> Result<usize> {
        let config = Configuration::from_json(raw)?;
        let findings = validate(&config);
        for finding in &findings {
            writeln!(out, "{finding}")?;
        }
        tracing::info!(
            sections = config.sections().len(),
            findings = findings.len(),
            "configuration checked"
        );
        Ok(findings.len())
    }

}
