//! Log subscriber installation.
//!
//! # Design
//! - One entry point installs a `tracing-subscriber` fmt layer; later calls
//!   are no-ops, so tests and the wasm entry point can both call it.
//! - In the browser, formatted lines go to the developer console; natively
//!   they go to stderr.
//! - Timestamps and ANSI colours are disabled: the console adds its own and
//!   renders neither.

use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Filter directive used by the wasm entry point.
pub const DEFAULT_LOG_LEVEL: &str = "info";

static INSTALLED: OnceCell<String> = OnceCell::new();

/// Install the global subscriber with `directive` (an `EnvFilter` string).
///
/// # Errors
///
/// Returns an error if the directive does not parse or another subscriber
/// was installed outside this module.
pub fn init_logging(directive: &str) -> Result<()> {
    let installed =
        INSTALLED.get_or_try_init(|| install(directive).map(|()| directive.to_string()))?;
    if installed != directive {
        tracing::debug!(installed = %installed, requested = directive, "logging already initialised");
    }
    Ok(())
}

fn install(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|err| anyhow!("invalid log directive '{directive}': {err}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(writer::make)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(target_arch = "wasm32")]
mod writer {
    use std::io::{self, Write};

    /// Buffers one formatted event and emits it on drop.
    #[derive(Default)]
    pub(super) struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    pub(super) fn make() -> ConsoleWriter {
        ConsoleWriter::default()
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod writer {
    pub(super) fn make() -> std::io::Stderr {
        std::io::stderr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_a_no_op() -> Result<()> {
        init_logging("debug")?;
        init_logging("warn")?;
        assert_eq!(INSTALLED.get().map(String::as_str), Some("debug"));
        Ok(())
    }
}
