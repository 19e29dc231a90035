//! Log output for index loading.
//!
//! Decoding emits `debug!` per namespace and one `info!` per finished index.
//! [`init`] routes those events to stderr, or to the captured test output
//! when running under `cargo test` / `cargo nextest`.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Whether the process looks like a test binary.
fn under_test_runner() -> bool {
    std::env::var_os("NEXTEST").is_some() || std::env::var_os("CARGO_TARGET_TMPDIR").is_some()
}

/// Level applied when `RUST_LOG` says nothing more specific.
const fn default_level(under_test: bool) -> Level {
    if under_test { Level::DEBUG } else { Level::INFO }
}

/// Build the event filter: `RUST_LOG` directives plus the default level.
fn event_filter(under_test: bool) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(default_level(under_test).into())
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let under_test = under_test_runner();
        let builder = tracing_subscriber::fmt()
            .with_env_filter(event_filter(under_test))
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        let installed = if under_test {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = installed {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(true, Level::DEBUG)]
    #[case(false, Level::INFO)]
    fn test_default_level(#[case] under_test: bool, #[case] expected: Level) {
        check!(default_level(under_test) == expected);
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        check!(INIT.is_completed());
        tracing::debug!("logging initialized twice without panicking");
    }
}
