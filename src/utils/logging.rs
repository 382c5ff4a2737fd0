// ============================================================================
// Logging Bootstrap
// Installs a tracing-subscriber fmt subscriber at most once per process
// ============================================================================
//
// The subscriber is built without the `log` bridge, so a `log` logger
// installed elsewhere in the process does not block it.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Directive of the first call, with that call's outcome.
static LOGGING_STATE: OnceLock<(String, Result<(), String>)> = OnceLock::new();

/// Install a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_directive` (for example
/// `"japanese_number=debug"`).
///
/// Calling again with the same directive returns the first call's result.
/// A different directive, or a subscriber installed by someone else, is
/// reported as an error.
pub fn init_logging(default_directive: &str) -> Result<(), String> {
    let (active, outcome) = LOGGING_STATE.get_or_init(|| {
        (
            default_directive.to_string(),
            install_subscriber(default_directive),
        )
    });

    if active != default_directive {
        return Err(format!(
            "logging already initialized with `{}`; refusing to switch to `{}`",
            active, default_directive
        ));
    }
    outcome.clone()
}

fn install_subscriber(default_directive: &str) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|err| format!("invalid log directive `{}`: {}", default_directive, err))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("failed to install subscriber: {}", err))?;

    tracing::debug!(directive = default_directive, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;
    use std::thread;

    fn any_byte(_: u8) -> bool {
        true
    }

    #[test]
    fn test_init_is_idempotent() {
        // The quickcheck runner installs a `log` logger for the process
        QuickCheck::new().tests(1).quickcheck(any_byte as fn(u8) -> bool);

        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| init_logging("japanese_number=trace")))
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        init_logging("japanese_number=trace").unwrap();
        assert!(init_logging("japanese_number=info").is_err());

        // Parsing still works with a subscriber recording trace events
        assert_eq!(crate::parse("二百三十四").unwrap(), 234);
    }
}
