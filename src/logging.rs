//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the result line. `SSNIT_LOG`
//! takes a full `tracing-subscriber` filter directive and wins over `-v`.

use tracing_subscriber::EnvFilter;

use crate::env::Env;

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter from `SSNIT_LOG`, falling back to the verbosity level.
pub fn build_filter(verbosity: u8, env: &Env) -> EnvFilter {
    if let Ok(directive) = env.var(crate::constants::ENV_LOG) {
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!(
                "Warning: ignoring invalid {} value {directive:?}: {e}",
                crate::constants::ENV_LOG
            ),
        }
    }
    EnvFilter::new(default_directive(verbosity))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8, env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity, env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "debug");
    }

    #[test]
    fn env_directive_takes_priority() {
        let env = Env::mock([("SSNIT_LOG", "ssnit=trace")]);
        let filter = build_filter(0, &env);
        assert_eq!(filter.to_string(), "ssnit=trace");
    }

    #[test]
    fn falls_back_to_verbosity() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(build_filter(1, &env).to_string(), "info");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(0, &env);
        init(2, &env);
    }
}
