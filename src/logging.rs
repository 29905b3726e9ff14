// SPDX-License-Identifier: MIT
//! Subscriber setup for the binary. Libraries only emit events.

use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `WB_LOG=wb_tokens=debug`.
pub const ENV_VAR: &str = "WB_LOG";
const DEFAULT_DIRECTIVES: &str = "warn";

/// `--verbose` wins over the environment; an empty variable means default.
fn directives(verbose: bool, env: Option<String>) -> String {
    if verbose {
        return "debug".to_owned();
    }
    env.filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_owned())
}

fn env_filter(verbose: bool) -> EnvFilter {
    let directives = directives(verbose, std::env::var(ENV_VAR).ok());
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the stderr fmt subscriber. Stdout carries only command output.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn verbose_overrides_environment() {
        assert_eq!(directives(true, Some("error".into())), "debug");
        assert_eq!(env_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn environment_or_default() {
        assert_eq!(directives(false, None), "warn");
        assert_eq!(directives(false, Some("  ".into())), "warn");
        assert_eq!(directives(false, Some("wb_tokens=trace".into())), "wb_tokens=trace");
    }
}
