use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or names no global level.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the log filter from `RUST_LOG`-style directives.
///
/// Invalid directives are dropped; an empty string falls back to [`DEFAULT_LEVEL`].
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives)
}

/// Install the stderr subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directives))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("unset", "", LevelFilter::WARN)]
    #[case("debug", "debug", LevelFilter::DEBUG)]
    #[case("info", "info", LevelFilter::INFO)]
    #[case("error", "error", LevelFilter::ERROR)]
    #[case("invalid level", "poke_battle=shouting", LevelFilter::WARN)]
    fn test_global_level_follows_directives(
        #[case] desc: &str,
        #[case] directives: &str,
        #[case] expected: LevelFilter,
    ) {
        let filter = env_filter(directives);
        assert_eq!(filter.max_level_hint(), Some(expected), "{}", desc);
    }

    #[test]
    fn test_target_directive_does_not_add_global_warn() {
        let filter = env_filter("poke_battle=debug");
        assert_eq!(filter.to_string(), "poke_battle=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
