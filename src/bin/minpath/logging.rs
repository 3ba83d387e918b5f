use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr subscriber.
///
/// The filter comes from `MINPATH_LOG` if set, otherwise from
/// [`filter_directive`].
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env("MINPATH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// `--log-level` wins over `--verbose`. A bare level applies to this crate
/// only, a full directive (containing `=`) is used as is.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("minpath={level}"),
        (true, None) => "minpath=debug".to_string(),
        (false, None) => "minpath=warn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_warn() {
        assert_eq!(filter_directive(false, None), "minpath=warn");
    }

    #[test]
    fn verbose_debug() {
        assert_eq!(filter_directive(true, None), "minpath=debug");
    }

    #[test]
    fn log_level_overrides_verbose() {
        assert_eq!(filter_directive(true, Some("trace")), "minpath=trace");
        assert_eq!(filter_directive(false, Some("error")), "minpath=error");
    }

    #[test]
    fn full_directive_kept() {
        assert_eq!(
            filter_directive(true, Some("minpath=info,warn")),
            "minpath=info,warn"
        );
    }

    #[test]
    fn directive_parses() {
        for directive in [
            filter_directive(false, None),
            filter_directive(true, None),
            filter_directive(false, Some("trace")),
        ] {
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }
}
