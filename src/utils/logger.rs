use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise this crate logs at info, or debug when verbose.
fn order_desk_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("order_desk=debug,info")
        } else {
            EnvFilter::new("order_desk=info")
        }
    })
}

// Both loggers write to stderr; stdout carries only the JSON responses.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(order_desk_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(order_desk_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_follow_verbosity() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(order_desk_filter(false).to_string(), "order_desk=info");
        assert!(order_desk_filter(true).to_string().contains("order_desk=debug"));
    }
}
