use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::toml_config::LogFormat;

fn default_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "course_storefront=debug,info"
    } else {
        "course_storefront=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

pub fn init_cli_logger(verbose: bool, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(default_filter(verbose));

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        // one object per line, for piping into log collectors
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}
