use std::io;

use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CliMode, USAGE, load_config, parse_cli_mode, run_apply};

use event_stamp::storage::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    let args = match parse_cli_mode() {
        Ok(CliMode::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliMode::Apply(args)) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = load_config(&args)?;
    setup_logging(&config);

    run_apply(args, &config).await
}

fn setup_logging(config: &Config) {
    let log_dir = config.log_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "event-stamp.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("event-stamp started");
}
