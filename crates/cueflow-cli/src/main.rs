mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::argparse::get_args();
    setup_tracing(args.verbose);
    tracing::trace!("Args: {:?}", args);

    cli::run_cli(&args).await.map_err(|e| {
        tracing::error!("{:?}", e);
        anyhow::anyhow!("unrecoverable {} failure", env!("CARGO_PKG_NAME"))
    })
}

/// Diagnostics go to stderr so stdout stays parseable JSON/subtitle text.
fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    // Avoid panics if already initialized (tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
