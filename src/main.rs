use clap::Parser;
use interfly_lib::cli::Cli;

// One logical thread of control: the listings request is the only suspension point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = interfly_lib::bootstrap::tracing::init_tracing_subscriber(cli.log_file) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    interfly_lib::run(cli, &mut out).await
}
