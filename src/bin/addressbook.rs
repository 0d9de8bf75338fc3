use addressbook_api::cli::{utils::output_error, Cli, OutputFormat};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = OutputFormat::from_cli(&cli);

    if let Err(e) = addressbook_api::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => output_error(output, &format!("{e:?}")),
            _ => output_error(output, &format!("{e}")),
        }
        std::process::exit(1);
    }

    Ok(())
}
