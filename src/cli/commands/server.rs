use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::{load_environment_config, resolve_server_url, save_environment_config};
use crate::cli::utils::output_success;
use crate::cli::{OutputFormat, Session};

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Select the server subsequent commands talk to")]
    Set {
        #[arg(help = "Server URL, e.g. http://localhost:8081")]
        url: String,
    },

    #[command(about = "Show the selected server and its health")]
    Show,
}

pub async fn handle(cmd: ServerCommands, session: &Session) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Set { url } => {
            // Parse before saving so a typo never lands in env.json
            let client = ApiClient::new(&url, None)?;
            let mut env = load_environment_config()?;

            let changed = env.server_url.as_deref() != Some(client.base_url().as_str());
            env.server_url = Some(client.base_url().to_string());
            if changed {
                // Tokens are only valid on the server that issued them
                env.logout();
            }
            save_environment_config(&env)?;

            output_success(
                session.output,
                &format!("Server set to {}", client.base_url()),
                Some(json!({ "server": client.base_url().as_str() })),
            )
        }
        ServerCommands::Show => {
            let env = load_environment_config()?;
            let url = resolve_server_url(session.server_override.as_deref(), &env);
            let client = ApiClient::new(&url, None)?;

            let health = client.get("/health").await;
            let status = match &health {
                Ok(body) => body.get("status").and_then(Value::as_str).unwrap_or("unknown").to_string(),
                Err(e) => {
                    tracing::debug!("Health check failed: {}", e);
                    "down".to_string()
                }
            };

            match session.output {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({ "server": url, "status": status }))?
                    );
                }
                OutputFormat::Text => {
                    println!("Server: {}", url);
                    println!("Status: {}", status);
                }
            }
            Ok(())
        }
    }
}
