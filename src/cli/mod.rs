pub mod client;
pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(about = "Address Book CLI - Command-line client for the Address Book API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Server URL for this invocation (overrides the saved one)")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Remote server selection")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },

    #[command(about = "Account registration and token management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Contact operations")]
    Contact {
        #[command(subcommand)]
        cmd: commands::contact::ContactCommands,
    },

    #[command(about = "Contact-list operations and membership")]
    List {
        #[command(subcommand)]
        cmd: commands::list::ListCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Per-invocation settings shared by every command handler
#[derive(Debug, Clone)]
pub struct Session {
    pub output: OutputFormat,
    pub server_override: Option<String>,
}

impl Session {
    /// API client for the selected server, carrying the saved token if any
    pub fn client(&self) -> anyhow::Result<client::ApiClient> {
        let env = config::load_environment_config()?;
        let server = config::resolve_server_url(self.server_override.as_deref(), &env);
        client::ApiClient::new(&server, env.token)
    }

    /// Like `client`, but fails early when nobody is logged in
    pub fn authenticated_client(&self) -> anyhow::Result<client::ApiClient> {
        let client = self.client()?;
        if !client.has_token() {
            anyhow::bail!("Not logged in; run `addressbook user login` first");
        }
        Ok(client)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session {
        output: OutputFormat::from_cli(&cli),
        server_override: cli.server,
    };

    match cli.command {
        Commands::Server { cmd } => commands::server::handle(cmd, &session).await,
        Commands::User { cmd } => commands::user::handle(cmd, &session).await,
        Commands::Contact { cmd } => commands::contact::handle(cmd, &session).await,
        Commands::List { cmd } => commands::list::handle(cmd, &session).await,
    }
}
