use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::config::{load_environment_config, save_environment_config};
use crate::cli::utils::{output_success, resolve_password};
use crate::cli::{OutputFormat, Session};

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Register a new account")]
    Register {
        #[arg(help = "Username")]
        username: String,
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (falls back to ADDRESSBOOK_PASSWORD)")]
        password: Option<String>,
    },

    #[command(about = "Log in and store the token")]
    Login {
        #[arg(help = "Username, or email with --email")]
        login: String,
        #[arg(long, help = "Treat the login as an email address")]
        email: bool,
        #[arg(long, help = "Password (falls back to ADDRESSBOOK_PASSWORD)")]
        password: Option<String>,
    },

    #[command(about = "Forget the stored token")]
    Logout,

    #[command(about = "Show who is logged in")]
    Status,
}

pub async fn handle(cmd: UserCommands, session: &Session) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Register { username, email, password } => {
            let password = resolve_password(password)?;
            let body = json!({ "username": username, "email": email, "password": password });

            let created = session.client()?.post("/api/user", &body).await?;
            output_success(
                session.output,
                &format!("Registered user '{}' with id {}", username, created["id"]),
                Some(created),
            )
        }
        UserCommands::Login { login, email, password } => {
            let password = resolve_password(password)?;
            let body = if email {
                json!({ "email": login, "password": password })
            } else {
                json!({ "username": login, "password": password })
            };

            let response = session.client()?.post("/api/user/token", &body).await?;
            let token = response["token"]
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("server response did not include a token"))?;
            let username = response["user"]["username"].as_str().unwrap_or(&login).to_string();

            let mut env = load_environment_config()?;
            env.login(username.clone(), token.to_string());
            save_environment_config(&env)?;

            output_success(
                session.output,
                &format!("Logged in as '{}'", username),
                Some(json!({ "user": response["user"] })),
            )
        }
        UserCommands::Logout => {
            let mut env = load_environment_config()?;
            env.logout();
            save_environment_config(&env)?;
            output_success(session.output, "Logged out", None)
        }
        UserCommands::Status => {
            let env = load_environment_config()?;
            match session.output {
                OutputFormat::Json => {
                    let status = json!({
                        "logged_in": env.token.is_some(),
                        "username": env.username,
                        "server": env.server_url,
                        "logged_in_at": env.logged_in_at,
                    });
                    println!("{}", serde_json::to_string_pretty(&status)?);
                }
                OutputFormat::Text => match (&env.username, &env.token) {
                    (Some(username), Some(_)) => {
                        println!("Logged in as '{}'", username);
                        if let Some(at) = env.logged_in_at {
                            println!("Since: {}", at.to_rfc3339());
                        }
                    }
                    _ => println!("Not logged in"),
                },
            }
            Ok(())
        }
    }
}

/// Ids come back as JSON numbers; anything else is reported as-is
pub(crate) fn id_of(value: &Value) -> String {
    match value.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => "?".to_string(),
    }
}
