use clap::Subcommand;
use serde_json::json;

use super::user::id_of;
use crate::cli::utils::{output_collection, output_record, output_success};
use crate::cli::Session;

pub const CONTACT_COLUMNS: &[&str] = &["id", "name", "surname", "email"];

#[derive(Subcommand)]
pub enum ContactCommands {
    #[command(about = "Create a contact")]
    Create {
        name: String,
        surname: String,
        email: String,
    },

    #[command(about = "List your contacts")]
    List,

    #[command(about = "Show one contact")]
    Get { id: u32 },

    #[command(about = "Delete a contact")]
    Delete { id: u32 },
}

pub async fn handle(cmd: ContactCommands, session: &Session) -> anyhow::Result<()> {
    let client = session.authenticated_client()?;

    match cmd {
        ContactCommands::Create { name, surname, email } => {
            let body = json!({ "name": name, "surname": surname, "email": email });
            let created = client.post("/api/contact", &body).await?;
            output_success(
                session.output,
                &format!("Created contact {}", id_of(&created)),
                Some(created),
            )
        }
        ContactCommands::List => {
            let contacts = client.get("/api/contact").await?;
            output_collection(session.output, &contacts, CONTACT_COLUMNS, "No contacts")
        }
        ContactCommands::Get { id } => {
            let contact = client.get(&format!("/api/contact/{}", id)).await?;
            output_record(session.output, &contact)
        }
        ContactCommands::Delete { id } => {
            client.delete(&format!("/api/contact/{}", id), None).await?;
            output_success(session.output, &format!("Deleted contact {}", id), None)
        }
    }
}
