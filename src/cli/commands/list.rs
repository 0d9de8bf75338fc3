use clap::Subcommand;
use serde_json::json;

use super::contact::CONTACT_COLUMNS;
use super::user::id_of;
use crate::cli::utils::{output_collection, output_record, output_success};
use crate::cli::Session;

const LIST_COLUMNS: &[&str] = &["id", "name"];

#[derive(Subcommand)]
pub enum ListCommands {
    #[command(about = "Create a contact-list")]
    Create { name: String },

    #[command(about = "List your contact-lists")]
    List,

    #[command(about = "Show one contact-list")]
    Get { id: u32 },

    #[command(about = "Delete a contact-list (its contacts are kept)")]
    Delete { id: u32 },

    #[command(about = "Find contact-lists whose name contains a term")]
    Search { term: String },

    #[command(about = "Show the contacts in a contact-list")]
    Contacts { id: u32 },

    #[command(about = "Add a contact to a contact-list")]
    Add {
        #[arg(help = "Contact-list id")]
        list: u32,
        #[arg(help = "Contact id")]
        contact: u32,
    },

    #[command(about = "Remove a contact from a contact-list")]
    Remove {
        #[arg(help = "Contact-list id")]
        list: u32,
        #[arg(help = "Contact id")]
        contact: u32,
    },
}

pub async fn handle(cmd: ListCommands, session: &Session) -> anyhow::Result<()> {
    let client = session.authenticated_client()?;

    match cmd {
        ListCommands::Create { name } => {
            let created = client.post("/api/contact-list", &json!({ "name": name })).await?;
            output_success(
                session.output,
                &format!("Created contact-list {}", id_of(&created)),
                Some(created),
            )
        }
        ListCommands::List => {
            let lists = client.get("/api/contact-list").await?;
            output_collection(session.output, &lists, LIST_COLUMNS, "No contact-lists")
        }
        ListCommands::Get { id } => {
            let list = client.get(&format!("/api/contact-list/{}", id)).await?;
            output_record(session.output, &list)
        }
        ListCommands::Delete { id } => {
            client.delete(&format!("/api/contact-list/{}", id), None).await?;
            output_success(session.output, &format!("Deleted contact-list {}", id), None)
        }
        ListCommands::Search { term } => {
            let lists = client.post("/api/contact-list/search", &json!({ "term": term })).await?;
            output_collection(session.output, &lists, LIST_COLUMNS, "No matching contact-lists")
        }
        ListCommands::Contacts { id } => {
            let contacts = client.get(&format!("/api/contact-list/{}/contact", id)).await?;
            output_collection(session.output, &contacts, CONTACT_COLUMNS, "Contact-list is empty")
        }
        ListCommands::Add { list, contact } => {
            client
                .post(&format!("/api/contact-list/{}/contact", list), &json!({ "id": contact }))
                .await?;
            output_success(
                session.output,
                &format!("Added contact {} to contact-list {}", contact, list),
                None,
            )
        }
        ListCommands::Remove { list, contact } => {
            client
                .delete(&format!("/api/contact-list/{}/contact", list), Some(&json!({ "id": contact })))
                .await?;
            output_success(
                session.output,
                &format!("Removed contact {} from contact-list {}", contact, list),
                None,
            )
        }
    }
}
