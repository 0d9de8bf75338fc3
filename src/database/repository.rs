use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Contact, ContactList, NewContact, User};
use crate::database::store::AddressBookStore;
use crate::types::{RecordId, UserId};

const USER_COLUMNS: &str = "id, username, email, password";
const CONTACT_COLUMNS: &str = "id, user_id, name, surname, email";
const CONTACT_LIST_COLUMNS: &str = "id, user_id, name";

/// PostgreSQL-backed store over the `schema.sql` tables
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressBookStore for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }

    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserId, DatabaseError> {
        let id = sqlx::query_scalar::<_, UserId>(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_contact(&self, owner: UserId, contact: &NewContact) -> Result<RecordId, DatabaseError> {
        let id = sqlx::query_scalar::<_, RecordId>(
            "INSERT INTO contacts (user_id, name, surname, email) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(owner)
        .bind(&contact.name)
        .bind(&contact.surname)
        .bind(&contact.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_contact(&self, id: RecordId) -> Result<Option<Contact>, DatabaseError> {
        let sql = format!("SELECT {} FROM contacts WHERE id = $1", CONTACT_COLUMNS);
        let contact = sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn delete_contact(&self, id: RecordId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn contacts_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, DatabaseError> {
        let sql = format!("SELECT {} FROM contacts WHERE user_id = $1 ORDER BY id", CONTACT_COLUMNS);
        let contacts = sqlx::query_as::<_, Contact>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(contacts)
    }

    async fn create_contact_list(&self, owner: UserId, name: &str) -> Result<RecordId, DatabaseError> {
        let id = sqlx::query_scalar::<_, RecordId>(
            "INSERT INTO contact_lists (user_id, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(owner)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn get_contact_list(&self, id: RecordId) -> Result<Option<ContactList>, DatabaseError> {
        let sql = format!("SELECT {} FROM contact_lists WHERE id = $1", CONTACT_LIST_COLUMNS);
        let list = sqlx::query_as::<_, ContactList>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(list)
    }

    async fn delete_contact_list(&self, id: RecordId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM contact_lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn contact_lists_by_owner(&self, owner: UserId) -> Result<Vec<ContactList>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM contact_lists WHERE user_id = $1 ORDER BY id",
            CONTACT_LIST_COLUMNS
        );
        let lists = sqlx::query_as::<_, ContactList>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(lists)
    }

    async fn search_contact_lists(&self, owner: UserId, term: &str) -> Result<Vec<ContactList>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM contact_lists WHERE user_id = $1 AND name ILIKE '%' || $2 || '%' ORDER BY id",
            CONTACT_LIST_COLUMNS
        );
        let lists = sqlx::query_as::<_, ContactList>(&sql)
            .bind(owner)
            .bind(term)
            .fetch_all(&self.pool)
            .await?;
        Ok(lists)
    }

    async fn contacts_of_list(&self, list: RecordId) -> Result<Vec<Contact>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM contacts WHERE id IN \
             (SELECT contact FROM contact_list_entries WHERE contact_list = $1) ORDER BY id",
            CONTACT_COLUMNS
        );
        let contacts = sqlx::query_as::<_, Contact>(&sql)
            .bind(list)
            .fetch_all(&self.pool)
            .await?;
        Ok(contacts)
    }

    async fn add_list_entry(&self, list: RecordId, contact: RecordId) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO contact_list_entries (contact_list, contact) VALUES ($1, $2)")
            .bind(list)
            .bind(contact)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_list_entry(&self, list: RecordId, contact: RecordId) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM contact_list_entries WHERE contact_list = $1 AND contact = $2")
            .bind(list)
            .bind(contact)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
