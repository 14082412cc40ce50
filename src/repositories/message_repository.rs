// repositories/message_repository.rs

use deadpool_postgres::Client;
use tokio_postgres::Error;

use crate::models::message::Message;

fn row_to_message(row: &tokio_postgres::Row) -> Message {
    Message {
        id: row.get(0),
        content: row.get(1),
        author: row.get(2),
        created_at: row.get(3),
    }
}

pub struct MessageRepository;

impl MessageRepository {
    /// Fetches all messages, most recent first. `id` breaks ties so the
    /// order is total even when two rows share a timestamp.
    pub async fn list(client: &Client) -> Result<Vec<Message>, Error> {
        let query = "
            SELECT id, content, author, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
        ";
        let rows = client.query(query, &[]).await?;

        Ok(rows.iter().map(row_to_message).collect())
    }

    /// Inserts a new message and returns the stored row.
    pub async fn insert(client: &Client, content: &str, author: &str) -> Result<Message, Error> {
        let query = "
            INSERT INTO messages (content, author)
            VALUES ($1, $2)
            RETURNING id, content, author, created_at
        ";
        let row = client.query_one(query, &[&content, &author]).await?;

        Ok(row_to_message(&row))
    }

    /// Retrieves a message by its ID
    pub async fn find_by_id(client: &Client, id: i64) -> Result<Option<Message>, Error> {
        let query = "
            SELECT id, content, author, created_at
            FROM messages
            WHERE id = $1
        ";
        let row = client.query_opt(query, &[&id]).await?;

        Ok(row.as_ref().map(row_to_message))
    }

    /// Applies a partial update; omitted fields keep their stored value.
    /// `id` and `created_at` are never touched. Returns None when the id
    /// does not exist.
    pub async fn update(
        client: &Client,
        id: i64,
        content: Option<&str>,
        author: Option<&str>,
    ) -> Result<Option<Message>, Error> {
        let query = "
            UPDATE messages
            SET content = COALESCE($2, content),
                author = COALESCE($3, author)
            WHERE id = $1
            RETURNING id, content, author, created_at
        ";
        let row = client.query_opt(query, &[&id, &content, &author]).await?;

        Ok(row.as_ref().map(row_to_message))
    }

    /// Deletes a message by its ID, reporting whether a row was removed.
    pub async fn delete(client: &Client, id: i64) -> Result<bool, Error> {
        let query = "DELETE FROM messages WHERE id = $1";
        let deleted = client.execute(query, &[&id]).await?;

        Ok(deleted > 0)
    }
}
