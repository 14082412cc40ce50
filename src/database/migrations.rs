use tokio_postgres::Client;

// Applies the schema migrations the service needs. Everything is written
// as IF NOT EXISTS so startup is safe to repeat.
pub async fn apply_migrations(client: &Client) -> Result<(), String> {
    create_tables(client).await?;
    Ok(())
}

async fn create_tables(client: &Client) -> Result<(), String> {
    // The 'messages' table: id and created_at are assigned by the database.
    let create_messages_table_query = "
        CREATE TABLE IF NOT EXISTS messages (
            id BIGSERIAL PRIMARY KEY,
            content TEXT NOT NULL,
            author VARCHAR(100) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
    ";
    client
        .execute(create_messages_table_query, &[])
        .await
        .map_err(|e| format!("Error creating messages table: {}", e))?;

    Ok(())
}
