// services/message_service.rs

use deadpool_postgres::Pool;
use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{ApiError, ApiResult},
    models::message::{CreateMessageRequest, Message, UpdateMessageRequest},
    repositories::message_repository::MessageRepository,
};

pub async fn list_messages(pool: Arc<Pool>) -> ApiResult<Vec<Message>> {
    let client = pool.get().await?;
    let messages = MessageRepository::list(&client).await?;
    Ok(messages)
}

pub async fn create_message(pool: Arc<Pool>, payload: CreateMessageRequest) -> ApiResult<Message> {
    // Validate before touching the pool so bad input never costs a checkout.
    payload.validate()?;

    let client = pool.get().await?;
    let message = MessageRepository::insert(&client, &payload.content, &payload.author).await?;

    tracing::debug!(id = message.id, "message created");
    Ok(message)
}

pub async fn get_message(pool: Arc<Pool>, id: i64) -> ApiResult<Message> {
    let client = pool.get().await?;
    MessageRepository::find_by_id(&client, id)
        .await?
        .ok_or(ApiError::NotFound(id))
}

pub async fn update_message(
    pool: Arc<Pool>,
    id: i64,
    payload: UpdateMessageRequest,
) -> ApiResult<Message> {
    payload.validate()?;

    let client = pool.get().await?;
    MessageRepository::update(
        &client,
        id,
        payload.content.as_deref(),
        payload.author.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound(id))
}

pub async fn delete_message(pool: Arc<Pool>, id: i64) -> ApiResult<()> {
    let client = pool.get().await?;
    let deleted = MessageRepository::delete(&client, id).await?;

    if !deleted {
        return Err(ApiError::NotFound(id));
    }

    tracing::debug!(id, "message deleted");
    Ok(())
}
