use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{DirectThreadPayload, GroupThreadPayload, SendMessagePayload},
};
use fundlink_core::messaging::{ChatThread, Message, MessagingServiceTrait, NewMessage};

use super::uploads;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadsQuery {
    participant: String,
}

async fn list_threads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThreadsQuery>,
) -> ApiResult<Json<Vec<ChatThread>>> {
    let threads = state.messaging_service.list_threads_for(&query.participant)?;
    Ok(Json(threads))
}

async fn resolve_direct(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DirectThreadPayload>,
) -> ApiResult<Json<ChatThread>> {
    let thread = state
        .messaging_service
        .resolve_or_create_direct(&payload.from, &payload.to)
        .await?;
    Ok(Json(thread))
}

async fn create_group(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GroupThreadPayload>,
) -> ApiResult<Json<ChatThread>> {
    let thread = state
        .messaging_service
        .create_group(&payload.group_name, payload.participants, &payload.creator)
        .await?;
    Ok(Json(thread))
}

async fn send_message(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendMessagePayload>,
) -> ApiResult<Json<Message>> {
    let message = state
        .messaging_service
        .append_message(
            &id,
            NewMessage {
                sender: payload.sender,
                body: payload.body,
                attachment: payload.attachment,
                event_id: payload.event_id,
            },
        )
        .await?;
    Ok(Json(message))
}

/// Multipart image send: stores the file and appends the reference as an
/// attachment message in one request
async fn send_image(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<Message>> {
    let mut sender: Option<String> = None;
    let mut attachment: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("sender") => {
                sender = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            }
            Some("image") => {
                attachment = Some(uploads::store_image(&state.uploads_dir, field).await?);
            }
            _ => {}
        }
    }

    let sender = sender.ok_or_else(|| ApiError::BadRequest("Missing sender field".to_string()))?;
    let attachment =
        attachment.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let message = state
        .messaging_service
        .append_message(
            &id,
            NewMessage {
                sender,
                body: None,
                attachment: Some(attachment),
                event_id: None,
            },
        )
        .await?;
    Ok(Json(message))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chats", get(list_threads))
        .route("/chats/direct", post(resolve_direct))
        .route("/chats/group", post(create_group))
        .route("/chats/{id}/messages", post(send_message))
        .route("/chats/{id}/images", post(send_image))
}
