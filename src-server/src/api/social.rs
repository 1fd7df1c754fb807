use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CommentPayload, LikePayload, NewEventPayload, NewPostPayload, RsvpPayload},
};
use fundlink_core::social::{Event, NewEvent, NewPost, Post, SocialServiceTrait};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostsQuery {
    #[serde(default)]
    author: Option<String>,
}

async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostsQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = match query.author.as_deref() {
        Some(author) => state.social_service.list_posts_by(author)?,
        None => state.social_service.list_posts()?,
    };
    Ok(Json(posts))
}

async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPostPayload>,
) -> ApiResult<Json<Post>> {
    let post = state
        .social_service
        .create_post(NewPost {
            author: payload.author,
            body: payload.body,
            image: payload.image,
        })
        .await?;
    Ok(Json(post))
}

async fn toggle_like(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LikePayload>,
) -> ApiResult<Json<Post>> {
    let post = state.social_service.toggle_like(&id, &payload.account).await?;
    Ok(Json(post))
}

async fn add_comment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CommentPayload>,
) -> ApiResult<Json<Post>> {
    let post = state
        .social_service
        .add_comment(&id, &payload.author, &payload.body)
        .await?;
    Ok(Json(post))
}

async fn list_events(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Event>>> {
    let events = state.social_service.list_events()?;
    Ok(Json(events))
}

async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewEventPayload>,
) -> ApiResult<Json<Event>> {
    let event = state
        .social_service
        .create_event(NewEvent {
            organizer: payload.organizer,
            name: payload.name,
            description: payload.description,
            starts_at: payload.starts_at,
        })
        .await?;
    Ok(Json(event))
}

async fn rsvp(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RsvpPayload>,
) -> ApiResult<Json<Event>> {
    let event = state.social_service.rsvp(&id, &payload.account).await?;
    Ok(Json(event))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}/like", post(toggle_like))
        .route("/posts/{id}/comments", post(add_comment))
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}/rsvp", post(rsvp))
}
