use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{FollowPayload, LoginPayload, Profile, ProfileUpdatePayload, RegisterPayload},
};
use fundlink_core::accounts::{AccountServiceTrait, AccountUpdate, NewAccount};

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> ApiResult<Json<Profile>> {
    let created = state
        .account_service
        .register(NewAccount {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            bio: payload.bio,
        })
        .await?;
    info!("Registered account {}", created.email);
    Ok(Json(Profile::from(created)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> ApiResult<Json<Profile>> {
    let account = state
        .account_service
        .authenticate(&payload.email, &payload.password)
        .await?;
    Ok(Json(Profile::from(account)))
}

async fn get_profile(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Profile>> {
    let account = state.account_service.get_account(&email)?;
    Ok(Json(Profile::from(account)))
}

async fn update_profile(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProfileUpdatePayload>,
) -> ApiResult<Json<Profile>> {
    let updated = state
        .account_service
        .update_profile(
            &email,
            AccountUpdate {
                name: payload.name,
                bio: payload.bio,
            },
        )
        .await?;
    Ok(Json(Profile::from(updated)))
}

async fn follow(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FollowPayload>,
) -> ApiResult<Json<Profile>> {
    let follower = state.account_service.follow(&payload.follower, &email).await?;
    Ok(Json(Profile::from(follower)))
}

async fn unfollow(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FollowPayload>,
) -> ApiResult<Json<Profile>> {
    let follower = state
        .account_service
        .unfollow(&payload.follower, &email)
        .await?;
    Ok(Json(Profile::from(follower)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile/{email}", get(get_profile).put(update_profile))
        .route("/profile/{email}/follow", post(follow).delete(unfollow))
}
