//! HTTP handlers. Each one parses, takes the store lock once, and maps
//! the result to JSON; the actual rules live in the store.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use tracing::info;

use mockbook_common::{
    Ack, LikeRequest, LoginRequest, LoginResponse, NewComment, NewFriendRequest, NewPost,
    UnreadCount, UserUpdate,
};

use crate::error::Result;
use crate::state::State;

fn ok() -> Json<Ack> {
    Json(Ack {
        success: true,
        message: None,
    })
}

// ---- auth / users ----

pub async fn login(
    Extension(state): Extension<State>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let user = state.read(|store| store.login(&payload.email, &payload.password))?;
    info!("login: {}", user.id);
    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

pub async fn get_users(Extension(state): Extension<State>) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.users())))
}

pub async fn get_user(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.user(&id))?))
}

pub async fn update_user(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.write(|store| store.update_user(&id, payload))?))
}

// ---- posts ----

pub async fn get_posts(Extension(state): Extension<State>) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.posts())))
}

pub async fn create_post(
    Extension(state): Extension<State>,
    Json(payload): Json<NewPost>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.write(|store| store.create_post(payload))))
}

pub async fn like_post(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
    Json(payload): Json<LikeRequest>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.write(|store| store.like_post(&id, &payload))?))
}

pub async fn comment_post(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
    Json(payload): Json<NewComment>,
) -> Result<impl IntoResponse> {
    Ok(Json(
        state.write(|store| store.comment_post(&id, payload))?,
    ))
}

pub async fn delete_post(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.write(|store| store.delete_post(&id))?;
    Ok(Json(Ack {
        success: true,
        message: Some(String::from("Post deleted")),
    }))
}

// ---- stories ----

pub async fn get_stories(Extension(state): Extension<State>) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.stories())))
}

// ---- friends ----

pub async fn get_friends(
    Extension(state): Extension<State>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.friends_of(&user_id))))
}

pub async fn get_friend_requests(
    Extension(state): Extension<State>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.pending_requests_to(&user_id))))
}

pub async fn get_sent_friend_requests(
    Extension(state): Extension<State>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(
        state.read(|store| store.pending_requests_from(&user_id)),
    ))
}

pub async fn friendship_status(
    Extension(state): Extension<State>,
    Path((user_id, target_id)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| mockbook_common::FriendshipStatus {
        is_friend: store.are_friends(&user_id, &target_id),
        has_pending_request: store.has_pending_request(&user_id, &target_id),
    })))
}

pub async fn send_friend_request(
    Extension(state): Extension<State>,
    Json(payload): Json<NewFriendRequest>,
) -> Result<impl IntoResponse> {
    info!(
        "friend request: {} -> {}",
        payload.from_user.id, payload.to_user.id
    );
    Ok(Json(state.write(|store| store.send_friend_request(payload))?))
}

pub async fn accept_friend_request(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    info!("accept friend request: {id}");
    state.write(|store| store.accept_friend_request(&id))?;
    Ok(ok())
}

pub async fn decline_friend_request(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    info!("decline friend request: {id}");
    state.write(|store| store.decline_friend_request(&id))?;
    Ok(ok())
}

pub async fn remove_friend(
    Extension(state): Extension<State>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    info!("unfriend: {user_id} <-> {friend_id}");
    state.write(|store| store.remove_friend(&user_id, &friend_id))?;
    Ok(ok())
}

// ---- notifications ----

pub async fn get_notifications(
    Extension(state): Extension<State>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.read(|store| store.notifications_of(&user_id))))
}

pub async fn unread_count(
    Extension(state): Extension<State>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(UnreadCount {
        count: state.read(|store| store.unread_count(&user_id)),
    }))
}

pub async fn mark_read(
    Extension(state): Extension<State>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.write(|store| store.mark_read(&id));
    Ok(ok())
}

pub async fn mark_all_read(
    Extension(state): Extension<State>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    state.write(|store| store.mark_all_read(&user_id));
    Ok(ok())
}
