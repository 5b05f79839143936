mod config;
mod error;
mod notify;
mod routes;
mod seed;
mod state;
mod store;
mod upload;

use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::state::State;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let port = config.port;
    let uploads_dir = config.uploads_dir.clone();
    let state = State::new(config);

    let app = Router::new()
        .route("/api/login", post(routes::login))
        .route("/api/users", get(routes::get_users))
        .route(
            "/api/users/:id",
            get(routes::get_user).put(routes::update_user),
        )
        .route(
            "/api/posts",
            get(routes::get_posts).post(routes::create_post),
        )
        .route("/api/posts/:id", delete(routes::delete_post))
        .route("/api/posts/:id/like", post(routes::like_post))
        .route("/api/posts/:id/comment", post(routes::comment_post))
        .route("/api/stories", get(routes::get_stories))
        .route("/api/friends/:id", get(routes::get_friends))
        .route("/api/friends/:id/:friend_id", delete(routes::remove_friend))
        .route("/api/friend-requests", post(routes::send_friend_request))
        .route("/api/friend-requests/:id", get(routes::get_friend_requests))
        .route(
            "/api/friend-requests/:id/sent",
            get(routes::get_sent_friend_requests),
        )
        .route(
            "/api/friend-requests/:id/accept",
            post(routes::accept_friend_request),
        )
        .route(
            "/api/friend-requests/:id/decline",
            post(routes::decline_friend_request),
        )
        .route(
            "/api/friendship-status/:id/:target_id",
            get(routes::friendship_status),
        )
        .route("/api/notifications/:id", get(routes::get_notifications))
        .route(
            "/api/notifications/:id/unread-count",
            get(routes::unread_count),
        )
        .route("/api/notifications/:id/read", post(routes::mark_read))
        .route(
            "/api/notifications/:id/mark-all-read",
            post(routes::mark_all_read),
        )
        .route("/api/upload", post(upload::upload_image))
        .route("/api/upload/multiple", post(upload::upload_images))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        // the multiple-upload route accepts up to ten full-size images
        .layer(DefaultBodyLimit::max(
            upload::MAX_IMAGE_BYTES * upload::MAX_IMAGES_PER_REQUEST,
        ))
        .layer(CorsLayer::permissive())
        .layer(Extension(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on {addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
