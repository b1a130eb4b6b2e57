//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{chat, comments, gaming_profiles, health, posts, reactions, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(chat_routes())
}

/// User and gaming profile routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route(
            "/users/@me/gaming-profiles",
            get(gaming_profiles::get_own_profiles),
        )
        .route(
            "/users/@me/gaming-profiles",
            put(gaming_profiles::replace_own_profiles),
        )
        .route("/users/by-username/:username", get(users::get_user_by_username))
        .route("/users/:user_id", get(users::get_user))
        .route(
            "/users/:user_id/gaming-profiles",
            get(gaming_profiles::get_user_profiles),
        )
}

/// Post, comment and reaction routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", patch(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        // Comments
        .route("/posts/:post_id/comments", get(comments::list_comments))
        .route("/posts/:post_id/comments", post(comments::create_comment))
        .route(
            "/posts/:post_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        // Reactions
        .route("/posts/:post_id/reactions", post(reactions::react))
        .route("/posts/:post_id/reactions", get(reactions::get_reactions))
        .route("/posts/:post_id/reactions", delete(reactions::remove_reaction))
}

/// Global chat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/messages", get(chat::list_messages))
        .route("/chat/messages", post(chat::send_message))
}
