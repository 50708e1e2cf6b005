// src/handlers/user_handlers.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use log::{debug, warn};

use crate::AppState;
use crate::dtos::post_dtos::CreatePostDTO;
use crate::dtos::user_dtos::CreateUserDTO;
use crate::handlers::{board_error_response, error_response, validation_response};

/// GET /users/{user_id}
#[get("/users/{user_id}")]
pub async fn get_user(app_state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let user_id = path.into_inner();
    match app_state.board.get_user_by_id(&user_id) {
        Some(user) => HttpResponse::Ok().json(user),
        None => {
            debug!("user {} not found", user_id);
            error_response(StatusCode::NOT_FOUND, "User not found")
        }
    }
}

/// POST /users
#[post("/users")]
pub async fn create_user(
    app_state: web::Data<AppState>,
    body: web::Json<CreateUserDTO>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(e) = body.validate() {
        return validation_response(e);
    }

    match app_state
        .board
        .create_user(body.user_name, body.email, body.age, body.avatar)
    {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => {
            warn!("create user failed: {}", e);
            board_error_response(&e, app_state.legacy_error_status)
        }
    }
}

/// GET /users/{user_id}/posts
#[get("/users/{user_id}/posts")]
pub async fn list_user_posts(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let posts = app_state.board.get_user_posts(&path);
    debug!("user {} has {} posts", path, posts.len());
    HttpResponse::Ok().json(posts)
}

/// POST /users/{user_id}/posts
#[post("/users/{user_id}/posts")]
pub async fn create_user_post(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreatePostDTO>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(e) = body.validate() {
        return validation_response(e);
    }

    let post = app_state
        .board
        .create_post(path.into_inner(), body.content, body.is_public);
    HttpResponse::Created().json(post)
}
