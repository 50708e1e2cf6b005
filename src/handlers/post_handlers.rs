// src/handlers/post_handlers.rs
use actix_web::{HttpResponse, delete, get, put, web};
use log::{debug, info, warn};

use crate::AppState;
use crate::dtos::post_dtos::{DeletePostDTO, SearchQuery, UpdatePostDTO};
use crate::handlers::{MessageBody, board_error_response, validation_response};

/// PUT /posts/{post_id}, only the owner may edit.
#[put("/posts/{post_id}")]
pub async fn update_post(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostDTO>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(e) = body.validate() {
        return validation_response(e);
    }

    let post_id = path.into_inner();
    match app_state.board.update_post(&post_id, &body.user_id, body.content) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(e) => {
            warn!("update of post {} by {} failed: {}", post_id, body.user_id, e);
            board_error_response(&e, app_state.legacy_error_status)
        }
    }
}

/// DELETE /posts/{post_id}, only the owner may delete.
#[delete("/posts/{post_id}")]
pub async fn delete_post(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<DeletePostDTO>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(e) = body.validate() {
        return validation_response(e);
    }

    let post_id = path.into_inner();
    match app_state.board.delete_post(&post_id, &body.user_id) {
        Ok(()) => {
            info!("post {} deleted by {}", post_id, body.user_id);
            HttpResponse::Ok().json(MessageBody {
                message: "Post deleted successfully".to_string(),
            })
        }
        Err(e) => {
            warn!("delete of post {} by {} failed: {}", post_id, body.user_id, e);
            board_error_response(&e, app_state.legacy_error_status)
        }
    }
}

/// GET /posts/search?content=
#[get("/posts/search")]
pub async fn search_posts(
    app_state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let posts = app_state.board.search_posts_by_content(&query.content);
    debug!("search {:?} matched {} posts", query.content, posts.len());
    HttpResponse::Ok().json(posts)
}

/// GET /posts/public
#[get("/posts/public")]
pub async fn list_public_posts(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.board.get_public_posts())
}
