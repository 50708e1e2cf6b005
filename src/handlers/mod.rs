pub mod post_handlers;
pub mod user_handlers;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::dtos::ValidationError;
use crate::services::BoardError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Registers every route plus the JSON body config they share.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(user_handlers::get_user)
        .service(user_handlers::create_user)
        .service(user_handlers::list_user_posts)
        .service(user_handlers::create_user_post)
        // fixed paths before /posts/{post_id}
        .service(post_handlers::search_posts)
        .service(post_handlers::list_public_posts)
        .service(post_handlers::update_post)
        .service(post_handlers::delete_post);
}

/// Malformed or incomplete JSON bodies become `400 {"error": ...}`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        error: message.into(),
    })
}

pub(crate) fn validation_response(err: ValidationError) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

/// In legacy mode every domain failure is a 400, otherwise 404/403 where they apply.
pub(crate) fn board_error_response(err: &BoardError, legacy: bool) -> HttpResponse {
    let status = match err {
        BoardError::DuplicateEmail => StatusCode::BAD_REQUEST,
        _ if legacy => StatusCode::BAD_REQUEST,
        BoardError::NotFound => StatusCode::NOT_FOUND,
        BoardError::Unauthorized { .. } => StatusCode::FORBIDDEN,
    };
    error_response(status, err.to_string())
}
