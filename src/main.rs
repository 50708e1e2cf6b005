// src/main.rs
mod config;
mod dtos;
mod handlers;
mod models;
mod repositories;
mod services;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};

use crate::config::AppConfig;
use crate::repositories::{InMemoryPostRepository, InMemoryUserRepository, SeedData};
use crate::services::{BoardService, SystemClock, UuidGenerator};

#[derive(Clone)]
pub struct AppState {
    pub board: BoardService,
    pub legacy_error_status: bool,
}

fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let seed = match &cfg.seed_file {
        Some(path) => {
            let seed = SeedData::load(path)?;
            info!(
                "Seeded {} users and {} posts from {}",
                seed.users.len(),
                seed.posts.len(),
                path.display()
            );
            seed
        }
        None => SeedData::default(),
    };

    let board = BoardService::new(
        Arc::new(InMemoryUserRepository::with_users(seed.users)),
        Arc::new(InMemoryPostRepository::with_posts(seed.posts)),
        Arc::new(UuidGenerator),
        Arc::new(SystemClock),
    );

    Ok(AppState {
        board,
        legacy_error_status: cfg.legacy_error_status,
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let state = match build_state(&cfg) {
        Ok(s) => web::Data::new(s),
        Err(e) => {
            error!("Failed to initialise state: {:#}", e);
            std::process::exit(1);
        }
    };

    if !cfg.legacy_error_status {
        info!("Strict status codes enabled (404/403 for post updates and deletes)");
    }

    let bind_address = cfg.bind_address();
    let allowed_origins = cfg.allowed_origins.clone();

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept", "x-requested-with"])
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
