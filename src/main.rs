mod config;
mod entities;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod routes;
mod seeders;
mod services;
mod utils;

use config::{AppState, Config};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting Foodgram Backend...");

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = Database::connect(&cfg.database_url)
        .await
        .expect("🔥 Failed to connect to Database!");
    println!("✅ Database Connected!");

    // 2. Schema Migrations
    println!("🗄️ Applying Migrations...");
    Migrator::up(&db, None)
        .await
        .expect("🔥 Failed to apply migrations!");

    // 3. Build App State
    let state = AppState {
        db,
        config: cfg.clone(),
    };

    // 4. Database Seeding
    println!("🌱 Running Seeders...");
    if let Err(e) = seeders::run_seeders(&state).await {
        tracing::error!("❌ Seeding failed: {}", e);
    } else {
        println!("✅ Seeding Successful!");
    }

    // 5. Initialize Router
    let app = routes::create_routes(state.clone()).with_state(state);

    // 6. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
