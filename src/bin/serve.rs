//! Serves the todo API over HTTP.
//!
//! Usage:
//!
//! ```text
//! serve
//! ```
//!
//! Configuration is taken from the environment:
//!
//! - `TALLY_DATABASE_PATH` — `SQLite` database file (default `tally.db`,
//!   created on first start)
//! - `TALLY_LISTEN_ADDR` — bind address (default `0.0.0.0:8000`)
//! - `RUST_LOG` — log filter, standard `env_logger` syntax
//!
//! The binary wires the durable repository, the system clock, and the
//! service together once at startup and hands the composed instance to
//! the router; no global state is involved.

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::info;
use mockable::DefaultClock;
use std::env;
use std::error::Error;
use std::sync::Arc;

use tally::http;
use tally::todo::adapters::sqlite::SqliteTodoRepository;
use tally::todo::services::TodoService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let database_path =
        env::var("TALLY_DATABASE_PATH").unwrap_or_else(|_| "tally.db".to_owned());
    let listen_addr = env::var("TALLY_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_owned());

    let manager = ConnectionManager::<SqliteConnection>::new(&database_path);
    let pool = Pool::builder().build(manager)?;
    let repository = Arc::new(SqliteTodoRepository::new(pool));
    repository.run_migrations().await?;
    info!("database ready at {database_path}");

    let service = Arc::new(TodoService::new(repository, Arc::new(DefaultClock)));
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!("listening on {listen_addr}");
    axum::serve(listener, http::router(service)).await?;
    Ok(())
}
