use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use futures::FutureExt;
use tokio;
//Logging
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod models;
mod services;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::config::Config;
use crate::services::{crud, db::MongoConnection};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    //.env first so RUST_LOG from it applies
    dotenv().ok();

    let file_appender = rolling::daily("logs", "mongo-crud.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Logging initialised");

    let mut config = Config::from_env().inspect_err(|err| tracing::error!("{err:#}"))?;
    if let Some(database) = &cli.database {
        config.database_name = database.clone();
    }

    let conn = MongoConnection::open(&config)
        .await
        .inspect_err(|err| tracing::error!("{err:#}"))?;

    // closed on every path, including a panicking routine
    let routines = cli.routines.clone();
    let overrides = cli.overrides();
    let outcome = conn
        .run_then_close(move |conn| {
            async move { crud::run_routines(conn, &routines, overrides).await }.boxed_local()
        })
        .await;

    match outcome {
        Ok(_) => {
            tracing::info!("All routines finished");
            Ok(())
        }
        Err(err) => {
            tracing::error!("{err:#}");
            Err(err)
        }
    }
}
