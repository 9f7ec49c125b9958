use crate::config::Config;
use crate::models::{creator::Creator, video::Video};
use anyhow::{Context, Result};
use futures::future::{FutureExt, LocalBoxFuture};
use mongodb::{bson::doc, options::ClientOptions, Client, Collection, Database};
use std::{panic, panic::AssertUnwindSafe, time::Duration};
use tokio::time;
use tracing::{debug, info};

pub const VIDEO_COLLECTION: &str = "video";
pub const CREATOR_COLLECTION: &str = "creator";

/**
 * one client plus the database the routines work in
 * open once, close once
 */
pub struct MongoConnection {
    client: Client,
    db: Database,
}

impl MongoConnection {
    /**
     * function to connect_db
     * the client is lazy so a ping is what actually proves the server is there,
     * both the driver timeouts and the ping are bounded by connect_timeout
     */
    pub async fn open(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .context("Invalid MongoDB connection string")?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name.get_or_insert_with(|| "mongo-crud".to_string());

        let client = Client::with_options(options).context("Failed to build MongoDB client")?;
        let db = client.database(&config.database_name);

        ping(&db, config.connect_timeout).await?;
        info!("Connected to MongoDB, using database {}", config.database_name);

        Ok(MongoConnection { client, db })
    }

    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn videos(&self) -> Collection<Video> {
        self.db.collection(VIDEO_COLLECTION)
    }

    pub fn creators(&self) -> Collection<Creator> {
        self.db.collection(CREATOR_COLLECTION)
    }

    pub async fn list_database_names(&self) -> Result<Vec<String>> {
        self.client
            .list_database_names()
            .await
            .context("Failed to list database names")
    }

    /**
     * run `work` against this connection, then close it
     * the close happens on every exit path, a panic in `work` is resumed afterwards
     */
    pub async fn run_then_close<T>(
        self,
        work: impl for<'a> FnOnce(&'a MongoConnection) -> LocalBoxFuture<'a, T>,
    ) -> T {
        let outcome = AssertUnwindSafe(work(&self)).catch_unwind().await;
        self.close().await;
        match outcome {
            Ok(value) => value,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /**
     * release the client, waits for in-flight operations to finish
     */
    pub async fn close(self) {
        debug!("Shutting down MongoDB client");
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}

async fn ping(db: &Database, limit: Duration) -> Result<()> {
    time::timeout(limit, db.run_command(doc! { "ping": 1 }))
        .await
        .with_context(|| format!("Timed out after {}s connecting to MongoDB", limit.as_secs()))?
        .context("MongoDB ping failed")?;
    Ok(())
}
