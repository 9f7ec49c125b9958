use crate::services::db::MongoConnection;
use anyhow::{anyhow, Result};
use mongodb::bson::{oid::ObjectId, Bson};
use serde::Serialize;
use tracing::info;

pub mod create_data;
pub mod delete_data;
pub mod list_databases;
pub mod read_data;
pub mod targets;
pub mod update_data;

pub use create_data::{create_data, CreateReport};
pub use delete_data::{delete_data, DeleteReport};
pub use list_databases::list_databases;
pub use read_data::{read_data, ReadReport};
pub use targets::Targets;
pub use update_data::{update_data, UpdateReport};

pub const SEPARATOR: &str = "---\t---\t---\t---\t---";

/**
 * routines in the order they always run, whatever order they were asked for in
 */
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Routine {
    ListDatabases,
    Create,
    Read,
    Update,
    Delete,
    /// create, read, update and delete
    All,
}

impl Routine {
    /**
     * expand `All`, drop duplicates, sort into run order
     * nothing requested means create only
     */
    pub fn plan(requested: &[Routine]) -> Vec<Routine> {
        if requested.is_empty() {
            return vec![Routine::Create];
        }
        let mut plan: Vec<Routine> = requested
            .iter()
            .flat_map(|routine| match routine {
                Routine::All => vec![Routine::Create, Routine::Read, Routine::Update, Routine::Delete],
                other => vec![*other],
            })
            .collect();
        plan.sort();
        plan.dedup();
        plan
    }
}

/**
 * ids given on the command line, None means "work it out"
 */
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetOverrides {
    pub creator_id: Option<ObjectId>,
    pub owner_id: Option<ObjectId>,
}

#[derive(Debug, Default)]
pub struct SessionReport {
    pub databases: Option<Vec<String>>,
    pub created: Option<CreateReport>,
    pub read: Option<ReadReport>,
    pub updated: Option<UpdateReport>,
    pub deleted: Option<DeleteReport>,
}

/**
 * plan the requested routines and run them one after another on a single connection
 * the first error stops the sequence and is handed back to the caller
 */
pub async fn run_routines(
    conn: &MongoConnection,
    routines: &[Routine],
    overrides: TargetOverrides,
) -> Result<SessionReport> {
    let videos = conn.videos();
    let creators = conn.creators();
    let mut report = SessionReport::default();

    for routine in Routine::plan(routines) {
        info!("Running routine {:?}", routine);
        let targets = Targets::resolve(
            overrides.creator_id,
            overrides.owner_id,
            report.created.as_ref().map(|created| created.creator_id),
        );
        match routine {
            Routine::ListDatabases => report.databases = Some(list_databases(conn).await?),
            Routine::Create => report.created = Some(create_data(&videos, &creators).await?),
            Routine::Read => report.read = Some(read_data(&videos, &creators).await?),
            Routine::Update => report.updated = Some(update_data(&videos, &creators, &targets).await?),
            Routine::Delete => report.deleted = Some(delete_data(&videos, &creators, &targets).await?),
            // plan() already expanded it
            Routine::All => continue,
        }
        println!("{SEPARATOR}");
    }

    Ok(report)
}

pub(crate) fn object_id(id: &Bson) -> Result<ObjectId> {
    id.as_object_id()
        .ok_or_else(|| anyhow!("Expected an ObjectId from the server, got {}", id))
}

/**
 * pretty json for the console, ids show up as {"$oid": ...}
 */
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
