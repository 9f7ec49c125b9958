use crate::services::crud::{Routine, TargetOverrides};
use clap::Parser;
use mongodb::bson::oid::ObjectId;

/**
 * walk through insert / find / update / delete against the `video` and `creator` collections
 */
#[derive(Parser, Debug)]
#[command(name = "mongo-crud", version, about)]
pub struct Cli {
    /// Routines to run, always executed in the order list-databases, create, read, update, delete
    #[arg(value_enum)]
    pub routines: Vec<Routine>,

    /// Database to use instead of MONGODB_DATABASE
    #[arg(long)]
    pub database: Option<String>,

    /// Creator whose description the update routine rewrites
    #[arg(long, value_parser = parse_object_id)]
    pub creator_id: Option<ObjectId>,

    /// Creator whose videos the update and delete routines touch
    #[arg(long, value_parser = parse_object_id)]
    pub owner_id: Option<ObjectId>,
}

impl Cli {
    pub fn overrides(&self) -> TargetOverrides {
        TargetOverrides {
            creator_id: self.creator_id,
            owner_id: self.owner_id,
        }
    }
}

fn parse_object_id(raw: &str) -> Result<ObjectId, String> {
    ObjectId::parse_str(raw).map_err(|err| format!("not a 24 character hex ObjectId: {err}"))
}
