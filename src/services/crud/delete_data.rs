use crate::models::{creator::Creator, video::Video};
use crate::services::crud::{create_data::CREATOR_NAME, targets::Targets, update_data::by_owner};
use anyhow::{Context, Result};
use mongodb::{bson::doc, Collection};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub videos_deleted: u64,
    pub creators_deleted: u64,
}

/**
 * order matters: owner's videos, then the creator by name, then the whole video collection
 * no confirmation, nothing here can be undone
 */
pub async fn delete_data(
    videos: &Collection<Video>,
    creators: &Collection<Creator>,
    targets: &Targets,
) -> Result<DeleteReport> {
    let result = videos
        .delete_many(by_owner(targets.owner_id))
        .await
        .context("Failed to delete videos")?;
    info!("Deleted {} videos of creator {}", result.deleted_count, targets.owner_id);
    println!("Delete many documents successful. {}", result.deleted_count);
    let videos_deleted = result.deleted_count;

    let result = creators
        .delete_one(doc! { "name": CREATOR_NAME })
        .await
        .context("Failed to delete creator")?;
    info!("Deleted {} creator named {}", result.deleted_count, CREATOR_NAME);
    println!("Delete one document successful. {}", result.deleted_count);

    warn!("Dropping collection {}", videos.name());
    videos
        .drop()
        .await
        .with_context(|| format!("Failed to drop collection {}", videos.name()))?;
    println!("Dropped collection {}", videos.name());

    Ok(DeleteReport {
        videos_deleted,
        creators_deleted: result.deleted_count,
    })
}
