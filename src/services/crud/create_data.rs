use crate::models::{creator::Creator, video::Video};
use crate::services::crud::{object_id, SEPARATOR};
use anyhow::{Context, Result};
use mongodb::{bson::oid::ObjectId, Collection};
use tracing::info;

pub const CREATOR_NAME: &str = "freeCodeCamp";
pub const CREATOR_DESCRIPTION: &str = "Learn anything for free here!";
pub const VIDEO_TAGS: [&str; 3] = ["programming", "tutorial", "tech"];

const VIDEOS: [(&str, i32); 3] = [
    ("React Tutorial for beginners", 300),
    ("Vue Tutorial for beginners", 280),
    ("Node.js Tutorial for beginners", 500),
];

#[derive(Debug, Clone)]
pub struct CreateReport {
    pub creator_id: ObjectId,
    pub video_ids: Vec<ObjectId>,
}

pub fn seed_creator() -> Creator {
    Creator::new(CREATOR_NAME, CREATOR_DESCRIPTION)
}

pub fn seed_videos(creator_id: ObjectId) -> Vec<Video> {
    VIDEOS
        .iter()
        .map(|(title, duration)| Video::new(*title, &VIDEO_TAGS, creator_id, *duration))
        .collect()
}

/**
 * insert one creator, then its three videos in a single insert_many
 * a failed video insert leaves the creator behind
 */
pub async fn create_data(
    videos: &Collection<Video>,
    creators: &Collection<Creator>,
) -> Result<CreateReport> {
    let creator_result = creators
        .insert_one(seed_creator())
        .await
        .context("Failed to insert creator")?;
    let creator_id = object_id(&creator_result.inserted_id)?;
    info!("Inserted creator {}", creator_id);
    println!("{}", creator_id);

    println!("{SEPARATOR}");

    let video_result = videos
        .insert_many(seed_videos(creator_id))
        .await
        .context("Failed to insert videos")?;

    //inserted_ids is keyed by position in the batch
    let mut inserted: Vec<_> = video_result.inserted_ids.into_iter().collect();
    inserted.sort_by_key(|(index, _)| *index);
    let video_ids = inserted
        .iter()
        .map(|(_, id)| object_id(id))
        .collect::<Result<Vec<_>>>()?;

    info!("Inserted {} videos for creator {}", video_ids.len(), creator_id);
    let printed: Vec<String> = video_ids.iter().map(|id| id.to_hex()).collect();
    println!("{}", printed.join(" "));

    Ok(CreateReport {
        creator_id,
        video_ids,
    })
}
