use crate::models::{creator::Creator, video::Video};
use crate::services::crud::{print_json, SEPARATOR};
use anyhow::{Context, Result};
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Collection,
};
use tracing::{debug, info};

pub const FILTER_TAG: &str = "CrashCourse";
pub const MIN_DURATION: i32 = 40;

/**
 * raw documents, the collections are schema-less so a read never
 * depends on every stored document matching Video / Creator
 */
#[derive(Debug, Clone, Default)]
pub struct ReadReport {
    pub all_videos: Vec<Document>,
    pub streamed_videos: Vec<Document>,
    pub first_creator: Option<Document>,
    pub tagged_videos: Vec<Document>,
    pub long_videos: Vec<Document>,
}

/**
 * matches videos whose tags array contains FILTER_TAG
 */
pub fn tag_filter() -> Document {
    doc! { "tags": FILTER_TAG }
}

pub fn long_video_filter() -> Document {
    doc! { "duration": { "$gt": MIN_DURATION } }
}

/**
 * ascending by duration, the options have to reach the find call or the sort is lost
 */
pub fn long_video_options() -> FindOptions {
    FindOptions::builder().sort(doc! { "duration": 1 }).build()
}

pub async fn read_data(
    videos: &Collection<Video>,
    creators: &Collection<Creator>,
) -> Result<ReadReport> {
    let videos = videos.clone_with_type::<Document>();
    let creators = creators.clone_with_type::<Document>();

    // whole batch, fine for small collections
    let all_videos: Vec<Document> = videos
        .find(doc! {})
        .await
        .context("Failed to query videos")?
        .try_collect()
        .await
        .context("Failed to read videos")?;
    info!("Fetched {} videos", all_videos.len());
    print_json(&all_videos)?;

    println!("{SEPARATOR}");

    // one at a time, needs its own cursor since the first one is drained
    let mut cursor = videos
        .find(doc! {})
        .await
        .context("Failed to query videos")?;
    let mut streamed_videos = Vec::new();
    while let Some(video) = cursor.try_next().await.context("Failed to read video")? {
        print_json(&video)?;
        streamed_videos.push(video);
    }
    debug!("Streamed {} videos", streamed_videos.len());

    println!("{SEPARATOR}");

    let first_creator = creators
        .find_one(doc! {})
        .sort(doc! { "_id": 1 })
        .await
        .context("Failed to query creator")?;
    match &first_creator {
        Some(creator) => print_json(creator)?,
        None => println!("no creator found"),
    }

    println!("{SEPARATOR}");

    let tagged_videos: Vec<Document> = videos
        .find(tag_filter())
        .await
        .context("Failed to query videos by tag")?
        .try_collect()
        .await
        .context("Failed to read videos by tag")?;
    info!("Fetched {} videos tagged {}", tagged_videos.len(), FILTER_TAG);
    print_json(&tagged_videos)?;

    println!("{SEPARATOR}");

    let long_videos: Vec<Document> = videos
        .find(long_video_filter())
        .with_options(long_video_options())
        .await
        .context("Failed to query videos by duration")?
        .try_collect()
        .await
        .context("Failed to read videos by duration")?;
    info!("Fetched {} videos longer than {}s", long_videos.len(), MIN_DURATION);
    print_json(&long_videos)?;

    Ok(ReadReport {
        all_videos,
        streamed_videos,
        first_creator,
        tagged_videos,
        long_videos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_filter_matches_array_membership() {
        assert_eq!(tag_filter(), doc! { "tags": "CrashCourse" });
    }

    #[test]
    fn long_video_filter_is_strictly_greater_than_forty() {
        assert_eq!(long_video_filter(), doc! { "duration": { "$gt": 40 } });
    }

    #[test]
    fn loosely_shaped_video_prints_as_is() {
        let video = doc! { "title": "shell import", "duration": 300.0, "creator_id": "not-hex" };

        assert!(print_json(&vec![video.clone()]).is_ok());
        assert_eq!(video.get_f64("duration").unwrap(), 300.0);
    }

    #[test]
    fn long_video_query_carries_the_duration_sort() {
        let options = long_video_options();
        assert_eq!(options.sort, Some(doc! { "duration": 1 }));
    }
}
