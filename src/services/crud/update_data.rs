use crate::models::{creator::Creator, video::Video};
use crate::services::crud::{targets::Targets, SEPARATOR};
use anyhow::{Context, Result};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};
use tracing::info;

pub const NEW_DESCRIPTION: &str = "I love crash course";
pub const NEW_TAGS: [&str; 3] = ["tutorial", "freeCodeCamp", "js_framework"];
pub const REPLACED_NAME: &str = "Traversy Media";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub described: u64,
    pub retagged: u64,
    pub replaced: u64,
}

pub fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

pub fn by_owner(owner_id: ObjectId) -> Document {
    doc! { "creator_id": owner_id }
}

pub fn set_description() -> Document {
    doc! { "$set": { "description": NEW_DESCRIPTION } }
}

pub fn set_tags() -> Document {
    doc! { "$set": { "tags": NEW_TAGS.to_vec() } }
}

/**
 * whole document that takes the place of REPLACED_NAME
 * anything not listed here is gone after the replace
 */
pub fn replacement_creator() -> Creator {
    Creator::new("Brad Traversy", "Crash Course anything!")
}

pub async fn update_data(
    videos: &Collection<Video>,
    creators: &Collection<Creator>,
    targets: &Targets,
) -> Result<UpdateReport> {
    let result = creators
        .update_one(by_id(targets.creator_id), set_description())
        .await
        .context("Failed to update creator description")?;
    info!(
        "update_one on creator {}: matched {}, modified {}",
        targets.creator_id, result.matched_count, result.modified_count
    );
    println!("Updated {} Document(s)", result.modified_count);
    let described = result.modified_count;

    println!("{SEPARATOR}");

    let result = videos
        .update_many(by_owner(targets.owner_id), set_tags())
        .await
        .context("Failed to update video tags")?;
    info!(
        "update_many on videos of {}: matched {}, modified {}",
        targets.owner_id, result.matched_count, result.modified_count
    );
    println!("Updated {} Document(s)", result.modified_count);
    let retagged = result.modified_count;

    println!("{SEPARATOR}");

    let result = creators
        .replace_one(doc! { "name": REPLACED_NAME }, replacement_creator())
        .await
        .context("Failed to replace creator")?;
    info!(
        "replace_one on creator named {}: matched {}, modified {}",
        REPLACED_NAME, result.matched_count, result.modified_count
    );
    println!("Updated {} Document(s)", result.modified_count);

    Ok(UpdateReport {
        described,
        retagged,
        replaced: result.modified_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn set_tags_replaces_the_whole_array() {
        assert_eq!(
            set_tags(),
            doc! { "$set": { "tags": ["tutorial", "freeCodeCamp", "js_framework"] } }
        );
    }

    #[test]
    fn set_description_touches_one_field() {
        let update = set_description();
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("description").unwrap(), "I love crash course");
    }

    #[test]
    fn owner_filter_targets_creator_id() {
        let owner = ObjectId::new();
        assert_eq!(by_owner(owner), doc! { "creator_id": owner });
    }

    #[test]
    fn replacement_has_no_id_or_extra_fields() {
        let document = bson::to_document(&replacement_creator()).unwrap();
        assert_eq!(
            document,
            doc! { "name": "Brad Traversy", "description": "Crash Course anything!" }
        );
    }
}
