use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/**
 * creator_id points at a Creator but nothing enforces it,
 * deleting the creator leaves the video dangling
 */
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Video {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<ObjectId>,
    //seconds
    pub duration: i32,
}

impl Video {
    pub fn new(title: impl Into<String>, tags: &[&str], creator_id: ObjectId, duration: i32) -> Self {
        Video {
            id: None,
            title: title.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            creator_id: Some(creator_id),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn video_uses_snake_case_field_names() {
        let creator_id = ObjectId::new();
        let video = Video::new("Vue Tutorial for beginners", &["programming"], creator_id, 280);
        let document = bson::to_document(&video).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_object_id("creator_id").unwrap(), creator_id);
        assert_eq!(document.get_i32("duration").unwrap(), 280);
        assert_eq!(
            document.get_array("tags").unwrap(),
            &vec![bson::Bson::String("programming".to_string())]
        );
    }

    #[test]
    fn video_without_creator_still_decodes() {
        let video: Video = bson::from_document(doc! { "title": "orphan", "duration": 12 }).unwrap();

        assert_eq!(video.creator_id, None);
        assert!(video.tags.is_empty());
        assert_eq!(video.duration, 12);
    }
}
