use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Creator {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
}

impl Creator {
    /**
     * creator without an id, the driver assigns one on insert
     */
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Creator {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn new_creator_serializes_without_id() {
        let creator = Creator::new("freeCodeCamp", "Learn anything for free here!");
        let document = bson::to_document(&creator).unwrap();

        assert_eq!(
            document,
            doc! { "name": "freeCodeCamp", "description": "Learn anything for free here!" }
        );
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let id = ObjectId::new();
        let creator: Creator = bson::from_document(doc! { "_id": id, "name": "Brad" }).unwrap();

        assert_eq!(creator.id, Some(id));
        assert_eq!(creator.name, "Brad");
        assert!(creator.description.is_empty());
    }
}
