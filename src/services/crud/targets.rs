use mongodb::bson::oid::ObjectId;

// 62201a0d854b848e2951ed61
const DEFAULT_CREATOR_ID: [u8; 12] = [0x62, 0x20, 0x1a, 0x0d, 0x85, 0x4b, 0x84, 0x8e, 0x29, 0x51, 0xed, 0x61];
// 6220d932b89c96822aa90acc
const DEFAULT_OWNER_ID: [u8; 12] = [0x62, 0x20, 0xd9, 0x32, 0xb8, 0x9c, 0x96, 0x82, 0x2a, 0xa9, 0x0a, 0xcc];

/**
 * ids the update and delete routines aim at
 * creator_id -> the creator whose description gets rewritten
 * owner_id -> the creator whose videos get retagged / deleted
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Targets {
    pub creator_id: ObjectId,
    pub owner_id: ObjectId,
}

impl Default for Targets {
    fn default() -> Self {
        Targets {
            creator_id: ObjectId::from_bytes(DEFAULT_CREATOR_ID),
            owner_id: ObjectId::from_bytes(DEFAULT_OWNER_ID),
        }
    }
}

impl Targets {
    /**
     * explicit flag wins, then the creator inserted in this run, then the built-in ids
     */
    pub fn resolve(
        creator_id: Option<ObjectId>,
        owner_id: Option<ObjectId>,
        created: Option<ObjectId>,
    ) -> Self {
        let defaults = Targets::default();
        Targets {
            creator_id: creator_id.or(created).unwrap_or(defaults.creator_id),
            owner_id: owner_id.or(created).unwrap_or(defaults.owner_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_hex_ids() {
        let targets = Targets::default();
        assert_eq!(targets.creator_id.to_hex(), "62201a0d854b848e2951ed61");
        assert_eq!(targets.owner_id.to_hex(), "6220d932b89c96822aa90acc");
    }

    #[test]
    fn created_creator_fills_unset_targets() {
        let created = ObjectId::new();
        let targets = Targets::resolve(None, None, Some(created));

        assert_eq!(targets.creator_id, created);
        assert_eq!(targets.owner_id, created);
    }

    #[test]
    fn explicit_ids_beat_created_creator() {
        let explicit = ObjectId::new();
        let created = ObjectId::new();
        let targets = Targets::resolve(Some(explicit), None, Some(created));

        assert_eq!(targets.creator_id, explicit);
        assert_eq!(targets.owner_id, created);
    }

    #[test]
    fn nothing_given_falls_back_to_defaults() {
        assert_eq!(Targets::resolve(None, None, None), Targets::default());
    }
}
