use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::newtypes::{CommunityId, LanguageId, PersonId};

/// A federated forum. Only the fields the sidebar reads are carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub removed: bool,
    pub deleted: bool,
    pub nsfw: bool,
    /// Canonical ActivityPub id, e.g. `https://lemmy.ml/c/rust`
    pub actor_id: String,
    pub local: bool,
    pub icon: Option<String>,
    pub banner: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub posting_restricted_to_mods: bool,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub actor_id: String,
    pub local: bool,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub banned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct Language {
    pub id: LanguageId,
    pub code: String,
    pub name: String,
}
