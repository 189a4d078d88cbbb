//! Request and response bodies for the community endpoints the sidebar drives.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::newtypes::{CommunityId, LanguageId, PersonId};
use crate::sensitive::Sensitive;
use crate::source::Language;
use crate::views::{CommunityModeratorView, CommunityView, MyUserInfo, PersonView};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct GetCommunity {
    pub id: Option<CommunityId>,
    /// Example: star_trek , or star_trek@xyz.tld
    pub name: Option<String>,
    #[ts(type = "string | null")]
    pub auth: Option<Sensitive<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct FollowCommunity {
    pub community_id: CommunityId,
    pub follow: bool,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct BlockCommunity {
    pub community_id: CommunityId,
    pub block: bool,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

/// Soft delete by the top moderator. Reversible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct DeleteCommunity {
    pub community_id: CommunityId,
    pub deleted: bool,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

/// Admin removal. Reversible, unlike [`PurgeCommunity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct RemoveCommunity {
    pub community_id: CommunityId,
    pub removed: bool,
    pub reason: Option<String>,
    /// Unix seconds
    pub expires: Option<i64>,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct PurgeCommunity {
    pub community_id: CommunityId,
    pub reason: Option<String>,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

/// Adds or removes a moderator. The sidebar only sends `added: false` for the
/// signed-in user (leave mod team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct AddModToCommunity {
    pub community_id: CommunityId,
    pub person_id: PersonId,
    pub added: bool,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct EditCommunity {
    pub community_id: CommunityId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub nsfw: Option<bool>,
    pub posting_restricted_to_mods: Option<bool>,
    pub discussion_languages: Option<Vec<LanguageId>>,
    #[ts(type = "string")]
    pub auth: Sensitive<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct GetCommunityResponse {
    pub community_view: CommunityView,
    pub moderators: Vec<CommunityModeratorView>,
    #[serde(default)]
    pub online: u32,
    #[serde(default)]
    pub discussion_languages: Vec<LanguageId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct CommunityResponse {
    pub community_view: CommunityView,
    #[serde(default)]
    pub discussion_languages: Vec<LanguageId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct BlockCommunityResponse {
    pub community_view: CommunityView,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct AddModToCommunityResponse {
    pub moderators: Vec<CommunityModeratorView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct PurgeItemResponse {
    pub success: bool,
}

/// Site-wide context the community page needs: who is signed in, who the
/// admins are, and which languages exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct GetSiteResponse {
    pub admins: Vec<PersonView>,
    pub my_user_info: Option<MyUserInfo>,
    #[serde(default)]
    pub all_languages: Vec<Language>,
    #[serde(default)]
    pub discussion_languages: Vec<LanguageId>,
    #[serde(default)]
    pub enable_nsfw: bool,
}
