use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::newtypes::CommunityId;
use crate::source::{Community, Person};

/// Activity and size counters for a community.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct CommunityAggregates {
    pub community_id: CommunityId,
    pub subscribers: i64,
    pub posts: i64,
    pub comments: i64,
    /// The number of users with any activity in the last day.
    pub users_active_day: i64,
    /// The number of users with any activity in the last week.
    pub users_active_week: i64,
    /// The number of users with any activity in the last month.
    pub users_active_month: i64,
    /// The number of users with any activity in the last six months.
    pub users_active_half_year: i64,
}

/// Follow state of the signed-in user towards a community.
///
/// `Pending` means a follow was sent to a remote instance and not yet accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub enum SubscribedType {
    Subscribed,
    #[default]
    NotSubscribed,
    Pending,
}

/// Read-only community snapshot as handed out by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct CommunityView {
    pub community: Community,
    pub subscribed: SubscribedType,
    pub blocked: bool,
    pub counts: CommunityAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct CommunityModeratorView {
    pub community: Community,
    pub moderator: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct PersonView {
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct LocalUserView {
    pub person: Person,
}

/// The signed-in user, as returned inside `GetSiteResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
pub struct MyUserInfo {
    pub local_user_view: LocalUserView,
}

impl MyUserInfo {
    pub fn person(&self) -> &Person {
        &self.local_user_view.person
    }
}
