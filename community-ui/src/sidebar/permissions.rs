//! Role checks for the signed-in user against a community's snapshot.

use community_types::{CommunityModeratorView, CommunityView, MyUserInfo, PersonView};

pub fn am_mod(moderators: &[CommunityModeratorView], me: Option<&MyUserInfo>) -> bool {
    let Some(me) = me else {
        return false;
    };
    moderators.iter().any(|m| m.moderator.id == me.person().id)
}

/// The first moderator founded the community and holds delete rights.
pub fn am_top_mod(moderators: &[CommunityModeratorView], me: Option<&MyUserInfo>) -> bool {
    match (moderators.first(), me) {
        (Some(top), Some(me)) => top.moderator.id == me.person().id,
        _ => false,
    }
}

pub fn am_admin(admins: &[PersonView], me: Option<&MyUserInfo>) -> bool {
    let Some(me) = me else {
        return false;
    };
    me.person().admin || admins.iter().any(|a| a.person.id == me.person().id)
}

pub fn can_post(
    community_view: &CommunityView,
    moderators: &[CommunityModeratorView],
    admins: &[PersonView],
    me: Option<&MyUserInfo>,
) -> bool {
    !community_view.community.posting_restricted_to_mods
        || am_mod(moderators, me)
        || am_admin(admins, me)
}
