//! Sidebar intents: mark the action as in flight and build its request.
//!
//! None of these touch the network. The caller forwards the returned form to
//! the matching callback and later supplies a fresh snapshot.

use community_types::{
    AddModToCommunity, BlockCommunity, CommunityView, DeleteCommunity, FollowCommunity,
    MyUserInfo, PurgeCommunity, RemoveCommunity, Sensitive, SubscribedType,
};
use dioxus_logger::tracing::debug;

use super::state::SidebarState;
use crate::format::get_unix_time;

/// Toggle follow: subscribe when not subscribed, otherwise unfollow
/// (a pending follow counts as subscribed).
pub fn toggle_follow(
    state: &mut SidebarState,
    community_view: &CommunityView,
    auth: Sensitive<String>,
) -> FollowCommunity {
    let follow = community_view.subscribed == SubscribedType::NotSubscribed;
    state.follow_community_loading = true;
    debug!(
        community_id = %community_view.community.id,
        follow,
        "follow community"
    );
    FollowCommunity {
        community_id: community_view.community.id,
        follow,
        auth,
    }
}

pub fn toggle_block(
    state: &mut SidebarState,
    community_view: &CommunityView,
    auth: Sensitive<String>,
) -> BlockCommunity {
    state.block_community_loading = true;
    BlockCommunity {
        community_id: community_view.community.id,
        block: !community_view.blocked,
        auth,
    }
}

/// Returns `None` when nobody is signed in; no flag is set in that case.
pub fn leave_mod_team(
    state: &mut SidebarState,
    community_view: &CommunityView,
    me: Option<&MyUserInfo>,
    auth: Sensitive<String>,
) -> Option<AddModToCommunity> {
    let me = me?;
    state.leave_mod_team_loading = true;
    Some(AddModToCommunity {
        community_id: community_view.community.id,
        person_id: me.person().id,
        added: false,
        auth,
    })
}

pub fn toggle_delete(
    state: &mut SidebarState,
    community_view: &CommunityView,
    auth: Sensitive<String>,
) -> DeleteCommunity {
    state.delete_community_loading = true;
    DeleteCommunity {
        community_id: community_view.community.id,
        deleted: !community_view.community.deleted,
        auth,
    }
}

/// Remove when live, restore when already removed. Reason and expiry come
/// from the remove dialog.
pub fn toggle_remove(
    state: &mut SidebarState,
    community_view: &CommunityView,
    auth: Sensitive<String>,
) -> RemoveCommunity {
    state.remove_community_loading = true;
    RemoveCommunity {
        community_id: community_view.community.id,
        removed: !community_view.community.removed,
        reason: state.remove_reason.clone(),
        expires: get_unix_time(state.remove_expires.as_deref()),
        auth,
    }
}

pub fn purge(
    state: &mut SidebarState,
    community_view: &CommunityView,
    auth: Sensitive<String>,
) -> PurgeCommunity {
    state.purge_community_loading = true;
    debug!(community_id = %community_view.community.id, "purge community");
    PurgeCommunity {
        community_id: community_view.community.id,
        reason: state.purge_reason.clone(),
        auth,
    }
}
