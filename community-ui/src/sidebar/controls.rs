//! Which sidebar controls render for a given viewer.

use community_types::{
    CommunityModeratorView, CommunityView, MyUserInfo, PersonView, SubscribedType,
};

use super::permissions::{am_admin, am_mod, am_top_mod, can_post};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarControls {
    /// "Joined" next to the title; clicking unfollows.
    pub joined_button: bool,
    /// "Subscribe pending" next to the title; clicking cancels the follow.
    pub pending_button: bool,
    pub subscribe_button: bool,
    pub block_button: bool,
    pub create_post: bool,
    /// Rendered with `no-click` when the community is deleted or removed.
    pub create_post_disabled: bool,
    pub not_logged_in_alert: bool,
    pub edit: bool,
    pub leave_mod_team: bool,
    pub delete_restore: bool,
    pub remove_restore: bool,
    pub purge: bool,
}

impl SidebarControls {
    pub fn resolve(
        community_view: &CommunityView,
        moderators: &[CommunityModeratorView],
        admins: &[PersonView],
        me: Option<&MyUserInfo>,
        editable: bool,
    ) -> Self {
        let signed_in = me.is_some();
        let not_subscribed = community_view.subscribed == SubscribedType::NotSubscribed;
        let is_mod = editable && am_mod(moderators, me);
        let is_top_mod = is_mod && am_top_mod(moderators, me);
        let is_admin = editable && am_admin(admins, me);
        let community = &community_view.community;

        Self {
            joined_button: community_view.subscribed == SubscribedType::Subscribed,
            pending_button: community_view.subscribed == SubscribedType::Pending,
            subscribe_button: signed_in && not_subscribed,
            block_button: signed_in && not_subscribed,
            create_post: can_post(community_view, moderators, admins, me),
            create_post_disabled: community.deleted || community.removed,
            not_logged_in_alert: !signed_in,
            edit: is_mod,
            leave_mod_team: is_mod && !is_top_mod,
            delete_restore: is_top_mod,
            remove_restore: is_admin,
            purge: is_admin,
        }
    }

    pub fn any_admin_action(&self) -> bool {
        self.edit || self.remove_restore || self.purge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;

    #[test]
    fn anonymous_visitor_sees_alert_only() {
        let controls =
            SidebarControls::resolve(&community_view(), &moderators(&[1]), &[], None, true);

        assert!(controls.not_logged_in_alert);
        assert!(!controls.subscribe_button);
        assert!(!controls.block_button);
        assert!(!controls.any_admin_action());
        assert!(controls.create_post);
    }

    #[test]
    fn subscribe_and_block_hidden_once_subscribed() {
        let mut view = community_view();
        let me = user(4);

        let controls = SidebarControls::resolve(&view, &[], &[], Some(&me), true);
        assert!(controls.subscribe_button);
        assert!(controls.block_button);
        assert!(!controls.joined_button);

        view.subscribed = SubscribedType::Subscribed;
        let controls = SidebarControls::resolve(&view, &[], &[], Some(&me), true);
        assert!(!controls.subscribe_button);
        assert!(!controls.block_button);
        assert!(controls.joined_button);

        view.subscribed = SubscribedType::Pending;
        let controls = SidebarControls::resolve(&view, &[], &[], Some(&me), true);
        assert!(!controls.subscribe_button);
        assert!(!controls.block_button);
        assert!(controls.pending_button);
    }

    #[test]
    fn top_mod_can_delete_but_not_leave() {
        let controls = SidebarControls::resolve(
            &community_view(),
            &moderators(&[1, 2]),
            &[],
            Some(&user(1)),
            true,
        );

        assert!(controls.edit);
        assert!(controls.delete_restore);
        assert!(!controls.leave_mod_team);
        assert!(!controls.remove_restore);
        assert!(!controls.purge);
    }

    #[test]
    fn other_mod_can_leave_but_not_delete() {
        let controls = SidebarControls::resolve(
            &community_view(),
            &moderators(&[1, 2]),
            &[],
            Some(&user(2)),
            true,
        );

        assert!(controls.edit);
        assert!(controls.leave_mod_team);
        assert!(!controls.delete_restore);
    }

    #[test]
    fn admin_gets_remove_and_purge() {
        let controls = SidebarControls::resolve(
            &community_view(),
            &moderators(&[1]),
            &admins(&[9]),
            Some(&user(9)),
            true,
        );

        assert!(controls.remove_restore);
        assert!(controls.purge);
        assert!(!controls.edit);
        assert!(!controls.delete_restore);
    }

    #[test]
    fn non_editable_sidebar_hides_admin_row() {
        let controls = SidebarControls::resolve(
            &community_view(),
            &moderators(&[1]),
            &admins(&[1]),
            Some(&user(1)),
            false,
        );

        assert!(!controls.any_admin_action());
        assert!(!controls.delete_restore);
        assert!(!controls.leave_mod_team);
    }

    #[test]
    fn create_post_disabled_for_removed_community() {
        let mut view = community_view();
        view.community.removed = true;
        let controls = SidebarControls::resolve(&view, &[], &[], Some(&user(3)), true);

        assert!(controls.create_post);
        assert!(controls.create_post_disabled);
    }
}
