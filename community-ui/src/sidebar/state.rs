//! Transient sidebar UI state. Plain data, no RSX and no signals.

/// Flag bag behind the sidebar: which dialogs are open, which requests are in
/// flight, and the free-text reasons typed so far.
///
/// Loading flags are never cleared by a response. The parent hands down a new
/// snapshot when a request completes and that resets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub remove_reason: Option<String>,
    pub remove_expires: Option<String>,
    pub purge_reason: Option<String>,
    pub show_edit: bool,
    pub show_remove_dialog: bool,
    pub show_purge_dialog: bool,
    pub show_confirm_leave_mod_team: bool,
    pub delete_community_loading: bool,
    pub remove_community_loading: bool,
    pub leave_mod_team_loading: bool,
    pub follow_community_loading: bool,
    pub block_community_loading: bool,
    pub purge_community_loading: bool,
}

impl SidebarState {
    /// A new community snapshot arrived. Reason inputs are kept.
    pub fn reset_for_new_community(&mut self) {
        self.show_edit = false;
        self.show_purge_dialog = false;
        self.show_remove_dialog = false;
        self.delete_community_loading = false;
        self.remove_community_loading = false;
        self.leave_mod_team_loading = false;
        self.follow_community_loading = false;
        self.block_community_loading = false;
        self.purge_community_loading = false;
    }

    /// A new moderator list arrived.
    pub fn reset_for_new_moderators(&mut self) {
        self.show_confirm_leave_mod_team = false;
    }

    pub fn open_edit(&mut self) {
        self.show_edit = true;
    }

    pub fn cancel_edit(&mut self) {
        self.show_edit = false;
    }

    pub fn confirm_leave_mod_team(&mut self) {
        self.show_confirm_leave_mod_team = true;
    }

    pub fn cancel_leave_mod_team(&mut self) {
        self.show_confirm_leave_mod_team = false;
    }

    pub fn open_remove_dialog(&mut self) {
        self.show_remove_dialog = true;
    }

    /// Purge and remove never show together; purge wins.
    pub fn open_purge_dialog(&mut self) {
        self.show_purge_dialog = true;
        self.show_remove_dialog = false;
    }

    pub fn set_remove_reason(&mut self, value: &str) {
        self.remove_reason = non_blank(value);
    }

    pub fn set_remove_expires(&mut self, value: &str) {
        self.remove_expires = non_blank(value);
    }

    pub fn set_purge_reason(&mut self, value: &str) {
        self.purge_reason = non_blank(value);
    }

    pub fn any_loading(&self) -> bool {
        self.delete_community_loading
            || self.remove_community_loading
            || self.leave_mod_team_loading
            || self.follow_community_loading
            || self.block_community_loading
            || self.purge_community_loading
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_state() -> SidebarState {
        SidebarState {
            remove_reason: Some("spam".to_string()),
            remove_expires: Some("2030-01-01".to_string()),
            purge_reason: Some("illegal".to_string()),
            show_edit: true,
            show_remove_dialog: true,
            show_purge_dialog: true,
            show_confirm_leave_mod_team: true,
            delete_community_loading: true,
            remove_community_loading: true,
            leave_mod_team_loading: true,
            follow_community_loading: true,
            block_community_loading: true,
            purge_community_loading: true,
        }
    }

    #[test]
    fn defaults_are_all_closed_and_idle() {
        let state = SidebarState::default();
        assert!(!state.show_edit);
        assert!(!state.show_remove_dialog);
        assert!(!state.show_purge_dialog);
        assert!(!state.show_confirm_leave_mod_team);
        assert!(!state.any_loading());
        assert_eq!(state.remove_reason, None);
    }

    #[test]
    fn new_community_clears_dialogs_and_loading_but_keeps_reasons() {
        let mut state = busy_state();
        state.reset_for_new_community();

        assert!(!state.show_edit);
        assert!(!state.show_remove_dialog);
        assert!(!state.show_purge_dialog);
        assert!(!state.any_loading());
        assert_eq!(state.remove_reason.as_deref(), Some("spam"));
        assert_eq!(state.purge_reason.as_deref(), Some("illegal"));
        // Owned by the moderator list, not the community.
        assert!(state.show_confirm_leave_mod_team);
    }

    #[test]
    fn new_moderators_only_collapses_leave_confirmation() {
        let mut state = busy_state();
        state.reset_for_new_moderators();

        assert!(!state.show_confirm_leave_mod_team);
        assert!(state.show_edit);
        assert!(state.any_loading());
    }

    #[test]
    fn opening_purge_closes_remove() {
        let mut state = SidebarState::default();
        state.open_remove_dialog();
        state.open_purge_dialog();

        assert!(state.show_purge_dialog);
        assert!(!state.show_remove_dialog);
    }

    #[test]
    fn opening_remove_leaves_purge_open() {
        let mut state = SidebarState::default();
        state.open_purge_dialog();
        state.open_remove_dialog();

        assert!(state.show_purge_dialog);
        assert!(state.show_remove_dialog);
    }

    #[test]
    fn blank_reason_is_stored_as_none() {
        let mut state = SidebarState::default();
        state.set_remove_reason("   ");
        assert_eq!(state.remove_reason, None);

        state.set_purge_reason("duplicate of !rust");
        assert_eq!(state.purge_reason.as_deref(), Some("duplicate of !rust"));

        state.set_purge_reason("");
        assert_eq!(state.purge_reason, None);
    }

    #[test]
    fn edit_and_leave_toggles() {
        let mut state = SidebarState::default();
        state.open_edit();
        assert!(state.show_edit);
        state.cancel_edit();
        assert!(!state.show_edit);

        state.confirm_leave_mod_team();
        assert!(state.show_confirm_leave_mod_team);
        state.cancel_leave_mod_team();
        assert!(!state.show_confirm_leave_mod_team);
    }
}
