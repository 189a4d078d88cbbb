//! Community page: owns the snapshots, performs the sidebar's requests and
//! hands fresh snapshots back down.

use community_types::{
    AddModToCommunity, BlockCommunity, CommunityModeratorView, CommunityResponse, CommunityView,
    DeleteCommunity, EditCommunity, FollowCommunity, GetCommunityResponse, GetSiteResponse,
    LanguageId, PurgeCommunity, RemoveCommunity,
};
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};

use crate::api::{
    add_mod_to_community, block_community, delete_community, edit_community, follow_community,
    get_community, get_site, purge_community, remove_community,
};
use crate::components::Spinner;
use crate::error::{ClientError, Result};
use crate::i18n::t;
use crate::session::Session;
use crate::sidebar::Sidebar;
use crate::snapshot::Snapshot;

/// Community to show, from `?community=` in the page URL.
pub fn community_name_from_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("community"))
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "main".to_string())
}

/// What the page currently holds for the community. Every server answer
/// replaces the affected part with a new [`Snapshot`], even when the data is
/// unchanged, so the sidebar resets its pending state.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunitySnapshot {
    pub community_view: Snapshot<CommunityView>,
    pub moderators: Snapshot<Vec<CommunityModeratorView>>,
    pub discussion_languages: Vec<LanguageId>,
    pub online: u32,
}

impl From<GetCommunityResponse> for CommunitySnapshot {
    fn from(response: GetCommunityResponse) -> Self {
        Self {
            community_view: Snapshot::new(response.community_view),
            moderators: Snapshot::new(response.moderators),
            discussion_languages: response.discussion_languages,
            online: response.online,
        }
    }
}

impl CommunitySnapshot {
    pub fn apply_community_view(&mut self, community_view: CommunityView) {
        self.community_view = Snapshot::new(community_view);
    }

    /// Edits can change the languages without touching the view itself.
    pub fn apply_edit(&mut self, response: CommunityResponse) {
        self.apply_community_view(response.community_view);
        self.discussion_languages = response.discussion_languages;
    }

    pub fn apply_moderators(&mut self, moderators: Vec<CommunityModeratorView>) {
        self.moderators = Snapshot::new(moderators);
    }
}

/// Signals the request callbacks share.
#[derive(Clone, Copy)]
struct PageHandles {
    name: Signal<String>,
    session: Signal<Session>,
    community: Signal<Option<CommunitySnapshot>>,
    action_error: Signal<Option<String>>,
}

impl PageHandles {
    async fn load_community(mut self) -> Result<()> {
        let name = self.name.peek().clone();
        let jwt = self.session.peek().jwt.clone();
        let response = get_community(&name, jwt.as_ref()).await?;
        info!("Loaded community {}", response.community_view.community.name);
        self.community.set(Some(response.into()));
        Ok(())
    }

    /// Show the failure and refetch, which hands the sidebar a new snapshot
    /// and clears its spinners.
    async fn fail(mut self, action: &str, e: ClientError) {
        error!("Failed to {}: {}", action, e);
        self.action_error
            .set(Some(format!("{}: {}", t("action_failed"), e)));
        if let Err(e) = self.load_community().await {
            error!("Failed to refetch community: {}", e);
        }
    }

    fn update(mut self, apply: impl FnOnce(&mut CommunitySnapshot)) {
        self.action_error.set(None);
        if let Some(snapshot) = self.community.write().as_mut() {
            apply(snapshot);
        }
    }
}

#[component]
pub fn CommunityPage(name: String) -> Element {
    let mut session = use_context_provider(|| Signal::new(Session::from_storage()));
    let mut site = use_signal(|| None::<GetSiteResponse>);
    let community = use_signal(|| None::<CommunitySnapshot>);
    let mut load_error = use_signal(|| None::<String>);
    let mut action_error = use_signal(|| None::<String>);
    let mut purged = use_signal(|| false);
    let name_signal = use_signal(|| name.clone());
    let page = PageHandles {
        name: name_signal,
        session,
        community,
        action_error,
    };

    use_effect(move || {
        let name = name_signal();
        spawn(async move {
            let jwt = session.peek().jwt.clone();
            match get_site(jwt.as_ref()).await {
                Ok(response) => {
                    session.write().my_user_info = response.my_user_info.clone();
                    site.set(Some(response));
                }
                Err(e) => error!("Failed to fetch site: {}", e),
            }
            match page.load_community().await {
                Ok(()) => load_error.set(None),
                Err(e) => {
                    error!("Failed to fetch community {}: {}", name, e);
                    load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_follow = move |form: FollowCommunity| {
        spawn(async move {
            match follow_community(&form).await {
                Ok(response) => page.update(|c| c.apply_community_view(response.community_view)),
                Err(e) => page.fail("follow community", e).await,
            }
        });
    };

    let on_block = move |form: BlockCommunity| {
        spawn(async move {
            match block_community(&form).await {
                Ok(response) => page.update(|c| c.apply_community_view(response.community_view)),
                Err(e) => page.fail("block community", e).await,
            }
        });
    };

    let on_delete = move |form: DeleteCommunity| {
        spawn(async move {
            match delete_community(&form).await {
                Ok(response) => page.update(|c| c.apply_community_view(response.community_view)),
                Err(e) => page.fail("delete community", e).await,
            }
        });
    };

    let on_remove = move |form: RemoveCommunity| {
        spawn(async move {
            match remove_community(&form).await {
                Ok(response) => page.update(|c| c.apply_community_view(response.community_view)),
                Err(e) => page.fail("remove community", e).await,
            }
        });
    };

    let on_leave_mod_team = move |form: AddModToCommunity| {
        spawn(async move {
            match add_mod_to_community(&form).await {
                Ok(response) => page.update(|c| c.apply_moderators(response.moderators)),
                Err(e) => page.fail("leave mod team", e).await,
            }
        });
    };

    let on_purge = move |form: PurgeCommunity| {
        spawn(async move {
            match purge_community(&form).await {
                Ok(response) if response.success => purged.set(true),
                Ok(_) => {
                    let refused = ClientError::Refused("purge community".to_string());
                    page.fail("purge community", refused).await;
                }
                Err(e) => page.fail("purge community", e).await,
            }
        });
    };

    let on_edit = move |form: EditCommunity| {
        spawn(async move {
            match edit_community(&form).await {
                Ok(response) => page.update(|c| c.apply_edit(response)),
                Err(e) => page.fail("edit community", e).await,
            }
        });
    };

    if purged() {
        return rsx! {
            div { class: "alert alert-warning", role: "alert", {t("community_purged")} }
        };
    }

    if let Some(message) = load_error() {
        return rsx! {
            div { class: "alert alert-danger", role: "alert", "{message}" }
        };
    }

    let Some(data) = community() else {
        return rsx! { Spinner {} };
    };
    let site_data = site();
    let admins = site_data.as_ref().map(|s| s.admins.clone()).unwrap_or_default();
    let all_languages = site_data
        .as_ref()
        .map(|s| s.all_languages.clone())
        .unwrap_or_default();
    let site_languages = site_data
        .as_ref()
        .map(|s| s.discussion_languages.clone())
        .unwrap_or_default();
    let enable_nsfw = site_data.as_ref().is_some_and(|s| s.enable_nsfw);

    rsx! {
        div { class: "container-lg",
            div { class: "row",
                main { class: "col-12 col-md-8" }
                aside { class: "col-12 col-md-4",
                    if let Some(message) = action_error() {
                        div { class: "alert alert-danger alert-dismissible", role: "alert",
                            "{message}"
                            button {
                                r#type: "button",
                                class: "close",
                                "aria-label": t("dismiss"),
                                onclick: move |_| action_error.set(None),
                                "×"
                            }
                        }
                    }
                    Sidebar {
                        community_view: data.community_view,
                        moderators: data.moderators,
                        admins,
                        all_languages,
                        site_languages,
                        community_languages: Some(data.discussion_languages),
                        online: data.online,
                        enable_nsfw,
                        show_icon: true,
                        editable: true,
                        on_delete_community: on_delete,
                        on_remove_community: on_remove,
                        on_leave_mod_team,
                        on_follow_community: on_follow,
                        on_block_community: on_block,
                        on_purge_community: on_purge,
                        on_edit_community: on_edit,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;

    fn loaded() -> CommunitySnapshot {
        GetCommunityResponse {
            community_view: community_view(),
            moderators: moderators(&[1, 2]),
            online: 4,
            discussion_languages: vec![LanguageId(1)],
        }
        .into()
    }

    #[test]
    fn languages_only_edit_hands_down_a_new_view() {
        let mut snapshot = loaded();
        let before = snapshot.community_view.clone();

        snapshot.apply_edit(CommunityResponse {
            community_view: community_view(),
            discussion_languages: vec![LanguageId(1), LanguageId(2)],
        });

        assert_eq!(*snapshot.community_view, *before);
        assert_ne!(snapshot.community_view, before);
        assert_eq!(
            snapshot.discussion_languages,
            vec![LanguageId(1), LanguageId(2)]
        );
    }

    #[test]
    fn unchanged_answer_still_replaces_the_view() {
        let mut snapshot = loaded();
        let before = snapshot.clone();

        snapshot.apply_community_view(community_view());

        assert_ne!(snapshot, before);
        assert_eq!(snapshot.moderators, before.moderators);
    }

    #[test]
    fn new_moderator_list_leaves_the_view_alone() {
        let mut snapshot = loaded();
        let before = snapshot.clone();

        snapshot.apply_moderators(moderators(&[1]));

        assert_eq!(snapshot.community_view, before.community_view);
        assert_ne!(snapshot.moderators, before.moderators);
        assert_eq!(snapshot.moderators.len(), 1);
    }
}
