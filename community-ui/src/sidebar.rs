//! Community sidebar
//!
//! Renders the community header, subscribe/block controls, stats, moderators
//! and the moderation forms, or the edit form while editing. Every action is
//! forwarded to a caller-supplied handler; the caller performs the request and
//! hands down a new snapshot, which resets the transient state here.

pub mod controls;
pub mod intents;
pub mod permissions;
pub mod state;

use community_types::{
    AddModToCommunity, BlockCommunity, CommunityModeratorView, CommunityView, DeleteCommunity,
    EditCommunity, FollowCommunity, Language, LanguageId, PersonView, PurgeCommunity,
    RemoveCommunity, Sensitive,
};
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::community_form::CommunityForm;
use crate::components::{
    BannerIconHeader, CommunityLink, Icon, PersonListing, PurgeWarning, Spinner,
};
use crate::format::hostname;
use crate::i18n::{community_not_logged_in_alert, t, t_count};
use crate::markdown::md_to_html;
use crate::session::Session;
use crate::snapshot::Snapshot;

pub use controls::SidebarControls;
pub use state::SidebarState;

#[component]
pub fn Sidebar(
    community_view: Snapshot<CommunityView>,
    moderators: Snapshot<Vec<CommunityModeratorView>>,
    admins: Vec<PersonView>,
    all_languages: Vec<Language>,
    site_languages: Vec<LanguageId>,
    community_languages: Option<Vec<LanguageId>>,
    online: u32,
    #[props(default)] enable_nsfw: bool,
    #[props(default)] show_icon: bool,
    #[props(default)] editable: bool,
    on_delete_community: EventHandler<DeleteCommunity>,
    on_remove_community: EventHandler<RemoveCommunity>,
    on_leave_mod_team: EventHandler<AddModToCommunity>,
    on_follow_community: EventHandler<FollowCommunity>,
    on_block_community: EventHandler<BlockCommunity>,
    on_purge_community: EventHandler<PurgeCommunity>,
    on_edit_community: EventHandler<EditCommunity>,
) -> Element {
    let session = use_context::<Signal<Session>>();
    let mut state = use_signal(SidebarState::default);

    // Snapshots compare by identity, so an answer with unchanged data still
    // clears dialogs and spinners.
    use_effect(use_reactive!(|community_view| {
        let _ = &community_view;
        state.write().reset_for_new_community();
    }));
    use_effect(use_reactive!(|moderators| {
        let _ = &moderators;
        state.write().reset_for_new_moderators();
    }));

    let auth = move || -> Option<Sensitive<String>> {
        match session.read().auth_required() {
            Ok(auth) => Some(auth),
            Err(e) => {
                warn!("Sidebar action needs a session: {}", e);
                None
            }
        }
    };

    let follow = use_callback({
        let cv = community_view.clone();
        move |_: ()| {
            let Some(auth) = auth() else { return };
            let form = intents::toggle_follow(&mut state.write(), &cv, auth);
            on_follow_community.call(form);
        }
    });

    let block = use_callback({
        let cv = community_view.clone();
        move |_: ()| {
            let Some(auth) = auth() else { return };
            let form = intents::toggle_block(&mut state.write(), &cv, auth);
            on_block_community.call(form);
        }
    });

    let leave_mod_team = use_callback({
        let cv = community_view.clone();
        move |_: ()| {
            let Some(auth) = auth() else { return };
            let me = session.read().my_user_info.clone();
            if let Some(form) = intents::leave_mod_team(&mut state.write(), &cv, me.as_ref(), auth)
            {
                on_leave_mod_team.call(form);
            }
        }
    });

    let delete = use_callback({
        let cv = community_view.clone();
        move |_: ()| {
            let Some(auth) = auth() else { return };
            let form = intents::toggle_delete(&mut state.write(), &cv, auth);
            on_delete_community.call(form);
        }
    });

    let remove = use_callback({
        let cv = community_view.clone();
        move |_: ()| {
            let Some(auth) = auth() else { return };
            let form = intents::toggle_remove(&mut state.write(), &cv, auth);
            on_remove_community.call(form);
        }
    });

    let purge = use_callback({
        let cv = community_view.clone();
        move |_: ()| {
            let Some(auth) = auth() else { return };
            let form = intents::purge(&mut state.write(), &cv, auth);
            on_purge_community.call(form);
        }
    });

    let st = state.read().clone();

    if st.show_edit {
        return rsx! {
            div {
                CommunityForm {
                    community_view: community_view.clone(),
                    all_languages,
                    site_languages,
                    community_languages,
                    enable_nsfw,
                    on_upsert_community: on_edit_community,
                    on_cancel: move |_| state.write().cancel_edit(),
                }
            }
        };
    }

    let me = session.read().my_user_info.clone();
    let controls =
        SidebarControls::resolve(&community_view, &moderators, &admins, me.as_ref(), editable);
    let community = community_view.community.clone();
    let counts = community_view.counts.clone();

    // ── Header ───────────────────────────────────────────────────────────────

    let title = rsx! {
        div {
            h5 { class: "mb-0",
                if show_icon && !community.removed {
                    BannerIconHeader { icon: community.icon.clone(), banner: community.banner.clone() }
                }
                span { class: "mr-2",
                    CommunityLink { community: community.clone(), hide_avatar: true }
                }
                if controls.joined_button {
                    button {
                        class: "btn btn-secondary btn-sm mr-2",
                        onclick: move |_| follow.call(()),
                        if st.follow_community_loading {
                            Spinner {}
                        } else {
                            Icon { icon: "check", classes: "icon-inline text-success mr-1".to_string() }
                            {t("joined")}
                        }
                    }
                }
                if controls.pending_button {
                    button {
                        class: "btn btn-warning mr-2",
                        onclick: move |_| follow.call(()),
                        if st.follow_community_loading {
                            Spinner {}
                        } else {
                            {t("subscribe_pending")}
                        }
                    }
                }
                if community.removed {
                    small { class: "mr-2 text-muted font-italic", {t("removed")} }
                }
                if community.deleted {
                    small { class: "mr-2 text-muted font-italic", {t("deleted")} }
                }
                if community.nsfw {
                    small { class: "mr-2 text-muted font-italic", {t("nsfw")} }
                }
            }
            CommunityLink {
                community: community.clone(),
                real_link: true,
                use_apub_name: true,
                muted: true,
                hide_avatar: true,
            }
        }
    };

    // ── Moderator / admin actions ────────────────────────────────────────────

    let delete_label = if community.deleted {
        t("restore")
    } else {
        t("delete")
    };
    let trash_classes = if community.deleted {
        "icon-inline text-danger".to_string()
    } else {
        "icon-inline".to_string()
    };

    let admin_buttons = rsx! {
        ul { class: "list-inline mb-1 text-muted font-weight-bold",
            if controls.edit {
                li { class: "list-inline-item-action",
                    button {
                        class: "btn btn-link text-muted d-inline-block",
                        "data-tippy-content": t("edit"),
                        "aria-label": t("edit"),
                        onclick: move |_| state.write().open_edit(),
                        Icon { icon: "edit", classes: "icon-inline".to_string() }
                    }
                }
            }
            if controls.leave_mod_team {
                if !st.show_confirm_leave_mod_team {
                    li { class: "list-inline-item-action",
                        button {
                            class: "btn btn-link text-muted d-inline-block",
                            onclick: move |_| state.write().confirm_leave_mod_team(),
                            {t("leave_mod_team")}
                        }
                    }
                } else {
                    li { class: "list-inline-item-action", {t("are_you_sure")} }
                    li { class: "list-inline-item-action",
                        button {
                            class: "btn btn-link text-muted d-inline-block",
                            onclick: move |_| leave_mod_team.call(()),
                            if st.leave_mod_team_loading {
                                Spinner {}
                            } else {
                                {t("yes")}
                            }
                        }
                    }
                    li { class: "list-inline-item-action",
                        button {
                            class: "btn btn-link text-muted d-inline-block",
                            onclick: move |_| state.write().cancel_leave_mod_team(),
                            {t("no")}
                        }
                    }
                }
            }
            if controls.delete_restore {
                li { class: "list-inline-item-action",
                    button {
                        class: "btn btn-link text-muted d-inline-block",
                        "data-tippy-content": delete_label,
                        "aria-label": delete_label,
                        onclick: move |_| delete.call(()),
                        if st.delete_community_loading {
                            Spinner {}
                        } else {
                            Icon { icon: "trash", classes: trash_classes }
                        }
                    }
                }
            }
            if controls.remove_restore || controls.purge {
                li { class: "list-inline-item",
                    if controls.remove_restore {
                        if !community.removed {
                            button {
                                class: "btn btn-link text-muted d-inline-block",
                                onclick: move |_| state.write().open_remove_dialog(),
                                {t("remove")}
                            }
                        } else {
                            button {
                                class: "btn btn-link text-muted d-inline-block",
                                onclick: move |_| remove.call(()),
                                if st.remove_community_loading {
                                    Spinner {}
                                } else {
                                    {t("restore")}
                                }
                            }
                        }
                    }
                    if controls.purge {
                        button {
                            class: "btn btn-link text-muted d-inline-block",
                            "aria-label": t("purge_community"),
                            onclick: move |_| state.write().open_purge_dialog(),
                            {t("purge_community")}
                        }
                    }
                }
            }
        }
        if st.show_remove_dialog {
            form {
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    remove.call(());
                },
                div { class: "form-group",
                    label { class: "col-form-label", r#for: "remove-reason", {t("reason")} }
                    input {
                        r#type: "text",
                        id: "remove-reason",
                        class: "form-control mr-2",
                        placeholder: t("optional"),
                        value: st.remove_reason.clone().unwrap_or_default(),
                        oninput: move |e: FormEvent| state.write().set_remove_reason(&e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "col-form-label", r#for: "remove-expires", {t("expires")} }
                    input {
                        r#type: "date",
                        id: "remove-expires",
                        class: "form-control mr-2",
                        value: st.remove_expires.clone().unwrap_or_default(),
                        oninput: move |e: FormEvent| state.write().set_remove_expires(&e.value()),
                    }
                }
                div { class: "form-group",
                    button { r#type: "submit", class: "btn btn-secondary",
                        if st.remove_community_loading {
                            Spinner {}
                        } else {
                            {t("remove_community")}
                        }
                    }
                }
            }
        }
        if st.show_purge_dialog {
            form {
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    purge.call(());
                },
                div { class: "form-group", PurgeWarning {} }
                div { class: "form-group",
                    label { class: "sr-only", r#for: "purge-reason", {t("reason")} }
                    input {
                        r#type: "text",
                        id: "purge-reason",
                        class: "form-control mr-2",
                        placeholder: t("reason"),
                        value: st.purge_reason.clone().unwrap_or_default(),
                        oninput: move |e: FormEvent| state.write().set_purge_reason(&e.value()),
                    }
                }
                div { class: "form-group",
                    if st.purge_community_loading {
                        Spinner {}
                    } else {
                        button {
                            r#type: "submit",
                            class: "btn btn-secondary",
                            "aria-label": t("purge_community"),
                            {t("purge_community")}
                        }
                    }
                }
            }
        }
    };

    // ── Subscribe / post / block ─────────────────────────────────────────────

    let create_post_class = if controls.create_post_disabled {
        "btn btn-secondary btn-block mb-2 no-click"
    } else {
        "btn btn-secondary btn-block mb-2"
    };
    let create_post_href = format!("/create_post?communityId={}", community.id);
    let block_label = if community_view.blocked {
        t("unblock_community")
    } else {
        t("block_community")
    };

    // ── Description, stats, moderators ───────────────────────────────────────

    let description_html = community.description.as_deref().map(md_to_html);
    let modlog_href = format!("/modlog/{}", community.id);
    let activity = [
        (
            counts.users_active_day,
            "active_users_in_the_last_day",
            t("day").to_string(),
        ),
        (
            counts.users_active_week,
            "active_users_in_the_last_week",
            t("week").to_string(),
        ),
        (
            counts.users_active_month,
            "active_users_in_the_last_month",
            t("month").to_string(),
        ),
        (
            counts.users_active_half_year,
            "active_users_in_the_last_six_months",
            t_count("number_of_months", 6),
        ),
    ];
    let mod_people: Vec<_> = moderators
        .iter()
        .map(|m| (m.moderator.id, m.moderator.clone()))
        .collect();

    rsx! {
        div {
            div { class: "card border-secondary mb-3",
                div { class: "card-body",
                    {title}
                    if editable && controls.any_admin_action() {
                        {admin_buttons}
                    }
                    if me.is_some() && controls.subscribe_button {
                        div { class: "mb-2",
                            button {
                                class: "btn btn-secondary btn-block",
                                onclick: move |_| follow.call(()),
                                if st.follow_community_loading {
                                    Spinner {}
                                } else {
                                    {t("subscribe")}
                                }
                            }
                        }
                    }
                    if controls.create_post {
                        a { class: create_post_class, href: create_post_href, {t("create_a_post")} }
                    }
                    if me.is_some() && controls.block_button {
                        div { class: "mb-2",
                            button {
                                class: "btn btn-danger btn-block",
                                onclick: move |_| block.call(()),
                                if st.block_community_loading {
                                    Spinner {}
                                } else {
                                    {block_label}
                                }
                            }
                        }
                    }
                    if controls.not_logged_in_alert {
                        div { class: "alert alert-info", role: "alert",
                            {community_not_logged_in_alert(&community.name, &hostname(&community.actor_id))}
                        }
                    }
                }
            }
            div { class: "card border-secondary mb-3",
                div { class: "card-body",
                    if let Some(html) = description_html {
                        div { class: "md-div", dangerous_inner_html: html }
                    }
                    ul { class: "my-1 list-inline",
                        li { class: "list-inline-item badge badge-secondary",
                            {t_count("number_online", i64::from(online))}
                        }
                        for (count, hint_key, period) in activity {
                            li {
                                key: "{hint_key}",
                                class: "list-inline-item badge badge-secondary pointer",
                                "data-tippy-content": t_count(hint_key, count),
                                {format!("{} / {}", t_count("number_of_users", count), period)}
                            }
                        }
                        li { class: "list-inline-item badge badge-secondary",
                            {t_count("number_of_subscribers", counts.subscribers)}
                        }
                        li { class: "list-inline-item badge badge-secondary",
                            {t_count("number_of_posts", counts.posts)}
                        }
                        li { class: "list-inline-item badge badge-secondary",
                            {t_count("number_of_comments", counts.comments)}
                        }
                        li { class: "list-inline-item",
                            a { class: "badge badge-primary", href: modlog_href, {t("modlog")} }
                        }
                    }
                    ul { class: "list-inline small",
                        li { class: "list-inline-item", {format!("{}: ", t("mods"))} }
                        for (id, person) in mod_people {
                            li { key: "{id}", class: "list-inline-item",
                                PersonListing { person }
                            }
                        }
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
    use community_types::{MyUserInfo, SubscribedType};

    const ADMIN_ROW: &str = "list-inline mb-1 text-muted font-weight-bold";
    const BLOCK_BUTTON: &str = "btn btn-danger btn-block";

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        me: Option<MyUserInfo>,
        community_view: CommunityView,
        moderators: Vec<CommunityModeratorView>,
        admins: Vec<PersonView>,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let me = props.me.clone();
        use_context_provider(|| {
            Signal::new(Session {
                jwt: me.as_ref().map(|_| Sensitive::from("jwt")),
                my_user_info: me,
            })
        });
        let community_view = use_hook(|| Snapshot::new(props.community_view.clone()));
        let moderators = use_hook(|| Snapshot::new(props.moderators.clone()));

        rsx! {
            Sidebar {
                community_view,
                moderators,
                admins: props.admins.clone(),
                all_languages: Vec::new(),
                site_languages: Vec::new(),
                community_languages: None,
                online: 7,
                editable: true,
                on_delete_community: |_| {},
                on_remove_community: |_| {},
                on_leave_mod_team: |_| {},
                on_follow_community: |_| {},
                on_block_community: |_| {},
                on_purge_community: |_| {},
                on_edit_community: |_| {},
            }
        }
    }

    fn render(me: Option<MyUserInfo>, community_view: CommunityView, mods: &[i32]) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                me,
                community_view,
                moderators: moderators(mods),
                admins: admins(&[99]),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn anonymous_visitor_gets_login_alert_and_no_actions() {
        let html = render(None, community_view(), &[1]);

        assert!(html.contains("alert alert-info"));
        assert!(html.contains("Log in or sign up to subscribe to !rust"));
        assert!(!html.contains(BLOCK_BUTTON));
        assert!(!html.contains(ADMIN_ROW));
    }

    #[test]
    fn member_sees_subscribe_and_block() {
        let html = render(Some(user(5)), community_view(), &[1]);

        assert!(html.contains(BLOCK_BUTTON));
        assert!(html.contains("Block Community"));
        assert!(!html.contains("alert alert-info"));
        assert!(!html.contains(ADMIN_ROW));
    }

    #[test]
    fn subscribed_member_sees_joined_instead_of_block() {
        let mut view = community_view();
        view.subscribed = SubscribedType::Subscribed;
        let html = render(Some(user(5)), view, &[1]);

        assert!(html.contains("Joined"));
        assert!(!html.contains(BLOCK_BUTTON));
    }

    #[test]
    fn top_mod_gets_delete_but_not_leave() {
        let html = render(Some(user(1)), community_view(), &[1, 2]);

        assert!(html.contains(ADMIN_ROW));
        assert!(html.contains("#icon-trash"));
        assert!(!html.contains("Leave Mod Team"));
        assert!(!html.contains("Purge Community"));
    }

    #[test]
    fn other_mod_can_leave_the_team() {
        let html = render(Some(user(2)), community_view(), &[1, 2]);

        assert!(html.contains("Leave Mod Team"));
        assert!(!html.contains("#icon-trash"));
    }

    #[test]
    fn admin_actions_render_with_dialogs_closed() {
        let html = render(Some(admin_user(99)), community_view(), &[1]);

        assert!(html.contains("Purge Community"));
        assert!(html.contains("remove"));
        assert!(!html.contains("remove-reason"));
        assert!(!html.contains("purge-reason"));
    }

    #[test]
    fn removed_community_disables_posting() {
        let mut view = community_view();
        view.community.removed = true;
        let html = render(Some(user(5)), view, &[1]);

        assert!(html.contains("no-click"));
        assert!(html.contains("removed"));
    }

    #[test]
    fn description_and_stats_are_rendered() {
        let html = render(None, community_view(), &[1]);

        assert!(html.contains("<strong>Rust</strong>"));
        assert!(html.contains("12.3K subscribers"));
        assert!(html.contains("7 users online"));
        assert!(html.contains("/modlog/17"));
        assert!(html.contains("user1"));
    }
}
