//! Small presentational pieces shared by the sidebar and the edit form.

use community_types::{Community, Person};
use dioxus::prelude::*;

use crate::format::community_apub_name;
use crate::i18n::t;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        span {
            class: "spinner-border spinner-border-sm",
            role: "status",
            "aria-label": t("loading"),
        }
    }
}

#[component]
pub fn Icon(icon: &'static str, #[props(default)] classes: String) -> Element {
    let sprite = format!("<use href=\"#icon-{icon}\"></use>");
    rsx! {
        svg {
            class: "icon {classes}",
            dangerous_inner_html: sprite,
        }
    }
}

#[component]
pub fn PurgeWarning() -> Element {
    rsx! {
        div { class: "text-danger",
            Icon { icon: "alert-triangle", classes: "icon-inline mr-2".to_string() }
            {t("purge_warning")}
        }
    }
}

#[component]
pub fn BannerIconHeader(icon: Option<String>, banner: Option<String>) -> Element {
    rsx! {
        div { class: "position-relative mb-2",
            if let Some(banner) = banner {
                img { class: "banner img-fluid", src: "{banner}" }
            }
            if let Some(icon) = icon {
                img { class: "ml-2 mb-0 rounded-circle avatar-overlay", src: "{icon}" }
            }
        }
    }
}

/// Link to a community page. `real_link` points at the canonical ActivityPub
/// id instead of the local route; `use_apub_name` shows `!name@host`.
#[component]
pub fn CommunityLink(
    community: Community,
    #[props(default)] real_link: bool,
    #[props(default)] use_apub_name: bool,
    #[props(default)] muted: bool,
    #[props(default)] hide_avatar: bool,
) -> Element {
    let href = if real_link {
        community.actor_id.clone()
    } else {
        format!("/c/{}", community.name)
    };
    let label = if use_apub_name {
        community_apub_name(&community)
    } else {
        community.title.clone()
    };
    let class = if muted { "text-muted" } else { "" };
    let title = community.title.clone();

    rsx! {
        a { class: "{class}", href: "{href}", title: "{title}",
            if !hide_avatar {
                if let Some(icon) = community.icon.clone() {
                    img { class: "rounded-circle mr-2 avatar", src: "{icon}" }
                }
            }
            "{label}"
        }
    }
}

#[component]
pub fn PersonListing(person: Person) -> Element {
    let label = person
        .display_name
        .clone()
        .unwrap_or_else(|| person.name.clone());
    let href = if person.local {
        format!("/u/{}", person.name)
    } else {
        person.actor_id.clone()
    };
    let handle = person.name.clone();

    rsx! {
        a { class: "text-info", href: "{href}", title: "{handle}",
            if let Some(avatar) = person.avatar.clone() {
                img { class: "rounded-circle mr-2 avatar", src: "{avatar}" }
            }
            "{label}"
        }
    }
}
