//! Community edit form, swapped in for the sidebar while editing.

use community_types::{
    Community, CommunityView, EditCommunity, Language, LanguageId, Sensitive,
};
use dioxus::prelude::*;

use crate::components::Spinner;
use crate::i18n::t;
use crate::session::Session;
use crate::snapshot::Snapshot;

/// Editable copy of the community fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunityFormInput {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub banner: String,
    pub nsfw: bool,
    pub posting_restricted_to_mods: bool,
    pub discussion_languages: Vec<LanguageId>,
}

impl CommunityFormInput {
    pub fn from_view(
        community_view: &CommunityView,
        community_languages: Option<&[LanguageId]>,
    ) -> Self {
        let community = &community_view.community;
        Self {
            title: community.title.clone(),
            description: community.description.clone().unwrap_or_default(),
            icon: community.icon.clone().unwrap_or_default(),
            banner: community.banner.clone().unwrap_or_default(),
            nsfw: community.nsfw,
            posting_restricted_to_mods: community.posting_restricted_to_mods,
            discussion_languages: community_languages.map(<[_]>::to_vec).unwrap_or_default(),
        }
    }

    pub fn toggle_language(&mut self, id: LanguageId) {
        if let Some(pos) = self.discussion_languages.iter().position(|l| *l == id) {
            self.discussion_languages.remove(pos);
        } else {
            self.discussion_languages.push(id);
        }
    }
}

/// Languages the community may pick from: the site's, or all when the site
/// allows every language.
pub fn selectable_languages(
    all_languages: &[Language],
    site_languages: &[LanguageId],
) -> Vec<Language> {
    all_languages
        .iter()
        .filter(|l| site_languages.is_empty() || site_languages.contains(&l.id))
        .cloned()
        .collect()
}

/// Edit request for `community`. Blank image fields clear an image the
/// community had and are left out otherwise.
pub fn build_edit_form(
    community: &Community,
    input: &CommunityFormInput,
    site_languages: &[LanguageId],
    enable_nsfw: bool,
    auth: Sensitive<String>,
) -> EditCommunity {
    let languages = input
        .discussion_languages
        .iter()
        .copied()
        .filter(|id| site_languages.is_empty() || site_languages.contains(id))
        .collect();

    EditCommunity {
        community_id: community.id,
        title: Some(input.title.trim().to_string()),
        description: Some(input.description.clone()),
        icon: image_field(community.icon.as_deref(), &input.icon),
        banner: image_field(community.banner.as_deref(), &input.banner),
        nsfw: enable_nsfw.then_some(input.nsfw),
        posting_restricted_to_mods: Some(input.posting_restricted_to_mods),
        discussion_languages: Some(languages),
        auth,
    }
}

fn image_field(previous: Option<&str>, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        Some(trimmed.to_string())
    } else if previous.is_some_and(|url| !url.is_empty()) {
        Some(String::new())
    } else {
        None
    }
}

#[component]
pub fn CommunityForm(
    community_view: Snapshot<CommunityView>,
    all_languages: Vec<Language>,
    site_languages: Vec<LanguageId>,
    community_languages: Option<Vec<LanguageId>>,
    #[props(default)] enable_nsfw: bool,
    on_upsert_community: EventHandler<EditCommunity>,
    on_cancel: EventHandler<()>,
) -> Element {
    let session = use_context::<Signal<Session>>();
    let initial = CommunityFormInput::from_view(&community_view, community_languages.as_deref());
    let mut fields = use_signal(|| initial);
    let mut loading = use_signal(|| false);

    use_effect(use_reactive!(|community_view| {
        let _ = &community_view;
        loading.set(false);
    }));

    let community = community_view.community.clone();
    let form_site_languages = site_languages.clone();
    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let auth = match session.read().auth_required() {
            Ok(auth) => auth,
            Err(err) => {
                dioxus_logger::tracing::warn!("Cannot edit community: {}", err);
                return;
            }
        };
        loading.set(true);
        let form = build_edit_form(
            &community,
            &fields.read(),
            &form_site_languages,
            enable_nsfw,
            auth,
        );
        on_upsert_community.call(form);
    };

    let current = fields.read().clone();
    let language_choices: Vec<(LanguageId, String, bool)> =
        selectable_languages(&all_languages, &site_languages)
            .into_iter()
            .map(|l| {
                let picked = current.discussion_languages.contains(&l.id);
                (l.id, l.name, picked)
            })
            .collect();

    rsx! {
        form { onsubmit,
            div { class: "form-group",
                label { r#for: "community-title", {t("display_name")} }
                input {
                    id: "community-title",
                    r#type: "text",
                    class: "form-control",
                    required: true,
                    value: current.title.clone(),
                    oninput: move |e: FormEvent| fields.write().title = e.value(),
                }
            }
            div { class: "form-group",
                label { r#for: "community-description", {t("description")} }
                textarea {
                    id: "community-description",
                    class: "form-control",
                    rows: "6",
                    value: current.description.clone(),
                    oninput: move |e: FormEvent| fields.write().description = e.value(),
                }
            }
            div { class: "form-group",
                label { r#for: "community-icon", {t("icon")} }
                input {
                    id: "community-icon",
                    r#type: "url",
                    class: "form-control",
                    value: current.icon.clone(),
                    oninput: move |e: FormEvent| fields.write().icon = e.value(),
                }
            }
            div { class: "form-group",
                label { r#for: "community-banner", {t("banner")} }
                input {
                    id: "community-banner",
                    r#type: "url",
                    class: "form-control",
                    value: current.banner.clone(),
                    oninput: move |e: FormEvent| fields.write().banner = e.value(),
                }
            }
            if enable_nsfw {
                div { class: "form-check",
                    input {
                        id: "community-nsfw",
                        r#type: "checkbox",
                        class: "form-check-input",
                        checked: current.nsfw,
                        onchange: move |e: FormEvent| fields.write().nsfw = e.checked(),
                    }
                    label { class: "form-check-label", r#for: "community-nsfw", {t("nsfw")} }
                }
            }
            div { class: "form-check",
                input {
                    id: "community-only-mods-can-post",
                    r#type: "checkbox",
                    class: "form-check-input",
                    checked: current.posting_restricted_to_mods,
                    onchange: move |e: FormEvent| {
                        fields.write().posting_restricted_to_mods = e.checked()
                    },
                }
                label {
                    class: "form-check-label",
                    r#for: "community-only-mods-can-post",
                    {t("only_mods_can_post_in_community")}
                }
            }
            fieldset { class: "form-group",
                legend { class: "col-form-label", {t("discussion_languages")} }
                for (id, name, picked) in language_choices {
                    div { key: "{id}", class: "form-check form-check-inline",
                        input {
                            r#type: "checkbox",
                            class: "form-check-input",
                            checked: picked,
                            onchange: move |_| fields.write().toggle_language(id),
                        }
                        label { class: "form-check-label", "{name}" }
                    }
                }
            }
            div { class: "form-group",
                button { r#type: "submit", class: "btn btn-secondary mr-2",
                    if loading() { Spinner {} } else { {t("save")} }
                }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    {t("cancel")}
                }
            }
        }
    }
}
