//! English strings for the community sidebar.
//!
//! Lookups fall back to the key itself so a missing entry shows up in the UI
//! instead of rendering nothing.

use crate::format::num_to_si;

pub fn t(key: &'static str) -> &'static str {
    match key {
        "action_failed" => "That didn't work",
        "are_you_sure" => "are you sure?",
        "banner" => "Banner",
        "block_community" => "Block Community",
        "cancel" => "Cancel",
        "community_purged" => "This community was purged.",
        "create_a_post" => "Create a post",
        "day" => "day",
        "delete" => "delete",
        "deleted" => "deleted",
        "description" => "Description",
        "discussion_languages" => "Discussion Languages",
        "dismiss" => "Dismiss",
        "display_name" => "Display name",
        "edit" => "edit",
        "expires" => "Expires",
        "icon" => "Icon",
        "joined" => "Joined",
        "leave_mod_team" => "Leave Mod Team",
        "loading" => "Loading",
        "modlog" => "Modlog",
        "mods" => "Mods",
        "month" => "month",
        "no" => "no",
        "nsfw" => "NSFW",
        "only_mods_can_post_in_community" => "Only moderators can post in this community",
        "optional" => "Optional",
        "purge_community" => "Purge Community",
        "purge_warning" => {
            "Purging removes this community and all of its content permanently. It cannot be undone."
        }
        "reason" => "Reason",
        "remove" => "remove",
        "remove_community" => "Remove Community",
        "removed" => "removed",
        "restore" => "restore",
        "save" => "Save",
        "subscribe" => "Subscribe",
        "subscribe_pending" => "Subscribe Pending",
        "unblock_community" => "Unblock Community",
        "week" => "week",
        "yes" => "yes",
        _ => key,
    }
}

/// Plural-aware lookup. `{count}` is replaced with the compact form of `count`.
pub fn t_count(key: &'static str, count: i64) -> String {
    let (one, other) = match key {
        "number_online" => ("{count} user online", "{count} users online"),
        "number_of_users" => ("{count} user", "{count} users"),
        "number_of_months" => ("{count} month", "{count} months"),
        "number_of_subscribers" => ("{count} subscriber", "{count} subscribers"),
        "number_of_posts" => ("{count} post", "{count} posts"),
        "number_of_comments" => ("{count} comment", "{count} comments"),
        "active_users_in_the_last_day" => (
            "{count} active user in the last day",
            "{count} active users in the last day",
        ),
        "active_users_in_the_last_week" => (
            "{count} active user in the last week",
            "{count} active users in the last week",
        ),
        "active_users_in_the_last_month" => (
            "{count} active user in the last month",
            "{count} active users in the last month",
        ),
        "active_users_in_the_last_six_months" => (
            "{count} active user in the last 6 months",
            "{count} active users in the last 6 months",
        ),
        _ => (key, key),
    };
    let template = if count == 1 { one } else { other };
    template.replace("{count}", &num_to_si(count))
}

pub fn community_not_logged_in_alert(community: &str, instance: &str) -> String {
    format!(
        "This community is hosted on {instance}. Log in or sign up to subscribe to !{community} and join the discussion."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_translate() {
        assert_eq!(t("joined"), "Joined");
        assert_eq!(t("purge_community"), "Purge Community");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_label"), "no_such_label");
        assert_eq!(t_count("no_such_count", 3), "no_such_count");
    }

    #[test]
    fn counts_pluralise_and_compact() {
        assert_eq!(t_count("number_of_subscribers", 1), "1 subscriber");
        assert_eq!(t_count("number_of_subscribers", 0), "0 subscribers");
        assert_eq!(t_count("number_of_posts", 12_345), "12.3K posts");
        assert_eq!(t_count("number_online", 2), "2 users online");
    }

    #[test]
    fn logged_out_alert_names_instance() {
        let alert = community_not_logged_in_alert("rust", "lemmy.ml");
        assert!(alert.contains("lemmy.ml"));
        assert!(alert.contains("!rust"));
    }
}
