use chrono::{TimeZone, Utc};
use community_types::{
    Community, CommunityAggregates, CommunityId, CommunityModeratorView, CommunityView,
    LocalUserView, MyUserInfo, Person, PersonId, PersonView, SubscribedType,
};

pub const COMMUNITY_ID: CommunityId = CommunityId(17);

pub fn community() -> Community {
    Community {
        id: COMMUNITY_ID,
        name: "rust".to_string(),
        title: "Rust Programming".to_string(),
        description: Some("Talk about **Rust**.".to_string()),
        removed: false,
        deleted: false,
        nsfw: false,
        actor_id: "https://lemmy.ml/c/rust".to_string(),
        local: true,
        icon: None,
        banner: None,
        hidden: false,
        posting_restricted_to_mods: false,
        published: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn community_view() -> CommunityView {
    CommunityView {
        community: community(),
        subscribed: SubscribedType::NotSubscribed,
        blocked: false,
        counts: CommunityAggregates {
            community_id: COMMUNITY_ID,
            subscribers: 12_345,
            posts: 980,
            comments: 4_021,
            users_active_day: 12,
            users_active_week: 160,
            users_active_month: 1_001,
            users_active_half_year: 3_300,
        },
    }
}

pub fn person(id: i32) -> Person {
    Person {
        id: PersonId(id),
        name: format!("user{id}"),
        display_name: None,
        avatar: None,
        actor_id: format!("https://lemmy.ml/u/user{id}"),
        local: true,
        admin: false,
        banned: false,
    }
}

pub fn user(id: i32) -> MyUserInfo {
    MyUserInfo {
        local_user_view: LocalUserView { person: person(id) },
    }
}

pub fn admin_user(id: i32) -> MyUserInfo {
    let mut info = user(id);
    info.local_user_view.person.admin = true;
    info
}

pub fn moderators(ids: &[i32]) -> Vec<CommunityModeratorView> {
    ids.iter()
        .map(|id| CommunityModeratorView {
            community: community(),
            moderator: person(*id),
        })
        .collect()
}

pub fn admins(ids: &[i32]) -> Vec<PersonView> {
    ids.iter()
        .map(|id| PersonView { person: person(*id) })
        .collect()
}
