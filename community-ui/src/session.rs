//! Signed-in user and auth token, shared through a `Signal<Session>` context.

use community_types::{MyUserInfo, Sensitive};

use crate::error::ClientError;

const JWT_KEY: &str = "jwt";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub jwt: Option<Sensitive<String>>,
    pub my_user_info: Option<MyUserInfo>,
}

impl Session {
    /// Session with the token cached in local storage; user info arrives later
    /// from the site endpoint.
    pub fn from_storage() -> Self {
        Self {
            jwt: get_cached_jwt().map(Sensitive::new),
            my_user_info: None,
        }
    }

    /// Token for requests that need a signed-in user.
    pub fn auth_required(&self) -> Result<Sensitive<String>, ClientError> {
        self.jwt.clone().ok_or(ClientError::NotLoggedIn)
    }
}

pub fn get_cached_jwt() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(JWT_KEY).ok().flatten())
        .filter(|jwt| !jwt.is_empty())
}

pub fn set_cached_jwt(jwt: &str) {
    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        if let Err(e) = storage.set_item(JWT_KEY, jwt) {
            dioxus_logger::tracing::warn!("Failed to cache auth token: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::user;

    #[test]
    fn auth_required_without_token_fails() {
        let session = Session::default();
        assert!(matches!(
            session.auth_required(),
            Err(ClientError::NotLoggedIn)
        ));
    }

    #[test]
    fn auth_required_returns_token() {
        let session = Session {
            jwt: Some(Sensitive::from("abc")),
            my_user_info: Some(user(5)),
        };
        assert_eq!(&*session.auth_required().unwrap(), "abc");
    }
}
