use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Wrapper for values that must never show up in logs, such as the auth token.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(item: T) -> Self {
        Sensitive(item)
    }
}

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("*****")
    }
}

impl<T> AsRef<T> for Sensitive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl AsRef<str> for Sensitive<String> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Sensitive<String> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for Sensitive<String> {
    fn from(t: String) -> Self {
        Sensitive(t)
    }
}

impl From<&str> for Sensitive<String> {
    fn from(t: &str) -> Self {
        Sensitive(t.to_string())
    }
}
