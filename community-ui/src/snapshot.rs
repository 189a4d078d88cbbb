//! Server data handed down by the page.

use std::ops::Deref;
use std::rc::Rc;

/// One response from the server. Two snapshots are equal only when they are
/// the same handout, so a refetch that returns identical data still reads as
/// a change to components keyed on it.
#[derive(Debug)]
pub struct Snapshot<T> {
    inner: Rc<T>,
}

impl<T> Snapshot<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> From<T> for Snapshot<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::community_view;

    #[test]
    fn clones_share_the_handout() {
        let first = Snapshot::new(community_view());
        assert_eq!(first, first.clone());
    }

    #[test]
    fn equal_data_from_a_new_response_is_a_new_snapshot() {
        let before = Snapshot::new(community_view());
        let after = Snapshot::new(community_view());
        assert_eq!(*before, *after);
        assert_ne!(before, after);
    }
}
