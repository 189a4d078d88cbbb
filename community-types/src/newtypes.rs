use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export, export_to = "../../community-ui/src/types/generated.ts")]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

id_newtype!(
    /// Database id of a community
    CommunityId
);
id_newtype!(
    /// Database id of a person (local or federated)
    PersonId
);
id_newtype!(LanguageId);
