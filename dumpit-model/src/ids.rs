use crate::error::ModelError;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $name(pub Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            /// Time-ordered id, so sorting by id follows creation order.
            pub fn new() -> Self {
                $name(Uuid::now_v7())
            }

            pub fn from_string(id: &str) -> Result<Self, ModelError> {
                if id.is_empty() {
                    return Err(ModelError::InvalidId(format!(
                        "{} cannot be empty",
                        $label
                    )));
                }
                id.parse::<Uuid>().map($name).map_err(|err| {
                    ModelError::InvalidId(format!("{} `{id}`: {err}", $label))
                })
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                $name(id)
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Strongly typed ID for uploaded or linked images
    ImageID,
    "image id"
);

uuid_id!(
    /// Strongly typed ID for journal entries
    JournalEntryID,
    "journal entry id"
);

uuid_id!(
    /// Strongly typed ID for saved quotes
    QuoteID,
    "quote id"
);
