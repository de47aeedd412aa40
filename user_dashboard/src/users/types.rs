use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A record in the users collection.
///
/// `id` is caller-supplied and not enforced unique; the store keeps an
/// internal row identifier that never appears here, so this type
/// serializes to exactly `{"id": .., "name": ..}`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct User {
    /// Caller-supplied identifier
    pub id: i64,
    /// Display name, unconstrained
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_user_new() {
        let user = User::new(1, "Alice");

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_user_serializes_to_flat_object() {
        let user = User::new(1, "Alice");

        let json = serde_json::to_string(&user).expect("Failed to serialize User");

        // The wire shape is exactly {id, name}; no storage-internal
        // identifier may leak into responses.
        assert_eq!(json, "{\"id\":1,\"name\":\"Alice\"}");
    }

    #[test]
    fn test_user_deserializes_ignoring_unknown_fields() {
        let json = "{\"id\":7,\"name\":\"Grace\",\"role\":\"admin\"}";

        let user: User = serde_json::from_str(json).expect("Failed to deserialize User");

        assert_eq!(user, User::new(7, "Grace"));
    }

    #[test]
    fn test_user_deserialize_missing_name_fails() {
        let json = "{\"id\":7}";

        let result = serde_json::from_str::<User>(json);

        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn test_user_serde_roundtrip(
            id in proptest::num::i64::ANY,
            name in "[\\p{L}\\p{N}\\p{P}\\p{Z}]{0,128}"
        ) {
            let user = User::new(id, name);

            let serialized = serde_json::to_string(&user).expect("Failed to serialize");
            let deserialized: User = serde_json::from_str(&serialized).expect("Failed to deserialize");

            prop_assert_eq!(user, deserialized);
        }
    }
}
