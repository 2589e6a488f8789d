use serde::{Deserialize, Serialize};

/// One record of the user table.
///
/// The renames follow the table's attribute names, and the same spelling
/// goes out on the wire, so a single set of names covers both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct User {
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Likes")]
    pub likes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            user_id: "u1".to_string(),
            user_name: "Alice".to_string(),
            age: 30,
            likes: vec!["tea".to_string(), "books".to_string()],
        }
    }

    #[test]
    fn serializes_to_the_canonical_shape() {
        let json = serde_json::to_string(&alice()).unwrap();
        assert_eq!(
            json,
            r#"{"UserID":"u1","UserName":"Alice","Age":30,"Likes":["tea","books"]}"#
        );
    }

    #[test]
    fn round_trip_preserves_all_fields_and_likes_order() {
        let json = serde_json::to_string(&alice()).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alice());
        assert_eq!(back.likes, vec!["tea", "books"]);
    }
}
