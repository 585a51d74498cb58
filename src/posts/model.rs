use serde::{Deserialize, Serialize};

/// A post as stored by the upstream API.
///
/// Encodes as `{"id", "userId", "title", "body"}`. Decoding also accepts the
/// capitalised field names (`Id`, `UserId`, …) some clients send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Body")]
    pub body: String,
}

/// A creation request; the upstream API assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithoutId {
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Body")]
    pub body: String,
}

impl PostWithoutId {
    /// The post this request becomes once the upstream API assigns `id`.
    pub fn with_id(self, id: i64) -> Post {
        Post { id, user_id: self.user_id, title: self.title, body: self.body }
    }
}
