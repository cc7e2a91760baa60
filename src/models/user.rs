use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// Stored fields other than the four known ones (added through
/// `UserRepository::update_user`) are kept in `extra` so they survive a
/// read-modify-write cycle.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub blog: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub location: String,
    #[serde(flatten, default)]
    pub extra: Document,
}

impl User {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            ..Default::default()
        }
    }

    pub fn with_blog(mut self, blog: impl Into<String>) -> Self {
        self.blog = blog.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document, Bson};

    #[test]
    fn test_new_user_serializes_without_id() {
        let user = User::new("Nikola", 30).with_blog("rubikscode.net");
        let document = to_document(&user).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("name").unwrap(), "Nikola");
        assert_eq!(document.get_str("blog").unwrap(), "rubikscode.net");
        assert_eq!(document.get_i32("age").unwrap(), 30);
    }

    #[test]
    fn test_unknown_fields_land_in_extra() {
        let id = ObjectId::new();
        let user: User = from_document(doc! {
            "_id": id,
            "name": "Vanja",
            "age": 27,
            "location": "Novi Sad",
            "nickname": "vanja27",
        })
        .unwrap();

        assert_eq!(user.id, Some(id));
        assert_eq!(user.blog, "");
        assert_eq!(user.location, "Novi Sad");
        assert_eq!(user.extra.get("nickname"), Some(&Bson::String("vanja27".into())));

        let document = to_document(&user).unwrap();
        assert_eq!(document.get_str("nickname").unwrap(), "vanja27");
        assert_eq!(document.get_object_id("_id").unwrap(), id);
    }
}
