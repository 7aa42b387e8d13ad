use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Usuário no formato da API (JSON)
///
/// `id` é sempre atribuído pelo store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Corpo de criação/atualização
///
/// Qualquer `id` enviado é ignorado, seja qual for o tipo JSON.
/// `name`/`email` ausentes ou `null` viram string vazia.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
pub struct UserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<UserRequest> for User {
    fn from(req: UserRequest) -> Self {
        Self {
            id: String::new(),
            name: req.name,
            email: req.email,
        }
    }
}

/// Usuário como armazenado na collection (BSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

impl UserDocument {
    /// Builds a document without `_id` so the store assigns a fresh one.
    pub fn from_request(user: &User) -> Self {
        Self {
            id: None,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "");
        assert_eq!(user.id, "");
    }

    #[test]
    fn test_request_accepts_nulls_and_any_id() {
        let bodies = [
            r#"{"name": null, "email": "a@b"}"#,
            r#"{"id": null, "name": null, "email": "a@b"}"#,
            r#"{"id": 5, "email": "a@b"}"#,
            r#"{"id": {"$oid": "x"}, "name": null, "email": "a@b"}"#,
        ];

        for body in bodies {
            let req: UserRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.name, "", "{}", body);
            assert_eq!(req.email, "a@b", "{}", body);
        }
    }

    #[test]
    fn test_request_rejects_non_string_fields() {
        assert!(serde_json::from_str::<UserRequest>(r#"{"name": 5}"#).is_err());
    }

    #[test]
    fn test_request_converts_without_id() {
        let user = User::from(UserRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        });
        assert_eq!(user.id, "");
        assert_eq!(user.name, "Ana");
    }

    #[test]
    fn test_client_id_is_dropped_from_document() {
        let user = User {
            id: "65f1c2a0b1d2e3f4a5b6c7d8".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };

        let doc = UserDocument::from_request(&user);
        assert!(doc.id.is_none());

        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("name").unwrap(), "Ana");
    }

    #[test]
    fn test_document_id_rendered_as_hex() {
        let oid = ObjectId::new();
        let user = User::from(UserDocument {
            id: Some(oid),
            name: "Bruno".to_string(),
            email: "bruno@example.com".to_string(),
        });

        assert_eq!(user.id, oid.to_hex());
        assert_eq!(user.id.len(), 24);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], oid.to_hex());
        assert_eq!(json["email"], "bruno@example.com");
    }
}
