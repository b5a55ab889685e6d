use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::model::EntityId;

/// Author record as served by `GET /api/authors/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: EntityId,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Reference from a book to its author.
///
/// On the wire this is either `null`, an object carrying only an `id`, or
/// a full author object. Decoding collapses those shapes into three
/// variants so a half-populated reference cannot be represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthorRef {
    /// No author attached.
    #[default]
    Absent,
    /// Known by identifier only; no snapshot was embedded.
    Stub(EntityId),
    /// Full snapshot embedded in the book payload.
    Loaded(Author),
}

impl AuthorRef {
    /// Identifier of the referenced author, if any.
    pub fn id(&self) -> Option<EntityId> {
        match self {
            AuthorRef::Absent => None,
            AuthorRef::Stub(id) => Some(*id),
            AuthorRef::Loaded(author) => Some(author.id),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AuthorRef::Absent)
    }
}

/// Raw wire shape; conversion decides stub versus snapshot.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorWire {
    id: EntityId,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl From<AuthorWire> for AuthorRef {
    fn from(wire: AuthorWire) -> Self {
        // An object with every scalar null is indistinguishable from an
        // id-only reference, so it decodes as a stub.
        if wire.name.is_none() && wire.birth_date.is_none() {
            AuthorRef::Stub(wire.id)
        } else {
            AuthorRef::Loaded(Author {
                id: wire.id,
                name: wire.name,
                birth_date: wire.birth_date,
            })
        }
    }
}

impl<'de> Deserialize<'de> for AuthorRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = Option::<AuthorWire>::deserialize(deserializer)?;
        Ok(wire.map(AuthorRef::from).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_decodes_as_absent() {
        let reference: AuthorRef = serde_json::from_str("null").unwrap();
        assert!(reference.is_absent());
        assert_eq!(reference.id(), None);
    }

    #[test]
    fn id_only_object_decodes_as_stub() {
        let reference: AuthorRef = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(reference, AuthorRef::Stub(EntityId::new(7)));
        assert_eq!(reference.id(), Some(EntityId::new(7)));
    }

    #[test]
    fn nulled_scalars_still_decode_as_stub() {
        let reference: AuthorRef =
            serde_json::from_str(r#"{"id": 7, "name": null, "birthDate": null}"#).unwrap();
        assert_eq!(reference, AuthorRef::Stub(EntityId::new(7)));
    }

    #[test]
    fn populated_object_decodes_as_loaded() {
        let reference: AuthorRef =
            serde_json::from_str(r#"{"id": 7, "name": "Frank Herbert", "birthDate": "1920-10-08"}"#)
                .unwrap();
        match reference {
            AuthorRef::Loaded(author) => {
                assert_eq!(author.id, EntityId::new(7));
                assert_eq!(author.name.as_deref(), Some("Frank Herbert"));
                assert_eq!(author.birth_date, NaiveDate::from_ymd_opt(1920, 10, 8));
            }
            other => panic!("expected loaded author, got {other:?}"),
        }
    }

    #[test]
    fn reference_without_id_is_a_decode_error() {
        assert!(serde_json::from_str::<AuthorRef>(r#"{"name": "Anonymous"}"#).is_err());
    }

    #[test]
    fn standalone_author_decodes_with_partial_fields() {
        let author: Author = serde_json::from_str(r#"{"id": 3, "name": "Ursula K. Le Guin"}"#).unwrap();
        assert_eq!(author.id, EntityId::new(3));
        assert_eq!(author.name.as_deref(), Some("Ursula K. Le Guin"));
        assert_eq!(author.birth_date, None);
    }
}
