//! The hero record type with BSON conversion helpers

use bson::Document as BsonDocument;
use civilact_common::Result;
use serde::{Deserialize, Serialize};

/// A hero tracked in the registry.
///
/// The store assigns an `_id` when a record is inserted; the id is returned
/// to the caller and never stored back onto the record. Decoding ignores the
/// `_id` field on stored documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub alias: String,
    pub signed: bool,
}

impl Hero {
    /// Convert the record to BSON
    pub fn to_document(&self) -> Result<BsonDocument> {
        Ok(bson::to_document(self)?)
    }

    /// Decode a record from BSON
    pub fn from_document(doc: BsonDocument) -> Result<Self> {
        Ok(bson::from_document(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use civilact_common::CivilactError;

    #[test]
    fn test_to_document() {
        let hero = Hero {
            name: "Stephen Strange".to_string(),
            alias: "Doctor Strange".to_string(),
            signed: true,
        };

        let doc = hero.to_document().unwrap();
        assert_eq!(doc.get_str("name").unwrap(), "Stephen Strange");
        assert_eq!(doc.get_str("alias").unwrap(), "Doctor Strange");
        assert!(doc.get_bool("signed").unwrap());
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_from_document_ignores_id() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "name": "Tony Stark",
            "alias": "Iron Man",
            "signed": true,
        };

        let hero = Hero::from_document(doc).unwrap();
        assert_eq!(hero.name, "Tony Stark");
        assert_eq!(hero.alias, "Iron Man");
        assert!(hero.signed);
    }

    #[test]
    fn test_from_document_wrong_type() {
        let doc = doc! {
            "name": "Loki",
            "alias": 123,
            "signed": false,
        };

        let err = Hero::from_document(doc).unwrap_err();
        assert!(matches!(err, CivilactError::Deserialization(_)));
    }

    #[test]
    fn test_roundtrip() {
        let original = Hero {
            name: "Matt Murdock".to_string(),
            alias: "Daredevil".to_string(),
            signed: false,
        };

        let doc = original.to_document().unwrap();
        let recovered = Hero::from_document(doc).unwrap();

        assert_eq!(original, recovered);
    }

    #[test]
    fn test_default_is_zero_valued() {
        let hero = Hero::default();
        assert!(hero.name.is_empty());
        assert!(hero.alias.is_empty());
        assert!(!hero.signed);
    }
}
