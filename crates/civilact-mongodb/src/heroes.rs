//! Operations on the `heroes` collection

use bson::{doc, Bson, Document as BsonDocument};
use civilact_common::{CivilactError, Result};
use futures::TryStreamExt;

use crate::connection::Connection;
use crate::hero::Hero;

/// Name of the collection every operation targets.
pub const COLLECTION: &str = "heroes";

/// Find every hero matching `filter`.
///
/// An empty filter matches the whole collection. Result order is whatever
/// the server returns; no sort is applied. One record failing to decode
/// fails the whole call.
pub async fn find(conn: &Connection, filter: BsonDocument) -> Result<Vec<Hero>> {
    let collection = conn.collection(COLLECTION);

    let cursor = collection
        .find(filter)
        .await
        .map_err(|e| CivilactError::Query(format!("find failed: {}", e)))?;

    let docs: Vec<BsonDocument> = cursor
        .try_collect()
        .await
        .map_err(|e| CivilactError::Query(format!("find failed: {}", e)))?;

    docs.into_iter().map(Hero::from_document).collect()
}

/// Find a single hero matching `filter`.
///
/// No match yields the all-default record; callers cannot tell it apart
/// from a stored record whose fields happen to all be empty.
pub async fn find_one(conn: &Connection, filter: BsonDocument) -> Result<Hero> {
    let collection = conn.collection(COLLECTION);

    let found = collection
        .find_one(filter)
        .await
        .map_err(|e| CivilactError::Query(format!("find_one failed: {}", e)))?;

    match found {
        Some(doc) => Hero::from_document(doc),
        None => Ok(Hero::default()),
    }
}

/// Insert a hero, returning the store-assigned id.
pub async fn insert_one(conn: &Connection, hero: &Hero) -> Result<Bson> {
    let collection = conn.collection(COLLECTION);
    let doc = hero.to_document()?;

    let result = collection
        .insert_one(doc)
        .await
        .map_err(|e| CivilactError::Database(format!("insert failed: {}", e)))?;

    Ok(result.inserted_id)
}

/// Delete the first hero matching `filter`, returning the deleted count.
///
/// A filter matching nothing is not an error; the count is 0. Which record
/// is "first" follows the server's native ordering.
pub async fn delete_one(conn: &Connection, filter: BsonDocument) -> Result<u64> {
    let collection = conn.collection(COLLECTION);

    let result = collection
        .delete_one(filter)
        .await
        .map_err(|e| CivilactError::Database(format!("delete failed: {}", e)))?;

    Ok(result.deleted_count)
}

/// Set `fields` on every hero matching `filter`, returning the modified count.
///
/// Only the named fields are overwritten; the rest of each record is left
/// untouched.
pub async fn update_many(
    conn: &Connection,
    filter: BsonDocument,
    fields: BsonDocument,
) -> Result<u64> {
    let collection = conn.collection(COLLECTION);

    let result = collection
        .update_many(filter, doc! { "$set": fields })
        .await
        .map_err(|e| CivilactError::Database(format!("update failed: {}", e)))?;

    Ok(result.modified_count)
}
