//! MongoDB Atlas vector search provider implementation
//!
//! Queries the catalog collection through the Atlas `$vectorSearch`
//! aggregation stage. The collection handle is constructed and connected
//! by an external collaborator (with its server-selection timeout set
//! there) and injected here; this provider is strictly read-only.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, Document, doc};

use cartwise_domain::constants::candidate_pool_size;
use cartwise_domain::error::{Error, Result};
use cartwise_domain::ports::VectorSearchProvider;
use cartwise_domain::value_objects::RecommendationResult;

use super::validate_query;
use crate::constants::{MONGODB_DEFAULT_INDEX_NAME, MONGODB_DEFAULT_VECTOR_FIELD};

/// MongoDB Atlas vector search provider
///
/// Issues an ANN query with a candidate pool larger than the requested
/// `top_k` (see [`candidate_pool_size`]) and projects the store's own
/// `vectorSearchScore`, preserving the index's descending-score order
/// verbatim.
pub struct MongoVectorSearchProvider {
    collection: Collection<Document>,
    index_name: String,
    vector_field: String,
}

impl MongoVectorSearchProvider {
    /// Create a new provider over an already-connected catalog collection
    pub fn new(collection: Collection<Document>) -> Self {
        Self {
            collection,
            index_name: MONGODB_DEFAULT_INDEX_NAME.to_string(),
            vector_field: MONGODB_DEFAULT_VECTOR_FIELD.to_string(),
        }
    }

    /// Override the Atlas search index name
    pub fn with_index_name<S: Into<String>>(mut self, index_name: S) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Override the catalog field holding the dense vector
    pub fn with_vector_field<S: Into<String>>(mut self, vector_field: S) -> Self {
        self.vector_field = vector_field.into();
        self
    }

    /// Map a driver error onto the failure taxonomy
    ///
    /// Connectivity problems (unreachable/unselected servers, socket
    /// errors) are distinguished from query-execution failures such as a
    /// missing index.
    fn map_mongo_error(error: mongodb::error::Error, operation: &str) -> Error {
        use mongodb::error::ErrorKind;

        match &*error.kind {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => Error::store_unavailable_with_source(
                format!("store unreachable during {operation}"),
                error,
            ),
            _ => Error::query_with_source(format!("{operation} failed"), error),
        }
    }
}

#[async_trait]
impl VectorSearchProvider for MongoVectorSearchProvider {
    async fn search(
        &self,
        query_vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RecommendationResult>> {
        validate_query(query_vector, top_k)?;

        let num_candidates = candidate_pool_size(top_k);
        let query_vector: Vec<Bson> = query_vector
            .iter()
            .map(|v| Bson::Double(f64::from(*v)))
            .collect();

        let pipeline = vec![
            doc! {
                "$vectorSearch": {
                    "index": &self.index_name,
                    "path": &self.vector_field,
                    "queryVector": query_vector,
                    "numCandidates": num_candidates as i64,
                    "limit": top_k as i64,
                }
            },
            doc! {
                "$project": {
                    "_id": 1,
                    "product_name": 1,
                    "score": { "$meta": "vectorSearchScore" },
                }
            },
        ];

        let mut cursor = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(|e| Self::map_mongo_error(e, "vector search"))?;

        let mut results = Vec::with_capacity(top_k);
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| Self::map_mongo_error(e, "vector search cursor"))?
        {
            results.push(document_to_result(&document)?);
        }

        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "mongodb"
    }
}

/// Convert one projected search document into a recommendation result
///
/// Missing fields are query errors, never silently defaulted.
fn document_to_result(document: &Document) -> Result<RecommendationResult> {
    let product_id = document
        .get("_id")
        .map(bson_id_to_string)
        .ok_or_else(|| Error::query("search result missing _id"))?;

    let product_name = document
        .get_str("product_name")
        .map_err(|_| Error::query("search result missing product_name"))?
        .to_string();

    let similarity_score = document
        .get_f64("score")
        .map_err(|_| Error::query("search result missing vectorSearchScore"))?;

    Ok(RecommendationResult {
        product_id,
        product_name,
        similarity_score,
    })
}

/// Render a BSON identity value to the opaque string key the domain uses
fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn projected_document_maps_to_result() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "product_name": "Slim Straight Jeans",
            "score": 0.87,
        };
        let result = document_to_result(&document).unwrap();
        assert_eq!(result.product_id, oid.to_hex());
        assert_eq!(result.product_name, "Slim Straight Jeans");
        assert!((result.similarity_score - 0.87).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_ids_become_opaque_strings() {
        let document = doc! {
            "_id": 42_i64,
            "product_name": "Canvas Sneakers",
            "score": 0.91,
        };
        let result = document_to_result(&document).unwrap();
        assert_eq!(result.product_id, "42");
    }

    #[test]
    fn missing_fields_are_query_errors() {
        let document = doc! { "_id": 1_i32, "score": 0.5 };
        let err = document_to_result(&document).unwrap_err();
        assert!(matches!(err, Error::QueryError { .. }));
    }
}
