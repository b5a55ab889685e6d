use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{AuthorRef, EntityId};

/// Book record as served by `GET /api/books/{id}`.
///
/// Every scalar except the identifier is nullable on the wire; the
/// backend owns validation and may serve records with any subset of
/// fields populated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: EntityId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub price: Option<f64>,
    #[serde(default)]
    pub author: AuthorRef,
}
