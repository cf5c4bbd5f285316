//! # Metadata Retrieval Service
//!
//! Backs `GET /api/metas/{meta_id}` and `GET /api/metas/{meta_id}/operation`.
//! The columns are stored as JSON text and decoded into `Column` values; the
//! samples document is returned as stored, the frontend decodes it.

use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::meta::Metadata;
use common::model::operation::{HttpMethod, Operation};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::Database;
use crate::error::StoreError;

/// Actix web handler for `GET /api/metas/{meta_id}`.
///
/// # Returns
/// - `200 OK` with the `Metadata` as JSON.
/// - `404 Not Found` with body `NOT_FOUND` for an unknown id.
/// - `503 Service Unavailable` if the database cannot be read.
pub async fn process(db: web::Data<Database>, meta_id: web::Path<String>) -> impl Responder {
    let result = db.connect().and_then(|conn| get_meta(&conn, &meta_id));
    match result {
        Ok(meta) => {
            info!("metadata {} served ({} columns)", meta.id, meta.columns.len());
            HttpResponse::Ok().json(meta)
        }
        Err(e) => {
            warn!("metadata {} not served: {}", meta_id, e);
            e.error_response()
        }
    }
}

/// Actix web handler for `GET /api/metas/{meta_id}/operation`.
///
/// Falls back to `Operation::placeholder()` while nothing has been saved for
/// an existing dataset.
pub async fn process_operation(
    db: web::Data<Database>,
    meta_id: web::Path<String>,
) -> impl Responder {
    let result = db.connect().and_then(|conn| {
        get_meta(&conn, &meta_id)?;
        get_operation(&conn, &meta_id)
    });
    match result {
        Ok(operation) => HttpResponse::Ok().json(operation.unwrap_or_default()),
        Err(e) => {
            warn!("operation of {} not served: {}", meta_id, e);
            e.error_response()
        }
    }
}

/// Loads one metadata record, `StoreError::NotFound` if the id is unknown.
pub fn get_meta(conn: &Connection, meta_id: &str) -> Result<Metadata, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, api_id, columns, samples FROM metas WHERE id = ?1",
            params![meta_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    let (id, api_id, columns, samples) = row.ok_or(StoreError::NotFound)?;
    Ok(Metadata {
        id,
        api_id,
        columns: serde_json::from_str(&columns)?,
        samples,
    })
}

/// Loads the operation saved for a dataset, if any.
pub fn get_operation(conn: &Connection, meta_id: &str) -> Result<Option<Operation>, StoreError> {
    let row = conn
        .query_row(
            "SELECT title, description, method, end_point FROM operations WHERE meta_id = ?1",
            params![meta_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    Ok(row.map(|(title, desc, method, end_point)| Operation {
        title,
        desc,
        method: HttpMethod::parse(&method).unwrap_or_default(),
        end_point,
    }))
}
