use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::column::Column;
use common::requests::UpdateColumnsRequest;
use log::{info, warn};
use rusqlite::{params, Connection};

use super::get::get_meta;
use crate::db::Database;
use crate::error::StoreError;

pub async fn process(
    db: web::Data<Database>,
    meta_id: web::Path<String>,
    payload: web::Json<UpdateColumnsRequest>,
) -> impl Responder {
    let result = db
        .connect()
        .and_then(|mut conn| update_columns(&mut conn, &meta_id, &payload));
    match result {
        Ok(()) => {
            info!("metadata {} columns updated", meta_id);
            HttpResponse::Ok().body("Metadatos guardados correctamente")
        }
        Err(e) => {
            warn!("metadata {} not updated: {}", meta_id, e);
            e.error_response()
        }
    }
}

/// Replaces the stored columns and operation of `meta_id` in one transaction.
pub fn update_columns(
    conn: &mut Connection,
    meta_id: &str,
    payload: &UpdateColumnsRequest,
) -> Result<(), StoreError> {
    let tx = conn.transaction()?;

    let stored = get_meta(&tx, meta_id)?;
    check_same_source_columns(&stored.columns, &payload.columns)?;

    tx.execute(
        "UPDATE metas SET columns = ?1 WHERE id = ?2",
        params![serde_json::to_string(&payload.columns)?, meta_id],
    )?;

    let op = &payload.operation;
    tx.execute(
        "INSERT OR REPLACE INTO operations (meta_id, title, description, method, end_point)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![meta_id, &op.title, &op.desc, op.method.as_str(), &op.end_point],
    )?;

    tx.commit()?;
    Ok(())
}

/// The column set is fixed: same count, same source names, same order.
fn check_same_source_columns(stored: &[Column], updated: &[Column]) -> Result<(), StoreError> {
    if stored.len() != updated.len() {
        return Err(StoreError::InvalidUpdate(format!(
            "expected {} columns, got {}",
            stored.len(),
            updated.len()
        )));
    }
    for (idx, (old, new)) in stored.iter().zip(updated).enumerate() {
        if old.column_name != new.column_name {
            return Err(StoreError::InvalidUpdate(format!(
                "column {} must stay `{}`, got `{}`",
                idx, old.column_name, new.column_name
            )));
        }
    }
    Ok(())
}
