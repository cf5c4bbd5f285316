//! # Metadata Service Module
//!
//! Routes under `/api/metas` used by the dataset metadata screen.
//!
//! ## Sub-modules:
//! - `get`: reads one metadata record, and the operation defined for it.
//! - `update_columns`: stores the edited column list and operation.

mod get;
mod update_columns;

use actix_web::web::{get, put, scope};
use actix_web::Scope;

/// The base path for all metadata endpoints.
const API_PATH: &str = "/api/metas";

/// Configures and returns the Actix `Scope` for the metadata routes.
///
/// # Registered Routes:
///
/// *   **`GET /{meta_id}`**: the `Metadata` as JSON, `404 NOT_FOUND` when unknown.
/// *   **`GET /{meta_id}/operation`**: the stored `Operation`, or the
///     placeholder operation when none was saved yet.
/// *   **`PUT /{meta_id}/columns`**: body `UpdateColumnsRequest`. Replaces the
///     columns (same count, same source names, same order) and the operation.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{meta_id}", get().to(get::process))
        .route("/{meta_id}/operation", get().to(get::process_operation))
        .route("/{meta_id}/columns", put().to(update_columns::process))
}

#[cfg(test)]
mod tests {
    use super::configure_routes;
    use crate::db::tests::temp_database;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::column::{ColumnType, SearchSetting};
    use common::model::meta::Metadata;
    use common::model::operation::{HttpMethod, Operation};
    use common::requests::UpdateColumnsRequest;

    #[actix_web::test]
    async fn fetches_seeded_metadata() {
        let (_dir, db) = temp_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/metas/7").to_request();
        let meta: Metadata = test::call_and_read_body_json(&app, req).await;

        assert_eq!(meta.api_id, "9");
        assert_eq!(meta.columns.len(), 4);
        assert!(meta.check_samples().is_ok());
    }

    #[actix_web::test]
    async fn unknown_metadata_is_not_found() {
        let (_dir, db) = temp_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/metas/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await, "NOT_FOUND");
    }

    #[actix_web::test]
    async fn operation_defaults_to_placeholder() {
        let (_dir, db) = temp_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/metas/7/operation").to_request();
        let op: Operation = test::call_and_read_body_json(&app, req).await;
        assert_eq!(op, Operation::placeholder());
    }

    #[actix_web::test]
    async fn saved_columns_and_operation_are_returned_afterwards() {
        let (_dir, db) = temp_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/metas/7").to_request();
        let meta: Metadata = test::call_and_read_body_json(&app, req).await;

        let mut columns = meta.columns.clone();
        columns[1].provided_name = "nombre".to_string();
        columns[1].search = SearchSetting::Exact;
        columns[2].column_type = ColumnType::Integer;
        let operation = Operation {
            title: "Temperaturas".to_string(),
            desc: "Lecturas por estación".to_string(),
            method: HttpMethod::Post,
            end_point: "temperatures".to_string(),
        };
        let body = UpdateColumnsRequest {
            columns: columns.clone(),
            operation: operation.clone(),
        };

        let req = test::TestRequest::put()
            .uri("/api/metas/7/columns")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/metas/7").to_request();
        let stored: Metadata = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored.columns, columns);
        assert_eq!(stored.samples, meta.samples);

        let req = test::TestRequest::get().uri("/api/metas/7/operation").to_request();
        let stored_op: Operation = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored_op, operation);
    }

    #[actix_web::test]
    async fn update_must_keep_the_source_columns() {
        let (_dir, db) = temp_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/metas/7").to_request();
        let meta: Metadata = test::call_and_read_body_json(&app, req).await;

        let mut shorter = meta.columns.clone();
        shorter.pop();
        let mut renamed = meta.columns.clone();
        renamed[0].column_name = "other".to_string();

        for columns in [shorter, renamed] {
            let body = UpdateColumnsRequest {
                columns,
                operation: Operation::placeholder(),
            };
            let req = test::TestRequest::put()
                .uri("/api/metas/7/columns")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let body = UpdateColumnsRequest {
            columns: meta.columns.clone(),
            operation: Operation::placeholder(),
        };
        let req = test::TestRequest::put()
            .uri("/api/metas/unknown/columns")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
