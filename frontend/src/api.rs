//! HTTP calls to the metadata API.
//!
//! Errors come back as the string handed to the error reporter: `NOT_FOUND`
//! for a 404, otherwise the response body or the transport error.

use gloo_net::http::{Request, Response};

use common::model::meta::Metadata;
use common::model::operation::Operation;
use common::requests::UpdateColumnsRequest;

const API_PATH: &str = "/api/metas";

pub async fn fetch_meta(meta_id: &str) -> Result<Metadata, String> {
    let response = Request::get(&format!("{}/{}", API_PATH, meta_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let response = ensure_ok(response).await?;
    response.json::<Metadata>().await.map_err(|e| e.to_string())
}

pub async fn fetch_operation(meta_id: &str) -> Result<Operation, String> {
    let response = Request::get(&format!("{}/{}/operation", API_PATH, meta_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let response = ensure_ok(response).await?;
    response.json::<Operation>().await.map_err(|e| e.to_string())
}

pub async fn save_columns(meta_id: &str, request: &UpdateColumnsRequest) -> Result<(), String> {
    let response = Request::put(&format!("{}/{}/columns", API_PATH, meta_id))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response).await.map(|_| ())
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    match response.status() {
        200 => Ok(response),
        404 => Err("NOT_FOUND".to_string()),
        status => {
            let body = response.text().await.unwrap_or_default();
            if body.is_empty() {
                Err(format!("HTTP {}", status))
            } else {
                Err(body)
            }
        }
    }
}
