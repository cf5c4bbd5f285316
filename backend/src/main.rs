mod config;
mod db;
mod error;
mod services;

use crate::config::ServerConfig;
use crate::db::Database;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX_HTML: &str = "index.html";

/// Looks up the embedded file for a request path. Client-side routes such as
/// `/metas/7` resolve to `index.html`; unknown `api/` paths resolve to nothing
/// so they end as a plain 404.
fn embedded_asset(path: &str) -> Option<(&'static [u8], String)> {
    let path = path.trim_start_matches('/');
    if !path.is_empty() {
        if let Some(file) = STATIC_DIR.get_file(path) {
            let mime = from_path(path).first_or_octet_stream();
            return Some((file.contents(), mime.to_string()));
        }
        if path.starts_with("api/") {
            return None;
        }
    }
    STATIC_DIR
        .get_file(INDEX_HTML)
        .map(|index| (index.contents(), "text/html; charset=utf-8".to_string()))
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match embedded_asset(req.path()) {
        Some((body, mime)) => HttpResponse::Ok().content_type(mime).body(body),
        None => {
            debug!("no embedded asset for {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    let db = Database::new(&config.db_path);
    if let Err(e) = db.init() {
        error!("cannot initialise {}: {}", db.path().display(), e);
        return Err(std::io::Error::other(e.to_string()));
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {} (database {})", url, db.path().display());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(db.clone()))
            .service(services::metas::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
