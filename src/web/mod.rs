// src/web/mod.rs

//! Web interface.
//!
//! Thin actix-web layer over the pipeline flows. Every response carries
//! no-cache headers so repeated submissions never show stale results, and
//! scraping failures always render a page with a warning rather than an
//! error status.

mod pages;

use std::path::Path;
use std::sync::Arc;

use actix_web::http::header;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result as ActixResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{parse_request_date, CaseType, CauseListRequest, CnrLookup, Config};
use crate::pipeline;
use crate::storage::OutputStore;
use crate::utils::http::create_client;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
    pub store: Arc<OutputStore>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_client(&config.portal)?;
        let store = Arc::new(OutputStore::new(&config.output.dir));
        Ok(Self {
            config,
            client,
            store,
        })
    }
}

/// Cause-list form fields as submitted by the index page.
#[derive(Debug, Serialize, Deserialize)]
pub struct CauseListForm {
    pub state: String,
    pub district: String,
    pub complex_name: String,
    #[serde(default)]
    pub court_name: String,
    pub case_type: String,
    pub date_input: String,
}

/// CNR lookup form.
#[derive(Debug, Serialize, Deserialize)]
pub struct CnrForm {
    pub cnr: String,
}

/// No-cache headers applied to every response.
pub fn no_cache_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add((
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, max-age=0",
        ))
        .add((header::PRAGMA, "no-cache"))
        .add((header::EXPIRES, "0"))
}

/// Route table, shared between the server and handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/", web::post().to(submit_cause_list))
        .route("/cnr-details", web::post().to(cnr_details))
        .route("/download/{filename}", web::get().to(download));
}

/// Run the web server until shutdown.
pub async fn serve(state: AppState) -> Result<()> {
    let bind = format!("{}:{}", state.config.server.host, state.config.server.port);
    log::info!("Starting web server on http://{}", bind);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(no_cache_headers())
            .configure(configure)
    })
    .bind(&bind)?
    .run()
    .await?;

    Ok(())
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn index() -> ActixResult<HttpResponse> {
    Ok(html(pages::index_page()))
}

async fn submit_cause_list(
    state: web::Data<AppState>,
    form: web::Form<CauseListForm>,
) -> ActixResult<HttpResponse> {
    let form = form.into_inner();

    let case_type = match form.case_type.parse::<CaseType>() {
        Ok(case_type) => case_type,
        Err(_) => {
            return Ok(html(pages::warning_page(
                "Invalid Case Type. Please enter either 'Civil' or 'Criminal'.",
            )))
        }
    };
    if parse_request_date(&form.date_input).is_none() {
        return Ok(html(pages::warning_page(
            "Invalid date format. Use DD-MM-YYYY.",
        )));
    }

    let court_name = Some(form.court_name.trim().to_string()).filter(|s| !s.is_empty());
    let request = CauseListRequest {
        state: form.state,
        district: form.district,
        complex_name: form.complex_name,
        court_name,
        case_type,
        date: form.date_input.trim().to_string(),
    };

    match pipeline::run_cause_list(&state.config, &state.client, &state.store, &request).await {
        Ok(outcome) => {
            let message = if outcome.pdfs.is_empty() {
                "No PDFs found or CAPTCHA required.".to_string()
            } else {
                format!("Downloaded {} PDF(s).", outcome.pdfs.len())
            };
            let result_file = file_name(&outcome.result_path);
            Ok(html(pages::cause_result_page(&message, result_file)))
        }
        Err(e) => {
            log::error!("Cause-list request failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(pages::warning_page("Internal error while saving results.")))
        }
    }
}

async fn cnr_details(
    state: web::Data<AppState>,
    form: web::Form<CnrForm>,
) -> ActixResult<HttpResponse> {
    let cnr = form.into_inner().cnr.trim().to_string();

    match pipeline::run_cnr_lookup(&state.config, &state.client, &state.store, &cnr).await {
        Ok(CnrLookup::Found(record)) => Ok(html(pages::cnr_success_page(
            &record,
            file_name(&record.json_path),
            file_name(&record.pdf_path),
        ))),
        Ok(CnrLookup::Failed(error)) => {
            Ok(html(pages::cnr_error_page(&cnr, &error.error, &error.url)))
        }
        Err(e) => {
            log::error!("CNR lookup for {} failed: {}", cnr, e);
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(pages::warning_page("Internal error while saving results.")))
        }
    }
}

/// Serve a generated file from the output directory as an attachment.
///
/// Filenames with path separators or parent components never match
/// generated names and are rejected outright.
async fn download(
    state: web::Data<AppState>,
    filename: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let filename = filename.into_inner();
    if filename.contains(['/', '\\']) || filename.contains("..") {
        return Ok(HttpResponse::NotFound().body("Not found"));
    }

    let path = state.store.root().join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(content_type_for(&filename))
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ))
            .body(bytes)),
        Err(_) => Ok(HttpResponse::NotFound().body("Not found")),
    }
}

fn content_type_for(filename: &str) -> &'static str {
    if filename.ends_with(".pdf") {
        "application/pdf"
    } else if filename.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test};
    use tempfile::TempDir;
    use wiremock::matchers::{method, path as urlpath};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state(config: Config, output_dir: &std::path::Path) -> AppState {
        let mut config = config;
        config.output.dir = output_dir.to_string_lossy().into_owned();
        AppState::new(Arc::new(config)).unwrap()
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .wrap(no_cache_headers())
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_index_renders_with_no_cache_headers() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(Config::default(), tmp.path());
        let app = test_app!(state);

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .unwrap()
                .to_str()
                .unwrap(),
            "no-store, no-cache, must-revalidate, max-age=0"
        );
        assert_eq!(
            response.headers().get(header::PRAGMA).unwrap().to_str().unwrap(),
            "no-cache"
        );
    }

    #[actix_web::test]
    async fn test_submit_rejects_bad_date() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(Config::default(), tmp.path());
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/")
            .set_form(CauseListForm {
                state: "Delhi".into(),
                district: "New Delhi".into(),
                complex_name: "Patiala House".into(),
                court_name: String::new(),
                case_type: "Civil".into(),
                date_input: "2026/02/01".into(),
            })
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Invalid date format"));
    }

    #[actix_web::test]
    async fn test_submit_rejects_bad_case_type() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(Config::default(), tmp.path());
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/")
            .set_form(CauseListForm {
                state: "Delhi".into(),
                district: "New Delhi".into(),
                complex_name: "Patiala House".into(),
                court_name: String::new(),
                case_type: "Family".into(),
                date_input: "01-02-2026".into(),
            })
            .to_request();
        let response = test::call_service(&app, request).await;

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Invalid Case Type"));
    }

    #[actix_web::test]
    async fn test_cnr_blocked_renders_error_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(urlpath("/case"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.portal.case_status_url = format!("{}/case?cnr={{cnr}}", server.uri());
        let tmp = TempDir::new().unwrap();
        let state = test_state(config, tmp.path());
        let app = test_app!(state);

        let request = test::TestRequest::post()
            .uri("/cnr-details")
            .set_form(CnrForm {
                cnr: "DLND010012342023".into(),
            })
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("CAPTCHA"));
    }

    #[actix_web::test]
    async fn test_download_serves_generated_file() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(Config::default(), tmp.path());
        state
            .store
            .write_bytes("result_test.json", b"{\"status\": \"Success\"}")
            .await
            .unwrap();
        let app = test_app!(state);

        let request = test::TestRequest::get()
            .uri("/download/result_test.json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        assert!(response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("attachment"));

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"{\"status\": \"Success\"}");
    }

    #[actix_web::test]
    async fn test_download_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(Config::default(), tmp.path());
        let app = test_app!(state);

        let request = test::TestRequest::get()
            .uri("/download/..%2Fsecret.txt")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_download_missing_file_is_404() {
        let tmp = TempDir::new().unwrap();
        let state = test_state(Config::default(), tmp.path());
        let app = test_app!(state);

        let request = test::TestRequest::get()
            .uri("/download/nope.json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
