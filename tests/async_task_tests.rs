//! Integration tests for asynchronous jobs and reports.
//!
//! These tests verify the `202 Accepted` handshake, status polling,
//! result retrieval, cancellation and the origin check on job URLs.

use moysklad::clients::{HttpError, InvalidHttpRequestError, RestError};
use moysklad::rest::resources::report::StockAll;
use moysklad::rest::{AsyncTask, Params, ResourceError};
use moysklad::{BaseUrl, Credentials, MoySklad, MoySkladConfig};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TASK_ID: &str = "5f8a2c9e-7bd1-11ee-0a80-04ba0006c2f0";

fn create_test_client(server: &MockServer) -> MoySklad {
    let config = MoySkladConfig::builder()
        .credentials(Credentials::token("test-token").unwrap())
        .base_url(BaseUrl::new(format!("{}/api/remap/1.2/", server.uri())).unwrap())
        .build()
        .unwrap();
    MoySklad::new(&config)
}

fn status_url(server: &MockServer) -> String {
    format!("{}/api/remap/1.2/async/{TASK_ID}", server.uri())
}

fn result_url(server: &MockServer) -> String {
    format!("{}/api/remap/1.2/async/{TASK_ID}/result", server.uri())
}

async fn mount_stock_job(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/remap/1.2/report/stock/all"))
        .and(query_param("async", "true"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Location", status_url(server).as_str())
                .insert_header("Content-Location", result_url(server).as_str()),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, state: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/remap/1.2/async/{TASK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": TASK_ID,
            "state": state,
            "request": "https://api.moysklad.ru/api/remap/1.2/report/stock/all?async=true",
            "resultUrl": result_url(server)
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_async_report_is_started_with_job_urls() {
    let server = MockServer::start().await;
    mount_stock_job(&server).await;

    let moysklad = create_test_client(&server);
    let task = moysklad.report_stock().get_all_async(None).await.unwrap();

    assert_eq!(task.response().code, 202);
    assert_eq!(task.status_url().as_str(), status_url(&server));
    assert_eq!(task.result_url().as_str(), result_url(&server));
    assert!(!task.is_done());
}

#[tokio::test]
async fn test_async_result_requires_done_check() {
    let server = MockServer::start().await;
    mount_stock_job(&server).await;
    mount_status(&server, "PROCESSING").await;

    let moysklad = create_test_client(&server);
    let task = moysklad
        .report_stock()
        .get_all_async(None)
        .await
        .unwrap()
        .into_inner();

    assert!(!*task.check().await.unwrap());

    let error = task.result().await.unwrap_err();
    assert!(matches!(error, ResourceError::AsyncNotReady { .. }));
}

#[tokio::test]
async fn test_async_result_is_fetched_after_done() {
    let server = MockServer::start().await;
    mount_stock_job(&server).await;
    mount_status(&server, "DONE").await;

    Mock::given(method("GET"))
        .and(path(format!("/api/remap/1.2/async/{TASK_ID}/result")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"size": 1, "limit": 1000, "offset": 0},
            "rows": [{
                "name": "Гвозди",
                "code": "00001",
                "stock": 120.0,
                "inTransit": 0.0,
                "reserve": 4.0,
                "quantity": 116.0,
                "price": 250.0,
                "salePrice": 500.0
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let task = moysklad
        .report_stock()
        .get_all_async(Some(&Params::new().limit(1000)))
        .await
        .unwrap()
        .into_inner();

    assert!(*task.check().await.unwrap());
    assert!(task.is_done());

    let report = task.result().await.unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].name.as_deref(), Some("Гвозди"));
}

#[tokio::test]
async fn test_async_cancel_posts_to_cancel_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/api/remap/1.2/async/{TASK_ID}/cancel")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let task: AsyncTask<StockAll> = AsyncTask::new(
        moysklad.client().clone(),
        Url::parse(&status_url(&server)).unwrap(),
        Url::parse(&result_url(&server)).unwrap(),
    );

    assert!(*task.cancel().await.unwrap());
}

#[tokio::test]
async fn test_cancel_on_finished_job_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/api/remap/1.2/async/{TASK_ID}/cancel")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "error": "Невозможно отменить завершенную задачу",
                "code": 71004
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let task: AsyncTask<StockAll> = AsyncTask::new(
        moysklad.client().clone(),
        Url::parse(&status_url(&server)).unwrap(),
        Url::parse(&result_url(&server)).unwrap(),
    );

    let error = task.cancel().await.unwrap_err();
    assert_eq!(error.status(), Some(400));
    assert_eq!(error.api_errors()[0].code, Some(71004));
}

#[tokio::test]
async fn test_missing_location_header_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/remap/1.2/report/stock/all"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let error = moysklad.report_stock().get_all_async(None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::MissingHeader { header: "Location" }
    ));
}

fn create_offline_client() -> MoySklad {
    let config = MoySkladConfig::builder()
        .credentials(Credentials::token("test-token").unwrap())
        .build()
        .unwrap();
    MoySklad::new(&config)
}

#[test]
fn test_async_task_refuses_foreign_status_url() {
    let moysklad = create_offline_client();
    let task: AsyncTask<StockAll> = AsyncTask::new(
        moysklad.client().clone(),
        Url::parse("https://attacker.example/async/1").unwrap(),
        Url::parse("https://attacker.example/async/1/result").unwrap(),
    );

    let error = tokio_test::block_on(task.check()).unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Rest(RestError::Http(HttpError::InvalidRequest(
            InvalidHttpRequestError::ForeignUrl { .. }
        )))
    ));
}

#[test]
fn test_async_task_debug_hides_client() {
    let moysklad = create_offline_client();
    let task: AsyncTask<StockAll> = AsyncTask::new(
        moysklad.client().clone(),
        Url::parse("https://api.moysklad.ru/api/remap/1.2/async/1").unwrap(),
        Url::parse("https://api.moysklad.ru/api/remap/1.2/async/1/result").unwrap(),
    );

    let debug = format!("{task:?}");
    assert!(debug.contains("status_url"));
    assert!(!debug.contains("test-token"));
}
