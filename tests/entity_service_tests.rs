//! Integration tests for entity services against a mock MoySklad server.
//!
//! These tests cover paging, deletion semantics, bulk operations and the
//! attribute helpers.

use moysklad::clients::{HttpError, RestError};
use moysklad::rest::capabilities::{
    Attributes, CreateUpdateMany, Delete, DeleteMany, GetById, GetList, Trash, Update,
};
use moysklad::rest::resources::common::{Attribute, AttributeType, HasMeta, Meta};
use moysklad::rest::resources::{CustomerOrder, Uom};
use moysklad::rest::{Params, ResourceError};
use moysklad::{BaseUrl, Credentials, MoySklad, MoySkladConfig};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORDER_ID: &str = "7944ef04-f831-11e5-7a69-971500188b19";

fn create_test_client(server: &MockServer) -> MoySklad {
    let config = MoySkladConfig::builder()
        .credentials(Credentials::token("test-token").unwrap())
        .base_url(BaseUrl::new(format!("{}/api/remap/1.2/", server.uri())).unwrap())
        .build()
        .unwrap();
    MoySklad::new(&config)
}

fn uom_row(n: usize) -> Value {
    json!({
        "meta": {
            "href": format!("https://api.moysklad.ru/api/remap/1.2/entity/uom/{}", Uuid::new_v4()),
            "type": "uom"
        },
        "name": format!("uom-{n}")
    })
}

fn uom_page(total: usize, rows: std::ops::Range<usize>) -> Value {
    json!({
        "meta": {"size": total, "limit": 2, "offset": rows.start},
        "rows": rows.map(uom_row).collect::<Vec<_>>()
    })
}

fn order_meta(id: &str) -> Value {
    json!({
        "href": format!("https://api.moysklad.ru/api/remap/1.2/entity/customerorder/{id}"),
        "type": "customerorder"
    })
}

// ============================================================================
// Paging
// ============================================================================

#[tokio::test]
async fn test_get_list_sends_bearer_token_and_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/remap/1.2/entity/uom"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "шт"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uom_page(1, 0..1)))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let params = Params::new().limit(10).search("шт");
    let page = moysklad.uom().get_list(Some(&params)).await.unwrap();

    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].name.as_deref(), Some("uom-0"));
}

#[tokio::test]
async fn test_get_list_all_issues_one_request_per_page() {
    let server = MockServer::start().await;

    for (offset, rows) in [(0, 0..2), (2, 2..4), (4, 4..5)] {
        Mock::given(method("GET"))
            .and(path("/api/remap/1.2/entity/uom"))
            .and(query_param("limit", "2"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(uom_page(5, rows)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let moysklad = create_test_client(&server);
    let all = moysklad
        .uom()
        .get_list_all(Some(&Params::new().limit(2)))
        .await
        .unwrap();

    let names: Vec<_> = all.iter().filter_map(|uom| uom.name.clone()).collect();
    assert_eq!(names, ["uom-0", "uom-1", "uom-2", "uom-3", "uom-4"]);
}

#[tokio::test]
async fn test_get_list_all_stops_at_exact_total() {
    let server = MockServer::start().await;

    for (offset, rows) in [(0, 0..2), (2, 2..4)] {
        Mock::given(method("GET"))
            .and(path("/api/remap/1.2/entity/uom"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(uom_page(4, rows)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let moysklad = create_test_client(&server);
    let all = moysklad
        .uom()
        .get_list_all(Some(&Params::new().limit(2)))
        .await
        .unwrap();

    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_get_list_all_on_empty_collection_makes_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/remap/1.2/entity/uom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uom_page(0, 0..0)))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let all = moysklad.uom().get_list_all(None).await.unwrap();

    assert!(all.is_empty());
}

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn test_delete_returns_true_on_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/remap/1.2/entity/customerorder/{ORDER_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let deleted = moysklad
        .customer_order()
        .delete(ORDER_ID.parse().unwrap())
        .await
        .unwrap();

    assert!(*deleted);
}

#[tokio::test]
async fn test_delete_missing_entity_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/remap/1.2/entity/customerorder/{ORDER_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{
                "error": "Объект с UUID 7944ef04-f831-11e5-7a69-971500188b19 не найден",
                "code": 1021
            }]
        })))
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let error = moysklad
        .customer_order()
        .delete(ORDER_ID.parse().unwrap())
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_move_to_trash_returns_true_on_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/api/remap/1.2/entity/customerorder/{ORDER_ID}/trash"
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let trashed = moysklad
        .customer_order()
        .move_to_trash(ORDER_ID.parse().unwrap())
        .await
        .unwrap();

    assert!(*trashed);
}

#[tokio::test]
async fn test_delete_many_keeps_per_item_results() {
    let server = MockServer::start().await;
    let second = "8a2c3e04-f831-11e5-7a69-971500188c01";

    Mock::given(method("POST"))
        .and(path("/api/remap/1.2/entity/customerorder/delete"))
        .and(body_json(json!([
            {"meta": order_meta(ORDER_ID)},
            {"meta": order_meta(second)}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"info": "Сущность 'customerorder' с UUID: 7944ef04-f831-11e5-7a69-971500188b19 успешно удалена"},
            {"errors": [{"error": "Невозможно удалить документ", "code": 3006}]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let orders: Vec<CustomerOrder> = [ORDER_ID, second]
        .iter()
        .map(|id| serde_json::from_value(json!({"meta": order_meta(id)})).unwrap())
        .collect();

    let moysklad = create_test_client(&server);
    let results = moysklad.customer_order().delete_many(&orders).await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(!results[1].is_ok());
}

// ============================================================================
// Bulk writes
// ============================================================================

#[tokio::test]
async fn test_create_update_many_sends_one_array_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remap/1.2/entity/uom"))
        .and(body_json(json!([{"name": "кг"}, {"name": "л"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([uom_row(0), uom_row(1)])))
        .expect(1)
        .mount(&server)
        .await;

    let mut kg = Uom::default();
    kg.set_name("кг");
    let mut liter = Uom::default();
    liter.set_name("л");

    let moysklad = create_test_client(&server);
    let created = moysklad
        .uom()
        .create_update_many(&[kg, liter], None)
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|uom| uom.meta().is_some()));
}

#[tokio::test]
async fn test_update_sends_explicit_null_for_cleared_reference() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/remap/1.2/entity/customerorder/{ORDER_ID}")))
        .and(body_json(json!({"name": "00042", "project": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": order_meta(ORDER_ID),
            "id": ORDER_ID,
            "name": "00042"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut order = CustomerOrder::default();
    order.set_name("00042").clear_project();

    let moysklad = create_test_client(&server);
    let updated = moysklad
        .customer_order()
        .update(ORDER_ID.parse().unwrap(), &order, None)
        .await
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("00042"));
    assert!(updated.project.is_unset());
}

// ============================================================================
// Attributes
// ============================================================================

#[tokio::test]
async fn test_create_single_attribute_sends_bare_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/api/remap/1.2/entity/customerorder/metadata/attributes",
        ))
        .and(body_json(json!({"name": "Канал", "type": "string"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/customerorder/metadata/attributes/5290a290-0313-11e6-9464-e4de00000020",
                "type": "attributemetadata"
            },
            "id": "5290a290-0313-11e6-9464-e4de00000020",
            "name": "Канал",
            "type": "string"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let attribute = Attribute::new("Канал", AttributeType::String);

    let moysklad = create_test_client(&server);
    let created = moysklad
        .customer_order()
        .create_attributes(&[attribute])
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name.as_deref(), Some("Канал"));
    assert!(created[0].meta.as_ref().and_then(|m: &Meta| m.href.as_ref()).is_some());
}

// ============================================================================
// Broken responses
// ============================================================================

#[tokio::test]
async fn test_truncated_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    let uom_id = "19f1edc0-fc42-4001-94cb-c9ec9c62ec10";

    Mock::given(method("GET"))
        .and(path(format!("/api/remap/1.2/entity/uom/{uom_id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"name": "truncat"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let error = moysklad
        .uom()
        .get_by_id(uom_id.parse().unwrap(), None)
        .await
        .unwrap_err();

    match error {
        ResourceError::Decode { path, .. } => assert!(path.ends_with(uom_id)),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_interrupted_body_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Announces more bytes than it sends, then hangs up.
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 512\r\n\r\n{\"meta\":{\"size\":",
            )
            .await
            .unwrap();
    });

    let config = MoySkladConfig::builder()
        .credentials(Credentials::token("test-token").unwrap())
        .base_url(BaseUrl::new(format!("http://{addr}/api/remap/1.2/")).unwrap())
        .build()
        .unwrap();
    let moysklad = MoySklad::new(&config);

    let error = moysklad.uom().get_list(None).await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Rest(RestError::Http(HttpError::Network(_)))
    ));
}
