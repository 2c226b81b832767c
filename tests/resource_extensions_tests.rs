//! Integration tests for sub-resources beyond plain CRUD: directory
//! settings, notes, webhooks, dictionary elements and production stages.

use moysklad::rest::capabilities::{Create, Notes, Settings};
use moysklad::rest::resources::common::{MetaType, Note};
use moysklad::rest::resources::{
    CounterpartySettings, CustomEntityElement, UniqueCodeRules, Webhook, WebhookAction,
};
use moysklad::{BaseUrl, Credentials, MoySklad, MoySkladConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COUNTERPARTY_ID: &str = "12a8b923-692c-11e6-8a84-bae500000053";
const DICTIONARY_ID: &str = "5b2a8d9e-e1f5-11e6-7a69-8f550000006c";
const STAGE_ID: &str = "aa9f3b3c-51d5-11ee-0a80-0ae00000b2f4";

fn create_test_client(server: &MockServer) -> MoySklad {
    let config = MoySkladConfig::builder()
        .credentials(Credentials::basic("admin@company", "secret").unwrap())
        .base_url(BaseUrl::new(format!("{}/api/remap/1.2/", server.uri())).unwrap())
        .build()
        .unwrap();
    MoySklad::new(&config)
}

#[tokio::test]
async fn test_counterparty_settings_update() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/remap/1.2/entity/counterparty/settings"))
        .and(body_json(json!({
            "uniqueCodeRules": {"checkUniqueCode": true, "fillEmptyCode": false},
            "createShared": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/settings",
                "type": "counterpartysettings"
            },
            "uniqueCodeRules": {"checkUniqueCode": true, "fillEmptyCode": false},
            "createShared": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = CounterpartySettings {
        unique_code_rules: Some(UniqueCodeRules {
            check_unique_code: Some(true),
            fill_empty_code: Some(false),
        }),
        create_shared: Some(true),
        ..Default::default()
    };

    let moysklad = create_test_client(&server);
    let updated = moysklad
        .counterparty()
        .update_settings(&settings)
        .await
        .unwrap();

    assert_eq!(updated.create_shared, Some(true));
    assert!(updated.meta.is_some());
}

#[tokio::test]
async fn test_counterparty_note_is_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/api/remap/1.2/entity/counterparty/{COUNTERPARTY_ID}/notes"
        )))
        .and(body_json(json!({"description": "Перезвонить в понедельник"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2f4c7f84-5c2b-11ee-0a80-08b300087a1d",
            "created": "2023-09-26 12:30:00.000",
            "description": "Перезвонить в понедельник"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let note = moysklad
        .counterparty()
        .create_note(
            COUNTERPARTY_ID.parse().unwrap(),
            &Note::new("Перезвонить в понедельник"),
        )
        .await
        .unwrap();

    assert!(note.id.is_some());
    assert!(note.created.is_some());
}

#[tokio::test]
async fn test_webhook_is_created_enabled_with_post_method() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remap/1.2/entity/webhook"))
        .and(body_json(json!({
            "action": "CREATE",
            "enabled": true,
            "entityType": "customerorder",
            "method": "POST",
            "url": "https://example.com/hooks/orders"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "4d6b1e80-5c2b-11ee-0a80-08b300087a2e",
            "action": "CREATE",
            "enabled": true,
            "entityType": "customerorder",
            "method": "POST",
            "url": "https://example.com/hooks/orders"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = Webhook::new(
        MetaType::CustomerOrder,
        WebhookAction::Create,
        "https://example.com/hooks/orders",
    );

    let moysklad = create_test_client(&server);
    let created = moysklad.webhook().create(&webhook, None).await.unwrap();

    assert_eq!(created.entity_type, Some(MetaType::CustomerOrder));
    assert_eq!(created.enabled, Some(true));
}

#[tokio::test]
async fn test_custom_entity_element_is_posted_to_dictionary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/api/remap/1.2/entity/customentity/{DICTIONARY_ID}"
        )))
        .and(body_json(json!({"name": "Самовывоз"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "6a1f7c42-5c2b-11ee-0a80-08b300087a3f",
            "name": "Самовывоз"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let element = moysklad
        .custom_entity()
        .create_element(
            DICTIONARY_ID.parse().unwrap(),
            &CustomEntityElement::new("Самовывоз"),
        )
        .await
        .unwrap();

    assert_eq!(element.name.as_deref(), Some("Самовывоз"));
}

#[tokio::test]
async fn test_production_stage_materials_are_listed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/api/remap/1.2/entity/productionstagecompletion/{STAGE_ID}/materials"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"size": 1, "limit": 1000, "offset": 0},
            "rows": [{
                "id": "7b8e2d10-5c2b-11ee-0a80-08b300087a50",
                "consumedQuantity": 2.5
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moysklad = create_test_client(&server);
    let materials = moysklad
        .production_stage_completion()
        .get_materials(STAGE_ID.parse().unwrap(), None)
        .await
        .unwrap();

    assert_eq!(materials.rows.len(), 1);
    assert_eq!(materials.rows[0].consumed_quantity, Some(2.5));
}
