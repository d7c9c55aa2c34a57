#![allow(clippy::unwrap_used)]
// End-to-end controller flows: real `Catalog` over HTTP against wiremock.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brandly_core::{
    BrandDetailController, BrandId, BrandListController, BrandSource, Catalog, ClientConfig,
    DETAIL_FAILURE_MESSAGE, FetchError, IdPolicy, LIST_FAILURE_MESSAGE,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ClientConfig) {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/api/v1/", server.uri())).unwrap();
    (server, ClientConfig::new(base))
}

fn catalog(config: &ClientConfig) -> Arc<dyn BrandSource> {
    Arc::new(Catalog::new(config).unwrap())
}

fn acme() -> serde_json::Value {
    json!({
        "id": "1",
        "name": "Acme",
        "logo": "https://cdn.example.test/acme.png",
        "description": "Anvils, rockets and other fine products",
        "category": "Hardware",
        "followers": "12.5K",
        "campaigns": "8",
        "rating": "4.8",
        "recentCampaign": { "title": "Road Runner", "description": "Beep beep" }
    })
}

// ── Scenario ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_then_detail_for_selected_brand() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(acme()))
        .expect(1)
        .mount(&server)
        .await;

    let source = catalog(&config);

    let list = BrandListController::new(Arc::clone(&source));
    list.activate().await.unwrap();
    let state = list.state();
    let brands = state.ready().unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "Acme");

    let selected = brands[0].id.clone();
    let mut detail = BrandDetailController::new(source, selected);
    detail.activate().await.unwrap();
    let state = detail.state();
    let brand = state.ready().unwrap();
    assert_eq!(brand.id.as_str(), "1");
    assert_eq!(brand.name, "Acme");
    assert_eq!(
        brand.recent_campaign.as_ref().map(|c| c.title.as_str()),
        Some("Road Runner")
    );
    assert!(!detail.is_following());
}

// ── Failure normalization ───────────────────────────────────────────

#[tokio::test]
async fn server_error_lands_in_fixed_list_message() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(ResponseTemplate::new(500).set_body_string("kaboom"))
        .mount(&server)
        .await;

    let list = BrandListController::new(catalog(&config));
    list.activate().await.unwrap();
    assert_eq!(list.state().error_message(), Some(LIST_FAILURE_MESSAGE));
}

#[tokio::test]
async fn malformed_body_lands_in_fixed_detail_message() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let mut detail = BrandDetailController::new(catalog(&config), BrandId::from("1"));
    detail.activate().await.unwrap();
    assert_eq!(detail.state().error_message(), Some(DETAIL_FAILURE_MESSAGE));
}

#[tokio::test]
async fn timeout_is_a_transport_failure() {
    let (server, mut config) = setup().await;
    config.timeout = Some(Duration::from_millis(100));
    Mock::given(method("GET"))
        .and(path("/api/v1/brands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = catalog(&config).list_brands().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }), "{err:?}");
}

// ── Id policy ───────────────────────────────────────────────────────

#[tokio::test]
async fn numeric_policy_rejects_before_any_request() {
    let (server, mut config) = setup().await;
    config.id_policy = IdPolicy::Numeric;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = catalog(&config)
        .get_brand(&BrandId::from("acme"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Validation { .. }), "{err:?}");
}

#[tokio::test]
async fn opaque_dot_segment_ids_never_reach_the_server() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme()])))
        .expect(0)
        .mount(&server)
        .await;

    let source = catalog(&config);
    for raw in [".", ".."] {
        let err = source.get_brand(&BrandId::from(raw)).await.unwrap_err();
        assert!(matches!(err, FetchError::Validation { .. }), "{raw:?}: {err:?}");
    }
}

#[tokio::test]
async fn numeric_policy_sends_canonical_id() {
    let (server, mut config) = setup().await;
    config.id_policy = IdPolicy::Numeric;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(acme()))
        .expect(1)
        .mount(&server)
        .await;

    let brand = catalog(&config)
        .get_brand(&BrandId::from("001"))
        .await
        .unwrap();
    assert_eq!(brand.id.as_str(), "1");
}

#[tokio::test]
async fn mismatched_record_is_rejected() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/brands/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(acme()))
        .mount(&server)
        .await;

    let err = catalog(&config)
        .get_brand(&BrandId::from("2"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }), "{err:?}");
}
