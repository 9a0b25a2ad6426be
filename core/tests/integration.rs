//! End-to-end facade tests.
//!
//! # Design
//! Mock-mode tests run the full client path (facade → dispatcher → route
//! table → fixtures) under a paused tokio clock, so the 500 ms simulated
//! latency costs nothing. Transport-mode tests inject fake transports to
//! exercise the 200, non-200, and transport-failure paths.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gallery_core::{
    ApiClient, ApiConfig, ApiError, BoxError, HttpMethod, HttpRequest, HttpResponse,
    PaginationParams, Transport,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[tokio::test(start_paused = true)]
async fn mock_mode_read_endpoints() {
    init_tracing();
    let client = ApiClient::new_mock();

    // Image list: full catalog, echoed pagination.
    let response = client
        .get_image_list(PaginationParams {
            page: Some(2),
            page_size: Some(3),
        })
        .await
        .unwrap();
    assert!(response.is_ok());
    let page = response.data.unwrap();
    assert_eq!(page.list.len(), 6);
    assert_eq!(page.total, 6);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 3);

    // Detail: known id.
    let response = client.get_image_detail("1").await.unwrap();
    let image = response.data.unwrap();
    assert_eq!(image.title, "Mountain Vista");
    assert_eq!(image.width, 1920);

    // Detail: unknown id resolves 200 with no data, not an error.
    let response = client.get_image_detail("999").await.unwrap();
    assert_eq!(response.code, 200);
    assert!(response.data.is_none());

    // Categories.
    let response = client.get_category_list().await.unwrap();
    let categories = response.data.unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[4].name, "Food");

    // Category images: filtered, original order, total counts the matches.
    let response = client
        .get_category_images("1", PaginationParams::default())
        .await
        .unwrap();
    let page = response.data.unwrap();
    let ids: Vec<&str> = page.list.iter().map(|image| image.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
    assert_eq!(page.total, 2);

    // Category images: unknown category is empty with total zero.
    let response = client
        .get_category_images("42", PaginationParams::default())
        .await
        .unwrap();
    let page = response.data.unwrap();
    assert!(page.list.is_empty());
    assert_eq!(page.total, 0);

    // User info.
    let response = client.get_user_info().await.unwrap();
    let user = response.data.unwrap();
    assert_eq!(user.nickname, "gallery_user");
    assert_eq!(user.upload_count, 156);

    // Favorites: only flagged images.
    let response = client.get_user_favorites().await.unwrap();
    let favorites = response.data.unwrap();
    assert_eq!(favorites.len(), 3);
    assert!(favorites.iter().all(|image| image.is_favorite));
}

#[tokio::test(start_paused = true)]
async fn mock_mode_mutation_routes_answer_404_envelopes() {
    let client = ApiClient::new_mock();

    let response = client.add_favorite("1").await.unwrap();
    assert_eq!(response.code, 404);
    assert!(!response.message.is_empty());
    assert!(response.data.is_none());

    let response = client.remove_favorite("1").await.unwrap();
    assert_eq!(response.code, 404);

    let response = client
        .upload_image(&gallery_core::ImageUpload {
            file_path: "/tmp/pick-1.jpg".to_string(),
            title: "New".to_string(),
            description: String::new(),
            tags: Vec::new(),
            category_id: "1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.code, 404);
}

/// Records the request and answers a canned response.
struct CannedTransport {
    seen: Mutex<Vec<HttpRequest>>,
    response: HttpResponse,
}

impl CannedTransport {
    fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            },
        })
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        Ok(self.response.clone())
    }
}

/// Always fails at the transport level.
struct BrokenTransport;

#[async_trait]
impl Transport for BrokenTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, BoxError> {
        Err("connection refused".into())
    }
}

fn transport_config() -> ApiConfig {
    ApiConfig {
        mock_mode: false,
        ..ApiConfig::default()
    }
}

#[tokio::test]
async fn transport_mode_builds_the_request_and_parses_the_envelope() {
    let body = r#"{"code": 200, "message": "ok", "data": {
        "id": "7", "url": "u", "thumbnail": "t", "title": "Remote",
        "description": "", "tags": [], "categoryId": "1",
        "createTime": "2024-02-01 08:00:00", "isFavorite": false,
        "author": "Z", "size": "1.0MB", "width": 800, "height": 600
    }}"#;
    let transport = CannedTransport::new(200, body);
    let client = ApiClient::with_transport(transport_config(), transport.clone());

    let response = client.get_image_detail("7").await.unwrap();
    assert_eq!(response.data.unwrap().title, "Remote");

    let seen = transport.seen.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://api.photogallery.com/api/images/detail");
    assert_eq!(
        request.headers,
        vec![("content-type".to_string(), "application/json".to_string())]
    );
    let payload: serde_json::Value =
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(payload["id"], "7");
    assert_eq!(request.timeout, std::time::Duration::from_secs(10));
}

#[tokio::test]
async fn transport_mode_empty_payload_has_no_body() {
    let transport = CannedTransport::new(200, r#"{"code": 200, "message": "ok", "data": []}"#);
    let client = ApiClient::with_transport(transport_config(), transport.clone());

    let response = client.get_category_list().await.unwrap();
    assert_eq!(response.data.unwrap().len(), 0);

    let seen = transport.seen.lock().unwrap_or_else(|e| e.into_inner());
    assert!(seen[0].body.is_none());
}

#[tokio::test]
async fn transport_mode_non_200_rejects_with_the_status() {
    let transport = CannedTransport::new(502, "bad gateway");
    let client = ApiClient::with_transport(transport_config(), transport);

    let err = client.get_user_info().await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 502 }));
    assert_eq!(err.to_string(), "request failed: 502");
}

#[tokio::test]
async fn transport_mode_failure_propagates_the_source() {
    let client = ApiClient::with_transport(transport_config(), Arc::new(BrokenTransport));

    let err = client.get_user_favorites().await.unwrap_err();
    match err {
        ApiError::Transport(source) => assert_eq!(source.to_string(), "connection refused"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_mode_bad_envelope_is_a_decode_error() {
    let transport = CannedTransport::new(200, "not json");
    let client = ApiClient::with_transport(transport_config(), transport);

    let err = client.get_user_info().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
