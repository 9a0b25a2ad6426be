//! Mock route table: `(method, path)` keys mapped to handler functions.
//!
//! # Design
//! Routes are registered in a lookup table keyed by `"METHOD /path"` rather
//! than branched over in a switch, so adding an endpoint is one `insert`.
//! Handlers are plain functions from `(&Fixtures, &Payload)` to a raw
//! envelope; the dispatcher decodes the raw envelope into the caller's type.
//!
//! The mutation endpoints (favorite add/remove, category create, image
//! upload) are intentionally unregistered: the fixture catalog is immutable,
//! so those routes fall through to the 404 envelope.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::fixtures::Fixtures;
use crate::http::HttpMethod;
use crate::types::ApiResponse;

/// Request payload: an arbitrary key-value mapping.
pub type Payload = Map<String, Value>;

type Handler = fn(&Fixtures, &Payload) -> ApiResponse<Value>;

/// Registered mapping from route key to handler.
pub struct MockRouter {
    routes: HashMap<String, Handler>,
}

impl MockRouter {
    /// The gallery route set: the six read-only endpoints.
    pub fn gallery() -> Self {
        let mut routes: HashMap<String, Handler> = HashMap::new();
        routes.insert(route_key(HttpMethod::Get, "/api/images"), list_images);
        routes.insert(route_key(HttpMethod::Get, "/api/images/detail"), image_detail);
        routes.insert(route_key(HttpMethod::Get, "/api/categories"), list_categories);
        routes.insert(
            route_key(HttpMethod::Get, "/api/categories/images"),
            category_images,
        );
        routes.insert(route_key(HttpMethod::Get, "/api/user/info"), user_info);
        routes.insert(route_key(HttpMethod::Get, "/api/user/favorites"), user_favorites);
        Self { routes }
    }

    /// Resolve `(method, path)` by exact match; unknown routes answer the
    /// 404 envelope rather than erroring.
    pub fn handle(
        &self,
        fixtures: &Fixtures,
        method: HttpMethod,
        path: &str,
        payload: &Payload,
    ) -> ApiResponse<Value> {
        match self.routes.get(&route_key(method, path)) {
            Some(handler) => handler(fixtures, payload),
            None => ApiResponse::not_found(),
        }
    }
}

fn route_key(method: HttpMethod, path: &str) -> String {
    format!("{} {}", method.as_str(), path)
}

/// Read an integer parameter, accepting numbers and numeric strings.
fn param_u32(payload: &Payload, key: &str) -> Option<u32> {
    match payload.get(key)? {
        Value::Number(n) => n.as_u64().map(|n| n as u32),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn param_str<'a>(payload: &'a Payload, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

fn list_images(fixtures: &Fixtures, payload: &Payload) -> ApiResponse<Value> {
    let page = param_u32(payload, "page").unwrap_or(1);
    let page_size = param_u32(payload, "pageSize").unwrap_or(20);
    // The fixture backend never slices to page_size; pagination is echoed.
    ApiResponse::ok(json!({
        "list": fixtures.images,
        "total": fixtures.images.len(),
        "page": page,
        "pageSize": page_size,
    }))
}

fn image_detail(fixtures: &Fixtures, payload: &Payload) -> ApiResponse<Value> {
    // An unknown id answers 200 with a null payload, not a 404.
    match param_str(payload, "id").and_then(|id| fixtures.image(id)) {
        Some(image) => ApiResponse::ok(json!(image)),
        None => ApiResponse::ok_empty(),
    }
}

fn list_categories(fixtures: &Fixtures, _payload: &Payload) -> ApiResponse<Value> {
    ApiResponse::ok(json!(fixtures.categories))
}

fn category_images(fixtures: &Fixtures, payload: &Payload) -> ApiResponse<Value> {
    let page = param_u32(payload, "page").unwrap_or(1);
    let page_size = param_u32(payload, "pageSize").unwrap_or(20);
    let matched = match param_str(payload, "categoryId") {
        Some(category_id) => fixtures.category_images(category_id),
        None => Vec::new(),
    };
    ApiResponse::ok(json!({
        "list": matched,
        "total": matched.len(),
        "page": page,
        "pageSize": page_size,
    }))
}

fn user_info(fixtures: &Fixtures, _payload: &Payload) -> ApiResponse<Value> {
    ApiResponse::ok(json!(fixtures.user))
}

fn user_favorites(fixtures: &Fixtures, _payload: &Payload) -> ApiResponse<Value> {
    ApiResponse::ok(json!(fixtures.favorites()))
}
