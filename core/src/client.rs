//! Typed facade over the request dispatcher.
//!
//! # Design
//! Each method shapes a payload, names a fixed route, and delegates to
//! `Dispatcher::dispatch`. No validation, no caching, no error translation:
//! dispatcher errors propagate to the caller unchanged, and mock-mode 404s
//! arrive as envelopes with `code == 404`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::dispatch::Dispatcher;
use crate::error::ApiError;
use crate::http::{HttpMethod, Transport};
use crate::routes::Payload;
use crate::types::{
    ApiResponse, CategoryItem, ImageItem, ImageUpload, NewCategory, PaginatedResponse,
    PaginationParams, UserInfo,
};

/// Typed client for the gallery API.
pub struct ApiClient {
    dispatcher: Dispatcher,
}

impl ApiClient {
    /// A client answering from fixtures with the default configuration.
    pub fn new_mock() -> Self {
        Self {
            dispatcher: Dispatcher::mock(ApiConfig::default()),
        }
    }

    /// A mock-mode client with explicit configuration (latency, base url).
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            dispatcher: Dispatcher::mock(config),
        }
    }

    /// A client forwarding to the host network stack.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Dispatcher::with_transport(config, transport),
        }
    }

    /// Fetch the paginated image list.
    pub async fn get_image_list(
        &self,
        params: PaginationParams,
    ) -> Result<ApiResponse<PaginatedResponse<ImageItem>>, ApiError> {
        self.dispatcher
            .dispatch(HttpMethod::Get, "/api/images", to_payload(&params)?)
            .await
    }

    /// Fetch one image by id. An unknown id resolves to a 200 envelope with
    /// no data.
    pub async fn get_image_detail(&self, id: &str) -> Result<ApiResponse<ImageItem>, ApiError> {
        let mut payload = Payload::new();
        payload.insert("id".to_string(), Value::String(id.to_string()));
        self.dispatcher
            .dispatch(HttpMethod::Get, "/api/images/detail", payload)
            .await
    }

    /// Fetch all categories.
    pub async fn get_category_list(&self) -> Result<ApiResponse<Vec<CategoryItem>>, ApiError> {
        self.dispatcher
            .dispatch(HttpMethod::Get, "/api/categories", Payload::new())
            .await
    }

    /// Fetch the images belonging to a category.
    pub async fn get_category_images(
        &self,
        category_id: &str,
        params: PaginationParams,
    ) -> Result<ApiResponse<PaginatedResponse<ImageItem>>, ApiError> {
        let mut payload = to_payload(&params)?;
        payload.insert(
            "categoryId".to_string(),
            Value::String(category_id.to_string()),
        );
        self.dispatcher
            .dispatch(HttpMethod::Get, "/api/categories/images", payload)
            .await
    }

    /// Fetch the account record.
    pub async fn get_user_info(&self) -> Result<ApiResponse<UserInfo>, ApiError> {
        self.dispatcher
            .dispatch(HttpMethod::Get, "/api/user/info", Payload::new())
            .await
    }

    /// Fetch the user's favorite images.
    pub async fn get_user_favorites(&self) -> Result<ApiResponse<Vec<ImageItem>>, ApiError> {
        self.dispatcher
            .dispatch(HttpMethod::Get, "/api/user/favorites", Payload::new())
            .await
    }

    /// Mark an image as favorite. The mock backend does not implement this
    /// route and answers with the 404 envelope.
    pub async fn add_favorite(&self, image_id: &str) -> Result<ApiResponse<()>, ApiError> {
        let mut payload = Payload::new();
        payload.insert("imageId".to_string(), Value::String(image_id.to_string()));
        self.dispatcher
            .dispatch(HttpMethod::Post, "/api/user/favorites", payload)
            .await
    }

    /// Unmark a favorite. Unimplemented by the mock backend (404 envelope).
    pub async fn remove_favorite(&self, image_id: &str) -> Result<ApiResponse<()>, ApiError> {
        let mut payload = Payload::new();
        payload.insert("imageId".to_string(), Value::String(image_id.to_string()));
        self.dispatcher
            .dispatch(HttpMethod::Delete, "/api/user/favorites", payload)
            .await
    }

    /// Create a category. Unimplemented by the mock backend (404 envelope).
    pub async fn create_category(
        &self,
        input: &NewCategory,
    ) -> Result<ApiResponse<CategoryItem>, ApiError> {
        self.dispatcher
            .dispatch(HttpMethod::Post, "/api/categories", to_payload(input)?)
            .await
    }

    /// Upload an image. Unimplemented by the mock backend (404 envelope).
    pub async fn upload_image(
        &self,
        input: &ImageUpload,
    ) -> Result<ApiResponse<ImageItem>, ApiError> {
        self.dispatcher
            .dispatch(HttpMethod::Post, "/api/images/upload", to_payload(input)?)
            .await
    }
}

/// Serialize a params struct into the payload mapping. Non-object values
/// (unit structs and the like) become an empty payload.
fn to_payload<T: Serialize>(params: &T) -> Result<Payload, ApiError> {
    match serde_json::to_value(params).map_err(ApiError::Serialize)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Payload::new()),
    }
}
