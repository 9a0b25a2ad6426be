//! Domain DTOs and the response envelope for the gallery API.
//!
//! # Design
//! These types mirror the backend's wire schema: field names are camelCase
//! on the wire via serde renames. Fixture data is read-only; `is_favorite`
//! is the only conceptually mutable field, and even that mutation is not
//! persisted by the mock backend.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// A single gallery image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
    pub create_time: String,
    pub is_favorite: bool,
    pub author: String,
    pub size: String,
    pub width: u32,
    pub height: u32,
}

/// An image category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover: String,
    pub count: u32,
    pub create_time: String,
}

/// The account record, with counters derived server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub nickname: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub favorite_count: u32,
    pub category_count: u32,
    pub upload_count: u32,
    pub join_time: String,
}

/// The `{code, message, data}` envelope wrapping every dispatcher response.
///
/// `data` is `None` when the wire carries `null`: a 404 envelope, or a 200
/// lookup whose id matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A 200 envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            message: "ok".to_string(),
            data: Some(data),
        }
    }

    /// A 200 envelope with a null payload (lookup found nothing).
    pub fn ok_empty() -> Self {
        Self {
            code: 200,
            message: "ok".to_string(),
            data: None,
        }
    }

    /// The 404 envelope answered for unregistered routes.
    pub fn not_found() -> Self {
        Self {
            code: 404,
            message: "endpoint not found".to_string(),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

impl ApiResponse<Value> {
    /// Decode the raw payload into a typed envelope. JSON `null` maps to
    /// `None` rather than failing deserialization.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, ApiError> {
        let data = match self.data {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value).map_err(ApiError::Decode)?),
        };
        Ok(ApiResponse {
            code: self.code,
            message: self.message,
            data,
        })
    }
}

/// A page of results. The mock backend always returns the full unfiltered
/// list regardless of `page_size`; `total` counts the returned list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Pagination request parameters. Omitted fields fall back to the backend
/// defaults (page 1, size 20).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Payload for creating a category. Id and creation time are assigned
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub cover: String,
    pub count: u32,
}

/// Payload for uploading an image from a host-picked temp file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_path: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
}
