//! Host-framework capability seam: dialogs, navigation, picker, previews.
//!
//! # Design
//! The surrounding app platform owns the UI primitives. This module consumes
//! them behind the [`Host`] trait — synchronous where the platform call
//! fires and forgets, async where it reports back — and layers thin helpers
//! on top that reproduce the app's defaults (toast duration, picker sources,
//! preview fallback). `RecordingHost` is the in-memory substitute used by
//! tests, both here and downstream.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::error;
use url::form_urlencoded;

/// Error raised by a host capability call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("host call failed: {0}")]
pub struct HostError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    Success,
    Loading,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    pub title: String,
    pub icon: ToastIcon,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewIndicator {
    Default,
    Number,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    pub current: String,
    pub urls: Vec<String>,
    pub indicator: PreviewIndicator,
    pub looped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOptions {
    pub title: String,
    pub content: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

/// Which modal button the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalAnswer {
    pub confirm: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SafeArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub platform: String,
    pub system: String,
    pub version: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub pixel_ratio: f64,
    pub status_bar_height: u32,
    pub safe_area: SafeArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Album,
    Camera,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseImageOptions {
    pub count: u32,
    pub sources: Vec<ImageSource>,
}

impl Default for ChooseImageOptions {
    fn default() -> Self {
        Self {
            count: 9,
            sources: vec![ImageSource::Album, ImageSource::Camera],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenFile {
    pub path: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChooseImageResult {
    pub temp_file_paths: Vec<String>,
    pub temp_files: Vec<ChosenFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatus {
    pub is_connected: bool,
    pub network_type: String,
}

pub type NetworkListener = Box<dyn Fn(NetworkStatus) + Send + Sync>;

/// The host platform's UI and device capabilities.
#[async_trait]
pub trait Host: Send + Sync {
    fn preview_image(&self, options: PreviewOptions);
    fn show_toast(&self, options: ToastOptions);
    fn show_loading(&self, title: &str);
    fn hide_loading(&self);
    async fn show_modal(&self, options: ModalOptions) -> ModalAnswer;
    fn navigate_to(&self, url: &str) -> Result<(), HostError>;
    fn navigate_back(&self);
    async fn system_info(&self) -> SystemInfo;
    async fn choose_image(
        &self,
        options: ChooseImageOptions,
    ) -> Result<ChooseImageResult, HostError>;
    async fn save_image_to_album(&self, file_path: &str) -> Result<(), HostError>;
    fn on_network_status_change(&self, listener: NetworkListener);
}

/// Default toast duration.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Default loading-spinner caption.
pub const LOADING_TITLE: &str = "Loading...";

/// Open the full-screen preview on `current`. With no `urls`, the preview
/// set falls back to the current image alone.
pub fn preview_image(host: &dyn Host, current: &str, urls: &[String]) {
    let urls = if urls.is_empty() {
        vec![current.to_string()]
    } else {
        urls.to_vec()
    };
    host.preview_image(PreviewOptions {
        current: current.to_string(),
        urls,
        indicator: PreviewIndicator::Number,
        looped: true,
    });
}

/// Plain toast with the default icon and duration.
pub fn show_toast(host: &dyn Host, title: &str) {
    host.show_toast(ToastOptions {
        title: title.to_string(),
        icon: ToastIcon::None,
        duration: TOAST_DURATION,
    });
}

/// Loading spinner with the default caption.
pub fn show_loading(host: &dyn Host) {
    host.show_loading(LOADING_TITLE);
}

/// Confirm dialog; resolves to whether the user pressed confirm.
pub async fn show_confirm(host: &dyn Host, content: &str, title: &str) -> bool {
    host.show_modal(ModalOptions {
        title: title.to_string(),
        content: content.to_string(),
        confirm_text: "OK".to_string(),
        cancel_text: "Cancel".to_string(),
    })
    .await
    .confirm
}

/// Push a page, appending `params` as a form-urlencoded query. Navigation
/// failures are logged and swallowed.
pub fn navigate_to(host: &dyn Host, url: &str, params: &[(&str, &str)]) {
    let full_url = if params.is_empty() {
        url.to_string()
    } else {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().copied())
            .finish();
        format!("{url}?{query}")
    };
    if let Err(err) = host.navigate_to(&full_url) {
        error!(url = full_url, %err, "navigation failed");
    }
}

/// A recorded host call, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Preview(PreviewOptions),
    Toast(ToastOptions),
    Loading(String),
    HideLoading,
    Modal(ModalOptions),
    Navigate(String),
    Back,
    SaveImage(String),
}

/// In-memory host: records every call and answers with canned results.
#[derive(Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    modal_answer: Mutex<bool>,
    chosen: Mutex<Option<ChooseImageResult>>,
    fail_navigation: Mutex<bool>,
    network_listeners: Mutex<Vec<NetworkListener>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn answer_modal(&self, confirm: bool) {
        *self
            .modal_answer
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = confirm;
    }

    pub fn stage_chosen_images(&self, result: ChooseImageResult) {
        *self.chosen.lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
    }

    pub fn fail_navigation(&self, fail: bool) {
        *self
            .fail_navigation
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = fail;
    }

    /// Fire a status change at every subscribed listener.
    pub fn emit_network_status(&self, status: NetworkStatus) {
        for listener in self
            .network_listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            listener(status.clone());
        }
    }

    fn record(&self, call: HostCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait]
impl Host for RecordingHost {
    fn preview_image(&self, options: PreviewOptions) {
        self.record(HostCall::Preview(options));
    }

    fn show_toast(&self, options: ToastOptions) {
        self.record(HostCall::Toast(options));
    }

    fn show_loading(&self, title: &str) {
        self.record(HostCall::Loading(title.to_string()));
    }

    fn hide_loading(&self) {
        self.record(HostCall::HideLoading);
    }

    async fn show_modal(&self, options: ModalOptions) -> ModalAnswer {
        self.record(HostCall::Modal(options));
        ModalAnswer {
            confirm: *self
                .modal_answer
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }

    fn navigate_to(&self, url: &str) -> Result<(), HostError> {
        if *self
            .fail_navigation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
        {
            return Err(HostError("page not registered".to_string()));
        }
        self.record(HostCall::Navigate(url.to_string()));
        Ok(())
    }

    fn navigate_back(&self) {
        self.record(HostCall::Back);
    }

    async fn system_info(&self) -> SystemInfo {
        SystemInfo {
            platform: "test".to_string(),
            system: "TestOS 1.0".to_string(),
            version: "0.1.0".to_string(),
            screen_width: 390,
            screen_height: 844,
            window_width: 390,
            window_height: 800,
            pixel_ratio: 3.0,
            status_bar_height: 44,
            safe_area: SafeArea {
                left: 0.0,
                right: 390.0,
                top: 44.0,
                bottom: 810.0,
                width: 390.0,
                height: 766.0,
            },
        }
    }

    async fn choose_image(
        &self,
        _options: ChooseImageOptions,
    ) -> Result<ChooseImageResult, HostError> {
        Ok(self
            .chosen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default())
    }

    async fn save_image_to_album(&self, file_path: &str) -> Result<(), HostError> {
        self.record(HostCall::SaveImage(file_path.to_string()));
        Ok(())
    }

    fn on_network_status_change(&self, listener: NetworkListener) {
        self.network_listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn preview_falls_back_to_the_current_image() {
        let host = RecordingHost::new();
        preview_image(&host, "https://example.com/a.jpg", &[]);
        match &host.calls()[0] {
            HostCall::Preview(options) => {
                assert_eq!(options.urls, vec!["https://example.com/a.jpg".to_string()]);
                assert_eq!(options.indicator, PreviewIndicator::Number);
                assert!(options.looped);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn preview_keeps_an_explicit_url_set() {
        let host = RecordingHost::new();
        let urls = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        preview_image(&host, "b.jpg", &urls);
        match &host.calls()[0] {
            HostCall::Preview(options) => {
                assert_eq!(options.urls, urls);
                assert_eq!(options.current, "b.jpg");
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn toast_uses_the_default_icon_and_duration() {
        let host = RecordingHost::new();
        show_toast(&host, "Saved");
        assert_eq!(
            host.calls(),
            vec![HostCall::Toast(ToastOptions {
                title: "Saved".to_string(),
                icon: ToastIcon::None,
                duration: TOAST_DURATION,
            })]
        );
    }

    #[tokio::test]
    async fn confirm_returns_the_pressed_button() {
        let host = RecordingHost::new();
        host.answer_modal(true);
        assert!(show_confirm(&host, "Delete this image?", "Confirm").await);
        host.answer_modal(false);
        assert!(!show_confirm(&host, "Delete this image?", "Confirm").await);

        match &host.calls()[0] {
            HostCall::Modal(options) => {
                assert_eq!(options.title, "Confirm");
                assert_eq!(options.confirm_text, "OK");
                assert_eq!(options.cancel_text, "Cancel");
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn navigate_builds_an_encoded_query() {
        let host = RecordingHost::new();
        navigate_to(
            &host,
            "/pages/detail/index",
            &[("id", "3"), ("from", "home page")],
        );
        assert_eq!(
            host.calls(),
            vec![HostCall::Navigate(
                "/pages/detail/index?id=3&from=home+page".to_string()
            )]
        );
    }

    #[test]
    fn navigate_without_params_keeps_the_bare_url() {
        let host = RecordingHost::new();
        navigate_to(&host, "/pages/home/index", &[]);
        assert_eq!(
            host.calls(),
            vec![HostCall::Navigate("/pages/home/index".to_string())]
        );
    }

    #[test]
    fn navigation_failure_is_swallowed() {
        let host = RecordingHost::new();
        host.fail_navigation(true);
        navigate_to(&host, "/pages/missing/index", &[("id", "1")]);
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn choose_image_returns_the_staged_result() {
        let host = RecordingHost::new();
        host.stage_chosen_images(ChooseImageResult {
            temp_file_paths: vec!["/tmp/pick-1.jpg".to_string()],
            temp_files: vec![ChosenFile {
                path: "/tmp/pick-1.jpg".to_string(),
                size: 2048,
            }],
        });
        let result = host.choose_image(ChooseImageOptions::default()).await.unwrap();
        assert_eq!(result.temp_file_paths.len(), 1);
        assert_eq!(result.temp_files[0].size, 2048);
    }

    #[test]
    fn choose_image_defaults_match_the_app_conventions() {
        let options = ChooseImageOptions::default();
        assert_eq!(options.count, 9);
        assert_eq!(options.sources, vec![ImageSource::Album, ImageSource::Camera]);
    }

    #[test]
    fn network_listeners_receive_emitted_status() {
        let host = RecordingHost::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        host.on_network_status_change(Box::new(move |status| {
            sink.lock().unwrap().push(status);
        }));
        host.emit_network_status(NetworkStatus {
            is_connected: false,
            network_type: "none".to_string(),
        });
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].is_connected);
    }
}
