//! Common utilities for the gallery app.
//!
//! # Overview
//! Independent helpers with no dependency on the API client: formatting
//! (clock time, relative time, file sizes), debounce/throttle, JSON value
//! helpers, typed key-value storage, and thin wrappers over the host
//! platform's UI capabilities.
//!
//! # Design
//! - Host capabilities (dialogs, navigation, picker, storage) sit behind
//!   small traits; the real platform is injected, in-memory fakes
//!   (`RecordingHost`, `MemoryStore`) substitute in tests.
//! - Failures in fire-and-forget paths (storage, navigation) are logged via
//!   `tracing` and swallowed; nothing here is fatal.

pub mod format;
pub mod host;
pub mod rate;
pub mod storage;
pub mod value;

pub use format::{
    format_file_size, format_time, get_relative_time, parse_time, relative_time,
    DEFAULT_TIME_FORMAT,
};
pub use host::{
    navigate_to, preview_image, show_confirm, show_loading, show_toast, ChooseImageOptions,
    ChooseImageResult, ChosenFile, Host, HostCall, HostError, ImageSource, ModalAnswer,
    ModalOptions, NetworkListener, NetworkStatus, PreviewIndicator, PreviewOptions, RecordingHost,
    SafeArea, SystemInfo, ToastIcon, ToastOptions, LOADING_TITLE, TOAST_DURATION,
};
pub use rate::{Debouncer, Throttler, DEFAULT_RATE_DELAY};
pub use storage::{KeyValueStore, MemoryStore, Storage, StorageError};
pub use value::{deep_clone, generate_id};
