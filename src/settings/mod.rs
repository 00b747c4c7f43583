//! # Settings Module
//!
//! Small key/value persistence for user preferences.
//!
//! ## Overview
//!
//! [`SettingsStorage`] is the storage backend seam. The application uses
//! [`JsonFileStorage`], which keeps a flat JSON object in the user's config
//! directory; tests use [`MemoryStorage`]. [`DarkModeSetting`] is the only
//! preference stored today.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/passport-helper/storage.json
//! ```
//!
//! ```json
//! { "darkMode": "true" }
//! ```

mod dark_mode;
mod storage;

pub use dark_mode::{DarkModeSetting, DARK_MODE_KEY};
pub use storage::{JsonFileStorage, MemoryStorage, SettingsStorage};
