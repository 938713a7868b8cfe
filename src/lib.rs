//! Password entry field library
//!
//! This library provides the state behind a password entry widget: the
//! masked text, a show/hide toggle, a three tier strength indicator and
//! commit notifications. It does no rendering; hosts draw a [`FieldView`].
//!
//! # Features
//!
//! - `async` (default): Enables channel observers for committed values
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FIELD_TITLE`: Title label (default: `ENTER PASSWORD`)
//! - `PWD_FIELD_MEDIUM_MIN`: Minimum length for `Medium` (default: 10)
//! - `PWD_FIELD_STRONG_MIN`: Minimum length for `Strong` (default: 20)
//!
//! # Example
//!
//! ```rust
//! use password_field::{FieldView, PasswordFieldController, Strength};
//! use secrecy::ExposeSecret;
//!
//! let mut field = PasswordFieldController::new();
//! field.subscribe(|password| println!("committed {} chars", password.expose_secret().len()));
//!
//! field.on_text_changed("correct horse battery");
//! assert_eq!(field.strength(), Strength::Strong);
//!
//! let view = FieldView::render(&field);
//! println!("{} [{}] {}", view.title, view.display_text, view.description);
//!
//! assert!(field.commit().is_committed());
//! assert_eq!(field.committed_password().expose_secret(), "correct horse battery");
//! ```

// Internal modules
mod config;
mod controller;
mod strength;
mod view;

// Public API
pub use config::{
    ConfigError, FieldConfig, DEFAULT_TITLE, MEDIUM_MIN_ENV, STRONG_MIN_ENV, TITLE_ENV,
};
pub use controller::{CommitObserver, CommitOutcome, PasswordFieldController};
pub use strength::{
    classify, classify_password, Strength, StrengthThresholds, MEDIUM_MIN_LENGTH,
    STRONG_MIN_LENGTH,
};
pub use view::{
    description_for, segments_for, FieldView, Hsb, SegmentColor, VisibilityIcon, MASK_CHAR,
};
