//! Password field controller - text, masking, strength and commit state.

use std::fmt;
use std::ops::Range;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::config::FieldConfig;
use crate::strength::{password_len, Strength};

/// Callback invoked with the committed value after each successful commit.
pub type CommitObserver = Box<dyn FnMut(&SecretString)>;

/// Result of [`PasswordFieldController::commit`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The text was committed; the host should dismiss input focus.
    Committed,
    /// The text was empty; the host should keep the input active.
    Rejected,
}

impl CommitOutcome {
    pub fn is_committed(self) -> bool {
        matches!(self, CommitOutcome::Committed)
    }
}

fn secret(text: &str) -> SecretString {
    SecretString::new(text.to_string().into())
}

/// State behind a password entry widget.
///
/// The host forwards every edit to [`on_text_changed`](Self::on_text_changed)
/// (or [`apply_edit`](Self::apply_edit)), the return key to
/// [`commit`](Self::commit) and the show/hide button to
/// [`toggle_visibility`](Self::toggle_visibility), then reads the state back
/// or renders a [`FieldView`](crate::FieldView).
pub struct PasswordFieldController {
    config: FieldConfig,
    raw_text: SecretString,
    committed_password: SecretString,
    has_committed: bool,
    is_masked: bool,
    strength: Strength,
    observers: Vec<CommitObserver>,
}

impl Default for PasswordFieldController {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordFieldController {
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default())
    }

    pub fn with_config(config: FieldConfig) -> Self {
        let strength = config.thresholds.classify(0);
        Self {
            config,
            raw_text: secret(""),
            committed_password: secret(""),
            has_committed: false,
            is_masked: true,
            strength,
            observers: Vec::new(),
        }
    }

    /// Replaces the current text with the full text after an edit.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) {
        self.raw_text = SecretString::new(new_text.into().into());
        let strength = self.config.thresholds.classify(password_len(&self.raw_text));

        #[cfg(feature = "tracing")]
        if strength != self.strength {
            tracing::debug!("Strength changed: {:?} -> {:?}", self.strength, strength);
        }

        self.strength = strength;
    }

    /// Replaces the characters in `range` with `replacement`.
    ///
    /// `range` is in character (`char`) offsets and is clamped to the current
    /// text. Hosts that report ranges in UTF-16 code units, such as an
    /// `NSRange`, must convert them first.
    pub fn apply_edit(&mut self, range: Range<usize>, replacement: &str) {
        let current = self.raw_text.expose_secret();
        let len = current.chars().count();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);

        let mut new_text = String::with_capacity(current.len() + replacement.len());
        new_text.extend(current.chars().take(start));
        new_text.push_str(replacement);
        new_text.extend(current.chars().skip(end));

        self.on_text_changed(new_text);
    }

    /// Flips the masking flag. Text and strength are untouched.
    pub fn toggle_visibility(&mut self) {
        self.is_masked = !self.is_masked;

        #[cfg(feature = "tracing")]
        tracing::debug!("Password masking set to {}", self.is_masked);
    }

    /// Commits the current text and notifies observers.
    ///
    /// Empty text is rejected and leaves the committed value unchanged.
    pub fn commit(&mut self) -> CommitOutcome {
        if self.raw_text.expose_secret().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Commit rejected: empty password");
            return CommitOutcome::Rejected;
        }

        self.committed_password = secret(self.raw_text.expose_secret());
        self.has_committed = true;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password committed: {} characters, {:?}, {} observers",
            password_len(&self.committed_password),
            self.strength,
            self.observers.len()
        );

        for observer in self.observers.iter_mut() {
            observer(&self.committed_password);
        }

        CommitOutcome::Committed
    }

    /// Registers a callback run on every successful commit, in subscription order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&SecretString) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Forwards every committed value into `tx` without blocking.
    ///
    /// A full or closed channel drops the value.
    #[cfg(feature = "async")]
    pub fn subscribe_tx(&mut self, tx: mpsc::Sender<SecretString>) {
        self.subscribe(move |password: &SecretString| {
            if let Err(e) = tx.try_send(secret(password.expose_secret())) {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send committed password: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
            }
        });
    }

    pub fn raw_text(&self) -> &SecretString {
        &self.raw_text
    }

    /// Last committed value; empty until the first successful commit.
    pub fn committed_password(&self) -> &SecretString {
        &self.committed_password
    }

    pub fn has_committed(&self) -> bool {
        self.has_committed
    }

    pub fn is_masked(&self) -> bool {
        self.is_masked
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Length of the current text in characters.
    pub fn text_len(&self) -> usize {
        password_len(&self.raw_text)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

impl fmt::Debug for PasswordFieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordFieldController")
            .field("config", &self.config)
            .field("raw_text", &self.raw_text)
            .field("committed_password", &self.committed_password)
            .field("has_committed", &self.has_committed)
            .field("is_masked", &self.is_masked)
            .field("strength", &self.strength)
            .field("observers", &self.observers.len())
            .finish()
    }
}
