//! Session context.

use store::{KeyValueStore, RecordStore, User};

/// Sentinel `reportedBy` for reports filed without a session.
pub const ANONYMOUS_REPORTER: &str = "anonymous@user.com";

/// The logged-in user, owned by the application and handed to whatever needs it.
///
/// Created empty at start-up (or restored from the persisted pointer), set by
/// [`login`](super::login) and [`register`](super::register), cleared by
/// [`logout`](super::logout). It holds a snapshot: later edits to the stored
/// user are not seen until the next login.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted session pointer.
    pub fn restore<S: KeyValueStore>(store: &RecordStore<S>) -> Self {
        Self {
            user: store.current_user(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_councillor(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_councillor)
    }

    /// Ward of the logged-in councillor.
    pub fn councillor_ward(&self) -> Option<&str> {
        self.user
            .as_ref()
            .filter(|u| u.is_councillor())
            .and_then(|u| u.ward_number.as_deref())
    }

    /// Email to record on a new report.
    pub fn reporter_email(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.email.as_str())
            .unwrap_or(ANONYMOUS_REPORTER)
    }

    pub(crate) fn set(&mut self, user: Option<User>) {
        self.user = user;
    }
}
