//! # RecordStore: problems, users and the session pointer over a key-value store
//!
//! This module is the core of FixMyWard's storage layer. [`RecordStore`] keeps
//! two ordered collections ([`Problem`]s and [`User`]s) plus one "current user"
//! snapshot, each serialised as a single JSON value under its own key in a
//! [`KeyValueStore`]. The same logic runs against `localStorage`, a directory of
//! files, or an in-memory map.
//!
//! ## Keys
//!
//! | Key (default prefix) | Value |
//! |----------------------|-------|
//! | `fixmyward_problems` | JSON array of [`Problem`], most recently reported first |
//! | `fixmyward_users` | JSON array of [`User`], registration order |
//! | `fixmyward_current_user` | JSON object of the logged-in [`User`]; absent when logged out |
//!
//! ## Read path
//!
//! Every collection read calls [`ensure_seeded`](RecordStore::ensure_seeded) first,
//! then decodes the whole array. A missing, unreadable or malformed value reads as
//! an empty collection; the failure is logged and never returned.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_problems`](RecordStore::list_problems) | All problems in stored order. |
//! | [`get_problem`](RecordStore::get_problem) | Linear scan by id. |
//! | [`list_users`](RecordStore::list_users) | All users in stored order. |
//! | [`find_user_by_email`](RecordStore::find_user_by_email) | Case-insensitive email scan. |
//! | [`current_user`](RecordStore::current_user) | The session snapshot, if any. |
//!
//! ## Write path
//!
//! Mutations read the full collection, change it in memory and write the whole
//! array back. A failed write is logged at `warn` and the operation still returns
//! the record it built. When the stored collection cannot be read or decoded the
//! mutation writes nothing, so an unreadable value is never replaced by a
//! one-element array.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`create_problem`](RecordStore::create_problem) | Assigns id, `pending` status and report time; prepends. |
//! | [`update_problem_status`](RecordStore::update_problem_status) | Replaces status; replaces remarks only when non-empty ones are given. |
//! | [`register_user`](RecordStore::register_user) | Assigns id; appends. Performs no uniqueness check. |
//! | [`login`](RecordStore::login) | Snapshots the matching user into the session pointer. No credential check. |
//! | [`set_current_user`](RecordStore::set_current_user) / [`logout`](RecordStore::logout) | Direct session assignment / clearing. |

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clock::{iso_timestamp, now_millis, unique_id};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::{NewProblem, Problem, ProblemStatus, Role, User};
use crate::seed;

/// Problems, users and the current session, persisted in a KeyValueStore.
pub struct RecordStore<S: KeyValueStore> {
    store: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, StoreConfig::default())
    }

    pub fn with_config(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying key-value backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Write the initial collections for any key that is absent.
    ///
    /// Existing values are never replaced, even malformed ones. A backend that
    /// cannot be read is left alone.
    pub fn ensure_seeded(&self) {
        let demo = self.config.seed.demo_data;

        let problems_key = self.config.problems_key();
        if self.is_absent(&problems_key) {
            let problems = if demo {
                seed::demo_problems(now_millis())
            } else {
                Vec::new()
            };
            tracing::debug!(key = %problems_key, count = problems.len(), "seeding problems");
            self.write_collection(&problems_key, &problems);
        }

        let users_key = self.config.users_key();
        if self.is_absent(&users_key) {
            let users = if demo { seed::demo_users() } else { Vec::new() };
            tracing::debug!(key = %users_key, count = users.len(), "seeding users");
            self.write_collection(&users_key, &users);
        }
    }

    /// All problems, most recently reported first.
    pub fn list_problems(&self) -> Vec<Problem> {
        self.ensure_seeded();
        self.read_collection(&self.config.problems_key())
    }

    /// Look up a problem by id.
    pub fn get_problem(&self, id: &str) -> Option<Problem> {
        self.list_problems().into_iter().find(|p| p.id == id)
    }

    /// Store a newly reported problem at the head of the collection.
    ///
    /// If the stored collection is unreadable the record is built but not saved.
    pub fn create_problem(&self, fields: NewProblem) -> Problem {
        self.ensure_seeded();
        let key = self.config.problems_key();
        let now = now_millis();

        let problems = self.load_collection::<Problem>(&key);
        let existing = problems.as_deref().unwrap_or_default();
        let id = unique_id(now, existing.iter().map(|p| p.id.as_str()));
        let problem = fields.into_problem(id, iso_timestamp(now));

        match problems {
            Ok(mut problems) => {
                problems.insert(0, problem.clone());
                self.write_collection(&key, &problems);
                tracing::info!(id = %problem.id, ward = %problem.ward_number, "problem reported");
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, id = %problem.id, "collection unreadable, problem not saved");
            }
        }
        problem
    }

    /// Set a problem's status, and its remarks when non-empty ones are given.
    ///
    /// Returns `None` without writing when no problem has this id. Omitted or
    /// empty remarks leave the existing remarks untouched.
    pub fn update_problem_status(
        &self,
        id: &str,
        status: ProblemStatus,
        remarks: Option<&str>,
    ) -> Option<Problem> {
        self.ensure_seeded();
        let key = self.config.problems_key();
        let mut problems = match self.load_collection::<Problem>(&key) {
            Ok(problems) => problems,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, id = %id, "collection unreadable, status not updated");
                return None;
            }
        };
        let problem = problems.iter_mut().find(|p| p.id == id)?;

        problem.status = status;
        if let Some(remarks) = remarks.filter(|r| !r.is_empty()) {
            problem.councillor_remarks = Some(remarks.to_string());
        }
        let updated = problem.clone();

        self.write_collection(&key, &problems);
        tracing::info!(id = %updated.id, status = %updated.status, "problem status updated");
        Some(updated)
    }

    /// All users in registration order.
    pub fn list_users(&self) -> Vec<User> {
        self.ensure_seeded();
        self.read_collection(&self.config.users_key())
    }

    /// First user whose email matches, ignoring case.
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.list_users().into_iter().find(|u| u.email_matches(email))
    }

    /// Append a new user.
    ///
    /// Callers check email uniqueness beforehand; this method will happily
    /// store a duplicate. If the stored collection is unreadable the user is
    /// built but not saved.
    pub fn register_user(
        &self,
        email: &str,
        name: &str,
        role: Role,
        ward_number: Option<&str>,
    ) -> User {
        self.ensure_seeded();
        let key = self.config.users_key();

        let users = self.load_collection::<User>(&key);
        let existing = users.as_deref().unwrap_or_default();
        let id = unique_id(now_millis(), existing.iter().map(|u| u.id.as_str()));
        let user = User {
            id,
            email: email.to_string(),
            name: name.to_string(),
            role,
            ward_number: ward_number.map(str::to_string),
        };

        match users {
            Ok(mut users) => {
                users.push(user.clone());
                self.write_collection(&key, &users);
                tracing::info!(id = %user.id, role = %user.role, "user registered");
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, id = %user.id, "collection unreadable, user not saved");
            }
        }
        user
    }

    /// Make the user with this email (any case) the current session.
    ///
    /// No password is involved. On a miss the session is left as it was.
    pub fn login(&self, email: &str) -> Option<User> {
        let user = self.find_user_by_email(email)?;
        self.set_current_user(Some(&user));
        Some(user)
    }

    /// The snapshot taken at login, or `None` if logged out.
    pub fn current_user(&self) -> Option<User> {
        let key = self.config.session_key();
        let raw = match self.store.get_item(&key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read session");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "malformed session value");
                None
            }
        }
    }

    /// Replace the session snapshot; `None` clears it.
    pub fn set_current_user(&self, user: Option<&User>) {
        let key = self.config.session_key();
        let result = match user {
            Some(user) => serde_json::to_string(user)
                .map_err(Into::into)
                .and_then(|json| self.store.set_item(&key, &json)),
            None => self.store.remove_item(&key),
        };
        if let Err(e) = result {
            tracing::warn!(key = %key, error = %e, "failed to write session");
        }
    }

    pub fn logout(&self) {
        self.set_current_user(None);
    }

    fn is_absent(&self, key: &str) -> bool {
        match self.store.get_item(key) {
            Ok(value) => value.is_none(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage unreadable, skipping seed");
                false
            }
        }
    }

    /// Decode a stored collection. An absent key is an empty collection; an
    /// unreadable or malformed value is an error.
    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.get_item(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_collection(key).unwrap_or_else(|e| {
            tracing::warn!(key = %key, error = %e, "unreadable collection, reading as empty");
            Vec::new()
        })
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) {
        let result = serde_json::to_string(items)
            .map_err(Into::into)
            .and_then(|json| self.store.set_item(key, &json));
        if let Err(e) = result {
            tracing::warn!(key = %key, error = %e, "failed to write collection");
        }
    }
}
