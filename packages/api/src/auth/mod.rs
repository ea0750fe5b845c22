//! Email-only login, registration and logout.
//!
//! There is no password: knowing an account's email is enough to act as it.
//! The checks here are the ones the sign-up form runs before touching the
//! store; [`RecordStore`] itself accepts anything.

mod session;

pub use session::{Session, ANONYMOUS_REPORTER};

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, RecordStore, Role, User};

use crate::error::{Error, Result};

/// Sign-up form contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Required for councillors, ignored for citizens.
    pub ward_number: Option<String>,
}

/// Log in as the account with this email (any case).
pub fn login<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &mut Session,
    email: &str,
) -> Result<User> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::EmailRequired);
    }

    let user = store.login(email).ok_or(Error::UserNotFound)?;
    tracing::info!(user = %user.id, role = %user.role, "logged in");
    session.set(Some(user.clone()));
    Ok(user)
}

/// Create an account and log in as it.
///
/// Rejects, in order: a blank email, an email already registered under any
/// case, a blank name, and a councillor without a ward. Email, name and ward
/// are stored trimmed.
pub fn register<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &mut Session,
    form: Registration,
) -> Result<User> {
    let email = form.email.trim();
    if email.is_empty() {
        return Err(Error::EmailRequired);
    }
    if store.find_user_by_email(email).is_some() {
        return Err(Error::EmailTaken);
    }

    let name = form.name.trim();
    if name.is_empty() {
        return Err(Error::NameRequired);
    }

    let ward = match form.role {
        Role::Councillor => {
            let ward = form
                .ward_number
                .as_deref()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .ok_or(Error::WardRequired)?;
            Some(ward)
        }
        Role::Citizen => None,
    };

    let user = store.register_user(email, name, form.role, ward);
    store.set_current_user(Some(&user));
    session.set(Some(user.clone()));
    Ok(user)
}

/// End the session, both in memory and in storage.
pub fn logout<S: KeyValueStore>(store: &RecordStore<S>, session: &mut Session) {
    store.logout();
    session.set(None);
}
