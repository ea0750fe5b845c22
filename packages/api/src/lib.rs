//! # API crate: caller-side rules for FixMyWard front ends
//!
//! [`store::RecordStore`] is a permissive persistence primitive: it will store a
//! duplicate email or an empty report if asked. This crate holds the checks and
//! scoping rules every front end applies before calling it, so web and
//! native shells share one implementation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`Session`] context, email-only login, registration checks, logout |
//! | [`report`] | Report form validation and submission |
//! | [`councillor`] | Ward-scoped listing, statistics and status updates |
//! | [`filter`] | Listing filters, ward statistics, home-page preview |
//! | [`catalog`] | Category and ward choices |
//!
//! Errors are [`Error`] values whose `Display` text is the message shown to the
//! user. Lookup misses that need no message stay `Option`s in `store`.

pub mod auth;
pub mod catalog;
pub mod councillor;
pub mod filter;
pub mod report;

mod error;

pub use auth::{Registration, Session};
pub use error::{Error, Result};
pub use filter::{ProblemFilter, WardStats};
pub use report::ReportForm;

pub use store::{Problem, ProblemStatus, RecordStore, Role, StoreConfig, User};
