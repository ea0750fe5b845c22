//! Citizen problem reports.

use serde::{Deserialize, Serialize};
use store::{KeyValueStore, NewProblem, Problem, RecordStore};

use crate::auth::Session;
use crate::error::{Error, Result};

/// Photo recorded when the reporter attaches none.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1515162816999-a0c47dc192f7?w=600";

/// Report form contents. Everything but `location` and `image_url` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportForm {
    pub title: String,
    pub category: String,
    pub ward_number: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl ReportForm {
    /// Names of blank required fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("category", &self.category),
            ("ward", &self.ward_number),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Validate the form and file the report under the session's email.
///
/// Anyone may report; without a session the report is attributed to
/// [`ANONYMOUS_REPORTER`](crate::auth::ANONYMOUS_REPORTER).
pub fn submit<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &Session,
    form: ReportForm,
) -> Result<Problem> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(Error::MissingFields(missing));
    }

    let image_url = form
        .image_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

    let problem = store.create_problem(NewProblem {
        title: form.title,
        category: form.category,
        ward_number: form.ward_number,
        location: form.location,
        description: form.description,
        image_url: Some(image_url),
        reported_by: session.reporter_email().to_string(),
    });
    Ok(problem)
}
