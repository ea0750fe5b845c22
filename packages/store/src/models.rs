//! # Record models for problems and users
//!
//! Defines the records [`crate::RecordStore`] persists. Field names serialise
//! in camelCase and enum values in their wire spelling, so the stored JSON
//! reads the same whichever backend holds it:
//!
//! ```json
//! {"id":"1","title":"Large pothole on main road","category":"Road","wardNumber":"12",
//!  "location":"MG Road, Near City Mall","description":"...","imageUrl":null,
//!  "status":"pending","reportedBy":"citizen@example.com","reportedAt":"2026-10-17T09:30:00.000Z"}
//! ```
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Problem`] | A reported civic issue. `councillor_remarks` is omitted from JSON while unset. |
//! | [`NewProblem`] | The caller-supplied part of a [`Problem`]; the store adds `id`, `status` and `reported_at`. |
//! | [`ProblemStatus`] | `pending` → `in-progress` → `resolved`, changed only by a councillor. |
//! | [`User`] | A citizen or councillor account. `ward_number` is meaningful only for councillors. |
//! | [`Role`] | `citizen` or `councillor`. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A reported civic issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub ward_number: String,
    pub location: String,
    pub description: String,
    /// Data URL or remote URL of the photo, `null` when none was attached.
    pub image_url: Option<String>,
    pub status: ProblemStatus,
    /// Email of the reporting session, or the anonymous sentinel.
    pub reported_by: String,
    /// ISO 8601 creation instant, e.g. `2026-10-19T08:15:30.120Z`.
    pub reported_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub councillor_remarks: Option<String>,
}

/// Fields supplied when reporting a problem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblem {
    pub title: String,
    pub category: String,
    pub ward_number: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub reported_by: String,
}

impl NewProblem {
    pub(crate) fn into_problem(self, id: String, reported_at: String) -> Problem {
        Problem {
            id,
            title: self.title,
            category: self.category,
            ward_number: self.ward_number,
            location: self.location,
            description: self.description,
            image_url: self.image_url,
            status: ProblemStatus::Pending,
            reported_by: self.reported_by,
            reported_at,
            councillor_remarks: None,
        }
    }
}

/// Lifecycle of a problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl ProblemStatus {
    pub const ALL: [ProblemStatus; 3] = [
        ProblemStatus::Pending,
        ProblemStatus::InProgress,
        ProblemStatus::Resolved,
    ];

    /// Wire spelling: `"pending"`, `"in-progress"`, `"resolved"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::Pending => "pending",
            ProblemStatus::InProgress => "in-progress",
            ProblemStatus::Resolved => "resolved",
        }
    }

    /// Human-readable label shown on status badges.
    pub fn label(&self) -> &'static str {
        match self {
            ProblemStatus::Pending => "Pending",
            ProblemStatus::InProgress => "In Progress",
            ProblemStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised status name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ProblemStatus {
    type Err = ParseStatusError;

    /// Accepts wire names and labels, ignoring case, spaces and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "pending" => Ok(ProblemStatus::Pending),
            "in-progress" => Ok(ProblemStatus::InProgress),
            "resolved" => Ok(ProblemStatus::Resolved),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Account role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Citizen,
    Councillor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Councillor => "councillor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A citizen or councillor account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward_number: Option<String>,
}

impl User {
    pub fn is_councillor(&self) -> bool {
        self.role == Role::Councillor
    }

    /// Case-insensitive email comparison used for every account lookup.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_json_field_names() {
        let problem = NewProblem {
            title: "Broken footpath".into(),
            category: "Footpath".into(),
            ward_number: "3".into(),
            location: "Station Road".into(),
            description: "Tiles missing".into(),
            image_url: None,
            reported_by: "anonymous@user.com".into(),
        }
        .into_problem("42".into(), "2026-10-19T08:00:00.000Z".into());

        let json: serde_json::Value = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["wardNumber"], "3");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["reportedAt"], "2026-10-19T08:00:00.000Z");
        assert!(json["imageUrl"].is_null());
        assert!(json.get("councillorRemarks").is_none());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("pending".parse(), Ok(ProblemStatus::Pending));
        assert_eq!("in-progress".parse(), Ok(ProblemStatus::InProgress));
        assert_eq!("In Progress".parse(), Ok(ProblemStatus::InProgress));
        assert_eq!("RESOLVED".parse(), Ok(ProblemStatus::Resolved));
        assert!("closed".parse::<ProblemStatus>().is_err());

        for status in ProblemStatus::ALL {
            assert_eq!(status.label().parse(), Ok(status));
            assert_eq!(status.to_string().parse(), Ok(status));
        }
    }

    #[test]
    fn test_user_ward_omitted_for_citizens() {
        let citizen = User {
            id: "7".into(),
            email: "Asha@Example.com".into(),
            name: "Asha".into(),
            role: Role::Citizen,
            ward_number: None,
        };
        let json = serde_json::to_string(&citizen).unwrap();
        assert_eq!(
            json,
            r#"{"id":"7","email":"Asha@Example.com","name":"Asha","role":"citizen"}"#
        );
        assert!(citizen.email_matches("asha@example.COM"));
        assert!(!citizen.is_councillor());
    }
}
