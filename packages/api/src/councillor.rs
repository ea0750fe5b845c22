//! Councillor panel: ward-scoped listing and status updates.
//!
//! A councillor sees and updates only problems whose ward matches their own.

use store::{KeyValueStore, Problem, ProblemStatus, RecordStore};

use crate::auth::Session;
use crate::error::{Error, Result};
use crate::filter::{ProblemFilter, WardStats};

fn councillor_ward(session: &Session) -> Result<&str> {
    let user = session.user().ok_or(Error::NotAuthenticated)?;
    if !user.is_councillor() {
        return Err(Error::NotCouncillor);
    }
    // Only a direct store write yields a councillor without a ward.
    Ok(user.ward_number.as_deref().unwrap_or_default())
}

/// Problems in the logged-in councillor's ward, in stored order.
pub fn ward_problems<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &Session,
) -> Result<Vec<Problem>> {
    let ward = councillor_ward(session)?;
    Ok(ProblemFilter::new().ward(ward).apply(&store.list_problems()))
}

/// Status counts for the logged-in councillor's ward.
pub fn ward_stats<S: KeyValueStore>(store: &RecordStore<S>, session: &Session) -> Result<WardStats> {
    Ok(WardStats::from_problems(&ward_problems(store, session)?))
}

/// Change a problem's status (and remarks, when non-empty) on behalf of its
/// ward councillor.
pub fn update_status<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &Session,
    id: &str,
    status: ProblemStatus,
    remarks: Option<&str>,
) -> Result<Problem> {
    let ward = councillor_ward(session)?;
    let problem = store
        .get_problem(id)
        .ok_or_else(|| Error::ProblemNotFound(id.to_string()))?;
    if problem.ward_number != ward {
        tracing::warn!(id, ward, problem_ward = %problem.ward_number, "cross-ward update refused");
        return Err(Error::WrongWard {
            ward: problem.ward_number,
        });
    }

    store
        .update_problem_status(id, status, remarks)
        .ok_or_else(|| Error::ProblemNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth;
    use store::MemoryStore;

    fn logged_in(email: &str) -> (RecordStore<MemoryStore>, Session) {
        let store = RecordStore::new(MemoryStore::new());
        let mut session = Session::new();
        auth::login(&store, &mut session, email).unwrap();
        (store, session)
    }

    #[test]
    fn test_ward_problems_scoped() {
        let (store, session) = logged_in("councillor@ward12.gov.in");
        let ids: Vec<String> = ward_problems(&store, &session)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["1", "2", "4"]);

        assert_eq!(
            ward_stats(&store, &session).unwrap(),
            WardStats {
                total: 3,
                pending: 2,
                in_progress: 1,
                resolved: 0,
            }
        );
    }

    #[test]
    fn test_requires_councillor() {
        let store = RecordStore::new(MemoryStore::new());
        let mut session = Session::new();
        assert_eq!(ward_problems(&store, &session), Err(Error::NotAuthenticated));

        auth::register(
            &store,
            &mut session,
            auth::Registration {
                email: "asha@example.com".into(),
                name: "Asha".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(ward_problems(&store, &session), Err(Error::NotCouncillor));
        assert_eq!(
            update_status(&store, &session, "1", ProblemStatus::Resolved, None),
            Err(Error::NotCouncillor)
        );
    }

    #[test]
    fn test_update_own_ward() {
        let (store, session) = logged_in("councillor@ward12.gov.in");

        let updated = update_status(
            &store,
            &session,
            "4",
            ProblemStatus::InProgress,
            Some("Plumber assigned"),
        )
        .unwrap();
        assert_eq!(updated.status, ProblemStatus::InProgress);
        assert_eq!(updated.councillor_remarks.as_deref(), Some("Plumber assigned"));

        let stats = ward_stats(&store, &session).unwrap();
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.in_progress, 2);
    }

    #[test]
    fn test_update_other_ward_refused() {
        let (store, session) = logged_in("councillor@ward8.gov.in");

        assert_eq!(
            update_status(&store, &session, "1", ProblemStatus::Resolved, Some("Done")),
            Err(Error::WrongWard { ward: "12".into() })
        );
        assert_eq!(store.get_problem("1").unwrap().status, ProblemStatus::Pending);
    }

    #[test]
    fn test_update_unknown_problem() {
        let (store, session) = logged_in("councillor@ward8.gov.in");
        assert_eq!(
            update_status(&store, &session, "nonexistent", ProblemStatus::Resolved, None),
            Err(Error::ProblemNotFound("nonexistent".into()))
        );
    }
}
