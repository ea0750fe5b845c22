//! Subcommand handlers. Each one calls into `api`/`store` and prints the result.

use anyhow::anyhow;
use chrono::{DateTime, Utc};

use api::{councillor, report, ProblemFilter, Registration, ReportForm, Session};
use store::{KeyValueStore, Problem, ProblemStatus, RecordStore, StoreConfig, User};

/// `2026-10-19T08:15:30.120Z` → `19 Oct 2026`. Unparseable input is shown as-is.
fn format_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|d| d.with_timezone(&Utc).format("%-d %b %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

fn print_row(problem: &Problem) {
    println!(
        "{:<14} {:<12} {:<9} {:<12} {}",
        problem.id,
        problem.status.label(),
        format!("Ward {}", problem.ward_number),
        problem.category,
        problem.title
    );
}

fn print_user(user: &User) {
    match user.ward_number.as_deref() {
        Some(ward) if user.is_councillor() => {
            println!("{} <{}> (councillor, ward {})", user.name, user.email, ward)
        }
        _ => println!("{} <{}> ({})", user.name, user.email, user.role),
    }
}

pub fn list<S: KeyValueStore>(store: &RecordStore<S>, filter: &ProblemFilter, limit: Option<usize>) {
    let problems = filter.apply(&store.list_problems());
    let shown = match limit {
        Some(n) => api::filter::recent(&problems, n),
        None => &problems[..],
    };

    if problems.is_empty() {
        if filter.is_empty() {
            println!("No issues reported yet");
        } else {
            println!("No issues match the current filters");
        }
        return;
    }

    for problem in shown {
        print_row(problem);
    }
    let noun = if problems.len() == 1 { "issue" } else { "issues" };
    println!("Showing {} of {} {}", shown.len(), problems.len(), noun);
}

pub fn show<S: KeyValueStore>(store: &RecordStore<S>, id: &str) -> anyhow::Result<()> {
    let problem = store
        .get_problem(id)
        .ok_or_else(|| anyhow!("Problem not found: {id}"))?;

    println!("{}", problem.title);
    println!("  Status:      {}", problem.status.label());
    println!("  Category:    {}", problem.category);
    println!("  Ward:        {}", problem.ward_number);
    if !problem.location.is_empty() {
        println!("  Location:    {}", problem.location);
    }
    println!("  Reported by: {}", problem.reported_by);
    println!("  Reported on: {}", format_date(&problem.reported_at));
    if let Some(url) = &problem.image_url {
        println!("  Photo:       {url}");
    }
    println!();
    println!("{}", problem.description);
    if let Some(remarks) = &problem.councillor_remarks {
        println!();
        println!("Councillor remarks: {remarks}");
    }
    Ok(())
}

pub fn report<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &Session,
    form: ReportForm,
) -> anyhow::Result<()> {
    if !api::catalog::is_known_category(&form.category) {
        tracing::warn!(category = %form.category, "category not in the standard list");
    }
    let problem = report::submit(store, session, form)?;
    println!("Reported {} as {}", problem.id, problem.reported_by);
    Ok(())
}

pub fn register<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &mut Session,
    form: Registration,
) -> anyhow::Result<()> {
    let user = api::auth::register(store, session, form)?;
    println!("Account created successfully!");
    print_user(&user);
    Ok(())
}

pub fn login<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &mut Session,
    email: &str,
) -> anyhow::Result<()> {
    let user = api::auth::login(store, session, email)?;
    println!("Welcome back, {}!", user.name);
    Ok(())
}

pub fn logout<S: KeyValueStore>(store: &RecordStore<S>, session: &mut Session) {
    api::auth::logout(store, session);
    println!("Logged out");
}

pub fn whoami(session: &Session) {
    match session.user() {
        Some(user) => print_user(user),
        None => println!("Not logged in"),
    }
}

pub fn panel<S: KeyValueStore>(store: &RecordStore<S>, session: &Session) -> anyhow::Result<()> {
    let problems = councillor::ward_problems(store, session)?;
    let stats = api::WardStats::from_problems(&problems);

    println!(
        "Ward {}: {} total, {} pending, {} in progress, {} resolved",
        session.councillor_ward().unwrap_or("?"),
        stats.total,
        stats.pending,
        stats.in_progress,
        stats.resolved
    );
    if stats.pending == 0 {
        println!("There are no pending issues in your ward.");
    }
    for problem in &problems {
        print_row(problem);
    }
    Ok(())
}

pub fn update<S: KeyValueStore>(
    store: &RecordStore<S>,
    session: &Session,
    id: &str,
    status: ProblemStatus,
    remarks: Option<&str>,
) -> anyhow::Result<()> {
    let problem = councillor::update_status(store, session, id, status, remarks)?;
    println!("Status updated successfully!");
    print_row(&problem);
    Ok(())
}

pub fn print_config(config: &StoreConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-10-19T08:15:30.120Z"), "19 Oct 2026");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
