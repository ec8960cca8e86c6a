use enrol_types::*;

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Accepted { user } => format!("accepted  {}", format_user(user)),
        Outcome::Rejected { login, error, .. } => {
            format!("rejected  {}: {}", login.as_deref().unwrap_or("<no login>"), error)
        }
    }
}

pub fn format_user(user: &UserSummary) -> String {
    let login = user.login.as_deref().unwrap_or("<no login>");
    match user.age {
        Some(age) => format!("{} (age {})", login, age),
        None => login.to_string(),
    }
}

pub fn format_records(records: &[UserSummary]) -> String {
    if records.is_empty() {
        return "No users registered".to_string();
    }
    let mut lines = vec![format!("Registered users ({}):", records.len())];
    lines.extend(records.iter().map(|u| format!("  {}", format_user(u))));
    lines.join("\n")
}

pub fn format_batch_report(report: &BatchReport) -> String {
    let mut lines: Vec<String> = report.outcomes.iter().map(format_outcome).collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{} accepted, {} rejected",
        report.accepted(),
        report.rejected()
    ));
    lines.push(String::new());
    lines.push(format_records(&report.records));
    lines.join("\n")
}
