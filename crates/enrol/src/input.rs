use std::io::BufRead;

use anyhow::{Context, Result};
use enrol_types::User;

/// Reads one JSON-encoded candidate per line. Blank lines are skipped.
pub fn read_candidates(reader: impl BufRead) -> Result<Vec<User>> {
    let mut candidates = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let user: User = serde_json::from_str(trimmed)
            .with_context(|| format!("line {}: invalid user record", index + 1))?;
        candidates.push(user);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_candidates() {
        let input = r#"{"login": "loginOne", "password": "qwertyu", "age": 18}

{"login": "loginTwo", "age": 21}
"#;
        let candidates = read_candidates(input.as_bytes()).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], User::new("loginOne", "qwertyu", 18));
        assert_eq!(candidates[1].password(), None);
    }

    #[test]
    fn test_read_candidates_reports_line() {
        let input = "{\"login\": \"a\"}\nnot json\n";
        let err = read_candidates(input.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }
}
