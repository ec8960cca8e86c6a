use serde::{Deserialize, Serialize};

use crate::{RegistrationError, User};

// ============================================================================
// Record view
// ============================================================================

/// What reports show of a user. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            age: user.age,
        }
    }
}

// ============================================================================
// Single outcome
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Accepted {
        user: UserSummary,
    },
    Rejected {
        #[serde(skip_serializing_if = "Option::is_none")]
        login: Option<String>,
        kind: String,
        field: String,
        error: String,
    },
}

impl Outcome {
    pub fn from_result(candidate_login: Option<&str>, result: &Result<User, RegistrationError>) -> Self {
        match result {
            Ok(user) => Outcome::Accepted { user: user.into() },
            Err(err) => Outcome::Rejected {
                login: candidate_login.map(str::to_string),
                kind: err.kind().to_string(),
                field: err.field().to_string(),
                error: err.to_string(),
            },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }
}

// ============================================================================
// Batch
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    #[serde(default)]
    pub records: Vec<UserSummary>,
}

impl BatchReport {
    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn test_rejected_outcome_serialization() {
        let result = Err(RegistrationError::MissingField(Field::Age));
        let outcome = Outcome::from_result(Some("loginOne"), &result);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["login"], "loginOne");
        assert_eq!(json["kind"], "missing_field");
        assert_eq!(json["field"], "age");
        assert_eq!(json["error"], "Age cannot be null.");
    }

    #[test]
    fn test_accepted_outcome_omits_password() {
        let outcome = Outcome::from_result(None, &Ok(User::new("loginOne", "qwertyu", 18)));
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"status":"accepted","user":{"login":"loginOne","age":18}}"#
        );

        let report = BatchReport {
            outcomes: vec![outcome],
            records: vec![UserSummary::from(&User::new("loginOne", "qwertyu", 18))],
        };
        assert!(!serde_json::to_string(&report).unwrap().contains("qwertyu"));
    }

    #[test]
    fn test_batch_counts() {
        let report = BatchReport {
            outcomes: vec![
                Outcome::from_result(None, &Ok(User::new("a", "qwertyu", 18))),
                Outcome::from_result(None, &Err(RegistrationError::MissingField(Field::Login))),
                Outcome::from_result(None, &Ok(User::new("b", "qwertyu", 30))),
            ],
            records: vec![],
        };
        assert_eq!(report.accepted(), 2);
        assert_eq!(report.rejected(), 1);
    }
}
