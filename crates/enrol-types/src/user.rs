use serde::{Deserialize, Serialize};
use std::fmt;

/// A registration candidate, or a record once it has been accepted.
///
/// Every field may be absent at validation time; the registration rules decide
/// whether the value is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

impl User {
    pub fn new(login: impl Into<String>, password: impl Into<String>, age: i32) -> Self {
        Self {
            login: Some(login.into()),
            password: Some(password.into()),
            age: Some(age),
        }
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn with_login(mut self, login: Option<&str>) -> Self {
        self.login = login.map(str::to_string);
        self
    }

    pub fn with_password(mut self, password: Option<&str>) -> Self {
        self.password = password.map(str::to_string);
        self
    }

    pub fn with_age(mut self, age: Option<i32>) -> Self {
        self.age = age;
        self
    }
}

/// The user fields checked for presence during registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Login,
    Password,
    Age,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Login => "login",
            Field::Password => "password",
            Field::Age => "age",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Field::Login => "Login",
            Field::Password => "Password",
            Field::Age => "Age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
