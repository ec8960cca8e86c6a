use enrol_types::User;
use tracing::debug;

use crate::Storage;

/// In-memory storage backed by a `Vec`, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    users: Vec<User>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Seeds the store without going through registration.
    pub fn with_records(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn into_records(self) -> Vec<User> {
        self.users
    }
}

impl Storage for MemoryStorage {
    fn get(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login() == Some(login))
    }

    fn add(&mut self, user: User) {
        debug!(login = ?user.login(), total = self.users.len() + 1, "storing user record");
        self.users.push(user);
    }

    fn records(&self) -> &[User] {
        &self.users
    }

    fn clear(&mut self) {
        self.users.clear();
    }
}
