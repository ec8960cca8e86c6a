mod memory;
mod shared;

pub use memory::*;
pub use shared::*;

use enrol_types::User;

/// Append-only record store consulted by the registration service.
///
/// Implementations do not enforce login uniqueness; the service checks
/// before it calls [`Storage::add`].
pub trait Storage {
    /// Returns the first record whose login equals `login`.
    fn get(&self, login: &str) -> Option<&User>;

    /// Appends a record unconditionally.
    fn add(&mut self, user: User);

    /// All records, in insertion order.
    fn records(&self) -> &[User];

    /// Removes every record.
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn contains(&self, user: &User) -> bool {
        self.records().contains(user)
    }
}
