use enrol_config::RulesConfig;
use enrol_store::{SharedStorage, Storage};
use enrol_types::{Field, RegistrationError, User};
use fastrace::trace;
use tracing::{debug, info};

/// Validates candidates against the configured rules and the current store
/// contents, inserting the ones that pass.
///
/// The service holds no records itself. Callers own the store and pass it in,
/// so each test or application instance decides the store's lifetime.
#[derive(Debug, Clone, Default)]
pub struct RegistrationService {
    rules: RulesConfig,
}

impl RegistrationService {
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Runs every registration check without touching the store.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// login uniqueness, password presence, login presence, age presence,
    /// password length, age range. A candidate without a login is never
    /// reported as a duplicate; it fails on the login presence check instead.
    #[trace]
    pub fn validate<S: Storage>(&self, storage: &S, candidate: &User) -> Result<(), RegistrationError> {
        if let Some(login) = candidate.login() {
            if storage.get(login).is_some() {
                return Err(RegistrationError::DuplicateLogin {
                    login: login.to_string(),
                });
            }
        }

        let Some(password) = candidate.password() else {
            return Err(RegistrationError::MissingField(Field::Password));
        };
        if candidate.login().is_none() {
            return Err(RegistrationError::MissingField(Field::Login));
        }
        let Some(age) = candidate.age() else {
            return Err(RegistrationError::MissingField(Field::Age));
        };

        if password.chars().count() < self.rules.min_password_length {
            return Err(RegistrationError::InvalidPassword {
                value: password.to_string(),
                min_length: self.rules.min_password_length,
            });
        }
        if age < self.rules.min_age {
            return Err(RegistrationError::InvalidAge {
                value: age,
                min_age: self.rules.min_age,
            });
        }

        Ok(())
    }

    /// Validates `candidate` and appends it to `storage` on success.
    ///
    /// Exactly one record is added when `Ok` is returned; the store is left
    /// unchanged on `Err`.
    #[trace]
    pub fn register<S: Storage>(&self, storage: &mut S, candidate: User) -> Result<User, RegistrationError> {
        if let Err(err) = self.validate(&*storage, &candidate) {
            debug!(login = ?candidate.login(), kind = err.kind(), "registration rejected");
            return Err(err);
        }

        storage.add(candidate.clone());
        info!(login = ?candidate.login(), "registered user");
        Ok(candidate)
    }

    /// Same contract as [`register`](Self::register), with the uniqueness
    /// check and the insert done under the store's lock.
    pub fn register_shared(&self, storage: &SharedStorage, candidate: User) -> Result<User, RegistrationError> {
        storage.with_lock(|locked| self.register(locked, candidate))
    }

    /// Registers candidates in order; each one sees the records accepted
    /// before it.
    pub fn register_all<S, I>(&self, storage: &mut S, candidates: I) -> Vec<Result<User, RegistrationError>>
    where
        S: Storage,
        I: IntoIterator<Item = User>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.register(&mut *storage, candidate))
            .collect()
    }
}
