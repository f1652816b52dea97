use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::domain::{AppError, Profile};
use crate::ports::ConfigStore;

/// In-memory config store that keeps a snapshot of what was last saved.
#[derive(Default)]
pub struct MemoryConfigStore {
    default_domain: Option<String>,
    profiles: BTreeMap<String, Profile>,
    saved: RefCell<BTreeMap<String, Profile>>,
    saves: Cell<usize>,
}

impl MemoryConfigStore {
    /// Seed a profile as if it had been loaded from disk.
    pub fn insert(&mut self, domain: &str, profile: Profile) {
        self.profiles.insert(domain.to_string(), profile.clone());
        self.saved.borrow_mut().insert(domain.to_string(), profile);
    }

    pub fn set_default_domain(&mut self, domain: &str) {
        self.default_domain = Some(domain.to_string());
    }

    /// Profile as of the last `save()`.
    pub fn saved_profile(&self, domain: &str) -> Option<Profile> {
        self.saved.borrow().get(domain).cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn default_domain(&self) -> Option<&str> {
        self.default_domain.as_deref()
    }

    fn has_domain(&self, domain: &str) -> bool {
        self.profiles.contains_key(domain)
    }

    fn profile(&self, domain: &str) -> Result<Profile, AppError> {
        self.profiles.get(domain).cloned().ok_or_else(|| AppError::ProfileNotFound(domain.into()))
    }

    fn set_profile(&mut self, domain: &str, profile: Profile) {
        self.profiles.insert(domain.to_string(), profile);
    }

    fn set_token(&mut self, domain: &str, token: &str) {
        self.profiles.entry(domain.to_string()).or_default().token = token.to_string();
    }

    fn save(&self) -> Result<(), AppError> {
        self.saves.set(self.saves.get() + 1);
        *self.saved.borrow_mut() = self.profiles.clone();
        Ok(())
    }
}
