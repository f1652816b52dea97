use crate::domain::{AppError, Profile};

/// Port for the persisted per-domain profile store.
///
/// Mutations stay in memory until [`ConfigStore::save`] writes the whole store back.
pub trait ConfigStore {
    /// Domain selected as the default target, if any.
    fn default_domain(&self) -> Option<&str>;

    /// Whether a profile exists for `domain`.
    fn has_domain(&self, domain: &str) -> bool;

    /// Profile for `domain`; fails when the domain is unknown.
    fn profile(&self, domain: &str) -> Result<Profile, AppError>;

    /// Token stored for `domain`, empty when unknown or unset.
    fn token(&self, domain: &str) -> String {
        self.profile(domain).map(|p| p.token).unwrap_or_default()
    }

    /// Insert or replace the profile for `domain`.
    fn set_profile(&mut self, domain: &str, profile: Profile);

    /// Set the token on `domain`, creating the profile if needed.
    fn set_token(&mut self, domain: &str, token: &str);

    /// Persist the complete store.
    fn save(&self) -> Result<(), AppError>;
}
