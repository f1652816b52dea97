//! Picking the remote that names the target project.

use std::collections::BTreeMap;

use crate::domain::{AppError, RemoteInfo};
use crate::ports::ConfigStore;

/// Domains starting with this prefix are accepted without a stored profile.
///
/// This also admits look-alike hosts such as `github-mirror.internal`.
pub const HOST_BRAND_PREFIX: &str = "github";

const PREFERRED_REMOTE: &str = "origin";

/// Keep remotes on brand-prefixed domains or on domains the store already knows.
pub fn filter_known_remotes<S: ConfigStore + ?Sized>(
    remotes: Vec<RemoteInfo>,
    store: &S,
) -> Vec<RemoteInfo> {
    remotes
        .into_iter()
        .filter(|r| r.domain.starts_with(HOST_BRAND_PREFIX) || store.has_domain(&r.domain))
        .collect()
}

/// Collapse remotes to one per domain, ordered by domain name.
///
/// Within a domain the `origin` remote wins; otherwise the first one listed.
pub fn dedup_by_domain(remotes: Vec<RemoteInfo>) -> Vec<RemoteInfo> {
    let mut by_domain: BTreeMap<String, RemoteInfo> = BTreeMap::new();
    for remote in remotes {
        match by_domain.get(&remote.domain) {
            Some(kept) if kept.remote_name == PREFERRED_REMOTE => {}
            Some(_) if remote.remote_name != PREFERRED_REMOTE => {}
            _ => {
                by_domain.insert(remote.domain.clone(), remote);
            }
        }
    }
    by_domain.into_values().collect()
}

/// Filter, deduplicate and return the first surviving remote.
pub fn select_target_remote<S: ConfigStore + ?Sized>(
    remotes: Vec<RemoteInfo>,
    store: &S,
) -> Result<RemoteInfo, AppError> {
    dedup_by_domain(filter_known_remotes(remotes, store))
        .into_iter()
        .next()
        .ok_or(AppError::NoMatchingRemote)
}
