mod remote_selection;
mod target_resolver;

pub use remote_selection::{
    HOST_BRAND_PREFIX, dedup_by_domain, filter_known_remotes, select_target_remote,
};
pub use target_resolver::TargetResolver;
