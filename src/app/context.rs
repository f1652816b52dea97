use crate::domain::ProjectInfo;
use crate::ports::{GitHubApi, ItemPicker, Pager, UrlOpener};

/// Application context holding the resolved target and the collaborators
/// commands act through.
pub struct AppContext<A: GitHubApi, K: ItemPicker, O: UrlOpener, P: Pager> {
    target: ProjectInfo,
    api: A,
    picker: K,
    opener: O,
    pager: P,
}

impl<A: GitHubApi, K: ItemPicker, O: UrlOpener, P: Pager> AppContext<A, K, O, P> {
    /// Create a new application context.
    pub fn new(target: ProjectInfo, api: A, picker: K, opener: O, pager: P) -> Self {
        Self { target, api, picker, opener, pager }
    }

    /// The domain/project/token this invocation acts on.
    pub fn target(&self) -> &ProjectInfo {
        &self.target
    }

    /// Get a reference to the API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn picker(&self) -> &K {
        &self.picker
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn pager(&self) -> &P {
        &self.pager
    }
}
