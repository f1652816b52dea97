mod config_store;
mod git_remote_inspector;
mod github_api;
mod interactive_prompt;
mod item_picker;
mod pager;
mod url_opener;

pub use config_store::ConfigStore;
pub use git_remote_inspector::GitRemoteInspector;
pub use github_api::GitHubApi;
pub use interactive_prompt::InteractivePrompt;
pub use item_picker::ItemPicker;
pub use pager::Pager;
pub use url_opener::UrlOpener;
