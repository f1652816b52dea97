pub mod console_prompt;
pub mod fuzzy_picker;
pub mod git_remote_inspector;
pub mod graphql_client;
pub mod system_browser;
pub mod terminal_pager;
pub mod toml_config_store;

pub use console_prompt::ConsolePrompt;
pub use fuzzy_picker::FuzzyPicker;
pub use git_remote_inspector::Git2RemoteInspector;
pub use graphql_client::GraphQlClient;
pub use system_browser::SystemBrowser;
pub use terminal_pager::TerminalPager;
pub use toml_config_store::{CONFIG_PATH_ENV, TomlConfigStore};
