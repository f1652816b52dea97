//! Git remotes as seen by target resolution.

/// A configured git remote, reduced to the pieces target resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// Remote name, e.g. `origin`.
    pub remote_name: String,
    /// Host the remote points at, e.g. `github.com`.
    pub domain: String,
    /// Repository path in `owner/name` form.
    pub project: String,
}

impl RemoteInfo {
    pub fn new(
        remote_name: impl Into<String>,
        domain: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self { remote_name: remote_name.into(), domain: domain.into(), project: project.into() }
    }

    /// Build from a remote name and its fetch URL. Returns `None` when the URL
    /// does not name a hosted `owner/repo`.
    pub fn from_url(remote_name: &str, url: &str) -> Option<Self> {
        let parsed = GitRemoteUrl::parse(url)?;
        Some(Self::new(remote_name, parsed.host(), parsed.full_name()))
    }
}

/// Remote URL split into host, owner and repository.
///
/// Accepted shapes:
///
/// - `https://<host>/<owner>/<repo>[.git]`
/// - `http://<host>/<owner>/<repo>[.git]`
/// - `ssh://[user@]<host>/<owner>/<repo>[.git]`
/// - `[user@]<host>:<owner>/<repo>[.git]`
///
/// ```
/// use huc::domain::GitRemoteUrl;
///
/// let url = GitRemoteUrl::parse("git@github.com:acme/widgets.git").unwrap();
/// assert_eq!(url.host(), "github.com");
/// assert_eq!(url.full_name(), "acme/widgets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRemoteUrl {
    host: String,
    owner: String,
    repo: String,
}

impl GitRemoteUrl {
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();

        let (host, path) = if let Some(rest) =
            url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"))
        {
            let rest = rest.rsplit_once('@').map_or(rest, |(_, host_part)| host_part);
            rest.split_once('/')?
        } else if let Some(rest) = url.strip_prefix("ssh://") {
            let rest = rest.split_once('@').map_or(rest, |(_, host_part)| host_part);
            let (host, path) = rest.split_once('/')?;
            // host:port does not fit the host/owner/repo model
            if host.contains(':') {
                return None;
            }
            (host, path)
        } else if !url.contains("://") {
            // scp-like `[user@]host:path`; a slash before the colon makes it a local path
            let (host, path) = url.split_once(':')?;
            if host.contains('/') {
                return None;
            }
            (host.rsplit_once('@').map_or(host, |(_, host_part)| host_part), path)
        } else {
            return None;
        };

        let mut parts = path.trim_matches('/').split('/');
        let owner = parts.next()?;
        let repo = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        if host.is_empty() || owner.is_empty() || repo.is_empty() {
            return None;
        }

        Some(Self { host: host.to_string(), owner: owner.to_string(), repo: repo.to_string() })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `owner/repo`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
