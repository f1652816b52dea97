//! Decides which domain, project and token a command acts on.
//!
//! Three passes fill one [`ProjectInfo`], each overriding the last:
//! the default-domain profile from the config store, the remotes of the
//! local git checkout (only inside a worktree), and explicit arguments.
//! Registering a new domain and storing a newly entered token are persisted
//! immediately, so a failure later in the run keeps them and the next run
//! does not ask again.

use log::{debug, info, warn};

use crate::domain::{AppError, Profile, ProjectInfo, split_project};
use crate::ports::{ConfigStore, GitRemoteInspector, InteractivePrompt};

use super::remote_selection::select_target_remote;

const TOKEN_PROMPT: &str = "Please enter GitHub private token";

pub struct TargetResolver<'a, S, G, P>
where
    S: ConfigStore + ?Sized,
    G: GitRemoteInspector + ?Sized,
    P: InteractivePrompt + ?Sized,
{
    store: &'a mut S,
    git: &'a G,
    prompt: &'a P,
}

impl<'a, S, G, P> TargetResolver<'a, S, G, P>
where
    S: ConfigStore + ?Sized,
    G: GitRemoteInspector + ?Sized,
    P: InteractivePrompt + ?Sized,
{
    pub fn new(store: &'a mut S, git: &'a G, prompt: &'a P) -> Self {
        Self { store, git, prompt }
    }

    /// Resolve the target for this invocation.
    ///
    /// `project` (`owner/name`) and `profile` (a configured domain) take
    /// precedence over everything else; `None` or empty means not given.
    pub fn collect_target(
        &mut self,
        project: Option<&str>,
        profile: Option<&str>,
    ) -> Result<ProjectInfo, AppError> {
        let inside_worktree = self.git.is_inside_worktree()?;
        debug!("inside git worktree: {}", inside_worktree);

        let mut target = self.from_default_config();
        if inside_worktree {
            self.apply_local_repository(&mut target)?;
        }
        self.apply_arguments(&mut target, non_empty(project), non_empty(profile))?;
        self.ensure_credentials(&mut target)?;

        debug!("resolved target domain={:?} project={:?}", target.domain, target.project);
        Ok(target)
    }

    fn from_default_config(&self) -> ProjectInfo {
        let mut target = ProjectInfo::default();
        let Some(domain) = self.store.default_domain().filter(|d| !d.is_empty()) else {
            return target;
        };

        let profile = self.store.profile(domain).unwrap_or_else(|err| {
            warn!("default domain [{}] has no usable profile: {}", domain, err);
            Profile::default()
        });
        target.domain = domain.to_string();
        target.token = profile.token.clone();
        if let Some(project) = profile.default_project() {
            target.project = project.to_string();
        }
        target.profile = Some(profile);
        target
    }

    fn apply_local_repository(&mut self, target: &mut ProjectInfo) -> Result<(), AppError> {
        let remote = select_target_remote(self.git.list_remotes()?, &*self.store)?;
        info!("using remote '{}' ({}/{})", remote.remote_name, remote.domain, remote.project);

        let domain = remote.domain;
        self.register_domain(&domain)?;
        if self.store.token(&domain).is_empty() {
            self.obtain_token(&domain)?;
        }

        let profile = self.store.profile(&domain)?;
        target.domain = domain;
        target.token = profile.token.clone();
        target.project = remote.project;
        target.profile = Some(profile);

        target.current_branch = self.git.current_upstream_branch()?;
        Ok(())
    }

    fn apply_arguments(
        &self,
        target: &mut ProjectInfo,
        project: Option<&str>,
        profile: Option<&str>,
    ) -> Result<(), AppError> {
        if let Some(domain) = profile {
            let stored = self.store.profile(domain)?;
            target.domain = domain.to_string();
            target.token = stored.token.clone();
            target.profile = Some(stored);
        }
        if let Some(project) = project {
            target.project = project.to_string();
        }
        Ok(())
    }

    /// Enforce the output invariants: a domain comes with a token, and a
    /// project is well-formed and has a domain.
    fn ensure_credentials(&mut self, target: &mut ProjectInfo) -> Result<(), AppError> {
        if !target.project.is_empty() {
            if target.domain.is_empty() {
                return Err(AppError::DomainUnresolved { project: target.project.clone() });
            }
            split_project(&target.project)?;
        }

        if !target.domain.is_empty() && target.token.is_empty() {
            let token = self.obtain_token(&target.domain)?;
            target.token = token;
            target.profile = self.store.profile(&target.domain).ok();
        }
        Ok(())
    }

    /// Create an empty profile for an unseen domain and persist it.
    fn register_domain(&mut self, domain: &str) -> Result<(), AppError> {
        if self.store.has_domain(domain) {
            return Ok(());
        }
        self.prompt.notify(&format!("Domain [{}] is not configured yet.", domain));
        self.store.set_profile(domain, Profile::default());
        self.store.save()?;
        self.prompt.notify("Saved profile.");
        Ok(())
    }

    /// Ask the operator for a token, store it on the domain and persist it.
    fn obtain_token(&mut self, domain: &str) -> Result<String, AppError> {
        self.prompt.notify(&format!("No private token found for domain [{}].", domain));
        let token = self
            .prompt
            .ask_secret(TOKEN_PROMPT)
            .map_err(|err| AppError::TokenUnavailable(err.to_string()))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::TokenUnavailable("no token entered".into()));
        }

        self.store.set_token(domain, token);
        self.store.save()?;
        self.prompt.notify("Saved private token.");
        Ok(token.to_string())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
