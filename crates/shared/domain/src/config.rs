use crate::constants::{
    DEFAULT_HOST, DEFAULT_LAYERS_DIR, DEFAULT_PORT, DEFAULT_SERVICE_NAME, LOCALDEV,
};
use serde::Deserialize;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Raw settings as they arrive from the config file and the process environment.
///
/// Field names mirror the environment variables (`SERVER_PORT` -> `server_port`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    /// IP literal or host name, resolved when the listener binds.
    pub server_host: String,
    pub server_port: u16,
    pub stage: Option<String>,
    pub node_env: Option<String>,
    pub service_name: Option<String>,
    pub base_url: Option<String>,
    pub layers_dir: PathBuf,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "AppConfigInner")]
pub struct AppConfig {
    inner: Arc<AppConfigInner>,
}

impl From<AppConfigInner> for AppConfig {
    fn from(inner: AppConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl AppConfig {
    /// Resolved deployment stage: `STAGE`, then `NODE_ENV`, then `localdev`.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
            .as_deref()
            .or(self.node_env.as_deref())
            .map_or(Stage::LocalDev, Stage::parse)
    }

    /// Stage taken from `STAGE` alone, ignoring `NODE_ENV`.
    #[must_use]
    pub fn explicit_stage(&self) -> Stage {
        self.stage.as_deref().map_or(Stage::LocalDev, Stage::parse)
    }

    /// Service identifier in the `<service_name>-<stage>` form.
    #[must_use]
    pub fn service(&self) -> String {
        let name = self.service_name.as_deref().unwrap_or(DEFAULT_SERVICE_NAME);
        format!("{name}-{}", self.stage())
    }

    /// Route prefix for the app, falling back to the app-specific default.
    #[must_use]
    pub fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url.as_deref().filter(|url| !url.is_empty()).unwrap_or(default)
    }

    /// Externally visible prefix. Deployed stages sit behind an API Gateway stage segment.
    ///
    /// Only `STAGE` counts here: a `NODE_ENV` of `production` on a developer machine must not
    /// prefix links with `/production`.
    #[must_use]
    pub fn public_base_url(&self, default: &str) -> String {
        let base = self.base_url_or(default);
        match self.explicit_stage() {
            Stage::LocalDev => base.to_owned(),
            Stage::Deployed(stage) => format!("/{stage}{base}"),
        }
    }

    /// Host and port the HTTP listener binds to.
    #[must_use]
    pub fn bind_target(&self) -> (&str, u16) {
        (&self.server_host, self.server_port)
    }
}

/// Deployment stage of a running app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    LocalDev,
    Deployed(String),
}

impl Stage {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.is_empty() || name == LOCALDEV { Self::LocalDev } else { Self::Deployed(name.to_owned()) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LocalDev => LOCALDEV,
            Self::Deployed(name) => name,
        }
    }

    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::LocalDev)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Default ---

impl Default for AppConfigInner {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_owned(),
            server_port: DEFAULT_PORT,
            stage: None,
            node_env: None,
            service_name: None,
            base_url: None,
            layers_dir: PathBuf::from(DEFAULT_LAYERS_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_falls_back_to_node_env() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.stage(), Stage::LocalDev);

        cfg.node_env = Some("production".to_owned());
        assert_eq!(cfg.stage(), Stage::Deployed("production".to_owned()));

        cfg.stage = Some("staging".to_owned());
        assert_eq!(cfg.stage().as_str(), "staging");
    }

    #[test]
    fn public_links_ignore_node_env() {
        let mut cfg = AppConfig::default();
        cfg.node_env = Some("production".to_owned());
        assert_eq!(cfg.explicit_stage(), Stage::LocalDev);
        assert_eq!(cfg.public_base_url("/layers"), "/layers");

        cfg.stage = Some("dev".to_owned());
        assert_eq!(cfg.public_base_url("/layers"), "/dev/layers");
    }

    #[test]
    fn host_names_are_accepted() {
        let mut cfg = AppConfig::default();
        cfg.server_host = "localhost".to_owned();
        cfg.server_port = 8080;
        assert_eq!(cfg.bind_target(), ("localhost", 8080));
    }

    #[test]
    fn clones_share_until_mutated() {
        let cfg = AppConfig::default();
        let mut other = cfg.clone();
        assert!(Arc::ptr_eq(&cfg.inner, &other.inner));

        other.server_port = 8080;
        assert_eq!(cfg.server_port, DEFAULT_PORT);
        assert_eq!(other.server_port, 8080);
    }
}
