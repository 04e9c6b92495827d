//! Best-effort probes for the two layers the app is deployed with.
//!
//! AWS mounts layers under `/opt`:
//! * `figlet/` (dependencies layer) ships a pre-rendered ASCII-art banner.
//! * `repeat/` (no-dependencies layer) enables the separator rule under the banner.

use crate::error::{LayerError, LayerErrorExt};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FIGLET_LAYER: &str = "figlet";
pub const REPEAT_LAYER: &str = "repeat";

const BANNER_FILE: &str = "hello-layers.txt";
const RULE_FILL: &str = "-";

pub const FIGLET_FALLBACK: &str =
    "Could not import figlet via layers. Sorry, no ASCII art today... :(";
pub const REPEAT_FALLBACK: &str =
    "Could not import repeat via layers. Sorry, no exclamations today... :(";

/// Handle on the directory where Lambda layers are mounted.
#[derive(Debug, Clone)]
pub struct Layers {
    root: PathBuf,
}

impl Layers {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the banner shipped by the dependencies layer.
    ///
    /// # Errors
    /// Returns [`LayerError::Unavailable`] if the banner cannot be read and
    /// [`LayerError::Malformed`] if it is blank.
    pub async fn banner(&self) -> Result<String, LayerError> {
        let path = self.root.join(FIGLET_LAYER).join(BANNER_FILE);
        let banner = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LayerError::Unavailable {
                layer: FIGLET_LAYER,
                source,
                context: Some(path.display().to_string().into()),
            })?;

        let banner = banner.trim_end_matches(['\r', '\n']);
        if banner.trim().is_empty() {
            return Err(LayerError::Malformed {
                layer: FIGLET_LAYER,
                message: "banner is empty".into(),
                context: None,
            });
        }
        Ok(banner.to_owned())
    }

    /// Draws a rule as wide as the first line of `msg`, if the no-dependencies layer is mounted.
    ///
    /// # Errors
    /// Returns [`LayerError::Unavailable`] if the layer directory is missing and
    /// [`LayerError::Malformed`] if it is not a directory.
    pub async fn rule_for(&self, msg: &str) -> Result<String, LayerError> {
        let path = self.root.join(REPEAT_LAYER);
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|source| LayerError::Unavailable { layer: REPEAT_LAYER, source, context: None })
            .context(path.display().to_string())?;

        if !metadata.is_dir() {
            return Err(LayerError::Malformed {
                layer: REPEAT_LAYER,
                message: "expected a directory".into(),
                context: Some(path.display().to_string().into()),
            });
        }

        let width = msg.lines().next().map_or(0, |line| line.chars().count());
        Ok(RULE_FILL.repeat(width))
    }

    /// Composes the `layers.txt` report. Missing layers degrade to a fixed message, never an error.
    pub async fn report(&self) -> String {
        let mut msg = match self.banner().await {
            Ok(banner) => banner,
            Err(e) => {
                debug!(error = %e, "Dependencies layer not loaded");
                FIGLET_FALLBACK.to_owned()
            },
        };

        let tail = match self.rule_for(&msg).await {
            Ok(rule) => rule,
            Err(e) => {
                debug!(error = %e, "No-dependencies layer not loaded");
                REPEAT_FALLBACK.to_owned()
            },
        };

        msg.push_str("\n\n");
        msg.push_str(&tail);
        msg
    }
}
