//! JSON project file acting as the map host for the command-line client.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::import::{LayerSource, MapHost};

pub const DEFAULT_PROJECT_FILE: &str = "ion-project.json";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectState {
    pub version: u32,

    #[serde(default)]
    pub layers: Vec<LayerSource>,
}

pub struct ProjectFile {
    path: PathBuf,
    state: ProjectState,
}

impl ProjectFile {
    /// Opens `path`, starting an empty project when it does not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let state = if path.exists() {
            let bytes =
                fs::read(path).with_context(|| format!("read project {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parse project {}", path.display()))?
        } else {
            ProjectState {
                version: 1,
                layers: Vec::new(),
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            state,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layers(&self) -> &[LayerSource] {
        &self.state.layers
    }

    pub fn save(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.state).context("serialize project")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write project {}", self.path.display()))
    }
}

impl MapHost for ProjectFile {
    fn add_layer(&mut self, layer: &LayerSource) -> Result<()> {
        self.state.layers.push(layer.clone());
        if let Err(err) = self.save() {
            self.state.layers.pop();
            return Err(err);
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/project_tests.rs"]
mod tests;
