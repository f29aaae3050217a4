use crate::foundation::error::{PapillonError, PapillonResult};
use crate::gallery::manifest::normalize_rel_path;
use std::future::Future;
use std::path::PathBuf;

/// Where the static manifest document comes from.
pub trait ManifestSource {
    /// Fetch the raw manifest JSON. Called once per gallery load.
    fn fetch_manifest(&self) -> impl Future<Output = PapillonResult<String>> + Send;
}

/// Manifest served from a static site directory on disk.
#[derive(Clone, Debug)]
pub struct DirManifestSource {
    root: PathBuf,
    name: String,
}

impl DirManifestSource {
    /// Read `name` (relative, no `..`) under `root`.
    pub fn new(root: impl Into<PathBuf>, name: &str) -> PapillonResult<Self> {
        Ok(Self {
            root: root.into(),
            name: normalize_rel_path(name)?,
        })
    }

    /// Full path of the manifest file.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.name)
    }
}

impl ManifestSource for DirManifestSource {
    async fn fetch_manifest(&self) -> PapillonResult<String> {
        let path = self.path();
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            PapillonError::manifest(format!("read manifest '{}': {e}", path.display()))
        })
    }
}

/// Manifest held in memory, or a canned failure.
#[derive(Clone, Debug)]
pub struct StaticManifestSource {
    body: Result<String, String>,
}

impl StaticManifestSource {
    /// Serve `body` verbatim.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
        }
    }

    /// Fail every fetch with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            body: Err(reason.into()),
        }
    }
}

impl ManifestSource for StaticManifestSource {
    async fn fetch_manifest(&self) -> PapillonResult<String> {
        self.body.clone().map_err(PapillonError::manifest)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/source.rs"]
mod tests;
