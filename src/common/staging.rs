use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

/// Shared root under which every request gets its own workspace.
///
/// The root is created lazily on first use and never removed.
#[derive(Clone, Debug)]
pub struct StagingArea {
    root: Arc<PathBuf>,
}

impl StagingArea {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub async fn workspace(&self) -> io::Result<StagingWorkspace> {
        tokio::fs::create_dir_all(self.root.as_path()).await?;

        let dir = self.root.join(Uuid::new_v4().simple().to_string());
        tokio::fs::create_dir(&dir).await?;
        debug!(dir = %dir.display(), "Staging workspace opened");

        Ok(StagingWorkspace {
            dir,
            staged: Vec::new(),
            released: false,
        })
    }
}

/// A file written into a workspace, with its size at the time it was staged.
#[derive(Clone, Debug)]
pub struct StagedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Request-scoped directory. Once opened, a `release` is owed.
///
/// Dropping without `release` (a panic, a cancelled request) still removes the
/// directory, synchronously.
#[derive(Debug)]
pub struct StagingWorkspace {
    dir: PathBuf,
    staged: Vec<PathBuf>,
    released: bool,
}

impl StagingWorkspace {
    pub async fn stage(&mut self, name: &str, bytes: &[u8]) -> io::Result<StagedFile> {
        let path = self.dir.join(name);
        self.staged.push(path.clone());
        tokio::fs::write(&path, bytes).await?;

        Ok(StagedFile {
            path,
            size: bytes.len() as u64,
        })
    }

    /// Path for a tool to write into. Tracked for release from this point on.
    pub fn output_path(&mut self, name: &str) -> PathBuf {
        let path = self.dir.join(name);
        self.staged.push(path.clone());
        path
    }

    /// Snapshots a file some other process produced at `path`.
    pub async fn adopt(&self, path: PathBuf) -> io::Result<StagedFile> {
        let size = tokio::fs::metadata(&path).await?.len();
        Ok(StagedFile { path, size })
    }

    pub async fn release(mut self) -> io::Result<()> {
        self.released = true;

        for path in self.staged.drain(..) {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Failed to unlink staged file"),
            }
        }

        // Anything a tool left behind that was never tracked goes with the directory.
        tokio::fs::remove_dir_all(&self.dir).await?;
        debug!(dir = %self.dir.display(), "Staging workspace released");
        Ok(())
    }
}

impl Drop for StagingWorkspace {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.dir) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(dir = %self.dir.display(), error = %e, "Failed to remove abandoned workspace");
            }
        }
    }
}
