//! On-disk cache for compiled grammar artifacts.
//!
//! Compiling a full classifier over large tables is the expensive part
//! of loading a language. Compiled transducers are serialized with
//! bincode under a filename that embeds a checksum of the rule tables
//! they were built from, so editing any table silently invalidates the
//! old artifact (its filename no longer matches) and the next load
//! recompiles. Writes go through a temp file in the cache directory and
//! are persisted atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use textnorm_fst::Fst;

use crate::graph::error::GrammarError;
use crate::graph::unit::GrammarKind;

/// A cache directory bound to one rule-table checksum.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    dir: PathBuf,
    checksum: u64,
}

impl ArtifactCache {
    pub fn new(dir: impl Into<PathBuf>, checksum: u64) -> Self {
        ArtifactCache {
            dir: dir.into(),
            checksum,
        }
    }

    /// Artifact path for a grammar unit under the current checksum.
    pub fn path_for(&self, kind: GrammarKind, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}_{:016x}.fst", kind.as_str(), name, self.checksum))
    }

    /// Load a cached transducer, if an artifact for the current
    /// checksum exists.
    pub fn load(&self, kind: GrammarKind, name: &str) -> Result<Option<Fst>, GrammarError> {
        let path = self.path_for(kind, name);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(|e| cache_error(&path, &e.to_string()))?;
        let fst = bincode::deserialize(&bytes).map_err(|e| cache_error(&path, &e.to_string()))?;
        Ok(Some(fst))
    }

    /// Store a compiled transducer, replacing any existing artifact.
    pub fn store(&self, kind: GrammarKind, name: &str, fst: &Fst) -> Result<(), GrammarError> {
        let path = self.path_for(kind, name);
        fs::create_dir_all(&self.dir).map_err(|e| cache_error(&self.dir, &e.to_string()))?;
        let bytes = bincode::serialize(fst).map_err(|e| cache_error(&path, &e.to_string()))?;
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| cache_error(&self.dir, &e.to_string()))?;
        tmp.write_all(&bytes)
            .map_err(|e| cache_error(&path, &e.to_string()))?;
        tmp.persist(&path)
            .map_err(|e| cache_error(&path, &e.to_string()))?;
        Ok(())
    }
}

fn cache_error(path: &Path, message: &str) -> GrammarError {
    GrammarError::Cache {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
