use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use anyhow::{Context, Result};

use super::loader;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Dataset cache: one load per source file per session
// ---------------------------------------------------------------------------

/// Caches loaded datasets, keyed by canonicalized source path.
///
/// An entry is reused as long as the file's modification time is unchanged;
/// a changed mtime invalidates it and triggers a reload. Owned by the
/// application state, not a global.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: BTreeMap<PathBuf, CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    modified: Option<SystemTime>,
    dataset: Arc<Dataset>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, loading it on a miss or when the file
    /// has changed since the cached load.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Dataset>> {
        let key = path
            .canonicalize()
            .with_context(|| format!("resolving {}", path.display()))?;
        let modified = std::fs::metadata(&key)
            .and_then(|m| m.modified())
            .ok();

        if let Some(entry) = self.entries.get(&key) {
            if entry.modified == modified {
                log::debug!("cache hit for {}", key.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            log::info!("source changed, reloading {}", key.display());
        }

        let dataset = Arc::new(loader::load_file(&key)?);
        self.entries.insert(
            key,
            CacheEntry {
                modified,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drop the cached entry for `path`, if any.
    pub fn invalidate(&mut self, path: &Path) {
        if let Ok(key) = path.canonicalize() {
            self.entries.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "marca,modelo,preco_mouse,dpi,tipo_mouse\n";

    fn write_csv(name: &str, rows: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(HEADER.as_bytes()).unwrap();
        f.write_all(rows.as_bytes()).unwrap();
        path
    }

    #[test]
    fn repeated_loads_share_the_same_dataset() {
        let path = write_csv("mouse_metrics_cache.csv", "Logitech,G203,129.9,8000,wired\n");
        let mut cache = DatasetCache::new();
        let a = cache.get_or_load(&path).unwrap();
        let b = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn invalidate_forces_a_fresh_load() {
        let path = write_csv(
            "mouse_metrics_cache_inval.csv",
            "Logitech,G203,129.9,8000,wired\n",
        );
        let mut cache = DatasetCache::new();
        let a = cache.get_or_load(&path).unwrap();
        cache.invalidate(&path);
        let b = cache.get_or_load(&path).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), b.len());
    }
}
