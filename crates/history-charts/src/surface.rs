// File: crates/history-charts/src/surface.rs
// Summary: Named drawing surfaces (PNG targets) that charts are bound to.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawingSurface {
    pub id: String,
    pub path: PathBuf,
    pub width: i32,
    pub height: i32,
}

impl DrawingSurface {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>, width: i32, height: i32) -> Self {
        Self { id: id.into(), path: path.into(), width, height }
    }
}

/// The surfaces a page offers, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSet {
    surfaces: BTreeMap<String, DrawingSurface>,
}

impl SurfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One `<dir>/<id>.png` surface per id, all the same size.
    pub fn in_dir<I, S>(dir: impl AsRef<Path>, ids: I, width: i32, height: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in ids {
            let id = id.into();
            let path = dir.as_ref().join(format!("{id}.png"));
            set.insert(DrawingSurface::new(id, path, width, height));
        }
        set
    }

    /// Add or replace a surface.
    pub fn insert(&mut self, surface: DrawingSurface) {
        self.surfaces.insert(surface.id.clone(), surface);
    }

    pub fn get(&self, id: &str) -> Option<&DrawingSurface> {
        self.surfaces.get(id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
