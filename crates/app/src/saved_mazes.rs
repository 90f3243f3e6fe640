//! Saved maze parameters, one JSON file shared by every owner.
//!
//! Ids are per owner and always dense: the first save is 1, and deleting an
//! entry shifts that owner's later ids down by one.

use directories::ProjectDirs;
use maze_core::MazeParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const STORE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedMaze {
    pub id: u32,
    pub owner: String,
    pub name: String,
    pub params: MazeParams,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedMazeStore {
    pub format_version: u32,
    pub entries: Vec<SavedMaze>,
}

impl Default for SavedMazeStore {
    fn default() -> Self {
        Self { format_version: STORE_FORMAT_VERSION, entries: Vec::new() }
    }
}

impl SavedMazeStore {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("saved_mazes.json");
            path
        })
    }

    /// Stores `params` under the owner's next id and returns that id.
    pub fn save(&mut self, owner: &str, name: &str, params: MazeParams) -> u32 {
        let id = self.owned_by(owner).map(|entry| entry.id).max().unwrap_or(0) + 1;
        self.entries.push(SavedMaze {
            id,
            owner: owner.to_owned(),
            name: name.to_owned(),
            params,
        });
        id
    }

    pub fn list(&self, owner: &str) -> Vec<&SavedMaze> {
        let mut entries: Vec<&SavedMaze> = self.owned_by(owner).collect();
        entries.sort_by_key(|entry| entry.id);
        entries
    }

    pub fn get(&self, owner: &str, id: u32) -> Option<&SavedMaze> {
        self.owned_by(owner).find(|entry| entry.id == id)
    }

    /// Removes the entry and renumbers the owner's later entries.
    pub fn delete(&mut self, owner: &str, id: u32) -> Option<SavedMaze> {
        let index =
            self.entries.iter().position(|entry| entry.owner == owner && entry.id == id)?;
        let removed = self.entries.remove(index);
        for entry in &mut self.entries {
            if entry.owner == owner && entry.id > id {
                entry.id -= 1;
            }
        }
        Some(removed)
    }

    fn owned_by<'a>(&'a self, owner: &str) -> impl Iterator<Item = &'a SavedMaze> {
        self.entries.iter().filter(move |entry| entry.owner == owner)
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(store)
    }

    /// Like [`SavedMazeStore::load`], but a missing file is an empty store.
    pub fn load_or_default(path: &Path) -> io::Result<Self> {
        match Self::load(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }
}
