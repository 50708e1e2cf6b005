// src/repositories/seed.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::models::{Post, User};

/// Initial contents for the in-memory collections, read from `SEED_FILE`.
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let seed: SeedData = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))?;
        seed.check_unique_keys()?;
        Ok(seed)
    }

    /// Lookups stop at the first match, so user ids, emails and post ids
    /// must each be unique.
    fn check_unique_keys(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();
        for user in &self.users {
            if !ids.insert(user.id.as_str()) {
                bail!("seed file has duplicate user id {}", user.id);
            }
            if !emails.insert(user.email.as_str()) {
                bail!("seed file has duplicate email {}", user.email);
            }
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            if !post_ids.insert(post.post_id.as_str()) {
                bail!("seed file has duplicate post id {}", post.post_id);
            }
        }
        Ok(())
    }
}
