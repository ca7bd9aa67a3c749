//! On-disk cache of set icons, keyed by set code and icon URL.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labels_core::Page;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::catalog::{http_client, is_remote};

fn hash_str(s: &str) -> String {
    format!("{:x}", Sha256::digest(s.as_bytes()))
}

fn icon_extension(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    if path.to_ascii_lowercase().ends_with(".png") {
        "png"
    } else {
        "svg"
    }
}

pub struct IconCache {
    dir: PathBuf,
    client: Client,
}

impl IconCache {
    pub fn new(dir: &Path, user_agent: &str) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        Ok(Self {
            // Absolute so the paths work as SVG image links.
            dir: std::path::absolute(dir)?,
            client: http_client(user_agent)?,
        })
    }

    pub fn cache_path(&self, code: &str, url: &str) -> PathBuf {
        let key = hash_str(url);
        let code: String = code
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        self.dir
            .join(format!("{code}-{}.{}", &key[..16], icon_extension(url)))
    }

    /// Local file for an icon, downloading it on first use. Local icon
    /// paths are returned unchanged.
    pub fn resolve(&self, code: &str, icon: &str) -> Result<PathBuf> {
        if !is_remote(icon) {
            return Ok(PathBuf::from(icon));
        }
        let path = self.cache_path(code, icon);
        if path.is_file() {
            debug!("icon for {code} cached at {}", path.display());
            return Ok(path);
        }
        info!("Downloading icon for {code}");
        let bytes = self
            .client
            .get(icon)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .with_context(|| format!("downloading {icon}"))?;
        // Write then rename; `path` only ever holds a complete icon.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&path)
            .with_context(|| format!("saving {}", path.display()))?;
        Ok(path)
    }

    /// Icons for every item on a page, by icon reference. Failures are
    /// logged and the label goes without icon.
    pub fn resolve_page(&self, page: &Page) -> HashMap<String, PathBuf> {
        let mut out = HashMap::new();
        for item in &page.items {
            if item.icon.is_empty() || out.contains_key(&item.icon) {
                continue;
            }
            match self.resolve(&item.code, &item.icon) {
                Ok(path) => {
                    out.insert(item.icon.clone(), path);
                }
                Err(e) => warn!("No icon for {}: {e:#}", item.code),
            }
        }
        out
    }
}
