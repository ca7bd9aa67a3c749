use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use labels_core::{SetList, SetRecord};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Somewhere set records come from.
pub trait CatalogSource {
    /// All records, in catalog order (newest first for Scryfall).
    fn fetch(&self) -> Result<Vec<SetRecord>>;
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick the source for a URL or a file path.
pub fn source_for(location: &str, user_agent: &str) -> Result<Box<dyn CatalogSource>> {
    if is_remote(location) {
        Ok(Box::new(HttpCatalog::new(location, user_agent)?))
    } else {
        Ok(Box::new(FileCatalog::new(location)))
    }
}

pub fn http_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(60))
        .build()
        .context("building HTTP client")
}

/// The Scryfall `/sets` endpoint or anything serving the same JSON.
pub struct HttpCatalog {
    url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(url: &str, user_agent: &str) -> Result<Self> {
        Ok(Self {
            url: url.to_string(),
            client: http_client(user_agent)?,
        })
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self) -> Result<Vec<SetRecord>> {
        let list: SetList = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .with_context(|| format!("requesting {}", self.url))?
            .error_for_status()
            .with_context(|| format!("catalog request to {} failed", self.url))?
            .json()
            .with_context(|| format!("decoding catalog from {}", self.url))?;
        debug!("fetched {} sets", list.data.len());
        Ok(list.data)
    }
}

/// A saved copy of the listing. Relative icon paths are taken from the
/// file's directory.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn fetch(&self) -> Result<Vec<SetRecord>> {
        let txt = fs::read_to_string(&self.path)
            .with_context(|| format!("reading catalog {}", self.path.display()))?;
        let mut list: SetList = serde_json::from_str(&txt)
            .with_context(|| format!("parsing catalog {}", self.path.display()))?;
        let base = std::path::absolute(&self.path)?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        for rec in &mut list.data {
            if rec.icon.is_empty() || is_remote(&rec.icon) {
                continue;
            }
            if Path::new(&rec.icon).is_relative() {
                rec.icon = base.join(&rec.icon).to_string_lossy().into_owned();
            }
        }
        Ok(list.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_catalog_resolves_relative_icons() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sets.json");
        fs::write(
            &path,
            r#"{"data": [
                {"code": "neo", "name": "Neon", "set_type": "expansion", "card_count": 300,
                 "icon_svg_uri": "icons/neo.svg"},
                {"code": "mh1", "name": "MH1", "set_type": "draft_innovation", "card_count": 254,
                 "icon_svg_uri": "https://svgs.scryfall.io/sets/mh1.svg"}
            ]}"#,
        )
        .unwrap();
        let records = FileCatalog::new(&path).fetch().unwrap();
        assert_eq!(records.len(), 2);
        assert!(Path::new(&records[0].icon).is_absolute());
        assert!(records[0].icon.ends_with("neo.svg"));
        assert_eq!(records[1].icon, "https://svgs.scryfall.io/sets/mh1.svg");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = FileCatalog::new("/nonexistent/sets.json").fetch().unwrap_err();
        assert!(err.to_string().contains("reading catalog"));
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://api.scryfall.com/sets"));
        assert!(!is_remote("fixtures/sets.json"));
    }
}
