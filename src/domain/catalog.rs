//! Newsletter edition catalog
//!
//! The page ships a fixed set of editions. A JSON bundle with the same shape
//! can replace it:
//!
//! ```json
//! {
//!   "default": "jan-2026",
//!   "editions": {
//!     "jan-2026": {
//!       "title": "January 2026 Edition",
//!       "totalPages": 2,
//!       "pdf": "assets/jan-2026.pdf",
//!       "images": ["assets/jan-2026/page-1.jpg", "assets/jan-2026/page-2.jpg"]
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_EDITION: &str = "jan-2026";

/// Query-string parameter that selects the edition
pub const EDITION_QUERY_PARAM: &str = "edition";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub title: String,
    pub total_pages: u32,
    /// Downloadable document
    pub pdf: String,
    /// One image per page, in page order
    pub images: Vec<String>,
}

impl Edition {
    fn numbered(title: &str, total_pages: u32, slug: &str, image_prefix: &str) -> Self {
        Self {
            title: title.to_string(),
            total_pages,
            pdf: format!("assets/{slug}.pdf"),
            images: (1..=total_pages)
                .map(|page| format!("assets/{slug}/{image_prefix}{page}.jpg"))
                .collect(),
        }
    }

    /// Image for a 1-based page number
    pub fn image(&self, page: u32) -> Option<&str> {
        if page == 0 {
            return None;
        }
        self.images.get(page as usize - 1).map(String::as_str)
    }

    fn validate(&self, key: &str) -> Result<(), String> {
        if self.total_pages == 0 {
            return Err(format!("edition '{key}' has no pages"));
        }
        if self.images.len() != self.total_pages as usize {
            return Err(format!(
                "edition '{key}' declares {} pages but lists {} images",
                self.total_pages,
                self.images.len()
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct CatalogBundle {
    #[serde(default)]
    default: Option<String>,
    editions: HashMap<String, Edition>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    editions: HashMap<String, Edition>,
    default_key: String,
}

impl Catalog {
    /// Editions published on the site
    pub fn builtin() -> Self {
        let mut editions = HashMap::new();
        editions.insert(
            "feb-2026".to_string(),
            Edition::numbered("February 2026 Edition", 12, "feb-2026", ""),
        );
        editions.insert(
            "jan-2026".to_string(),
            Edition::numbered("January 2026 Edition", 12, "jan-2026", "page-"),
        );
        editions.insert(
            "dec-2025".to_string(),
            Edition::numbered("December 2025 Edition", 12, "dec-2025", ""),
        );
        editions.insert(
            "nov-2025".to_string(),
            Edition::numbered("November 2025 Edition", 16, "nov-2025", ""),
        );

        Self {
            editions,
            default_key: DEFAULT_EDITION.to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let bundle: CatalogBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    fn from_bundle(bundle: CatalogBundle) -> Result<Self, String> {
        for (key, edition) in bundle.editions.iter() {
            edition.validate(key)?;
        }

        let default_key = bundle.default.unwrap_or_else(|| DEFAULT_EDITION.to_string());
        if !bundle.editions.contains_key(&default_key) {
            return Err(format!("default edition '{default_key}' is not in the catalog"));
        }

        Ok(Self {
            editions: bundle.editions,
            default_key,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Edition> {
        self.editions.get(key)
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn default_edition(&self) -> &Edition {
        // from_bundle and builtin both guarantee the default key is present
        &self.editions[&self.default_key]
    }

    /// Resolve the `edition` query value; unknown or missing keys fall back
    /// to the default edition
    pub fn select(&self, key: Option<&str>) -> &Edition {
        key.filter(|k| !k.is_empty())
            .and_then(|k| self.get(k))
            .unwrap_or_else(|| self.default_edition())
    }

    /// Edition keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.editions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.editions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
