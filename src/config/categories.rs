//! Complaint category catalog loading from categories.toml
//!
//! This module provides functionality to load the two-level complaint category
//! tree from a TOML configuration file. The catalog drives the intake wizard:
//! the first page lists main categories, and picking one either shows its
//! subcategories or jumps straight to the submission form. When no file is
//! present the built-in catalog is used.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire categories.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryCatalog {
    /// Main categories in display order
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single main category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Label shown on the category picker
    pub label: String,
    /// Second-level choices; empty means the category goes straight to the form
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl CategoryConfig {
    /// Whether picking this category opens a subcategory page first.
    #[must_use]
    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }
}

/// Loads the category catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CategoryCatalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read category config: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse category config: {e}"),
    })
}

/// Loads the catalog from `path`, falling back to the built-in catalog when
/// the file does not exist. A present-but-broken file is still an error.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<CategoryCatalog> {
    let path = path.as_ref();
    if !path.exists() {
        info!(
            "category config {} not found, using built-in catalog",
            path.display()
        );
        return Ok(default_catalog());
    }
    load_catalog(path)
}

/// The built-in category tree, mirroring the complaint reasons the intake
/// form was designed around.
#[must_use]
pub fn default_catalog() -> CategoryCatalog {
    fn category(label: &str, subcategories: &[&str]) -> CategoryConfig {
        CategoryConfig {
            label: label.to_string(),
            subcategories: subcategories.iter().map(ToString::to_string).collect(),
        }
    }

    CategoryCatalog {
        categories: vec![
            category(
                "发布不适当内容对我造成骚扰",
                &[
                    "色情",
                    "违法犯罪及违禁品",
                    "赌博",
                    "政治谣言",
                    "暴恐血腥",
                    "其他违规内容",
                ],
            ),
            category(
                "存在欺诈骗钱行为",
                &[
                    "金融诈骗 (贷款/提额/代开/套现等)",
                    "网络兼职刷单诈骗",
                    "返利诈骗",
                    "网络交友诈骗",
                    "虚假投资理财诈骗",
                    "赌博诈骗",
                    "收款不发货",
                    "仿冒他人诈骗",
                    "免费送诈骗",
                    "游戏相关诈骗(代练/充值等)",
                    "其他诈骗行为",
                ],
            ),
            category("此账号可能被盗用了", &[]),
            category("存在侵权行为", &[]),
            category("发布仿冒品信息", &[]),
            category("冒充他人", &[]),
            category("侵犯未成年人权益", &[]),
            category("粉丝无底线追星行为", &[]),
        ],
    }
}
