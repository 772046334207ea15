use std::fmt;
use std::path;

use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<liquid_core::model::KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_urls: Option<bool>,
    pub site: Site,
    pub feeds: Feeds,
    pub menu: Menu,
    pub links: Links,
    pub pagination: Pagination,
    pub summary: Summary,
    pub seo: Seo,
    pub assets: Assets,
    pub syntax_highlight: SyntaxHighlight,
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == std::path::Path::new("") {
            root = std::path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, "_quill.yml");
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No _quill.yml file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// Load the project config, then apply `_quill.<environment>.yml`
    /// on top of it when that file exists next to the project file.
    pub fn from_cwd_overlaid<P: Into<path::PathBuf>>(cwd: P, environment: &str) -> Result<Config> {
        Self::from_cwd_overlaid_internal(cwd.into(), environment)
    }

    fn from_cwd_overlaid_internal(cwd: path::PathBuf, environment: &str) -> Result<Config> {
        let base = Self::from_cwd(cwd)?;
        let overlay_path = base.root.join(format!("_quill.{environment}.yml"));
        if overlay_path.exists() {
            log::debug!("Using environment overlay `{}`", overlay_path.display());
            let overlay = Self::from_file(overlay_path)?;
            Ok(overlay.merge(&base))
        } else {
            Ok(base)
        }
    }

    /// Field-wise layering: values set on `self` win, gaps are filled
    /// from `other`.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            root,
            source,
            theme,
            relative_urls,
            site,
            feeds,
            menu,
            links,
            pagination,
            summary,
            seo,
            assets,
            syntax_highlight,
        } = self;
        let root = if root.as_os_str().is_empty() {
            other.root.clone()
        } else {
            root
        };
        Self {
            root,
            source: source.or_else(|| other.source.clone()),
            theme: theme.or_else(|| other.theme.clone()),
            relative_urls: relative_urls.or(other.relative_urls),
            site: site.merge(&other.site),
            feeds: feeds.merge(&other.feeds),
            menu: menu.merge(&other.menu),
            links: links.merge(&other.links),
            pagination: pagination.merge(&other.pagination),
            summary: summary.merge(&other.summary),
            seo: seo.merge(&other.seo),
            assets: assets.merge(&other.assets),
            syntax_highlight: syntax_highlight.merge(&other.syntax_highlight),
        }
    }

    pub fn build(self) -> Registry {
        Registry::from_config(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let subset = converted
            .strip_prefix("---")
            .unwrap_or(converted.as_str())
            .trim();
        write!(f, "{subset}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SyntaxHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<LineNumbers>,
}

impl SyntaxHighlight {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            enabled,
            line_numbers,
        } = self;
        Self {
            enabled: enabled.or(other.enabled),
            line_numbers: line_numbers.or(other.line_numbers),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "preview_unstable", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
#[derive(Default)]
pub enum LineNumbers {
    #[default]
    Off,
    Inline,
    Table,
    #[cfg(not(feature = "unstable"))]
    #[doc(hidden)]
    #[serde(other)]
    Unknown,
}

impl LineNumbers {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineNumbers::Off => "off",
            LineNumbers::Inline => "inline",
            LineNumbers::Table => "table",
            #[cfg(not(feature = "unstable"))]
            LineNumbers::Unknown => "off",
        }
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
