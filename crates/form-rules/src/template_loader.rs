// File: src/template_loader.rs
// Purpose: Loads view files from the views/ directory

use crate::config::ViewsConfig;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A loaded view file
#[derive(Debug, Clone)]
pub struct View {
    /// Slash-separated name relative to the views directory, without extension
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// Reads and caches view files, keyed by view name (`user/register`)
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    views_dir: PathBuf,
    extension: String,
    views: BTreeMap<String, View>,
}

impl TemplateLoader {
    /// Create a loader for `*.html` views under `views_dir`
    pub fn new(views_dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(views_dir, "html")
    }

    /// Create a loader for a custom view file extension
    pub fn with_extension(views_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            views_dir: views_dir.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
            views: BTreeMap::new(),
        }
    }

    /// Create a loader from the `[views]` config section
    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::with_extension(&config.dir, config.extension.as_str())
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    /// Load every view below the views directory.
    ///
    /// A missing directory leaves the loader empty.
    pub fn load_all(&mut self) -> Result<()> {
        if !self.views_dir.exists() {
            tracing::warn!("Views directory does not exist: {:?}", self.views_dir);
            return Ok(());
        }

        for entry in WalkDir::new(&self.views_dir).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to walk views directory: {:?}", self.views_dir))?;
            let path = entry.path();

            if entry.file_type().is_file() && self.has_view_extension(path) {
                self.load_view(path)?;
            }
        }

        tracing::info!("Loaded {} views from {:?}", self.views.len(), self.views_dir);
        Ok(())
    }

    fn has_view_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }

    /// Load a single view file
    fn load_view(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read view: {:?}", path))?;

        let name = self.path_to_name(path);
        tracing::debug!("Loaded view: {} -> {:?}", name, path);

        self.views.insert(
            name.clone(),
            View {
                name,
                path: path.to_path_buf(),
                content,
            },
        );

        Ok(())
    }

    /// Convert a file path to a view name (views/user/register.html -> "user/register")
    fn path_to_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.views_dir).unwrap_or(path);

        relative
            .with_extension("")
            .to_string_lossy()
            .replace('\\', "/")
            .trim_start_matches('/')
            .to_string()
    }

    /// Canonical form of a requested view name.
    ///
    /// Dot notation (`user.register`) maps to `user/register`; names that
    /// already contain a slash are taken as-is.
    pub fn resolve_name(name: &str) -> String {
        let name = name.trim_start_matches('/');
        if name.contains('/') {
            name.to_string()
        } else {
            name.replace('.', "/")
        }
    }

    /// Get a view by name, in dot or slash notation.
    ///
    /// The stored name is tried first, so a file such as `signup.v2.html`
    /// stays reachable as `signup.v2`.
    pub fn get(&self, name: &str) -> Option<&View> {
        self.views
            .get(name.trim_start_matches('/'))
            .or_else(|| self.views.get(&Self::resolve_name(name)))
    }

    /// File a view name maps to below the views directory
    pub fn view_path(&self, name: &str) -> PathBuf {
        self.views_dir
            .join(format!("{}.{}", Self::resolve_name(name), self.extension))
    }

    /// All loaded view names, sorted
    pub fn list_views(&self) -> Vec<&str> {
        self.views.keys().map(String::as_str).collect()
    }

    /// All loaded views, sorted by name
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.values()
    }

    pub fn count(&self) -> usize {
        self.views.len()
    }

    /// Re-read a single view file
    pub fn reload_template(&mut self, path: &Path) -> Result<()> {
        let name = self.path_to_name(path);
        self.views.remove(&name);

        if path.exists() {
            self.load_view(path)?;
        } else {
            tracing::debug!("View removed: {}", name);
        }

        Ok(())
    }

    /// Drop every cached view and load the directory again
    pub fn reload_all(&mut self) -> Result<()> {
        self.views.clear();
        self.load_all()
    }
}
