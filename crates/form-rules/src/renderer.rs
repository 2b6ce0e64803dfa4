// File: src/renderer.rs
// Purpose: View rendering capability handed to the extractor's callers

use crate::error::RenderError;
use crate::template_loader::TemplateLoader;
use crate::value::Value;
use maud::Markup;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

/// Turns a view name into rendered markup
pub trait Renderer {
    fn render(&self, view: &str) -> Result<String, RenderError>;
}

impl<F> Renderer for F
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    fn render(&self, view: &str) -> Result<String, RenderError> {
        self(view)
    }
}

/// Renders views from a [`TemplateLoader`] with `{variable}` interpolation
pub struct TemplateRenderer {
    loader: Arc<TemplateLoader>,
    variables: HashMap<String, Value>,
}

impl TemplateRenderer {
    pub fn new(loader: impl Into<Arc<TemplateLoader>>) -> Self {
        Self {
            loader: loader.into(),
            variables: HashMap::new(),
        }
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    /// Interpolate variables into a template string.
    ///
    /// Unknown placeholders are left untouched.
    pub fn render_str(&self, content: &str) -> String {
        static VAR_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_\.]*)\}").unwrap());

        VAR_REGEX
            .replace_all(content, |caps: &Captures| {
                let name = &caps[1];
                self.lookup(name)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            Some((head, rest)) => self.variables.get(head)?.lookup(rest),
            None => self.variables.get(path),
        }
    }
}

impl Renderer for TemplateRenderer {
    /// Render a loaded view, or read it from disk when it was added after loading
    fn render(&self, view: &str) -> Result<String, RenderError> {
        if let Some(template) = self.loader.get(view) {
            return Ok(self.render_str(&template.content));
        }

        let path = self.loader.view_path(view);
        if !path.exists() {
            return Err(RenderError::NotFound(view.to_string()));
        }

        tracing::debug!("View {} not loaded, reading {:?}", view, path);
        let content =
            fs::read_to_string(&path).map_err(|source| RenderError::Io { path, source })?;

        Ok(self.render_str(&content))
    }
}

type ViewFn = Box<dyn Fn() -> Markup + Send + Sync>;

/// Renders compiled Maud views registered by name
#[derive(Default)]
pub struct MaudRenderer {
    views: HashMap<String, ViewFn>,
}

impl MaudRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view; names follow the same dot/slash rules as [`TemplateLoader`]
    pub fn register<F>(&mut self, name: &str, view: F) -> &mut Self
    where
        F: Fn() -> Markup + Send + Sync + 'static,
    {
        self.views
            .insert(TemplateLoader::resolve_name(name), Box::new(view));
        self
    }

    pub fn with_view<F>(mut self, name: &str, view: F) -> Self
    where
        F: Fn() -> Markup + Send + Sync + 'static,
    {
        self.register(name, view);
        self
    }

    pub fn view_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.views.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Renderer for MaudRenderer {
    fn render(&self, view: &str) -> Result<String, RenderError> {
        let view_fn = self
            .views
            .get(&TemplateLoader::resolve_name(view))
            .ok_or_else(|| RenderError::NotFound(view.to_string()))?;

        Ok(view_fn().into_string())
    }
}
