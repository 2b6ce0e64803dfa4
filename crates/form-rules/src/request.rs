// File: src/request.rs
// Purpose: Resolve which view a form request validates against, and run it

use crate::config::Config;
use crate::error::RenderError;
use crate::extractor::RuleExtractor;
use crate::form_data::FormData;
use crate::mapping::RuleMapping;
use crate::renderer::Renderer;
use crate::validation::{self, ValidationResult};
use std::collections::HashMap;

/// Route default that names the form view explicitly
pub const FORM_VIEW_DEFAULT: &str = "form_view";

/// The parts of a matched route a form request needs
#[derive(Debug, Clone, Default)]
pub struct RouteInfo {
    /// Route name, e.g. `user.register`
    pub name: Option<String>,
    /// Static defaults attached to the route
    pub defaults: HashMap<String, String>,
}

impl RouteInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            defaults: HashMap::new(),
        }
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }
}

/// A request whose validation rules come from the form view it was submitted from
#[derive(Debug, Clone)]
pub struct FormRequest {
    form_view: Option<String>,
}

impl FormRequest {
    /// Resolve the form view for a route.
    ///
    /// Priority:
    ///  1. the route's `form_view` default
    ///  2. `form.default_form_view` from config
    ///  3. the route name with `.` turned into `/` (`user.register` -> `user/register`)
    pub fn for_route(route: &RouteInfo, config: &Config) -> Self {
        let form_view = route
            .defaults
            .get(FORM_VIEW_DEFAULT)
            .cloned()
            .or_else(|| config.form.default_form_view.clone())
            .or_else(|| route.name.as_deref().map(default_view));

        tracing::debug!("Form view for route {:?}: {:?}", route.name, form_view);
        Self { form_view }
    }

    /// A request bound to an explicit view
    pub fn with_view(view: impl Into<String>) -> Self {
        Self {
            form_view: Some(view.into()),
        }
    }

    pub fn form_view(&self) -> Option<&str> {
        self.form_view.as_deref()
    }

    /// Render the form view and extract its rules.
    ///
    /// No view means no rules.
    pub fn rules<R>(&self, renderer: &R, extractor: &RuleExtractor) -> Result<RuleMapping, RenderError>
    where
        R: Renderer + ?Sized,
    {
        let Some(view) = self.form_view.as_deref() else {
            return Ok(RuleMapping::new());
        };

        let markup = renderer.render(view)?;
        let rules = extractor.extract(&markup);
        tracing::debug!("Extracted {} rule(s) from view {}", rules.len(), view);

        Ok(rules)
    }

    /// Extract rules and validate submitted data against them
    pub fn validate<R>(
        &self,
        renderer: &R,
        extractor: &RuleExtractor,
        form: &FormData,
    ) -> Result<ValidationResult, RenderError>
    where
        R: Renderer + ?Sized,
    {
        let rules = self.rules(renderer, extractor)?;
        Ok(validation::validate(&rules, form))
    }
}

fn default_view(route_name: &str) -> String {
    route_name.replace('.', "/")
}
