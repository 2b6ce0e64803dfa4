// form-rules - validation rules from rendered form markup
// Renders a view, finds input/textarea/select tags carrying a `validated`
// attribute and maps each field name (in dot notation) to its rule string.

pub mod config;
pub mod error;
pub mod extractor;
pub mod form_data;
pub mod mapping;
pub mod normalize;
pub mod renderer;
pub mod request;
pub mod template_loader;
pub mod validation;
pub mod value;

// Re-export core types
pub use config::Config;
pub use error::RenderError;
pub use extractor::{extract, ElementMatch, RuleExtractor, DEFAULT_MARKER};
pub use form_data::FormData;
pub use mapping::RuleMapping;
pub use normalize::normalize;
pub use renderer::{MaudRenderer, Renderer, TemplateRenderer};
pub use request::{FormRequest, RouteInfo};
pub use template_loader::{TemplateLoader, View};
pub use validation::{validate, ValidationResult};
pub use value::Value;

// Re-export Maud for compiled views
pub use maud::{html as maud, Markup};
