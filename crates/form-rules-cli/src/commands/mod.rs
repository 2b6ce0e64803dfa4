pub mod check;
pub mod extract;
pub mod list;
pub mod scan;

use crate::OutputFormat;
use anyhow::{Context as _, Result};
use colored::Colorize;
use form_rules::{Config, RuleExtractor, RuleMapping, TemplateLoader, TemplateRenderer, Value};
use std::path::{Path, PathBuf};

/// Loaded configuration shared by every command
pub struct Context {
    pub config: Config,
}

impl Context {
    pub fn load(config_path: &Path, views_override: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::load(config_path)?;

        if let Some(dir) = views_override {
            config.views.dir = dir.to_string_lossy().into_owned();
        }

        tracing::debug!(
            "Views: {} (*.{}), marker: {}",
            config.views.dir,
            config.views.extension,
            config.extraction.marker_attribute
        );

        Ok(Self { config })
    }

    pub fn extractor(&self) -> Result<RuleExtractor> {
        RuleExtractor::from_config(&self.config.extraction).with_context(|| {
            format!(
                "Invalid marker attribute: {:?}",
                self.config.extraction.marker_attribute
            )
        })
    }

    /// Load every view and wrap the loader in a renderer with the given variables
    pub fn renderer(&self, vars: &[(String, String)]) -> Result<TemplateRenderer> {
        let mut loader = TemplateLoader::from_config(&self.config.views);
        loader.load_all()?;

        let mut renderer = TemplateRenderer::new(loader);
        for (key, raw) in vars {
            renderer.set_var(key.clone(), parse_value(raw));
        }

        Ok(renderer)
    }
}

/// Parse a `key=value` view variable
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got {:?}", raw)),
    }
}

// JSON when it parses (numbers, objects, lists), plain string otherwise
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}

pub fn print_rules(rules: &RuleMapping, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rules)?);
        }
        OutputFormat::Table => {
            if rules.is_empty() {
                println!("{}", "No validated fields found".yellow());
                return Ok(());
            }

            let width = rules.fields().map(str::len).max().unwrap_or(0);
            for (field, rule) in rules {
                let padded = format!("{:width$}", field, width = width);
                println!("{}  {}", padded.cyan(), rule);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(
            parse_var("min_age=18").unwrap(),
            ("min_age".to_string(), "18".to_string())
        );
        assert_eq!(
            parse_var("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("18"), Value::Number(18.0));
        assert_eq!(parse_value("hello"), Value::from("hello"));
        assert_eq!(parse_value("\"quoted\""), Value::from("quoted"));
    }
}
