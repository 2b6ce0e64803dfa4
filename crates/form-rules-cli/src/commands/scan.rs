use super::{print_rules, Context};
use crate::OutputFormat;
use anyhow::{Context as _, Result};
use std::fs;
use std::io;
use std::path::Path;

pub fn execute(ctx: &Context, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let markup = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read markup file: {:?}", path))?,
        None => io::read_to_string(io::stdin()).context("Failed to read markup from stdin")?,
    };

    let extractor = ctx.extractor()?;
    let rules = extractor.extract(&markup);

    if rules.is_empty() {
        let controls = extractor.elements(&markup).count();
        tracing::info!("{} form control(s) found, none marked with {:?}", controls, extractor.marker());
    }

    print_rules(&rules, format)
}
