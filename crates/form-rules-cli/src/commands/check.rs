use super::Context;
use anyhow::Result;
use colored::Colorize;
use form_rules::{FormData, FormRequest};

/// Returns whether the submitted data passed
pub fn execute(ctx: &Context, view: &str, data: &str, vars: &[(String, String)]) -> Result<bool> {
    let renderer = ctx.renderer(vars)?;
    let form = FormData::from_urlencoded(data);

    let result = FormRequest::with_view(view).validate(&renderer, &ctx.extractor()?, &form)?;

    if result.is_valid {
        println!("{}", "✓ Valid".green().bold());
        return Ok(true);
    }

    println!("{}", "✗ Validation failed".red().bold());
    for (field, messages) in &result.errors {
        for message in messages {
            println!("  {}: {}", field.cyan(), message);
        }
    }

    Ok(false)
}
