use super::{print_rules, Context};
use crate::OutputFormat;
use anyhow::Result;
use form_rules::FormRequest;

pub fn execute(ctx: &Context, view: &str, vars: &[(String, String)], format: OutputFormat) -> Result<()> {
    let renderer = ctx.renderer(vars)?;
    let rules = FormRequest::with_view(view).rules(&renderer, &ctx.extractor()?)?;

    print_rules(&rules, format)
}
