use super::Context;
use anyhow::Result;
use colored::Colorize;

pub fn execute(ctx: &Context) -> Result<()> {
    let renderer = ctx.renderer(&[])?;
    let extractor = ctx.extractor()?;
    let loader = renderer.loader();

    if loader.count() == 0 {
        println!(
            "{} {:?}",
            "No views found in".yellow(),
            loader.views_dir()
        );
        return Ok(());
    }

    println!("{}", format!("Views in {:?}:", loader.views_dir()).green().bold());
    for view in loader.views() {
        let rules = extractor.extract(&renderer.render_str(&view.content));
        let count = format!("{} rule(s)", rules.len());
        println!(
            "  {}  {}",
            view.name,
            if rules.is_empty() { count.dimmed() } else { count.cyan() }
        );
    }

    Ok(())
}
