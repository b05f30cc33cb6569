use super::RunContext;
use anyhow::{bail, Result};

/// List the catalog, optionally a single category
pub fn run_rules(category: Option<&str>, ctx: &RunContext) -> Result<()> {
    if let Some(name) = category {
        if ctx.catalog.category(name).is_none() {
            let known: Vec<_> = ctx.catalog.categories().iter().map(|c| c.name()).collect();
            bail!("Unknown category '{name}'. Available: {}", known.join(", "));
        }
    }

    println!("{}", ctx.formatter.catalog(&ctx.catalog, category));
    Ok(())
}
