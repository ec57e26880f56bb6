//! `giftcart catalog` - show the product catalog and gift promotion.

use anyhow::Result;
use clap::Args;

use crate::context::Context;

/// Arguments for `giftcart catalog`.
#[derive(Args)]
pub struct CatalogArgs {}

pub fn run(_args: CatalogArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "catalog": engine.catalog().products(),
            "free_gift": engine.policy().gift(),
            "threshold": engine.policy().threshold(),
        }));
        return Ok(());
    }

    ctx.output.header("Products");
    for product in engine.catalog().products() {
        ctx.output.list_item(&format!(
            "{:>3}  {:<16} {}",
            product.id.get(),
            product.name,
            product.price
        ));
    }

    ctx.output.header("Promotion");
    ctx.output.kv("free gift", &engine.policy().gift().name);
    ctx.output
        .kv("threshold", &engine.policy().threshold().to_string());

    Ok(())
}
