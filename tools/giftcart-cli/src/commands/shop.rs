//! `giftcart shop` - interactive shopping session.

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::commands::print_summary;
use crate::context::Context;

/// Arguments for `giftcart shop`.
#[derive(Args)]
pub struct ShopArgs {}

pub fn run(_args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and does not support --json");
    }

    let mut engine = ctx.engine()?;
    let products = engine.catalog().products().to_vec();
    let theme = ColorfulTheme::default();

    ctx.output.header("giftcart");
    ctx.output.info(&format!(
        "spend {} to get a free {}",
        engine.policy().threshold(),
        engine.policy().gift().name
    ));

    loop {
        let mut items: Vec<String> = products
            .iter()
            .map(|p| {
                format!(
                    "{} ({}) - in cart: {}",
                    p.name,
                    p.price,
                    engine.quantity_of(p.id)
                )
            })
            .collect();
        items.push("View cart".to_string());
        items.push("Checkout".to_string());

        let pick = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        if pick == products.len() {
            print_summary(&engine, &ctx.output);
            continue;
        }
        if pick == products.len() + 1 {
            break;
        }

        let product = &products[pick];
        let actions = ["Add one", "Remove one", "Back"];
        let action = Select::with_theme(&theme)
            .with_prompt(product.name.clone())
            .items(&actions)
            .default(0)
            .interact()?;

        let gift_was_present = engine.gift_present();
        match action {
            0 => engine.add_one(product)?,
            1 => {
                if engine.quantity_of(product.id) == 0 {
                    ctx.output.warn(&format!("{} is not in the cart", product.name));
                    continue;
                }
                engine.adjust_quantity(product, -1)?;
            }
            _ => continue,
        }

        ctx.output.kv("subtotal", &engine.subtotal().to_string());
        match (gift_was_present, engine.gift_present()) {
            (false, true) => ctx.output.success(&format!(
                "free gift unlocked: {}",
                engine.policy().gift().name
            )),
            (true, false) => ctx.output.info("free gift removed"),
            _ => {}
        }
    }

    print_summary(&engine, &ctx.output);
    Ok(())
}
