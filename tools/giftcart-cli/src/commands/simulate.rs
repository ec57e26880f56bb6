//! `giftcart simulate` - apply a scripted sequence of cart operations.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use giftcart_commerce::prelude::*;

use crate::commands::{print_summary, snapshot};
use crate::context::Context;

/// Arguments for `giftcart simulate`.
#[derive(Args)]
pub struct SimulateArgs {
    /// Operations to apply in order: `add:<id>[x<qty>]`, `inc:<id>`, `dec:<id>`
    #[arg(required = true)]
    pub ops: Vec<String>,
}

enum Op {
    Add(u32, i64),
    Inc(u32),
    Dec(u32),
}

fn parse_op(raw: &str) -> Result<Op> {
    let (verb, rest) = raw
        .split_once(':')
        .with_context(|| format!("malformed operation {raw:?}, expected <verb>:<id>"))?;
    let parse_id = |s: &str| -> Result<u32> {
        s.parse()
            .with_context(|| format!("bad product id in {raw:?}"))
    };
    match verb {
        "add" => match rest.split_once('x') {
            Some((id, qty)) => Ok(Op::Add(
                parse_id(id)?,
                qty.parse()
                    .with_context(|| format!("bad quantity in {raw:?}"))?,
            )),
            None => Ok(Op::Add(parse_id(rest)?, 1)),
        },
        "inc" => Ok(Op::Inc(parse_id(rest)?)),
        "dec" => Ok(Op::Dec(parse_id(rest)?)),
        _ => bail!("unknown operation {raw:?}"),
    }
}

fn lookup(engine: &CartEngine, id: u32) -> Result<Product> {
    engine
        .catalog()
        .get(ProductId::new(id))
        .cloned()
        .with_context(|| format!("product {id} is not in the catalog"))
}

pub fn run(args: SimulateArgs, ctx: &Context) -> Result<()> {
    let mut engine = ctx.engine()?;

    for raw in &args.ops {
        let gift_was_present = engine.gift_present();

        match parse_op(raw)? {
            Op::Add(id, qty) => {
                let product = lookup(&engine, id)?;
                engine.add_with_quantity(&product, qty)?;
            }
            Op::Inc(id) => {
                let product = lookup(&engine, id)?;
                engine.adjust_quantity(&product, 1)?;
            }
            Op::Dec(id) => {
                let product = lookup(&engine, id)?;
                engine.adjust_quantity(&product, -1)?;
            }
        }

        ctx.output
            .debug(&format!("{raw} -> subtotal {}", engine.subtotal()));
        match (gift_was_present, engine.gift_present()) {
            (false, true) => ctx.output.success(&format!(
                "free gift unlocked: {}",
                engine.policy().gift().name
            )),
            (true, false) => ctx.output.info("free gift removed"),
            _ => {}
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&snapshot(&engine));
        return Ok(());
    }

    print_summary(&engine, &ctx.output);
    Ok(())
}
