//! CLI commands.

pub mod catalog;
pub mod shop;
pub mod simulate;

pub use catalog::CatalogArgs;
pub use shop::ShopArgs;
pub use simulate::SimulateArgs;

use giftcart_commerce::prelude::*;

use crate::output::Output;

/// Render the cart summary: lines, subtotal, and gift progress.
pub(crate) fn print_summary(engine: &CartEngine, out: &Output) {
    out.header("Cart");
    if engine.is_empty() {
        out.info("cart is empty");
    }
    for line in engine.lines() {
        out.list_item(&format!(
            "{:<16} x{:<4} {}",
            line.name,
            line.quantity,
            line.line_total()
        ));
    }
    out.kv("subtotal", &engine.subtotal().to_string());
    out.kv("progress", &out.meter(engine.progress_percent()));
    if engine.gift_present() {
        out.success(&format!(
            "free gift unlocked: {}",
            engine.policy().gift().name
        ));
    } else {
        out.info(&format!(
            "add {} more to get a free {}",
            engine.gift_remaining(),
            engine.policy().gift().name
        ));
    }
}

/// Serialize the cart state for `--json` output.
pub(crate) fn snapshot(engine: &CartEngine) -> serde_json::Value {
    serde_json::json!({
        "lines": engine.lines(),
        "subtotal": engine.subtotal(),
        "progress_percent": engine.progress_percent(),
        "gift_present": engine.gift_present(),
        "gift_remaining": engine.gift_remaining(),
    })
}
