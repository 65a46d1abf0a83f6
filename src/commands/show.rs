//! `codespace show` - detail view for one item.

use anyhow::{bail, Context, Result};

use super::display::print_item_detail;
use super::AppContext;
use crate::models::KnowledgeItem;

pub fn execute(ctx: &AppContext, id: &str, code_only: bool, json: bool) -> Result<()> {
    let Some(item) = ctx.store.get(id) else {
        bail!("Unknown item: {id}. Use 'codespace search --list' to see item ids");
    };

    if json {
        let rendered = serde_json::to_string_pretty(item).context("Failed to serialize item")?;
        println!("{rendered}");
    } else if code_only {
        // Raw text only, suitable for piping to a clipboard tool.
        match primary_code(item) {
            Some(code) => println!("{code}"),
            None => bail!("Item '{id}' has no code"),
        }
    } else {
        print_item_detail(item);
    }

    Ok(())
}

/// The item's main code block, falling back to its first example.
pub fn primary_code(item: &KnowledgeItem) -> Option<&str> {
    item.code
        .as_deref()
        .or_else(|| item.code_examples.first().map(|e| e.code.as_str()))
}
