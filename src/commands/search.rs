use anyhow::Result;

use crate::catalog::Catalog;
use crate::cli::SearchArgs;
use crate::config::Config;
use crate::search::card_matches;
use crate::utils::{print_warning, OutputStyle};

pub fn handle_search_command(_config: Config, args: &SearchArgs) -> Result<()> {
    let cards = Catalog::build_cards();
    let hits: Vec<_> = cards
        .iter()
        .filter(|card| card_matches(card, &args.query))
        .collect();

    if hits.is_empty() {
        print_warning(&format!("沒有找到「{}」相關的結果", args.query));
        return Ok(());
    }

    for card in hits {
        let category = Catalog::category(card.category);
        println!("{}", OutputStyle::format_entry_line(category, card.entry));
    }

    Ok(())
}
