use anyhow::Result;
use serde::Serialize;

use crate::catalog::{Catalog, CategoryId, Difficulty, PromptEntry};
use crate::cli::{ListArgs, ListFormat};
use crate::config::Config;
use crate::favorites::Favorites;
use crate::storage::StateStore;
use crate::utils::OutputStyle;

#[derive(Serialize)]
struct EntryRow {
    category: CategoryId,
    title: &'static str,
    content: &'static str,
    difficulty: Difficulty,
    tags: &'static [&'static str],
    favorited: bool,
    #[serde(skip)]
    entry: &'static PromptEntry,
}

pub fn handle_list_command(config: Config, args: &ListArgs) -> Result<()> {
    let category_filter = match &args.category {
        Some(raw) => Some(raw.parse::<CategoryId>().map_err(anyhow::Error::msg)?),
        None => None,
    };

    let store = StateStore::new(&config);
    let favorites = store.load_favorites();

    let rows = collect_rows(category_filter, args.difficulty, &favorites);

    if rows.is_empty() {
        println!("{}", OutputStyle::muted("沒有符合的提示詞"));
        return Ok(());
    }

    match args.format {
        ListFormat::Simple => {
            for row in &rows {
                let category = Catalog::category(row.category);
                println!("{}", OutputStyle::format_entry_line(category, row.entry));
            }
        }
        ListFormat::Detail => {
            for row in &rows {
                let category = Catalog::category(row.category);
                OutputStyle::print_entry_detail(category, row.entry);
            }
        }
        ListFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

fn collect_rows(
    category: Option<CategoryId>,
    difficulty: Option<Difficulty>,
    favorites: &Favorites,
) -> Vec<EntryRow> {
    let mut rows = Vec::new();
    for cat in Catalog::categories() {
        if category.is_some_and(|c| c != cat.id) {
            continue;
        }
        for entry in cat.entries {
            if difficulty.is_some_and(|d| d != entry.difficulty) {
                continue;
            }
            rows.push(EntryRow {
                category: cat.id,
                title: entry.title,
                content: entry.content,
                difficulty: entry.difficulty,
                tags: entry.tags,
                favorited: favorites.contains(entry.content),
                entry,
            });
        }
    }
    rows
}
