use anyhow::Result;

use crate::cli::{FavoritesArgs, FavoritesCommand};
use crate::config::Config;
use crate::storage::StateStore;
use crate::utils::{print_success, print_warning, prompt_yes_no, OutputStyle};

pub fn handle_favorites_command(config: Config, args: &FavoritesArgs) -> Result<()> {
    let store = StateStore::new(&config);
    let mut favorites = store.load_favorites();

    match &args.command {
        FavoritesCommand::List => {
            if favorites.is_empty() {
                println!("{}", OutputStyle::muted("尚無收藏"));
                return Ok(());
            }
            for (i, prompt) in favorites.iter().enumerate() {
                println!("{:>3}. {}", i + 1, OutputStyle::content(prompt));
            }
        }
        FavoritesCommand::Add { prompt } => {
            if favorites.insert(prompt) {
                store.save_favorites(&favorites)?;
                print_success("已加入收藏");
            } else {
                print_warning("已在收藏中");
            }
        }
        FavoritesCommand::Remove { prompt } => {
            if favorites.remove(prompt) {
                store.save_favorites(&favorites)?;
                print_success("已從收藏中移除");
            } else {
                print_warning("不在收藏中");
            }
        }
        FavoritesCommand::Clear => {
            if favorites.is_empty() {
                println!("{}", OutputStyle::muted("尚無收藏"));
                return Ok(());
            }
            if prompt_yes_no(&format!("移除全部 {} 筆收藏？", favorites.len()))? {
                favorites.clear();
                store.save_favorites(&favorites)?;
                print_success("收藏已清空");
            }
        }
    }

    Ok(())
}
