use anyhow::Result;

use crate::cli::BrowseArgs;
use crate::config::Config;
use crate::ui;
use crate::utils::{prompt_yes_no, OutputStyle};

/// Run the interactive guide. A startup failure is rendered as an error
/// banner with a manual reload action instead of a bare abort, so the
/// session stays interactive.
pub fn handle_browse_command(config: Config, args: &BrowseArgs) -> Result<()> {
    loop {
        match ui::run_browse(config.clone(), args.section) {
            Ok(()) => return Ok(()),
            Err(err) => {
                println!();
                println!("❌ {}", OutputStyle::error("載入錯誤"));
                println!("{}", OutputStyle::error(&format!("{:#}", err)));
                println!("{}", OutputStyle::muted("應用載入失敗，請重新載入"));
                if !prompt_yes_no("重新載入？")? {
                    return Ok(());
                }
            }
        }
    }
}
