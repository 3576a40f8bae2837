use anyhow::Result;

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::generator::GeneratorForm;
use crate::storage::StateStore;
use crate::utils::{copy_to_clipboard, print_success, print_warning, report_error};

pub fn handle_generate_command(config: Config, args: &GenerateArgs) -> Result<()> {
    let form = form_from_args(args);

    let prompt = match form.compose() {
        Ok(prompt) => prompt,
        Err(err) => {
            report_error(&err);
            return Ok(());
        }
    };

    println!("{}", prompt);

    if args.copy {
        copy_to_clipboard(&prompt)?;
        print_success("已複製到剪貼簿");
    }

    if args.favorite {
        let store = StateStore::new(&config);
        let mut favorites = store.load_favorites();
        if favorites.insert(&prompt) {
            store.save_favorites(&favorites)?;
            print_success("已加入收藏");
        } else {
            print_warning("已在收藏中");
        }
    }

    Ok(())
}

fn form_from_args(args: &GenerateArgs) -> GeneratorForm {
    GeneratorForm {
        subject: args.subject.clone().unwrap_or_default(),
        composition: args.composition.clone().unwrap_or_default(),
        action: args.action.clone().unwrap_or_default(),
        location: args.location.clone().unwrap_or_default(),
        style: args.style.clone().unwrap_or_default(),
        editing: args.editing.clone().unwrap_or_default(),
    }
}
