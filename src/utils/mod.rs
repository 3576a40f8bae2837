pub mod clipboard;
pub mod error;
pub mod interactive;
pub mod output;

pub use clipboard::copy_to_clipboard;
pub use error::{report_error, AppError, AppResult};
pub use interactive::{prompt_input, prompt_yes_no};
pub use output::{print_success, print_warning, OutputStyle};
