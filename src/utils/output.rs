use colored::*;

use crate::catalog::{Category, PromptEntry};

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn category(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn tag(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>12}: {}", Self::label(label), value);
    }

    /// One-line card format used by `list` and `search` output
    pub fn format_entry_line(category: &Category, entry: &PromptEntry) -> String {
        let tags = entry
            .tags
            .iter()
            .map(|t| format!("#{}", Self::tag(t)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "[{}] {}: {} {} ({})",
            Self::category(category.name),
            Self::header(&entry.title),
            Self::content(&entry.content),
            tags,
            Self::muted(entry.difficulty.display_name()),
        )
    }

    pub fn print_entry_detail(category: &Category, entry: &PromptEntry) {
        Self::print_field("Title", &entry.title);
        Self::print_field("Category", category.name);
        Self::print_field("Difficulty", entry.difficulty.display_name());
        Self::print_field("Tags", &entry.tags.join(", "));
        Self::print_field("Content", &entry.content);
        println!("{}", Self::separator());
    }

}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}
