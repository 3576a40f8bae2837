//! The view seam
//!
//! The controller never renders; it drives an injected `ViewPort`. The
//! interactive frontend keeps a mirror of what is on screen, tests record the
//! calls.

use crate::catalog::CategoryId;
use crate::config::Theme;
use crate::controller::state::{Section, Tab};
use crate::notify::Notice;

pub trait ViewPort {
    /// Exactly one section is active after this call.
    fn activate_section(&mut self, section: Section);

    fn activate_tab(&mut self, tab: Tab);

    fn set_filter(&mut self, filter: Option<CategoryId>);

    /// Visible database cards by id, in display order.
    fn show_cards(&mut self, visible: &[usize]);

    fn set_card_favorite(&mut self, card: usize, favorited: bool);

    fn show_result(&mut self, text: &str);

    fn clear_result(&mut self);

    fn set_menu_open(&mut self, open: bool);

    /// Fired when the menu close animation window elapses.
    fn hide_menu_overlay(&mut self);

    fn set_theme(&mut self, theme: Theme);

    fn show_notice(&mut self, notice: &Notice);

    fn dismiss_notice(&mut self);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    /// Test double that mirrors what a real frontend would be showing.
    #[derive(Debug, Default)]
    pub struct RecordingPort {
        pub active_section: Option<Section>,
        pub active_tab: Option<Tab>,
        pub filter: Option<Option<CategoryId>>,
        pub visible_cards: Vec<usize>,
        pub favorite_marks: Vec<(usize, bool)>,
        pub result: Option<String>,
        pub menu_open: bool,
        pub overlay_hidden: bool,
        pub theme: Option<Theme>,
        pub notices: Vec<Notice>,
        pub notice_visible: bool,
        pub section_activations: usize,
    }

    impl ViewPort for RecordingPort {
        fn activate_section(&mut self, section: Section) {
            self.active_section = Some(section);
            self.section_activations += 1;
        }

        fn activate_tab(&mut self, tab: Tab) {
            self.active_tab = Some(tab);
        }

        fn set_filter(&mut self, filter: Option<CategoryId>) {
            self.filter = Some(filter);
        }

        fn show_cards(&mut self, visible: &[usize]) {
            self.visible_cards = visible.to_vec();
        }

        fn set_card_favorite(&mut self, card: usize, favorited: bool) {
            self.favorite_marks.push((card, favorited));
        }

        fn show_result(&mut self, text: &str) {
            self.result = Some(text.to_string());
        }

        fn clear_result(&mut self) {
            self.result = None;
        }

        fn set_menu_open(&mut self, open: bool) {
            self.menu_open = open;
            if open {
                self.overlay_hidden = false;
            }
        }

        fn hide_menu_overlay(&mut self) {
            self.overlay_hidden = true;
        }

        fn set_theme(&mut self, theme: Theme) {
            self.theme = Some(theme);
        }

        fn show_notice(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
            self.notice_visible = true;
        }

        fn dismiss_notice(&mut self) {
            self.notice_visible = false;
        }
    }
}
