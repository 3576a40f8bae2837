//! The view controller
//!
//! Owns all transient application state and mediates between dispatched
//! actions and the injected `ViewPort`. Every failure here is non-fatal: an
//! unknown target or a storage hiccup becomes a notice, never a panic that
//! would take down the interaction loop.

pub mod dispatch;
pub mod port;
pub mod state;

use std::time::Instant;

use crate::catalog::{Card, Catalog};
use crate::config::{Config, Theme};
use crate::controller::dispatch::{Action, InputMode};
use crate::controller::port::ViewPort;
use crate::controller::state::{next_filter, parse_filter, Section, Tab, ViewState};
use crate::favorites::Favorites;
use crate::generator::{Field, GeneratorForm, FIELD_COUNT};
use crate::notify::{Notifier, Severity};
use crate::search::{card_in_filter, card_matches};
use crate::storage::StateStore;
use crate::timers::{TaskKind, TaskQueue};
use crate::utils::{copy_to_clipboard, report_error};

pub struct ViewController<P: ViewPort> {
    state: ViewState,
    config: Config,
    store: StateStore,
    favorites: Favorites,
    cards: Vec<Card>,
    database_populated: bool,
    /// Card ids currently visible in the database view, in display order.
    visible: Vec<usize>,
    /// Selection index into `visible`.
    selected: usize,
    query: String,
    form: GeneratorForm,
    form_field: usize,
    result: Option<String>,
    mode: InputMode,
    theme: Theme,
    notifier: Notifier,
    timers: TaskQueue,
    port: P,
}

impl<P: ViewPort> ViewController<P> {
    pub fn new(config: Config, mut port: P) -> Self {
        let store = StateStore::new(&config);
        let favorites = store.load_favorites();
        let theme = config.effective_theme();

        port.set_theme(theme);
        port.activate_section(Section::Home);

        Self {
            state: ViewState::default(),
            config,
            store,
            favorites,
            cards: Vec::new(),
            database_populated: false,
            visible: Vec::new(),
            selected: 0,
            query: String::new(),
            form: GeneratorForm::default(),
            form_field: 0,
            result: None,
            mode: InputMode::Browse,
            theme,
            notifier: Notifier::new(),
            timers: TaskQueue::new(),
            port,
        }
    }

    /// Startup greeting, shown once the frontend is up.
    pub fn start(&mut self) {
        self.notify("應用載入完成", Severity::Success);
    }

    // ---- navigation -----------------------------------------------------

    pub fn navigate(&mut self, section_id: &str) {
        let section = match section_id.parse::<Section>() {
            Ok(section) => section,
            Err(_) => {
                self.notify("頁面載入失敗", Severity::Error);
                return;
            }
        };
        self.navigate_section(section);
    }

    pub fn navigate_section(&mut self, section: Section) {
        self.state.section = section;
        self.port.activate_section(section);

        if self.state.mobile_menu_open {
            self.close_mobile_menu();
        }

        if section == Section::Database && !self.database_populated {
            self.populate_database();
        }
    }

    pub fn switch_tab(&mut self, tab_id: &str) {
        match tab_id.parse::<Tab>() {
            Ok(tab) => self.set_tab(tab),
            Err(_) => self.notify("標籤頁載入失敗", Severity::Error),
        }
    }

    fn set_tab(&mut self, tab: Tab) {
        self.state.tab = tab;
        self.port.activate_tab(tab);
    }

    pub fn set_filter(&mut self, filter_id: &str) {
        match parse_filter(filter_id) {
            Ok(filter) => {
                self.state.filter = filter;
                self.port.set_filter(filter);
                self.apply_filter();
            }
            Err(_) => self.notify("篩選條件載入失敗", Severity::Error),
        }
    }

    fn populate_database(&mut self) {
        self.cards = Catalog::build_cards();
        for card in &self.cards {
            self.port
                .set_card_favorite(card.id, self.favorites.contains(card.entry.content));
        }
        self.database_populated = true;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.visible = self
            .cards
            .iter()
            .filter(|card| card_in_filter(card, self.state.filter))
            .map(|card| card.id)
            .collect();
        self.selected = 0;
        self.port.show_cards(&self.visible);
    }

    // ---- search ---------------------------------------------------------

    /// Record the query and (re)start the debounce window; the search itself
    /// runs from `tick` once input pauses.
    pub fn search_input(&mut self, query: &str) {
        self.query = query.to_string();
        self.timers.schedule(TaskKind::SearchDebounce, Instant::now());
    }

    fn run_search(&mut self) {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            self.apply_filter();
            return;
        }

        self.visible = self
            .cards
            .iter()
            .filter(|card| card_matches(card, &query))
            .map(|card| card.id)
            .collect();
        self.selected = 0;
        self.port.show_cards(&self.visible);

        if self.visible.is_empty() {
            self.notify(
                format!("沒有找到「{}」相關的結果", query),
                Severity::Info,
            );
        }
    }

    // ---- generator ------------------------------------------------------

    pub fn generate(&mut self) {
        match self.form.compose() {
            Ok(text) => {
                self.port.show_result(&text);
                self.result = Some(text);
                self.notify("提示詞生成完成", Severity::Success);
            }
            Err(err) => {
                self.notify(err.to_string(), Severity::Warning);
            }
        }
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
        self.result = None;
        self.port.clear_result();
        self.notify("表單已清空", Severity::Info);
    }

    pub fn copy_result(&mut self) {
        match self.result.clone() {
            Some(text) => self.copy_text(&text),
            None => self.notify("沒有內容可複製", Severity::Warning),
        }
    }

    pub fn favorite_result(&mut self) {
        match self.result.clone() {
            Some(text) => self.favorite_prompt(&text),
            None => self.notify("沒有內容可收藏", Severity::Warning),
        }
    }

    // ---- favorites ------------------------------------------------------

    /// Idempotent toggle; returns the new membership state. A failed save is
    /// logged and the in-memory state stands (no rollback).
    pub fn toggle_favorite(&mut self, prompt: &str) -> bool {
        let favorited = self.favorites.toggle(prompt);
        if let Err(err) = self.store.save_favorites(&self.favorites) {
            report_error(&err);
        }

        let marks: Vec<usize> = self
            .cards
            .iter()
            .filter(|card| card.entry.content == prompt)
            .map(|card| card.id)
            .collect();
        for id in marks {
            self.port.set_card_favorite(id, favorited);
        }

        favorited
    }

    fn favorite_prompt(&mut self, prompt: &str) {
        if self.toggle_favorite(prompt) {
            self.notify("已加入收藏", Severity::Success);
        } else {
            self.notify("已從收藏中移除", Severity::Info);
        }
    }

    // ---- clipboard ------------------------------------------------------

    pub fn copy_text(&mut self, text: &str) {
        match copy_to_clipboard(text) {
            Ok(()) => self.notify("已複製到剪貼簿", Severity::Success),
            Err(err) => {
                report_error(&err);
                self.notify("複製失敗，請手動複製", Severity::Error);
            }
        }
    }

    fn copy_selected(&mut self) {
        if let Some(card) = self.selected_card() {
            let content = card.entry.content;
            self.copy_text(content);
        }
    }

    fn favorite_selected(&mut self) {
        if let Some(card) = self.selected_card() {
            let content = card.entry.content;
            self.favorite_prompt(content);
        }
    }

    // ---- menu and theme -------------------------------------------------

    pub fn toggle_mobile_menu(&mut self) {
        if self.state.mobile_menu_open {
            self.close_mobile_menu();
        } else {
            self.state.mobile_menu_open = true;
            self.timers.cancel(TaskKind::MenuClose);
            self.port.set_menu_open(true);
        }
    }

    /// Always succeeds, even when the menu is already closed.
    pub fn close_mobile_menu(&mut self) {
        self.state.mobile_menu_open = false;
        self.port.set_menu_open(false);
        self.timers.schedule(TaskKind::MenuClose, Instant::now());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
        self.config.theme = Some(self.theme);
        if let Err(err) = self.config.save() {
            report_error(&err);
        }
        self.port.set_theme(self.theme);
        self.notify(
            format!("已切換至{}主題", self.theme.display_name()),
            Severity::Info,
        );
    }

    /// System preference changed; only applies when the user never made an
    /// explicit choice.
    pub fn system_theme_changed(&mut self, theme: Theme) {
        if self.config.theme.is_none() {
            self.theme = theme;
            self.port.set_theme(theme);
        }
    }

    // ---- notices and timers ---------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let notice = self.notifier.notify(message, severity).clone();
        self.port.show_notice(&notice);
        self.timers.schedule(TaskKind::ToastDismiss, Instant::now());
    }

    pub fn dismiss_notice(&mut self) {
        if self.notifier.dismiss() {
            self.port.dismiss_notice();
            self.timers.cancel(TaskKind::ToastDismiss);
        }
    }

    fn escape(&mut self) {
        if self.state.mobile_menu_open {
            self.close_mobile_menu();
        }
        self.dismiss_notice();
    }

    /// Drain due delayed tasks. Called by the event loop after every poll
    /// timeout and after every input burst.
    pub fn tick(&mut self, now: Instant) {
        for kind in self.timers.take_due(now) {
            match kind {
                TaskKind::SearchDebounce => self.run_search(),
                TaskKind::ToastDismiss => {
                    self.notifier.dismiss();
                    self.port.dismiss_notice();
                }
                TaskKind::MenuClose => self.port.hide_menu_overlay(),
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // ---- action dispatch ------------------------------------------------

    /// Apply one dispatched action. Returns false when the session ends.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Navigate(section) => self.navigate_section(section),
            Action::CycleTab => {
                if self.state.section == Section::Features {
                    self.set_tab(self.state.tab.next());
                }
            }
            Action::CycleFilter => {
                if self.state.section == Section::Database {
                    let filter = next_filter(self.state.filter);
                    self.state.filter = filter;
                    self.port.set_filter(filter);
                    self.apply_filter();
                }
            }
            Action::EnterSearch => {
                if self.state.section == Section::Database {
                    self.mode = InputMode::Search;
                }
            }
            Action::SearchChar(c) => {
                self.query.push(c);
                self.timers.schedule(TaskKind::SearchDebounce, Instant::now());
            }
            Action::SearchBackspace => {
                self.query.pop();
                self.timers.schedule(TaskKind::SearchDebounce, Instant::now());
            }
            Action::LeaveSearch => self.mode = InputMode::Browse,
            Action::SelectNext => {
                if self.selected + 1 < self.visible.len() {
                    self.selected += 1;
                }
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::CopySelected => self.copy_selected(),
            Action::FavoriteSelected => self.favorite_selected(),
            Action::EnterForm => {
                if self.state.section == Section::Generator {
                    self.mode = InputMode::Form;
                }
            }
            Action::FormChar(c) => {
                self.form.field_mut(Field::ALL[self.form_field]).push(c);
            }
            Action::FormBackspace => {
                self.form.field_mut(Field::ALL[self.form_field]).pop();
            }
            Action::FormNextField => {
                self.form_field = (self.form_field + 1) % FIELD_COUNT;
            }
            Action::FormPrevField => {
                self.form_field = (self.form_field + FIELD_COUNT - 1) % FIELD_COUNT;
            }
            Action::LeaveForm => self.mode = InputMode::Browse,
            Action::Generate => {
                if self.state.section == Section::Generator {
                    self.generate();
                }
            }
            Action::ClearForm => {
                if self.state.section == Section::Generator {
                    self.clear_form();
                }
            }
            Action::CopyResult => self.copy_result(),
            Action::FavoriteResult => self.favorite_result(),
            Action::ToggleMenu => self.toggle_mobile_menu(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Escape => self.escape(),
            Action::Quit => return false,
        }
        true
    }

    // ---- accessors for the frontend -------------------------------------

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn form(&self) -> &GeneratorForm {
        &self.form
    }

    pub fn form_field(&self) -> Field {
        Field::ALL[self.form_field]
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.visible.iter().filter_map(|id| self.cards.get(*id))
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.visible
            .get(self.selected)
            .and_then(|id| self.cards.get(*id))
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn current_notice(&self) -> Option<&crate::notify::Notice> {
        self.notifier.current()
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::port::recording::RecordingPort;
    use std::time::Duration;

    fn controller_in(dir: &std::path::Path) -> ViewController<RecordingPort> {
        let mut config = Config::default();
        config.general.favorites_file = dir.join("favorites.json");
        config.source_path = Some(dir.join("config.toml"));
        ViewController::new(config, RecordingPort::default())
    }

    fn drain(controller: &mut ViewController<RecordingPort>) {
        // Far enough in the future that every pending task is due.
        controller.tick(Instant::now() + Duration::from_secs(10));
    }

    #[test]
    fn test_navigate_activates_exactly_one_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());

        for section in Section::ALL {
            controller.navigate(section.as_str());
            assert_eq!(controller.state().section, section);
            assert_eq!(controller.port().active_section, Some(section));
        }
    }

    #[test]
    fn test_navigate_unknown_is_notfound_and_no_state_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("features");
        let activations = controller.port().section_activations;

        controller.navigate("nonexistent");

        assert_eq!(controller.state().section, Section::Features);
        assert_eq!(controller.port().section_activations, activations);
        assert_eq!(controller.port().notices.len(), 1);
        assert_eq!(controller.port().notices[0].severity, Severity::Error);
    }

    #[test]
    fn test_database_populates_lazily_on_first_visit() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        assert!(controller.cards().is_empty());

        controller.navigate("database");
        assert_eq!(controller.cards().len(), 15);
        assert_eq!(controller.port().visible_cards.len(), 15);

        // Second visit does not repopulate
        controller.navigate("home");
        controller.navigate("database");
        assert_eq!(controller.cards().len(), 15);
    }

    #[test]
    fn test_filter_narrows_and_all_restores() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("database");

        controller.set_filter("basic");
        assert_eq!(controller.port().visible_cards.len(), 4);

        controller.set_filter("all");
        assert_eq!(controller.port().visible_cards.len(), 15);

        controller.set_filter("bogus");
        // Unknown filter: notice, visible set unchanged
        assert_eq!(controller.port().visible_cards.len(), 15);
        assert!(!controller.port().notices.is_empty());
    }

    #[test]
    fn test_blank_search_reapplies_current_filter() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("database");
        controller.set_filter("basic");
        let filtered = controller.port().visible_cards.clone();

        controller.search_input("   ");
        drain(&mut controller);

        assert_eq!(controller.port().visible_cards, filtered);
    }

    #[test]
    fn test_search_is_debounced_and_matches_across_filter() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("database");
        controller.set_filter("basic");

        // 賽博龐克 lives in the creative category; search ignores the filter
        controller.search_input("賽博");
        // Nothing happens until the debounce window elapses
        assert_eq!(controller.port().visible_cards.len(), 4);

        drain(&mut controller);
        assert_eq!(controller.port().visible_cards.len(), 1);
        let card = controller.visible_cards().next().unwrap();
        assert_eq!(card.entry.title, "火柴人構圖");
    }

    #[test]
    fn test_search_no_hits_notifies_info() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("database");

        controller.search_input("zzzzzz");
        drain(&mut controller);

        assert!(controller.port().visible_cards.is_empty());
        let last = controller.port().notices.last().unwrap();
        assert_eq!(last.severity, Severity::Info);
        assert!(last.message.contains("zzzzzz"));
    }

    #[test]
    fn test_generate_all_blank_is_single_warning_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("generator");

        controller.generate();

        assert!(controller.result().is_none());
        assert!(controller.port().result.is_none());
        assert_eq!(controller.port().notices.len(), 1);
        assert_eq!(controller.port().notices[0].severity, Severity::Warning);
    }

    #[test]
    fn test_generate_composes_and_shows_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("generator");
        controller.handle_action(Action::EnterForm);
        for c in "a cat".chars() {
            controller.handle_action(Action::FormChar(c));
        }
        // Subject -> composition -> action -> location -> style
        for _ in 0..4 {
            controller.handle_action(Action::FormNextField);
        }
        for c in "watercolor".chars() {
            controller.handle_action(Action::FormChar(c));
        }
        controller.handle_action(Action::LeaveForm);
        controller.handle_action(Action::Generate);

        assert_eq!(controller.result(), Some("a cat，風格：watercolor"));
        assert_eq!(
            controller.port().result.as_deref(),
            Some("a cat，風格：watercolor")
        );
    }

    #[test]
    fn test_toggle_favorite_round_trips_memory_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let favorites_file = dir.path().join("favorites.json");
        let mut controller = controller_in(dir.path());

        // Seed one unrelated favorite so the persisted baseline is non-empty
        assert!(controller.toggle_favorite("baseline"));
        let before = std::fs::read_to_string(&favorites_file).unwrap();

        assert!(controller.toggle_favorite("一張圖"));
        assert!(controller.favorites().contains("一張圖"));
        assert!(!controller.toggle_favorite("一張圖"));
        assert!(!controller.favorites().contains("一張圖"));

        let after = std::fs::read_to_string(&favorites_file).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_favorite_marks_follow_card_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        controller.navigate("database");

        let content = controller.cards()[0].entry.content;
        controller.toggle_favorite(content);

        assert_eq!(
            controller.port().favorite_marks.last(),
            Some(&(0, true))
        );
    }

    #[test]
    fn test_menu_close_always_succeeds_and_finishes_later() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());

        controller.toggle_mobile_menu();
        assert!(controller.state().mobile_menu_open);
        assert!(controller.port().menu_open);

        controller.close_mobile_menu();
        assert!(!controller.state().mobile_menu_open);
        // Closing again is a no-op that still succeeds
        controller.close_mobile_menu();

        drain(&mut controller);
        assert!(controller.port().overlay_hidden);
    }

    #[test]
    fn test_notice_auto_dismisses_and_newest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());

        controller.notify("first", Severity::Info);
        controller.notify("second", Severity::Success);

        assert_eq!(controller.current_notice().unwrap().message, "second");
        drain(&mut controller);
        assert!(controller.current_notice().is_none());
        assert!(!controller.port().notice_visible);
    }

    #[test]
    fn test_explicit_theme_choice_blocks_system_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        let initial = controller.theme();

        controller.toggle_theme();
        assert_eq!(controller.theme(), initial.flipped());

        controller.system_theme_changed(initial);
        // Explicit choice stands
        assert_eq!(controller.theme(), initial.flipped());
    }

    #[test]
    fn test_system_theme_applies_without_explicit_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());

        controller.system_theme_changed(Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
        controller.system_theme_changed(Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_escape_closes_menu_and_dismisses_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());

        controller.toggle_mobile_menu();
        controller.notify("hello", Severity::Info);
        controller.handle_action(Action::Escape);

        assert!(!controller.state().mobile_menu_open);
        assert!(controller.current_notice().is_none());
    }

    #[test]
    fn test_quit_action_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(dir.path());
        assert!(controller.handle_action(Action::SelectNext));
        assert!(!controller.handle_action(Action::Quit));
    }
}
