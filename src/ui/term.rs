//! Interactive terminal frontend
//!
//! `TerminalPort` mirrors what is on screen; the loop redraws a full frame
//! after every input or timer event. Input polling times out at the nearest
//! pending task deadline, which is how the debounce, toast, and menu timers
//! fire without a second thread.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::catalog::CategoryId;
use crate::config::{Config, Theme};
use crate::controller::dispatch::dispatch;
use crate::controller::port::ViewPort;
use crate::controller::state::{Section, Tab};
use crate::controller::ViewController;
use crate::notify::Notice;
use crate::ui::views;

/// Screen mirror updated through the `ViewPort` seam. The draw pass reads
/// this alongside the controller's own accessors.
#[derive(Debug, Default)]
pub struct TerminalPort {
    pub active_section: Option<Section>,
    pub active_tab: Option<Tab>,
    pub filter: Option<CategoryId>,
    pub visible_cards: Vec<usize>,
    pub result: Option<String>,
    pub menu_open: bool,
    pub overlay_visible: bool,
    pub theme: Option<Theme>,
    pub notice: Option<Notice>,
}

impl ViewPort for TerminalPort {
    fn activate_section(&mut self, section: Section) {
        self.active_section = Some(section);
    }

    fn activate_tab(&mut self, tab: Tab) {
        self.active_tab = Some(tab);
    }

    fn set_filter(&mut self, filter: Option<CategoryId>) {
        self.filter = filter;
    }

    fn show_cards(&mut self, visible: &[usize]) {
        self.visible_cards = visible.to_vec();
    }

    fn set_card_favorite(&mut self, _card: usize, _favorited: bool) {
        // The draw pass reads favorite state straight from the controller.
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
            self.overlay_visible = true;
        }
    }

    fn hide_menu_overlay(&mut self) {
        self.overlay_visible = false;
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notice = Some(notice.clone());
    }

    fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Run the interactive session until the user quits.
pub fn run_browse(config: Config, section: Option<Section>) -> Result<()> {
    let mut controller = ViewController::new(config, TerminalPort::default());
    if let Some(section) = section {
        controller.navigate_section(section);
    }

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .context("Failed to enter alternate screen")?;

    controller.start();
    let result = event_loop(&mut controller);

    let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn event_loop(controller: &mut ViewController<TerminalPort>) -> Result<()> {
    loop {
        draw(controller)?;

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(500));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = dispatch(controller.mode(), key) {
                        if !controller.handle_action(action) {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => {}
                _ => {}
            }
        }

        controller.tick(Instant::now());
    }
}

fn draw(controller: &ViewController<TerminalPort>) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let mut lines = Vec::new();
    views::render_header(controller, &mut lines);

    if controller.port().overlay_visible && controller.state().mobile_menu_open {
        views::render_menu(controller, &mut lines);
    } else {
        match controller.state().section {
            Section::Home => views::render_home(&mut lines),
            Section::Features => views::render_features(controller, &mut lines),
            Section::Examples => views::render_examples(&mut lines),
            Section::Database => views::render_database(controller, &mut lines),
            Section::Generator => views::render_generator(controller, &mut lines),
            Section::Tutorial => views::render_tutorial(&mut lines),
        }
    }

    views::render_footer(controller, &mut lines);

    // Raw mode: carriage returns are not implied
    write!(stdout, "{}", lines.join("\r\n"))?;
    stdout.flush()?;
    Ok(())
}
