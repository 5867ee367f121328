use std::path::PathBuf;

use crossterm::event::KeyCode;
use log::{error, warn};
use palettr::{HarmonyRule, PALETTE_SIZE, Palette, PaletteId, SavedPalette, db, export};
use rusqlite::Connection;

use super::{AppEvent, AppSession, AppView, TABS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub db: Connection,
    pub session: AppSession,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub export_dir: PathBuf,
    pub selected_swatch_index: usize,
    pub saved: Vec<SavedPalette>,
    pub selected_saved_index: usize,
    pub status: Option<String>,
    pub confirm_popup: Option<ConfirmPopup>,
}

/// Pending deletion of a saved palette.
#[derive(Clone, Debug)]
pub struct ConfirmPopup {
    pub palette_id: PaletteId,
    pub message: String,
}

impl App {
    pub fn new(db: Connection, session: AppSession, export_dir: PathBuf) -> Self {
        let saved = match db::query_palettes(&db) {
            Ok(saved) => saved,
            Err(err) => {
                warn!("failed to load saved palettes: {err:#}");
                Vec::new()
            }
        };
        Self {
            running: true,
            db,
            session,
            view: AppView::Palette,
            view_history: Vec::new(),
            export_dir,
            selected_swatch_index: 0,
            saved,
            selected_saved_index: 0,
            status: None,
            confirm_popup: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    pub fn palette(&self) -> &Palette {
        self.session.current_palette()
    }

    pub fn selected_saved(&self) -> Option<&SavedPalette> {
        self.saved.get(self.selected_saved_index)
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_popup.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Tab if self.view == AppView::Saved => self.go_back(),
            KeyCode::Tab => self.next_tab(),
            KeyCode::Esc => self.go_back(),
            _ => match self.view {
                AppView::Palette => self.handle_palette_key(key),
                AppView::Saved => self.handle_saved_key(key),
                AppView::Help => {}
            },
        }
    }

    fn handle_palette_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(' ') | KeyCode::Char('g') => self.regenerate(),
            KeyCode::Left => self.set_rule(self.session.rule().prev()),
            KeyCode::Right => self.set_rule(self.session.rule().next()),
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                self.set_rule(HarmonyRule::ALL[index]);
            }
            KeyCode::Up => {
                self.selected_swatch_index =
                    (self.selected_swatch_index + PALETTE_SIZE - 1) % PALETTE_SIZE;
            }
            KeyCode::Down => {
                self.selected_swatch_index = (self.selected_swatch_index + 1) % PALETTE_SIZE;
            }
            KeyCode::Char('s') => self.save_current(),
            KeyCode::Char('e') => {
                let palette = self.palette().clone();
                self.export(&palette);
            }
            _ => {}
        }
    }

    fn handle_saved_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                if !self.saved.is_empty() {
                    if self.selected_saved_index == 0 {
                        self.selected_saved_index = self.saved.len() - 1;
                    } else {
                        self.selected_saved_index -= 1;
                    }
                }
            }
            KeyCode::Down => {
                if !self.saved.is_empty() {
                    self.selected_saved_index = (self.selected_saved_index + 1) % self.saved.len();
                }
            }
            KeyCode::Enter => self.load_selected(),
            KeyCode::Char('d') => self.open_confirm_delete(),
            KeyCode::Char('e') => {
                if let Some(saved) = self.selected_saved() {
                    let palette = saved.palette.clone();
                    self.export(&palette);
                }
            }
            KeyCode::Char('r') => self.load_saved(),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(popup) = self.confirm_popup.take() {
                    self.delete_saved(popup.palette_id);
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.confirm_popup = None;
                self.clear_status();
            }
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.view = view;
            self.clear_status();
            if view == AppView::Saved {
                self.load_saved();
            }
        }
    }

    fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.view = view;
            self.clear_status();
        }
    }

    fn next_tab(&mut self) {
        let index = TABS.iter().position(|view| *view == self.view).unwrap_or(0);
        self.navigate_to(TABS[(index + 1) % TABS.len()]);
    }

    fn regenerate(&mut self) {
        if let Err(err) = self.session.regenerate() {
            error!("regenerate failed: {err}");
            self.status = Some(format!("Could not generate palette: {err}"));
        } else {
            self.clear_status();
        }
    }

    fn set_rule(&mut self, rule: HarmonyRule) {
        if let Err(err) = self.session.set_rule(rule) {
            error!("switching to {rule} failed: {err}");
            self.status = Some(format!("Could not generate palette: {err}"));
            return;
        }
        self.clear_status();
        if let Err(err) = db::save_rule(rule, &self.db) {
            warn!("failed to remember rule {rule}: {err:#}");
        }
    }

    fn save_current(&mut self) {
        match db::create_palette(self.session.current_palette(), &self.db) {
            Ok(id) => {
                self.status = Some(format!("Saved palette #{id}"));
                self.load_saved();
            }
            Err(err) => {
                error!("saving palette failed: {err:#}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    fn export(&mut self, palette: &Palette) {
        self.status = Some(match export::export_to_dir(palette, &self.export_dir) {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(err) => {
                error!("export failed: {err:#}");
                format!("Export failed: {err}")
            }
        });
    }

    fn load_saved(&mut self) {
        match db::query_palettes(&self.db) {
            Ok(saved) => {
                self.saved = saved;
                if self.selected_saved_index >= self.saved.len() {
                    self.selected_saved_index = self.saved.len().saturating_sub(1);
                }
            }
            Err(err) => {
                error!("loading saved palettes failed: {err:#}");
                self.status = Some(format!("Could not load saved palettes: {err}"));
            }
        }
    }

    fn load_selected(&mut self) {
        let Some(saved) = self.selected_saved() else {
            return;
        };
        let palette = saved.palette.clone();
        let label = saved.id.map(|id| format!("#{id}")).unwrap_or_default();
        let rule = palette.rule;
        self.session.restore(palette);
        if let Err(err) = db::save_rule(rule, &self.db) {
            warn!("failed to remember rule {rule}: {err:#}");
        }
        self.selected_swatch_index = 0;
        self.view_history.clear();
        self.view = AppView::Palette;
        self.status = Some(format!("Loaded palette {label}"));
    }

    fn open_confirm_delete(&mut self) {
        let Some(id) = self.selected_saved().and_then(|saved| saved.id) else {
            return;
        };
        self.confirm_popup = Some(ConfirmPopup {
            palette_id: id,
            message: format!("Delete palette #{id}?"),
        });
    }

    fn delete_saved(&mut self, id: PaletteId) {
        match db::delete_palette(id, &self.db) {
            Ok(true) => self.status = Some(format!("Deleted palette #{id}")),
            Ok(false) => self.status = Some(format!("Palette #{id} no longer exists")),
            Err(err) => {
                error!("deleting palette #{id} failed: {err:#}");
                self.status = Some(format!("Delete failed: {err}"));
            }
        }
        self.load_saved();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
