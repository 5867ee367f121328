mod state;

use crossterm::event::KeyCode;
use palettr::{PaletteSession, RandomColorSource};
use rand::rngs::StdRng;

pub use state::{App, ConfirmPopup};

/// The session type driven by the TUI.
pub type AppSession = PaletteSession<RandomColorSource<StdRng>>;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Saved,
    Help,
}

pub const TABS: [AppView; 3] = [AppView::Palette, AppView::Saved, AppView::Help];

impl AppView {
    pub fn title(self) -> &'static str {
        match self {
            AppView::Palette => "Palette",
            AppView::Saved => "Saved",
            AppView::Help => "Help",
        }
    }
}
