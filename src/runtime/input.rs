//! Maps raw terminal events to player intents.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::{ControlButton, ScreenLayout};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Previous,
    PlayPause,
    Stop,
    Next,
    /// Play this row now (Enter).
    Activate(usize),
    /// Second click on the same row within the double-click window.
    DoubleClick(usize),
    Select(usize),
    SelectNext,
    SelectPrevious,
    Quit,
}

impl From<ControlButton> for Intent {
    fn from(b: ControlButton) -> Self {
        match b {
            ControlButton::Previous => Intent::Previous,
            ControlButton::PlayPause => Intent::PlayPause,
            ControlButton::Stop => Intent::Stop,
            ControlButton::Next => Intent::Next,
        }
    }
}

pub fn intent_for_key(key: KeyEvent, selected: Option<usize>) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Intent::PlayPause),
        KeyCode::Char('s') => Some(Intent::Stop),
        KeyCode::Char('l') | KeyCode::Right => Some(Intent::Next),
        KeyCode::Char('h') | KeyCode::Left => Some(Intent::Previous),
        KeyCode::Char('j') | KeyCode::Down => Some(Intent::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Intent::SelectPrevious),
        KeyCode::Enter => Some(selected.map_or(Intent::PlayPause, Intent::Activate)),
        _ => None,
    }
}

/// Remembers the last clicked row to detect double-clicks.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    threshold: Duration,
    last: Option<(Instant, usize)>,
}

impl ClickTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    /// Record a click on `index` at `now`; true when it completes a double-click.
    pub fn register(&mut self, index: usize, now: Instant) -> bool {
        let double = self.last.is_some_and(|(at, i)| {
            i == index && now.saturating_duration_since(at) <= self.threshold
        });
        // A completed double-click does not count towards the next one.
        self.last = if double { None } else { Some((now, index)) };
        double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

pub fn intent_for_mouse(
    event: MouseEvent,
    layout: &ScreenLayout,
    clicks: &mut ClickTracker,
    now: Instant,
) -> Option<Intent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = layout.song_at(event.column, event.row) {
                return Some(if clicks.register(index, now) {
                    Intent::DoubleClick(index)
                } else {
                    Intent::Select(index)
                });
            }
            clicks.reset();
            layout.button_at(event.column, event.row).map(Intent::from)
        }
        MouseEventKind::ScrollDown => Some(Intent::SelectNext),
        MouseEventKind::ScrollUp => Some(Intent::SelectPrevious),
        _ => None,
    }
}
