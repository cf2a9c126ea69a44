use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::theme::Theme;
use crate::ui::{self, ScreenLayout};

use super::input::{ClickTracker, Intent, intent_for_key, intent_for_mouse};

/// Longest wait for input while no clock tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Hit areas from the last drawn frame.
    pub layout: ScreenLayout,
    pub clicks: ClickTracker,
}

impl EventLoopState {
    pub fn new(double_click: Duration) -> Self {
        Self {
            layout: ScreenLayout::default(),
            clicks: ClickTracker::new(double_click),
        }
    }
}

/// Main terminal event loop: runs due clock ticks, draws, and dispatches
/// input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    theme: &Theme,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.poll_ticker(Instant::now());

        terminal.draw(|f| state.layout = ui::draw(f, app, theme, &state.layout))?;

        let timeout = app
            .ticker
            .time_until_due(Instant::now())
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));

        if !event::poll(timeout)? {
            continue;
        }

        let intent = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => intent_for_key(key, app.selected),
            Event::Mouse(mouse) => {
                intent_for_mouse(mouse, &state.layout, &mut state.clicks, Instant::now())
            }
            _ => None,
        };

        if let Some(intent) = intent {
            if apply(app, intent) {
                break;
            }
        }
    }

    Ok(())
}

/// Apply `intent` to the player. Returns true when the app should exit.
fn apply(app: &mut App, intent: Intent) -> bool {
    debug!(?intent, "input");
    match intent {
        Intent::Quit => {
            app.stop();
            return true;
        }
        Intent::PlayPause => app.toggle_play_pause(),
        Intent::Stop => app.stop(),
        Intent::Next => app.next(),
        Intent::Previous => app.previous(),
        Intent::Activate(i) => app.activate(i),
        Intent::DoubleClick(i) => app.double_click(i),
        Intent::Select(i) => app.select(i),
        Intent::SelectNext => app.select_next(),
        Intent::SelectPrevious => app.select_previous(),
    }
    false
}
