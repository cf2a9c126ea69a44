//! UI rendering helpers for the terminal user interface.
//!
//! Draws the player with `ratatui` and reports where the playlist rows and
//! transport buttons ended up, so mouse clicks can be mapped back to them.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::theme::Theme;

/// The four transport buttons, left to right.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlButton {
    Previous,
    PlayPause,
    Stop,
    Next,
}

impl ControlButton {
    pub const ALL: [ControlButton; 4] = [
        ControlButton::Previous,
        ControlButton::PlayPause,
        ControlButton::Stop,
        ControlButton::Next,
    ];
}

/// Where things were drawn in the last frame.
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    /// Playlist rows area (inside the border).
    pub list_inner: Rect,
    /// Index of the song drawn on the first visible row.
    pub list_start: usize,
    /// Number of songs drawn.
    pub list_len: usize,
    pub buttons: Vec<(ControlButton, Rect)>,
}

impl ScreenLayout {
    /// Song index under the cell `(column, row)`, if any.
    pub fn song_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_inner.contains(Position::new(column, row)) {
            return None;
        }
        let offset = (row - self.list_inner.y) as usize;
        if offset < self.list_len {
            Some(self.list_start + offset)
        } else {
            None
        }
    }

    /// Button under the cell `(column, row)`, if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<ControlButton> {
        self.buttons
            .iter()
            .find(|(_, r)| r.contains(Position::new(column, row)))
            .map(|(b, _)| *b)
    }
}

/// Visible slice `start..end` of a list of `total` rows in `height` lines.
///
/// The window stays at `offset` (the first row of the previous frame) and
/// only scrolls far enough to bring `selected` back into view, so a row does
/// not move under the pointer between two clicks.
pub fn list_window(
    total: usize,
    height: usize,
    selected: Option<usize>,
    offset: usize,
) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let mut start = offset.min(total - height);
    if let Some(sel) = selected.map(|s| s.min(total - 1)) {
        if sel < start {
            start = sel;
        } else if sel >= start + height {
            start = sel + 1 - height;
        }
    }
    (start, start + height)
}

struct Areas {
    playlist: Rect,
    song: Rect,
    time: Rect,
    controls: Rect,
}

fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);
    Areas {
        playlist: chunks[0],
        song: chunks[1],
        time: chunks[2],
        controls: chunks[3],
    }
}

fn button_rects(area: Rect) -> Vec<(ControlButton, Rect)> {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    ControlButton::ALL
        .iter()
        .zip(cols.iter())
        .map(|(b, r)| {
            // Keep buttons compact and centred in their column.
            let width = r.width.min(9);
            let x = r.x + (r.width - width) / 2;
            (*b, Rect::new(x, r.y, width, r.height))
        })
        .collect()
}

fn button_glyph<'a>(button: ControlButton, app: &App, theme: &'a Theme) -> &'a str {
    match button {
        ControlButton::Previous => theme.icons.previous.as_str(),
        ControlButton::PlayPause if app.is_playing() => theme.icons.pause.as_str(),
        ControlButton::PlayPause => theme.icons.play.as_str(),
        ControlButton::Stop => theme.icons.stop.as_str(),
        ControlButton::Next => theme.icons.next.as_str(),
    }
}

/// Render the whole player into `frame` and return the hit areas.
///
/// `prev` is the layout of the previous frame; its list offset is kept.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme, prev: &ScreenLayout) -> ScreenLayout {
    let base = Style::default().bg(theme.background).fg(theme.info);
    let mut outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", theme.title))
        .title_alignment(Alignment::Center)
        .style(base);
    if let Some(dir) = &app.current_dir {
        outer = outer.title_bottom(Line::from(format!(" {dir} ")).right_aligned());
    }
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let areas = split(inner);

    // Playlist
    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(" Playlist ")
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(theme.playlist_bg).fg(theme.playlist_fg));
    let list_inner = list_block.inner(areas.playlist);

    let total = app.songs.len();
    let (start, end) = list_window(
        total,
        list_inner.height as usize,
        app.selected,
        prev.list_start,
    );
    let items: Vec<ListItem> = app.songs[start..end]
        .iter()
        .map(|s| ListItem::new(s.file_name.as_str()))
        .collect();
    let list = List::new(items).block(list_block).highlight_style(
        Style::default()
            .bg(theme.selected_bg)
            .fg(theme.selected_fg)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    if let Some(sel) = app.selected.filter(|&s| s >= start && s < end) {
        state.select(Some(sel - start));
    }
    frame.render_stateful_widget(list, areas.playlist, &mut state);

    // Now playing + clock
    let info = Style::default().fg(theme.info).add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(app.now_playing.as_str())
            .alignment(Alignment::Center)
            .style(info),
        areas.song,
    );
    frame.render_widget(
        Paragraph::new(app.time_label.as_str())
            .alignment(Alignment::Center)
            .style(info),
        areas.time,
    );

    // Transport buttons
    let buttons = button_rects(areas.controls);
    for (button, rect) in &buttons {
        let active = *button == ControlButton::PlayPause && app.is_playing();
        let bg = if active { theme.button_active } else { theme.button };
        let face = Paragraph::new(Line::from(button_glyph(*button, app, theme)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent)),
            )
            .style(Style::default().bg(bg).fg(theme.info));
        frame.render_widget(face, *rect);
    }

    ScreenLayout {
        list_inner,
        list_start: start,
        list_len: end - start,
        buttons,
    }
}
