mod no_data;
mod quiz;
mod result;
mod selection;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state() {
        AppState::Selection => selection::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
        AppState::NoData => no_data::render(frame, area, app.load_error().unwrap_or_default()),
    }
}

/// Shorten `text` to `limit` characters, marking the cut with `...`.
fn truncate(text: &str, limit: usize) -> String {
    let char_count = text.chars().count();
    if char_count > limit {
        let truncated: String = text.chars().take(limit).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
