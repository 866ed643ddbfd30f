// Activity log rendering module
//
// Renders the most recent user actions (endpoint picks, prepared
// transactions) with the newest entry at the bottom.

use crate::app::AppState;
use crate::theme::{AMBER, SLATE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

pub fn render_activity(f: &mut Frame, area: Rect, app: &AppState) {
    // Only the tail that fits inside the borders
    let visible = (area.height as usize).saturating_sub(2);
    let skip = app.activity.len().saturating_sub(visible);

    let items: Vec<ListItem> = app
        .activity
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, line)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:2}.", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {}", line), Style::default().fg(SLATE)),
            ]))
        })
        .collect();

    let title = format!(" Activity ({}) ", app.activity.len());

    let log = List::new(items).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(AMBER)),
    );

    f.render_widget(log, area);
}
