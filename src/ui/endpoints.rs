// Endpoints panel
//
// Renders the endpoint registry as a scrollable list. Headers are drawn
// as section titles; the chosen connection target is marked.

use super::truncate_to_width;
use unicode_width::UnicodeWidthStr;
use crate::app::AppState;
use crate::theme::{MINT, MUI_VIOLET, SELECTION_BG, SLATE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

pub fn render_endpoints(f: &mut Frame, area: Rect, app: &mut AppState) {
    // Room for borders, marker and highlight symbol
    let inner = (area.width as usize).saturating_sub(8);
    let name_width = inner * 3 / 10;
    let url_width = inner * 4 / 10;
    let host_width = inner.saturating_sub(name_width + url_width + 2);

    let items: Vec<ListItem> = app
        .endpoints
        .iter()
        .map(|option| {
            if option.is_header {
                return ListItem::new(Line::from(Span::styled(
                    format!("── {} ", option.text),
                    Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD),
                )));
            }

            let is_current = app.selected_endpoint.as_deref() == Some(option.value.as_str());
            let marker = if is_current { "● " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(MINT)),
                Span::styled(
                    pad(&option.text, name_width),
                    Style::default().fg(if is_current { MINT } else { SLATE }),
                ),
                Span::raw(" "),
                Span::styled(pad(&option.value, url_width), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&option.text_by, host_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" Endpoints ({}) ", app.endpoints.iter().filter(|o| !o.is_header).count());

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUI_VIOLET)),
        )
        .highlight_style(Style::default().bg(SELECTION_BG))
        .highlight_symbol("› ");

    f.render_stateful_widget(list, area, &mut app.endpoint_list_state);
}

/// Truncate and left-align into a fixed-width column
fn pad(s: &str, width: usize) -> String {
    let mut cell = truncate_to_width(s, width);
    let used = cell.width();
    cell.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    cell
}
