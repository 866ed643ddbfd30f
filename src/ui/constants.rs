// Constants panel
//
// Section list on the left, method dropdown and value on the right.

use crate::app::AppState;
use crate::theme::{MINT, MUI_VIOLET, SELECTION_BG, SLATE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render_constants(f: &mut Frame, area: Rect, app: &AppState) {
    let consts = &app.snapshot.consts;
    let browser = &app.consts;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let sections: Vec<ListItem> = consts
        .all
        .keys()
        .map(|s| ListItem::new(Span::styled(s.clone(), Style::default().fg(SLATE))))
        .collect();
    let mut section_state =
        ListState::default().with_selected(consts.all.keys().position(|s| *s == browser.value.section));

    let section_list = List::new(sections)
        .block(panel_block(" Sections ←→ "))
        .highlight_style(Style::default().bg(SELECTION_BG).fg(MUI_VIOLET));
    f.render_stateful_widget(section_list, columns[0], &mut section_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(columns[1]);

    // Method dropdown; absent when the section has no constants
    match &browser.methods {
        Some(methods) => {
            let items: Vec<ListItem> = methods
                .options()
                .iter()
                .map(|m| ListItem::new(Span::styled(m.clone(), Style::default().fg(SLATE))))
                .collect();
            let mut state = ListState::default().with_selected(Some(methods.selected_index()));
            let list = List::new(items)
                .block(panel_block(" Methods ↑↓ "))
                .highlight_style(Style::default().bg(SELECTION_BG).fg(MUI_VIOLET))
                .highlight_symbol("› ");
            f.render_stateful_widget(list, right[0], &mut state);
        }
        None => {
            let empty = Paragraph::new(Span::styled(
                "No constants in snapshot",
                Style::default().fg(Color::DarkGray),
            ))
            .block(panel_block(" Methods "));
            f.render_widget(empty, right[0]);
        }
    }

    let value_text = match browser.current(consts) {
        Some(value) => vec![
            Line::from(Span::styled(
                format!("{}.{}", browser.value.section, browser.value.method),
                Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(value.to_string(), Style::default().fg(MINT))),
        ],
        None => vec![Line::from(Span::styled("-", Style::default().fg(Color::DarkGray)))],
    };
    let value = Paragraph::new(value_text)
        .wrap(Wrap { trim: true })
        .block(panel_block(" Value "));
    f.render_widget(value, right[1]);
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUI_VIOLET))
}
