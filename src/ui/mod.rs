// UI rendering module
//
// This module contains all UI rendering components for parascope.
// The main draw() function orchestrates rendering of all UI panels.

mod activity;
mod auctions;
mod banner;
mod constants;
mod crowdloans;
mod endpoints;
mod status_bar;

use crate::app::{AppState, Tab};
use crate::i18n::{TOptions, Translate};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{MUI_VIOLET, SLATE};
use activity::render_activity;
use auctions::render_auctions;
use banner::render_banner;
use constants::render_constants;
use crowdloans::render_crowdloans;
use endpoints::render_endpoints;
use status_bar::render_status_bar;

/// Namespace for panel chrome labels
pub(crate) const NS_UI: &str = "ui";

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    // Main layout: banner, tabs, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_banner(f, chunks[0], app);
    render_tabs(f, chunks[1], app);

    // Body: active panel + activity log
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(68), // Active panel
            Constraint::Percentage(32), // Activity log
        ])
        .split(chunks[2]);

    match app.tab {
        Tab::Endpoints => render_endpoints(f, body_chunks[0], app),
        Tab::Auctions => render_auctions(f, body_chunks[0], app),
        Tab::Crowdloans => render_crowdloans(f, body_chunks[0], app),
        Tab::Constants => render_constants(f, body_chunks[0], app),
    }
    render_activity(f, body_chunks[1], app);

    render_status_bar(f, chunks[3], app);
}

fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let (key, default) = tab.title();
            Line::from(app.translator.t(key, default, TOptions::ns(NS_UI)))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(SLATE))
        .highlight_style(
            Style::default()
                .fg(MUI_VIOLET)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUI_VIOLET)),
        );

    f.render_widget(tabs, area);
}

/// Cut `s` to at most `max_width` terminal cells, marking the cut with `…`
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainSnapshot;
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_snapshot() -> ChainSnapshot {
        ChainSnapshot::from_json(
            r#"{
                "chain": "MetaMUI Local",
                "bestNumber": 1200,
                "totalIssuance": "1000000",
                "auctionInfo": { "numAuctions": 3, "leasePeriod": 7, "endBlock": 1500 },
                "lastWinner": { "total": 2500 },
                "funds": [{
                    "paraId": 2000,
                    "info": { "cap": 200, "depositor": "5Alice", "end": 1800,
                              "firstSlot": 7, "lastSlot": 10, "raised": 50 }
                }],
                "accounts": ["5Alice"],
                "consts": { "all": { "auctions": { "endingPeriod": "200" } } }
            }"#,
        )
        .unwrap()
    }

    fn render(app: &mut AppState) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = AppState::default();
        app.apply_snapshot(sample_snapshot());

        let endpoints = render(&mut app);
        assert!(endpoints.contains("MetaMUI networks"));
        assert!(endpoints.contains("wss://mui.metablockchain.id"));

        app.next_tab();
        let auctions = render(&mut app);
        assert!(auctions.contains("7 - 10"));
        assert!(auctions.contains("#1,500"));

        app.next_tab();
        let crowdloans = render(&mut app);
        assert!(crowdloans.contains("25.00%"));
        assert!(crowdloans.contains("Active"));

        app.next_tab();
        let constants = render(&mut app);
        assert!(constants.contains("endingPeriod"));
    }

    #[test]
    fn test_renders_without_snapshot() {
        let mut app = AppState::default();
        for _ in 0..Tab::ALL.len() {
            render(&mut app);
            app.next_tab();
        }
    }
}
