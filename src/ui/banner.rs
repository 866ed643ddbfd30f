// Banner rendering module
//
// Renders the top banner with the logo, chain name, best block and the
// chosen connection target.

use crate::app::AppState;
use crate::format::format_number;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let chain = app.snapshot.chain.as_deref().unwrap_or("unknown chain");
    let best = app
        .snapshot
        .best_number
        .map(|n| format!("#{}", format_number(n)))
        .unwrap_or_else(|| "-".to_string());
    let target = app.selected_endpoint.as_deref().unwrap_or("no endpoint selected");

    let banner_text = vec![
        Line::from(vec![
            Span::styled(
                "  P A R A S C O P E ",
                Style::default()
                    .fg(Color::Rgb(138, 43, 226))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  >>> parachain scope v0.0.1 <<<",
                Style::default()
                    .fg(Color::Rgb(255, 140, 0))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "  ─────────────────── ",
                Style::default().fg(Color::Rgb(158, 63, 246)),
            ),
            Span::styled(
                format!("    [⛓ {}] [best {}]", chain, best),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "  auctions·crowdloans ",
                Style::default().fg(Color::Rgb(178, 83, 255)),
            ),
            Span::styled(
                format!("    [→ {}]", target),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let banner = Paragraph::new(banner_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Rgb(138, 43, 226))),
        )
        .alignment(Alignment::Left);

    f.render_widget(banner, area);
}
