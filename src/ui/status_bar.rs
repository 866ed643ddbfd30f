// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, the refresh
// interval and the last snapshot error.

use crate::app::config::DEFAULT_REFRESH_MS;
use crate::app::{AppState, Tab};
use crate::theme::{get_refresh_color, CRIMSON, MUI_VIOLET, SLATE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    // Calculate available width for hints (subtract borders and indicators)
    let available_width = area.width.saturating_sub(4 + 14) as usize;

    // Define all hints with priority levels
    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
        color: Color,
    }

    let mut hints = vec![
        Hint {
            priority: 1,
            key: "Q:",
            desc: "Quit | ",
            color: Color::Red,
        },
        Hint {
            priority: 1,
            key: "Tab:",
            desc: "Panel | ",
            color: MUI_VIOLET,
        },
        Hint {
            priority: 1,
            key: "↑↓:",
            desc: "Navigate | ",
            color: MUI_VIOLET,
        },
        Hint {
            priority: 2,
            key: "R:",
            desc: "Reload | ",
            color: MUI_VIOLET,
        },
        Hint {
            priority: 3,
            key: "+/-:",
            desc: "Speed | ",
            color: MUI_VIOLET,
        },
    ];

    // Panel-specific hints
    match app.tab {
        Tab::Endpoints => hints.push(Hint {
            priority: 1,
            key: "Enter:",
            desc: "Use endpoint | ",
            color: MUI_VIOLET,
        }),
        Tab::Crowdloans => {
            hints.push(Hint {
                priority: 1,
                key: "D:",
                desc: "Dissolve | ",
                color: MUI_VIOLET,
            });
            hints.push(Hint {
                priority: 1,
                key: "C:",
                desc: "Contribute | ",
                color: MUI_VIOLET,
            });
        }
        Tab::Constants => hints.push(Hint {
            priority: 1,
            key: "←→:",
            desc: "Section | ",
            color: MUI_VIOLET,
        }),
        Tab::Auctions => {}
    }

    let mut spans = vec![Span::styled(" ⛓ ", Style::default().fg(MUI_VIOLET))];
    let mut current_length = 3;

    // Process hints by priority, adding until we run out of space
    for priority in 1..=3 {
        for hint in &hints {
            if hint.priority == priority {
                let hint_length = hint.key.chars().count() + hint.desc.len();
                if current_length + hint_length <= available_width {
                    spans.push(Span::styled(
                        hint.key,
                        Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(hint.desc));
                    current_length += hint_length;
                }
            }
        }
    }

    // Refresh indicator [R:500ms]
    let refresh = &app.refresh_config;
    let refresh_color = get_refresh_color(
        refresh.refresh_ms,
        DEFAULT_REFRESH_MS,
        refresh.recently_changed(),
    );
    spans.push(Span::styled("[R:", Style::default().fg(SLATE)));
    spans.push(Span::styled(
        format!("{}ms", refresh.refresh_ms),
        Style::default().fg(refresh_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(SLATE)));

    if let Some(err) = &app.snapshot_error {
        spans.push(Span::styled(
            err.clone(),
            Style::default().fg(CRIMSON),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(MUI_VIOLET)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
