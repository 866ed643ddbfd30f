// Crowdloans panel
//
// One table row per fund: status, depositor, time left, lease slots,
// raised/cap with percentage and the actions open to the local accounts.

use super::truncate_to_width;
use crate::app::AppState;
use crate::format::{block_to_time, format_balance, format_number};
use crate::i18n::{TOptions, Translate, NS_PARACHAINS};
use crate::parachains::FundRow;
use crate::theme::{fund_status_color, MUI_VIOLET, SELECTION_BG, SLATE};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

const DEPOSITOR_WIDTH: usize = 12;

pub fn render_crowdloans(f: &mut Frame, area: Rect, app: &mut AppState) {
    let t = &app.translator;
    let opts = TOptions::ns(NS_PARACHAINS);
    let props = &app.snapshot.properties;
    let block_time = app.snapshot.consts.expected_block_time_ms;

    let header = Row::new(vec![
        Cell::from("para"),
        Cell::from(t.t("status", "status", opts)),
        Cell::from(t.t("depositor", "depositor", opts)),
        Cell::from(t.t("ending", "ending", opts)),
        Cell::from(t.t("leases", "leases", opts)),
        Cell::from(t.t("raised", "raised", opts)),
        Cell::from(t.t("actions", "actions", opts)),
    ])
    .style(Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .funds
        .iter()
        .map(|row| {
            let ending = match row.blocks_left {
                Some(left) => format!("{} #{}", block_to_time(left, block_time), format_number(row.end)),
                None => format!("#{}", format_number(row.end)),
            };
            let raised = format!(
                "{} {} / {}",
                row.percentage,
                format_balance(row.raised, props.token_decimals, &props.token_symbol, false),
                format_balance(row.cap, props.token_decimals, &props.token_symbol, true)
            );

            Row::new(vec![
                Cell::from(format_number(row.para_id)),
                Cell::from(Span::styled(
                    row.status.label(t),
                    Style::default().fg(fund_status_color(row.status)),
                )),
                Cell::from(truncate_to_width(&row.depositor, DEPOSITOR_WIDTH)),
                Cell::from(ending),
                Cell::from(format!(
                    "{} - {}",
                    format_number(row.first_slot),
                    format_number(row.last_slot)
                )),
                Cell::from(raised),
                Cell::from(action_hints(row, t)),
            ])
            .style(Style::default().fg(SLATE))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(DEPOSITOR_WIDTH as u16),
        Constraint::Length(18),
        Constraint::Length(9),
        Constraint::Min(20),
        Constraint::Length(12),
    ];

    let title = format!(" Crowdloans ({}) ", app.funds.len());
    let table = Table::new(rows, widths)
        .header(header)
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
        .row_highlight_style(Style::default().bg(SELECTION_BG));

    f.render_stateful_widget(table, area, &mut app.fund_table_state);
}

/// Key hints for the actions a row allows; disabled ones are dimmed
fn action_hints(row: &FundRow, t: &dyn Translate) -> Line<'static> {
    if !row.is_ongoing {
        return Line::default();
    }

    let mut spans = Vec::new();
    if row.can_dissolve {
        let style = if row.dissolve_enabled() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[d]{} ", row.dissolve_label(t)), style));
    }
    if row.can_contribute {
        spans.push(Span::styled(
            "[c]+",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
