// Auctions panel
//
// Summary cards for the running auction: count, lease range, winning
// total against issuance, and the end-block countdown or ending period.

use crate::app::AppState;
use crate::format::{block_to_time, format_balance, format_number};
use crate::i18n::{TOptions, Translate, NS_PARACHAINS};
use crate::parachains::AuctionPhase;
use crate::theme::{AMBER, MINT, MUI_VIOLET, SLATE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render_auctions(f: &mut Frame, area: Rect, app: &AppState) {
    let outer = Block::default()
        .title(Span::styled(
            " Auctions ",
            Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUI_VIOLET));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // count + lease range
            Constraint::Length(3), // winning total
            Constraint::Length(3), // phase
            Constraint::Min(0),
        ])
        .split(inner);

    let summary = &app.auction;
    let t = &app.translator;
    let opts = TOptions::ns(NS_PARACHAINS);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    render_card(
        f,
        top[0],
        &t.t("auctions", "auctions", opts),
        format_number(summary.num_auctions),
    );

    // Without an end block only the auction count is meaningful
    if summary.end_block.is_none() {
        let idle = Paragraph::new(Line::from(Span::styled(
            t.t("auctions.none", "no auction in progress", opts),
            Style::default().fg(SLATE),
        )));
        f.render_widget(idle, rows[1]);
        return;
    }

    if let Some((first, last)) = summary.lease_range {
        render_card(
            f,
            top[1],
            &t.t("first - last", "first - last", opts),
            format!("{} - {}", format_number(first), format_number(last)),
        );
    }

    let props = &app.snapshot.properties;
    if let Some(total) = summary.total {
        let label = format_balance(total.value.into(), props.token_decimals, &props.token_symbol, true);
        let gauge = Gauge::default()
            .block(card_block(&t.t("total", "total", opts)))
            .gauge_style(Style::default().fg(MUI_VIOLET))
            .ratio(total.ratio())
            .label(label);
        f.render_widget(gauge, rows[1]);
    }

    let block_time = app.snapshot.consts.expected_block_time_ms;
    match summary.phase {
        Some(phase @ AuctionPhase::Countdown { end_block, .. }) => {
            let text = format!(
                "#{}  ({})",
                format_number(end_block),
                block_to_time(phase.blocks_remaining(), block_time)
            );
            let card = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MINT))))
                .block(card_block(&t.t("end period at", "end period at", opts)));
            f.render_widget(card, rows[2]);
        }
        Some(phase @ AuctionPhase::Ending { elapsed, ending_period }) => {
            let label = format!(
                "{} / {}  ({} left)",
                format_number(elapsed),
                format_number(ending_period),
                block_to_time(phase.blocks_remaining(), block_time)
            );
            let gauge = Gauge::default()
                .block(card_block(&t.t("ending period", "ending period", opts)))
                .gauge_style(Style::default().fg(AMBER))
                .ratio(phase.progress().ratio())
                .label(label);
            f.render_widget(gauge, rows[2]);
        }
        None => {}
    }
}

fn card_block(label: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", label), Style::default().fg(SLATE)))
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(SLATE))
}

fn render_card(f: &mut Frame, area: Rect, label: &str, value: String) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(MUI_VIOLET).add_modifier(Modifier::BOLD),
    )))
    .block(card_block(label));
    f.render_widget(card, area);
}
