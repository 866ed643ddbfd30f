// Keyboard event handling
//
// This module contains the keyboard event handler that processes
// user input and updates the application state accordingly.

use super::{AppState, Tab};
use crate::parachains::FundActionKind;
use crossterm::event::KeyCode;

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - Quit the application
/// - `Tab` / `BackTab` - Next / previous panel
/// - `Up`, `Down` - Move the cursor in the active panel
/// - `Enter` - Use the highlighted endpoint
/// - `d` - Dissolve / cancel the selected fund
/// - `c` - Contribute to the selected fund
/// - `Left`, `Right` - Previous / next constant section
/// - `r` - Reload snapshot and endpoints now
/// - `+`, `=` - Slower refresh
/// - `-`, `_` - Faster refresh
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        // Quit on 'q', 'Q', or Esc
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            false
        }
        KeyCode::Tab => {
            app.next_tab();
            true
        }
        KeyCode::BackTab => {
            app.previous_tab();
            true
        }
        KeyCode::Up => {
            app.select_previous();
            true
        }
        KeyCode::Down => {
            app.select_next();
            true
        }
        KeyCode::Enter => {
            if app.tab == Tab::Endpoints {
                app.choose_endpoint();
            }
            true
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.fund_action(FundActionKind::Dissolve);
            true
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.fund_action(FundActionKind::Contribute);
            true
        }
        KeyCode::Left => {
            if app.tab == Tab::Constants {
                app.consts.prev_section(&app.snapshot.consts);
            }
            true
        }
        KeyCode::Right => {
            if app.tab == Tab::Constants {
                app.consts.next_section(&app.snapshot.consts);
            }
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh_data();
            true
        }
        // Refresh rate controls (unified)
        // + = slower refresh (increase interval)
        // - = faster refresh (decrease interval)
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.decrease_refresh_rate();
            true
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.increase_refresh_rate();
            true
        }
        _ => true,
    }
}
