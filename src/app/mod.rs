// Application state management
//
// This module contains the main AppState struct and re-exports
// configuration types from the config submodule.

pub mod config;
pub mod event;

// Re-export config types for convenience
pub use config::{RefreshConfig, Tab};

use crate::chain::{ChainSnapshot, SnapshotError};
use crate::consts::ConstBrowser;
use crate::endpoints::{create_ws_endpoints, LinkOption};
use crate::env::StaticEnv;
use crate::i18n::{TOptions, Translate, Translator, NS_PARACHAINS};
use crate::parachains::{
    derive_rows, fund_action, summarize_auction, AuctionSummary, FundActionKind, FundRow,
};
use crate::storage::{KvStore, MemoryStore};
use config::{ACTIVITY_LOG_CAPACITY, MAX_REFRESH_MS, MIN_REFRESH_MS, REFRESH_STEP};
use ratatui::widgets::{ListState, TableState};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

/// Everything AppState needs from the outside world
pub struct AppOptions {
    pub translator: Translator,
    pub env: StaticEnv,
    pub store: Box<dyn KvStore>,
    /// Snapshot file re-read on every data refresh
    pub snapshot_path: Option<PathBuf>,
    pub refresh_ms: u64,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            translator: Translator::new(),
            env: StaticEnv::default(),
            store: Box::new(MemoryStore::new()),
            snapshot_path: None,
            refresh_ms: config::DEFAULT_REFRESH_MS,
        }
    }
}

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Active panel
    pub tab: Tab,

    pub translator: Translator,
    env: StaticEnv,
    store: Box<dyn KvStore>,

    /// Endpoint list, rebuilt on every data refresh
    pub endpoints: Vec<LinkOption>,

    /// List state for the endpoint panel (enables scrolling)
    pub endpoint_list_state: ListState,

    /// URL the user picked as connection target
    pub selected_endpoint: Option<String>,

    snapshot_path: Option<PathBuf>,

    /// Latest chain snapshot
    pub snapshot: ChainSnapshot,

    /// Snapshot reload error message (if any)
    pub snapshot_error: Option<String>,

    /// Derived auction summary cards
    pub auction: AuctionSummary,

    /// Derived fund rows, ongoing funds first
    pub funds: Vec<FundRow>,

    /// Table state for the crowdloan panel
    pub fund_table_state: TableState,

    /// Runtime constant pickers
    pub consts: ConstBrowser,

    /// Recent actions, newest last
    pub activity: VecDeque<String>,

    /// Refresh interval configuration
    pub refresh_config: RefreshConfig,

    /// Last time the snapshot and endpoints were refreshed
    last_data_refresh: Instant,
}

impl AppState {
    /// Create a new AppState and perform the initial data load
    pub fn new(options: AppOptions) -> Self {
        let snapshot = ChainSnapshot::default();
        let auction = summarize(&snapshot);

        let mut state = Self {
            running: true,
            tab: Tab::default(),
            translator: options.translator,
            env: options.env,
            store: options.store,
            endpoints: Vec::new(),
            endpoint_list_state: ListState::default(),
            selected_endpoint: None,
            snapshot_path: options.snapshot_path,
            snapshot,
            snapshot_error: None,
            auction,
            funds: Vec::new(),
            fund_table_state: TableState::default(),
            consts: ConstBrowser::default(),
            activity: VecDeque::with_capacity(ACTIVITY_LOG_CAPACITY),
            refresh_config: RefreshConfig::with_interval(options.refresh_ms),
            last_data_refresh: Instant::now(),
        };

        // Perform initial data load immediately on startup
        state.refresh_data();

        state
    }

    /// Update state on each tick
    pub fn on_tick(&mut self) {
        if self.last_data_refresh.elapsed() >= self.refresh_config.data_interval() {
            self.refresh_data();
        }
    }

    /// Rebuild the endpoint list and reload the snapshot
    pub fn refresh_data(&mut self) {
        self.last_data_refresh = Instant::now();
        self.refresh_endpoints();

        let Some(path) = self.snapshot_path.clone() else {
            return;
        };

        match ChainSnapshot::load(&path) {
            Ok(snapshot) => {
                self.snapshot_error = None;
                self.apply_snapshot(snapshot);
            }
            Err(e) => {
                // Keep the previous snapshot; the collector may be mid-write
                tracing::warn!(error = %e, path = %path.display(), "Snapshot reload failed");
                self.snapshot_error = Some(describe_snapshot_error(&e));
            }
        }
    }

    fn refresh_endpoints(&mut self) {
        self.endpoints = create_ws_endpoints(&self.translator, &self.env, self.store.as_ref());

        // Keep the cursor on a selectable row
        let selected = self
            .endpoint_list_state
            .selected()
            .filter(|&i| self.endpoints.get(i).is_some_and(LinkOption::is_selectable))
            .or_else(|| self.endpoints.iter().position(LinkOption::is_selectable));
        self.endpoint_list_state.select(selected);
    }

    /// Replace the snapshot; derived state is recomputed only on change
    pub fn apply_snapshot(&mut self, snapshot: ChainSnapshot) {
        if snapshot == self.snapshot {
            return;
        }

        self.snapshot = snapshot;
        self.auction = summarize(&self.snapshot);
        self.funds = fund_rows(&self.snapshot);
        self.consts.refresh(&self.snapshot.consts);

        let selected = match self.fund_table_state.selected() {
            _ if self.funds.is_empty() => None,
            Some(i) => Some(i.min(self.funds.len() - 1)),
            None => Some(0),
        };
        self.fund_table_state.select(selected);

        tracing::debug!(
            best = ?self.snapshot.best_number,
            funds = self.funds.len(),
            "Applied chain snapshot"
        );
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    /// Move the cursor within the active panel
    pub fn select_previous(&mut self) {
        match self.tab {
            Tab::Endpoints => self.step_endpoint(false),
            Tab::Crowdloans => step_table(&mut self.fund_table_state, self.funds.len(), false),
            Tab::Constants => self.consts.prev_method(),
            Tab::Auctions => {}
        }
    }

    pub fn select_next(&mut self) {
        match self.tab {
            Tab::Endpoints => self.step_endpoint(true),
            Tab::Crowdloans => step_table(&mut self.fund_table_state, self.funds.len(), true),
            Tab::Constants => self.consts.next_method(),
            Tab::Auctions => {}
        }
    }

    /// Move to the next selectable endpoint, skipping headers
    fn step_endpoint(&mut self, forward: bool) {
        let len = self.endpoints.len();
        if len == 0 {
            self.endpoint_list_state.select(None);
            return;
        }

        let start = self.endpoint_list_state.selected();
        let candidates: Box<dyn Iterator<Item = usize>> = match (start, forward) {
            (None, _) => Box::new(0..len),
            (Some(i), true) => Box::new(i + 1..len),
            (Some(i), false) => Box::new((0..i).rev()),
        };

        let endpoints = &self.endpoints;
        if let Some(idx) = candidates
            .into_iter()
            .find(|&i| endpoints[i].is_selectable())
        {
            self.endpoint_list_state.select(Some(idx));
        }
    }

    /// Pick the endpoint under the cursor as connection target
    pub fn choose_endpoint(&mut self) {
        let Some(option) = self
            .endpoint_list_state
            .selected()
            .and_then(|i| self.endpoints.get(i))
            .filter(|o| o.is_selectable())
        else {
            return;
        };

        let url = option.value.clone();
        tracing::info!(url = %url, text = %option.text, "Selected endpoint");
        self.push_activity(format!("endpoint -> {}", url));
        self.selected_endpoint = Some(url);
    }

    /// Prepare a crowdloan transaction for the selected fund
    pub fn fund_action(&mut self, kind: FundActionKind) {
        if self.tab != Tab::Crowdloans {
            return;
        }
        let Some(row) = self
            .fund_table_state
            .selected()
            .and_then(|i| self.funds.get(i))
        else {
            return;
        };

        let min_contribution = self.snapshot.consts.crowdloan_min_contribution;
        match fund_action(row, kind, min_contribution) {
            Some(intent) => {
                let description = intent.describe();
                tracing::info!(
                    call = %description,
                    endpoint = ?self.selected_endpoint,
                    "Prepared crowdloan transaction"
                );
                let prefix = self.translator.t("tx.prepared", "prepared", TOptions::ns(NS_PARACHAINS));
                self.push_activity(format!("{} {}", prefix, description));
            }
            None => {
                let para_id = row.para_id;
                tracing::debug!(para_id, ?kind, "Fund action not available");
                self.push_activity(format!("{:?} not available for #{}", kind, para_id));
            }
        }
    }

    pub fn push_activity(&mut self, line: String) {
        if self.activity.len() >= ACTIVITY_LOG_CAPACITY {
            self.activity.pop_front();
        }
        self.activity.push_back(line);
    }

    /// Increase refresh rate (decrease interval by 50ms, clamp to 50ms minimum)
    pub fn increase_refresh_rate(&mut self) {
        let new_interval = self.refresh_config.refresh_ms.saturating_sub(REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.max(MIN_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }

    /// Decrease refresh rate (increase interval by 50ms, clamp to maximum)
    pub fn decrease_refresh_rate(&mut self) {
        let new_interval = self.refresh_config.refresh_ms.saturating_add(REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.min(MAX_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}

fn summarize(snapshot: &ChainSnapshot) -> AuctionSummary {
    summarize_auction(
        &snapshot.auction_info,
        snapshot.last_winner.as_ref(),
        snapshot.best_number,
        snapshot.total_issuance,
        snapshot.consts.auctions_ending_period,
    )
}

/// Ongoing funds carry the action column; ended ones follow without it
fn fund_rows(snapshot: &ChainSnapshot) -> Vec<FundRow> {
    let (ongoing, ended): (Vec<_>, Vec<_>) =
        snapshot.funds.iter().cloned().partition(|c| !c.is_ended);
    let min = snapshot.consts.crowdloan_min_contribution;

    let mut rows = derive_rows(&ongoing, snapshot.best_number, min, &snapshot.accounts, true);
    rows.extend(derive_rows(&ended, snapshot.best_number, min, &snapshot.accounts, false));
    rows
}

fn step_table(state: &mut TableState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }

    let next = match (state.selected(), forward) {
        (None, _) => 0,
        (Some(i), true) => (i + 1).min(len - 1),
        (Some(i), false) => i.saturating_sub(1),
    };
    state.select(Some(next));
}

fn describe_snapshot_error(e: &SnapshotError) -> String {
    match e {
        SnapshotError::Io { .. } => format!("Cannot read snapshot: {} (collector not running?)", e),
        SnapshotError::Json(_) => format!("Snapshot rejected: {}", e),
    }
}
