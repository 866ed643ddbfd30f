// Crowdloan fund rows
//
// Each fund is projected onto a table row: status label, time left,
// raised/cap percentage and which actions the local accounts may take.

use crate::chain::{Balance, BlockNumber, Campaign, ParaId};
use crate::i18n::{TOptions, Translate, NS_PARACHAINS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundStatus {
    Retiring,
    Capped,
    Active,
    Ended,
}

impl FundStatus {
    /// Fixed precedence: retiring, then ended, then capped, else active
    pub fn classify(retiring: bool, has_blocks_left: bool, is_capped: bool) -> Self {
        if retiring {
            FundStatus::Retiring
        } else if !has_blocks_left {
            FundStatus::Ended
        } else if is_capped {
            FundStatus::Capped
        } else {
            FundStatus::Active
        }
    }

    pub fn label(&self, t: &dyn Translate) -> String {
        let opts = TOptions::ns(NS_PARACHAINS);
        match self {
            FundStatus::Retiring => t.t("Retiring", "Retiring", opts),
            FundStatus::Capped => t.t("Capped", "Capped", opts),
            FundStatus::Active => t.t("Active", "Active", opts),
            FundStatus::Ended => t.t("Ended", "Ended", opts),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundActionKind {
    /// Dissolve an ended fund, or cancel one that is still running
    Dissolve,
    Contribute,
}

/// A call ready to hand to the signing client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIntent {
    pub pallet: &'static str,
    pub call: &'static str,
    pub para_id: ParaId,
    /// Signing account; `None` leaves the choice to the signer
    pub signer: Option<String>,
    pub value: Option<Balance>,
}

impl TxIntent {
    pub fn describe(&self) -> String {
        let mut text = format!("{}.{}({}", self.pallet, self.call, self.para_id);
        if let Some(value) = self.value {
            text.push_str(&format!(", {}", value));
        }
        text.push(')');
        if let Some(signer) = &self.signer {
            text.push_str(&format!(" as {}", signer));
        }
        text
    }
}

/// Display state for one crowdloan fund
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundRow {
    pub para_id: ParaId,
    pub depositor: String,
    pub end: BlockNumber,
    pub first_slot: u32,
    pub last_slot: u32,
    pub raised: Balance,
    pub cap: Balance,
    pub blocks_left: Option<BlockNumber>,
    /// `"25.00%"`
    pub percentage: String,
    pub is_capped: bool,
    pub is_retiring: bool,
    pub is_ended: bool,
    pub is_depositor: bool,
    pub status: FundStatus,
    pub can_contribute: bool,
    pub can_dissolve: bool,
    /// Whether the action column is rendered at all
    pub is_ongoing: bool,
}

impl FundRow {
    pub fn derive(
        campaign: &Campaign,
        best_number: Option<BlockNumber>,
        min_contribution: Balance,
        accounts: &[String],
        is_ongoing: bool,
    ) -> Self {
        let info = &campaign.info;

        let blocks_left = best_number
            .filter(|best| info.end > *best)
            .map(|best| info.end - best);
        let is_capped = info.cap.saturating_sub(info.raised) < min_contribution;
        let is_depositor = accounts.iter().any(|a| *a == info.depositor);

        FundRow {
            para_id: campaign.para_id,
            depositor: info.depositor.clone(),
            end: info.end,
            first_slot: info.first_slot,
            last_slot: info.last_slot,
            raised: info.raised,
            cap: info.cap,
            blocks_left,
            percentage: raised_percentage(info.raised, info.cap),
            is_capped,
            is_retiring: info.retiring,
            is_ended: campaign.is_ended,
            is_depositor,
            status: FundStatus::classify(info.retiring, blocks_left.is_some(), is_capped),
            can_contribute: blocks_left.is_some() && !is_capped && !info.retiring,
            can_dissolve: info.raised.is_zero(),
            is_ongoing,
        }
    }

    pub fn dissolve_label(&self, t: &dyn Translate) -> String {
        let opts = TOptions::ns(NS_PARACHAINS);
        if self.is_ended {
            t.t("Dissolve", "Dissolve", opts)
        } else {
            t.t("Cancel", "Cancel", opts)
        }
    }

    /// The dissolve button exists but only the depositor may press it
    pub fn dissolve_enabled(&self) -> bool {
        self.is_ongoing && self.can_dissolve && self.is_depositor
    }

    pub fn contribute_enabled(&self) -> bool {
        self.is_ongoing && self.can_contribute
    }
}

/// Derive every row of the fund table
pub fn derive_rows(
    funds: &[Campaign],
    best_number: Option<BlockNumber>,
    min_contribution: Balance,
    accounts: &[String],
    is_ongoing: bool,
) -> Vec<FundRow> {
    funds
        .iter()
        .map(|c| FundRow::derive(c, best_number, min_contribution, accounts, is_ongoing))
        .collect()
}

/// Build the dispatch intent for an action, if the row allows it
pub fn fund_action(row: &FundRow, kind: FundActionKind, min_contribution: Balance) -> Option<TxIntent> {
    match kind {
        FundActionKind::Dissolve if row.dissolve_enabled() => Some(TxIntent {
            pallet: "crowdloan",
            call: "dissolve",
            para_id: row.para_id,
            signer: Some(row.depositor.clone()),
            value: None,
        }),
        FundActionKind::Contribute if row.contribute_enabled() => Some(TxIntent {
            pallet: "crowdloan",
            call: "contribute",
            para_id: row.para_id,
            signer: None,
            value: Some(min_contribution),
        }),
        _ => None,
    }
}

/// raised/cap with two decimals, integer-divided at basis-point precision
pub fn raised_percentage(raised: Balance, cap: Balance) -> String {
    if cap.is_zero() {
        return "0.00%".to_string();
    }

    let (raised, cap) = (raised.0, cap.0);
    let mut remainder = raised % cap;
    let mut basis_points = (raised / cap).saturating_mul(10_000);

    // Long division for the four fractional digits; `remainder < cap` throughout
    for scale in [1_000, 100, 10, 1] {
        let (digit, rest) = times_ten_div(remainder, cap);
        basis_points = basis_points.saturating_add(digit * scale);
        remainder = rest;
    }

    format!("{}.{:02}%", basis_points / 100, basis_points % 100)
}

/// `(10 * r / cap, 10 * r % cap)` for `r < cap`, without overflowing
fn times_ten_div(r: u128, cap: u128) -> (u128, u128) {
    let mut acc = 0u128;
    let mut digit = 0u128;
    for _ in 0..10 {
        if acc >= cap - r {
            acc -= cap - r;
            digit += 1;
        } else {
            acc += r;
        }
    }
    (digit, acc)
}
