// Chain snapshot
//
// Query results the explorer renders. An external collector writes them
// to a JSON file which is re-read on every data refresh; nothing here
// talks to a node.

mod balance;

pub use balance::Balance;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub type BlockNumber = u64;
pub type ParaId = u32;

/// MetaMUI target block time, used when the snapshot carries none
pub const DEFAULT_BLOCK_TIME_MS: u64 = 6_000;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuctionInfo {
    pub num_auctions: u32,
    pub lease_period: Option<BlockNumber>,
    pub end_block: Option<BlockNumber>,
}

/// Summary of the current winning bid set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winning {
    pub total: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundInfo {
    pub cap: Balance,
    pub depositor: String,
    pub end: BlockNumber,
    pub first_slot: u32,
    pub last_slot: u32,
    pub raised: Balance,
    #[serde(default)]
    pub retiring: bool,
}

/// A crowdloan fund together with its parachain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub info: FundInfo,
    #[serde(default)]
    pub is_ended: bool,
    pub para_id: ParaId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainConsts {
    /// `crowdloan.minContribution`
    pub crowdloan_min_contribution: Balance,
    /// `auctions.endingPeriod`
    pub auctions_ending_period: BlockNumber,
    /// `babe.expectedBlockTime`
    pub expected_block_time_ms: u64,
    /// Every runtime constant, `section -> method -> display value`
    pub all: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for ChainConsts {
    fn default() -> Self {
        Self {
            crowdloan_min_contribution: Balance::ZERO,
            auctions_ending_period: 0,
            expected_block_time_ms: DEFAULT_BLOCK_TIME_MS,
            all: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainProperties {
    pub token_decimals: u8,
    pub token_symbol: String,
}

impl Default for ChainProperties {
    fn default() -> Self {
        Self {
            token_decimals: 18,
            token_symbol: "MUI".to_string(),
        }
    }
}

/// Everything the panels read, as of one best block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainSnapshot {
    pub chain: Option<String>,
    pub best_number: Option<BlockNumber>,
    pub total_issuance: Option<Balance>,
    pub auction_info: AuctionInfo,
    pub last_winner: Option<Winning>,
    pub funds: Vec<Campaign>,
    /// Addresses of the locally available accounts
    pub accounts: Vec<String>,
    pub consts: ChainConsts,
    pub properties: ChainProperties,
}

impl ChainSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "chain": "MetaMUI Testnet",
        "bestNumber": 1200,
        "totalIssuance": "1000000000000000000000",
        "auctionInfo": { "numAuctions": 3, "leasePeriod": 7, "endBlock": 1500 },
        "lastWinner": { "total": 2500 },
        "funds": [
            {
                "paraId": 2000,
                "isEnded": false,
                "info": {
                    "cap": "200", "depositor": "5Alice", "end": 1800,
                    "firstSlot": 7, "lastSlot": 10, "raised": 50, "retiring": false
                }
            }
        ],
        "accounts": ["5Alice"],
        "consts": {
            "crowdloanMinContribution": "0x0a",
            "auctionsEndingPeriod": 200,
            "all": { "balances": { "existentialDeposit": "500" } }
        }
    }"#;

    #[test]
    fn test_parse_sample_snapshot() {
        let snap = ChainSnapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snap.best_number, Some(1200));
        assert_eq!(
            snap.total_issuance,
            Some(Balance(1_000_000_000_000_000_000_000))
        );
        assert_eq!(snap.auction_info.end_block, Some(1500));
        assert_eq!(snap.funds[0].info.cap, Balance(200));
        assert_eq!(snap.funds[0].info.raised, Balance(50));
        assert_eq!(snap.consts.crowdloan_min_contribution, Balance(10));
        assert_eq!(snap.consts.expected_block_time_ms, DEFAULT_BLOCK_TIME_MS);
        assert_eq!(snap.properties.token_symbol, "MUI");
        assert_eq!(snap.consts.all["balances"]["existentialDeposit"], "500");
    }

    #[test]
    fn test_empty_snapshot_defaults() {
        let snap = ChainSnapshot::from_json("{}").unwrap();
        assert_eq!(snap.best_number, None);
        assert!(snap.funds.is_empty());
        assert_eq!(snap.auction_info, AuctionInfo::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChainSnapshot::load(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
