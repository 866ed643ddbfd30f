// Parachain views: auction summary and crowdloan funds

pub mod auctions;
pub mod crowdloan;

pub use auctions::{summarize_auction, AuctionPhase, AuctionSummary, Progress};
pub use crowdloan::{derive_rows, fund_action, FundActionKind, FundRow, FundStatus, TxIntent};
