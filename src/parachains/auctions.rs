// Auction summary
//
// Projects the current auction info onto the cards shown at the top of
// the Auctions panel.

use crate::chain::{AuctionInfo, Balance, BlockNumber, Winning};

/// Lease periods covered by one auction, counted from the first
pub const LEASE_PERIODS_PER_SLOT: BlockNumber = 3;

/// Value/total pair rendered as a progress gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub value: u128,
    pub total: u128,
}

impl Progress {
    /// Fill ratio in `[0, 1]`; zero total reads as empty
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.value as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionPhase {
    /// Before the end block: count down towards it
    Countdown {
        end_block: BlockNumber,
        best: BlockNumber,
    },
    /// Past the end block: progress through the ending period
    Ending {
        elapsed: BlockNumber,
        ending_period: BlockNumber,
    },
}

impl AuctionPhase {
    /// Blocks until the end block, or until the ending period closes
    pub fn blocks_remaining(&self) -> BlockNumber {
        match *self {
            AuctionPhase::Countdown { end_block, best } => end_block.saturating_sub(best),
            AuctionPhase::Ending {
                elapsed,
                ending_period,
            } => ending_period.saturating_sub(elapsed),
        }
    }

    pub fn progress(&self) -> Progress {
        match *self {
            AuctionPhase::Countdown { end_block, best } => Progress {
                value: best as u128,
                total: end_block as u128,
            },
            AuctionPhase::Ending {
                elapsed,
                ending_period,
            } => Progress {
                value: elapsed as u128,
                total: ending_period as u128,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionSummary {
    pub num_auctions: u32,
    /// (first, last) lease period of the running auction
    pub lease_range: Option<(BlockNumber, BlockNumber)>,
    /// Winning total against total issuance
    pub total: Option<Progress>,
    pub end_block: Option<BlockNumber>,
    pub phase: Option<AuctionPhase>,
}

/// Derive the summary cards; sections with missing inputs are `None`
pub fn summarize_auction(
    info: &AuctionInfo,
    last_winner: Option<&Winning>,
    best_number: Option<BlockNumber>,
    total_issuance: Option<Balance>,
    ending_period: BlockNumber,
) -> AuctionSummary {
    let mut summary = AuctionSummary {
        num_auctions: info.num_auctions,
        lease_range: None,
        total: None,
        end_block: info.end_block,
        phase: None,
    };

    // Nothing but the count is shown without a running auction
    let Some(end_block) = info.end_block else {
        return summary;
    };

    summary.lease_range = info
        .lease_period
        .map(|lp| (lp, lp.saturating_add(LEASE_PERIODS_PER_SLOT)));

    if let (Some(issuance), Some(winner)) = (total_issuance, last_winner) {
        summary.total = Some(Progress {
            value: winner.total.0,
            total: issuance.0,
        });
    }

    summary.phase = best_number.map(|best| {
        if best < end_block {
            AuctionPhase::Countdown { end_block, best }
        } else {
            AuctionPhase::Ending {
                elapsed: best - end_block,
                ending_period,
            }
        }
    });

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn running(lease_period: Option<BlockNumber>, end_block: BlockNumber) -> AuctionInfo {
        AuctionInfo {
            num_auctions: 4,
            lease_period,
            end_block: Some(end_block),
        }
    }

    #[test]
    fn test_no_running_auction_shows_count_only() {
        let info = AuctionInfo {
            num_auctions: 2,
            lease_period: Some(5),
            end_block: None,
        };
        let winner = Winning::default();
        let summary = summarize_auction(&info, Some(&winner), Some(100), Some(Balance(1)), 10);
        assert_eq!(summary.num_auctions, 2);
        assert_eq!(summary.lease_range, None);
        assert_eq!(summary.total, None);
        assert_eq!(summary.phase, None);
    }

    #[test]
    fn test_lease_range_offset() {
        let summary = summarize_auction(&running(Some(7), 100), None, None, None, 10);
        assert_eq!(summary.lease_range, Some((7, 10)));
        assert_eq!(summary.phase, None);
    }

    #[test]
    fn test_total_requires_winner_and_issuance() {
        let winner = Winning {
            total: Balance(250),
        };
        let info = running(None, 100);

        assert_eq!(summarize_auction(&info, Some(&winner), None, None, 10).total, None);
        assert_eq!(summarize_auction(&info, None, None, Some(Balance(1000)), 10).total, None);

        let total = summarize_auction(&info, Some(&winner), None, Some(Balance(1000)), 10)
            .total
            .unwrap();
        assert!((total.ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_phase_countdown_before_end() {
        let summary = summarize_auction(&running(None, 100), None, Some(60), None, 20);
        assert_eq!(
            summary.phase,
            Some(AuctionPhase::Countdown {
                end_block: 100,
                best: 60
            })
        );
        assert_eq!(summary.phase.unwrap().blocks_remaining(), 40);
    }

    #[test]
    fn test_phase_ending_at_and_after_end() {
        let at_end = summarize_auction(&running(None, 100), None, Some(100), None, 20);
        assert_eq!(
            at_end.phase,
            Some(AuctionPhase::Ending {
                elapsed: 0,
                ending_period: 20
            })
        );

        let later = summarize_auction(&running(None, 100), None, Some(115), None, 20);
        let phase = later.phase.unwrap();
        assert_eq!(phase.blocks_remaining(), 5);
        assert!((phase.progress().ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_zero_total() {
        assert_eq!(Progress { value: 5, total: 0 }.ratio(), 0.0);
        assert_eq!(Progress { value: 5, total: 2 }.ratio(), 1.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The countdown card is shown exactly while best < end.
        #[test]
        fn prop_phase_selection(best in 0u64..10_000, end in 0u64..10_000, period in 0u64..1_000) {
            let summary = summarize_auction(&running(None, end), None, Some(best), None, period);
            match summary.phase {
                Some(AuctionPhase::Countdown { .. }) => prop_assert!(best < end),
                Some(AuctionPhase::Ending { elapsed, .. }) => {
                    prop_assert!(best >= end);
                    prop_assert_eq!(elapsed, best - end);
                }
                None => prop_assert!(false, "phase missing"),
            }
        }
    }
}
