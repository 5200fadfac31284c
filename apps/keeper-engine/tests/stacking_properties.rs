//! Property-based tests for keeper stacking and the fee watermark.
//!
//! - Idempotence: stack(stack(x)) == stack(x)
//! - Uniqueness: no two slotted keepers share a round
//! - Round-1 boundary: N keepers at round 1 need N - 1 franchise tags
//! - Locality: reordering one contest group never moves another group
//! - Watermark: locked apron fees never decrease

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};

use keeper_engine::domain::cap_fees::SummaryInput;
use keeper_engine::{
    CapFeeCalculator, LeagueCapSettings, LeagueFeeSettings, LockedFees, Money, Player, PlayerId,
    Round, RoundSpace, RosterEntry, StackingResolver,
};
use proptest::prelude::*;

const ROUNDS: u8 = 13;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn resolver() -> StackingResolver {
    StackingResolver::new(RoundSpace::new(ROUNDS).unwrap())
}

fn keeper_strategy() -> impl Strategy<Value = (Option<u8>, Option<u32>)> {
    (
        prop::option::weighted(0.85, 1..=ROUNDS),
        prop::option::weighted(0.7, 0u32..6),
    )
}

fn worksheet_strategy() -> impl Strategy<Value = Vec<RosterEntry>> {
    prop::collection::vec(keeper_strategy(), 0..20).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (base, priority))| {
                let mut entry = RosterEntry::keep(format!("p{i}"));
                entry.base_round = base.map(|b| Round::new(b).unwrap());
                entry.priority = priority;
                entry
            })
            .collect()
    })
}

fn cap_settings() -> LeagueCapSettings {
    LeagueCapSettings {
        first_apron: Money::millions(195),
        second_apron: Money::millions(225),
        max: Money::millions(255),
        floor: Money::millions(170),
        base: None,
    }
}

fn fee_settings() -> LeagueFeeSettings {
    LeagueFeeSettings {
        franchise_tag_fee: Money::whole(15),
        redshirt_fee: Money::whole(10),
        redshirt_activation_fee: Money::ZERO,
        first_apron_fee: Money::whole(50),
        penalty_rate_per_m: Money::whole(2),
    }
}

// =============================================================================
// STACKING PROPERTY TESTS
// =============================================================================

mod stacking_properties {
    use super::*;

    proptest! {
        /// Re-running the resolver on its own output changes nothing.
        #[test]
        fn stacking_is_idempotent(entries in worksheet_strategy()) {
            let r = resolver();
            let first = r.stack(&entries);
            let second = r.stack(&first.entries);
            prop_assert_eq!(first, second);
        }

        /// Every keeper gets a round, and slotted keepers never share one.
        #[test]
        fn slotted_rounds_are_unique(entries in worksheet_strategy()) {
            let outcome = resolver().stack(&entries);
            let mut seen = HashSet::new();
            for entry in &outcome.entries {
                let resolution = entry.resolution.unwrap();
                prop_assert!(resolution.round.number() >= 1);
                prop_assert!(resolution.round.number() <= ROUNDS);
                if resolution.occupies_slot() {
                    prop_assert!(
                        seen.insert(resolution.round),
                        "round {} assigned twice",
                        resolution.round
                    );
                }
            }
        }

        /// Displacement never moves a keeper to an earlier round.
        #[test]
        fn displacement_never_moves_earlier(entries in worksheet_strategy()) {
            let r = resolver();
            let outcome = r.stack(&entries);
            for entry in &outcome.entries {
                let base = r.effective_base_round(entry);
                prop_assert!(entry.keeper_round().unwrap() >= base);
            }
        }

        /// N keepers at round 1: one keeps round 1, the rest are tagged.
        #[test]
        fn round_one_boundary(n in 1usize..10, priorities in prop::collection::vec(0u32..4, 10)) {
            let entries: Vec<RosterEntry> = (0..n)
                .map(|i| {
                    RosterEntry::keep(format!("p{i}"))
                        .with_base_round(Round::FIRST)
                        .with_priority(priorities[i])
                })
                .collect();
            let outcome = resolver().stack(&entries);

            let slotted = outcome
                .entries
                .iter()
                .filter(|e| e.keeper_round() == Some(Round::FIRST) && !e.is_franchise_tag())
                .count();
            prop_assert_eq!(slotted, 1);
            prop_assert_eq!(outcome.franchise_tags as usize, n - 1);
        }

        /// Rewriting priorities inside one group leaves every other group's
        /// resolutions untouched.
        #[test]
        fn priority_changes_are_local(
            entries in worksheet_strategy(),
            pick in any::<prop::sample::Index>(),
            new_priorities in prop::collection::vec(prop::option::of(0u32..6), 20),
        ) {
            prop_assume!(!entries.is_empty());
            let r = resolver();
            let target = r.effective_base_round(&entries[pick.index(entries.len())]);

            let mut reordered = entries.clone();
            for (entry, priority) in reordered.iter_mut().zip(&new_priorities) {
                if r.effective_base_round(entry) == target {
                    entry.priority = *priority;
                }
            }

            let before = r.stack(&entries);
            let after = r.stack(&reordered);
            for (b, a) in before.entries.iter().zip(&after.entries) {
                if r.effective_base_round(b) != target {
                    prop_assert_eq!(b.resolution, a.resolution, "{} moved", b.player_id);
                }
            }
            prop_assert_eq!(before.franchise_tags, after.franchise_tags);
        }
    }
}

// =============================================================================
// FEE WATERMARK PROPERTY TESTS
// =============================================================================

mod watermark_properties {
    use super::*;

    fn summary_for(
        salary_m: i64,
        locked: Option<&LockedFees>,
    ) -> keeper_engine::RosterSummary {
        let players: HashMap<PlayerId, Player> = [(
            PlayerId::new("a"),
            Player::new("a", "a", Money::millions(salary_m)),
        )]
        .into_iter()
        .collect();
        let entries = [RosterEntry::keep("a")];
        CapFeeCalculator::new(cap_settings(), fee_settings()).compute_summary(&SummaryInput {
            entries: &entries,
            players: &players,
            active_roster: None,
            trade_delta: Money::ZERO,
            franchise_tags: 0,
            locked,
        })
    }

    proptest! {
        /// Once locked, apron fees never fall below what was assessed.
        #[test]
        fn locked_fees_never_decrease(first_m in 150i64..260, second_m in 150i64..260) {
            let assessed = summary_for(first_m, None);
            let locked = LockedFees {
                first_apron_fee: assessed.fees.first_apron_fee,
                penalty_dues: assessed.fees.penalty_dues,
            };

            let later = summary_for(second_m, Some(&locked));
            prop_assert!(later.fees.first_apron_fee >= locked.first_apron_fee);
            prop_assert!(later.fees.penalty_dues >= locked.penalty_dues);
            prop_assert!(later.fees.total_fees >= assessed.fees.total_fees);

            let live = summary_for(second_m, None);
            prop_assert!(later.fees.first_apron_fee >= live.fees.first_apron_fee);
            prop_assert!(later.fees.penalty_dues >= live.fees.penalty_dues);
        }

        /// Started millions: one unit over the apron already costs a full
        /// million.
        #[test]
        fn over_second_apron_rounds_up(excess in 1i64..50_000_000) {
            let players: HashMap<PlayerId, Player> = [(
                PlayerId::new("a"),
                Player::new("a", "a", Money::millions(225) + Money::whole(excess)),
            )]
            .into_iter()
            .collect();
            let entries = [RosterEntry::keep("a")];
            let summary = CapFeeCalculator::new(cap_settings(), fee_settings()).compute_summary(
                &SummaryInput {
                    entries: &entries,
                    players: &players,
                    active_roster: None,
                    trade_delta: Money::ZERO,
                    franchise_tags: 0,
                    locked: None,
                },
            );
            let expected = u32::try_from((excess + 999_999) / 1_000_000).unwrap();
            prop_assert_eq!(summary.cap.over_second_apron_by_m, expected);
        }
    }
}
