//! Priority Adjuster
//!
//! Up/down reordering of keepers that contest the same base round.

use serde::{Deserialize, Serialize};

use crate::domain::keeper_rounds::value_objects::RosterEntry;
use crate::domain::shared::{DomainError, PlayerId};

use super::StackingResolver;

/// Direction to move a keeper within its contest group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityMove {
    /// Toward winning the contested round.
    Up,
    /// Toward being displaced.
    Down,
}

/// Rewrites explicit priorities inside one base-round group.
#[derive(Debug, Clone, Copy)]
pub struct PriorityAdjuster {
    resolver: StackingResolver,
}

impl PriorityAdjuster {
    /// Create an adjuster that groups entries the same way `resolver` does.
    #[must_use]
    pub const fn new(resolver: StackingResolver) -> Self {
        Self { resolver }
    }

    /// Swap `player_id` with its neighbour in contest order, then renumber
    /// the group's priorities `0..n`.
    ///
    /// Returns `Ok(false)` without touching anything when the player is not
    /// a keeper or is already at the requested edge of its group.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the player is not on the worksheet.
    pub fn move_priority(
        &self,
        entries: &mut [RosterEntry],
        player_id: &PlayerId,
        direction: PriorityMove,
    ) -> Result<bool, DomainError> {
        let Some(target) = entries.iter().position(|e| &e.player_id == player_id) else {
            return Err(DomainError::NotFound {
                entity_type: "RosterEntry".to_string(),
                id: player_id.to_string(),
            });
        };
        if !entries[target].is_keeper() {
            return Ok(false);
        }

        let base = self.resolver.effective_base_round(&entries[target]);
        let mut group: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_keeper() && self.resolver.effective_base_round(e) == base)
            .map(|(idx, _)| idx)
            .collect();
        group.sort_by(|&a, &b| entries[a].contest_order(&entries[b]));

        let Some(pos) = group.iter().position(|&idx| idx == target) else {
            return Ok(false);
        };
        let swap_with = match direction {
            PriorityMove::Up if pos > 0 => pos - 1,
            PriorityMove::Down if pos + 1 < group.len() => pos + 1,
            _ => return Ok(false),
        };
        group.swap(pos, swap_with);

        for (rank, &idx) in group.iter().enumerate() {
            entries[idx].priority = Some(u32::try_from(rank).unwrap_or(u32::MAX));
        }

        tracing::debug!(
            player_id = %player_id,
            base_round = base.number(),
            ?direction,
            "Keeper priority moved"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keeper_rounds::value_objects::KeeperDecision;
    use crate::domain::shared::{Round, RoundSpace};

    fn adjuster() -> PriorityAdjuster {
        PriorityAdjuster::new(StackingResolver::new(RoundSpace::new(13).unwrap()))
    }

    fn keep(id: &str, base: u8, priority: u32) -> RosterEntry {
        RosterEntry::keep(id)
            .with_base_round(Round::new(base).unwrap())
            .with_priority(priority)
    }

    fn priorities(entries: &[RosterEntry]) -> Vec<Option<u32>> {
        entries.iter().map(|e| e.priority).collect()
    }

    #[test]
    fn move_up_swaps_with_previous_contestant() {
        let mut entries = vec![keep("a", 5, 0), keep("b", 5, 1), keep("c", 5, 2)];
        let moved = adjuster()
            .move_priority(&mut entries, &PlayerId::new("c"), PriorityMove::Up)
            .unwrap();
        assert!(moved);
        assert_eq!(priorities(&entries), vec![Some(0), Some(2), Some(1)]);
    }

    #[test]
    fn move_down_swaps_with_next_contestant() {
        let mut entries = vec![keep("a", 1, 0), keep("b", 1, 1)];
        adjuster()
            .move_priority(&mut entries, &PlayerId::new("a"), PriorityMove::Down)
            .unwrap();
        assert_eq!(priorities(&entries), vec![Some(1), Some(0)]);
    }

    #[test]
    fn edges_are_no_ops() {
        let mut entries = vec![keep("a", 5, 0), keep("b", 5, 1)];
        let adj = adjuster();
        assert!(
            !adj.move_priority(&mut entries, &PlayerId::new("a"), PriorityMove::Up)
                .unwrap()
        );
        assert!(
            !adj.move_priority(&mut entries, &PlayerId::new("b"), PriorityMove::Down)
                .unwrap()
        );
        assert_eq!(priorities(&entries), vec![Some(0), Some(1)]);
    }

    #[test]
    fn other_groups_are_untouched() {
        let mut entries = vec![
            keep("a", 5, 7),
            keep("b", 5, 9),
            keep("c", 8, 4),
            RosterEntry::keep("d").with_base_round(Round::new(8).unwrap()),
        ];
        adjuster()
            .move_priority(&mut entries, &PlayerId::new("b"), PriorityMove::Up)
            .unwrap();
        assert_eq!(priorities(&entries), vec![Some(1), Some(0), Some(4), None]);
    }

    #[test]
    fn unprioritized_entries_get_explicit_ranks_in_current_order() {
        let mut entries = vec![
            RosterEntry::keep("a"),
            RosterEntry::keep("b"),
            RosterEntry::keep("c"),
        ];
        adjuster()
            .move_priority(&mut entries, &PlayerId::new("c"), PriorityMove::Up)
            .unwrap();
        assert_eq!(priorities(&entries), vec![Some(0), Some(2), Some(1)]);
    }

    #[test]
    fn non_keeper_is_a_no_op() {
        let mut entries = vec![RosterEntry::new("a", KeeperDecision::Drop)];
        let moved = adjuster()
            .move_priority(&mut entries, &PlayerId::new("a"), PriorityMove::Up)
            .unwrap();
        assert!(!moved);
    }

    #[test]
    fn unknown_player_is_an_error() {
        let mut entries = vec![keep("a", 5, 0)];
        let err = adjuster()
            .move_priority(&mut entries, &PlayerId::new("zz"), PriorityMove::Up)
            .unwrap_err();
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn moving_up_changes_who_wins_the_round() {
        let space = RoundSpace::new(13).unwrap();
        let resolver = StackingResolver::new(space);
        let mut entries = vec![keep("a", 1, 0), keep("b", 1, 1)];

        PriorityAdjuster::new(resolver)
            .move_priority(&mut entries, &PlayerId::new("b"), PriorityMove::Up)
            .unwrap();
        let outcome = resolver.stack(&entries);

        assert!(outcome.entries[0].is_franchise_tag());
        assert!(!outcome.entries[1].is_franchise_tag());
    }
}
