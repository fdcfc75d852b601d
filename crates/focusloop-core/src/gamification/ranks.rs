//! Rank threshold table.

use serde::{Deserialize, Serialize};

/// A named tier unlocked by crossing an XP threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub name: String,
    /// XP required to hold this rank.
    pub required: u64,
}

impl Rank {
    pub fn new(name: impl Into<String>, required: u64) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }
}

/// Where a given XP total sits in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankStanding {
    pub index: usize,
    pub name: String,
    pub required: u64,
    /// Fractional position between this rank's threshold and the next
    /// (1.0 at the top rank).
    pub progress: f64,
}

/// Ordered ascending rank table. Configuration data, not logic: swap the
/// table to retheme the ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankTable {
    ranks: Vec<Rank>,
}

impl RankTable {
    /// Build a table, sorting by threshold so lookups can assume ascending
    /// order.
    pub fn new(mut ranks: Vec<Rank>) -> Self {
        ranks.sort_by_key(|r| r.required);
        Self { ranks }
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// The highest rank whose threshold is `<= xp`, with fractional
    /// progress toward the next threshold.
    pub fn standing(&self, xp: u64) -> RankStanding {
        let index = self
            .ranks
            .iter()
            .rposition(|r| r.required <= xp)
            .unwrap_or(0);
        let current = &self.ranks[index];
        let progress = match self.ranks.get(index + 1) {
            Some(next) => {
                let span = (next.required - current.required) as f64;
                (((xp.saturating_sub(current.required)) as f64) / span).clamp(0.0, 1.0)
            }
            None => 1.0,
        };
        RankStanding {
            index,
            name: current.name.clone(),
            required: current.required,
            progress,
        }
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::new(vec![
            Rank::new("Initiate", 0),
            Rank::new("Apprentice", 100),
            Rank::new("Adept", 250),
            Rank::new("Veteran", 500),
            Rank::new("Master", 1000),
            Rank::new("Grandmaster", 2000),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_table() -> RankTable {
        RankTable::new(
            [0u64, 100, 200, 300, 400, 500]
                .into_iter()
                .enumerate()
                .map(|(i, required)| Rank::new(format!("Tier {i}"), required))
                .collect(),
        )
    }

    #[test]
    fn xp_250_resolves_halfway_through_tier_2() {
        let standing = flat_table().standing(250);
        assert_eq!(standing.index, 2);
        assert_eq!(standing.required, 200);
        assert!((standing.progress - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_xp_is_the_floor_rank() {
        let standing = flat_table().standing(0);
        assert_eq!(standing.index, 0);
        assert_eq!(standing.progress, 0.0);
    }

    #[test]
    fn top_rank_progress_is_one() {
        let standing = flat_table().standing(9999);
        assert_eq!(standing.index, 5);
        assert_eq!(standing.progress, 1.0);
    }

    #[test]
    fn exact_threshold_starts_the_rank() {
        let standing = flat_table().standing(300);
        assert_eq!(standing.index, 3);
        assert_eq!(standing.progress, 0.0);
    }

    #[test]
    fn table_sorts_unordered_input() {
        let table = RankTable::new(vec![Rank::new("B", 100), Rank::new("A", 0)]);
        assert_eq!(table.ranks()[0].name, "A");
        assert_eq!(table.standing(50).name, "A");
    }
}
