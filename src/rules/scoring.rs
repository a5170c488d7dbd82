//! End-of-game ranking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

use super::Participant;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tie at the top on both points and turns.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// One line of the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub victory_points: i32,
    pub turns: u32,
    pub winner: bool,
}

/// Participants ranked by points (descending), then turns taken (ascending).
///
/// Every participant equal to the leader on both keys is a winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings(Vec<Standing>);

impl Standings {
    pub(crate) fn rank(players: &PlayerMap<Participant>) -> Self {
        let mut ranked: Vec<Standing> = players
            .iter()
            .map(|(player, p)| Standing {
                player,
                name: p.name().to_string(),
                victory_points: p.victory_points(),
                turns: p.turns(),
                winner: false,
            })
            .collect();

        // Stable: seat order breaks exact ties for display.
        ranked.sort_by(|a, b| {
            b.victory_points
                .cmp(&a.victory_points)
                .then(a.turns.cmp(&b.turns))
        });

        if let Some((top_points, top_turns)) =
            ranked.first().map(|s| (s.victory_points, s.turns))
        {
            for standing in &mut ranked {
                standing.winner =
                    standing.victory_points == top_points && standing.turns == top_turns;
            }
        }

        Self(ranked)
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[Standing] {
        &self.0
    }

    pub fn winners(&self) -> impl Iterator<Item = &Standing> {
        self.0.iter().filter(|s| s.winner)
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        let mut winners: Vec<PlayerId> = self.winners().map(|s| s.player).collect();
        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Winners(winners)
        }
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, s) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. {} - {} points in {} turns{}",
                rank + 1,
                s.name,
                s.victory_points,
                s.turns,
                if s.winner { " (winner)" } else { "" }
            )?;
        }
        Ok(())
    }
}
