//! Final standings: turns the finish order and running scores into the
//! play-completion ranking, the ±30 adjustment, and the published score ranking.

use serde::{Deserialize, Serialize};

use crate::player::{Player, TeamId};
use crate::scoring::ScoreDelta;

/// One player's line in the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: usize,
    pub team: Option<TeamId>,
    /// 1-based play-completion rank
    pub finish_rank: usize,
    /// 1-based rank by final score
    pub score_rank: usize,
    /// Score after the ranking adjustment
    pub final_score: i64,
    /// Cards left in hand when the game ended
    pub hand_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: TeamId,
    pub members: Vec<usize>,
    /// Sum of the members' final scores
    pub score: i64,
    /// 1-based
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Sorted by play-completion rank
    pub by_finish: Vec<Standing>,
    /// Sorted by final score, highest first
    pub by_score: Vec<Standing>,
    /// Empty outside team mode
    pub teams: Vec<TeamStanding>,
    /// The ±30 delta applied to reach the final scores
    pub adjustment: ScoreDelta,
}

impl Standings {
    pub fn winner(&self) -> Option<usize> {
        self.by_score.first().map(|s| s.player)
    }

    pub fn standing_of(&self, player: usize) -> Option<&Standing> {
        self.by_finish.iter().find(|s| s.player == player)
    }
}

/// Computes the final standings.
///
/// Players are ordered by cards left (fewest first), ties broken by position in
/// `finish_order` with unplaced players last. The first of that order gains
/// [`crate::scoring::RANKING_ADJUSTMENT`] from the last; the published ranking
/// then re-sorts by the adjusted score, ties keeping play-completion order.
///
/// The returned `adjustment` has not been applied to `players`.
pub fn reconcile(players: &[Player], finish_order: &[usize]) -> Standings {
    let n = players.len();
    let position = |id: usize| {
        finish_order
            .iter()
            .position(|&p| p == id)
            .unwrap_or(usize::MAX)
    };

    let mut order: Vec<&Player> = players.iter().collect();
    order.sort_by_key(|p| (p.hand_size(), position(p.id()), p.id()));

    let adjustment = match (order.first(), order.last()) {
        (Some(first), Some(last)) => ScoreDelta::ranking_adjustment(n, first.id(), last.id()),
        _ => ScoreDelta::zero(n),
    };

    let by_finish: Vec<Standing> = order
        .iter()
        .enumerate()
        .map(|(i, p)| Standing {
            player: p.id(),
            team: p.team(),
            finish_rank: i + 1,
            score_rank: 0,
            final_score: p.score() + adjustment.get(p.id()),
            hand_size: p.hand_size(),
        })
        .collect();

    let mut by_score = by_finish.clone();
    by_score.sort_by(|a, b| {
        b.final_score
            .cmp(&a.final_score)
            .then(a.finish_rank.cmp(&b.finish_rank))
    });
    for (i, s) in by_score.iter_mut().enumerate() {
        s.score_rank = i + 1;
    }
    let mut by_finish = by_finish;
    for s in &mut by_finish {
        if let Some(ranked) = by_score.iter().find(|r| r.player == s.player) {
            s.score_rank = ranked.score_rank;
        }
    }

    Standings {
        teams: team_standings(&by_finish),
        by_finish,
        by_score,
        adjustment,
    }
}

fn team_standings(standings: &[Standing]) -> Vec<TeamStanding> {
    let mut teams: Vec<TeamStanding> = Vec::new();
    for s in standings {
        let Some(team) = s.team else { continue };
        match teams.iter_mut().find(|t| t.team == team) {
            Some(t) => {
                t.members.push(s.player);
                t.score += s.final_score;
            }
            None => teams.push(TeamStanding {
                team,
                members: vec![s.player],
                score: s.final_score,
                rank: 0,
            }),
        }
    }
    teams.sort_by(|a, b| b.score.cmp(&a.score).then(a.team.cmp(&b.team)));
    for (i, t) in teams.iter_mut().enumerate() {
        t.rank = i + 1;
        t.members.sort_unstable();
    }
    teams
}
