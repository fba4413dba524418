//! The turn state machine. A [`GameState`] is an immutable value: every accepted
//! action produces a new state plus the events it caused, and every rejected
//! action leaves the input untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::cards::{format_cards, Card, Rank};
use crate::combination::{classify, Combination};
use crate::compare::require_beats;
use crate::config::GameConfig;
use crate::deck::Dealer;
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::finish::{detect_end, remaining_by_hand_size, FinishTracker, GameEnd};
use crate::ledger::{PlayRecord, RoundLedger, RoundRecord};
use crate::moves::{has_beating_play, legal_plays};
use crate::player::{next_active_seat, Player};
use crate::ranking::{reconcile, Standings};
use crate::scoring::{pile_side_payment, ScoreDelta};
use crate::view::PlayerView;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Waiting,
    Playing,
    Finished,
}

/// A player action, for replaying recorded games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Start,
    Play { player: usize, cards: Vec<Card> },
    Pass { player: usize },
}

/// Result of an accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    phase: Phase,
    players: Vec<Player>,
    /// Seat expected to act next
    current_player: usize,
    /// Combination to beat; `None` when the current player opens freely
    incumbent: Option<Combination>,
    incumbent_owner: Option<usize>,
    /// Seats that passed since the incumbent was played
    passed: Vec<usize>,
    ledger: RoundLedger,
    finish: FinishTracker,
    /// Cards dealt at setup
    card_total: usize,
    end: Option<GameEnd>,
    standings: Option<Standings>,
}

impl GameState {
    /// Seats the table with pre-dealt hands. Seat `i` receives `hands[i]`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSetup`] for an invalid configuration, a hand count
    /// that does not match the table, empty hands, repeated card ids, or more
    /// copies of a rank than the combined decks contain.
    pub fn new(config: GameConfig, hands: Vec<Vec<Card>>) -> Result<Self, GameError> {
        config.validate()?;
        if hands.len() != config.player_count {
            return Err(GameError::InvalidSetup(format!(
                "expected {} hands, got {}",
                config.player_count,
                hands.len()
            )));
        }
        if let Some(seat) = hands.iter().position(Vec::is_empty) {
            return Err(GameError::InvalidSetup(format!("seat {seat} was dealt no cards")));
        }

        let mut ids = HashSet::new();
        let mut per_rank = [0usize; 15];
        for card in hands.iter().flatten() {
            if !ids.insert(card.id) {
                return Err(GameError::InvalidSetup(format!(
                    "card id {} dealt more than once",
                    card.id
                )));
            }
            per_rank[card.rank as usize - Rank::Three as usize] += 1;
        }
        let decks = config.player_count;
        for (count, rank) in per_rank.iter().zip(crate::cards::ALL_RANKS) {
            let limit = if rank.is_joker() { decks } else { decks * 4 };
            if *count > limit {
                return Err(GameError::InvalidSetup(format!(
                    "{count} cards of rank {rank} exceed {decks} decks"
                )));
            }
        }

        let card_total = ids.len();
        let players = hands
            .into_iter()
            .enumerate()
            .map(|(seat, hand)| {
                Player::new(seat, hand, config.starting_score, config.team_of(seat))
            })
            .collect();
        Ok(Self {
            current_player: config.first_player,
            config,
            phase: Phase::Waiting,
            players,
            incumbent: None,
            incumbent_owner: None,
            passed: Vec::new(),
            ledger: RoundLedger::new(),
            finish: FinishTracker::new(),
            card_total,
            end: None,
            standings: None,
        })
    }

    /// Deals one deck per seat with a seeded shuffle and seats the table.
    pub fn deal(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let hands = Dealer::new_with_seed(seed).deal(config.player_count);
        Self::new(config, hands)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
    pub fn current_player(&self) -> usize {
        self.current_player
    }
    pub fn incumbent(&self) -> Option<&Combination> {
        self.incumbent.as_ref()
    }
    pub fn incumbent_owner(&self) -> Option<usize> {
        self.incumbent_owner
    }
    pub fn pot(&self) -> u32 {
        self.ledger.pot()
    }
    pub fn round_number(&self) -> u32 {
        self.ledger.round_number()
    }
    pub fn current_round_plays(&self) -> &[PlayRecord] {
        self.ledger.plays()
    }
    pub fn round_history(&self) -> &[RoundRecord] {
        self.ledger.history()
    }
    pub fn finish_order(&self) -> &[usize] {
        self.finish.order()
    }
    pub fn card_total(&self) -> usize {
        self.card_total
    }
    pub fn end_reason(&self) -> Option<GameEnd> {
        self.end
    }
    /// Final standings, once the game has finished.
    pub fn standings(&self) -> Option<&Standings> {
        self.standings.as_ref()
    }
    pub fn scores(&self) -> Vec<i64> {
        self.players.iter().map(Player::score).collect()
    }
    pub fn total_score(&self) -> i64 {
        self.players.iter().map(Player::score).sum()
    }

    /// Combinations the current player may submit right now.
    pub fn legal_plays(&self) -> Vec<Combination> {
        match (self.phase, self.players.get(self.current_player)) {
            (Phase::Playing, Some(p)) => legal_plays(p.hand(), self.incumbent.as_ref()),
            _ => Vec::new(),
        }
    }

    /// True when the current player is allowed to pass.
    pub fn can_pass(&self) -> bool {
        match (&self.incumbent, self.players.get(self.current_player)) {
            (Some(inc), Some(p)) if self.phase == Phase::Playing => {
                !has_beating_play(p.hand(), inc)
            }
            _ => false,
        }
    }

    pub fn view_for(&self, seat: usize) -> Option<PlayerView> {
        let me = self.players.get(seat)?;
        Some(PlayerView {
            seat,
            phase: self.phase,
            mode: self.config.mode,
            current_player: self.current_player,
            hand: me.hand().to_vec(),
            incumbent: self.incumbent.clone(),
            incumbent_owner: self.incumbent_owner,
            pot: self.ledger.pot(),
            round_number: self.ledger.round_number(),
            hand_sizes: self.players.iter().map(Player::hand_size).collect(),
            scores: self.scores(),
            teams: self.players.iter().map(Player::team).collect(),
            finish_order: self.finish.order().to_vec(),
            all_hands: self
                .config
                .perfect_information
                .then(|| self.players.iter().map(|p| p.hand().to_vec()).collect()),
        })
    }

    pub fn apply(&self, action: &Action) -> Result<Transition, GameError> {
        match action {
            Action::Start => self.start(),
            Action::Play { player, cards } => self.submit_play(*player, cards),
            Action::Pass { player } => self.submit_pass(*player),
        }
    }

    /// Moves a seated table into play.
    pub fn start(&self) -> Result<Transition, GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::PhaseMismatch { phase: self.phase });
        }
        let mut next = self.clone();
        next.phase = Phase::Playing;
        next.check_invariants()?;
        info!(
            players = next.players.len(),
            mode = next.config.mode.as_str(),
            first = next.current_player,
            "game started"
        );
        let events = vec![GameEvent::GameStarted {
            player_count: next.players.len(),
            mode: next.config.mode,
            first_player: next.current_player,
        }];
        Ok(Transition { state: next, events })
    }

    /// Submits a play for `player`.
    ///
    /// The cards must form a legal combination held by the player and, unless
    /// the player is opening, beat the incumbent. Playing the last card records
    /// the finish and may end the game, in which case the returned state is
    /// [`Phase::Finished`] and carries the final standings.
    pub fn submit_play(&self, player: usize, cards: &[Card]) -> Result<Transition, GameError> {
        self.try_play(player, cards).inspect_err(|e| {
            debug!(player, cards = %format_cards(cards), error = %e, "play rejected");
        })
    }

    /// Passes for `player`. Passing is refused while opening and while the
    /// player holds anything that beats the incumbent.
    pub fn submit_pass(&self, player: usize) -> Result<Transition, GameError> {
        self.try_pass(player)
            .inspect_err(|e| debug!(player, error = %e, "pass rejected"))
    }

    fn expect_turn(&self, player: usize) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::PhaseMismatch { phase: self.phase });
        }
        if player != self.current_player {
            return Err(GameError::OutOfTurn {
                expected: self.current_player,
                actual: player,
            });
        }
        Ok(())
    }

    fn try_play(&self, player: usize, cards: &[Card]) -> Result<Transition, GameError> {
        self.expect_turn(player)?;
        let combo = classify(cards)?;
        if self.incumbent_owner != Some(player) {
            require_beats(&combo, self.incumbent.as_ref())?;
        }

        let mut next = self.clone();
        let mut events = Vec::new();
        next.players[player].remove_cards(combo.cards())?;

        let opened = next.incumbent.is_none();
        let contribution = next.ledger.record_play(player, &combo);
        debug!(
            player,
            combination = %combo,
            pot = next.ledger.pot(),
            "play accepted"
        );

        let n = next.players.len();
        let side_payment = pile_side_payment(combo.size(), n);
        events.push(GameEvent::PlaySubmitted {
            player,
            combination: combo.clone(),
            pot_contribution: contribution,
            opened,
        });
        if let Some(payment) = side_payment {
            let delta = ScoreDelta::side_payment(player, &payment, n);
            delta.apply(&mut next.players);
            for (seat, p) in next.players.iter_mut().enumerate() {
                p.record_side_payment(delta.get(seat), seat == player);
            }
            debug!(player, gain = payment.gain, "pile side-payment settled");
            events.push(GameEvent::SidePaymentApplied {
                player,
                multiplier: payment.multiplier,
                gain: payment.gain,
                loss_each: payment.loss_each,
            });
        }

        next.incumbent = Some(combo);
        next.incumbent_owner = Some(player);
        next.passed.clear();

        if !next.players[player].has_cards() {
            let position = next.finish.record(player)?;
            next.players[player].set_finish_rank(position + 1);
            debug!(player, position, "player finished");
            events.push(GameEvent::PlayerFinished { player, position });

            if let Some(end) = detect_end(&next.players, next.config.mode) {
                next.finish_game(end, &mut events)?;
                next.check_invariants()?;
                return Ok(Transition { state: next, events });
            }
        }

        next.current_player = next.next_seat_after(player)?;
        next.check_invariants()?;
        Ok(Transition { state: next, events })
    }

    fn try_pass(&self, player: usize) -> Result<Transition, GameError> {
        self.expect_turn(player)?;
        let (Some(incumbent), Some(owner)) = (self.incumbent.as_ref(), self.incumbent_owner)
        else {
            return Err(GameError::MustOpen { player });
        };
        if has_beating_play(self.players[player].hand(), incumbent) {
            return Err(GameError::ForcedPlayViolation { player });
        }

        let mut next = self.clone();
        let mut events = vec![GameEvent::Passed { player }];
        next.passed.push(player);
        debug!(player, "passed");

        let everyone_passed = next
            .players
            .iter()
            .filter(|p| p.has_cards() && p.id() != owner)
            .all(|p| next.passed.contains(&p.id()));

        if everyone_passed {
            let record = next.resolve_round(owner);
            events.push(GameEvent::RoundResolved { record });
            next.current_player = next
                .config
                .mode
                .opener()
                .pick_next_opener(&next, owner)
                .ok_or_else(|| GameError::InvariantViolation("no seat can open".into()))?;
        } else {
            next.current_player = next.next_seat_after(player)?;
        }
        next.check_invariants()?;
        Ok(Transition { state: next, events })
    }

    fn next_seat_after(&self, seat: usize) -> Result<usize, GameError> {
        next_active_seat(&self.players, seat)
            .ok_or_else(|| GameError::InvariantViolation("no player holds cards".into()))
    }

    /// Awards the pot to `winner`, archives the round, and clears the table.
    fn resolve_round(&mut self, winner: usize) -> RoundRecord {
        let record = self.ledger.resolve(winner);
        ScoreDelta::pot_award(self.players.len(), winner, record.total_pot)
            .apply(&mut self.players);
        self.players[winner].push_won_round(record.clone());
        self.incumbent = None;
        self.incumbent_owner = None;
        self.passed.clear();
        debug!(
            round = record.round_number,
            winner,
            pot = record.total_pot,
            "round resolved"
        );
        record
    }

    fn finish_game(&mut self, end: GameEnd, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        if let Some(owner) = self.incumbent_owner {
            let record = self.resolve_round(owner);
            events.push(GameEvent::RoundResolved { record });
        }

        match end {
            GameEnd::LastHolder { player: holder } => {
                // The second finisher collects; with two seats the holder is second.
                if let Some(&recipient) = self.finish.order().get(1) {
                    let points = self.players[holder].hand_points();
                    ScoreDelta::transfer(self.players.len(), holder, recipient, i64::from(points))
                        .apply(&mut self.players);
                    debug!(from = holder, to = recipient, points, "remaining points transferred");
                    events.push(GameEvent::RemainderTransferred {
                        from: holder,
                        to: recipient,
                        points,
                    });
                }
                self.finish.complete_with(&[holder])?;
            }
            GameEnd::TeamSweep { .. } => {
                let remaining = remaining_by_hand_size(&self.players);
                self.finish.complete_with(&remaining)?;
            }
        }

        let standings = reconcile(&self.players, self.finish.order());
        standings.adjustment.apply(&mut self.players);
        for s in &standings.by_finish {
            self.players[s.player].set_finish_rank(s.finish_rank);
        }
        self.phase = Phase::Finished;
        self.end = Some(end);
        info!(
            rounds = self.ledger.history().len(),
            winner = ?standings.winner(),
            reason = ?end,
            "game ended"
        );
        events.push(GameEvent::GameEnded {
            reason: end,
            standings: standings.clone(),
        });
        self.standings = Some(standings);
        Ok(())
    }

    /// Verifies the structural invariants of the state.
    ///
    /// # Errors
    ///
    /// [`GameError::InvariantViolation`] naming the first broken invariant.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let violation = |msg: String| Err(GameError::InvariantViolation(msg));

        let in_hands: usize = self.players.iter().map(Player::hand_size).sum();
        let recorded = self.ledger.cards_recorded();
        if in_hands + recorded != self.card_total {
            return violation(format!(
                "card count drifted: {in_hands} in hands + {recorded} played != {}",
                self.card_total
            ));
        }

        let order = self.finish.order();
        let unique: HashSet<usize> = order.iter().copied().collect();
        if unique.len() != order.len() {
            return violation(format!("duplicate finish order entry in {order:?}"));
        }
        if self.phase == Phase::Finished {
            if order.len() != self.players.len() {
                return violation("finish order incomplete at game end".into());
            }
        } else {
            for p in &self.players {
                if unique.contains(&p.id()) == p.has_cards() {
                    return violation(format!(
                        "player {} finish entry disagrees with hand of {}",
                        p.id(),
                        p.hand_size()
                    ));
                }
            }
        }

        if self.incumbent.is_some() != self.incumbent_owner.is_some() {
            return violation("incumbent play and owner out of step".into());
        }
        if self.incumbent.is_some() != self.ledger.is_open() {
            return violation("incumbent present without round plays or vice versa".into());
        }
        let contributions: u32 = self.ledger.plays().iter().map(|p| p.pot_contribution).sum();
        if contributions != self.ledger.pot() {
            return violation(format!(
                "pot {} does not match contributions {contributions}",
                self.ledger.pot()
            ));
        }
        if let Some(owner) = self.incumbent_owner {
            if self.passed.contains(&owner) {
                return violation(format!("incumbent owner {owner} recorded as passed"));
            }
        }
        Ok(())
    }
}
