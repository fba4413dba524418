//! # guozha-engine: Guozha Rule Engine
//!
//! Deterministic rules and turn state machine for Guozha, a shedding card game
//! for 2–8 players played with one 54-card deck per seat, individually or in two
//! alternating-seat teams.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, rank and suit types, rank notation
//! - [`deck`] - Combined decks and seeded dealing
//! - [`combination`] - Classification of card sets into singles, pairs, triples, bombs and piles
//! - [`compare`] - Whether a challenger beats the incumbent
//! - [`scoring`] - Pot values, pile side-payments and score deltas
//! - [`ledger`] - Open round pot and archived round history
//! - [`finish`] - Finish order and end-of-game detection
//! - [`ranking`] - Final standings and the ±30 ranking adjustment
//! - [`game`] - The turn state machine
//! - [`config`] - Table size, mode and starting score
//! - [`opener`] - Who opens after a round, including team takeover
//! - [`view`] - Per-seat views for AI seats
//! - [`moves`] - Legal-move enumeration
//! - [`events`] - Domain events emitted by transitions
//! - [`errors`] - Rejection and invariant errors
//!
//! ## Quick Start
//!
//! ```rust
//! use guozha_engine::cards::{cards_of, Rank};
//! use guozha_engine::config::GameConfig;
//! use guozha_engine::game::{GameState, Phase};
//!
//! let hands = vec![
//!     cards_of(&[Rank::Three, Rank::Four], 0),
//!     cards_of(&[Rank::Five, Rank::Two], 10),
//! ];
//! let state = GameState::new(GameConfig::individual(2), hands).unwrap();
//! let state = state.start().unwrap().state;
//!
//! let three = state.players()[0].hand()[0];
//! let next = state.submit_play(0, &[three]).unwrap().state;
//! assert_eq!(next.current_player(), 1);
//! assert_eq!(next.phase(), Phase::Playing);
//!
//! // Seat 1 holds cards that beat the three, so passing is refused
//! assert!(next.submit_pass(1).is_err());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Dealing is seeded, and transitions are pure, so replaying the same seed and
//! actions always reproduces the same state:
//!
//! ```rust
//! use guozha_engine::config::GameConfig;
//! use guozha_engine::game::GameState;
//!
//! let a = GameState::deal(GameConfig::default(), 7).unwrap();
//! let b = GameState::deal(GameConfig::default(), 7).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod combination;
pub mod compare;
pub mod config;
pub mod deck;
pub mod errors;
pub mod events;
pub mod finish;
pub mod game;
pub mod ledger;
pub mod moves;
pub mod opener;
pub mod player;
pub mod ranking;
pub mod scoring;
pub mod view;

pub use combination::{classify, ComboKind, Combination};
pub use config::{GameConfig, GameMode};
pub use errors::GameError;
pub use game::{Action, GameState, Phase, Transition};
