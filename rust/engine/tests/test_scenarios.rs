use guozha_engine::cards::{cards_of, Card, Rank, Rank::*};
use guozha_engine::config::GameConfig;
use guozha_engine::errors::GameError;
use guozha_engine::events::GameEvent;
use guozha_engine::game::{GameState, Phase};

/// Seats a started individual table; seat `i` gets `ranks[i]` with ids starting at `i * 100`.
fn table(ranks: &[&[Rank]]) -> GameState {
    let hands: Vec<Vec<Card>> = ranks
        .iter()
        .enumerate()
        .map(|(i, r)| cards_of(r, (i * 100) as u32))
        .collect();
    GameState::new(GameConfig::individual(hands.len()), hands)
        .expect("valid table")
        .start()
        .expect("started")
        .state
}

fn take(state: &GameState, seat: usize, rank: Rank, n: usize) -> Vec<Card> {
    state.players()[seat]
        .hand()
        .iter()
        .filter(|c| c.rank == rank)
        .take(n)
        .copied()
        .collect()
}

#[test]
fn single_three_beaten_by_four_then_round_resolves() {
    let s = table(&[&[Three, Three], &[Four, Seven], &[Three, Three], &[Three]]);

    let s = s.submit_play(0, &take(&s, 0, Three, 1)).unwrap().state;
    let s = s.submit_play(1, &take(&s, 1, Four, 1)).unwrap().state;
    assert_eq!(s.incumbent_owner(), Some(1));

    let s = s.submit_pass(2).unwrap().state;
    let s = s.submit_pass(3).unwrap().state;
    // play has not yet come back round to seat 1
    assert!(s.incumbent().is_some());
    assert_eq!(s.current_player(), 0);
    let t = s.submit_pass(0).unwrap();
    let s = t.state;

    assert!(matches!(
        t.events.last(),
        Some(GameEvent::RoundResolved { record }) if record.winner == 1 && record.total_pot == 0
    ));
    assert!(s.incumbent().is_none());
    assert_eq!(s.round_number(), 2);
    assert_eq!(s.players()[1].won_rounds().len(), 1);
    assert_eq!(s.pot(), 0);
    assert!(s.current_round_plays().is_empty());
    assert_eq!(s.current_player(), 1);
    assert_eq!(s.scores(), vec![-100; 4]);
}

#[test]
fn seven_fives_pay_the_pile_side_payment() {
    let mut fives = vec![Five; 7];
    fives.push(Six);
    let s = table(&[&fives, &[Three], &[Four], &[Eight]]);

    let t = s.submit_play(0, &take(&s, 0, Five, 7)).unwrap();
    let s = t.state;
    assert_eq!(s.scores(), vec![-10, -130, -130, -130]);
    assert_eq!(s.total_score(), -400);
    assert_eq!(s.pot(), 35);
    assert_eq!(s.players()[0].piles_played(), 1);
    assert_eq!(s.players()[0].side_payment_net(), 90);
    assert!(t.events.contains(&GameEvent::SidePaymentApplied {
        player: 0,
        multiplier: 1,
        gain: 90,
        loss_each: 30,
    }));
}

#[test]
fn last_holder_pays_remaining_points_to_second_finisher() {
    let s = table(&[&[Three], &[Four], &[Six], &[Ten]]);

    let s = s.submit_play(0, &take(&s, 0, Three, 1)).unwrap().state;
    let s = s.submit_play(1, &take(&s, 1, Four, 1)).unwrap().state;
    let t = s.submit_play(2, &take(&s, 2, Six, 1)).unwrap();
    let s = t.state;

    assert_eq!(s.phase(), Phase::Finished);
    assert_eq!(s.finish_order(), &[0, 1, 2, 3]);
    // seat 3: -10 transfer, -30 last place; seat 1: +10; seat 0: +30
    assert_eq!(s.scores(), vec![-70, -90, -100, -140]);
    assert!(t.events.contains(&GameEvent::RemainderTransferred {
        from: 3,
        to: 1,
        points: 10
    }));

    let standings = s.standings().unwrap();
    assert_eq!(standings.adjustment.as_slice(), &[30, 0, 0, -30]);
    let ranks: Vec<usize> = s.players().iter().filter_map(|p| p.finish_rank()).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(matches!(t.events.last(), Some(GameEvent::GameEnded { .. })));
}

#[test]
fn pass_is_refused_while_holding_a_beating_single() {
    let s = table(&[&[Three, Four], &[Two, Five]]);
    let s = s.submit_play(0, &take(&s, 0, Three, 1)).unwrap().state;
    let before = s.clone();

    assert_eq!(
        s.submit_pass(1).unwrap_err(),
        GameError::ForcedPlayViolation { player: 1 }
    );
    assert_eq!(s, before);
    assert!(!s.can_pass());
}
