//! Game-model integration tests.
//!
//! These exercise the collaborator layer end to end: parsed values drive
//! strategies and guards, and the models keep their bookkeeping straight.

use strategos::{
    parse_interval_expression, parse_segmentation, Formula, GameError, GameModel,
    GuardedGameModel, LinearConstraint, MixedStrategy, MoveProfiles, PayoffTable,
    SegmentationStrategy, TransitionTable,
};

fn two_state_model() -> GameModel {
    // Two players with two moves each; matching moves stay, differing
    // moves toggle the state.
    let toggle = TransitionTable::new(vec![2, 2], vec![0, 1, 1, 0]).unwrap();
    let toggle_back = TransitionTable::new(vec![2, 2], vec![1, 0, 0, 1]).unwrap();
    GameModel::new(vec![toggle, toggle_back]).unwrap()
}

/// A segmentation strategy picks each player's move from an observation,
/// and the model records the walk.
#[test]
fn test_observation_driven_walk() {
    let mut model = two_state_model();

    let seg = parse_segmentation("0)").unwrap();
    let chooser = SegmentationStrategy::new(seg, vec![0usize, 1]).unwrap();

    // Observations below zero choose move 0, at or above choose move 1.
    for (observation, expected_move) in [(-1.0, 0), (3.5, 1), (-0.2, 0)] {
        let mv = *chooser.action_for(observation);
        assert_eq!(mv, expected_move);
        model.make_move(&[mv, mv]).unwrap();
    }

    // Matching moves never toggle the state.
    assert_eq!(model.current_state(), 0);
    assert_eq!(model.state_history().len(), 3);
    assert_eq!(model.move_history()[1].as_slice(), &[1, 1]);
}

/// Guards built from parsed interval expressions gate states on a
/// continuous observation.
#[test]
fn test_interval_guards() {
    let model = two_state_model();
    let flat = PayoffTable::new(vec![2, 2], vec![0.0; 8]).unwrap();

    // State 0 accepts observations in [0,1] or [10,11]; state 1 rejects
    // everything.
    let admissible = parse_interval_expression("[0,1]|[10,11]").unwrap();
    let guard0 = Formula::from(LinearConstraint::new(vec![1.0], admissible));
    let guard1 = Formula::Constant(false);

    let guarded =
        GuardedGameModel::new(model, vec![flat.clone(), flat], vec![guard0, guard1]).unwrap();

    assert!(guarded.guard_passes(&[0.5]));
    assert!(guarded.guard_passes(&[10.5]));
    assert!(!guarded.guard_passes(&[5.0]));
    assert!(!guarded.guard(1).unwrap().eval(&[0.5]));
}

/// Payoff history records the departing state's outcome for every move.
#[test]
fn test_payoff_bookkeeping() {
    let model = two_state_model();
    let zero_sum = PayoffTable::new(
        vec![2, 2],
        vec![1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
    )
    .unwrap();
    let flat = PayoffTable::new(vec![2, 2], vec![0.0; 8]).unwrap();
    let mut guarded = GuardedGameModel::new(model, vec![zero_sum, flat], vec![]).unwrap();

    guarded.make_move(&[1, 0]).unwrap(); // state 0, toggles to 1
    guarded.make_move(&[0, 0]).unwrap(); // state 1, flat payoff

    assert_eq!(guarded.payoff_history().len(), 2);
    assert_eq!(guarded.payoff_history()[0], vec![-1.0, 1.0]);
    assert_eq!(guarded.payoff_history()[1], vec![0.0, 0.0]);

    guarded.reset(0).unwrap();
    assert_eq!(guarded.current_state(), 0);
    assert!(guarded.payoff_history().is_empty());
    assert!(guarded.model().state_history().is_empty());
}

/// Profile iteration enumerates exactly the moves a payoff table accepts.
#[test]
fn test_profiles_match_tables() {
    let table = PayoffTable::new(vec![3, 2], vec![0.0; 12]).unwrap();

    let mut seen = 0;
    for profile in table.profiles() {
        assert!(table.outcome(&profile).is_ok());
        seen += 1;
    }
    assert_eq!(seen, 6);

    // Pinning player 1's move leaves player 0's three choices.
    let pinned: Vec<_> = MoveProfiles::with_fixed(vec![3, 2], &[(1, 1)])
        .unwrap()
        .collect();
    assert_eq!(pinned.len(), 3);
    assert!(pinned.iter().all(|p| p[1] == 1));
}

/// Mixed strategies select moves deterministically from supplied draws.
#[test]
fn test_mixed_strategy_drives_model() {
    let mut model = two_state_model();
    let strategy = MixedStrategy::new(vec![0.5, 0.5]).unwrap();

    // Fixed quantile draws stand in for the sampling the caller owns.
    for t in [0.1, 0.9, 0.4] {
        let mv = strategy.quantile(t);
        model.make_move(&[mv, mv]).unwrap();
    }
    assert_eq!(model.move_history().len(), 3);
    assert_eq!(model.move_history()[0].as_slice(), &[0, 0]);
    assert_eq!(model.move_history()[1].as_slice(), &[1, 1]);
}

/// Model snapshots clone cheaply and independently.
#[test]
fn test_snapshot_independence() {
    let mut model = two_state_model();
    model.make_move(&[0, 1]).unwrap();

    let snapshot = model.clone();
    model.make_move(&[1, 0]).unwrap();

    assert_eq!(snapshot.state_history().len(), 1);
    assert_eq!(model.state_history().len(), 2);
    assert_eq!(snapshot.current_state(), 1);
}

#[test]
fn test_model_error_paths() {
    let mut model = two_state_model();

    assert_eq!(
        model.make_move(&[0]),
        Err(GameError::ProfileLengthMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        model.make_move(&[0, 5]),
        Err(GameError::MoveOutOfRange {
            player: 1,
            chosen: 5,
            limit: 2
        })
    );
    assert_eq!(
        model.reset(9),
        Err(GameError::StateOutOfRange { state: 9, states: 2 })
    );

    let bad = TransitionTable::new(vec![2], vec![7, 0]).unwrap();
    assert_eq!(
        GameModel::new(vec![bad]).map(|_| ()),
        Err(GameError::TransitionOutOfRange {
            state: 0,
            target: 7,
            states: 1
        })
    );
}
