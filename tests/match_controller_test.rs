//! Tests for the match state machine.

use noughts::{
    Difficulty, GameError, Match, MatchEvent, MatchScore, MatchState, Opponent, RoundOutcome,
    TicTacToePlayer as Player, TransitionError, WinLine,
};
use std::sync::{Arc, Mutex};

/// X takes the top row while O plays 3 and 4.
const X_WINS: [usize; 5] = [0, 3, 1, 4, 2];

fn human_match() -> Match {
    Match::with_seed(Opponent::Human, Difficulty::Random, 1)
}

fn recorded(game: &mut Match) -> Arc<Mutex<Vec<MatchEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    game.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    events
}

fn play(game: &mut Match, moves: &[usize]) {
    for &index in moves {
        game.place_at(index).unwrap();
    }
}

#[test]
fn test_three_round_wins_end_the_match() {
    let mut game = human_match();

    for round in 1..=3 {
        play(&mut game, &X_WINS);
        assert_eq!(game.score().wins(Player::X), round);
        if round < 3 {
            assert_eq!(
                game.state(),
                MatchState::RoundOver(RoundOutcome::Won(Player::X))
            );
            game.new_round().unwrap();
        }
    }

    assert_eq!(game.state(), MatchState::MatchOver(Player::X));
    assert_eq!(game.score(), MatchScore { x: 3, o: 0 });

    let board = *game.board();
    let err = game.place_at(5).unwrap_err();
    assert!(err.is_invalid_transition());
    assert_eq!(*game.board(), board);
}

#[test]
fn test_new_round_rejected_after_match_over() {
    let mut game = human_match();
    for _ in 0..3 {
        play(&mut game, &X_WINS);
        let _ = game.new_round();
    }
    assert_eq!(
        game.new_round(),
        Err(GameError::InvalidStateTransition(TransitionError::MatchOver))
    );
    assert_eq!(game.state(), MatchState::MatchOver(Player::X));
}

#[test]
fn test_occupied_square_is_illegal_and_harmless() {
    let mut game = human_match();
    game.place_at(4).unwrap();
    let before = game.current_state();

    let err = game.place_at(4).unwrap_err();
    assert!(err.is_illegal_move());
    assert_eq!(game.current_state(), before);
    assert_eq!(game.state(), MatchState::AwaitingMove(Player::O));
}

#[test]
fn test_out_of_range_is_illegal() {
    let mut game = human_match();
    assert!(game.place_at(9).unwrap_err().is_illegal_move());
}

#[test]
fn test_placement_rejected_after_round_ends() {
    let mut game = human_match();
    play(&mut game, &X_WINS);
    assert_eq!(
        game.place_at(8),
        Err(GameError::InvalidStateTransition(TransitionError::RoundOver))
    );
}

#[test]
fn test_round_events_in_order() {
    let mut game = human_match();
    let events = recorded(&mut game);

    play(&mut game, &X_WINS);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(
        events[0],
        MatchEvent::MarkPlaced {
            index: 0,
            side: Player::X
        }
    );
    assert_eq!(
        events[5],
        MatchEvent::RoundOver {
            outcome: RoundOutcome::Won(Player::X),
            line: Some(WinLine::TopRow),
            score: MatchScore { x: 1, o: 0 },
        }
    );
}

#[test]
fn test_drawn_round_leaves_score() {
    let mut game = human_match();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.state(), MatchState::RoundOver(RoundOutcome::Drawn));
    assert_eq!(game.score(), MatchScore::default());
    assert_eq!(game.current_state().winning_line, None);
}

#[test]
fn test_computer_turn_flow() {
    let mut game = Match::with_seed(Opponent::Computer, Difficulty::Optimal, 5);
    let events = recorded(&mut game);

    game.place_at(4).unwrap();
    assert!(game.pending_computer_turn());
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&MatchEvent::ComputerToMove {
            difficulty: Difficulty::Optimal
        })
    );

    // The human cannot move for the computer.
    assert_eq!(
        game.place_at(0),
        Err(GameError::InvalidStateTransition(
            TransitionError::ComputerToMove(Player::O)
        ))
    );

    let reply = game.play_computer_turn().unwrap();
    assert_eq!(reply, 0);
    assert_eq!(game.state(), MatchState::AwaitingMove(Player::X));
    assert_eq!(
        game.play_computer_turn(),
        Err(GameError::InvalidStateTransition(TransitionError::NotComputerTurn))
    );
}

#[test]
fn test_switching_to_computer_on_o_turn_requests_move() {
    let mut game = human_match();
    let events = recorded(&mut game);
    game.place_at(4).unwrap();

    game.set_opponent(Opponent::Computer);
    let events = events.lock().unwrap();
    assert_eq!(
        events[events.len() - 2..],
        [
            MatchEvent::OpponentChanged(Opponent::Computer),
            MatchEvent::ComputerToMove {
                difficulty: Difficulty::Random
            },
        ]
    );
}

#[test]
fn test_new_match_resets_everything() {
    let mut game = human_match();
    play(&mut game, &X_WINS);
    game.set_difficulty(Difficulty::Optimal);

    game.new_match();
    let snapshot = game.current_state();
    assert_eq!(snapshot.score, MatchScore::default());
    assert_eq!(snapshot.state, MatchState::AwaitingMove(Player::X));
    assert_eq!(snapshot.board, noughts::Board::new());
    // Settings survive a restart.
    assert_eq!(snapshot.difficulty, Difficulty::Optimal);
}

#[test]
fn test_new_round_mid_round_abandons_board() {
    let mut game = human_match();
    play(&mut game, &[0, 4]);
    game.new_round().unwrap();
    assert_eq!(*game.board(), noughts::Board::new());
    assert_eq!(game.score(), MatchScore::default());
}

#[test]
fn test_o_wins_match_with_middle_column() {
    // X: 0, 2, 6   O: 1, 4, 7
    const O_WINS: [usize; 6] = [0, 1, 2, 4, 6, 7];
    let mut game = human_match();

    for round in 1..=3 {
        play(&mut game, &O_WINS);
        assert_eq!(game.score().wins(Player::O), round);
        if round < 3 {
            assert_eq!(
                game.current_state().winning_line,
                Some(WinLine::CenterColumn)
            );
            game.new_round().unwrap();
        }
    }

    assert_eq!(game.state(), MatchState::MatchOver(Player::O));
    assert_eq!(game.score(), MatchScore { x: 0, o: 3 });
    assert_eq!(
        game.place_at(3),
        Err(GameError::InvalidStateTransition(TransitionError::MatchOver))
    );
}

#[test]
fn test_optimal_computer_never_loses_to_random_human() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    let mut game = Match::with_seed(Opponent::Computer, Difficulty::Optimal, 17);
    let mut human = StdRng::seed_from_u64(99);
    let mut rounds = 0;

    while rounds < 60 {
        match game.state() {
            MatchState::AwaitingMove(Player::X) => {
                let index = *game.board().empty_indices().choose(&mut human).unwrap();
                game.place_at(index).unwrap();
                if game.pending_computer_turn() {
                    game.play_computer_turn().unwrap();
                }
            }
            MatchState::AwaitingMove(Player::O) => panic!("computer turn left pending"),
            MatchState::RoundOver(outcome) => {
                assert_ne!(outcome, RoundOutcome::Won(Player::X));
                rounds += 1;
                game.new_round().unwrap();
            }
            MatchState::MatchOver(winner) => {
                assert_eq!(winner, Player::O);
                assert_eq!(game.score().wins(Player::X), 0);
                rounds += 1;
                game.new_match();
            }
        }
    }
}
