//! Tests for board rules: win and draw detection.

use noughts::{
    Board, MoveSelector, RandomSelector, RoundInProgress, RoundOutcome, RoundResult, Square,
    TicTacToePlayer as Player, WinLine, check_winner, is_draw, is_full, outcome, winner,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

/// Every board reached while playing `rounds` random rounds.
fn random_boards(rounds: usize, seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::new();

    for _ in 0..rounds {
        let mut round = RoundInProgress::new();
        loop {
            boards.push(*round.board());
            let side = round.to_move();
            let index = RandomSelector::new(&mut rng)
                .select(round.board(), side)
                .expect("round in progress has an empty square");
            match round.place(index).expect("selector picks empty squares") {
                RoundResult::InProgress(next) => round = next,
                RoundResult::Finished(done) => {
                    boards.push(*done.board());
                    break;
                }
            }
        }
    }
    boards
}

fn board_from(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(index, player) in marks {
        board.place(index, player).unwrap();
    }
    board
}

#[test]
fn test_top_row_completes_win() {
    let mut board = board_from(&[(0, Player::X), (1, Player::X), (3, Player::O), (4, Player::O)]);
    assert_eq!(outcome(&board), RoundOutcome::InProgress);

    board.place(2, Player::X).unwrap();
    assert_eq!(outcome(&board), RoundOutcome::Won(Player::X));
    assert_eq!(winner(&board), Some((WinLine::TopRow, Player::X)));
    assert_eq!(WinLine::TopRow.indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    // X|O|X
    // X|O|O
    // O|X|X
    let board = board_from(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::O),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::X),
    ]);
    assert!(is_full(&board));
    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
    assert_eq!(outcome(&board), RoundOutcome::Drawn);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X|O|X
    // O|X|O
    // O|X|X  (main diagonal)
    let board = board_from(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::O),
        (4, Player::X),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::X),
    ]);
    assert!(is_full(&board));
    assert!(!is_draw(&board));
    assert_eq!(outcome(&board), RoundOutcome::Won(Player::X));
}

#[test]
fn test_draw_iff_full_and_no_winner() {
    for board in random_boards(200, 11) {
        let expected = is_full(&board) && check_winner(&board).is_none();
        assert_eq!(is_draw(&board), expected, "board:\n{}", board.display());
    }
}

#[test]
fn test_legal_play_never_gives_both_sides_a_line() {
    for board in random_boards(200, 23) {
        let owners: Vec<Player> = WinLine::iter().filter_map(|line| line.owner(&board)).collect();
        assert!(
            !(owners.contains(&Player::X) && owners.contains(&Player::O)),
            "board:\n{}",
            board.display()
        );
    }
}

#[test]
fn test_place_then_clear_is_empty() {
    let mut board = Board::new();
    board.place(4, Player::X).unwrap();
    board.place(0, Player::O).unwrap();
    board.clear();
    assert_eq!(board, Board::new());
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_occupied_square_leaves_board_unchanged() {
    let mut board = board_from(&[(4, Player::X)]);
    let before = board;
    assert!(board.place(4, Player::O).is_err());
    assert!(board.place(9, Player::O).is_err());
    assert_eq!(board, before);
}
