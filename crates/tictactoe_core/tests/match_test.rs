//! Tests for human-vs-computer rounds and score keeping.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{
    Difficulty, Match, MoveError, MoveSelector, Outcome, Player, Position, RoundResult, Scoreboard,
};

fn expert() -> MoveSelector<StdRng> {
    MoveSelector::new(Difficulty::Expert, StdRng::seed_from_u64(1))
}

#[test]
fn test_human_first_round_starts_with_human() {
    let game = Match::new(Player::X, true);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.computer(), Player::O);
    assert!(!game.is_computer_turn());
}

#[test]
fn test_computer_first_round_starts_with_computer() {
    let mut game = Match::new(Player::X, false);
    assert!(game.is_computer_turn());

    let (pos, outcome) = game.play_computer(&mut expert()).expect("computer's turn");
    assert_eq!(pos, Position::Center);
    assert_eq!(outcome, Outcome::Ongoing);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.history(), &[Position::Center]);
}

#[test]
fn test_out_of_turn_moves_are_rejected() {
    let mut game = Match::new(Player::O, true);
    assert_eq!(
        game.play_computer(&mut expert()),
        Err(MoveError::NotYourTurn(Player::X))
    );

    game.play_human(Position::TopLeft).expect("human's turn");
    assert_eq!(
        game.play_human(Position::Center),
        Err(MoveError::NotYourTurn(Player::O))
    );
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_occupied_square_is_rejected_without_change() {
    let mut game = Match::new(Player::X, false);
    game.play_computer(&mut expert()).expect("computer's turn");
    let before = *game.board();

    assert_eq!(
        game.play_human(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(*game.board(), before);
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_expert_wins_when_human_plays_badly() {
    let mut game = Match::new(Player::X, true);
    let mut selector = expert();

    // Human: 1, 2 ... computer answers center, then blocks 3, then wins.
    game.play_human(Position::TopLeft).unwrap();
    assert_eq!(game.play_computer(&mut selector).unwrap().0, Position::Center);
    game.play_human(Position::TopCenter).unwrap();
    assert_eq!(game.play_computer(&mut selector).unwrap().0, Position::TopRight);
    game.play_human(Position::MiddleRight).unwrap();
    let (pos, outcome) = game.play_computer(&mut selector).unwrap();
    assert_eq!(pos, Position::BottomLeft);
    assert_eq!(outcome, Outcome::Won(Player::O));

    assert_eq!(game.play_human(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(game.play_computer(&mut selector), Err(MoveError::GameOver));
    assert!(!game.is_computer_turn());
}

#[test]
fn test_restart_clears_and_sets_opener() {
    let mut game = Match::new(Player::X, true);
    game.play_human(Position::Center).unwrap();
    game.restart(false);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert!(game.history().is_empty());
    assert_eq!(game.board().move_count(), 0);
    assert!(game.is_computer_turn());
}

#[test]
fn test_scoreboard_records_finished_rounds() {
    let mut score = Scoreboard::new();
    assert_eq!(score.record(Outcome::Ongoing, Player::X), None);
    assert_eq!(score.record(Outcome::Won(Player::X), Player::X), Some(RoundResult::HumanWin));
    assert_eq!(score.record(Outcome::Won(Player::O), Player::X), Some(RoundResult::ComputerWin));
    assert_eq!(score.record(Outcome::Won(Player::O), Player::X), Some(RoundResult::ComputerWin));
    assert_eq!(score.record(Outcome::Draw, Player::X), Some(RoundResult::Tie));

    assert_eq!(score.human_wins, 1);
    assert_eq!(score.computer_wins, 2);
    assert_eq!(score.ties, 1);
    assert_eq!(score.total(), 4);
    assert_eq!(score.to_string(), "Human: 1  Ties: 1  Computer: 2");

    score.clear();
    assert_eq!(score, Scoreboard::default());
}

#[test]
fn test_move_error_messages() {
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(MoveError::NotYourTurn(Player::O).to_string(), "It's not O's turn");
}

#[test]
fn test_scoreboard_saturates_at_max() {
    let mut score = Scoreboard {
        human_wins: u32::MAX,
        computer_wins: 0,
        ties: 1,
    };
    assert_eq!(score.total(), u32::MAX);

    score.ties = u32::MAX;
    assert_eq!(score.record(Outcome::Draw, Player::X), Some(RoundResult::Tie));
    assert_eq!(score.ties, u32::MAX);
    assert_eq!(score.record(Outcome::Won(Player::X), Player::X), Some(RoundResult::HumanWin));
    assert_eq!(score.human_wins, u32::MAX);
    assert_eq!(score.total(), u32::MAX);
}
