//! Automated move selection and the human-vs-computer loop.

use tictactoe_engine::{
    FirstEmptySelector, Game, GameStatus, Mark, MoveError, MoveSelector, PlayerKind,
    RandomSelector,
};

#[test]
fn test_versus_computer_lineup() {
    let game = Game::versus_computer("Alice");

    assert_eq!(game.player(Mark::X).kind(), PlayerKind::Human);
    assert_eq!(game.player(Mark::X).name(), "Alice");
    assert_eq!(game.player(Mark::O).kind(), PlayerKind::Computer);
    assert!(game.player(Mark::O).is_computer());
}

#[test]
fn test_computer_replies_after_human_move() {
    let mut game = Game::versus_computer("Alice");
    let mut selector = RandomSelector::new(42);

    let status = game.play(4, &mut selector).unwrap();

    // Human moved, computer replied: two squares taken, human to move again.
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.board().empty_positions().len(), 7);
    assert_eq!(game.current_player_name(), "Alice");
}

#[test]
fn test_rejected_human_move_gets_no_reply() {
    let mut game = Game::versus_computer("Alice");
    let mut selector = RandomSelector::new(42);
    game.play(4, &mut selector).unwrap();

    let taken = 9 - game.board().empty_positions().len();
    let result = game.play(4, &mut selector);

    assert_eq!(result, Err(MoveError::Occupied(4)));
    assert_eq!(9 - game.board().empty_positions().len(), taken);
    assert_eq!(game.current_player_name(), "Alice");
}

#[test]
fn test_versus_computer_runs_to_completion() {
    let mut game = Game::versus_computer("Alice");
    let mut selector = RandomSelector::new(7);

    while !game.is_over() {
        let position = game.board().empty_positions()[0];
        game.play(position, &mut selector).unwrap();
    }

    match game.status() {
        GameStatus::Won(mark) => {
            assert_eq!(game.winner_name(), Some(game.player(mark).name()));
        }
        GameStatus::Draw => assert_eq!(game.winner_name(), None),
        GameStatus::InProgress => unreachable!(),
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play_out = |seed: u64| {
        let mut game = Game::versus_computer("Alice");
        let mut selector = RandomSelector::new(seed);
        while !game.is_over() {
            let position = game.board().empty_positions()[0];
            game.play(position, &mut selector).unwrap();
        }
        (game.status(), game.board().clone())
    };

    assert_eq!(play_out(42), play_out(42));
}

#[test]
fn test_auto_move_plays_current_turn() {
    let mut game = Game::new("Alice", "Bob");
    let mut selector = FirstEmptySelector;

    let position = game.auto_move(&mut selector).unwrap();

    assert_eq!(position, 0);
    assert_eq!(game.current_player_name(), "Bob");
}

#[test]
fn test_auto_move_rejected_when_game_over() {
    let mut game = Game::new("Alice", "Bob");
    for pos in [0, 3, 1, 4, 2] {
        game.make_move(pos).unwrap();
    }

    let mut selector = FirstEmptySelector;
    assert_eq!(game.auto_move(&mut selector), Err(MoveError::GameOver));
}

#[test]
fn test_bad_selector_rejected_state_unchanged() {
    /// Selector that always aims at the center, legal or not.
    struct Stubborn;

    impl MoveSelector for Stubborn {
        fn select(&mut self, _board: &tictactoe_engine::Board) -> Option<usize> {
            Some(4)
        }
    }

    let mut game = Game::new("Alice", "Bob");
    game.make_move(4).unwrap();

    let mut selector = Stubborn;
    assert_eq!(game.auto_move(&mut selector), Err(MoveError::Occupied(4)));
    assert_eq!(game.current_player_name(), "Bob");
}
