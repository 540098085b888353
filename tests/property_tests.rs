use proptest::prelude::*;
use tui_tictactoe::core::{evaluate_outcome, Board, GameState, MoveError, WIN_LINES};
use tui_tictactoe::types::{CellPos, Outcome, Phase, Player, CELL_COUNT};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Arbitrary board contents: each cell empty, X or O.
fn cells() -> impl Strategy<Value = [Option<Player>; 9]> {
    prop::array::uniform9(prop::option::of(player()))
}

fn board_from(cells: &[Option<Player>; 9]) -> Board {
    let mut board = Board::new();
    for (pos, cell) in CellPos::ALL.iter().zip(cells) {
        if let Some(p) = cell {
            board.apply_move(*pos, *p).unwrap();
        }
    }
    board
}

proptest! {
    /// Property: a line of `player` always wins, whatever else is on the board
    #[test]
    fn any_line_wins(
        cells in cells(),
        line in 0..WIN_LINES.len(),
        who in player(),
        remaining in 0u8..=9,
    ) {
        let mut cells = cells;
        for &i in &WIN_LINES[line] {
            cells[i] = Some(who);
        }
        let board = board_from(&cells);
        prop_assert_eq!(evaluate_outcome(&board, who, remaining), Outcome::Won(who));
    }

    /// Property: no line for the mover and no moves left means draw
    #[test]
    fn no_line_and_no_moves_is_draw(cells in cells(), who in player()) {
        let board = board_from(&cells);
        prop_assume!(!board.has_line(who));
        prop_assert_eq!(evaluate_outcome(&board, who, 0), Outcome::Draw);
    }

    /// Property: no line for the mover and moves left means the round goes on
    #[test]
    fn no_line_with_moves_left_is_in_progress(
        cells in cells(),
        who in player(),
        remaining in 1u8..=9,
    ) {
        let board = board_from(&cells);
        prop_assume!(!board.has_line(who));
        prop_assert_eq!(evaluate_outcome(&board, who, remaining), Outcome::InProgress);
    }

    /// Property: accepted moves alternate strictly, rejected moves change nothing
    #[test]
    fn turns_alternate(seed in any::<u32>(), clicks in prop::collection::vec(0usize..9, 0..40)) {
        let mut game = GameState::new(seed);
        let mut expected_next = game.current_player();
        let mut accepted = 0u8;

        for i in clicks {
            let pos = CellPos::from_index(i).unwrap();
            let before = game.snapshot();
            match game.select_cell(pos) {
                Ok(_) => {
                    accepted += 1;
                    prop_assert_eq!(game.board().get(pos), Some(expected_next));
                    prop_assert_eq!(game.last_mover(), Some(expected_next));
                    expected_next = expected_next.other();
                    prop_assert_eq!(game.current_player(), expected_next);
                }
                Err(MoveError::Occupied(p)) => {
                    prop_assert_eq!(p, pos);
                    prop_assert_eq!(game.snapshot(), before);
                }
                Err(MoveError::RoundOver) => {
                    prop_assert_eq!(game.phase(), Phase::RoundOver);
                    prop_assert_eq!(game.snapshot(), before);
                }
            }
            prop_assert_eq!(game.moves_remaining(), CELL_COUNT - accepted);
            prop_assert_eq!(game.board().filled_count(), accepted as usize);
        }
    }

    /// Property: play-again always yields an empty board with 9 moves and
    /// keeps the scores
    #[test]
    fn play_again_resets_round(seed in any::<u32>(), clicks in prop::collection::vec(0usize..9, 0..30)) {
        let mut game = GameState::new(seed);
        for i in clicks {
            let _ = game.select_cell(CellPos::from_index(i).unwrap());
        }

        let scores = *game.scores();
        let round = game.round_id();
        let was_over = game.round_over();

        prop_assert_eq!(game.play_again(), was_over);
        if was_over {
            prop_assert_eq!(game.phase(), Phase::AwaitingMove);
            prop_assert_eq!(game.outcome(), Outcome::InProgress);
            prop_assert_eq!(game.moves_remaining(), CELL_COUNT);
            prop_assert!(game.board().cells().iter().all(|c| c.is_none()));
            prop_assert_eq!(game.round_id(), round + 1);
        } else {
            prop_assert_eq!(game.round_id(), round);
        }
        prop_assert_eq!(*game.scores(), scores);
    }

    /// Property: play-again flips a new coin, so over many rounds both
    /// players get to open
    #[test]
    fn play_again_varies_opener(seed in any::<u32>()) {
        let mut game = GameState::new(seed);
        let mut openers = [false; 2];
        for _ in 0..64 {
            for i in [0usize, 3, 1, 4, 2] {
                game.select_cell(CellPos::from_index(i).unwrap()).unwrap();
            }
            prop_assert!(game.play_again());
            match game.current_player() {
                Player::X => openers[0] = true,
                Player::O => openers[1] = true,
            }
        }
        prop_assert_eq!(openers, [true, true]);
    }

    /// Property: the same seed replays the same coin flips
    #[test]
    fn seeded_games_are_deterministic(seed in any::<u32>()) {
        let a = GameState::new(seed);
        let b = GameState::new(seed);
        prop_assert_eq!(a.current_player(), b.current_player());
    }
}
