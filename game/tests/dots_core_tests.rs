use dotty::dots_core::{
    DotStatus, DotsGame, GridPos, GRID_COLS, GRID_ROWS, NUM_COLORS, STARTING_MOVES,
};

/// A board where every dot is color 0, so any orthogonal path connects.
fn uniform_game() -> DotsGame {
    let mut game = DotsGame::new(42);
    game.set_grid_for_test([[0; GRID_COLS]; GRID_ROWS]);
    game
}

#[test]
fn first_dot_is_always_added() {
    let mut game = uniform_game();
    assert_eq!(game.process_dot(GridPos::new(3, 3)), DotStatus::Added);
    assert_eq!(game.selected_dots(), &[GridPos::new(3, 3)]);
}

#[test]
fn adjacent_same_color_dots_extend_the_selection() {
    let mut game = uniform_game();
    game.process_dot(GridPos::new(2, 2));
    assert_eq!(game.process_dot(GridPos::new(2, 3)), DotStatus::Added);
    assert_eq!(game.process_dot(GridPos::new(3, 3)), DotStatus::Added);
    assert_eq!(game.selected_dots().len(), 3);
}

#[test]
fn dragging_back_onto_the_previous_dot_backtracks() {
    let mut game = uniform_game();
    game.process_dot(GridPos::new(5, 0));
    game.process_dot(GridPos::new(4, 0));
    assert_eq!(game.process_dot(GridPos::new(5, 0)), DotStatus::Removed);
    assert_eq!(game.selected_dots(), &[GridPos::new(5, 0)]);
}

#[test]
fn wrong_color_diagonal_and_repeat_dots_are_rejected() {
    let mut game = DotsGame::new(42);
    let mut grid = [[0u8; GRID_COLS]; GRID_ROWS];
    grid[0][1] = 1; // different color next to the anchor
    game.set_grid_for_test(grid);

    game.process_dot(GridPos::new(0, 0));
    assert_eq!(game.process_dot(GridPos::new(0, 1)), DotStatus::Rejected);
    assert_eq!(game.process_dot(GridPos::new(1, 1)), DotStatus::Rejected);
    assert_eq!(game.process_dot(GridPos::new(0, 0)), DotStatus::Rejected);
    assert_eq!(game.selected_dots(), &[GridPos::new(0, 0)]);
}

#[test]
fn out_of_bounds_positions_are_rejected() {
    let mut game = uniform_game();
    assert_eq!(
        game.process_dot(GridPos::new(GRID_ROWS, 0)),
        DotStatus::Rejected
    );
    assert_eq!(
        game.process_dot(GridPos::new(0, GRID_COLS)),
        DotStatus::Rejected
    );
    assert!(game.selected_dots().is_empty());
}

#[test]
fn finish_move_collapses_columns_downward_and_refills_the_top() {
    let mut game = DotsGame::new(42);
    // Column 0 carries a marker per row so the shift is observable.
    let mut grid = [[4u8; GRID_COLS]; GRID_ROWS];
    for row in 0..GRID_ROWS {
        grid[row][0] = (row % 4) as u8;
    }
    grid[4][0] = 0;
    grid[5][0] = 0;
    game.set_grid_for_test(grid);

    assert_eq!(game.process_dot(GridPos::new(5, 0)), DotStatus::Added);
    assert_eq!(game.process_dot(GridPos::new(4, 0)), DotStatus::Added);
    game.finish_move();

    // The four surviving dots slide to the bottom in their original order.
    for row in 0..4 {
        assert_eq!(
            game.color_at(GridPos::new(row + 2, 0)),
            grid[row][0],
            "row {row} should land two cells lower"
        );
    }
    // The vacated top cells are refilled with valid colors.
    for row in 0..2 {
        assert!(game.color_at(GridPos::new(row, 0)) < NUM_COLORS);
    }
    // Untouched columns are untouched.
    for row in 0..GRID_ROWS {
        assert_eq!(game.color_at(GridPos::new(row, 1)), 4);
    }
}

#[test]
fn finish_move_updates_score_and_moves() {
    let mut game = uniform_game();
    game.process_dot(GridPos::new(0, 0));
    game.process_dot(GridPos::new(0, 1));
    game.process_dot(GridPos::new(0, 2));
    game.finish_move();

    assert_eq!(game.score(), 3);
    assert_eq!(game.moves_left(), STARTING_MOVES - 1);
    assert!(game.selected_dots().is_empty());
}

#[test]
fn finish_move_with_a_single_dot_only_clears_the_selection() {
    let mut game = uniform_game();
    game.process_dot(GridPos::new(0, 0));
    game.finish_move();

    assert_eq!(game.score(), 0);
    assert_eq!(game.moves_left(), STARTING_MOVES);
    assert!(game.selected_dots().is_empty());
}

#[test]
fn game_over_when_the_last_move_is_spent() {
    let mut game = uniform_game();
    game.set_moves_left_for_test(1);
    game.process_dot(GridPos::new(0, 0));
    game.process_dot(GridPos::new(1, 0));
    assert!(!game.is_game_over());
    game.finish_move();
    assert!(game.is_game_over());
}

#[test]
fn new_game_resets_counters_and_redeals() {
    let mut game = uniform_game();
    game.process_dot(GridPos::new(0, 0));
    game.process_dot(GridPos::new(0, 1));
    game.finish_move();
    assert!(game.score() > 0);

    game.new_game();
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves_left(), STARTING_MOVES);
    assert!(game.selected_dots().is_empty());
}

#[test]
fn same_seed_deals_the_same_board() {
    let a = DotsGame::new(123);
    let b = DotsGame::new(123);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let pos = GridPos::new(row, col);
            assert_eq!(a.color_at(pos), b.color_at(pos));
        }
    }
}
