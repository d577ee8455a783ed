use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 6;
pub const NUM_COLORS: u8 = 5;
pub const STARTING_MOVES: u32 = 10;

/// A cell on the board. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal adjacency; diagonals don't connect.
    pub fn is_adjacent(self, other: GridPos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

/// Outcome of offering a dot to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotStatus {
    Added,
    Removed,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        let seed = if seed == 0 {
            0x9E37_79B9_7F4A_7C15
        } else {
            seed
        };
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32) as u32
    }

    fn next_color(&mut self) -> u8 {
        (self.next_u32() % NUM_COLORS as u32) as u8
    }
}

/// The game-state model: the dot grid, the in-flight selection, and the
/// move/score counters. Owns no presentation concerns; callers inject it
/// into a session rather than reaching for a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotsGame {
    grid: Vec<Vec<u8>>,
    selected: Vec<GridPos>,
    moves_left: u32,
    score: u32,
    starting_moves: u32,
    rng: Rng,
}

impl DotsGame {
    /// A freshly dealt game. The grid is filled immediately so there is no
    /// half-initialized state to observe.
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            grid: vec![vec![0; GRID_COLS]; GRID_ROWS],
            selected: Vec::new(),
            moves_left: STARTING_MOVES,
            score: 0,
            starting_moves: STARTING_MOVES,
            rng: Rng::new(seed),
        };
        game.new_game();
        game
    }

    pub fn with_starting_moves(mut self, moves: u32) -> Self {
        self.starting_moves = moves.max(1);
        self.moves_left = self.starting_moves;
        self
    }

    /// Deals a new board and resets the move counter and score.
    pub fn new_game(&mut self) {
        for row in &mut self.grid {
            for cell in row.iter_mut() {
                *cell = self.rng.next_color();
            }
        }
        self.selected.clear();
        self.moves_left = self.starting_moves;
        self.score = 0;
    }

    /// Offers a dot to the selection.
    ///
    /// A dot extends the selection when it is orthogonally adjacent to the
    /// last selected dot, matches the selection's color, and is not already
    /// selected. Dragging back onto the second-to-last dot backtracks,
    /// removing the last one. Anything else leaves the selection untouched.
    pub fn process_dot(&mut self, pos: GridPos) -> DotStatus {
        if pos.row >= GRID_ROWS || pos.col >= GRID_COLS {
            return DotStatus::Rejected;
        }

        let Some(&last) = self.selected.last() else {
            self.selected.push(pos);
            return DotStatus::Added;
        };

        if self.selected.len() >= 2 && pos == self.selected[self.selected.len() - 2] {
            self.selected.pop();
            return DotStatus::Removed;
        }

        let same_color = self.color_at(pos) == self.color_at(self.selected[0]);
        if pos.is_adjacent(last) && same_color && !self.selected.contains(&pos) {
            self.selected.push(pos);
            return DotStatus::Added;
        }

        DotStatus::Rejected
    }

    /// Drops the selection without touching the grid.
    pub fn clear_selected_dots(&mut self) {
        self.selected.clear();
    }

    /// Commits the move: removes the selected dots, collapses columns,
    /// refills from the top, and updates the counters. A selection of one or
    /// zero dots only clears the selection.
    pub fn finish_move(&mut self) {
        if self.selected.len() < 2 {
            self.selected.clear();
            return;
        }

        let removed: HashSet<GridPos> = self.selected.iter().copied().collect();
        self.score += removed.len() as u32;
        self.moves_left = self.moves_left.saturating_sub(1);

        for col in 0..GRID_COLS {
            let kept: Vec<u8> = (0..GRID_ROWS)
                .filter(|&row| !removed.contains(&GridPos::new(row, col)))
                .map(|row| self.grid[row][col])
                .collect();
            let missing = GRID_ROWS - kept.len();
            for row in 0..missing {
                self.grid[row][col] = self.rng.next_color();
            }
            for (i, color) in kept.into_iter().enumerate() {
                self.grid[missing + i][col] = color;
            }
        }

        self.selected.clear();
    }

    pub fn is_game_over(&self) -> bool {
        self.moves_left == 0
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected_dots(&self) -> &[GridPos] {
        &self.selected
    }

    pub fn is_selected(&self, pos: GridPos) -> bool {
        self.selected.contains(&pos)
    }

    pub fn color_at(&self, pos: GridPos) -> u8 {
        self.grid[pos.row][pos.col]
    }

    pub fn set_grid_for_test(&mut self, rows: [[u8; GRID_COLS]; GRID_ROWS]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, &color) in row.iter().enumerate() {
                self.grid[r][c] = color;
            }
        }
        self.selected.clear();
    }

    pub fn set_moves_left_for_test(&mut self, moves: u32) {
        self.moves_left = moves;
    }
}
