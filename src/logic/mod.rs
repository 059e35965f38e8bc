use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    data::{Cell, MineLayout, neighbors},
    model::GameResponse,
};

pub mod generator;

pub const MIN_SIDE: i32 = 2;
pub const MAX_SIDE: i32 = 30;
pub const MIN_MINES: i32 = 2;

#[derive(Debug)]
pub struct Game {
    id: Uuid,
    width: usize,
    height: usize,
    mines_count: usize,
    layout: MineLayout,
    field: Vec<Cell>,
    completed: bool,
    opened_cells: usize,
}

/// Clamps untrusted dimensions so that at least one safe cell always exists.
fn clamp_params(width: i32, height: i32, mines: i32) -> (usize, usize, usize) {
    let width = width.clamp(MIN_SIDE, MAX_SIDE);
    let height = height.clamp(MIN_SIDE, MAX_SIDE);
    let max_mines = width * height - 1;
    let mines = mines.clamp(MIN_MINES, max_mines);

    (width as usize, height as usize, mines as usize)
}

impl Game {
    pub fn new(width: i32, height: i32, mines: i32) -> Self {
        Self::with_rng(width, height, mines, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(width: i32, height: i32, mines: i32, rng: &mut R) -> Self {
        let (width, height, mines) = clamp_params(width, height, mines);
        Self::from_layout(generator::generate_mines(width, height, mines, rng))
    }

    pub(crate) fn from_layout(layout: MineLayout) -> Self {
        let game = Self {
            id: Uuid::new_v4(),
            width: layout.width,
            height: layout.height,
            mines_count: layout.count(),
            field: vec![Cell::Unopened; layout.width * layout.height],
            layout,
            completed: false,
            opened_cells: 0,
        };

        info!(
            "New game {}: {}x{} with {} mines",
            game.id, game.width, game.height, game.mines_count
        );
        game
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mines_count(&self) -> usize {
        self.mines_count
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn opened_cells(&self) -> usize {
        self.opened_cells
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.width && row < self.height {
            Some(self.field[self.index(col, row)])
        } else {
            None
        }
    }

    /// Visible field, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.field.chunks(self.width)
    }

    /// True if the coordinates are on the board and the cell is still unopened.
    /// Does not look at whether the game is over.
    pub fn can_turn(&self, col: i32, row: i32) -> bool {
        col >= 0
            && row >= 0
            && (col as usize) < self.width
            && (row as usize) < self.height
            && self.field[self.index(col as usize, row as usize)] == Cell::Unopened
    }

    /// Opens a cell. Returns false, leaving the game untouched, when the move is not allowed.
    pub fn turn(&mut self, col: i32, row: i32) -> bool {
        if !self.can_turn(col, row) || self.completed {
            return false;
        }

        let (col, row) = (col as usize, row as usize);
        if self.layout.is_mine(col, row) {
            debug!("Game {} lost at ({}, {})", self.id, col, row);
            self.open_field(false);
        } else {
            self.open_neighbors(col, row);
            if self.completed {
                debug!("Game {} won at ({}, {})", self.id, col, row);
            }
        }

        true
    }

    fn index(&self, col: usize, row: usize) -> usize {
        col + row * self.width
    }

    fn has_won(&self) -> bool {
        self.width * self.height - self.opened_cells == self.mines_count
    }

    /// Flood fill from a safe cell. Neighbours of zero cells are pushed in reverse so
    /// they pop in scan order.
    fn open_neighbors(&mut self, col: usize, row: usize) {
        let mut pending = vec![(col, row)];

        while let Some((col, row)) = pending.pop() {
            let index = self.index(col, row);
            if self.field[index] != Cell::Unopened {
                continue;
            }

            self.opened_cells += 1;
            let adjacent = self.layout.adjacent_mines(col, row);
            self.field[index] = Cell::Revealed(adjacent);

            if self.has_won() {
                self.open_field(true);
                return;
            }

            if adjacent == 0 {
                let unopened: Vec<_> = neighbors(self.width, self.height, col, row)
                    .filter(|&(c, r)| self.field[self.index(c, r)] == Cell::Unopened)
                    .collect();
                pending.extend(unopened.into_iter().rev());
            }
        }
    }

    /// Ends the game and shows every unopened mine. Unopened safe cells stay as they are.
    fn open_field(&mut self, win: bool) {
        self.completed = true;

        let shown = if win { Cell::FlaggedMine } else { Cell::RevealedMine };
        for (cell, mine) in self.field.iter_mut().zip(&self.layout.mines) {
            if *mine && *cell == Cell::Unopened {
                *cell = shown;
            }
        }
    }
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            completed: game.completed,
            width: game.width,
            height: game.height,
            mines_count: game.mines_count,
            field: game.rows().map(|row| row.to_vec()).collect(),
        }
    }
}
