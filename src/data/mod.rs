/// What the player sees at one position of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unopened,
    /// Opened safe cell with the number of adjacent mines.
    Revealed(u8),
    /// Mine shown after the player stepped on one.
    RevealedMine,
    /// Mine shown after every safe cell was opened.
    FlaggedMine,
}

/// Hidden mine positions of a game, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineLayout {
    pub width: usize,
    pub height: usize,
    pub mines: Vec<bool>,
}

impl MineLayout {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            mines: vec![false; width * height],
        }
    }

    pub fn is_mine(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.mines[col + row * self.width]
    }

    pub fn count(&self) -> usize {
        self.mines.iter().filter(|mine| **mine).count()
    }

    pub fn adjacent_mines(&self, col: usize, row: usize) -> u8 {
        neighbors(self.width, self.height, col, row)
            .filter(|&(c, r)| self.is_mine(c, r))
            .count() as u8
    }
}

/// In-bounds neighbours of a cell as `(col, row)`, row offset outer, column offset inner.
pub fn neighbors(
    width: usize,
    height: usize,
    col: usize,
    row: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1i64).flat_map(move |dy| {
        (-1..=1i64).filter_map(move |dx| {
            if dx == 0 && dy == 0 {
                return None;
            }

            let new_col = col as i64 + dx;
            let new_row = row as i64 + dy;

            if new_col >= 0 && new_col < width as i64 && new_row >= 0 && new_row < height as i64 {
                Some((new_col as usize, new_row as usize))
            } else {
                None
            }
        })
    })
}
