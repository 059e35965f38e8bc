use rand::Rng;
use tracing::trace;

use crate::data::MineLayout;

/// Places `count` mines by rejection sampling: pick a random cell, pick again if it
/// already holds a mine. Expects `count < width * height`.
pub fn generate_mines<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    count: usize,
    rng: &mut R,
) -> MineLayout {
    let mut layout = MineLayout::empty(width, height);

    let mut generated = 0;
    let mut attempts = 0usize;
    while generated < count {
        attempts += 1;
        let col = rng.random_range(0..width);
        let row = rng.random_range(0..height);

        let cell = &mut layout.mines[col + row * width];
        if !*cell {
            *cell = true;
            generated += 1;
        }
    }

    trace!(
        "Placed {} mines on {}x{} in {} attempts",
        count, width, height, attempts
    );
    layout
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn places_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for (width, height, count) in [(2, 2, 2), (2, 2, 3), (9, 9, 10), (30, 30, 899), (30, 2, 30)] {
            let layout = generate_mines(width, height, count, &mut rng);
            assert_eq!(layout.mines.len(), width * height);
            assert_eq!(layout.count(), count, "{}x{} with {} mines", width, height, count);
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let first = generate_mines(16, 16, 40, &mut StdRng::seed_from_u64(42));
        let second = generate_mines(16, 16, 40, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn every_cell_can_hold_a_mine() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = vec![false; 9];
        for _ in 0..200 {
            let layout = generate_mines(3, 3, 2, &mut rng);
            for (index, mine) in layout.mines.iter().enumerate() {
                seen[index] |= *mine;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
