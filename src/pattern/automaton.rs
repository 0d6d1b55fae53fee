use crate::foundation::{
    error::{CardError, CardResult},
    math::Pcg32,
};

/// Binary cell grid produced by [`generate`]: one row per automaton
/// generation, row-major, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from row-major cells; `cells.len()` must be a non-zero
    /// multiple of `width` and every cell must be 0 or 1.
    pub fn from_cells(width: usize, cells: Vec<u8>) -> CardResult<Self> {
        if width == 0 {
            return Err(CardError::validation("grid width must be > 0"));
        }
        if cells.is_empty() || !cells.len().is_multiple_of(width) {
            return Err(CardError::validation(
                "grid cells must be a non-zero multiple of width",
            ));
        }
        if cells.iter().any(|&c| c > 1) {
            return Err(CardError::validation("grid cells must be 0 or 1"));
        }
        Ok(Self { width, cells })
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (`generations + 1`).
    pub fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Cell value at `(row, cell)`, either 0 or 1.
    pub fn get(&self, row: usize, cell: usize) -> u8 {
        self.cells[row * self.width + cell]
    }

    fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }
}

/// Run the automaton: a random first row, then `generations` successor rows
/// with progressively stronger stochastic decay.
///
/// Deterministic: the same `(width, generations, seed)` triple yields a
/// bit-identical grid on every run and platform. The random source is PCG-32
/// seeded with the FNV-1a hash of `seed`, and draws are consumed in a fixed
/// order — one boolean per cell of row 0, then one decay float per cell of
/// each successor row.
pub fn generate(width: usize, generations: usize, seed: &str) -> CardResult<Grid> {
    if width == 0 {
        return Err(CardError::validation("pattern width must be > 0"));
    }

    let mut rng = Pcg32::from_seed_str(seed);
    let mut cells = Vec::with_capacity(width * (generations + 1));
    for _ in 0..width {
        cells.push(u8::from(rng.next_bool()));
    }

    let mut grid = Grid { width, cells };
    for i in 0..generations {
        let pct = i as f64 / generations as f64;
        let next = next_row(grid.row(grid.rows() - 1), pct, &mut rng);
        grid.cells.extend_from_slice(&next);
    }
    Ok(grid)
}

/// One automaton step over the circular row, then decay: a cell is forced to
/// 0 when its uniform draw falls below `pct²`.
pub(crate) fn next_row(row: &[u8], pct: f64, rng: &mut Pcg32) -> Vec<u8> {
    let width = row.len();
    let mut next = vec![0u8; width];
    for (j, out) in next.iter_mut().enumerate() {
        let prev = row[(j + width - 1) % width];
        let curr = row[j];
        let next_cell = row[(j + 1) % width];
        let val = prev * 4 + curr * 2 + next_cell;
        *out = match val {
            0 | 4 | 7 => 0,
            _ => 1,
        };
        if rng.next_f64() < pct * pct {
            *out = 0;
        }
    }
    next
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/automaton.rs"]
mod tests;
