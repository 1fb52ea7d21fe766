use crate::{parse_plaintext, Error, Result};
use rand::Rng;
use std::fmt;


/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The other state.
    pub fn flipped(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// How the cells of a freshly constructed grid are filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillPolicy {
    /// Every cell is dead.
    Empty,
    /// Every cell is independently alive with probability `fill_rate`.
    Random { fill_rate: f64 },
}

/// Bounded `rows x cols` field of cells, stored row-major.
///
/// A cell is addressed by `(x, y)` where `x` is the row and `y` is the column.
/// Coordinates outside `[0, rows) x [0, cols)` do not exist: the field does not wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Moore neighbourhood offsets.
    const NEIGHBOURS: [(isize, isize); 8] = [
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ];

    /// Number of cells in a `rows x cols` grid; both sides must be positive
    /// and the product must fit into `usize`.
    fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        match rows.checked_mul(cols) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(Error::InvalidDimensions { rows, cols }),
        }
    }

    /// Create a grid with all cells dead.
    pub fn blank(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self {
            cells: vec![Cell::Dead; len],
            rows,
            cols,
        })
    }

    /// Create a grid with random cells.
    ///
    /// `fill_rate` - probability of a cell being alive
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        fill_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        let cells = (0..len)
            .map(|_| Cell::from(rng.gen::<f64>() < fill_rate))
            .collect();
        Ok(Self { cells, rows, cols })
    }

    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        fill: FillPolicy,
        rng: &mut R,
    ) -> Result<Self> {
        match fill {
            FillPolicy::Empty => Self::blank(rows, cols),
            FillPolicy::Random { fill_rate } => Self::random(rows, cols, fill_rate, rng),
        }
    }

    /// Parse a pattern in plaintext format (`.` is dead, `O` or `*` is alive).
    pub fn from_plaintext(data: &str) -> Result<Self> {
        let (rows, cols, cells) = parse_plaintext(data)?;
        Self::checked_len(rows, cols)?;
        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.rows && y < self.cols).then(|| x * self.cols + y)
    }

    /// Cell at `(x, y)`, `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns `false` and leaves the grid untouched if `(x, y)` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = self.cells[i].flipped();
                true
            }
            None => false,
        }
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    /// Number of alive cells among the (up to 8) in-bounds neighbours of `(x, y)`.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        Self::NEIGHBOURS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|c| c.is_alive())
            .count() as u8
    }

    /// Next generation; every cell is computed from `self` only.
    pub fn transition(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.rows {
            for y in 0..self.cols {
                let neibs = self.count_live_neighbors(x, y);
                let next = match self.cells[x * self.cols + y] {
                    Cell::Alive if !(2..=3).contains(&neibs) => Cell::Dead,
                    Cell::Dead if neibs == 3 => Cell::Alive,
                    cell => cell,
                };
                cells.push(next);
            }
        }
        Self {
            cells,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|c| if c.is_alive() { 'O' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
