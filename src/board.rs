use crate::{cell::Cell, error::Error, rule::Rule};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// A Game of Life board on an unbounded grid.
///
/// Only live cells are stored; the grid itself is never materialized.
/// Advancing a generation visits exactly the live cells and their
/// 8-neighborhoods, so the cost of a step is proportional to the population,
/// not to the area the pattern spans.
#[derive(Clone, Debug, Default)]
pub struct Board {
    rule: Rule,
    generation: u64,
    cells: FxHashSet<Cell>,
}

impl Board {
    /// An empty board with the given rule.
    pub fn new(rule: Rule) -> Self {
        Board {
            rule,
            generation: 0,
            cells: FxHashSet::default(),
        }
    }

    /// A board seeded with the given live cells. Duplicates collapse.
    pub fn from_cells<I, C>(rule: Rule, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Board {
            rule,
            generation: 0,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Advances the board by one generation.
    ///
    /// The next generation is computed from the current live set alone and
    /// swapped in wholesale. Candidates are the live cells and their
    /// neighbors; every other cell is dead with zero live neighbors and
    /// stays dead. Each live cell seeds a frontier that expands through
    /// live cells only, so each candidate is evaluated exactly once: dead
    /// candidates get their own next state but never widen the frontier.
    ///
    /// Fails without mutating the board if a candidate's neighbors are not
    /// representable, since a wrapped coordinate would falsely neighbor an
    /// unrelated cell.
    pub fn step(&mut self) -> Result<(), Error> {
        let mut next = FxHashSet::with_capacity_and_hasher(self.cells.len(), Default::default());
        let mut visited = FxHashSet::default();
        let mut frontier = VecDeque::new();
        for &seed in &self.cells {
            if !visited.insert(seed) {
                continue;
            }
            frontier.push_back(seed);
            while let Some(cell) = frontier.pop_front() {
                let neighbors = cell.neighbors().ok_or(Error::CellOutOfRange(cell))?;
                let neighbor_count = neighbors
                    .iter()
                    .filter(|neighbor| self.cells.contains(neighbor))
                    .count() as u32;
                let alive = self.cells.contains(&cell);
                if self.rule.next_state(alive, neighbor_count) {
                    next.insert(cell);
                }
                if alive {
                    for &neighbor in &neighbors {
                        if visited.insert(neighbor) {
                            frontier.push_back(neighbor);
                        }
                    }
                }
            }
        }
        self.cells = next;
        self.generation += 1;
        Ok(())
    }

    /// Whether the cell at `(row, col)` is currently live.
    pub fn get_cell(&self, row: i64, col: i64) -> bool {
        self.cells.contains(&Cell::new(row, col))
    }

    pub fn set_cell(&mut self, row: i64, col: i64, state: bool) -> &mut Self {
        let cell = Cell::new(row, col);
        if state {
            self.cells.insert(cell);
        } else {
            self.cells.remove(&cell);
        }
        self
    }

    /// All currently live cells, in no particular order.
    pub fn living_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn population(&self) -> u64 {
        self.cells.len() as u64
    }

    pub fn get_rule(&self) -> Rule {
        self.rule
    }

    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    pub fn set_generation(&mut self, generation: u64) -> &mut Self {
        self.generation = generation;
        self
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    /// The extent of the live region as `(top, bottom, left, right)`,
    /// or `None` when the board is empty.
    pub fn bound(&self) -> Option<(i64, i64, i64, i64)> {
        let mut cells = self.cells.iter();
        let first = cells.next()?;
        let mut bound = (first.row, first.row, first.col, first.col);
        for cell in cells {
            bound.0 = bound.0.min(cell.row);
            bound.1 = bound.1.max(cell.row);
            bound.2 = bound.2.min(cell.col);
            bound.3 = bound.3.max(cell.col);
        }
        Some(bound)
    }
}

impl<C: Into<Cell>> FromIterator<C> for Board {
    fn from_iter<I: IntoIterator<Item = C>>(cells: I) -> Self {
        Board::from_cells(Rule::default(), cells)
    }
}
