use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board sides offered by the puzzle; any side of at least 1 is accepted.
pub const BOARD_SIZES: [Coord; 4] = [5, 6, 7, 8];

pub const DEFAULT_TOUR_SIZE: Coord = 5;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TourState {
    const fn describe(self) -> &'static str {
        match self {
            Self::NotStarted => "no tour has started",
            Self::InProgress => "a tour is in progress",
            Self::Completed => "the tour is complete",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Completed,
}

/// A knight's tour attempt: visit every cell exactly once with knight moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnightTour {
    size: Coord,
    visited: Vec<Coord2>,
    visit_order: Array2<Option<CellCount>>,
    state: TourState,
}

impl Default for KnightTour {
    fn default() -> Self {
        Self::empty(DEFAULT_TOUR_SIZE)
    }
}

impl KnightTour {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: Coord) -> Self {
        Self {
            size,
            visited: Vec::new(),
            visit_order: Array2::default((size, size).to_nd_index()),
            state: TourState::NotStarted,
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn visited(&self) -> &[Coord2] {
        &self.visited
    }

    pub fn visited_count(&self) -> CellCount {
        self.visited.len() as CellCount
    }

    /// Knight moves made so far; the starting square is not a move.
    pub fn move_count(&self) -> CellCount {
        self.visited_count().saturating_sub(1)
    }

    pub fn current_position(&self) -> Option<Coord2> {
        self.visited.last().copied()
    }

    /// The square the knight stood on before its latest move.
    pub fn previous_position(&self) -> Option<Coord2> {
        self.visited.iter().rev().nth(1).copied()
    }

    /// 1-based step at which `coords` was visited.
    pub fn visit_order(&self, coords: Coord2) -> Option<CellCount> {
        if in_bounds(coords, self.size) {
            self.visit_order[coords.to_nd_index()]
        } else {
            None
        }
    }

    pub fn is_visited(&self, coords: Coord2) -> bool {
        self.visit_order(coords).is_some()
    }

    pub fn start(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.check_state(TourState::NotStarted, "start a tour")?;
        if !in_bounds(coords, self.size) {
            return Err(IllegalMove::OutOfBounds.into());
        }

        self.state = TourState::InProgress;
        log::debug!("knight tour: started at {:?} on {}x{}", coords, self.size, self.size);
        Ok(self.visit(coords))
    }

    pub fn move_to(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.check_state(TourState::InProgress, "move the knight")?;
        let current = self.current_or_invalid("move the knight")?;
        if !in_bounds(coords, self.size) {
            return Err(IllegalMove::OutOfBounds.into());
        }
        if !OffsetIter::knight(current, self.size).any(|pos| pos == coords) {
            return Err(IllegalMove::NotKnightMove.into());
        }
        if self.is_visited(coords) {
            return Err(IllegalMove::AlreadyVisited.into());
        }

        Ok(self.visit(coords))
    }

    /// Takes back the latest move and returns the square it had reached.
    pub fn undo(&mut self) -> Result<Coord2> {
        self.check_state(TourState::InProgress, "undo a move")?;
        if self.visited.len() <= 1 {
            return Err(GameError::InvalidState {
                operation: "undo a move",
                phase: "only the starting square is visited",
            });
        }
        let last = self
            .visited
            .pop()
            .ok_or_else(|| self.invalid_state("undo a move"))?;
        self.visit_order[last.to_nd_index()] = None;
        Ok(last)
    }

    /// Unvisited cells one knight move away from `from`.
    pub fn reachable_moves(&self, from: Coord2) -> Vec<Coord2> {
        if !in_bounds(from, self.size) {
            return Vec::new();
        }
        OffsetIter::knight(from, self.size)
            .filter(|&pos| !self.is_visited(pos))
            .collect()
    }

    /// Number of unvisited cells reachable from `coords`.
    pub fn onward_degree(&self, coords: Coord2) -> usize {
        OffsetIter::knight(coords, self.size)
            .filter(|&pos| !self.is_visited(pos))
            .count()
    }

    pub fn is_dead_end(&self) -> bool {
        self.state == TourState::InProgress
            && self
                .current_position()
                .is_some_and(|current| self.onward_degree(current) == 0)
    }

    /// Warnsdorff's rule: the reachable cell with the fewest onward moves, ties
    /// going to the earliest knight offset. A hint only; following it does not
    /// guarantee a full tour.
    pub fn suggest_next_move(&self) -> Result<Coord2> {
        self.check_state(TourState::InProgress, "suggest a move")?;
        let current = self.current_or_invalid("suggest a move")?;

        self.reachable_moves(current)
            .into_iter()
            .min_by_key(|&candidate| self.onward_degree(candidate))
            .ok_or(GameError::NoMovesAvailable)
    }

    /// Gives up the current attempt and returns to `NotStarted`.
    pub fn abandon(&mut self) -> Result<()> {
        self.check_state(TourState::InProgress, "abandon the tour")?;
        log::debug!("knight tour: abandoned after {} moves", self.move_count());
        *self = Self::empty(self.size);
        Ok(())
    }

    /// Clears the board, optionally with a new side. Not allowed mid-tour.
    pub fn reset(&mut self, new_size: Option<Coord>) -> Result<()> {
        if self.state == TourState::InProgress {
            return Err(self.invalid_state("reset the board"));
        }
        let size = new_size.unwrap_or(self.size);
        *self = Self::new(size)?;
        Ok(())
    }

    fn visit(&mut self, coords: Coord2) -> MoveOutcome {
        self.visited.push(coords);
        self.visit_order[coords.to_nd_index()] = Some(self.visited_count());

        if self.visited_count() == self.total_cells() {
            self.state = TourState::Completed;
            log::debug!("knight tour: completed {}x{}", self.size, self.size);
            MoveOutcome::Completed
        } else {
            MoveOutcome::Moved
        }
    }

    fn current_or_invalid(&self, operation: &'static str) -> Result<Coord2> {
        self.current_position()
            .ok_or_else(|| self.invalid_state(operation))
    }

    fn check_state(&self, expected: TourState, operation: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.invalid_state(operation))
        }
    }

    fn invalid_state(&self, operation: &'static str) -> GameError {
        GameError::InvalidState {
            operation,
            phase: self.state.describe(),
        }
    }
}
