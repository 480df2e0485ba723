use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_BOARD_SIZE: Coord = 15;

/// Stones in an unbroken line needed to win. Longer lines also win.
pub const WIN_LENGTH: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GomokuStatus {
    #[default]
    InProgress,
    Won(Stone),
    Draw,
}

impl GomokuStatus {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    Won(Stone),
    Draw,
}

/// Five-in-a-row on a square board, Black moving first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gomoku {
    board: Array2<Option<Stone>>,
    size: Coord,
    current_player: Stone,
    status: GomokuStatus,
    stones_placed: CellCount,
    last_placement: Option<Coord2>,
}

impl Default for Gomoku {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl Gomoku {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: Coord) -> Self {
        Self {
            board: Array2::default((size, size).to_nd_index()),
            size,
            current_player: Stone::Black,
            status: GomokuStatus::InProgress,
            stones_placed: 0,
            last_placement: None,
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn status(&self) -> GomokuStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GomokuStatus::Won(stone) => Some(stone),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn stones_placed(&self) -> CellCount {
        self.stones_placed
    }

    pub fn last_placement(&self) -> Option<Coord2> {
        self.last_placement
    }

    /// Stone at `coords`, `None` for an empty or off-board cell.
    pub fn cell_at(&self, coords: Coord2) -> Option<Stone> {
        if in_bounds(coords, self.size) {
            self.board[coords.to_nd_index()]
        } else {
            None
        }
    }

    pub fn place(&mut self, coords: Coord2) -> Result<PlaceOutcome> {
        if !in_bounds(coords, self.size) {
            return Err(IllegalMove::OutOfBounds.into());
        }
        if self.status.is_finished() {
            return Err(IllegalMove::GameOver.into());
        }
        if self.board[coords.to_nd_index()].is_some() {
            return Err(IllegalMove::Occupied.into());
        }

        let stone = self.current_player;
        self.board[coords.to_nd_index()] = Some(stone);
        self.stones_placed += 1;
        self.last_placement = Some(coords);

        if self.completes_line(coords, stone) {
            self.status = GomokuStatus::Won(stone);
            log::debug!("gomoku: {:?} wins at {:?}", stone, coords);
            return Ok(PlaceOutcome::Won(stone));
        }

        self.current_player = stone.opponent();
        if self.stones_placed == mult(self.size, self.size) {
            self.status = GomokuStatus::Draw;
            log::debug!("gomoku: board full, draw");
            return Ok(PlaceOutcome::Draw);
        }

        Ok(PlaceOutcome::Placed)
    }

    pub fn reset(&mut self) {
        *self = Self::empty(self.size);
    }

    /// Checks only the four lines through the stone just placed.
    fn completes_line(&self, coords: Coord2, stone: Stone) -> bool {
        LINE_AXES.iter().any(|&(d_row, d_col)| {
            let forward = self.run_length(coords, (d_row, d_col), stone);
            let backward = self.run_length(coords, (-d_row, -d_col), stone);
            1 + forward + backward >= WIN_LENGTH
        })
    }

    fn run_length(&self, from: Coord2, delta: (isize, isize), stone: Stone) -> usize {
        ray(from, delta, self.size)
            .take_while(|&pos| self.board[pos.to_nd_index()] == Some(stone))
            .count()
    }
}
