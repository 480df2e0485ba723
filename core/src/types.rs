/// Single coordinate axis used for board sides and positions.
pub type Coord = u8;

/// Count type used for visited-cell and stone counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub(crate) const fn in_bounds(coords: Coord2, size: Coord) -> bool {
    coords.0 < size && coords.1 < size
}

/// The eight knight offsets, in the order used to break Warnsdorff ties.
pub const KNIGHT_DISPLACEMENTS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Line axes checked for five in a row: horizontal, vertical and both diagonals.
pub const LINE_AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Applies `delta` to `coords`, returning a value only when it remains on a
/// square board of side `size`.
pub fn apply_delta(coords: Coord2, delta: (isize, isize), size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds cells reached from `center` by a fixed displacement
/// table.
#[derive(Debug, Clone)]
pub struct OffsetIter {
    center: Coord2,
    size: Coord,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl OffsetIter {
    pub fn new(center: Coord2, size: Coord, displacements: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            size,
            displacements,
            index: 0,
        }
    }

    pub fn knight(center: Coord2, size: Coord) -> Self {
        Self::new(center, size, &KNIGHT_DISPLACEMENTS)
    }
}

impl Iterator for OffsetIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= self.displacements.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                self.displacements[self.index as usize],
                self.size,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Walks from `start` (exclusive) along `delta` while cells stay on the board.
pub fn ray(start: Coord2, delta: (isize, isize), size: Coord) -> impl Iterator<Item = Coord2> {
    let mut cursor = Some(start);
    core::iter::from_fn(move || {
        let next = apply_delta(cursor?, delta, size);
        cursor = next;
        next
    })
}
