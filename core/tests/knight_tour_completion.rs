use arcade_core::*;

/// Visit order of a known open tour on 5x5, row by row.
const TOUR_5X5: [[CellCount; 5]; 5] = [
    [1, 14, 9, 20, 3],
    [24, 19, 2, 15, 10],
    [13, 8, 25, 4, 21],
    [18, 23, 6, 11, 16],
    [7, 12, 17, 22, 5],
];

fn tour_cells() -> Vec<Coord2> {
    let mut cells = vec![(0, 0); 25];
    for (row, line) in TOUR_5X5.iter().enumerate() {
        for (col, &step) in line.iter().enumerate() {
            cells[usize::from(step) - 1] = (row as Coord, col as Coord);
        }
    }
    cells
}

#[test]
fn twenty_five_legal_moves_complete_a_5x5_tour() {
    let cells = tour_cells();
    let mut tour = KnightTour::new(5).unwrap();

    assert_eq!(tour.start(cells[0]), Ok(MoveOutcome::Moved));
    for &cell in &cells[1..24] {
        assert_eq!(tour.move_to(cell), Ok(MoveOutcome::Moved));
        assert_eq!(tour.state(), TourState::InProgress);
    }
    assert_eq!(tour.move_to(cells[24]), Ok(MoveOutcome::Completed));

    assert_eq!(tour.state(), TourState::Completed);
    assert_eq!(tour.visited(), cells.as_slice());
    for (row, line) in TOUR_5X5.iter().enumerate() {
        for (col, &step) in line.iter().enumerate() {
            assert_eq!(tour.visit_order((row as Coord, col as Coord)), Some(step));
        }
    }
}

#[test]
fn completed_tour_only_accepts_reset() {
    let cells = tour_cells();
    let mut tour = KnightTour::new(5).unwrap();
    tour.start(cells[0]).unwrap();
    for &cell in &cells[1..] {
        tour.move_to(cell).unwrap();
    }

    assert!(matches!(tour.undo(), Err(GameError::InvalidState { .. })));
    assert!(matches!(tour.abandon(), Err(GameError::InvalidState { .. })));
    assert!(matches!(
        tour.suggest_next_move(),
        Err(GameError::InvalidState { .. })
    ));

    tour.reset(Some(6)).unwrap();
    assert_eq!(tour.state(), TourState::NotStarted);
    assert!(tour.visited().is_empty());
    assert_eq!(tour.size(), 6);
}

#[test]
fn hints_stay_legal_from_every_start_square() {
    for size in BOARD_SIZES {
        for row in 0..size {
            for col in 0..size {
                let mut tour = KnightTour::new(size).unwrap();
                tour.start((row, col)).unwrap();

                while let Ok(hint) = tour.suggest_next_move() {
                    assert!(tour.reachable_moves(tour.current_position().unwrap()).contains(&hint));
                    if tour.move_to(hint).unwrap() == MoveOutcome::Completed {
                        break;
                    }
                }
                assert!(tour.state() == TourState::Completed || tour.is_dead_end());
            }
        }
    }
}

#[test]
fn undo_then_redo_reaches_same_state() {
    let mut tour = KnightTour::new(7).unwrap();
    tour.start((3, 3)).unwrap();
    let hint = tour.suggest_next_move().unwrap();
    let before = tour.clone();

    tour.move_to(hint).unwrap();
    let after = tour.clone();
    tour.undo().unwrap();
    assert_eq!(tour, before);

    tour.move_to(hint).unwrap();
    assert_eq!(tour, after);
}
