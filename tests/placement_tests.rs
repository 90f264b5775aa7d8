use battleships::{
    place, populate, random_placement, CellState, Coordinate, Fleet, GameError, FLEET_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_five_distinct_placements() {
    let mut fleet = Fleet::new();
    let coords = [(0, 0), (1, 3), (4, 4), (6, 2), (7, 7)];
    for (i, &(r, c)) in coords.iter().enumerate() {
        assert!(!fleet.is_ready());
        place(&mut fleet, Coordinate::new(r, c)).unwrap();
        assert_eq!(fleet.remaining(), i + 1);
    }
    assert!(fleet.is_ready());
    assert_eq!(fleet.remaining(), 5);
    assert_eq!(fleet.grid().count(CellState::Occupied), 5);
    assert_eq!(fleet.grid().count(CellState::Empty), 64 - 5);
}

#[test]
fn test_collision_rejected_without_change() {
    let mut fleet = Fleet::new();
    let coord = Coordinate::new(3, 3);
    place(&mut fleet, coord).unwrap();
    let before = fleet;
    assert_eq!(place(&mut fleet, coord).unwrap_err(), GameError::CellOccupied(coord));
    assert_eq!(fleet, before);
    assert_eq!(fleet.placed(), 1);
}

#[test]
fn test_placement_out_of_bounds() {
    let mut fleet = Fleet::new();
    assert_eq!(
        place(&mut fleet, Coordinate::new(8, 0)).unwrap_err(),
        GameError::OutOfBounds { row: 8, col: 0 }
    );
    assert_eq!(fleet.placed(), 0);
}

#[test]
fn test_populate_fills_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut fleet = Fleet::new();
    populate(&mut rng, &mut fleet).unwrap();
    assert!(fleet.is_ready());
    assert_eq!(fleet.remaining(), FLEET_SIZE);
    assert_eq!(fleet.grid().count(CellState::Occupied), FLEET_SIZE);
}

#[test]
fn test_populate_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let mut f1 = Fleet::new();
    let mut f2 = Fleet::new();
    populate(&mut rng1, &mut f1).unwrap();
    populate(&mut rng2, &mut f2).unwrap();
    assert_eq!(f1, f2);
}

#[test]
fn test_random_placement_finds_last_empty_cell() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut fleet = Fleet::new();
    for r in 0..8 {
        for c in 0..8 {
            if (r, c) != (5, 6) {
                place(&mut fleet, Coordinate::new(r, c)).unwrap();
            }
        }
    }
    assert_eq!(random_placement(&mut rng, &fleet).unwrap(), Coordinate::new(5, 6));
    place(&mut fleet, Coordinate::new(5, 6)).unwrap();
    assert_eq!(random_placement(&mut rng, &fleet).unwrap_err(), GameError::GridExhausted);
}

#[test]
fn test_clear_resets_fleet() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut fleet = Fleet::new();
    populate(&mut rng, &mut fleet).unwrap();
    fleet.clear();
    assert_eq!(fleet, Fleet::new());
    assert!(!fleet.is_defeated());
}

#[test]
fn test_extra_placement_keeps_fleet_ready() {
    let mut fleet = Fleet::new();
    for c in 0..FLEET_SIZE + 1 {
        place(&mut fleet, Coordinate::new(2, c)).unwrap();
    }
    assert_eq!(fleet.placed(), FLEET_SIZE + 1);
    assert_eq!(fleet.remaining(), FLEET_SIZE + 1);
    assert!(fleet.is_ready());
}
