//! Unit tests for the grid, noise field, and spatial caches.

use gw_core::{Position, WorldRng};

use crate::{Cell, CellType, Grid, NoiseField, SpatialCaches};

fn set_kind(grid: &mut Grid, pos: Position, kind: CellType) {
    grid.cell_mut(pos).unwrap().kind = kind;
}

#[cfg(test)]
mod grid {
    use super::*;

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, -1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn resize_discards_contents() {
        let mut grid = Grid::new(4, 4).unwrap();
        set_kind(&mut grid, Position::new(2, 2), CellType::Wall);
        grid.resize(3, 3).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cell(Position::new(2, 2)).unwrap().kind, CellType::Empty);
    }

    #[test]
    fn bounds_and_checked_access() {
        let grid = Grid::new(3, 2).unwrap();
        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(2, 1)));
        assert!(!grid.in_bounds(Position::new(3, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
        assert!(grid.cell(Position::new(3, 0)).is_none());
        assert!(grid.cell(Position::new(1, 1)).is_some());
    }

    #[test]
    fn fill_resets_payload() {
        let mut grid = Grid::new(2, 2).unwrap();
        let cell = grid.cell_mut(Position::new(1, 1)).unwrap();
        *cell = Cell { kind: CellType::Trail, terrain: 0.7, decay: 0.3 };
        grid.fill(CellType::Empty);
        let cell = grid.cell(Position::new(1, 1)).unwrap();
        assert_eq!(cell.kind, CellType::Empty);
        assert_eq!(cell.terrain, 0.0);
        assert_eq!(cell.decay, 0.0);
    }

    #[test]
    fn iteration_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let order: Vec<Position> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(order[0], Position::new(0, 0));
        assert_eq!(order[1], Position::new(1, 0));
        assert_eq!(order[2], Position::new(2, 0));
        assert_eq!(order[3], Position::new(0, 1));
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn passability() {
        let mut grid = Grid::new(3, 3).unwrap();
        set_kind(&mut grid, Position::new(1, 1), CellType::Wall);
        assert!(!grid.is_passable(Position::new(1, 1)));
        assert!(grid.is_passable(Position::new(0, 0)));
        assert!(!grid.is_passable(Position::new(-1, 0)), "off-grid is impassable");
    }

    #[test]
    fn trail_marking_rules() {
        let mut grid = Grid::new(3, 3).unwrap();
        let p = Position::new(1, 1);

        // Empty and markers convert, with a fresh decay counter.
        grid.mark_trail(p);
        assert_eq!(grid.cell(p).unwrap().kind, CellType::Trail);

        set_kind(&mut grid, p, CellType::MarkerB);
        grid.mark_trail(p);
        assert_eq!(grid.cell(p).unwrap().kind, CellType::Trail);

        // Re-treading an existing trail does not refresh its decay.
        grid.cell_mut(p).unwrap().decay = 0.5;
        grid.mark_trail(p);
        assert_eq!(grid.cell(p).unwrap().decay, 0.5);

        // Sources, sinks, walls, and signals are untouched.
        for kind in [CellType::Source, CellType::Sink, CellType::Wall, CellType::Signal] {
            set_kind(&mut grid, p, kind);
            grid.mark_trail(p);
            assert_eq!(grid.cell(p).unwrap().kind, kind);
        }
    }

    #[test]
    fn signal_marking_rules() {
        let mut grid = Grid::new(3, 3).unwrap();
        let p = Position::new(1, 1);

        grid.mark_signal(p);
        assert_eq!(grid.cell(p).unwrap().kind, CellType::Signal);

        set_kind(&mut grid, p, CellType::Trail);
        grid.mark_signal(p);
        assert_eq!(grid.cell(p).unwrap().kind, CellType::Signal);

        set_kind(&mut grid, p, CellType::MarkerA);
        grid.mark_signal(p);
        assert_eq!(grid.cell(p).unwrap().kind, CellType::MarkerA, "markers keep their type");
    }

    #[test]
    fn glyphs_are_distinct() {
        let kinds = [
            CellType::Empty,
            CellType::Wall,
            CellType::MarkerA,
            CellType::MarkerB,
            CellType::MarkerC,
            CellType::Source,
            CellType::Sink,
            CellType::Trail,
            CellType::Signal,
        ];
        let glyphs: std::collections::HashSet<char> =
            kinds.iter().map(|k| k.glyph()).collect();
        assert_eq!(glyphs.len(), kinds.len());
    }
}

#[cfg(test)]
mod noise {
    use super::*;

    #[test]
    fn values_stay_in_unit_interval() {
        for seed in [0u64, 1, 42, 999] {
            let mut rng = WorldRng::new(seed);
            let mut field = NoiseField::new(40, 17);
            field.generate(&mut rng, 5, 0.5);
            for y in 0..field.height() {
                for x in 0..field.width() {
                    let v = field.value(x, y);
                    assert!((0.0..=1.0).contains(&v), "value {v} at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn deterministic_for_seed() {
        let mut a = NoiseField::new(20, 20);
        let mut b = NoiseField::new(20, 20);
        a.generate(&mut WorldRng::new(7), 5, 0.5);
        b.generate(&mut WorldRng::new(7), 5, 0.5);
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(a.value(x, y), b.value(x, y));
            }
        }
    }

    #[test]
    fn zero_octaves_yields_zeros() {
        let mut field = NoiseField::new(8, 8);
        field.generate(&mut WorldRng::new(1), 0, 0.5);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(field.value(x, y), 0.0);
            }
        }
    }

    #[test]
    fn degenerate_sizes_do_not_error() {
        let mut field = NoiseField::new(0, 10);
        field.generate(&mut WorldRng::new(1), 4, 0.5);
        assert_eq!(field.width(), 0);

        let mut field = NoiseField::new(-3, -3);
        field.generate(&mut WorldRng::new(1), 4, 0.5);
        assert_eq!(field.value(0, 0), 0.0);
    }

    #[test]
    fn single_octave_equals_base_lattice() {
        // With one octave the block size is 1, so bilinear interpolation
        // degenerates to the base lattice and normalization divides by 1.
        let mut field = NoiseField::new(6, 6);
        field.generate(&mut WorldRng::new(3), 1, 0.5);
        let mut rng = WorldRng::new(3);
        for y in 0..6 {
            for x in 0..6 {
                let expected: f64 = rng.gen_range(0.0..1.0);
                assert_eq!(field.value(x, y), expected);
            }
        }
    }

    #[test]
    fn resize_zeroes_and_regenerates_cleanly() {
        let mut field = NoiseField::new(4, 4);
        field.generate(&mut WorldRng::new(2), 3, 0.5);
        field.resize(6, 6);
        assert_eq!(field.value(2, 2), 0.0);
        field.generate(&mut WorldRng::new(2), 3, 0.5);
        assert!((0.0..=1.0).contains(&field.value(5, 5)));
    }

    #[test]
    fn out_of_range_reads_are_zero() {
        let mut field = NoiseField::new(4, 4);
        field.generate(&mut WorldRng::new(5), 3, 0.5);
        assert_eq!(field.value(-1, 0), 0.0);
        assert_eq!(field.value(4, 0), 0.0);
    }
}

#[cfg(test)]
mod caches {
    use super::*;
    use gw_core::CoreError;

    fn stamped_grid() -> Grid {
        let mut grid = Grid::new(4, 4).unwrap();
        set_kind(&mut grid, Position::new(0, 0), CellType::Source);
        set_kind(&mut grid, Position::new(3, 3), CellType::Sink);
        set_kind(&mut grid, Position::new(1, 0), CellType::Wall);
        set_kind(&mut grid, Position::new(2, 0), CellType::Trail);
        set_kind(&mut grid, Position::new(3, 0), CellType::MarkerC);
        set_kind(&mut grid, Position::new(0, 1), CellType::Signal);
        grid
    }

    #[test]
    fn rebuild_classifies_cells() {
        let grid = stamped_grid();
        let mut caches = SpatialCaches::new();
        caches.rebuild(&grid);

        assert_eq!(caches.sources(), &[Position::new(0, 0)]);
        assert_eq!(caches.sinks(), &[Position::new(3, 3)]);
        // 16 cells − 1 source − 1 sink − 1 wall − 1 signal = 12 free
        // (trail and marker cells count as free).
        assert_eq!(caches.free_cells().len(), 12);
        assert!(caches.free_cells().contains(&Position::new(2, 0)));
        assert!(caches.free_cells().contains(&Position::new(3, 0)));
        assert!(!caches.free_cells().contains(&Position::new(1, 0)));
        assert!(!caches.free_cells().contains(&Position::new(0, 1)));
    }

    #[test]
    fn random_picks_self_heal_from_empty() {
        let grid = stamped_grid();
        let mut caches = SpatialCaches::new(); // never rebuilt
        let mut rng = WorldRng::new(0);

        // All three picks rebuild on demand and then succeed.
        assert_eq!(caches.random_source(&grid, &mut rng).unwrap(), Position::new(0, 0));
        assert_eq!(caches.random_sink(&grid, &mut rng).unwrap(), Position::new(3, 3));
        assert!(grid.in_bounds(caches.random_free(&grid, &mut rng).unwrap()));
    }

    #[test]
    fn still_empty_after_rebuild_is_an_error() {
        let grid = Grid::new(2, 2).unwrap(); // all Empty: no sources or sinks
        let mut caches = SpatialCaches::new();
        let mut rng = WorldRng::new(0);
        assert!(matches!(
            caches.random_source(&grid, &mut rng),
            Err(CoreError::EmptyChoice)
        ));
        assert!(matches!(
            caches.random_sink(&grid, &mut rng),
            Err(CoreError::EmptyChoice)
        ));
    }
}
