#[cfg(test)]
mod test {
    use crate::core::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn initialize_builds_requested_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (5, 5), (3, 8), (8, 3)] {
            let grid = initialize(&BoardConfig::new(rows, cols, 0.5), &mut rng).unwrap();
            assert_eq!(grid.rows(), rows);
            assert_eq!(grid.cols(), cols);
            let nested = grid.to_rows();
            assert_eq!(nested.len(), rows);
            assert!(nested.iter().all(|row| row.len() == cols));
        }
    }

    #[test]
    fn zero_chance_starts_already_won() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = initialize(&BoardConfig::new(6, 4, 0.0), &mut rng).unwrap();
        assert!(grid.cells().iter().all(|&lit| !lit));
        assert!(is_won(&grid));
    }

    #[test]
    fn full_chance_starts_all_lit() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = initialize(&BoardConfig::new(4, 6, 1.0), &mut rng).unwrap();
        assert!(grid.cells().iter().all(|&lit| lit));
        assert!(!is_won(&grid));
    }

    #[test]
    fn same_seed_deals_same_board() {
        let config = BoardConfig::default();
        let a = initialize(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = initialize(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lit_share_tracks_chance() {
        let mut rng = StdRng::seed_from_u64(2024);
        let grid = initialize(&BoardConfig::new(100, 100, 0.25), &mut rng).unwrap();
        let share = lit_count(&grid) as f64 / 10_000.0;
        assert!((0.2..0.3).contains(&share), "lit share was {}", share);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        for config in [
            BoardConfig::new(0, 5, 0.25),
            BoardConfig::new(5, 0, 0.25),
            BoardConfig::new(5, 5, -0.1),
            BoardConfig::new(5, 5, 1.5),
            BoardConfig::new(5, 5, f64::NAN),
            BoardConfig::new(MAX_DIMENSION + 1, 1, 0.25),
            BoardConfig::new(1, MAX_DIMENSION + 1, 0.25),
            BoardConfig::new(usize::MAX, 2, 0.0),
            BoardConfig::new(usize::MAX / 2 + 1, usize::MAX / 2 + 1, 0.0),
        ] {
            let result = initialize(&config, &mut rng);
            assert!(
                matches!(result, Err(BoardError::InvalidConfiguration(_))),
                "accepted {:?}",
                config
            );
        }
    }
}
