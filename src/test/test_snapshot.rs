#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::BoardTestState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn snapshot_records_board_state() {
        let mut game = BoardTestState::with_rule("O.\n..", ToggleRule::Cross);
        game.try_toggle(1, 1);

        let snapshot = BoardSnapshot::of(&game.board);
        assert_eq!(snapshot.rows, 2);
        assert_eq!(snapshot.cols, 2);
        assert_eq!(snapshot.rule, ToggleRule::Cross);
        assert_eq!(snapshot.moves, 1);
        assert_eq!(snapshot.outcome, GameOutcome::InProgress);
        assert_eq!(snapshot.cells, vec![vec![true, true], vec![true, true]]);
    }

    #[test]
    fn snapshot_json_restores_board() {
        let game = BoardTestState::new("O.O\n.O.");
        let json = BoardSnapshot::of(&game.board).to_json().unwrap();
        assert!(json.contains("\"rule\": \"single_cell\""));
        assert!(json.contains("\"outcome\": \"in_progress\""));

        let restored = BoardSnapshot::from_json(&json).unwrap().into_board().unwrap();
        assert_eq!(restored.grid(), game.board.grid());
        assert_eq!(restored.rule(), ToggleRule::SingleCell);
    }

    #[test]
    fn snapshot_with_mismatched_dimensions_is_rejected() {
        let snapshot = BoardSnapshot {
            rows: 3,
            cols: 2,
            rule: ToggleRule::SingleCell,
            chance_light_starts_on: 0.25,
            outcome: GameOutcome::Won,
            moves: 0,
            cells: vec![vec![false, false]],
        };
        assert!(matches!(snapshot.into_board(), Err(BoardError::InvalidConfiguration(_))));
    }

    #[test]
    fn restored_board_deals_new_games_with_saved_chance() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::new(BoardConfig::new(3, 4, 1.0).with_rule(ToggleRule::Cross), &mut rng).unwrap();
        let json = BoardSnapshot::of(&board).to_json().unwrap();
        assert!(json.contains("\"chance_light_starts_on\": 1.0"), "{}", json);

        let mut restored = BoardSnapshot::from_json(&json).unwrap().into_board().unwrap();
        assert_eq!(restored.config(), board.config());
        restored.toggle(Coord::new(0, 0));
        restored.new_game(&mut rng).unwrap();
        assert_eq!(restored.lit_count(), 12);
    }

    #[test]
    fn snapshot_without_chance_uses_default() {
        let json = r#"{ "rows": 1, "cols": 2, "rule": "single_cell", "outcome": "in_progress", "moves": 0, "cells": [[true, false]] }"#;
        let board = BoardSnapshot::from_json(json).unwrap().into_board().unwrap();
        assert_eq!(board.config().chance_light_starts_on, DEFAULT_CHANCE_LIGHT_STARTS_ON);
    }

    #[test]
    fn snapshot_with_invalid_chance_is_rejected() {
        let mut snapshot = BoardSnapshot::of(&BoardTestState::new("O.").board);
        snapshot.chance_light_starts_on = 2.0;
        assert!(matches!(snapshot.into_board(), Err(BoardError::InvalidConfiguration(_))));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            BoardSnapshot::from_json("{ not json"),
            Err(BoardError::Serialization(_))
        ));
    }
}
