//! Property-based tests for the state machine and the rule engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use minigame::core::{HookResult, State, StateId, Step};
use minigame::engine::{Cell, SearchStrategy, Side, TicTacToe};
use minigame::machine::{FiniteStateMachine, MachineError};
use proptest::prelude::*;
use std::time::Duration;

struct Marker(u32);

impl State<()> for Marker {
    fn id(&self) -> StateId {
        StateId(self.0)
    }

    fn name(&self) -> &str {
        "Marker"
    }

    fn update(&mut self, _ctx: &mut (), _dt: Duration) -> HookResult {
        Ok(Step::Stay)
    }
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn has_monochrome_line(game: &TicTacToe) -> bool {
    LINES.iter().any(|line| {
        let cells: Vec<Cell> = line
            .iter()
            .map(|&(r, c)| game.cell(r, c).unwrap())
            .collect();
        cells[0] != Cell::Empty && cells.iter().all(|&cell| cell == cells[0])
    })
}

fn board_from(values: &[u8]) -> TicTacToe {
    let mut game = TicTacToe::new();
    for (index, value) in values.iter().enumerate() {
        let side = match value {
            1 => Side::Player,
            2 => Side::Ai,
            _ => continue,
        };
        game.set_move(index / 3, index % 3, side).unwrap();
    }
    game
}

prop_compose! {
    fn arbitrary_board()(values in prop::collection::vec(0u8..3, 9)) -> TicTacToe {
        board_from(&values)
    }
}

prop_compose! {
    fn full_board()(values in prop::collection::vec(1u8..3, 9)) -> TicTacToe {
        board_from(&values)
    }
}

prop_compose! {
    /// Board reached by alternating legal moves, stopping at a decided game.
    fn reachable_board()(
        order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(),
        moves in 2..8usize,
        ai_first in any::<bool>(),
    ) -> TicTacToe {
        let mut game = TicTacToe::new();
        let mut side = if ai_first { Side::Ai } else { Side::Player };
        for &index in order.iter().take(moves) {
            if game.is_game_over() {
                break;
            }
            game.set_move(index / 3, index % 3, side).unwrap();
            side = side.opponent();
        }
        game
    }
}

proptest! {
    #[test]
    fn distinct_ids_register_and_activate(ids in prop::collection::btree_set(0u32..1000, 1..20)) {
        let mut machine = FiniteStateMachine::new();
        for &id in &ids {
            prop_assert!(machine.add(Marker(id)).is_ok());
        }

        for &id in &ids {
            machine.set_current_state(id, &mut ()).unwrap();
            prop_assert_eq!(machine.current_id(), Some(StateId(id)));
            prop_assert_eq!(machine.current_state().map(|s| s.id()), Some(StateId(id)));
        }
        prop_assert_eq!(machine.history().transitions().len(), ids.len());
    }

    #[test]
    fn duplicate_ids_are_rejected(ids in prop::collection::btree_set(0u32..1000, 1..20), pick in any::<prop::sample::Index>()) {
        let ids: Vec<u32> = ids.into_iter().collect();
        let mut machine = FiniteStateMachine::<()>::new();
        for &id in &ids {
            machine.add(Marker(id)).unwrap();
        }

        let duplicate = *pick.get(&ids);
        let is_duplicate_error = matches!(
            machine.add(Marker(duplicate)),
            Err(MachineError::DuplicateState { .. })
        );
        prop_assert!(is_duplicate_error);
        prop_assert_eq!(machine.len(), ids.len());
    }

    #[test]
    fn unregistered_ids_are_rejected(ids in prop::collection::btree_set(0u32..100, 1..10), target in 100u32..200) {
        let mut machine = FiniteStateMachine::<()>::new();
        for &id in &ids {
            machine.add(Marker(id)).unwrap();
        }

        let is_unknown_error = matches!(
            machine.set_current_state(target, &mut ()),
            Err(MachineError::UnknownState { .. })
        );
        prop_assert!(is_unknown_error);
        prop_assert!(machine.current_id().is_none());
    }

    #[test]
    fn game_over_iff_monochrome_line(game in arbitrary_board()) {
        prop_assert_eq!(game.is_game_over(), has_monochrome_line(&game));
    }

    #[test]
    fn full_board_without_line_is_a_draw(game in full_board()) {
        prop_assert!(!game.is_any_move_left());
        if !has_monochrome_line(&game) {
            prop_assert!(!game.is_game_over());
        }
    }

    #[test]
    fn reset_always_reopens_board(game in arbitrary_board()) {
        let mut game = game;
        game.reset();
        prop_assert!(game.is_any_move_left());
        prop_assert!(!game.is_game_over());
    }

    #[test]
    fn set_move_is_visible_in_cell(row in 0usize..3, col in 0usize..3, ai in any::<bool>()) {
        let side = if ai { Side::Ai } else { Side::Player };
        let mut game = TicTacToe::new();
        game.set_move(row, col, side).unwrap();

        prop_assert_eq!(game.cell(row, col), Some(Cell::Occupied(side)));
        // A second move on the same cell is refused and the first mark stays.
        prop_assert!(game.set_move(row, col, side.opponent()).is_err());
        prop_assert_eq!(game.cell(row, col), Some(Cell::Occupied(side)));
    }

    #[test]
    fn next_move_targets_an_empty_cell(game in arbitrary_board()) {
        prop_assume!(!game.is_game_over() && game.is_any_move_left());
        prop_assume!(game.move_count() >= 3);

        let position = game.find_next_move_with(SearchStrategy::AlphaBeta).unwrap();
        prop_assert!(game.is_empty(position));
    }

    #[test]
    fn pruning_matches_exhaustive_search(game in reachable_board()) {
        prop_assume!(!game.is_game_over() && game.is_any_move_left());

        let exhaustive = game.find_next_move_with(SearchStrategy::Minimax).unwrap();
        let pruned = game.find_next_move_with(SearchStrategy::AlphaBeta).unwrap();
        prop_assert_eq!(exhaustive, pruned);
    }

    #[test]
    fn decided_boards_refuse_search(game in arbitrary_board()) {
        prop_assume!(game.is_game_over() || !game.is_any_move_left());
        prop_assert!(game.find_next_move().is_err());
    }
}
