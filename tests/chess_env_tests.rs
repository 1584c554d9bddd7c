//! Chess environment integration tests.

use std::collections::BTreeSet;

use zarena::core::{
    ActionId, EnvConfig, EnvError, GameRng, Grid, PlayerId, DRAW_REWARD, INVALID_ACTION_REWARD, LOSS_REWARD,
    WIN_REWARD,
};
use zarena::env::{FirstLegalPolicy, GameState, Phase, Policy, RenderMode, TurnController};
use zarena::games::chess::{
    chess_env, Chess, ChessMove, ChessPosition, Notation, SpecialMove, DEFAULT_BOARD, KING_ID, PAWN_ID, QUEEN_ID,
    ROOK_ID,
};

fn action(env: &TurnController<Chess>, code: &str) -> ActionId {
    let mv = Notation::new(code).parse().unwrap();
    env.move_to_action(&mv)
}

fn play(env: &mut TurnController<Chess>, codes: &[&str]) {
    for code in codes {
        let step = env.step(action(env, code)).unwrap();
        assert_ne!(step.reward, INVALID_ACTION_REWARD, "{code} should be legal");
    }
}

fn destinations(env: &TurnController<Chess>) -> BTreeSet<(u8, u8)> {
    env.legal_actions()
        .into_iter()
        .filter_map(|a| match env.action_to_move(a).unwrap() {
            ChessMove::Normal { to, .. } => Some((to.row, to.col)),
            ChessMove::Special(_) => None,
        })
        .collect()
}

fn default_grid() -> Grid {
    DEFAULT_BOARD.iter().map(|row| row.to_vec()).collect()
}

/// Three black pawns around the king's neighbourhood.
fn pawn_board() -> Grid {
    let mut board = vec![vec![0i8; 8]; 8];
    board[3][3] = -PAWN_ID;
    board[2][4] = -PAWN_ID;
    board[3][5] = -PAWN_ID;
    board
}

// =============================================================================
// Check Detection
// =============================================================================

#[test]
fn test_checked_king_escape_squares() {
    let mut board = pawn_board();
    board[4][4] = KING_ID;
    board[0][0] = ROOK_ID;

    let mut env = chess_env(EnvConfig::new().with_initial_board(board));
    env.reset().unwrap();

    let expected: BTreeSet<(u8, u8)> = [(5, 5), (3, 4), (4, 3), (5, 4), (4, 5), (5, 3)].into_iter().collect();
    assert_eq!(destinations(&env), expected);
    assert!(env.info().unwrap().flag("white_king_is_checked"));
    assert!(!env.info().unwrap().flag("black_king_on_the_board"));
}

#[test]
fn test_unchecked_king_moves() {
    let mut board = pawn_board();
    board[3][4] = KING_ID;

    let mut env = chess_env(EnvConfig::new().with_initial_board(board));
    env.reset().unwrap();

    let expected: BTreeSet<(u8, u8)> = [(2, 4), (4, 3), (2, 3), (4, 5), (2, 5)].into_iter().collect();
    assert_eq!(destinations(&env), expected);
    assert!(!env.info().unwrap().flag("white_king_is_checked"));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_step_before_reset() {
    let mut env = chess_env(EnvConfig::default());
    assert_eq!(env.phase(), Phase::NotStarted);
    assert!(matches!(env.step(ActionId(0)), Err(EnvError::NotStarted)));
    assert!(env.legal_actions().is_empty());
}

#[test]
fn test_reset_observation() {
    let mut env = chess_env(EnvConfig::default());
    let observation = env.reset().unwrap();

    assert_eq!(observation.views[0], default_grid());
    assert_eq!(observation.views[0], observation.views[1]);
    assert_eq!(env.legal_actions().len(), 20);
    assert_eq!(env.to_play(), 0);
    assert_eq!(env.phase(), Phase::InProgress);
    assert!(env.history().is_empty());
}

#[test]
fn test_turns_alternate_and_rounds_count() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();

    let step = env.step(action(&env, "e2e4")).unwrap();
    assert_eq!(step.reward, 0.0);
    assert!(!step.done);
    assert_eq!(env.to_play(), 1);
    assert_eq!(step.info.move_count, 0);

    let step = env.step(action(&env, "e7e5")).unwrap();
    assert_eq!(env.to_play(), 0);
    assert_eq!(step.info.move_count, 1);
    assert_eq!(step.info.current_player, PlayerId::FIRST);
    assert_eq!(env.history().len(), 2);
}

#[test]
fn test_turns_alternate_over_random_playouts() {
    for seed in 0..16 {
        let mut env = chess_env(EnvConfig::new().with_seed(seed));
        env.reset().unwrap();
        let mut rng = GameRng::new(seed);

        for plies in 1..=60 {
            let legal = env.legal_actions();
            let action = *rng.choose(&legal).unwrap();
            let step = env.step(action).unwrap();
            if step.done {
                break;
            }
            assert_eq!(env.to_play() == 0, plies % 2 == 0, "seed {seed}, ply {plies}");
            assert_eq!(step.info.move_count, plies / 2);
        }
    }
}

#[test]
fn test_pawn_pushes() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();
    assert!(env.legal_actions().contains(&action(&env, "a2a4")));

    play(&mut env, &["a2a3", "h7h6", "a3a4", "h6h5"]);

    let mut expected = default_grid();
    expected[6][0] = 0;
    expected[4][0] = PAWN_ID;
    expected[1][7] = 0;
    expected[3][7] = -PAWN_ID;
    assert_eq!(env.observation().unwrap().views[0], expected);
    assert_eq!(env.info().unwrap().move_count, 2);
}

#[test]
fn test_invalid_action_changes_nothing() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();
    play(&mut env, &["e2e4"]);
    let before = env.state().cloned();

    for invalid in [action(&env, "e7e4"), action(&env, "e2e4"), ActionId(5000)] {
        let step = env.step(invalid).unwrap();
        assert_eq!(step.reward, INVALID_ACTION_REWARD);
        assert!(!step.done);
    }

    assert_eq!(env.state().cloned(), before);
    assert_eq!(env.history().len(), 1);
    assert_eq!(env.action_log().count(), 1);
    assert_eq!(env.to_play(), 1);
}

#[test]
fn test_reset_clears_episode() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();
    play(&mut env, &["e2e4", "e7e5"]);

    env.reset().unwrap();
    assert!(env.history().is_empty());
    assert_eq!(env.action_log().count(), 0);
    assert_eq!(env.info().unwrap().move_count, 0);
    assert_eq!(env.observation().unwrap().views[0], default_grid());
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();
    play(&mut env, &["f2f3", "e7e5", "g2g4"]);

    let step = env.step(action(&env, "d8h4")).unwrap();
    assert!(step.done);
    assert_eq!(step.reward, WIN_REWARD);
    assert!(step.info.flag("white_king_is_checked"));
    assert_eq!(env.phase(), Phase::Done);
    assert!(env.legal_actions().is_empty());
    assert_eq!(env.to_play(), 1);

    let before = env.state().cloned();
    for _ in 0..2 {
        let step = env.step(action(&env, "a2a3")).unwrap();
        assert!(step.done);
        assert_eq!(step.reward, DRAW_REWARD);
    }
    assert_eq!(env.state().cloned(), before);
    assert_eq!(env.history().len(), 4);
}

#[test]
fn test_stalemate_is_draw() {
    let mut board = vec![vec![0i8; 8]; 8];
    board[0][0] = -KING_ID;
    board[3][1] = QUEEN_ID;
    board[7][7] = KING_ID;

    let mut env = chess_env(EnvConfig::new().with_initial_board(board));
    env.reset().unwrap();

    let step = env.step(action(&env, "b5b6")).unwrap();
    assert!(step.done);
    assert_eq!(step.reward, DRAW_REWARD);
    assert!(!step.info.flag("black_king_is_checked"));
}

#[test]
fn test_threefold_repetition_is_draw() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();

    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    play(&mut env, &shuffle);
    play(&mut env, &shuffle);

    let step = env.step(action(&env, "g1f3")).unwrap();
    assert!(step.done);
    assert_eq!(step.reward, DRAW_REWARD);
}

// =============================================================================
// Special Moves
// =============================================================================

#[test]
fn test_king_side_castling() {
    let mut board = vec![vec![0i8; 8]; 8];
    board[7][4] = KING_ID;
    board[7][7] = ROOK_ID;
    board[0][4] = -KING_ID;

    let mut env = chess_env(EnvConfig::new().with_initial_board(board));
    env.reset().unwrap();

    let castle = env.move_to_action(&ChessMove::Special(SpecialMove::CastleKingSideWhite));
    assert_eq!(castle, ActionId(4096));
    assert!(env.legal_actions().contains(&castle));
    assert!(!env.legal_actions().contains(&ActionId(4097)));

    let black_castle = env.step(ActionId(4098)).unwrap();
    assert_eq!(black_castle.reward, INVALID_ACTION_REWARD);

    let step = env.step(castle).unwrap();
    assert!(!step.done);
    let grid = &step.observation.views[0];
    assert_eq!(grid[7][6], KING_ID);
    assert_eq!(grid[7][5], ROOK_ID);
    assert_eq!(grid[7][4], 0);
    assert!(!step.info.flag("white_king_castle_is_possible"));
    assert!(!step.info.flag("white_queen_castle_is_possible"));
    assert!(step.info.flag("black_king_castle_is_possible"));
}

#[test]
fn test_resignation_ends_episode() {
    let mut env = chess_env(EnvConfig::new().with_resignation());
    env.reset().unwrap();
    assert!(env.legal_actions().contains(&ActionId(4100)));

    let step = env.step(ActionId(4100)).unwrap();
    assert!(step.done);
    assert_eq!(step.reward, LOSS_REWARD);
    assert_eq!(env.state().unwrap().resigned, Some(PlayerId::FIRST));
    assert!(env.history().is_empty());
}

#[test]
fn test_resignation_disabled_by_default() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();

    let step = env.step(ActionId(4100)).unwrap();
    assert_eq!(step.reward, INVALID_ACTION_REWARD);
    assert!(!step.done);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_second_side_gets_opening_move() {
    let config = EnvConfig::new().with_player(PlayerId::SECOND);
    let mut env = TurnController::new(Chess::new(), config).with_opening_policy(FirstLegalPolicy);
    let observation = env.reset().unwrap();

    assert_eq!(env.to_play(), 1);
    assert_eq!(env.history().len(), 1);
    assert_eq!(env.info().unwrap().move_count, 0);
    assert_eq!(observation.views[0][4][0], PAWN_ID);
    assert_eq!(observation.views[0][6][0], 0);

    let log: Vec<_> = env.action_log().cloned().collect();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].player, PlayerId::FIRST);
}

#[test]
fn test_random_opening_is_seeded() {
    let config = EnvConfig::new().with_player(PlayerId::SECOND).with_seed(7);
    let mut a = chess_env(config.clone());
    let mut b = chess_env(config);

    assert_eq!(a.reset().unwrap(), b.reset().unwrap());
    assert_eq!(a.action_log().next(), b.action_log().next());
}

/// Always answers with the resignation id.
struct Resigner;

impl Policy<Chess> for Resigner {
    fn choose_action(
        &self,
        _game: &Chess,
        _state: &GameState<ChessPosition>,
        _legal: &[ActionId],
        _rng: &mut GameRng,
    ) -> Option<ActionId> {
        Some(ActionId(4100))
    }
}

#[test]
fn test_opening_move_never_resigns() {
    for seed in 0..200 {
        let config = EnvConfig::new()
            .with_player(PlayerId::SECOND)
            .with_resignation()
            .with_seed(seed);
        let mut env = chess_env(config);
        env.reset().unwrap();

        assert_eq!(env.phase(), Phase::InProgress, "seed {seed}");
        assert_eq!(env.state().unwrap().resigned, None);
        assert_ne!(env.action_log().next().unwrap().action, ActionId(4100));
        assert!(env.legal_actions().contains(&ActionId(4100)));
        assert_eq!(env.to_play(), 1);
    }
}

#[test]
fn test_opening_policy_resigning_is_rejected() {
    let config = EnvConfig::new().with_player(PlayerId::SECOND).with_resignation();
    let mut env = chess_env(config).with_opening_policy(Resigner);
    assert!(matches!(env.reset(), Err(EnvError::NoOpeningMove)));
}

#[test]
fn test_player_out_of_range() {
    let mut env = chess_env(EnvConfig::new().with_player(PlayerId::new(2)));
    assert!(matches!(env.reset(), Err(EnvError::Config(_))));
    assert_eq!(env.phase(), Phase::NotStarted);
}

#[test]
fn test_malformed_initial_board() {
    let mut board = default_grid();
    board[4][4] = 42;

    let mut env = chess_env(EnvConfig::new().with_initial_board(board));
    assert!(matches!(env.reset(), Err(EnvError::Config(_))));
}

#[test]
fn test_both_kings_checked_is_fatal() {
    let mut board = vec![vec![0i8; 8]; 8];
    board[7][4] = KING_ID;
    board[0][4] = -KING_ID;
    board[0][0] = ROOK_ID;
    board[7][0] = -ROOK_ID;

    let mut env = chess_env(EnvConfig::new().with_initial_board(board));
    assert!(matches!(env.reset(), Err(EnvError::Engine(_))));
}

// =============================================================================
// Rendering, Snapshots, Logging
// =============================================================================

#[test]
fn test_render_text_and_info() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();

    let text = env.render(RenderMode::Text).unwrap().unwrap();
    assert!(text.contains(" 8 |  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ |"));
    assert!(text.ends_with("      a  b  c  d  e  f  g  h \n"));
    assert!(text.contains(&format!("    {}\n      a  b  c  d  e  f  g  h \n", "-".repeat(25))));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[10], "      a  b  c  d  e  f  g  h ");

    let info = env.info().unwrap();
    assert!(info.possible_moves.contains(&"e2e4".to_string()));
    assert!(info.flag("white_king_on_the_board"));
}

#[test]
fn test_snapshot_restore() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();
    play(&mut env, &["e2e4"]);
    let snapshot = env.snapshot().unwrap();
    let observation = env.observation().unwrap();

    play(&mut env, &["e7e5", "g1f3"]);
    let restored = env.restore(&snapshot).unwrap();

    assert_eq!(restored, observation);
    assert_eq!(env.to_play(), 1);
    assert!(env.legal_actions().contains(&action(&env, "e7e5")));
    assert!(matches!(env.restore(&[1, 2, 3]), Err(EnvError::Snapshot(_))));
}

#[test]
fn test_restore_finished_game() {
    let mut env = chess_env(EnvConfig::default());
    env.reset().unwrap();
    play(&mut env, &["f2f3"]);
    let early = env.snapshot().unwrap();
    play(&mut env, &["e7e5", "g2g4", "d8h4"]);
    assert!(env.is_done());
    let mated = env.snapshot().unwrap();

    let mut other = chess_env(EnvConfig::default());
    other.reset().unwrap();
    other.restore(&mated).unwrap();
    assert_eq!(other.phase(), Phase::Done);
    assert!(other.legal_actions().is_empty());

    let step = other.step(ActionId(0)).unwrap();
    assert!(step.done);
    assert_eq!(step.reward, DRAW_REWARD);

    other.restore(&early).unwrap();
    assert_eq!(other.phase(), Phase::InProgress);
    assert!(other.legal_actions().contains(&action(&other, "e7e5")));
}

#[test]
fn test_verbose_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let mut env = chess_env(EnvConfig::new().verbose());
    env.reset().unwrap();
    play(&mut env, &["e2e4", "e7e5"]);
    assert_eq!(env.history().len(), 2);
}
