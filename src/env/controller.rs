//! Turn controller: the reset/step lifecycle shared by every game.
//!
//! ## Lifecycle
//!
//! `NotStarted -> InProgress -> Done`. `reset` always leads to `InProgress`
//! (from any phase); `Done` is absorbing until the next reset.
//!
//! ## Step
//!
//! 1. After termination every step returns the draw signal, unchanged state.
//! 2. Actions outside the legal set return `INVALID_ACTION_REWARD`, unchanged
//!    state.
//! 3. Resignation ends the episode locally with `LOSS_REWARD`.
//! 4. Otherwise the move goes to the engine, the returned position is
//!    appended to the history and the terminal verdict is derived.
//! 5. Non-terminal steps hand the turn to the opponent.
//!
//! A step computes the next state, history and verdict on tentative copies
//! and commits them only after every engine call succeeded: the store is
//! either replaced as a whole or left untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{
    ActionId, ActionRecord, CodecError, EnvConfig, EnvError, GameRng, History, Observation, PlayerId, Result,
    Step, StepInfo, DRAW_REWARD, INVALID_ACTION_REWARD, LOSS_REWARD, WIN_REWARD,
};
use crate::rules::{RulesEngine, Verdict};

use super::codec::ActionCodec;
use super::game::{Game, GameMove, Position};
use super::policy::{Policy, UniformPolicy};
use super::render::{RenderMode, Renderer};
use super::state::{GameState, GameStateStore};

/// Serialized form of a controller's current state.
#[derive(Serialize, Deserialize)]
struct Snapshot<P> {
    state: GameState<P>,
    done: bool,
}

/// Episode phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Done,
}

/// Environment driving one game through the reset/step contract.
///
/// ## Example
///
/// ```
/// use zarena::core::EnvConfig;
/// use zarena::env::TurnController;
/// use zarena::games::tictactoe::TicTacToe;
///
/// let mut env = TurnController::new(TicTacToe::new(), EnvConfig::default());
/// env.reset().unwrap();
///
/// let action = env.legal_actions()[0];
/// let step = env.step(action).unwrap();
/// assert!(!step.done);
/// assert_eq!(env.to_play(), 1);
/// ```
pub struct TurnController<G: Game> {
    game: G,
    config: EnvConfig,
    phase: Phase,
    store: GameStateStore<Position<G>>,
    history: History<Position<G>>,
    action_log: Vector<ActionRecord>,
    /// Legal actions of the player to act, refreshed after every state change.
    legal: Vec<ActionId>,
    opening_policy: Box<dyn Policy<G>>,
    rng: GameRng,
    episode_rng: GameRng,
}

impl<G: Game> TurnController<G> {
    /// Create an environment. Call `reset` before stepping.
    #[must_use]
    pub fn new(game: G, config: EnvConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            game,
            config,
            phase: Phase::NotStarted,
            store: GameStateStore::new(),
            history: History::new(),
            action_log: Vector::new(),
            legal: Vec::new(),
            opening_policy: Box::new(UniformPolicy),
            episode_rng: rng.clone(),
            rng,
        }
    }

    /// Replace the policy that plays the forced opening move.
    #[must_use]
    pub fn with_opening_policy(mut self, policy: impl Policy<G> + 'static) -> Self {
        self.opening_policy = Box::new(policy);
        self
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Current state, once the environment has been reset.
    #[must_use]
    pub fn state(&self) -> Option<&GameState<Position<G>>> {
        self.store.get()
    }

    /// Positions returned by the engine in this episode.
    pub fn history(&self) -> &History<Position<G>> {
        &self.history
    }

    /// Actions played in this episode, including the forced opening move.
    pub fn action_log(&self) -> impl Iterator<Item = &ActionRecord> {
        self.action_log.iter()
    }

    #[must_use]
    pub fn action_space(&self) -> usize {
        self.game.codec().action_space()
    }

    /// Index of the player to act: 0 for the first player, 1 for the second.
    #[must_use]
    pub fn to_play(&self) -> usize {
        self.store.get().map_or(0, |state| state.player.index())
    }

    /// Legal actions of the player to act. Empty before reset and after
    /// termination.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<ActionId> {
        self.legal.clone()
    }

    /// Legal actions `player` would have in the current position.
    pub fn legal_actions_for(&self, player: PlayerId) -> Result<Vec<ActionId>> {
        let state = self.current()?;
        self.legal_actions_at(&state.position, player)
    }

    pub fn move_to_action(&self, mv: &GameMove<G>) -> ActionId {
        self.game.codec().move_to_action(mv)
    }

    pub fn action_to_move(&self, action: ActionId) -> Result<GameMove<G>> {
        Ok(self.game.codec().action_to_move(action)?)
    }

    /// Start a new episode.
    ///
    /// Loads the configured board, clears the history and, if the agent
    /// plays the second side, lets the opening policy move for the first
    /// side before returning. The opening move is never a resignation.
    pub fn reset(&mut self) -> Result<Observation> {
        self.config.validate()?;
        let position = self.game.initial_position(self.config.initial_board.as_ref())?;
        let position = self.game.engine().update_state(&position)?;
        let state = GameState::new(position);
        let legal = self.legal_actions_at(&state.position, state.player)?;

        self.store.replace(state);
        self.history = History::new();
        self.action_log = Vector::new();
        self.legal = legal;
        self.phase = Phase::InProgress;
        self.episode_rng = self.rng.fork();
        debug!(game = self.game.name(), player = %self.config.player, "reset");

        if self.config.player != PlayerId::FIRST {
            let state = self.current()?.clone();
            let codec = self.game.codec();
            let resign = codec.resignation().map(|mv| codec.move_to_action(&mv));
            let candidates: Vec<ActionId> = self
                .legal
                .iter()
                .copied()
                .filter(|&action| Some(action) != resign)
                .collect();
            let action = self
                .opening_policy
                .choose_action(&self.game, &state, &candidates, &mut self.episode_rng)
                .ok_or(EnvError::NoOpeningMove)?;
            if !candidates.contains(&action) {
                return Err(EnvError::NoOpeningMove);
            }
            debug!(%action, "forced opening move");
            self.play(action)?;
        }

        self.observation()
    }

    /// Play one action for the player to act.
    pub fn step(&mut self, action: ActionId) -> Result<Step> {
        let state = self.current()?;

        if self.phase == Phase::Done {
            debug!(%action, "step after termination");
            return self.outcome(DRAW_REWARD, true);
        }

        let legal = self.legal_actions_at(&state.position, state.player)?;
        if !legal.contains(&action) {
            debug!(%action, player = %state.player, "invalid action");
            self.legal = legal;
            return self.outcome(INVALID_ACTION_REWARD, false);
        }

        let (reward, done) = self.play(action)?;
        self.outcome(reward, done)
    }

    /// Apply a legal action and commit the resulting state.
    fn play(&mut self, action: ActionId) -> Result<(f32, bool)> {
        let state = self.current()?.clone();
        let codec = self.game.codec();
        let mv = codec.action_to_move(action)?;
        let record = ActionRecord::new(state.player, action, state.move_count);

        if codec.is_resignation(&mv) {
            debug!(player = %state.player, "resigned");
            self.store.replace(state.with_resignation());
            self.action_log.push_back(record);
            self.legal.clear();
            self.phase = Phase::Done;
            return Ok((LOSS_REWARD, true));
        }

        if self.config.verbose {
            let renderer = self.game.renderer();
            info!(
                player = %state.player,
                "{}\n{}",
                renderer.describe_move(&state.position, &mv),
                renderer.render_text(&state.position, std::slice::from_ref(&mv)),
            );
        }

        let native = codec.to_native(&mv)?;
        let position = self.game.engine().next_state(&state.position, state.player, &native)?;
        let mut history = self.history.clone();
        history.push(position.clone());
        let next = state.with_position(position);

        let done = self.is_terminal(&history, &next)?;
        let (next, reward, legal) = if done {
            let reward = self.terminal_reward(&history, &next)?;
            (next, reward, Vec::new())
        } else {
            let next = next.advance_turn();
            let legal = self.legal_actions_at(&next.position, next.player)?;
            (next, 0.0, legal)
        };

        if done {
            debug!(reward, moves = history.len(), "episode finished");
        } else if next.player == PlayerId::FIRST {
            debug!(move_count = next.move_count, "round complete");
        }

        self.store.replace(next);
        self.history = history;
        self.action_log.push_back(record);
        self.legal = legal;
        if done {
            self.phase = Phase::Done;
        }
        Ok((reward, done))
    }

    /// Termination: the engine's verdict for the player who just moved, or a
    /// local checkmate for either player, or a stalemate of the opponent.
    fn is_terminal(&self, history: &History<Position<G>>, state: &GameState<Position<G>>) -> Result<bool> {
        let player = state.player;
        if self.game.engine().is_game_over(history, &state.position, player)?.is_terminal() {
            return Ok(true);
        }
        if self.local_verdict(&state.position, player)? == Verdict::Loss {
            return Ok(true);
        }
        Ok(self.local_verdict(&state.position, player.opponent())?.is_terminal())
    }

    /// Verdict for `player` derived from its move list and check flag alone.
    ///
    /// No moves and in check is a loss, no moves otherwise a draw.
    pub fn local_verdict(&self, position: &Position<G>, player: PlayerId) -> Result<Verdict> {
        let engine = self.game.engine();
        if !engine.possible_moves(position, player, false)?.is_empty() {
            return Ok(Verdict::Ongoing);
        }
        if engine.in_check(position, player) {
            Ok(Verdict::Loss)
        } else {
            Ok(Verdict::Draw)
        }
    }

    /// Reward of a terminal position for the player who just moved.
    fn terminal_reward(&self, history: &History<Position<G>>, state: &GameState<Position<G>>) -> Result<f32> {
        let engine = self.game.engine();
        let player = state.player;
        if engine.is_game_over(history, &state.position, player)? == Verdict::Loss {
            return Ok(LOSS_REWARD);
        }
        if engine.is_game_over(history, &state.position, player.opponent())? == Verdict::Loss {
            return Ok(WIN_REWARD);
        }
        Ok(DRAW_REWARD)
    }

    fn legal_actions_at(&self, position: &Position<G>, player: PlayerId) -> Result<Vec<ActionId>> {
        let codec = self.game.codec();
        let moves = self.game.engine().possible_moves(position, player, false)?;
        let mut actions = moves
            .iter()
            .map(|native| codec.from_native(native).map(|mv| codec.move_to_action(&mv)))
            .collect::<std::result::Result<Vec<_>, CodecError>>()?;

        if self.config.allow_resignation {
            if let Some(resign) = codec.resignation() {
                actions.push(codec.move_to_action(&resign));
            }
        }
        Ok(actions)
    }

    fn current(&self) -> Result<&GameState<Position<G>>> {
        self.store.get().ok_or(EnvError::NotStarted)
    }

    fn outcome(&self, reward: f32, done: bool) -> Result<Step> {
        Ok(Step {
            observation: self.observation()?,
            reward,
            done,
            info: self.info()?,
        })
    }

    /// Full-information views of the current board.
    pub fn observation(&self) -> Result<Observation> {
        let state = self.current()?;
        Ok(Observation::full_information(self.game.grid(&state.position)))
    }

    /// Diagnostic info for the current state.
    pub fn info(&self) -> Result<StepInfo> {
        let state = self.current()?;
        let codec = self.game.codec();
        let possible_moves = self
            .legal
            .iter()
            .map(|&action| codec.action_to_move(action).map(|mv| mv.to_string()))
            .collect::<std::result::Result<Vec<_>, CodecError>>()?;
        let flags = self
            .game
            .flags(&state.position)
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        Ok(StepInfo {
            move_count: state.move_count,
            current_player: state.player,
            possible_moves,
            flags,
        })
    }

    /// Render the current board.
    pub fn render(&self, mode: RenderMode) -> Result<Option<String>> {
        self.render_moves(&[], mode)
    }

    /// Render the current board with `moves` highlighted.
    pub fn render_moves(&self, moves: &[GameMove<G>], mode: RenderMode) -> Result<Option<String>> {
        let state = self.current()?;
        Ok(self.game.renderer().render(&state.position, moves, mode))
    }

    /// Ask `policy` for an action for the player to act.
    pub fn suggest_action(&mut self, policy: &dyn Policy<G>) -> Result<Option<ActionId>> {
        let state = self.store.get().ok_or(EnvError::NotStarted)?;
        Ok(policy.choose_action(&self.game, state, &self.legal, &mut self.episode_rng))
    }

    /// Serialize the current state together with the episode phase.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        let snapshot = Snapshot {
            state: self.current()?.clone(),
            done: self.is_done(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Replace the current state with a serialized one.
    ///
    /// The engine recomputes the derived flags of the restored position. The
    /// history restarts from the restored position. A finished episode stays
    /// finished, and so does a position where the player to act has already
    /// lost or drawn.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<Observation> {
        let Snapshot { state, done } = bincode::deserialize::<Snapshot<Position<G>>>(bytes)?;
        let position = self.game.engine().update_state(&state.position)?;
        if position != state.position {
            warn!("restored snapshot carried stale derived flags");
        }
        let state = state.with_position(position);

        let mut history = History::new();
        history.push(state.position.clone());

        let done = done
            || state.resigned.is_some()
            || self.local_verdict(&state.position, state.player)?.is_terminal()
            || self
                .game
                .engine()
                .is_game_over(&history, &state.position, state.player)?
                .is_terminal();
        let legal = if done {
            Vec::new()
        } else {
            self.legal_actions_at(&state.position, state.player)?
        };
        debug!(done, player = %state.player, "restored");

        self.store.replace(state);
        self.history = history;
        self.action_log = Vector::new();
        self.legal = legal;
        self.phase = if done { Phase::Done } else { Phase::InProgress };
        self.observation()
    }
}
