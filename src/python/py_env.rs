//! Environment bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{ActionId, EnvConfig, EnvError, Grid, PlayerId, StepInfo};
use crate::env::{registry, Environment, RenderMode};

fn to_py_err(err: EnvError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn info_dict<'py>(py: Python<'py>, info: &StepInfo) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("move_count", info.move_count)?;
    dict.set_item("current_player", info.current_player.index())?;
    dict.set_item("possible_moves", info.possible_moves.clone())?;
    for (name, value) in &info.flags {
        dict.set_item(name, *value)?;
    }
    Ok(dict)
}

/// Python wrapper around a registered environment.
///
/// Observations are lists of two identical board views, one per player.
#[pyclass(name = "ZarenaEnv")]
pub struct PyZarenaEnv {
    id: String,
    inner: Box<dyn Environment>,
}

#[pymethods]
impl PyZarenaEnv {
    /// Build the environment registered under `env_id`.
    ///
    /// # Arguments
    /// - env_id: Registry id, e.g. "Chess-v0" or "TicTacToe-v0"
    /// - player: Side assigned to the agent (0 moves first)
    /// - seed: Seed for the opening policy
    /// - verbose: Log every move with the rendered board
    /// - allow_resignation: Make the resign action legal
    /// - initial_board: Board loaded at every reset
    #[new]
    #[pyo3(signature = (
        env_id,
        player = 0,
        seed = 42,
        verbose = false,
        allow_resignation = false,
        initial_board = None
    ))]
    fn new(
        env_id: &str,
        player: u8,
        seed: u64,
        verbose: bool,
        allow_resignation: bool,
        initial_board: Option<Grid>,
    ) -> PyResult<Self> {
        let config = EnvConfig {
            initial_board,
            player: PlayerId::new(player),
            verbose,
            seed,
            allow_resignation,
        };
        let inner = registry::make(env_id, &config).map_err(to_py_err)?;
        Ok(Self {
            id: env_id.to_string(),
            inner,
        })
    }

    /// Start a new episode and return the initial observation.
    fn reset(&mut self) -> PyResult<Vec<Grid>> {
        let observation = self.inner.reset().map_err(to_py_err)?;
        Ok(observation.views.to_vec())
    }

    /// Play one action.
    ///
    /// Returns (observation, reward, done, info).
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: u32,
    ) -> PyResult<(Vec<Grid>, f32, bool, Bound<'py, PyDict>)> {
        let step = self.inner.step(ActionId(action)).map_err(to_py_err)?;
        let info = info_dict(py, &step.info)?;
        Ok((step.observation.views.to_vec(), step.reward, step.done, info))
    }

    /// Legal actions of the player to act.
    fn legal_actions(&self) -> Vec<u32> {
        self.inner.legal_actions().into_iter().map(ActionId::raw).collect()
    }

    /// Index of the player to act.
    fn to_play(&self) -> usize {
        self.inner.to_play()
    }

    #[getter]
    fn action_space(&self) -> usize {
        self.inner.action_space()
    }

    #[getter]
    fn done(&self) -> bool {
        self.inner.is_done()
    }

    /// Render the board: "human" prints it, "text" returns it.
    #[pyo3(signature = (mode = "human"))]
    fn render(&self, mode: &str) -> PyResult<Option<String>> {
        let mode = match mode {
            "human" => RenderMode::Human,
            "text" | "string" => RenderMode::Text,
            other => return Err(PyValueError::new_err(format!("unknown render mode `{other}`"))),
        };
        self.inner.render(mode).map_err(to_py_err)
    }

    /// Serialized current state.
    fn get_state(&self) -> PyResult<Vec<u8>> {
        self.inner.snapshot().map_err(to_py_err)
    }

    /// Restore a state produced by `get_state`.
    fn set_state(&mut self, state: Vec<u8>) -> PyResult<Vec<Grid>> {
        let observation = self.inner.restore(&state).map_err(to_py_err)?;
        Ok(observation.views.to_vec())
    }

    fn __repr__(&self) -> String {
        format!("ZarenaEnv({})", self.id)
    }
}
