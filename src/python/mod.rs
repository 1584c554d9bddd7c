//! Python bindings for zarena environments.
//!
//! # Quick Start
//!
//! ```python
//! import zarena
//!
//! env = zarena.ZarenaEnv("Chess-v0", player=0, seed=7)
//! observation = env.reset()
//!
//! action = env.legal_actions()[0]
//! observation, reward, done, info = env.step(action)
//! env.render()
//! ```

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

mod py_env;

pub use py_env::PyZarenaEnv;

/// zarena: turn-based game environments for RL training.
#[pymodule]
fn zarena(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyZarenaEnv>()?;
    let registry = crate::env::registry::global().map_err(|err| PyRuntimeError::new_err(err.to_string()))?;
    m.add("ENVIRONMENTS", registry.ids())?;
    Ok(())
}
