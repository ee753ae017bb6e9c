#[cfg(feature = "python")]
use pyo3::prelude::*;

/// What a sow does once it grants a free turn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FreeTurnPolicy {
    /// Compute the follow-up best move and report it; the player is asked again
    #[default]
    Prompt,
    /// Sow the follow-up best move straight away
    Chain,
}

#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub free_turn: FreeTurnPolicy,

    /// Boards forked deeper than this stop simulating and pick the first
    /// non-empty slot instead
    pub max_depth: Option<u32>,
}

impl SearchConfig {
    pub fn chained() -> Self {
        SearchConfig {
            free_turn: FreeTurnPolicy::Chain,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn chains_free_turns(&self) -> bool {
        self.free_turn == FreeTurnPolicy::Chain
    }

    pub(crate) fn depth_exceeded(&self, depth: u32) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl SearchConfig {
    #[new]
    #[pyo3(signature = (chain_free_turns=false, max_depth=None))]
    fn py_new(chain_free_turns: bool, max_depth: Option<u32>) -> Self {
        SearchConfig {
            free_turn: if chain_free_turns {
                FreeTurnPolicy::Chain
            } else {
                FreeTurnPolicy::Prompt
            },
            max_depth,
        }
    }

    #[getter]
    fn chain_free_turns(&self) -> bool {
        self.chains_free_turns()
    }

    #[getter(max_depth)]
    fn py_max_depth(&self) -> Option<u32> {
        self.max_depth
    }

    fn __repr__(&self) -> String {
        format!(
            "SearchConfig(chain_free_turns={}, max_depth={:?})",
            self.chains_free_turns(),
            self.max_depth
        )
    }
}
