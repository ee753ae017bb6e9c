//! Python bindings for kalah-core

use pyo3::prelude::*;

use crate::board::{Board, Player};
use crate::rules::SearchConfig;

fn parse_player(player: &str) -> PyResult<Player> {
    Ok(player.parse::<Player>()?)
}

/// Python-facing wrapper around Board
#[pyclass(name = "Board")]
#[derive(Clone)]
pub struct PyBoard {
    inner: Board,
}

#[pymethods]
impl PyBoard {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<SearchConfig>) -> Self {
        PyBoard {
            inner: Board::with_config(config.unwrap_or_default()),
        }
    }

    fn populate(&mut self, counts: Vec<u32>) -> PyResult<()> {
        Ok(self.inner.populate(&counts)?)
    }

    fn fork(&self) -> Self {
        PyBoard {
            inner: self.inner.fork(),
        }
    }

    fn score(&self, player: &str) -> PyResult<u32> {
        Ok(self.inner.score(parse_player(player)?)?)
    }

    /// Sow from `position`; returns True when the sow ended in a free turn
    fn sow(&mut self, position: usize, player: &str) -> PyResult<bool> {
        let report = self.inner.sow(position, parse_player(player)?)?;
        Ok(report.ended_in_free_turn())
    }

    fn legal_moves(&self, player: &str) -> PyResult<Vec<usize>> {
        Ok(self.inner.legal_moves(parse_player(player)?))
    }

    /// Best move as e.g. "player1 regular 2", or None
    fn find_best_move(&self, player: &str) -> PyResult<Option<String>> {
        let best = self.inner.find_best_move(parse_player(player)?)?;
        Ok(best.map(|s| s.to_string()))
    }

    /// Best move as a board position, or None
    fn find_best_position(&self, player: &str) -> PyResult<Option<usize>> {
        let best = self.inner.find_best_move(parse_player(player)?)?;
        Ok(best.map(|s| s.position))
    }

    #[getter]
    fn pieces(&self) -> Vec<u32> {
        self.inner.pieces().to_vec()
    }

    #[getter]
    fn depth(&self) -> u32 {
        self.inner.depth()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(pieces={:?}, depth={})",
            self.inner.pieces(),
            self.inner.depth()
        )
    }
}

/// Seed a board with `counts` and return the best move for `player`
#[pyfunction]
#[pyo3(signature = (counts, player, chain_free_turns=false))]
fn best_move(counts: Vec<u32>, player: &str, chain_free_turns: bool) -> PyResult<Option<String>> {
    let config = if chain_free_turns {
        SearchConfig::chained()
    } else {
        SearchConfig::default()
    };
    let mut board = Board::with_config(config);
    board.populate(&counts)?;
    let best = board.find_best_move(parse_player(player)?)?;
    Ok(best.map(|s| s.to_string()))
}

#[pymodule]
fn kalah_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyBoard>()?;
    m.add_class::<SearchConfig>()?;
    m.add_function(wrap_pyfunction!(best_move, m)?)?;
    Ok(())
}
