pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod r#move;
pub mod outcome;
pub mod position;
pub mod session;
pub mod strategy;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn reversi_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use color::Color;
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add_class::<PyGameOutcome>()?;
    m.add("BLACK", Color::Black as i8)?;
    m.add("WHITE", Color::White as i8)?;
    m.add("BOARD_SIZE", board::BOARD_SIZE)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::Cell;
    use crate::color::Color;
    use crate::error::GameError;
    use crate::game::Game;
    use crate::outcome::GameOutcome;
    use crate::position::Position;

    fn to_py_err(err: GameError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame { game: Game::new() }
        }

        pub fn turn(&self) -> i8 {
            self.game.current_turn() as i8
        }

        pub fn get_cell(&self, row: i32, col: i32) -> PyResult<Option<i8>> {
            match self.game.board().get_cell(Position::new(row, col)) {
                Ok(Cell::Empty) => Ok(None),
                Ok(Cell::Occupied(color)) => Ok(Some(color as i8)),
                Err(err) => Err(to_py_err(err)),
            }
        }

        pub fn legal_moves(&self) -> Vec<(i32, i32)> {
            self.game
                .legal_moves()
                .into_iter()
                .map(|p| (p.row, p.col))
                .collect()
        }

        pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
            self.game.is_legal_move(Position::new(row, col))
        }

        /// Returns the flipped squares.
        pub fn attempt_move(&mut self, row: i32, col: i32) -> PyResult<Vec<(i32, i32)>> {
            self.game
                .attempt_move(Position::new(row, col))
                .map(|flipped| flipped.into_iter().map(|p| (p.row, p.col)).collect())
                .map_err(to_py_err)
        }

        pub fn advance_if_no_move(&mut self) -> bool {
            self.game.advance_if_no_move()
        }

        pub fn piece_count(&self, color: i8) -> PyResult<usize> {
            let color = Color::from_int(color).ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>("Invalid color value")
            })?;
            Ok(self.game.board().piece_count(color))
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn winner(&self) -> Option<i8> {
            self.game.winner().map(|c| c as i8)
        }

        pub fn outcome(&self) -> Option<PyGameOutcome> {
            self.game.outcome().map(|o| PyGameOutcome { outcome: o })
        }

        pub fn move_count(&self) -> usize {
            self.game.move_count()
        }

        pub fn clone(&self) -> PyGame {
            PyGame {
                game: self.game.clone(),
            }
        }

        pub fn __str__(&self) -> String {
            self.game.board().to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(turn={}, over={})",
                self.game.current_turn(),
                self.game.is_over()
            )
        }
    }

    #[pyclass(name = "GameOutcome")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyGameOutcome {
        outcome: GameOutcome,
    }

    #[pymethods]
    impl PyGameOutcome {
        pub fn winner(&self) -> i8 {
            self.outcome.winner() as i8
        }

        pub fn black_count(&self) -> usize {
            self.outcome.black
        }

        pub fn white_count(&self) -> usize {
            self.outcome.white
        }

        pub fn is_tie(&self) -> bool {
            self.outcome.is_tie()
        }

        pub fn __str__(&self) -> String {
            self.outcome.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("GameOutcome({})", self.outcome)
        }

        pub fn __eq__(&self, other: &PyGameOutcome) -> bool {
            self.outcome == other.outcome
        }
    }
}
