use crate::board::Board;
use crate::color::Color;
use crate::error::GameError;
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::r#move::Move;

/// Turn controller: owns the board for one game and decides whose move it is.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_turn: Color,
    move_history: Vec<Move>,
    consecutive_passes: u8,
}

impl Game {
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::Black)
    }

    /// Starts from an arbitrary position with `turn` to move.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            current_turn: turn,
            move_history: Vec::new(),
            consecutive_passes: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// True when the last two turns were both forced passes.
    pub fn both_passed(&self) -> bool {
        self.consecutive_passes >= 2
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current_turn)
    }

    pub fn is_legal_move(&self, pos: Position) -> bool {
        self.board.is_legal_move(pos, self.current_turn)
    }

    /// Plays `pos` for the side to move and hands the turn over.
    ///
    /// On any error the game is left exactly as it was, so the caller can
    /// ask the same side for another move.
    pub fn attempt_move(&mut self, pos: Position) -> Result<Vec<Position>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let flipped = self.board.apply_move(pos, self.current_turn)?;

        self.move_history.push(Move::place(self.current_turn, pos));
        self.consecutive_passes = 0;
        self.current_turn = self.current_turn.opposite();

        Ok(flipped)
    }

    /// Passes for the side to move if it has no legal placement.
    ///
    /// Returns `true` when a pass happened; the caller should re-evaluate
    /// the position for the new side without asking for a move.
    pub fn advance_if_no_move(&mut self) -> bool {
        if self.board.has_any_move(self.current_turn) {
            return false;
        }

        self.move_history.push(Move::pass(self.current_turn));
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        self.current_turn = self.current_turn.opposite();
        true
    }

    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Final tallies, available once neither side can move.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_over() {
            return None;
        }
        Some(GameOutcome::new(
            self.board.piece_count(Color::Black),
            self.board.piece_count(Color::White),
        ))
    }

    /// The winner under the tie-to-Black policy, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.outcome().map(|o| o.winner())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, moves: {}, outcome: {:?})\n{}",
            self.current_turn,
            self.move_history.len(),
            self.outcome(),
            self.board
        )
    }
}
