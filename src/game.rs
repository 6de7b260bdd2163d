use crate::{
    board::Board,
    common::{Cell, MoveError, Outcome, Player},
};

/// What happened to the turn after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The opponent is now to move.
    Switched,
    /// The opponent has no legal reply; the mover goes again.
    OpponentPassed,
    /// Neither side can move.
    GameOver,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over(Outcome),
}

/// Core game logic holding the board and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_turn: Player,
}

impl GameEngine {
    /// Create a new game at the opening position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::Black,
        }
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: Board, current_turn: Player) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// The side not currently to move.
    pub fn other_player(&self) -> Player {
        self.current_turn.opponent()
    }

    fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Play a move for the side to move, returning `true` if it was accepted.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        self.play(row, col).is_ok()
    }

    /// Checked form of [`attempt_move`](Self::attempt_move).
    ///
    /// On success the piece is placed, captures are flipped, and the turn
    /// passes to the opponent unless the game is over or the opponent has no
    /// reply. On error nothing changes.
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnOutcome, MoveError> {
        if !Board::in_bounds(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.cells()[row][col].is_empty() {
            return Err(MoveError::Occupied { row, col });
        }
        if !self.is_valid_move(row, col) {
            log::debug!("{} rejected at ({}, {}): no capture", self.current_turn, row, col);
            return Err(MoveError::NoCapture { row, col });
        }

        let mover = self.current_turn;
        self.board.flip_pieces(row, col, mover);
        self.board.cells_mut()[row][col] = Cell::from(mover);
        log::debug!("{} played ({}, {})", mover, row, col);

        // Order matters: full game over first, then opponent stalemate.
        if self.is_game_over() {
            log::info!("game over: {}", self.winner());
            return Ok(TurnOutcome::GameOver);
        }
        if !self.has_valid_move(self.other_player()) {
            log::debug!("{} has no reply; {} continues", self.other_player(), mover);
            return Ok(TurnOutcome::OpponentPassed);
        }
        self.switch_turn();
        Ok(TurnOutcome::Switched)
    }

    /// Is `(row, col)` a legal move for the side to move?
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.board.is_valid_move(row, col, self.current_turn)
    }

    /// Does `player` have any legal move, regardless of whose turn it is?
    pub fn has_valid_move(&self, player: Player) -> bool {
        self.board.has_valid_move(player)
    }

    /// Legal moves for the side to move, row-major.
    pub fn legal_moves(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.board.legal_moves(self.current_turn)
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(Player::Black) && !self.has_valid_move(Player::White)
    }

    /// Compare piece counts. Meaningful once the game is over, but defined at
    /// any point.
    pub fn winner(&self) -> Outcome {
        let (black, white) = self.piece_counts();
        Outcome::from_counts(black, white)
    }

    /// Returns `(black_count, white_count)`.
    pub fn piece_counts(&self) -> (usize, usize) {
        self.board.piece_counts()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Over(self.winner())
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
