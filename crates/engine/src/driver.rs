//! Driver - turns time and player commands into reducer actions

use tetris_reducer_core::board::{self, MAX_Y};
use tetris_reducer_core::rng::{PieceSource, SimpleRng};
use tetris_reducer_core::{Action, GameSnapshot, Store};
use tetris_reducer_types::{Direction, GameState, GameStatus, BOARD_WIDTH, NEXT_QUEUE_CAPACITY};

use crate::command::{Command, CommandError};
use crate::config::DriverConfig;

/// Headless game loop.
///
/// Every state change goes through the owned [`Store`], so subscribers see
/// each intermediate state (spawn, move, landing, turn increment).
pub struct Driver<S = SimpleRng> {
    config: DriverConfig,
    store: Store,
    source: S,
    /// Time carried over towards the next gravity step
    pending_ms: u32,
}

impl Driver<SimpleRng> {
    /// Driver with a seeded uniform piece selector
    pub fn new(config: DriverConfig) -> Self {
        Self::with_source(config, SimpleRng::new(config.seed))
    }
}

impl<S: PieceSource> Driver<S> {
    pub fn with_source(config: DriverConfig, source: S) -> Self {
        Self {
            config,
            store: Store::default(),
            source,
            pending_ms: 0,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(self.store.state())
    }

    /// Direct access to the store, for subscribing
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Reset, fill the waiting queue and spawn the first piece
    pub fn start(&mut self) {
        self.pending_ms = 0;
        self.store.dispatch(Action::GameReset);
        self.store.dispatch(Action::GamePlay);

        while self.state().next_pieces.len() < NEXT_QUEUE_CAPACITY {
            let piece = self.source.next_piece();
            self.store.dispatch(Action::add_piece_to_waiting(piece));
        }

        tracing::info!(seed = self.config.seed, "game started");
        self.spawn_next();
    }

    /// Promote the head of the waiting queue to the active piece and refill
    /// the queue.
    ///
    /// Returns false when the new piece overlaps the stack (the game is then
    /// over) or when no piece could be spawned.
    pub fn spawn_next(&mut self) -> bool {
        let next = match self.state().next_pieces.first() {
            Some(piece) => piece.clone(),
            None => self.source.next_piece(),
        };

        self.store.dispatch(Action::RemovePieceFromWaiting);
        let fresh = self.source.next_piece();
        self.store.dispatch(Action::add_piece_to_waiting(fresh));
        let state = self.store.dispatch(Action::set_active_piece(next));

        if state.active_piece.is_empty() {
            return false;
        }
        if board::collides(&state.active_piece.blocks, &state.blocks) {
            self.top_out();
            return false;
        }
        true
    }

    fn top_out(&mut self) {
        let state = self.store.dispatch(Action::GameOver);
        tracing::info!(score = state.score, turn = state.game.turn, "game over");
    }

    /// One gravity step. Returns false if the game is not being played.
    ///
    /// A piece resting on the floor lands; otherwise it moves down one row
    /// (landing in place when blocked). A landing is followed by a turn
    /// increment and the next spawn.
    pub fn step_gravity(&mut self) -> bool {
        if !self.state().is_playing() {
            return false;
        }
        if self.state().active_piece.is_empty() {
            self.spawn_next();
            return true;
        }

        let on_floor = board::bounds(&self.state().active_piece.blocks)
            .is_some_and(|b| b.max_y >= MAX_Y);
        let before_score = self.state().score;
        let before_cells = self.state().blocks.len() + self.state().active_piece.len();

        let action = if on_floor {
            Action::PieceHitGround
        } else {
            Action::MoveActivePieceDown
        };
        let state = self.store.dispatch(action);

        if state.active_piece.is_empty() {
            let cleared = before_cells.saturating_sub(state.blocks.len()) / BOARD_WIDTH as usize;
            tracing::debug!(
                cleared_rows = cleared,
                score_delta = state.score.saturating_sub(before_score),
                "piece landed"
            );
            self.store.dispatch(Action::IncrementTurn);
            self.spawn_next();
        }
        true
    }

    /// Milliseconds per gravity step at the current speed
    pub fn gravity_interval_ms(&self) -> u32 {
        let speed = self.state().game.gravity_speed.max(1);
        (self.config.gravity_interval_ms / speed).max(1)
    }

    /// Feed elapsed wall time; runs as many gravity steps as have come due
    /// and returns how many ran.
    ///
    /// Time does not accumulate while the game is paused, over or not
    /// started.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.state().is_playing() {
            return 0;
        }
        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);

        let mut steps = 0;
        while self.state().is_playing() {
            let interval = self.gravity_interval_ms();
            if self.pending_ms < interval {
                break;
            }
            self.pending_ms -= interval;
            self.step_gravity();
            steps += 1;
        }

        if !self.state().is_playing() {
            self.pending_ms = 0;
        }
        steps
    }

    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Restart => {
                self.start();
                return Ok(());
            }
            Command::TogglePause => {
                match self.state().status() {
                    GameStatus::Playing => {
                        self.store.dispatch(Action::GamePaused);
                    }
                    GameStatus::Paused => {
                        self.store.dispatch(Action::GamePlay);
                    }
                    GameStatus::NotStarted | GameStatus::GameOver => {}
                }
                return Ok(());
            }
            _ => {}
        }

        if !self.state().is_playing() {
            return Err(CommandError::NotPlaying);
        }

        match command {
            Command::MoveLeft => {
                self.move_or_rotate(Action::move_active_piece(Some(Direction::Left)))
            }
            Command::MoveRight => {
                self.move_or_rotate(Action::move_active_piece(Some(Direction::Right)))
            }
            Command::Rotate => self.move_or_rotate(Action::RotatePiece),
            Command::SoftDrop => {
                self.step_gravity();
                Ok(())
            }
            Command::Hold => self.hold(),
            Command::Restart | Command::TogglePause => Ok(()),
        }
    }

    fn move_or_rotate(&mut self, action: Action) -> Result<(), CommandError> {
        let before = self.state().active_piece.clone();
        if self.store.dispatch(action).active_piece == before {
            return Err(CommandError::Blocked);
        }
        Ok(())
    }

    fn hold(&mut self) -> Result<(), CommandError> {
        let before = self.state().holding.clone();
        let state = self.store.dispatch(Action::SwapPiece);
        if state.holding == before {
            return Err(CommandError::HoldUnavailable);
        }
        // First hold of the game leaves nothing active.
        if state.active_piece.is_empty() {
            self.spawn_next();
        } else if board::collides(&state.active_piece.blocks, &state.blocks) {
            self.top_out();
        }
        Ok(())
    }
}

impl<S> std::fmt::Debug for Driver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("pending_ms", &self.pending_ms)
            .finish()
    }
}
