//! A running game: one `GameState` behind a mutex, human input on one
//! side and a scheduled computer turn on the other.
//!
//! The computer's "thinking" is a Tokio task that sleeps for the difficulty's
//! delay and then plays. Each task remembers the game epoch it was scheduled
//! in; if the game was reset or ended in the meantime the epoch no longer
//! matches and the task drops its move. Reset and resign also abort the
//! pending task outright.

use std::collections::BTreeSet;
use std::sync::Arc;

use chess_core::{
    Board, Color, GameState, MoveError, MovePolicy, MoveRecord, Piece, Selection, Square, Status,
};
use opponent::Opponent;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::GameConfig;

pub type MoveCallback = Arc<dyn Fn(&MoveRecord) + Send + Sync>;
pub type StatusCallback = Arc<dyn Fn(Status) + Send + Sync>;

/// Errors while starting a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("a session must be started from within a Tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

enum Event {
    Moved(MoveRecord),
    Status(Status),
}

#[derive(Default)]
struct Callbacks {
    on_move: Vec<MoveCallback>,
    on_status: Vec<StatusCallback>,
}

struct Inner {
    state: GameState,
    policy: Box<dyn MovePolicy>,
    pending: Option<JoinHandle<()>>,
}

/// Builder for [`Session`]
pub struct SessionBuilder {
    config: GameConfig,
    callbacks: Callbacks,
    policy: Option<Box<dyn MovePolicy>>,
    start: Option<(Board, Color)>,
}

impl SessionBuilder {
    /// Called once per applied move, human or computer.
    pub fn on_move(mut self, f: impl Fn(&MoveRecord) + Send + Sync + 'static) -> Self {
        self.callbacks.on_move.push(Arc::new(f));
        self
    }

    /// Called whenever the status changes (game over, or back to in progress on reset).
    pub fn on_status(mut self, f: impl Fn(Status) + Send + Sync + 'static) -> Self {
        self.callbacks.on_status.push(Arc::new(f));
        self
    }

    /// Replace the default [`Opponent`] for the configured difficulty.
    pub fn policy(mut self, policy: Box<dyn MovePolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Start from a custom position instead of the standard one.
    pub fn position(mut self, board: Board, active: Color) -> Self {
        self.start = Some((board, active));
        self
    }

    /// Build the session and, if the computer is to move, schedule its turn.
    pub fn start(self) -> Result<Session, SessionError> {
        let runtime = Handle::try_current()?;
        let state = match self.start {
            Some((board, active)) => GameState::from_board(board, active),
            None => GameState::new(),
        };
        let policy = self
            .policy
            .unwrap_or_else(|| Box::new(Opponent::new(self.config.difficulty)));

        let session = Session {
            config: self.config,
            callbacks: Arc::new(self.callbacks),
            runtime,
            inner: Arc::new(Mutex::new(Inner {
                state,
                policy,
                pending: None,
            })),
        };
        info!(config = ?session.config, "session started");
        {
            let mut inner = session.inner.lock();
            session.schedule_opponent(&mut inner);
        }
        Ok(session)
    }
}

/// Handle to a running game. Cheap to clone; clones share the same game.
#[derive(Clone)]
pub struct Session {
    config: GameConfig,
    callbacks: Arc<Callbacks>,
    runtime: Handle,
    inner: Arc<Mutex<Inner>>,
}

impl Session {
    pub fn builder(config: GameConfig) -> SessionBuilder {
        SessionBuilder {
            config,
            callbacks: Callbacks::default(),
            policy: None,
            start: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// A human click on `sq`. See [`GameState::select`] for the selection rules.
    pub fn click(&self, sq: Square) -> Result<Selection, MoveError> {
        let (result, events) = {
            let mut inner = self.inner.lock();
            self.check_human_turn(&inner.state)?;
            let result = inner.state.select(sq);
            let mut events = Vec::new();
            if let Ok(Selection::Moved(record)) = &result {
                self.after_move(&mut inner, record.clone(), &mut events);
            }
            (result, events)
        };
        if let Err(e) = &result {
            warn!(square = %sq, error = %e, "click rejected");
        }
        self.dispatch(events);
        result
    }

    /// A complete human move in one call.
    pub fn play(&self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let (result, events) = {
            let mut inner = self.inner.lock();
            self.check_human_turn(&inner.state)?;
            let result = inner.state.apply(from, to);
            let mut events = Vec::new();
            if let Ok(record) = &result {
                self.after_move(&mut inner, record.clone(), &mut events);
            }
            (result, events)
        };
        if let Err(e) = &result {
            warn!(%from, %to, error = %e, "move rejected");
        }
        self.dispatch(events);
        result
    }

    /// `color` resigns. Any pending computer turn is discarded.
    pub fn resign(&self, color: Color) -> Result<Status, MoveError> {
        let status = {
            let mut inner = self.inner.lock();
            let status = inner.state.resign(color)?;
            Self::cancel_pending(&mut inner);
            status
        };
        self.dispatch(vec![Event::Status(status)]);
        Ok(status)
    }

    /// Start over from the initial position. Any pending computer turn is discarded.
    pub fn reset(&self) {
        {
            let mut inner = self.inner.lock();
            Self::cancel_pending(&mut inner);
            inner.state.reset();
            inner.policy.new_game();
            self.schedule_opponent(&mut inner);
        }
        self.dispatch(vec![Event::Status(Status::InProgress)]);
    }

    // -------------------------------------------------------------------------
    // Queries (read-only)
    // -------------------------------------------------------------------------

    pub fn legal_targets(&self, sq: Square) -> BTreeSet<Square> {
        self.inner.lock().state.legal_targets(sq)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.inner.lock().state.piece_at(sq)
    }

    pub fn status(&self) -> Status {
        self.inner.lock().state.status()
    }

    pub fn active_color(&self) -> Color {
        self.inner.lock().state.active_color()
    }

    pub fn selected(&self) -> Option<Square> {
        self.inner.lock().state.selected()
    }

    pub fn history(&self) -> Vec<MoveRecord> {
        self.inner.lock().state.history().to_vec()
    }

    /// Copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.inner.lock().state.board().clone()
    }

    /// True while a computer turn is scheduled and has not run yet.
    pub fn opponent_pending(&self) -> bool {
        self.inner
            .lock()
            .pending
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn check_human_turn(&self, state: &GameState) -> Result<(), MoveError> {
        if state.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.config.opponent_color() == Some(state.active_color()) {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    fn after_move(&self, inner: &mut Inner, record: MoveRecord, events: &mut Vec<Event>) {
        events.push(Event::Moved(record));
        let status = inner.state.status();
        if status.is_over() {
            events.push(Event::Status(status));
        } else {
            self.schedule_opponent(inner);
        }
    }

    fn schedule_opponent(&self, inner: &mut Inner) {
        let Some(color) = self.config.opponent_color() else {
            return;
        };
        if inner.state.status().is_over() || inner.state.active_color() != color {
            return;
        }

        let epoch = inner.state.epoch();
        let delay = self.config.difficulty.thinking_delay();
        let session = self.clone();
        debug!(%color, epoch, ?delay, "scheduling opponent turn");
        inner.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            session.run_opponent_turn(epoch, color);
        }));
    }

    fn run_opponent_turn(&self, epoch: u64, color: Color) {
        let events = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            if inner.state.epoch() != epoch
                || inner.state.status().is_over()
                || inner.state.active_color() != color
            {
                debug!(epoch, current = inner.state.epoch(), "discarding stale opponent turn");
                return;
            }
            inner.pending = None;

            let mut events = Vec::new();
            match inner.policy.choose_move(inner.state.board(), color) {
                Some(mv) => match inner.state.apply(mv.from, mv.to) {
                    Ok(record) => self.after_move(inner, record, &mut events),
                    Err(e) => {
                        // a rejected move forfeits, otherwise the turn never returns
                        warn!(%mv, error = %e, "opponent produced a rejected move, resigning");
                        if let Ok(status) = inner.state.resign(color) {
                            events.push(Event::Status(status));
                        }
                    }
                },
                None => {
                    info!(%color, "opponent has no moves");
                    if let Ok(status) = inner.state.declare_no_moves(color) {
                        events.push(Event::Status(status));
                    }
                }
            }
            events
        };
        self.dispatch(events);
    }

    fn cancel_pending(inner: &mut Inner) {
        if let Some(handle) = inner.pending.take() {
            handle.abort();
            debug!("pending opponent turn cancelled");
        }
    }

    /// Runs callbacks with the state lock released.
    fn dispatch(&self, events: Vec<Event>) {
        for event in events {
            match event {
                Event::Moved(record) => {
                    for f in &self.callbacks.on_move {
                        f(&record);
                    }
                }
                Event::Status(status) => {
                    for f in &self.callbacks.on_status {
                        f(status);
                    }
                }
            }
        }
    }
}
