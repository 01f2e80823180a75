//! Engine controller implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::{Engine, MoveChoice};
use crate::board::{Board, Color, EngineError, SearchParams};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Maximum sleep duration when polling a deadline
const MAX_POLL_SLEEP_MS: u64 = 5;

/// One background `choose_move` call.
pub struct SearchJob {
    /// Stop flag shared with the engine
    stop: Arc<AtomicBool>,
    /// Receives the decision when the worker finishes
    receiver: Receiver<MoveChoice>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
    /// Optional handle to the timer thread enforcing the deadline
    timer_handle: Option<JoinHandle<()>>,
}

impl SearchJob {
    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Returns true once the worker has delivered its result.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the worker delivers its decision.
    pub fn wait(self) -> Result<MoveChoice, EngineError> {
        let result = self
            .receiver
            .recv()
            .map_err(|_| EngineError::WorkerDisconnected);
        let _ = self.handle.join();
        if let Some(timer) = self.timer_handle {
            let _ = timer.join();
        }
        result
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) -> Result<MoveChoice, EngineError> {
        self.signal_stop();
        self.wait()
    }
}

/// Runs an `Engine` on a background thread, one job at a time.
pub struct EngineController {
    engine: Arc<Mutex<Engine>>,
    current_job: Option<SearchJob>,
}

impl Default for EngineController {
    fn default() -> Self {
        EngineController::new(SearchParams::default())
    }
}

impl EngineController {
    /// Create a new engine controller
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self::from_engine(Engine::new(params))
    }

    #[must_use]
    pub fn from_engine(engine: Engine) -> Self {
        EngineController {
            engine: Arc::new(Mutex::new(engine)),
            current_job: None,
        }
    }

    /// Shared handle to the engine. Locking it blocks while a search runs.
    #[must_use]
    pub fn engine(&self) -> &Arc<Mutex<Engine>> {
        &self.engine
    }

    /// Check if there's an unfinished search
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job
            .as_ref()
            .is_some_and(|job| !job.is_finished())
    }

    fn spawn_deadline_timer(deadline: Instant, stop: Arc<AtomicBool>) -> JoinHandle<()> {
        thread::spawn(move || loop {
            if stop.load(Ordering::Relaxed) {
                break;
            }
            let now = Instant::now();
            if now >= deadline {
                stop.store(true, Ordering::Relaxed);
                break;
            }
            let sleep_for = (deadline - now).min(Duration::from_millis(MAX_POLL_SLEEP_MS));
            thread::sleep(sleep_for);
        })
    }

    /// Start choosing a move for `color` on a background thread.
    ///
    /// With a `time_limit` the search is stopped when it expires and the
    /// best move found so far is delivered. A finished job whose result was
    /// never collected is discarded.
    ///
    /// # Errors
    /// `SearchInProgress` if the previous job is still running, or
    /// `SpawnFailed` if no thread could be started.
    pub fn start_search(
        &mut self,
        board: &Board,
        color: Color,
        time_limit: Option<Duration>,
    ) -> Result<(), EngineError> {
        if self.is_searching() {
            return Err(EngineError::SearchInProgress);
        }
        if let Some(stale) = self.current_job.take() {
            let _ = stale.wait();
        }

        let stop = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::channel();

        let engine = Arc::clone(&self.engine);
        let search_board = board.clone();
        let stop_clone = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut engine = engine.lock();
                engine.set_stop_flag(Some(Arc::clone(&stop_clone)));
                let choice = engine.choose_move(&search_board, color);
                engine.set_stop_flag(None);
                drop(engine);
                // Releases the timer thread
                stop_clone.store(true, Ordering::Relaxed);
                let _ = sender.send(choice);
            })
            .map_err(|err| EngineError::SpawnFailed {
                reason: err.to_string(),
            })?;

        let timer_handle = time_limit
            .map(|limit| Self::spawn_deadline_timer(Instant::now() + limit, Arc::clone(&stop)));

        log_debug!("search started for {} (limit {:?})", color, time_limit);
        self.current_job = Some(SearchJob {
            stop,
            receiver,
            handle,
            timer_handle,
        });
        Ok(())
    }

    /// Result of the current job if it has finished, without blocking.
    pub fn try_result(&mut self) -> Option<Result<MoveChoice, EngineError>> {
        if self.is_searching() {
            return None;
        }
        self.current_job.take().map(SearchJob::wait)
    }

    /// Block until the current job finishes. `None` if there is no job.
    pub fn wait(&mut self) -> Option<Result<MoveChoice, EngineError>> {
        self.current_job.take().map(SearchJob::wait)
    }

    /// Signal stop to the active search (non-blocking)
    pub fn signal_stop(&self) {
        if let Some(job) = &self.current_job {
            job.signal_stop();
        }
    }

    /// Stop the active search and collect its result.
    pub fn stop_and_wait(&mut self) -> Option<Result<MoveChoice, EngineError>> {
        let job = self.current_job.take()?;
        log_debug!("stopping search");
        Some(job.stop_and_wait())
    }

    /// Abandon any search and reset the engine's tables.
    pub fn new_game(&mut self) {
        let _ = self.stop_and_wait();
        self.engine.lock().new_game();
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        let _ = self.stop_and_wait();
    }
}
