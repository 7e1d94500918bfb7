//! Interactive simulation state shared by the input and render paths.
//!
//! A windowing front end owns one `Session` and hands it by `&mut` to its key
//! and mouse callbacks, then calls `tick` and reads the board once per frame.

use std::time::Duration;

use crate::board::{BoardConfig, LifeBoard, Topology};
use crate::history::History;

/// Keys the session reacts to. Anything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Right,
    Up,
    Down,
    Char(char),
}

/// Settings for a new session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Board edge length in cells.
    pub size: i64,
    pub topology: Topology,
    /// Snapshots kept for stepping backwards.
    pub history_capacity: usize,
    /// Screen pixels per cell.
    pub scale: u32,
    /// Delay between generations while the simulation runs.
    pub sleep: Duration,
    /// Amount `Up`/`Down` change the delay by.
    pub sleep_step: Duration,
    pub board: BoardConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 400,
            topology: Topology::Toroidal,
            history_capacity: 16,
            scale: 2,
            sleep: Duration::from_millis(50),
            sleep_step: Duration::from_millis(10),
            board: BoardConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }
}

pub struct Session {
    board: Option<LifeBoard>,
    topology: Topology,
    history: History,
    running: bool,
    simulating: bool,
    single_step: bool,
    sleep: Duration,
    sleep_step: Duration,
    scale: u32,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let board = match LifeBoard::with_config(config.size, config.board.clone()) {
            Ok(board) => Some(board),
            Err(err) => {
                log::warn!("starting session without a board: {err}");
                None
            }
        };
        Self::with_board(board, config)
    }

    /// Build a session around an existing (possibly absent) board. The
    /// `size` and `board` fields of `config` are ignored.
    pub fn with_board(board: Option<LifeBoard>, config: SessionConfig) -> Self {
        Self {
            board,
            topology: config.topology,
            history: History::new(config.history_capacity),
            running: true,
            simulating: false,
            single_step: false,
            sleep: config.sleep,
            sleep_step: config.sleep_step,
            scale: config.scale.max(1),
        }
    }

    pub fn board(&self) -> Option<&LifeBoard> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut LifeBoard> {
        self.board.as_mut()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_simulating(&self) -> bool {
        self.simulating
    }

    pub fn sleep(&self) -> Duration {
        self.sleep
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Reads as dead when there is no board.
    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.board.as_ref().is_some_and(|b| b.get_cell(x, y))
    }

    /// Rejected when there is no board.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> bool {
        self.board.as_mut().is_some_and(|b| b.set_cell(x, y, alive))
    }

    pub fn handle_key(&mut self, key: Key) {
        log::debug!("key {key:?}");
        match key {
            Key::Escape | Key::Char('q' | 'Q') => {
                self.running = false;
            }
            Key::Char('s' | 'S') => {
                self.simulating = !self.simulating;
                self.single_step = false;
                log::info!(
                    "simulation {}",
                    if self.simulating { "started" } else { "stopped" }
                );
            }
            Key::Right | Key::Char('n' | 'N') => {
                self.simulating = true;
                self.single_step = true;
            }
            Key::Char('p' | 'P') => {
                self.step_back();
            }
            Key::Up => {
                self.sleep = self.sleep.saturating_sub(self.sleep_step);
                log::info!("delay {:?}", self.sleep);
            }
            Key::Down => {
                self.sleep += self.sleep_step;
                log::info!("delay {:?}", self.sleep);
            }
            Key::Char(_) => {}
        }
    }

    /// Toggle the cell under a screen pixel. Returns whether the board
    /// accepted the write.
    pub fn handle_click(&mut self, px: i64, py: i64) -> bool {
        let scale = i64::from(self.scale);
        let (x, y) = (px / scale, py / scale);
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        let accepted = board.toggle_cell(x, y);
        log::debug!("click ({px}, {py}) -> cell ({x}, {y}), accepted: {accepted}");
        accepted
    }

    /// Restore the newest history entry. Stops the simulation.
    pub fn step_back(&mut self) -> bool {
        self.simulating = false;
        self.single_step = false;
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        match self.history.pop() {
            Some(snapshot) => board.restore(&snapshot),
            None => {
                log::debug!("no history to step back into");
                false
            }
        }
    }

    /// Compute one generation if the simulation is running. Returns whether
    /// the board advanced.
    pub fn tick(&mut self) -> bool {
        if !self.simulating {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        self.history.push(board.snapshot());
        board.advance(self.topology);
        if self.single_step {
            self.simulating = false;
            self.single_step = false;
        }
        true
    }

    /// One line per row, `#` for cells `get_cell` reports alive.
    pub fn render_text(&self) -> String {
        let Some(board) = self.board.as_ref() else {
            return String::new();
        };
        let size = board.size() as i64;
        let mut out = String::with_capacity((board.size() + 1) * board.size());
        for y in 0..size {
            for x in 0..size {
                out.push(if board.get_cell(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
