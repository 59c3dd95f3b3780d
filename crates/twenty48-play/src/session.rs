//! Line-oriented game session: reads commands, plays the game, writes replies.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use twenty48_core::{
    add_random_tile, Board, BoardError, Direction, Placement, Tables, WIN_EXPONENT,
};
use twenty48_engine::search::DEFAULT_DEPTH;
use twenty48_engine::{best_move_with, evaluate, worst_tile_with, SearchParams};

use crate::command::{parse_command, Command, Setting};
use crate::error::PlayError;

/// Number of random tiles on the board at the start of a game.
const START_TILES: usize = 2;

/// Knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Search depth in player plies.
    pub depth: u8,
    /// Seed used by `new` when none is given.
    pub seed: u64,
    /// Place new tiles with the worst-tile search instead of at random.
    pub evil: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: 0,
            evil: false,
        }
    }
}

/// A game in progress, driven by text commands.
///
/// Replies are written one per line to `out`. Errors in a command are
/// reported as `error <message>` and the session carries on; only I/O
/// failures end it.
pub struct Session<W: Write> {
    tables: Tables,
    rng: ChaCha8Rng,
    board: Board,
    score: u64,
    won: bool,
    config: SessionConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with an empty board, writing replies to `out`.
    pub fn new(out: W) -> Self {
        let config = SessionConfig::default();
        Self {
            tables: Tables::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            board: Board::EMPTY,
            score: 0,
            won: false,
            config,
            out,
        }
    }

    /// Current board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Points scored by merges since the game started.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Current settings.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Consume the session and return its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), PlayError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {}
                Err(e @ PlayError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(self.out, "error {e}")?;
                }
            }
        }

        info!(score = self.score, "session closed");
        Ok(())
    }

    /// Execute a single parsed command.
    pub fn execute(&mut self, cmd: Command) -> Result<(), PlayError> {
        match cmd {
            Command::New(seed) => self.handle_new(seed),
            Command::SetBoard(board) => {
                self.handle_set_board(board);
                Ok(())
            }
            Command::Add { position, exponent } => {
                self.board = self.board.try_with_tile(position, exponent)?;
                Ok(())
            }
            Command::Move(direction) => self.handle_move(direction),
            Command::Best => self.handle_best(),
            Command::Worst => self.handle_worst(),
            Command::Auto(limit) => self.handle_auto(limit),
            Command::Eval => {
                let score = evaluate(&self.tables, self.board);
                writeln!(self.out, "eval {score}")?;
                Ok(())
            }
            Command::Show => self.handle_show(),
            Command::Set(setting) => {
                self.handle_set(setting);
                Ok(())
            }
            Command::Quit | Command::Unknown(_) => Ok(()),
        }
    }

    fn params(&self) -> SearchParams {
        SearchParams::with_depth(self.config.depth)
    }

    fn handle_new(&mut self, seed: Option<u64>) -> Result<(), PlayError> {
        let seed = seed.unwrap_or(self.config.seed);
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.board = Board::EMPTY;
        self.score = 0;
        self.won = false;
        info!(seed, "new game");

        for _ in 0..START_TILES {
            let placement = add_random_tile(&mut self.board, &mut self.rng)?;
            self.write_tile("tile", placement)?;
        }
        Ok(())
    }

    fn handle_set_board(&mut self, board: Board) {
        self.board = board;
        self.score = 0;
        // A board that already holds the winning tile is not announced again
        self.won = board.max_exponent() >= WIN_EXPONENT;
    }

    fn handle_move(&mut self, direction: Direction) -> Result<(), PlayError> {
        match self.play(direction)? {
            Some(placement) => {
                self.write_tile("tile", placement)?;
                self.report_status()?;
            }
            None => writeln!(self.out, "nochange")?,
        }
        Ok(())
    }

    fn handle_best(&mut self) -> Result<(), PlayError> {
        let Some(best) = best_move_with(&self.tables, self.board, &self.params()) else {
            writeln!(self.out, "bestmove none")?;
            return Ok(());
        };
        writeln!(self.out, "bestmove {}", best.direction)?;
        if let Some(placement) = self.play(best.direction)? {
            self.write_tile("tile", placement)?;
        }
        self.report_status()?;
        Ok(())
    }

    fn handle_worst(&mut self) -> Result<(), PlayError> {
        let Some(worst) = worst_tile_with(&self.tables, self.board, &self.params()) else {
            writeln!(self.out, "worsttile none")?;
            return Ok(());
        };
        self.board = worst.board;
        self.write_tile("worsttile", worst.placement)?;
        self.report_status()?;
        Ok(())
    }

    fn handle_auto(&mut self, limit: Option<u32>) -> Result<(), PlayError> {
        let params = self.params();
        let mut played = 0u32;
        while limit.is_none_or(|n| played < n) {
            let Some(best) = best_move_with(&self.tables, self.board, &params) else {
                break;
            };
            self.play(best.direction)?;
            played += 1;
            if self.report_status()? {
                break;
            }
        }
        info!(moves = played, score = self.score, "autoplay finished");
        writeln!(self.out, "auto {played} score {}", self.score)?;
        Ok(())
    }

    fn handle_show(&mut self) -> Result<(), PlayError> {
        writeln!(self.out, "{}", self.board.pretty())?;
        writeln!(self.out, "score {}", self.score)?;
        let status = if self.tables.is_game_over(self.board) {
            "over"
        } else if self.won {
            "won"
        } else {
            "playing"
        };
        writeln!(self.out, "status {status}")?;
        Ok(())
    }

    fn handle_set(&mut self, setting: Setting) {
        match setting {
            Setting::Depth(depth) => self.config.depth = depth,
            Setting::Seed(seed) => self.config.seed = seed,
            Setting::Evil(evil) => self.config.evil = evil,
        }
        debug!(config = ?self.config, "settings changed");
    }

    /// Slide the board, add the merge score and place the next tile.
    ///
    /// Returns `None` and changes nothing when the slide is a no-op.
    fn play(&mut self, direction: Direction) -> Result<Option<Placement>, PlayError> {
        let (next, gained) = self.tables.slide_with_score(self.board, direction);
        if next == self.board {
            return Ok(None);
        }
        self.board = next;
        self.score += u64::from(gained);

        let placement = if self.config.evil {
            // A slide that moved something always leaves an empty cell
            let worst = worst_tile_with(&self.tables, self.board, &self.params())
                .ok_or(BoardError::BoardFull)?;
            self.board = worst.board;
            worst.placement
        } else {
            add_random_tile(&mut self.board, &mut self.rng)?
        };
        Ok(Some(placement))
    }

    /// Announce a first win and the end of the game. Returns whether the
    /// game is over.
    fn report_status(&mut self) -> Result<bool, PlayError> {
        if !self.won && self.board.max_exponent() >= WIN_EXPONENT {
            self.won = true;
            info!(score = self.score, "reached 2048");
            writeln!(self.out, "win")?;
        }
        let over = self.tables.is_game_over(self.board);
        if over {
            info!(score = self.score, "game over");
            writeln!(self.out, "gameover")?;
        }
        Ok(over)
    }

    fn write_tile(&mut self, label: &str, placement: Placement) -> Result<(), PlayError> {
        writeln!(
            self.out,
            "{label} {} {}",
            placement.tile.value(),
            placement.position
        )?;
        Ok(())
    }
}
