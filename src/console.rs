//! Interactive menu and turn loop
//!
//! The console never reads stdin directly. Input comes through a [`Prompt`],
//! which is a `rustyline` editor in the binary and a [`ScriptedPrompt`] when
//! driving games programmatically. Output goes to any [`Write`].

use crate::{Computer, Difficulty, Game, GameConfig, Mode, Player, Result, TerminalStatus};
use rustyline::{DefaultEditor, error::ReadlineError};
use std::{collections::VecDeque, io::Write};
use tracing::{info, warn};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

const BANNER: &str = concat!(
    "\t _____ _        _____            _____\n",
    "\t|_   _(_)      |_   _|          |_   _|\n",
    "\t | |  _  ___    | | __ _  ___    | | ___   ___\n",
    "\t | | | |/ __|   | |/ _` |/ __|   | |/ _ \\ / _ \\\n",
    "\t | | | | (__    | | (_| | (__    | | (_) |  __/\n",
    "\t \\_/ |_|\\___|   \\_/\\__,_|\\___|   \\_/\\___/ \\___|\n",
);

const RULES: &str = concat!(
    " ******************************************************************\n",
    " *                                                                *\n",
    " *  The game is played on a 3x3 grid.                             *\n",
    " *  Players take turns marking a square.                          *\n",
    " *  The player who succeeds in placing three of their marks in a  *\n",
    " *  horizontal, vertical, or diagonal row wins the game.          *\n",
    " *                                                                *\n",
    " ******************************************************************\n\n",
);

const MENU: &str = "\t\t\t1. Vs Human\n\t\t\t2. Vs Computer\n\t\t\t3. Exit\n";

/// Source of input lines.
pub trait Prompt {
    /// Shows `prompt` and reads one line. `None` means input has ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input with line editing and in-memory history.
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

pub struct Console<P, W> {
    prompt: P,
    out: W,
    clear_screen: bool,
    seed: Option<u64>,
}

impl<P: Prompt, W: Write> Console<P, W> {
    pub fn new(prompt: P, out: W) -> Self {
        Self {
            prompt,
            out,
            clear_screen: true,
            seed: None,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Seed handed to the random bot of every game started from this console.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Menu loop. Returns on "Exit" or end of input.
    pub fn run_menu(&mut self) -> Result<()> {
        loop {
            self.clear()?;
            write!(self.out, "{BANNER}\n{RULES}{MENU}")?;

            let Some(choice) = self.ask("\nChoose Option (1-3): ")? else {
                return Ok(());
            };

            let completed = match choice.trim() {
                "1" => self
                    .play(GameConfig {
                        mode: Mode::Human,
                        seed: self.seed,
                        ..GameConfig::default()
                    })?
                    .is_some(),
                "2" => match self.computer_setup()? {
                    Some(config) => self.play(config)?.is_some(),
                    None => false,
                },
                "3" => return Ok(()),
                other => {
                    warn!(choice = other, "invalid menu option");
                    writeln!(self.out, "\nInvalid Option")?;
                    true
                }
            };
            if !completed {
                return Ok(());
            }

            if self.ask("\n\nPress Enter to Continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    /// Asks for difficulty and who opens. `None` when input ends.
    pub fn computer_setup(&mut self) -> Result<Option<GameConfig>> {
        writeln!(self.out, "\nDifficulty\n1. Easy\n2. Hard")?;
        let Some(answer) = self.ask("\nChoose option (1-2): ")? else {
            return Ok(None);
        };
        let difficulty = match answer.trim().parse::<i64>() {
            Ok(level) if level >= 2 => Difficulty::Hard,
            _ => Difficulty::Easy,
        };

        let Some(answer) = self.ask("\nDoes the Computer take the first turn? (y/n) ")? else {
            return Ok(None);
        };
        let computer_first = answer.trim_start().starts_with('y');

        Ok(Some(GameConfig {
            mode: Mode::Computer,
            difficulty,
            computer_first,
            seed: self.seed,
        }))
    }

    /// Plays one game to the end. `None` when input ends mid-game.
    pub fn play(&mut self, config: GameConfig) -> Result<Option<TerminalStatus>> {
        info!(?config, "starting game");

        let mut game = Game::new();
        let mut computer = match config.mode {
            Mode::Computer => Some(Computer::new(&config)),
            Mode::Human => None,
        };

        loop {
            let player = game.to_move();
            let turn = game.turn();

            let index = match computer.as_mut() {
                Some(computer) if computer.player() == player => computer.choose_move(&game)?,
                _ => match self.human_move(&game)? {
                    Some(index) => index,
                    None => return Ok(None),
                },
            };

            let status = game.play(index)?;
            self.print_board(&game, player, turn)?;

            match status {
                TerminalStatus::Ongoing => continue,
                TerminalStatus::Win(winner) => {
                    if computer.as_ref().is_some_and(|c| c.player() == winner) {
                        writeln!(self.out, "\nComputer wins!")?;
                    } else {
                        writeln!(self.out, "\nPlayer {winner} wins!")?;
                    }
                }
                TerminalStatus::Tie => writeln!(self.out, "\nIt's a tie!")?,
            }

            writeln!(self.out, "\nThe Game took {} turns to finish!", game.turn())?;
            return Ok(Some(status));
        }
    }

    fn human_move(&mut self, game: &Game) -> Result<Option<usize>> {
        let player = game.to_move();
        loop {
            self.print_board(game, player, game.turn())?;

            let Some(line) = self.ask(&format!("\nPlayer {player} turn (1-9): "))? else {
                return Ok(None);
            };
            match parse_position(&line) {
                Some(index) if game.board().is_move_valid(index) => return Ok(Some(index)),
                _ => warn!(input = line.trim(), %player, "rejected move"),
            }
        }
    }

    fn print_board(&mut self, game: &Game, player: Player, turn: u32) -> Result<()> {
        self.clear()?;
        writeln!(self.out, "\nPlayer: {player}")?;
        writeln!(self.out, "Turn: {turn}\n")?;
        for line in game.board().to_string().lines() {
            writeln!(self.out, "\t\t{line}")?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.flush()?;
        self.prompt.read_line(prompt)
    }
}

/// Converts a 1-based position typed by a player into a cell index.
pub fn parse_position(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}
