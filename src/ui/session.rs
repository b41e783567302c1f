use std::io::{self, BufRead, Write};

use crate::game::{next_generation, Grid};

use super::render;

/// The two commands the game understands, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Quit,
}

impl Command {
    /// Parse a line of user input. Leading/trailing whitespace and letter
    /// case are ignored; anything unrecognized yields `None`.
    pub fn parse(input: &str) -> Option<Command> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("NEXT") {
            Some(Command::Next)
        } else if trimmed.eq_ignore_ascii_case("QUIT") {
            Some(Command::Quit)
        } else {
            None
        }
    }
}

/// The interactive game loop: render the board, read a command, advance.
///
/// Generic over its input and output so tests can drive it with scripted
/// readers and capture what it prints.
pub struct Session<R, W> {
    grid: Grid,
    input: R,
    output: W,
    generation: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(grid: Grid, input: R, output: W) -> Self {
        Session {
            grid,
            input,
            output,
            generation: 0,
        }
    }

    /// Run until the user quits or input is exhausted.
    ///
    /// Unrecognized commands are reported and re-prompted without touching
    /// the game state; they are never errors. The only `Err` out of here is
    /// a real I/O failure on the terminal.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output
                .write_all(render::render_board(&self.grid).as_bytes())?;
            writeln!(self.output, "Total Alive Cells: {}", self.grid.live_count())?;
            write!(self.output, "Action (NEXT/QUIT): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF counts as quitting.
                break;
            }

            match Command::parse(&line) {
                Some(Command::Next) => {
                    self.grid = next_generation(&self.grid);
                    self.generation += 1;
                }
                Some(Command::Quit) => break,
                None => {
                    writeln!(
                        self.output,
                        "Unexpected command: '{}'. Please try again.",
                        line.trim()
                    )?;
                }
            }
        }
        writeln!(self.output, "Thank you for playing Conway's Game of Life!")?;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of transitions applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
