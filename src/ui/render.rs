use crate::game::{Cell, Grid};

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = 'O';
/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Alive => ALIVE_GLYPH,
        Cell::Dead => DEAD_GLYPH,
    }
}

/// Render the board for display: a blank line, one line per row with each
/// cell's glyph followed by a space, and a closing blank line. Display
/// only, nothing parses this back.
pub fn render_board(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() * 2 + 1) * grid.height() + 2);
    out.push('\n');
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            out.push(glyph(grid.get_or(row as i64, col as i64, Cell::Dead)));
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// The welcome banner printed before the game starts.
pub fn instructions() -> &'static str {
    "\
Welcome to Conway's Game of Life.

Command-line arguments:

* -w width - set the width of the board
* -h height - set the height of the board
* -s seed - choose the seed for the random game setup (useful if
  you want to play the same setup multiple times).

The game board is a grid of alive (O) and dead ( ) cells.

Rules of the Game of Life:

1. Any live cell with fewer than two live neighbors dies (underpopulation).
2. Any live cell with two or three live neighbors lives on to the next generation.
3. Any live cell with more than three live neighbors dies (overpopulation).
4. Any dead cell with exactly three live neighbors becomes a live cell (reproduction).

Commands during the game:

* NEXT - Proceed to the next generation.
* QUIT - Exit the game.
"
}
