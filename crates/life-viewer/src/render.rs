//! Terminal rendering with crossterm.

use crate::session::{Frame, Session};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use life_core::{CellCoordinate, ViewConfig};
use life_world::Board;
use std::io::{self, Write};

/// Draws a board to a terminal. Each cell covers `cell_width` ×
/// `cell_height` terminal cells; the status line sits below the board.
pub struct TerminalRenderer<W: Write> {
    out: W,
    alive: String,
    dead: String,
    cell_height: u16,
    cell_width: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, view: &ViewConfig) -> Self {
        let repeat = |glyph: char| glyph.to_string().repeat(view.cell_width as usize);
        Self {
            out,
            alive: repeat(view.alive_glyph),
            dead: repeat(view.dead_glyph),
            cell_height: view.cell_height,
            cell_width: view.cell_width,
        }
    }

    pub fn draw(&mut self, session: &Session, frame: &Frame) -> io::Result<()> {
        let board = session.board();

        match frame {
            Frame::Full => {
                queue!(self.out, Clear(ClearType::All))?;
                for (cell, alive) in board.iter() {
                    self.draw_cell(cell, alive)?;
                }
            }
            Frame::Incremental(changes) => {
                for &cell in changes {
                    let alive = board
                        .get(cell.column, cell.row)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
                    self.draw_cell(cell, alive)?;
                }
            }
            Frame::Unchanged => {}
        }

        self.draw_status(session, board)?;
        self.out.flush()
    }

    fn draw_cell(&mut self, cell: CellCoordinate, alive: bool) -> io::Result<()> {
        let glyphs = if alive { &self.alive } else { &self.dead };
        let column = cell.column as u16 * self.cell_width;
        let row = cell.row as u16 * self.cell_height;

        for dy in 0..self.cell_height {
            queue!(self.out, MoveTo(column, row + dy), Print(glyphs))?;
        }
        Ok(())
    }

    fn draw_status(&mut self, session: &Session, board: &Board) -> io::Result<()> {
        let status = format!(
            "generation {} | {} | population {} | space: run  tab: pause  c: clear  q: quit",
            session.generation(),
            session.state(),
            board.population()
        );
        queue!(
            self.out,
            MoveTo(0, board.height() as u16 * self.cell_height),
            Clear(ClearType::CurrentLine),
            Print(status)
        )
    }
}
