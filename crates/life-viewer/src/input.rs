//! Terminal input: event mapping, screen-to-cell mapping and paint/erase
//! gestures.

use crate::session::ViewerEvent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use life_core::{CellCoordinate, Result, ViewConfig};
use life_world::Board;
use std::collections::HashSet;
use tracing::trace;

/// Translate a terminal event into a viewer event.
///
/// Space resumes, Tab pauses, `c` clears the board, and `q`, Esc or Ctrl-C
/// quit. The left mouse button drives pointer gestures. Everything else is
/// ignored.
pub fn map_event(event: &Event) -> Option<ViewerEvent> {
    match *event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char(' ') => Some(ViewerEvent::Resume),
            KeyCode::Tab => Some(ViewerEvent::Pause),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ViewerEvent::Quit)
            }
            KeyCode::Char('c') => Some(ViewerEvent::Clear),
            KeyCode::Char('q') | KeyCode::Esc => Some(ViewerEvent::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(ViewerEvent::PointerPressed { column, row })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                Some(ViewerEvent::PointerMoved { column, row })
            }
            MouseEventKind::Up(MouseButton::Left) => Some(ViewerEvent::PointerReleased),
            _ => None,
        },
        _ => None,
    }
}

/// Map a pointer position in terminal cells to the board cell under it.
///
/// `None` when the view has a zero cell size.
pub fn pointer_to_cell(column: u16, row: u16, view: &ViewConfig) -> Option<CellCoordinate> {
    Some(CellCoordinate::new(
        column.checked_div(view.cell_width)? as usize,
        row.checked_div(view.cell_height)? as usize,
    ))
}

/// Cells on the straight line from `from` to `to`, both ends included
pub fn line_between(from: CellCoordinate, to: CellCoordinate) -> Vec<CellCoordinate> {
    let (mut x, mut y) = (from.column as isize, from.row as isize);
    let (x1, y1) = (to.column as isize, to.row as isize);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        cells.push(CellCoordinate::new(x as usize, y as usize));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// A press-drag-release gesture over the board.
///
/// The first in-board cell touched fixes the target state. From then on a
/// touched cell flips only while it is still in that state, so one drag
/// either paints live cells or erases them. A drag touches every cell on
/// the line from the previous pointer cell, not just the new one.
#[derive(Debug, Default)]
pub struct PointerGesture {
    last: Option<CellCoordinate>,
    target: Option<bool>,
    visited: HashSet<CellCoordinate>,
}

impl PointerGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `cell`. Returns whether a cell was toggled.
    pub fn press(&mut self, board: &mut Board, cell: CellCoordinate) -> Result<bool> {
        self.release();
        self.last = Some(cell);
        self.touch(board, cell)
    }

    /// Continue the gesture to `cell`; ignored when not pressed
    pub fn drag(&mut self, board: &mut Board, cell: CellCoordinate) -> Result<bool> {
        let Some(last) = self.last.replace(cell) else {
            return Ok(false);
        };

        let mut toggled = false;
        for step in line_between(last, cell) {
            toggled |= self.touch(board, step)?;
        }
        Ok(toggled)
    }

    pub fn release(&mut self) {
        self.last = None;
        self.target = None;
        self.visited.clear();
    }

    fn touch(&mut self, board: &mut Board, cell: CellCoordinate) -> Result<bool> {
        if !board.contains(cell.column, cell.row) || !self.visited.insert(cell) {
            return Ok(false);
        }

        let current = board.get(cell.column, cell.row)?;
        let target = *self.target.get_or_insert(current);
        if current != target {
            return Ok(false);
        }

        let alive = board.toggle(cell.column, cell.row)?;
        trace!(%cell, alive, "Cell toggled by pointer");
        Ok(true)
    }
}
