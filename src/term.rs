use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, read, poll};

use crate::error::{Result, SnakeError};
use crate::game::RenderModel;
use crate::position::{Grid, Position};
use crate::scheduler::Frontend;

pub type TermInt = u16;
pub type Coords = (u16, u16);

const SNAKE_BODY_CHAR: char = '█';
const IDLE_HEAD_CHAR: char = '@';
const FOOD_CHARS: [char; 2] = ['(', ')'];
const DEAD_SNAKE_CHAR: char = 'X';

/// Where the board sits on screen. Every cell is two columns wide so the
/// board looks square.
#[derive(Copy, Clone, Debug)]
struct BoardLayout {
    grid: Grid,
    top_left: Coords,
    size: Coords,
}

impl BoardLayout {
    /// Board plus borders, or `None` if it doesn't fit in terminal coordinates.
    fn outer_size(grid: Grid) -> Option<Coords> {
        let width = grid.width().checked_mul(2)?.checked_add(2)?;
        let height = grid.height().checked_add(2)?;
        Some((width, height))
    }

    fn cell_origin(&self, pos: Position) -> Coords {
        let x = self.top_left.0 + 1 + (pos.x as TermInt - 1) * 2;
        let y = self.top_left.1 + pos.y as TermInt;
        (x, y)
    }

    fn status_row(&self) -> TermInt {
        self.top_left.1 - 1
    }
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
    board: Option<BoardLayout>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, current_msg: None, board: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)?;
        execute!(self.stdout, DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Centers the board, leaving one row above it for the status line.
    pub fn layout_board(&mut self, grid: Grid) -> Result<()> {
        let too_small = |need_w, need_h| SnakeError::TerminalTooSmall {
            have_w: self.width,
            have_h: self.height,
            need_w,
            need_h,
        };
        let (board_w, board_h) = BoardLayout::outer_size(grid).ok_or_else(|| too_small(u16::MAX, u16::MAX))?;
        let need_h = board_h.checked_add(1).ok_or_else(|| too_small(board_w, u16::MAX))?;
        let need_w = board_w;
        if self.width < need_w || self.height < need_h {
            return Err(too_small(need_w, need_h));
        }

        let top_left = ((self.width - board_w) / 2, (self.height - need_h) / 2 + 1);
        self.board = Some(BoardLayout { grid, top_left, size: (board_w, board_h) });
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_events_queue(&self) -> Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            events.push(read()?);
        }

        Ok(events)
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let board = match self.board {
            Some(board) => board,
            None => return Ok(()),
        };
        let (width, height) = board.size;
        let (x0, y0) = board.top_left;

        let end_x = x0 + width - 1;
        let end_y = y0 + height - 1;

        for x in x0..=end_x {
            let ch = if x == x0 || x == end_x {'+'} else {'-'};
            self.print_at((x, y0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in y0 + 1..end_y {
            self.print_at((x0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    /// Writes the line above the board, padded to the board's width.
    pub fn draw_status(&mut self, text: &str) -> Result<()> {
        let board = match self.board {
            Some(board) => board,
            None => return Ok(()),
        };
        let (width, _) = board.size;
        let line = format!("{text: <width$}", text = text, width = width as usize);
        let row = board.status_row();
        for (i, ch) in line.chars().take(width as usize).enumerate() {
            self.print_at((board.top_left.0 + i as TermInt, row), ch)?;
        }
        self.flush()
    }

    /// Redraws the snake's body with the crash marker.
    pub fn draw_crash(&mut self, segments: &[Position]) -> Result<()> {
        for pos in segments {
            self.print_cell(*pos, [DEAD_SNAKE_CHAR, DEAD_SNAKE_CHAR])?;
        }
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                if let Some(ch) = self.screen.get(self.width as usize * y as usize + x as usize).copied() {
                    self.print_at_no_save((x, y), ch)?;
                }
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        if let Some(cell) = self.screen.get_mut(self.width as usize * pos.1 as usize + pos.0 as usize) {
            *cell = ch;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().map_err(crossterm::ErrorKind::from)?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_cell(&mut self, pos: Position, chars: [char; 2]) -> Result<()> {
        let board = match self.board {
            Some(board) if board.grid.contains(pos) => board,
            _ => return Ok(()),
        };
        let (x, y) = board.cell_origin(pos);
        self.print_at((x, y), chars[0])?;
        self.print_at((x + 1, y), chars[1])
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> Result<()> {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }
}

impl Frontend for TermManager {
    fn render(&mut self, model: &RenderModel<'_>) -> Result<()> {
        for cell in model.grid.cells() {
            self.print_cell(cell, [' ', ' '])?;
        }

        if let Some(food) = model.food {
            self.print_cell(food, FOOD_CHARS)?;
        }

        // Tail first so the head is drawn on top when segments overlap
        for pos in model.segments.iter().skip(1).rev() {
            self.print_cell(*pos, [SNAKE_BODY_CHAR, SNAKE_BODY_CHAR])?;
        }
        if let Some(head) = model.segments.first() {
            let ch = model.heading.map_or(IDLE_HEAD_CHAR, |d| d.head_char());
            self.print_cell(*head, [ch, ch])?;
        }

        if let Some(scores) = &model.scores {
            self.draw_status(&format!(" Score {}   Level {}", scores.score, scores.level))?;
        }

        self.flush()
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }
}
