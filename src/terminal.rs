//! Terminal front end: draws the board and turns key presses into moves.
//!
//! Keys name the direction a tile slides, which is the opposite of where the blank goes.
//! Pressing Up slides the tile below the blank upwards, i.e. [`Move::Down`].

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::geometry::{Grid, Move};
use crate::scramble::DirectionSource;
use crate::session::{Phase, Session, Turn};

const BOARD_TOP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Slide(Move),
    Quit,
}

pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    let slide = match key.code {
        KeyCode::Up | KeyCode::Char('w') => Move::Down,
        KeyCode::Down | KeyCode::Char('s') => Move::Up,
        KeyCode::Left | KeyCode::Char('a') => Move::Right,
        KeyCode::Right | KeyCode::Char('d') => Move::Left,
        KeyCode::Char(' ') | KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::Slide(slide))
}

/// Plain-mode letters, same slide convention as the arrow keys.
pub fn letter_move(c: char) -> Option<Move> {
    match c.to_ascii_lowercase() {
        'u' => Some(Move::Down),
        'd' => Some(Move::Up),
        'l' => Some(Move::Right),
        'r' => Some(Move::Left),
        _ => None,
    }
}

/// Screen layout of one board: every tile is `[label]` with one column of spacing.
#[derive(Debug, Clone, Copy)]
struct Layout {
    grid: Grid,
    label_width: usize,
}

impl Layout {
    fn new(grid: Grid) -> Self {
        Self {
            grid,
            label_width: grid.slot_count().to_string().len(),
        }
    }

    fn cell_width(&self) -> usize {
        self.label_width + 3
    }

    /// Top-left terminal cell of `slot`, derived from its row and column.
    fn origin(&self, slot: usize) -> (u16, u16) {
        let x = self.grid.col_of(slot) * self.cell_width();
        let y = self.grid.row_of(slot) * 2 + usize::from(BOARD_TOP);
        (to_u16(x), to_u16(y))
    }

    fn label(&self, home: usize) -> String {
        format!("[{:>width$}]", home, width = self.label_width)
    }

    fn below_board(&self) -> u16 {
        to_u16(self.grid.side() * 2 + usize::from(BOARD_TOP) + 1)
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn draw<W: Write, S: DirectionSource>(out: &mut W, session: &Session<S>) -> io::Result<()> {
    let puzzle = session.puzzle();
    let layout = Layout::new(puzzle.grid());

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("Slide tiles with the arrow keys, quit with space")
    )?;

    for tile in puzzle.tiles() {
        let (x, y) = layout.origin(tile.current_position());
        queue!(out, MoveTo(x, y), Print(layout.label(tile.home_position())))?;
    }
    if session.final_tile_revealed() {
        let last = puzzle.grid().slot_count();
        let (x, y) = layout.origin(puzzle.blank_slot());
        queue!(out, MoveTo(x, y), Print(layout.label(last)))?;
    }

    let status = match session.phase() {
        Phase::Scrambling { remaining } => format!("Shuffling... {remaining}"),
        Phase::Playing => format!("Moves: {}", session.moves_made()),
        Phase::Solved => format!("Correct! Solved in {} moves", session.moves_made()),
    };
    queue!(out, MoveTo(0, layout.below_board()), Print(status))?;
    out.flush()
}

/// Raw mode on the alternate screen for as long as it lives.
struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    fn enter(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {}", err);
        }
    }
}

/// Animates the scramble one attempt per frame, then plays until solved and dismissed.
pub fn run_interactive<S: DirectionSource>(session: &mut Session<S>, fps: u32) -> io::Result<()> {
    let frame = Duration::from_secs(1) / fps.max(1);
    let mut screen = Screen::enter(io::stdout())?;

    loop {
        draw(&mut screen.out, session)?;

        if let Phase::Scrambling { .. } = session.phase() {
            session.tick();
        }

        if !event::poll(frame)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key_action(key) {
                Some(Action::Quit) => break,
                Some(Action::Slide(direction)) => {
                    let turn = session.play(direction);
                    debug!("{:?} -> {:?}", key.code, turn);
                }
                None => {}
            }
        }
    }
    Ok(())
}

/// Line-oriented play for pipes and dumb terminals.
pub fn run_plain<S, R, W>(session: &mut Session<S>, input: R, mut out: W) -> io::Result<()>
where
    S: DirectionSource,
    R: BufRead,
    W: Write,
{
    session.scramble_all();
    write!(out, "{}", session.puzzle())?;

    for line in input.lines() {
        if session.phase() == Phase::Solved {
            break;
        }
        let line = line?;

        for c in line.chars().filter(|c| !c.is_whitespace()) {
            match letter_move(c) {
                Some(direction) => {
                    if session.play(direction) == Turn::Solved {
                        break;
                    }
                }
                None => writeln!(out, "unknown move '{}', use u d l r", c)?,
            }
        }
        writeln!(out)?;
        write!(out, "{}", session.puzzle())?;
    }

    if session.phase() == Phase::Solved {
        writeln!(out, "Correct! Solved in {} moves", session.moves_made())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    struct Script(Vec<Move>);

    impl DirectionSource for Script {
        fn next_move(&mut self) -> Move {
            self.0.remove(0)
        }
    }

    #[test]
    fn arrow_keys_slide_tiles_towards_the_arrow() {
        let press = |code| key_action(KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(press(KeyCode::Up), Some(Action::Slide(Move::Down)));
        assert_eq!(press(KeyCode::Down), Some(Action::Slide(Move::Up)));
        assert_eq!(press(KeyCode::Left), Some(Action::Slide(Move::Right)));
        assert_eq!(press(KeyCode::Right), Some(Action::Slide(Move::Left)));
        assert_eq!(press(KeyCode::Char(' ')), Some(Action::Quit));
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn layout_places_tiles_by_row_and_column() {
        let layout = Layout::new(Puzzle::new(4).unwrap().grid());
        assert_eq!(layout.origin(1), (0, 2));
        assert_eq!(layout.origin(4), (15, 2));
        assert_eq!(layout.origin(5), (0, 4));
        assert_eq!(layout.label(7), "[ 7]");
        assert_eq!(layout.below_board(), 11);
    }

    #[test]
    fn plain_mode_plays_until_solved() {
        let mut session = Session::new(
            Puzzle::new(2).unwrap(),
            2,
            Script(vec![Move::Up, Move::Left]),
        );
        let mut out = Vec::new();

        run_plain(&mut session, "x\nr\nl\nu\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("0 1 \n3 2 \n"));
        assert!(text.contains("unknown move 'x'"));
        assert!(text.ends_with("Correct! Solved in 2 moves\n"));
        assert_eq!(session.moves_made(), 2);
    }
}
