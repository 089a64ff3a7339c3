//! The interactive terminal view.

use crate::{args::Args, cli::reached_max};
use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifesim_lib::{Coord, Seed, Simulation, Status, PATTERNS, RESIZE_PRESETS};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Seeds offered by the `p` key, in order.
fn seeds() -> Vec<Seed> {
    let mut seeds = vec![Seed::Random(0.3)];
    seeds.extend(PATTERNS.iter().map(Seed::Pattern));
    seeds
}

struct SimWindow {
    simulation: Simulation,
    interval: Duration,
    max_gen: Option<u64>,
    last_tick: Instant,

    /// The edit cursor.
    cursor: Coord,
    /// Index in `RESIZE_PRESETS` of the next size.
    preset: usize,
    /// Index in `seeds()` of the next seed.
    seed: usize,
    seeds: Vec<Seed>,

    /// The pattern exported when leaving edit mode for the last time.
    exported: Option<String>,
    quitting: bool,
}

impl SimWindow {
    fn new(args: Args) -> Self {
        SimWindow {
            simulation: args.simulation,
            interval: args.interval,
            max_gen: args.max_gen,
            last_tick: Instant::now(),
            cursor: (0, 0),
            preset: 0,
            seed: 0,
            seeds: seeds(),
            exported: None,
            quitting: false,
        }
    }

    fn draw(&self, stdout: &mut Stdout) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        let (cols, rows) = (cols as usize, rows as usize);
        let grid = self.simulation.grid();
        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let mut top = format!(
            "Gen: {}  Cells: {}  Size: {}x{}  Boundary: {}",
            self.simulation.generation(),
            grid.cell_count(),
            grid.width(),
            grid.height(),
            self.simulation.boundary()
        );
        top.truncate(cols);
        queue!(stdout, PrintStyledContent(format!("{:<1$}", top, cols).black().on_white()))?;

        let plaintext = grid.plaintext();
        for (y, line) in plaintext.lines().take(rows.saturating_sub(2)).enumerate() {
            let line = &line[..line.len().min(cols)];
            queue!(stdout, cursor::MoveTo(0, y as u16 + 1), Print(line))?;
        }

        if self.simulation.status() == Status::Editing {
            let (x, y) = self.cursor;
            if (x as usize) < cols && (y as usize) < rows.saturating_sub(2) {
                let c = if grid.get(x, y).is_alive() { 'o' } else { '.' };
                queue!(
                    stdout,
                    cursor::MoveTo(x as u16, y as u16 + 1),
                    PrintStyledContent(c.reverse())
                )?;
            }
        }

        let mut bottom = String::from(if self.quitting {
            "Are you sure to quit? [Y/n]"
        } else {
            match self.simulation.status() {
                Status::Paused => {
                    "Paused. [space] run  [e] edit  [p] pattern  [r] resize  [b] boundary  [q] quit"
                }
                Status::Running => "Running... Press [space] to pause.",
                Status::Converged => "Converged. Press [p] for a new pattern or [q] to quit.",
                Status::Editing => "Editing. [arrows] move  [enter]/click toggle  [e] done",
            }
        });
        bottom.truncate(cols);
        queue!(
            stdout,
            cursor::MoveTo(0, rows.saturating_sub(1) as u16),
            PrintStyledContent(format!("{:<1$}", bottom, cols).black().on_white())
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let grid = self.simulation.grid();
        let (x, y) = self.cursor;
        self.cursor = (
            (x + dx).clamp(0, grid.width() - 1),
            (y + dy).clamp(0, grid.height() - 1),
        );
    }

    /// Handles a key press. Returns `false` when it is time to quit.
    fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        if self.quitting {
            self.quitting = false;
            return Ok(!matches!(
                code,
                KeyCode::Char('Y') | KeyCode::Char('y') | KeyCode::Enter
            ));
        }
        let editing = self.simulation.status() == Status::Editing;
        match code {
            KeyCode::Char('q') => self.quitting = true,
            KeyCode::Char(' ') => match self.simulation.status() {
                Status::Running => self.simulation.pause(),
                _ => {
                    self.simulation.start();
                    self.last_tick = Instant::now();
                }
            },
            KeyCode::Char('b') => {
                self.simulation.toggle_boundary();
            }
            KeyCode::Char('r') if !editing => {
                let (width, height) = RESIZE_PRESETS[self.preset];
                self.preset = (self.preset + 1) % RESIZE_PRESETS.len();
                self.simulation.resize(width, height)?;
                self.move_cursor(0, 0);
            }
            KeyCode::Char('p') => {
                let seed = self.seeds[self.seed];
                self.seed = (self.seed + 1) % self.seeds.len();
                self.simulation.reseed(seed)?;
            }
            KeyCode::Char('e') => {
                if editing {
                    self.exported = Some(self.simulation.leave_edit()?);
                } else {
                    self.simulation.enter_edit();
                }
            }
            KeyCode::Left if editing => self.move_cursor(-1, 0),
            KeyCode::Right if editing => self.move_cursor(1, 0),
            KeyCode::Up if editing => self.move_cursor(0, -1),
            KeyCode::Down if editing => self.move_cursor(0, 1),
            KeyCode::Enter if editing => {
                self.simulation.toggle_cell(self.cursor)?;
            }
            _ => (),
        }
        Ok(true)
    }

    /// Maps a click to a cell, one character per cell below the top bar.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if mouse.row == 0 || self.simulation.status() != Status::Editing {
                return;
            }
            let coord = (mouse.column as i32, mouse.row as i32 - 1);
            if self.simulation.toggle_cell(coord).is_ok() {
                self.cursor = coord;
            }
        }
    }

    fn main_loop(&mut self, stdout: &mut Stdout) -> Result<()> {
        loop {
            self.draw(stdout)?;

            let running = self.simulation.status() == Status::Running;
            let timeout = self.interval.saturating_sub(self.last_tick.elapsed());
            if !running || event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if !self.handle_key(key.code)? {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => (),
                }
            }

            if self.simulation.status() == Status::Running
                && self.last_tick.elapsed() >= self.interval
            {
                self.simulation.tick();
                self.last_tick = Instant::now();
                if reached_max(&self.simulation, self.max_gen) {
                    self.simulation.pause();
                }
            }
        }
    }
}

/// Runs the TUI. Returns the simulation as it was when quitting,
/// and the pattern drawn in edit mode, if any.
pub(crate) fn run(args: Args) -> Result<(Simulation, Option<String>)> {
    let mut window = SimWindow::new(args);
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    let result = window.main_loop(&mut stdout);
    execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result?;
    Ok((window.simulation, window.exported))
}
