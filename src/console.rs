use crate::engine::TorusGrid;
use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Full-redraw terminal renderer: every frame clears the screen and
/// repaints the whole grid, two glyphs per cell.
pub struct ConsoleRender {
    show_gen: bool,
    report: String,
}
impl ConsoleRender {
    const ALIVE: &'static str = "\u{2588}\u{2588}";
    const DEAD: &'static str = "\u{2592}\u{2592}";

    pub fn new(show_gen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            show_gen,
            report: String::new(),
        })
    }

    pub fn render(&self, grid: &TorusGrid) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        let mut line = String::with_capacity(grid.width() * Self::ALIVE.len());
        for (y, row) in grid.rows().enumerate() {
            line.clear();
            for cell in row {
                line.push_str(if cell.is_alive() {
                    Self::ALIVE
                } else {
                    Self::DEAD
                });
            }
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            io::Write::write_all(&mut stdout, line.as_bytes())?;
        }

        // write footer
        if self.show_gen {
            queue!(stdout, cursor::MoveTo(0, grid.height() as u16))?;
            let footer = format!("Generation {}  {}", grid.generation(), self.report);
            io::Write::write_all(&mut stdout, footer.as_bytes())?;
        }

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        match event::read()? {
            // CTRL+C or plain q
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => Ok(Some(ConsoleCommand::Exit)),
            _ => Ok(Some(ConsoleCommand::Handled)),
        }
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
