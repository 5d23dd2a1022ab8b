use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use lifelike::Automaton;
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

pub struct ConsoleRender {
    // top-left board coordinate shown in the terminal
    tl: (usize, usize),
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: (0, 0),
            report: String::new(),
        })
    }

    pub fn render(&self, game: &Automaton) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let br = (self.tl.0 + rows as usize, self.tl.1 + cols as usize);

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        let window = game.window(self.tl, br);
        for (row, col) in window.iter_alive() {
            let x = (col - self.tl.1) as u16;
            let y = (row - self.tl.0) as u16;
            queue!(stdout, cursor::MoveTo(x, y))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self, board_size: usize) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows to pan across the board
            event::Event::Key(
                ev @ KeyEvent {
                    code: KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right,
                    ..
                },
            ) => {
                let max = board_size.saturating_sub(1);
                match ev.code {
                    KeyCode::Up => self.tl.0 = self.tl.0.saturating_sub(1),
                    KeyCode::Down => self.tl.0 = (self.tl.0 + 1).min(max),
                    KeyCode::Left => self.tl.1 = self.tl.1.saturating_sub(1),
                    KeyCode::Right => self.tl.1 = (self.tl.1 + 1).min(max),
                    _ => {}
                }
            }
            _ => {}
        }
        outp
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
