use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use collapsible::text::{pad_to_width, truncate_to_width};

use crate::paint::Row;

pub struct Terminal {
    stdout: io::Stdout,
    size: (u16, u16),
    /// Lines written by the previous draw, for diffing.
    previous: Vec<String>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        // Drop never runs if construction fails, so undo by hand
        let setup = execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )
        .and_then(|()| terminal::size());
        let size = or_undo(setup, || restore(&mut stdout))?;

        Ok(Self {
            stdout,
            size,
            previous: Vec::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw rows starting at the top of the screen. Rows whose target is
    /// `focused` are shown reversed, disabled rows dimmed.
    pub fn draw(&mut self, header: &[String], rows: &[Row], focused: Option<&str>) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.size {
            self.size = size;
            self.previous.clear();
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        let (width, height) = (size.0 as usize, size.1 as usize);

        let mut lines: Vec<(String, Attribute)> = header
            .iter()
            .map(|h| (h.clone(), Attribute::Bold))
            .collect();
        lines.extend(rows.iter().map(|row| {
            let attr = if row.target.is_some() && row.target.as_deref() == focused {
                Attribute::Reverse
            } else if row.disabled {
                Attribute::Dim
            } else {
                Attribute::Reset
            };
            (row.text.clone(), attr)
        }));
        lines.resize(height, (String::new(), Attribute::Reset));

        let mut current = Vec::with_capacity(lines.len());
        for (y, (text, attr)) in lines.into_iter().enumerate() {
            let line = pad_to_width(&truncate_to_width(&text, width), width);
            // Attribute is folded into the diff key so focus changes redraw
            let key = format!("{:?}{}", attr, line);
            if self.previous.get(y) != Some(&key) {
                queue!(
                    self.stdout,
                    cursor::MoveTo(0, y as u16),
                    SetAttribute(attr),
                    Print(&line),
                    SetAttribute(Attribute::Reset)
                )?;
            }
            current.push(key);
        }

        self.previous = current;
        self.stdout.flush()
    }
}

/// Run `undo` when `result` is an error, then pass the result through.
fn or_undo<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Leave the alternate screen and raw mode, ignoring errors.
fn restore(stdout: &mut io::Stdout) {
    let _ = execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout);
    }
}
