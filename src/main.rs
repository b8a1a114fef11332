mod command;
mod stopwatch;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::command::Command;
use crate::stopwatch::StopwatchState;
use crate::ui::ButtonBar;

/// Bounded wait for the next input event; doubles as the frame-rate governor.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

struct WorkoutApp {
    stopwatch: StopwatchState,
    buttons: ButtonBar,
    quit: bool,
}

impl WorkoutApp {
    fn new() -> Self {
        Self {
            stopwatch: StopwatchState::new(),
            buttons: ButtonBar::default(),
            quit: false,
        }
    }

    /// One frame per iteration: wait (bounded) for input, translate it to at
    /// most one command, sample the clock once, apply, tick, draw.
    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let origin = Instant::now();
        while !self.quit {
            let command = self.next_command()?;
            let now = origin.elapsed();
            if let Some(command) = command {
                log::debug!("dispatching {:?}", command);
                self.apply(command, now);
            }
            if self.quit {
                break;
            }
            self.stopwatch.timer.tick(now);
            terminal.draw(|frame| {
                self.buttons = ui::draw(frame, &self.stopwatch);
            })?;
        }
        Ok(())
    }

    /// Wait up to one frame interval for an event and translate it.
    /// Unrecognized keys and clicks outside the buttons fall through to
    /// `None`, as does the poll timing out.
    fn next_command(&self) -> Result<Option<Command>> {
        if !event::poll(FRAME_INTERVAL)? {
            return Ok(None);
        }
        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => command::for_key(key.code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.buttons.hit(column, row),
            _ => None,
        };
        Ok(command)
    }

    fn apply(&mut self, command: Command, now: Duration) {
        match command {
            Command::Start => self.stopwatch.timer.start(now),
            Command::Pause => self.stopwatch.timer.pause(),
            Command::Toggle => self.stopwatch.timer.toggle(now),
            Command::Reset => self.stopwatch.reset(),
            Command::Lap => self.stopwatch.record_lap(),
            Command::Quit => self.quit = true,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("workout timer starting");

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = WorkoutApp::new().run(&mut terminal);
    // teardown is best-effort; the loop's result wins
    execute!(io::stdout(), DisableMouseCapture).ok();
    ratatui::restore();

    log::info!("workout timer exiting");
    result
}
