use std::time::Duration;

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use stopwatch_core::{format_centis, format_min_sec};

use crate::command::Command;
use crate::stopwatch::StopwatchState;

const TITLE: &str = "WORKOUT TIMER";
const HELP_LINE: &str = "s: Start/Pause  r: Reset  l: Lap  q: Quit";

/// The four button rectangles drawn last frame, kept for mouse hit testing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonBar {
    pub start: Rect,
    pub pause: Rect,
    pub reset: Rect,
    pub lap: Rect,
}

impl ButtonBar {
    /// Route a click to the button containing it. A rectangle covers the
    /// closed set of cells it was drawn over; clicks between or outside the
    /// buttons route to nothing.
    pub fn hit(&self, column: u16, row: u16) -> Option<Command> {
        let pos = Position::new(column, row);
        if self.start.contains(pos) {
            Some(Command::Start)
        } else if self.pause.contains(pos) {
            Some(Command::Pause)
        } else if self.reset.contains(pos) {
            Some(Command::Reset)
        } else if self.lap.contains(pos) {
            Some(Command::Lap)
        } else {
            None
        }
    }
}

/// Draw one frame and return the button rectangles used this frame.
pub fn draw(frame: &mut Frame, state: &StopwatchState) -> ButtonBar {
    let outer = Block::bordered().title(TITLE.bold());
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [help_area, timer_area, buttons_area, laps_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(HELP_LINE).style(Style::new().fg(Color::DarkGray)),
        help_area,
    );

    draw_timer(frame, timer_area, state);
    let buttons = draw_buttons(frame, buttons_area);
    draw_laps(frame, laps_area, state);

    buttons
}

/// Big "MM:SS" readout with the hundredths trailing in a smaller weight.
/// Green while running, red while paused.
fn draw_timer(frame: &mut Frame, area: Rect, state: &StopwatchState) {
    let color = if state.timer.is_running() {
        Color::Green
    } else {
        Color::Red
    };
    let elapsed = state.timer.elapsed();
    let readout = Line::from(vec![
        Span::styled(format_min_sec(elapsed), Style::new().fg(color).bold()),
        Span::styled(format_centis(elapsed), Style::new().fg(color)),
    ]);
    let timer = Paragraph::new(vec![Line::default(), readout]).centered();
    frame.render_widget(timer, area);
}

fn draw_buttons(frame: &mut Frame, area: Rect) -> ButtonBar {
    let [top_row, bottom_row] =
        Layout::vertical([Constraint::Length(3); 2]).areas(area);
    let [start, pause] =
        Layout::horizontal([Constraint::Percentage(50); 2]).areas(top_row);
    let [reset, lap] =
        Layout::horizontal([Constraint::Percentage(50); 2]).areas(bottom_row);

    draw_button(frame, start, "Start");
    draw_button(frame, pause, "Pause");
    draw_button(frame, reset, "Reset");
    draw_button(frame, lap, "Lap");

    ButtonBar {
        start,
        pause,
        reset,
        lap,
    }
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label).centered().block(Block::bordered());
    frame.render_widget(button, area);
}

/// Recorded laps, oldest first, one per line.
fn draw_laps(frame: &mut Frame, area: Rect, state: &StopwatchState) {
    let lines: Vec<Line> = state
        .laps
        .iter()
        .enumerate()
        .map(|(idx, time)| Line::from(lap_label(idx, time)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::new().fg(Color::Gray)),
        area,
    );
}

fn lap_label(index: usize, time: Duration) -> String {
    format!(
        "{:02}) {}{}",
        index + 1,
        format_min_sec(time),
        format_centis(time)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> ButtonBar {
        ButtonBar {
            start: Rect::new(1, 10, 10, 3),
            pause: Rect::new(11, 10, 10, 3),
            reset: Rect::new(1, 13, 10, 3),
            lap: Rect::new(11, 13, 10, 3),
        }
    }

    #[test]
    fn test_clicks_route_to_the_containing_button() {
        let bar = bar();
        assert_eq!(bar.hit(5, 11), Some(Command::Start));
        assert_eq!(bar.hit(15, 11), Some(Command::Pause));
        assert_eq!(bar.hit(5, 14), Some(Command::Reset));
        assert_eq!(bar.hit(15, 14), Some(Command::Lap));
    }

    #[test]
    fn test_button_corners_are_inside() {
        let bar = bar();
        assert_eq!(bar.hit(1, 10), Some(Command::Start)); // top-left cell
        assert_eq!(bar.hit(10, 12), Some(Command::Start)); // bottom-right cell
        assert_eq!(bar.hit(11, 10), Some(Command::Pause)); // adjacent button starts here
    }

    #[test]
    fn test_clicks_outside_all_buttons_are_ignored() {
        let bar = bar();
        assert_eq!(bar.hit(0, 10), None);
        assert_eq!(bar.hit(30, 11), None);
        assert_eq!(bar.hit(5, 2), None);
    }

    #[test]
    fn test_empty_bar_never_matches() {
        // Before the first frame no rectangles exist yet.
        let bar = ButtonBar::default();
        assert_eq!(bar.hit(0, 0), None);
    }

    #[test]
    fn test_lap_label_is_index_prefixed() {
        assert_eq!(lap_label(0, Duration::from_secs_f64(12.34)), "01) 00:12.34");
        assert_eq!(lap_label(6, Duration::from_secs_f64(65.5)), "07) 01:05.50");
    }
}
