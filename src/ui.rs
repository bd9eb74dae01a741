pub mod charting;
pub mod history;
pub mod screen;

use cubetime::display::Slot;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

/// Key hints shown at the bottom of the timer screen
pub fn legend(running: bool) -> &'static str {
    if running {
        "(any key) stop"
    } else {
        "(space) start / (h)istory / (n)ew session / (esc)ape"
    }
}

/// Rows the scramble needs when wrapped at `width`
pub fn scramble_lines(scramble: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    scramble.width().div_ceil(width).max(1) as u16
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = &self.board;
        let running = self.session.is_running();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);
        let timer_style = if running {
            Style::default().patch(bold_style).fg(Color::Green)
        } else {
            bold_style
        };

        let inner_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
        let scramble = board.text_or_dash(Slot::Scramble);
        let history_rows = u16::try_from(self.config.history_rows).unwrap_or(u16::MAX);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(scramble_lines(scramble, inner_width)),
                Constraint::Min(1),                   // running time
                Constraint::Length(1),                // stats
                Constraint::Length(history_rows.saturating_add(3)), // recent solves
                Constraint::Length(1),                // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(scramble.to_string(), dim_bold_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        // center the time vertically inside its chunk
        let time_area = chunks[1];
        let time_row = Rect {
            y: time_area.y + time_area.height / 2,
            height: time_area.height.min(1),
            ..time_area
        };
        Paragraph::new(Span::styled(
            board.text_or_dash(Slot::Timer).to_string(),
            timer_style,
        ))
        .alignment(Alignment::Center)
        .render(time_row, buf);

        let mut spans = Vec::new();
        for slot in Slot::STATS {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{slot} "), italic_style));
            spans.push(Span::styled(board.text_or_dash(slot).to_string(), bold_style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        // newest solves first
        let rows = board
            .rows()
            .iter()
            .rev()
            .take(self.config.history_rows)
            .map(|cols| Row::new(cols.iter().map(|c| Cell::from(c.clone()))))
            .collect::<Vec<Row>>();

        let header = Row::new(vec!["#", "Time", "Scramble"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Length(11),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Solves ({})", self.session.stats().len())),
        )
        .render(chunks[3], buf);

        Paragraph::new(Span::styled(legend(running), italic_style)).render(chunks[4], buf);
    }
}
