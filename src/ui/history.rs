use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use cubetime::session::SolveRecord;

use crate::ui::charting::{compute_chart_params, format_label, solve_points};
use crate::App;

/// Pure presenter for a single solve row
pub fn present_row(sequence: usize, record: &SolveRecord, best: bool) -> Row<'static> {
    let time_style = if best {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(sequence.to_string()),
        Cell::from(record.time().format()).style(time_style),
        Cell::from(record.recorded_at().format("%H:%M:%S").to_string()),
        Cell::from(record.scramble().to_string()),
    ])
}

/// Render the full solve history with a chart of times
pub fn render_history(app: &mut App, f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),      // Title
            Constraint::Percentage(40), // Chart
            Constraint::Min(0),         // Solve table
            Constraint::Length(3),      // Instructions
        ])
        .split(area);

    let stats = app.session.stats();
    let title = Paragraph::new(format!(
        "Session since {} ({} solves)",
        app.session.started_at().format("%H:%M"),
        stats.len()
    ))
    .block(Block::default().borders(Borders::ALL).title("History"))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    if stats.is_empty() {
        let no_data = Paragraph::new("No solves yet.\nPress space to start the timer!")
            .block(Block::default().borders(Borders::ALL).title("No Data"))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(no_data, chunks[1].union(chunks[2]));
    } else {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let points = solve_points(&stats.times());
        let (solve_count, slowest) = compute_chart_params(&points);

        let datasets = vec![Dataset::default()
            .marker(Marker::Braille)
            .style(Style::default().fg(Color::Magenta))
            .graph_type(GraphType::Line)
            .data(&points)];

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title("solve")
                    .bounds([1.0, solve_count])
                    .labels(vec![
                        Span::styled("1", bold_style),
                        Span::styled(format_label(solve_count), bold_style),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("seconds")
                    .bounds([0.0, slowest])
                    .labels(vec![
                        Span::styled("0", bold_style),
                        Span::styled(format_label(slowest), bold_style),
                    ]),
            );
        f.render_widget(chart, chunks[1]);

        // Calculate scrolling bounds
        let table_height = chunks[2].height.saturating_sub(3) as usize; // borders + header
        let total_rows = stats.len();
        let max_scroll = total_rows.saturating_sub(table_height);

        if app.history_state.scroll_offset > max_scroll {
            app.history_state.scroll_offset = max_scroll;
        }
        let scroll_offset = app.history_state.scroll_offset;
        let best = stats.summary().map(|s| s.best);

        let visible_rows: Vec<Row> = stats
            .records()
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(table_height)
            .map(|(i, record)| present_row(i + 1, record, Some(record.time()) == best))
            .collect();

        let scroll_info = if total_rows > table_height {
            format!(
                " ({}/{} rows)",
                scroll_offset + visible_rows.len(),
                total_rows
            )
        } else {
            String::new()
        };

        let header = Row::new(vec!["#", "Time", "At", "Scramble"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            visible_rows,
            [
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Solves{scroll_info}")),
        );
        f.render_widget(table, chunks[2]);
    }

    let instructions = Paragraph::new("↑/↓ PgUp/PgDn Home scroll | (space) start | (b)ack (esc)ape")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[3]);
}
