use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use crate::app::RenderState;
use crate::ui::studio::view::{
    max_results_scroll, render_controls, render_error_block, render_examples_panel,
    render_header, render_input_panel, render_results_panel,
};
use crate::ui::theme::colors;

const INPUT_HEIGHT: u16 = 7;
const ERROR_HEIGHT: u16 = 3;

/// Draw the whole workspace from a render snapshot.
///
/// Returns the largest results scroll offset for this frame size.
pub fn draw(frame: &mut Frame, state: &RenderState) -> u16 {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let header_height = if state.stats.is_some() { 2 } else { 1 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3),
        ])
        .split(area);

    frame.render_widget(render_header(state.stats.as_ref()), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_input_column(frame, columns[0], state);

    let max_scroll = state.summary.as_ref().map_or(0, |summary| {
        max_results_scroll(
            summary,
            columns[1].width.saturating_sub(2),
            inner_rows(columns[1]),
        )
    });
    frame.render_widget(
        render_results_panel(state.summary.as_ref(), state.results_scroll.min(max_scroll)),
        columns[1],
    );
    max_scroll
}

fn draw_input_column(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut constraints = vec![Constraint::Length(INPUT_HEIGHT), Constraint::Length(1)];
    if state.error.is_some() {
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    // Last slot takes the remaining height.
    if state.examples_visible() {
        constraints.push(Constraint::Min(3));
    } else {
        constraints.push(Constraint::Min(0));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        render_input_panel(&state.input, state.mode, inner_rows(chunks[0])),
        chunks[0],
    );
    frame.render_widget(render_controls(state.mode, state.pending), chunks[1]);

    let mut next = 2;
    if let Some(error) = &state.error {
        frame.render_widget(render_error_block(error), chunks[next]);
        next += 1;
    }
    if state.examples_visible() {
        frame.render_widget(
            render_examples_panel(
                &state.examples,
                state.selected_example,
                inner_rows(chunks[next]),
            ),
            chunks[next],
        );
    }
}

/// Rows inside a bordered panel.
fn inner_rows(area: Rect) -> u16 {
    area.height.saturating_sub(2)
}
