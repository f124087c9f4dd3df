use crate::app::AppMode;
use crate::studio::presentation::format_overall_confidence;
use crate::studio::{ExampleCategory, ParserStats, ResultSummary, TokenView};
use crate::ui::keymap::help_line;
use crate::ui::theme::{band_color, category_color, colors};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub const INPUT_PLACEHOLDER: &str =
    "Enter any product text... e.g., iPhone 15 Pro 256GB, organic honey 32oz, that thing from tiktok";
pub const RESULTS_PLACEHOLDER: &str = "Enter text and press Enter to see results";

const KIND_COLUMN: usize = 14;
const VALUE_COLUMN: usize = 24;

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::dimmed()))
        .title(Span::styled(title, Style::default().fg(colors::text())))
}

/// Pad with spaces to `width` terminal columns; wide glyphs count double.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(used).max(1)));
    padded
}

pub fn format_stats(stats: &ParserStats) -> String {
    let mut text = format!(
        "Parses today: {}  ·  Avg confidence: {}  ·  Avg parse: {:.0}ms  ·  Cache hits: {}",
        stats.total_parses_today,
        format_overall_confidence(stats.average_confidence),
        stats.average_parse_time_ms,
        format_overall_confidence(stats.cache_hit_rate),
    );
    if !stats.top_patterns.is_empty() {
        let top: Vec<String> = stats
            .top_patterns
            .iter()
            .map(|p| format!("{} ({})", p.pattern, p.count))
            .collect();
        text.push_str("  ·  Top: ");
        text.push_str(&top.join(", "));
    }
    text
}

pub fn render_header(stats: Option<&ParserStats>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        "Parser Studio",
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(stats) = stats {
        lines.push(Line::from(Span::styled(
            format_stats(stats),
            Style::default().fg(colors::dimmed()),
        )));
    }
    Paragraph::new(lines).style(Style::default().bg(colors::background()))
}

/// One row per line of input; the cursor sits on the last line, which is
/// kept in view once the text outgrows `visible_rows`.
pub fn render_input_panel(input: &str, mode: AppMode, visible_rows: u16) -> Paragraph<'static> {
    let text_style = Style::default().fg(colors::text());
    let lines: Vec<Line<'static>> = if input.is_empty() {
        vec![Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(colors::dimmed()),
        ))]
    } else {
        let rows: Vec<&str> = input.split('\n').collect();
        let last = rows.len() - 1;
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.trim_end_matches('\r').to_string();
                let mut spans = vec![Span::styled(row, text_style)];
                if i == last && mode == AppMode::Editing {
                    spans.push(Span::styled("▏", Style::default().fg(colors::accent())));
                }
                Line::from(spans)
            })
            .collect()
    };
    let scroll = (lines.len() as u16).saturating_sub(visible_rows.max(1));

    Paragraph::new(lines)
        .block(panel(" Input Text "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .style(Style::default().bg(colors::surface()))
}

pub fn render_controls(mode: AppMode, pending: bool) -> Line<'static> {
    let status = if pending {
        Span::styled(
            "Parsing...  ",
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };
    Line::from(vec![
        status,
        Span::styled(help_line(mode), Style::default().fg(colors::dimmed())),
    ])
}

/// Category headings with their inputs; scrolled so the selected input is
/// always one of the `visible_rows` shown.
pub fn render_examples_panel(
    examples: &[ExampleCategory],
    selected: usize,
    visible_rows: u16,
) -> Paragraph<'static> {
    let mut lines = Vec::new();
    let mut selected_row = 0;
    let mut index = 0;

    for category in examples {
        lines.push(Line::from(Span::styled(
            category.category.clone(),
            Style::default()
                .fg(colors::text())
                .add_modifier(Modifier::BOLD),
        )));
        for input in &category.inputs {
            let style = if index == selected {
                selected_row = lines.len();
                Style::default()
                    .fg(colors::background())
                    .bg(colors::accent())
            } else {
                Style::default().fg(colors::text())
            };
            lines.push(Line::from(Span::styled(format!("  {}", input), style)));
            index += 1;
        }
    }

    let scroll = (selected_row as u16 + 1).saturating_sub(visible_rows.max(1));

    Paragraph::new(lines)
        .block(panel(" Examples "))
        .scroll((scroll, 0))
        .style(Style::default().bg(colors::surface()))
}

pub fn render_error_block(message: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::error())),
        )
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(colors::error()).bg(colors::background()))
}

fn token_line(token: &TokenView) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            pad_to_width(&token.kind_label, KIND_COLUMN),
            Style::default().fg(category_color(token.category)),
        ),
        Span::styled(
            pad_to_width(&token.value, VALUE_COLUMN),
            Style::default().fg(colors::text()),
        ),
        Span::styled(
            token.confidence_label(),
            Style::default().fg(band_color(token.band)),
        ),
    ])
}

pub fn results_lines(summary: &ResultSummary) -> Vec<Line<'static>> {
    let label = Style::default().fg(colors::dimmed());
    let text = Style::default().fg(colors::text());
    let heading = text.add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Overall Confidence  ", heading),
            Span::styled(
                format!(
                    "{} ({})",
                    summary.overall_label(),
                    summary.overall_band.label()
                ),
                Style::default()
                    .fg(band_color(summary.overall_band))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(format!("Parser: {}", summary.parser_used), label)),
    ];

    for product in &summary.products {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("Product {}", product.number),
            heading,
        )));
        lines.push(Line::from(vec![
            Span::styled("  Search Query: ", label),
            Span::styled(product.search_query.clone(), Style::default().fg(colors::accent())),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Priority Tokens: ", label),
            Span::styled(
                product.priority_label(),
                if product.has_priority_tokens() {
                    text
                } else {
                    label
                },
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Tokens: ", label),
            Span::styled(product.token_count.to_string(), text),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("Extracted Tokens ({})", summary.tokens.len()),
        heading,
    )));
    lines.extend(summary.tokens.iter().map(token_line));
    lines
}

/// Largest results offset that still fills the panel, for an inner area of
/// `width` x `height` cells.
pub fn max_results_scroll(summary: &ResultSummary, width: u16, height: u16) -> u16 {
    let rows = Paragraph::new(results_lines(summary))
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}

pub fn render_results_panel(summary: Option<&ResultSummary>, scroll: u16) -> Paragraph<'static> {
    let paragraph = match summary {
        Some(summary) => Paragraph::new(results_lines(summary))
            .alignment(Alignment::Left)
            .scroll((scroll, 0)),
        None => Paragraph::new(RESULTS_PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::dimmed())),
    };
    paragraph
        .block(panel(" Parse Results "))
        .wrap(Wrap { trim: false })
}
