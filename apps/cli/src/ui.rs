use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

const HIGHLIGHT: Color = Color::Rgb(0xFF, 0xEB, 0x3B);

pub fn draw(frame: &mut Frame, app: &App) {
    let [header_area, status_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header_area);
    render_status(frame, app, status_area);
    render_words(frame, app, body_area);
    render_hints(frame, hint_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let control = app.control();
    let button_style = if control.enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(format!(" [{}] ", control.label), button_style)];
    if let Some((position, duration)) = app.clock() {
        spans.push(Span::styled(
            format!("{} / {}", fmt_time(position), fmt_time(duration)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    if let Some(status) = app.status() {
        spans.push(Span::raw(status.to_string()));
        spans.push(Span::raw("  "));
    }
    if let Some(error) = app.error() {
        spans.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_words(frame: &mut Frame, app: &App, area: Rect) {
    let Some(surface) = app.surface() else {
        return;
    };

    let words = surface.words();
    let lines = layout_lines(words, area.width as usize);
    let anchor = surface.scroll_anchor().unwrap_or(app.cursor());
    let anchor_line = lines
        .iter()
        .position(|line| line.contains(&anchor))
        .unwrap_or(0);
    let offset = center_offset(anchor_line, lines.len(), area.height as usize);

    let visible: Vec<Line> = lines
        .iter()
        .skip(offset)
        .take(area.height as usize)
        .map(|range| {
            let mut spans = Vec::with_capacity(range.len() * 2);
            for i in range.clone() {
                if i > range.start {
                    spans.push(Span::raw(" "));
                }
                let mut style = Style::default();
                if surface.is_active(i) {
                    style = style.bg(HIGHLIGHT).fg(Color::Black);
                }
                if i == app.cursor() {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(Span::styled(words[i].as_str(), style));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible), area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(" [Space] play/pause  [←/→] move  [Enter] seek to word  [q] quit ")
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Greedy word wrap. Returns the word indices on each line; a word wider
/// than `width` gets a line of its own.
pub fn layout_lines(words: &[String], width: usize) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0;

    for (i, word) in words.iter().enumerate() {
        let len = word.chars().count();
        if i > start && used + 1 + len > width {
            lines.push(start..i);
            start = i;
            used = 0;
        }
        used += if i > start { 1 + len } else { len };
    }

    if start < words.len() {
        lines.push(start..words.len());
    }
    lines
}

/// First visible line so that `anchor_line` sits in the middle of the view.
pub fn center_offset(anchor_line: usize, total: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    anchor_line.saturating_sub(height / 2).min(total - height)
}

pub fn fmt_time(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let minutes = tenths / 600;
    let rest = (tenths % 600) as f64 / 10.0;
    format!("{minutes:02}:{rest:04.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn wraps_on_width() {
        assert_eq!(
            layout_lines(&words(&["aa", "bb", "cc", "dddddd"]), 5),
            [0..2, 2..3, 3..4]
        );
        assert_eq!(layout_lines(&words(&["a", "b", "c"]), 80), [0..3]);
        assert!(layout_lines(&[], 10).is_empty());
    }

    #[test]
    fn oversized_words_do_not_stall() {
        assert_eq!(
            layout_lines(&words(&["long", "words"]), 0),
            [0..1, 1..2]
        );
    }

    #[test]
    fn centers_anchor_line() {
        assert_eq!(center_offset(0, 3, 10), 0);
        assert_eq!(center_offset(2, 20, 5), 0);
        assert_eq!(center_offset(10, 20, 5), 8);
        assert_eq!(center_offset(19, 20, 5), 15);
    }

    #[test]
    fn formats_clock() {
        assert_eq!(fmt_time(75.3), "01:15.3");
        assert_eq!(fmt_time(0.0), "00:00.0");
        assert_eq!(fmt_time(59.96), "01:00.0");
        assert_eq!(fmt_time(-1.0), "00:00.0");
    }
}
