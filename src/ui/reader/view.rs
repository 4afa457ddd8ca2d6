use crate::app::mode::AppMode;
use crate::app::RenderState;
use crate::reading::split_at_anchor;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Column at which the current chunk must start so its focus grapheme
/// lands on the centre of a row `area_width` cells wide.
pub fn focus_start_column(before_focus: &str, area_width: u16) -> u16 {
    let center = area_width / 2;
    let before = before_focus.width().min(u16::MAX as usize) as u16;
    center.saturating_sub(before)
}

/// The current chunk, padded so the focus letter sits at the centre column.
pub fn render_current_chunk(text: &str, area_width: u16, theme: &Theme) -> Line<'static> {
    let (before, focus, after) = split_at_anchor(text);
    let padding = focus_start_column(&before, area_width) as usize;
    let plain = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(before, plain),
        Span::styled(
            focus,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::styled(after, plain),
    ])
}

/// Previous or next chunk, centred and dimmed.
pub fn render_context_chunk(text: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

pub fn render_progress_bar(state: &RenderState, width: usize, theme: &Theme) -> Line<'static> {
    let (filled, total) = state.progress_cells(width);
    Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(theme.progress)),
        Span::styled("─".repeat(total - filled), Style::default().fg(theme.dimmed)),
    ])
    .alignment(Alignment::Center)
}

pub fn render_status_line(state: &RenderState, theme: &Theme) -> Line<'static> {
    let mut text = format!(
        "Time remaining: {}   {} WPM   {} per display",
        state.time_remaining, state.wpm, state.chunk_size
    );
    if state.mode == AppMode::Paused {
        text.push_str("   PAUSED");
    }
    Line::from(Span::styled(text, Style::default().fg(theme.dimmed))).alignment(Alignment::Center)
}

/// Reader area: previous, current and next rows with progress underneath.
pub fn render_reader(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(render_context_chunk(&state.window.previous, theme), rows[1]);
    frame.render_widget(
        Paragraph::new(render_current_chunk(
            &state.window.current,
            rows[3].width,
            theme,
        ))
        .style(Style::default().bg(theme.background)),
        rows[3],
    );
    frame.render_widget(render_context_chunk(&state.window.next, theme), rows[5]);

    let bar_width = (area.width as usize * 3 / 5).max(10);
    frame.render_widget(
        Paragraph::new(render_progress_bar(state, bar_width, theme)),
        rows[7],
    );
    frame.render_widget(Paragraph::new(render_status_line(state, theme)), rows[8]);
}

/// Bottom input line with a mode badge, the typed command and any status text.
pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(theme.accent).bg(theme.surface));
    frame.render_widget(accent_bar, layout[0]);

    let mode_indicator = match state.mode {
        AppMode::Command => " COMMAND ",
        AppMode::Reading => " READING ",
        AppMode::Paused => " PAUSED ",
        AppMode::Quit => " QUIT ",
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            mode_indicator,
            Style::default().fg(theme.background).bg(theme.accent),
        ),
        Span::raw(" "),
        Span::styled(state.input.clone(), Style::default().fg(theme.text)),
    ])];
    if let Some(status) = &state.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme.dimmed),
        )));
    }

    let input_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().fg(theme.text).bg(theme.surface));

    frame.render_widget(input_widget, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_focus_start_column_centres_focus() {
        assert_eq!(focus_start_column("", 40), 20);
        assert_eq!(focus_start_column("wo", 40), 18);
        assert_eq!(focus_start_column("a very long prefix indeed", 10), 0);
    }

    #[test]
    fn test_focus_start_column_wide_characters() {
        // Each CJK character takes two cells.
        assert_eq!(focus_start_column("日本", 40), 16);
    }

    #[test]
    fn test_render_current_chunk_keeps_text() {
        let theme = Theme::dark();
        let line = render_current_chunk("world", 40, &theme);
        assert_eq!(line_text(&line).trim_start(), "world");
        assert_eq!(line.spans[2].content, "o");
        assert_eq!(line.spans[2].style.fg, Some(theme.accent));
    }

    #[test]
    fn test_render_current_chunk_empty() {
        let line = render_current_chunk("", 40, &Theme::dark());
        assert_eq!(line_text(&line).trim(), "");
    }

    #[test]
    fn test_render_progress_bar_halfway() {
        let mut state = RenderState::empty(AppMode::Reading);
        state.progress = 0.5;
        let line = render_progress_bar(&state, 20, &Theme::dark());
        assert_eq!(line.spans[0].content.chars().count(), 10);
        assert_eq!(line.spans[1].content.chars().count(), 10);
    }

    #[test]
    fn test_render_status_line_shows_time_and_pause() {
        let mut state = RenderState::empty(AppMode::Paused);
        state.wpm = 300;
        let text = line_text(&render_status_line(&state, &Theme::dark()));
        assert!(text.contains("Time remaining: 0:00"));
        assert!(text.contains("300 WPM"));
        assert!(text.contains("PAUSED"));
    }
}
