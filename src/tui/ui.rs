use crate::core::state::{App, Stage};
use crate::search::skin_tone;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Rows the inline viewport occupies: prompt, spacer, results, status.
pub const VIEWPORT_HEIGHT: u16 = 4;

const PLACEHOLDER: &str = "Relevant emojis will appear when you start writing";
const OFFLINE_NOTICE: &str = "Please check your internet connection";

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::Length;
    let layout = Layout::vertical([Length(1), Length(1), Length(1), Length(1)]);
    let [prompt_area, _spacer, results_area, status_area] = layout.areas(frame.area());

    if app.stage == Stage::Copied {
        draw_copied(frame, prompt_area, app);
        return;
    }

    draw_prompt(frame, prompt_area, app);
    draw_results(frame, results_area, app);
    draw_status(frame, status_area, app);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let glyph_color = if app.stage == Stage::Offline {
        Color::Red
    } else {
        Color::Cyan
    };
    let glyph = Span::styled(
        "› ",
        Style::default().fg(glyph_color).add_modifier(Modifier::BOLD),
    );

    let line = if app.query.is_empty() {
        Line::from(vec![
            glyph,
            Span::styled(PLACEHOLDER, Style::default().add_modifier(Modifier::DIM)),
        ])
    } else {
        Line::from(vec![
            glyph,
            Span::styled(
                app.query.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
    };
    frame.render_widget(line, area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    if app.results.is_empty() {
        return;
    }

    let mut spans: Vec<Span> = Vec::with_capacity(app.results.len() * 2);
    for (index, emoji) in app.results.iter().enumerate() {
        let mut shown = skin_tone::apply(emoji, app.skin_tone);
        // Some emoji render one column wide; pad so the row stays even and
        // the selection highlight has a consistent footprint.
        if shown.width() < 2 {
            shown.push(' ');
        }
        let style = if index == app.selected_index {
            Style::default().bg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(shown, style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Line::from(spans), area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.stage == Stage::Offline {
        OFFLINE_NOTICE
    } else {
        app.status_message.as_str()
    };
    if text.is_empty() {
        return;
    }
    frame.render_widget(
        Span::styled(text, Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}

fn draw_copied(frame: &mut Frame, area: Rect, app: &App) {
    let emoji = app.copied_emoji.as_deref().unwrap_or("");
    frame.render_widget(
        Span::styled(
            format!("{emoji}  has been copied to the clipboard"),
            Style::default().fg(Color::Green),
        ),
        area,
    );
}
