use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{centered_rect, render_help_info};
use crate::app::{App, DropdownOption};
use crate::state::FormField;

fn dropdown_label(options: &[DropdownOption], index: usize) -> &str {
    options
        .get(index)
        .map(|option| option.label.as_str())
        .unwrap_or("")
}

pub fn render_search(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = app.palette();
    let base = Style::default().fg(palette.fg()).bg(palette.bg());
    let popup = centered_rect(60, 11, area);
    let form = &app.search.form;
    let focus = app.search.overlay.focus;

    let field_style = |field: FormField| {
        if focus == Some(field) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Title   ", base.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {}▏", form.title),
                field_style(FormField::SearchTitle),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Genre   ", base.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    " ‹ {} › ",
                    dropdown_label(&form.genre_options, form.genre_index)
                ),
                field_style(FormField::SearchGenre),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Author  ", base.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    " ‹ {} › ",
                    dropdown_label(&form.author_options, form.author_index)
                ),
                field_style(FormField::SearchAuthor),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " [Enter] Search    [Esc] Cancel",
            base.fg(palette.muted()),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .style(base);

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);

    let help_items = ["Enter search", "Esc cancel", "Tab next field", "←/→ change option"];
    render_help_info(f, &help_items, area, palette);
}
