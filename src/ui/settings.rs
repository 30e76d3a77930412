use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{centered_rect, render_help_info};
use crate::app::App;
use crate::model::theme::Theme;

pub fn render_settings(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = app.palette();
    let base = Style::default().fg(palette.fg()).bg(palette.bg());
    let popup = centered_rect(36, 7, area);

    let items: Vec<ListItem> = Theme::ALL
        .iter()
        .map(|theme| {
            let marker = if *theme == app.settings.theme {
                "(•)"
            } else {
                "( )"
            };
            ListItem::new(format!(" {} {}", marker, theme.label())).style(base)
        })
        .collect();

    let selected = Theme::ALL
        .iter()
        .position(|theme| *theme == app.settings.theme);
    let mut state = ListState::default();
    state.select(selected);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings · Theme ")
                .style(base),
        )
        .highlight_style(base.add_modifier(Modifier::REVERSED))
        .highlight_symbol("");

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);

    render_help_info(f, &["Enter save", "Esc cancel", "↑/↓ choose"], area, palette);
}
