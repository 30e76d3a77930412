use ratatui::prelude::*;
use ratatui::widgets::*;

use super::utils::{centered_rect, render_help_info};
use crate::app::App;

/// 渲染图书详情浮层
///
/// 外层用封面地址铺一层暗淡的背景，内层显示标题、副标题与简介。
pub fn render_detail(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = app.palette();
    let base = Style::default().fg(palette.fg()).bg(palette.bg());
    let view = &app.detail.view;

    let popup = centered_rect(
        area.width.saturating_mul(4) / 5,
        area.height.saturating_mul(3) / 4,
        area,
    );

    let backdrop = Paragraph::new(view.blur.as_str())
        .style(base.fg(palette.muted()).add_modifier(Modifier::DIM))
        .block(Block::default().borders(Borders::ALL).style(base));
    f.render_widget(Clear, popup);
    f.render_widget(backdrop, popup);

    let inner = popup.inner(Margin::new(2, 1));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            view.title.as_str(),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.subtitle.as_str(),
            base.fg(palette.muted()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Cover: {}", view.image),
            base.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(view.description.as_str(), base)),
    ];

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(base),
        );
    f.render_widget(content, inner);

    render_help_info(f, &["Esc/Enter/c close"], area, palette);
}
