use ratatui::prelude::*;
use ratatui::style::Modifier;
use ratatui::widgets::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::theme::Palette;

/// 把按键提示拼成一行，放不下的尾部提示整项丢弃
///
/// # Arguments
///
/// * `items` - 按重要程度排列的提示
/// * `max_width` - 可用的显示宽度
pub fn fit_help_items(items: &[&str], max_width: usize) -> String {
    const SEPARATOR: &str = " · ";

    let mut line = String::new();
    for item in items {
        let extra = if line.is_empty() {
            item.width()
        } else {
            SEPARATOR.width() + item.width()
        };
        if line.width() + extra > max_width {
            break;
        }
        if !line.is_empty() {
            line.push_str(SEPARATOR);
        }
        line.push_str(item);
    }
    line
}

pub fn render_help_info(f: &mut Frame, items: &[&str], area: Rect, palette: Palette) {
    let help = Paragraph::new(fit_help_items(items, area.width as usize))
        .style(Style::default().fg(palette.muted()).bg(palette.bg()))
        .alignment(Alignment::Center);

    let help_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    f.render_widget(help, help_area);
}

pub fn render_error_message(f: &mut Frame, error_msg: &str, area: Rect) {
    let error = Paragraph::new(format!("⚠ {}", error_msg))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    let error_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(2),
        width: area.width,
        height: 1,
    };

    f.render_widget(error, error_area);
}

/// 在区域中央取出指定大小的矩形，超出时按区域裁剪
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// 按显示宽度截断字符串，截断时以 `…` 结尾
///
/// # Arguments
///
/// * `text` - 原始文本
/// * `max_width` - 允许的最大显示宽度
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
