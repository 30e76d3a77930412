use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::UnicodeWidthStr;

use super::utils::render_help_info;
use crate::app::App;
use crate::config::CONFIG;
use crate::ui::preview::BookPreview;

/// 主界面的区域划分
pub struct MainLayout {
    pub header: Rect,
    pub list: Rect,
    pub button: Rect,
    pub help: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let [header, list, button, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    MainLayout {
        header,
        list,
        button,
        help,
    }
}

/// 预览卡片的网格布局
///
/// 渲染和鼠标命中测试共用同一份计算，保证点击位置与绘制位置一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewGrid {
    area: Rect,
    columns: usize,
    card_width: u16,
    card_height: u16,
    visible_rows: usize,
    first_row: usize,
    count: usize,
}

impl PreviewGrid {
    /// # Arguments
    ///
    /// * `area` - 列表区域
    /// * `count` - 已渲染的卡片数量
    /// * `selected` - 高亮卡片索引，网格会滚动到让它可见
    pub fn new(area: Rect, count: usize, selected: Option<usize>) -> Self {
        let columns = (area.width / CONFIG.preview_width).max(1) as usize;
        let card_width = (area.width / columns as u16).max(1);
        let card_height = CONFIG.preview_height;
        let visible_rows = (area.height / card_height).max(1) as usize;
        let selected_row = selected.unwrap_or(0) / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        Self {
            area,
            columns,
            card_width,
            card_height,
            visible_rows,
            first_row,
            count,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// 第 `index` 张卡片的位置，不可见时返回 `None`
    pub fn cell(&self, index: usize) -> Option<Rect> {
        if index >= self.count {
            return None;
        }
        let row = index / self.columns;
        if row < self.first_row || row >= self.first_row + self.visible_rows {
            return None;
        }
        let column = index % self.columns;
        let rect = Rect {
            x: self.area.x + column as u16 * self.card_width,
            y: self.area.y + (row - self.first_row) as u16 * self.card_height,
            width: self.card_width,
            height: self.card_height,
        };
        Some(rect.intersection(self.area))
    }

    /// 屏幕坐标对应的卡片索引
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        if !self.area.contains(position) {
            return None;
        }
        let grid_column = ((column - self.area.x) / self.card_width) as usize;
        let grid_row = ((row - self.area.y) / self.card_height) as usize + self.first_row;
        if grid_column >= self.columns {
            return None;
        }
        let index = grid_row * self.columns + grid_column;
        // 列表底部不足一张卡片高度的空白行不属于任何卡片
        self.cell(index)
            .filter(|cell| cell.contains(position))
            .map(|_| index)
    }
}

fn grid_for(app: &App, area: Rect) -> PreviewGrid {
    PreviewGrid::new(
        main_layout(area).list,
        app.list.previews.len(),
        app.list.selected_index,
    )
}

/// 当前终端尺寸下网格的列数
pub fn grid_columns(app: &App) -> usize {
    grid_for(app, app.terminal_size).columns()
}

/// 鼠标位置下的预览卡片
pub fn preview_at(app: &App, column: u16, row: u16) -> Option<&BookPreview> {
    grid_for(app, app.terminal_size)
        .index_at(column, row)
        .and_then(|index| app.list.previews.get(index))
}

fn button_rect(app: &App, area: Rect) -> Rect {
    let button_area = main_layout(area).button;
    let width = (app.list.show_more.label().width() as u16 + 4).min(button_area.width);
    Rect {
        x: button_area.x + (button_area.width - width) / 2,
        y: button_area.y,
        width,
        height: button_area.height,
    }
}

/// 鼠标位置是否落在“显示更多”按钮上
pub fn is_show_more_hit(app: &App, column: u16, row: u16) -> bool {
    button_rect(app, app.terminal_size).contains(Position::new(column, row))
}

pub fn render_list(f: &mut Frame, app: &App) {
    let area = f.area();
    let palette = app.palette();
    let base = Style::default().fg(palette.fg()).bg(palette.bg());
    let layout = main_layout(area);

    f.render_widget(Block::default().style(base), area);

    let header = Line::from(vec![
        Span::styled("Book Connect", base.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(
                "  {} of {} books  ·  {}",
                app.rendered_count(),
                app.list.matches.len(),
                app.theme.label()
            ),
            base.fg(palette.muted()),
        ),
    ]);
    f.render_widget(Paragraph::new(header).style(base), layout.header);

    if app.list.previews.is_empty() {
        let empty = Paragraph::new("No results found. Your filters might be too narrow.")
            .style(base.fg(palette.muted()))
            .alignment(Alignment::Center);
        f.render_widget(empty, layout.list);
    } else {
        let grid = grid_for(app, area);
        for (index, preview) in app.list.previews.iter().enumerate() {
            if let Some(cell) = grid.cell(index) {
                let selected = app.list.selected_index == Some(index);
                f.render_widget(preview.card(palette, selected), cell);
            }
        }
    }

    let button_style = if app.list.show_more.disabled {
        base.fg(palette.muted()).add_modifier(Modifier::DIM)
    } else {
        base.add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(app.list.show_more.label())
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    f.render_widget(button, button_rect(app, area));

    let help_items = [
        "Enter details",
        "q quit",
        "/ search",
        "m more",
        "s theme",
        "hjkl/arrows move",
    ];
    render_help_info(f, &help_items, layout.help, palette);
}
