use crate::app::App;
use crate::ui::list::grid_columns;
use crossterm::event::KeyCode;

use super::{Direction, navigate_grid};

/// 处理图书列表（无浮层）时的键盘事件
///
/// # Arguments
///
/// * `app` - 应用实例的可变引用
/// * `key` - 按下的键位代码
///
/// # Behavior
///
/// - 方向键/`hjkl`: 在网格中移动选择
/// - `Enter`: 打开选中图书的详情
/// - `m`/空格: 显示更多
/// - `/`: 打开搜索
/// - `s`: 打开设置
/// - `Esc`: 退出
pub(super) fn handle_list_key(app: &mut App, key: KeyCode) {
    let direction = match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    };

    if let Some(direction) = direction {
        app.list.selected_index = navigate_grid(
            app.list.selected_index,
            app.list.previews.len(),
            grid_columns(app),
            direction,
        );
        return;
    }

    match key {
        KeyCode::Enter => app.select_highlighted_book(),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Char(' ') => app.show_more(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),
        KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}
