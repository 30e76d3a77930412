use crate::app::App;
use crate::state::OverlayKind;
use crate::ui::list::{is_show_more_hit, preview_at};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

mod detail;
mod list;
mod search;
mod settings;

/// 网格中的移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 网格导航
///
/// 上下按列数跳行，左右逐个移动，到达边界时停住。
///
/// # Arguments
///
/// * `current` - 当前选中索引
/// * `len` - 卡片数量
/// * `columns` - 网格列数
/// * `direction` - 移动方向
///
/// # Returns
///
/// 新的选中索引。如果列表为空则返回 `None`。
pub(super) fn navigate_grid(
    current: Option<usize>,
    len: usize,
    columns: usize,
    direction: Direction,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Some(current) = current else {
        return Some(0);
    };
    let columns = columns.max(1);

    let next = match direction {
        Direction::Up => current.saturating_sub(columns),
        Direction::Down => {
            if current + columns < len {
                current + columns
            } else {
                current
            }
        }
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(len - 1),
    };
    Some(next.min(len - 1))
}

/// 处理键盘事件
///
/// 有浮层打开时由最上层浮层处理，否则交给图书列表。
/// `q` 只在没有浮层时退出，浮层中的 `q` 交给浮层处理。
///
/// # Arguments
///
/// * `app` - 应用实例的可变引用
/// * `key` - 按下的键位代码
pub fn handle_key(app: &mut App, key: KeyCode) {
    app.error_message = None;

    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) && app.active_overlay().is_none() {
        app.should_quit = true;
        return;
    }

    match app.active_overlay() {
        Some(OverlayKind::Search) => search::handle_search_key(app, key),
        Some(OverlayKind::Settings) => settings::handle_settings_key(app, key),
        Some(OverlayKind::Detail) => detail::handle_detail_key(app, key),
        None => list::handle_list_key(app, key),
    }
}

/// 处理鼠标事件
///
/// 左键点击卡片打开详情，点击按钮显示更多；滚轮在列表中移动选择。
/// 浮层打开时忽略点击。
///
/// # Arguments
///
/// * `app` - 应用实例的可变引用
/// * `mouse` - 鼠标事件
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.active_overlay().is_some() {
                return;
            }
            if is_show_more_hit(app, mouse.column, mouse.row) {
                app.show_more();
                return;
            }
            let book_id =
                preview_at(app, mouse.column, mouse.row).map(|p| p.book_id().to_string());
            if let Some(id) = &book_id {
                app.list.selected_index =
                    app.list.previews.iter().position(|p| p.book_id() == id.as_str());
            }
            app.handle_book_selection(book_id.as_deref());
        }
        MouseEventKind::ScrollUp => match app.active_overlay() {
            Some(OverlayKind::Settings) => settings::handle_settings_key(app, KeyCode::Up),
            None => list::handle_list_key(app, KeyCode::Up),
            _ => {}
        },
        MouseEventKind::ScrollDown => match app.active_overlay() {
            Some(OverlayKind::Settings) => settings::handle_settings_key(app, KeyCode::Down),
            None => list::handle_list_key(app, KeyCode::Down),
            _ => {}
        },
        _ => {}
    }
}
