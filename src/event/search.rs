use crate::app::App;
use crate::state::{FormField, OverlayKind};
use crossterm::event::KeyCode;

/// 处理搜索浮层的键盘事件
///
/// # Arguments
///
/// * `app` - 应用实例的可变引用
/// * `key` - 按下的键位代码
///
/// # Behavior
///
/// - `Tab`/`BackTab`: 切换字段
/// - `←/→`, `↑/↓`: 切换下拉框选项
/// - `Backspace`: 删除标题最后一个字符
/// - 其他字符: 输入到标题框
/// - `Enter`: 提交
/// - `Esc`: 取消
pub(super) fn handle_search_key(app: &mut App, key: KeyCode) {
    let focus = app.search.overlay.focus.unwrap_or(FormField::SearchTitle);

    match key {
        KeyCode::Esc => app.close_overlay(OverlayKind::Search),
        KeyCode::Enter => app.handle_search_submit(),
        KeyCode::Tab => app.search.overlay.focus = Some(focus.next_search_field()),
        KeyCode::BackTab => app.search.overlay.focus = Some(focus.prev_search_field()),
        KeyCode::Left | KeyCode::Up => app.search.form.cycle_option(focus, false),
        KeyCode::Right | KeyCode::Down => app.search.form.cycle_option(focus, true),
        KeyCode::Backspace if focus == FormField::SearchTitle => {
            app.search.form.title.pop();
        }
        KeyCode::Char(c) if focus == FormField::SearchTitle => {
            app.search.form.title.push(c);
        }
        _ => {}
    }
}
