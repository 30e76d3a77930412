use crate::app::App;
use crate::state::OverlayKind;
use crossterm::event::KeyCode;

/// 处理设置浮层的键盘事件
///
/// - `↑/↓`/`jk`: 切换主题选项
/// - `Enter`: 保存并应用
/// - `Esc`: 取消
pub(super) fn handle_settings_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
            app.settings.theme = app.settings.theme.toggled();
        }
        KeyCode::Enter => app.handle_theme_change(),
        KeyCode::Esc => app.close_overlay(OverlayKind::Settings),
        _ => {}
    }
}
