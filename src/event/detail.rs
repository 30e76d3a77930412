use crate::app::App;
use crate::state::OverlayKind;
use crossterm::event::KeyCode;

pub(super) fn handle_detail_key(app: &mut App, key: KeyCode) {
    if matches!(
        key,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C')
    ) {
        app.close_overlay(OverlayKind::Detail);
    }
}
