use super::App;
use crate::model::theme::{Theme, detect_preferred_theme};
use crate::state::{FormField, OverlayKind};

impl App {
    /// 根据终端配色信号选择主题，并同步到设置表单
    pub fn apply_user_preferred_theme(&mut self, signal: Option<&str>) {
        let theme = detect_preferred_theme(signal);
        self.settings.theme = theme;
        self.apply_theme(theme);
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// 打开设置浮层，表单显示当前生效的主题
    pub fn open_settings(&mut self) {
        self.settings.theme = self.theme;
        self.open_overlay(OverlayKind::Settings, Some(FormField::SettingsTheme));
    }

    /// 提交设置表单：立即应用所选主题并关闭设置浮层
    pub fn handle_theme_change(&mut self) {
        let theme = self.settings.theme;
        self.apply_theme(theme);
        log::info!("theme changed to {}", theme);
        self.close_overlay(OverlayKind::Settings);
    }
}
