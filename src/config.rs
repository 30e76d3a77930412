/// 应用程序配置常量
pub struct AppConfig {
    /// 应用目录名称（位于用户主目录下）
    pub dir_name: &'static str,
    /// 日志文件名
    pub log_filename: &'static str,
    /// 目录未指定时每页显示的预览数量
    pub default_books_per_page: usize,
    /// 预览卡片宽度（含边框）
    pub preview_width: u16,
    /// 预览卡片高度（含边框）
    pub preview_height: u16,
    /// 主循环刷新间隔（毫秒）
    pub tick_rate_ms: u64,
    /// 终端配色信号所在的环境变量
    pub color_scheme_env: &'static str,
    /// 内置示例目录
    pub bundled_catalog: &'static str,
}

impl AppConfig {
    /// 创建默认配置
    pub const fn default() -> Self {
        Self {
            dir_name: ".book_connect",
            log_filename: "book_connect.log",
            default_books_per_page: 36,
            preview_width: 32,
            preview_height: 5,
            tick_rate_ms: 100,
            color_scheme_env: "COLORFGBG",
            bundled_catalog: include_str!("../data/catalog.json"),
        }
    }
}

/// 全局配置实例
pub const CONFIG: AppConfig = AppConfig::default();
