use anyhow::{Result, bail};
use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// 界面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

/// 一组前景/背景颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// 深色（日间模式下用作文字颜色）
    pub dark: Color,
    /// 浅色（日间模式下用作背景颜色）
    pub light: Color,
}

const INK: Color = Color::Rgb(10, 10, 20);
const PAPER: Color = Color::Rgb(255, 255, 255);

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Day, Theme::Night];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// 显示在设置表单中的名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Day => "Day",
            Theme::Night => "Night",
        }
    }

    /// 主题对应的颜色，夜间模式交换前景与背景
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Day => Palette {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Palette {
                dark: PAPER,
                light: INK,
            },
        }
    }

    /// 切换到另一个主题
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => bail!("unknown theme: {} (expected day or night)", other),
        }
    }
}

impl Palette {
    /// 正文颜色
    pub fn fg(&self) -> Color {
        self.dark
    }

    /// 背景颜色
    pub fn bg(&self) -> Color {
        self.light
    }

    /// 次要文字颜色
    pub fn muted(&self) -> Color {
        Color::Gray
    }
}

/// 根据终端配色信号推断用户偏好的主题
///
/// 信号取自 `COLORFGBG` 环境变量，格式为 `"前景;背景"` 或 `"前景;default;背景"`。
/// 背景色为 0-6 或 8 号（深色）时选择夜间模式，缺失或无法解析时默认日间模式。
///
/// # Arguments
///
/// * `signal` - 环境变量的值
pub fn detect_preferred_theme(signal: Option<&str>) -> Theme {
    let Some(signal) = signal else {
        return Theme::Day;
    };

    let background = signal
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) => Theme::Night,
        _ => Theme::Day,
    }
}
