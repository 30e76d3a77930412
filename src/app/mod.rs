use ratatui::prelude::*;

use crate::model::catalog::Catalog;
use crate::model::filter::{ANY, FilterCriteria};
use crate::model::theme::{Palette, Theme};
use crate::state::{FormField, Overlay, OverlayKind};
use crate::ui::preview::BookPreview;

mod detail;
mod listing;
mod search;
mod theme;

/// 下拉框中的一个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

/// 搜索表单，关闭浮层后保留已填写的值
#[derive(Debug, Default)]
pub struct SearchForm {
    /// 标题输入框内容
    pub title: String,
    pub genre_options: Vec<DropdownOption>,
    pub author_options: Vec<DropdownOption>,
    /// 类别下拉框当前选中的选项索引
    pub genre_index: usize,
    /// 作者下拉框当前选中的选项索引
    pub author_index: usize,
}

impl SearchForm {
    fn selected_value(options: &[DropdownOption], index: usize) -> &str {
        options
            .get(index)
            .map(|option| option.value.as_str())
            .unwrap_or(ANY)
    }

    pub fn selected_genre(&self) -> &str {
        Self::selected_value(&self.genre_options, self.genre_index)
    }

    pub fn selected_author(&self) -> &str {
        Self::selected_value(&self.author_options, self.author_index)
    }

    /// 由表单当前值生成筛选条件
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            title: self.title.clone(),
            genre: self.selected_genre().to_string(),
            author: self.selected_author().to_string(),
        }
    }

    /// 循环切换下拉框选项
    ///
    /// # Arguments
    ///
    /// * `field` - 要切换的下拉框，标题输入框会被忽略
    /// * `forward` - `true` 选择下一项，`false` 选择上一项
    pub fn cycle_option(&mut self, field: FormField, forward: bool) {
        let (index, len) = match field {
            FormField::SearchGenre => (&mut self.genre_index, self.genre_options.len()),
            FormField::SearchAuthor => (&mut self.author_index, self.author_options.len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        *index = if forward {
            (*index + 1) % len
        } else if *index == 0 {
            len - 1
        } else {
            *index - 1
        };
    }
}

/// 搜索浮层状态
#[derive(Debug, Default)]
pub struct SearchState {
    pub overlay: Overlay,
    pub form: SearchForm,
}

/// 设置浮层状态
#[derive(Debug, Default)]
pub struct SettingsState {
    pub overlay: Overlay,
    /// 表单中选择的主题（提交前不生效）
    pub theme: Theme,
}

/// 详情浮层显示的内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    pub book_id: String,
    pub image: String,
    /// 背景模糊图
    pub blur: String,
    pub title: String,
    /// 作者名与出版年份
    pub subtitle: String,
    pub description: String,
}

/// 详情浮层状态
#[derive(Debug, Default)]
pub struct DetailState {
    pub overlay: Overlay,
    pub view: DetailView,
}

/// “显示更多”按钮
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowMoreButton {
    /// 剩余未显示的数量（不小于 0）
    pub remaining: usize,
    pub disabled: bool,
}

impl ShowMoreButton {
    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// 图书列表状态
#[derive(Debug)]
pub struct BookList {
    /// 当前匹配集合（`catalog.books` 的索引，保持目录顺序）
    pub matches: Vec<usize>,
    /// 已渲染的页数，至少为 1
    pub page: usize,
    /// 已渲染的预览卡片
    pub previews: Vec<BookPreview>,
    /// 当前高亮的卡片索引
    pub selected_index: Option<usize>,
    pub show_more: ShowMoreButton,
}

pub struct App {
    /// 只读的图书目录
    pub catalog: Catalog,
    pub list: BookList,
    pub search: SearchState,
    pub settings: SettingsState,
    pub detail: DetailState,
    /// 当前生效的主题
    pub theme: Theme,
    /// 退出标志位
    pub should_quit: bool,
    /// 终端尺寸缓存
    pub terminal_size: Rect,
    /// 错误消息（用于在状态栏显示错误提示）
    pub error_message: Option<String>,
}

impl App {
    /// 用目录创建应用，匹配集合初始为完整目录
    pub fn new(catalog: Catalog) -> Self {
        let matches = (0..catalog.books.len()).collect();
        App {
            catalog,
            list: BookList {
                matches,
                page: 1,
                previews: Vec::new(),
                selected_index: None,
                show_more: ShowMoreButton::default(),
            },
            search: SearchState::default(),
            settings: SettingsState::default(),
            detail: DetailState::default(),
            theme: Theme::Day,
            should_quit: false,
            terminal_size: Rect::default(),
            error_message: None,
        }
    }

    /// 页面加载时的初始化
    ///
    /// 渲染第一页、填充下拉框、应用偏好主题。
    ///
    /// # Arguments
    ///
    /// * `color_scheme_signal` - 终端配色信号
    /// * `theme_override` - 命令行指定的主题，优先于自动检测
    pub fn init(&mut self, color_scheme_signal: Option<&str>, theme_override: Option<Theme>) {
        self.render_initial_books();
        self.populate_dropdowns();
        match theme_override {
            Some(theme) => {
                self.settings.theme = theme;
                self.apply_theme(theme);
            }
            None => self.apply_user_preferred_theme(color_scheme_signal),
        }
        log::info!(
            "catalog loaded: {} books, {} authors, {} genres, {} per page",
            self.catalog.books.len(),
            self.catalog.authors.len(),
            self.catalog.genres.len(),
            self.catalog.books_per_page
        );
    }

    /// 当前主题的配色
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    fn overlay_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
        match kind {
            OverlayKind::Search => &mut self.search.overlay,
            OverlayKind::Settings => &mut self.settings.overlay,
            OverlayKind::Detail => &mut self.detail.overlay,
        }
    }

    pub fn overlay(&self, kind: OverlayKind) -> &Overlay {
        match kind {
            OverlayKind::Search => &self.search.overlay,
            OverlayKind::Settings => &self.settings.overlay,
            OverlayKind::Detail => &self.detail.overlay,
        }
    }

    /// 打开浮层，并可选地聚焦其中的控件
    pub fn open_overlay(&mut self, kind: OverlayKind, focus: Option<FormField>) {
        self.overlay_mut(kind).open(focus);
    }

    pub fn close_overlay(&mut self, kind: OverlayKind) {
        self.overlay_mut(kind).close();
    }

    /// 最上层的已打开浮层，接收键盘事件
    pub fn active_overlay(&self) -> Option<OverlayKind> {
        [
            OverlayKind::Detail,
            OverlayKind::Settings,
            OverlayKind::Search,
        ]
        .into_iter()
        .find(|kind| self.overlay(*kind).is_open())
    }

    /// 设置错误消息
    ///
    /// 错误消息将在下一帧渲染时显示给用户。
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}
