/// 三个浮层
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OverlayKind {
    Search,
    Settings,
    Detail,
}

/// 浮层内可获得焦点的控件
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    /// 搜索表单的标题输入框
    SearchTitle,
    /// 搜索表单的类别下拉框
    SearchGenre,
    /// 搜索表单的作者下拉框
    SearchAuthor,
    /// 设置表单的主题选择
    SettingsTheme,
}

impl FormField {
    /// 搜索表单中的下一个控件（循环）
    pub fn next_search_field(self) -> FormField {
        match self {
            FormField::SearchTitle => FormField::SearchGenre,
            FormField::SearchGenre => FormField::SearchAuthor,
            _ => FormField::SearchTitle,
        }
    }

    /// 搜索表单中的上一个控件（循环）
    pub fn prev_search_field(self) -> FormField {
        match self {
            FormField::SearchTitle => FormField::SearchAuthor,
            FormField::SearchAuthor => FormField::SearchGenre,
            _ => FormField::SearchTitle,
        }
    }
}

/// 浮层的开关状态，初始为关闭
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    pub open: bool,
    /// 打开时获得焦点的控件
    pub focus: Option<FormField>,
}

impl Overlay {
    /// 打开浮层，并可选地让指定控件获得焦点
    pub fn open(&mut self, focus: Option<FormField>) {
        self.open = true;
        if focus.is_some() {
            self.focus = focus;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
