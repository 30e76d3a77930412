use super::{App, DropdownOption};
use crate::model::catalog::NameMap;
use crate::model::filter::{ANY, filter_books};
use crate::state::{FormField, OverlayKind};

impl App {
    /// 填充类别和作者下拉框
    pub fn populate_dropdowns(&mut self) {
        self.search.form.genre_options = Self::dropdown_options(&self.catalog.genres, "All Genres");
        self.search.form.author_options =
            Self::dropdown_options(&self.catalog.authors, "All Authors");
        self.search.form.genre_index = 0;
        self.search.form.author_index = 0;
    }

    /// 生成下拉框选项：首项为“不限”，其余按映射顺序排列
    fn dropdown_options(names: &NameMap, default_label: &str) -> Vec<DropdownOption> {
        std::iter::once(DropdownOption {
            value: ANY.to_string(),
            label: default_label.to_string(),
        })
        .chain(names.iter().map(|(id, name)| DropdownOption {
            value: id.to_string(),
            label: name.to_string(),
        }))
        .collect()
    }

    /// 打开搜索浮层并聚焦标题输入框
    pub fn open_search(&mut self) {
        self.open_overlay(OverlayKind::Search, Some(FormField::SearchTitle));
    }

    /// 提交搜索表单
    ///
    /// 重新计算匹配集合、重新渲染列表并关闭搜索浮层。
    pub fn handle_search_submit(&mut self) {
        let criteria = self.search.form.criteria();
        self.list.matches = filter_books(&self.catalog, &criteria);
        log::debug!(
            "filter {:?} (unconstrained: {}) matched {} of {} books",
            criteria,
            criteria.is_unconstrained(),
            self.list.matches.len(),
            self.catalog.books.len()
        );

        self.render_filtered_books();
        self.close_overlay(OverlayKind::Search);
    }
}
