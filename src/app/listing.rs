use super::App;
use crate::model::catalog::Book;
use crate::ui::preview::{BookPreview, PreviewAttribute};

impl App {
    /// 渲染匹配集合的第一页
    pub fn render_initial_books(&mut self) {
        let end = self.catalog.books_per_page.min(self.list.matches.len());
        self.append_previews(0, end);
        self.update_show_more_button();
    }

    /// 为一本书创建预览卡片并挂载
    pub fn create_book_preview(&self, book: &Book) -> BookPreview {
        let mut preview = BookPreview::new(book.id.clone());
        preview.set_attribute(PreviewAttribute::Cover, book.image.clone());
        preview.set_attribute(PreviewAttribute::Title, book.title.clone());
        preview.set_attribute(
            PreviewAttribute::Author,
            self.catalog.author_name(&book.author),
        );
        preview.connect();
        preview
    }

    /// 将匹配集合中 `[start, end)` 范围内的图书追加到列表末尾
    fn append_previews(&mut self, start: usize, end: usize) {
        let end = end.min(self.list.matches.len());
        if start >= end {
            return;
        }

        let previews: Vec<BookPreview> = self.list.matches[start..end]
            .iter()
            .map(|&index| self.create_book_preview(&self.catalog.books[index]))
            .collect();
        self.list.previews.extend(previews);

        if self.list.selected_index.is_none() {
            self.list.selected_index = Some(0);
        }
    }

    /// 追加下一页
    ///
    /// 按钮已禁用（没有剩余图书）时不做任何事。
    pub fn show_more(&mut self) {
        if self.list.show_more.disabled {
            return;
        }

        let size = self.catalog.books_per_page;
        let start = self.list.page * size;
        self.append_previews(start, start + size);
        self.list.page += 1;
        self.update_show_more_button();

        log::debug!(
            "show more: page {} rendered {} remaining {}",
            self.list.page,
            self.rendered_count(),
            self.list.show_more.remaining
        );
    }

    /// 用新的匹配集合重新渲染列表
    ///
    /// 页码重置为 1，清空已渲染的卡片后渲染第一页。
    pub fn render_filtered_books(&mut self) {
        self.list.page = 1;
        self.list.previews.clear();
        self.list.selected_index = None;
        self.render_initial_books();
    }

    /// 根据剩余数量更新“显示更多”按钮
    pub fn update_show_more_button(&mut self) {
        let shown = self.list.page * self.catalog.books_per_page;
        let remaining = self.list.matches.len() as isize - shown as isize;
        self.list.show_more.disabled = remaining < 1;
        self.list.show_more.remaining = remaining.max(0) as usize;
    }

    pub fn rendered_count(&self) -> usize {
        self.list.previews.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.list.matches.len().saturating_sub(self.rendered_count())
    }

    /// 当前高亮的卡片
    pub fn selected_preview(&self) -> Option<&BookPreview> {
        self.list
            .selected_index
            .and_then(|index| self.list.previews.get(index))
    }
}
