use super::{App, DetailView};
use crate::model::catalog::Book;
use crate::state::OverlayKind;

impl App {
    /// 处理列表中的点击选择
    ///
    /// 事件路径上没有携带图书 id 时不做任何事。图书始终在完整目录中查找，与当前筛选无关。
    /// 目录中没有该 id 时在状态栏提示错误。
    ///
    /// # Arguments
    ///
    /// * `book_id` - 被点击卡片携带的图书 id
    pub fn handle_book_selection(&mut self, book_id: Option<&str>) {
        let Some(book_id) = book_id else {
            return;
        };

        match self.catalog.find_book(book_id) {
            Some(book) => {
                let view = self.detail_view(book);
                self.display_book_details(view);
            }
            None => {
                log::warn!("selected preview refers to unknown book id {}", book_id);
                self.set_error(format!("Book not found: {}", book_id));
            }
        }
    }

    /// 选中当前高亮的卡片
    pub fn select_highlighted_book(&mut self) {
        let book_id = self.selected_preview().map(|p| p.book_id().to_string());
        self.handle_book_selection(book_id.as_deref());
    }

    fn detail_view(&self, book: &Book) -> DetailView {
        DetailView {
            book_id: book.id.clone(),
            image: book.image.clone(),
            blur: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!(
                "{} ({})",
                self.catalog.author_name(&book.author),
                book.published_year()
            ),
            description: book.description.clone(),
        }
    }

    /// 打开详情浮层并填入内容
    pub fn display_book_details(&mut self, view: DetailView) {
        log::debug!("showing details for {}", view.book_id);
        self.detail.view = view;
        self.open_overlay(OverlayKind::Detail, None);
    }
}
