use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::utils::truncate_to_width;
use crate::model::theme::Palette;

/// 预览卡片观察的属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAttribute {
    Cover,
    Title,
    Author,
}

impl PreviewAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            PreviewAttribute::Cover => "cover",
            PreviewAttribute::Title => "title",
            PreviewAttribute::Author => "author",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BookPreview::observed_attributes()
            .iter()
            .copied()
            .find(|attr| attr.name() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PreviewFields {
    cover: String,
    title: String,
    author: String,
}

impl PreviewFields {
    fn get(&self, attr: PreviewAttribute) -> &str {
        match attr {
            PreviewAttribute::Cover => &self.cover,
            PreviewAttribute::Title => &self.title,
            PreviewAttribute::Author => &self.author,
        }
    }

    fn get_mut(&mut self, attr: PreviewAttribute) -> &mut String {
        match attr {
            PreviewAttribute::Cover => &mut self.cover,
            PreviewAttribute::Title => &mut self.title,
            PreviewAttribute::Author => &mut self.author,
        }
    }
}

/// 单本书的预览卡片
///
/// 由属性驱动：设置 `cover`/`title`/`author` 属性后，已挂载的卡片会立即更新显示内容。
/// 卡片携带图书 id 供列表做点击委托，但 id 不是被观察的属性。卡片不读写任何应用状态。
#[derive(Debug, Clone, PartialEq)]
pub struct BookPreview {
    book_id: String,
    /// 当前属性值
    attributes: PreviewFields,
    /// 实际显示的内容
    displayed: PreviewFields,
    connected: bool,
}

impl BookPreview {
    /// 创建一个尚未挂载的卡片
    pub fn new(book_id: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            attributes: PreviewFields::default(),
            displayed: PreviewFields::default(),
            connected: false,
        }
    }

    pub fn observed_attributes() -> &'static [PreviewAttribute] {
        &[
            PreviewAttribute::Cover,
            PreviewAttribute::Title,
            PreviewAttribute::Author,
        ]
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn attribute(&self, attr: PreviewAttribute) -> &str {
        self.attributes.get(attr)
    }

    /// 卡片上当前显示的内容
    pub fn displayed(&self, attr: PreviewAttribute) -> &str {
        self.displayed.get(attr)
    }

    /// 设置属性，已挂载时触发属性变更回调
    pub fn set_attribute(&mut self, attr: PreviewAttribute, value: impl Into<String>) {
        let value = value.into();
        let old = std::mem::replace(self.attributes.get_mut(attr), value.clone());
        if self.connected {
            self.attribute_changed(attr, &old, &value);
        }
    }

    fn attribute_changed(&mut self, attr: PreviewAttribute, old: &str, new: &str) {
        if old != new {
            *self.displayed.get_mut(attr) = new.to_string();
        }
    }

    /// 挂载到列表，并用当前属性刷新全部显示内容
    pub fn connect(&mut self) {
        self.connected = true;
        self.displayed = self.attributes.clone();
    }

    /// 生成可渲染的卡片部件
    pub fn card(&self, palette: Palette, selected: bool) -> PreviewCard<'_> {
        PreviewCard {
            preview: self,
            palette,
            selected,
        }
    }
}

pub struct PreviewCard<'a> {
    preview: &'a BookPreview,
    palette: Palette,
    selected: bool,
}

impl Widget for PreviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default().fg(self.palette.fg()).bg(self.palette.bg());
        let border_style = if self.selected {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(base);

        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(self.preview.displayed(PreviewAttribute::Title), width),
                base.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(self.preview.displayed(PreviewAttribute::Author), width),
                base,
            )),
            Line::from(Span::styled(
                truncate_to_width(self.preview.displayed(PreviewAttribute::Cover), width),
                base.fg(self.palette.muted()).add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).style(base).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::theme::Theme;

    fn filled_preview() -> BookPreview {
        let mut preview = BookPreview::new("b1");
        preview.set_attribute(PreviewAttribute::Cover, "https://example.com/b1.jpg");
        preview.set_attribute(PreviewAttribute::Title, "The Silent Sea");
        preview.set_attribute(PreviewAttribute::Author, "Jane Doe");
        preview
    }

    #[test]
    fn test_attribute_names() {
        let names: Vec<&str> = BookPreview::observed_attributes()
            .iter()
            .map(|attr| attr.name())
            .collect();
        assert_eq!(names, vec!["cover", "title", "author"]);
        assert_eq!(
            PreviewAttribute::from_name("title"),
            Some(PreviewAttribute::Title)
        );
        assert_eq!(PreviewAttribute::from_name("preview"), None);
    }

    #[test]
    fn test_unconnected_preview_displays_nothing() {
        let preview = filled_preview();
        assert!(!preview.is_connected());
        assert_eq!(preview.attribute(PreviewAttribute::Title), "The Silent Sea");
        assert_eq!(preview.displayed(PreviewAttribute::Title), "");
    }

    #[test]
    fn test_connect_copies_attributes() {
        let mut preview = filled_preview();
        preview.connect();

        assert_eq!(
            preview.displayed(PreviewAttribute::Cover),
            "https://example.com/b1.jpg"
        );
        assert_eq!(preview.displayed(PreviewAttribute::Title), "The Silent Sea");
        assert_eq!(preview.displayed(PreviewAttribute::Author), "Jane Doe");
        assert_eq!(preview.book_id(), "b1");
    }

    #[test]
    fn test_attribute_change_after_connect_updates_display() {
        let mut preview = filled_preview();
        preview.connect();

        preview.set_attribute(PreviewAttribute::Author, "John Roe");

        assert_eq!(preview.displayed(PreviewAttribute::Author), "John Roe");
        assert_eq!(preview.displayed(PreviewAttribute::Title), "The Silent Sea");
    }

    #[test]
    fn test_card_renders_fields() {
        let mut preview = filled_preview();
        preview.connect();

        let area = Rect::new(0, 0, 24, 5);
        let mut buf = Buffer::empty(area);
        preview.card(Theme::Day.palette(), false).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("The Silent Sea"));
        assert!(text.contains("Jane Doe"));
    }
}
