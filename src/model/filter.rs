use super::catalog::{Book, Catalog};

/// 下拉框中表示“不限”的取值
pub const ANY: &str = "any";

/// 搜索表单提交的筛选条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// 标题子串，去除首尾空白后为空表示不限
    pub title: String,
    /// 类别 id，`"any"` 表示不限
    pub genre: String,
    /// 作者 id，`"any"` 表示不限
    pub author: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: ANY.to_string(),
            author: ANY.to_string(),
        }
    }
}

impl FilterCriteria {
    /// 是否三个条件都不限
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.genre == ANY && self.author == ANY
    }

    /// 判断单本书是否满足条件
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = self.genre == ANY || book.genres.iter().any(|g| *g == self.genre);
        let author_match = self.author == ANY || book.author == self.author;
        let needle = self.title.trim();
        let title_match =
            needle.is_empty() || book.title.to_lowercase().contains(&needle.to_lowercase());

        genre_match && author_match && title_match
    }
}

/// 按条件筛选目录
///
/// # Returns
///
/// 满足条件的图书在 `catalog.books` 中的索引，保持原有顺序。没有匹配时返回空列表。
pub fn filter_books(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<usize> {
    catalog
        .books
        .iter()
        .enumerate()
        .filter(|(_, book)| criteria.matches(book))
        .map(|(index, _)| index)
        .collect()
}
