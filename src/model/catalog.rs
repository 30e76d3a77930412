use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, Utc};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::config::CONFIG;

/// 目录中的一本书，加载后不可变
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// 唯一标识
    pub id: String,
    pub title: String,
    /// 作者 id，对应 `Catalog::authors` 中的键
    pub author: String,
    /// 封面图片地址
    pub image: String,
    pub description: String,
    /// 出版时间（RFC 3339）
    pub published: DateTime<Utc>,
    /// 所属类别 id 列表
    pub genres: Vec<String>,
}

impl Book {
    /// 出版年份
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// 保持插入顺序的 id → 名称映射
///
/// 下拉框的选项顺序由 JSON 对象中键的顺序决定，因此这里不能用 `HashMap`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMap {
    entries: Vec<(String, String)>,
}

impl NameMap {
    /// 插入一个条目
    ///
    /// 重复的键覆盖旧名称，但保留首次出现的位置。
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == id) {
            entry.1 = name;
        } else {
            self.entries.push((id, name));
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, name)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for NameMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(items: I) -> Self {
        let mut map = NameMap::default();
        for (id, name) in items {
            map.insert(id, name);
        }
        map
    }
}

impl Serialize for NameMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

struct NameMapVisitor;

impl<'de> Visitor<'de> for NameMapVisitor {
    type Value = NameMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping ids to display names")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = NameMap::default();
        while let Some((id, name)) = access.next_entry::<String, String>()? {
            map.insert(id, name);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for NameMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NameMapVisitor)
    }
}

fn default_books_per_page() -> usize {
    CONFIG.default_books_per_page
}

/// 只读的图书目录数据源
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: NameMap,
    pub genres: NameMap,
    /// 每页显示的预览数量
    #[serde(default = "default_books_per_page", alias = "BOOKS_PER_PAGE")]
    pub books_per_page: usize,
}

impl Catalog {
    /// 从 JSON 文本解析目录
    ///
    /// # Errors
    ///
    /// JSON 格式错误或 `books_per_page` 为 0 时返回错误。
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content).context("invalid catalog JSON")?;
        if catalog.books_per_page == 0 {
            bail!("books_per_page must be at least 1");
        }
        Ok(catalog)
    }

    /// 从文件加载目录
    ///
    /// # Errors
    ///
    /// 文件无法读取或内容无效时返回错误。
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid catalog file: {}", path.display()))
    }

    /// 加载内置的示例目录
    pub fn bundled() -> Result<Self> {
        Self::from_json(CONFIG.bundled_catalog).context("bundled catalog is invalid")
    }

    /// 按 id 在完整目录中查找图书
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// 作者显示名称，未登记的 id 原样返回
    pub fn author_name<'a>(&'a self, author_id: &'a str) -> &'a str {
        self.authors.get(author_id).unwrap_or(author_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub(crate) fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.example.com/{}.jpg", id),
            description: format!("Description of {}", title),
            published: Utc.with_ymd_and_hms(year, 6, 15, 0, 0, 0).unwrap(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// 5 本书、每页 2 本的测试目录
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog {
            books: vec![
                book("b1", "The Silent Sea", "A1", &["fiction", "mystery"], 2001),
                book("b2", "Deep Water", "A2", &["mystery"], 1995),
                book("b3", "Sea of Stars", "A1", &["scifi"], 2010),
                book("b4", "Garden Notes", "A3", &["nonfiction"], 1987),
                book("b5", "Quiet Hours", "A2", &["poetry"], 2020),
            ],
            authors: NameMap::from_iter([("A1", "Jane Doe"), ("A2", "John Roe"), ("A3", "Ada Poe")]),
            genres: NameMap::from_iter([
                ("fiction", "Fiction"),
                ("mystery", "Mystery"),
                ("scifi", "Science Fiction"),
                ("nonfiction", "Non-Fiction"),
                ("poetry", "Poetry"),
            ]),
            books_per_page: 2,
        }
    }

    #[test]
    fn test_name_map_preserves_json_order() {
        let json = r#"{"z": "Zed", "a": "Ay", "m": "Em"}"#;
        let map: NameMap = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = map.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        assert_eq!(map.get("a"), Some("Ay"));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_name_map_duplicate_key_keeps_first_position() {
        let mut map = NameMap::default();
        map.insert("x", "First");
        map.insert("y", "Other");
        map.insert("x", "Second");

        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next(), Some(("x", "Second")));
    }

    #[test]
    fn test_from_json_accepts_original_field_names() {
        let json = r#"{
            "books": [{
                "id": "b1",
                "genres": ["g1"],
                "popularity": 12,
                "title": "Book One",
                "image": "https://example.com/1.jpg",
                "path": "ignored",
                "description": "Desc",
                "pages": 320,
                "published": "2001-10-01T00:00:00.000Z",
                "author": "a1"
            }],
            "authors": {"a1": "Author One"},
            "genres": {"g1": "Genre One"},
            "BOOKS_PER_PAGE": 12
        }"#;

        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.books.len(), 1);
        assert_eq!(catalog.books[0].published_year(), 2001);
        assert_eq!(catalog.books_per_page, 12);
        assert_eq!(catalog.author_name("a1"), "Author One");
    }

    #[test]
    fn test_from_json_defaults_page_size() {
        let json = r#"{"books": [], "authors": {}, "genres": {}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.books_per_page, CONFIG.default_books_per_page);
    }

    #[test]
    fn test_from_json_rejects_zero_page_size() {
        let json = r#"{"books": [], "authors": {}, "genres": {}, "books_per_page": 0}"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let content = serde_json::to_string(&sample_catalog()).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog, sample_catalog());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.books.is_empty());
        assert!(!catalog.authors.is_empty());
        assert!(!catalog.genres.is_empty());
        for book in &catalog.books {
            assert!(catalog.authors.get(&book.author).is_some(), "{}", book.id);
            for genre in &book.genres {
                assert!(catalog.genres.get(genre).is_some(), "{}", genre);
            }
        }
    }

    #[test]
    fn test_find_book_and_author_fallback() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_book("b3").unwrap().title, "Sea of Stars");
        assert!(catalog.find_book("nope").is_none());
        assert_eq!(catalog.author_name("A9"), "A9");
    }
}
