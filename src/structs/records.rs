use serde::{Deserialize, Deserializer};
use std::fmt::{Display, Formatter};

/// table api 回傳的一筆資料
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub record_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: RecordFields,
    #[serde(default, deserialize_with = "null_as_default")]
    pub create_time: i64,
}

/// 缺少或為 null 的欄位一律給預設值
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecordFields {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,
}

impl RecordFields {
    /// 第一張封面，沒有則為空字串
    pub fn first_cover(&self) -> String {
        self.cover.first().cloned().unwrap_or_default()
    }
}

/// 分類欄位可能是單一文字，也可能是多個 tag
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Category {
    Text(String),
    Tags(Vec<String>),
}

impl Default for Category {
    fn default() -> Self {
        Category::Text(String::new())
    }
}

impl Category {
    /// 每個可連結的分類名稱，空字串不算
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Category::Text(text) => vec![text.as_str()],
            Category::Tags(tags) => tags.iter().map(String::as_str).collect(),
        }
        .into_iter()
        .filter(|label| !label.is_empty())
        .collect()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Text(text) => write!(f, "{}", text),
            Category::Tags(tags) => write!(f, "{}", tags.join(", ")),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_fields_become_defaults() {
        let record: RawRecord = serde_json::from_value(json!({
            "record_id": "rec1",
            "fields": { "title": "Hello", "content": null },
        }))
        .unwrap();

        assert_eq!(record.fields.title, "Hello");
        assert_eq!(record.fields.content, "");
        assert!(record.fields.cover.is_empty());
        assert_eq!(record.fields.category, Category::default());
        assert_eq!(record.create_time, 0);
        assert_eq!(record.fields.first_cover(), "");
    }

    #[test]
    fn category_accepts_text_or_tags() {
        let text: Category = serde_json::from_value(json!("Rust")).unwrap();
        let tags: Category = serde_json::from_value(json!(["Rust", "Web"])).unwrap();

        assert_eq!(text.to_string(), "Rust");
        assert_eq!(tags.to_string(), "Rust, Web");
    }

    #[test]
    fn labels_split_tags_and_skip_empty() {
        let tags = Category::Tags(vec!["Rust".into(), "".into(), "CI/CD".into()]);

        assert_eq!(tags.labels(), vec!["Rust", "CI/CD"]);
        assert_eq!(Category::Text("Go".into()).labels(), vec!["Go"]);
        assert!(Category::default().labels().is_empty());
    }

    #[test]
    fn first_cover_picks_the_first_url() {
        let fields = RecordFields {
            cover: vec!["https://a/1.png".into(), "https://a/2.png".into()],
            ..Default::default()
        };

        assert_eq!(fields.first_cover(), "https://a/1.png");
    }
}
