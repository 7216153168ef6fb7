use askama::Template;
use serde::Deserialize;

use super::records::Category;

/// 列表頁用的文章摘要
#[derive(Clone, Debug, PartialEq)]
pub struct PostSummary {
    pub record_id: String,
    pub title: String,
    pub content: String,
    pub cover: String,
    pub category: Category,
    pub create_time: String,
    pub summary: String,
}

/// 單篇文章頁用的資料
#[derive(Clone, Debug, PartialEq)]
pub struct PostDetail {
    pub record_id: String,
    pub title: String,
    pub category: Category,
    pub create_time: String,
    pub cover: String,
    pub markdown_html: String,
}

/// index.html 的參數
#[derive(Template, Debug)]
#[template(path = "index.html")]
pub struct PageParams {
    pub author: String,
    pub avatar: String,
    pub latest_post: Option<PostSummary>,
    pub posts: Vec<PostSummary>,
    pub category: Option<String>,
    pub query: Option<String>,
}

/// post.html 的參數
#[derive(Template, Debug)]
#[template(path = "post.html")]
pub struct PostPage {
    pub author: String,
    pub avatar: String,
    pub post: PostDetail,
    pub category: Category,
}

/// 列表頁的查詢方式
#[derive(Clone, Debug, PartialEq)]
pub enum FeedMode {
    All,
    ByCategory(String),
    BySearch(String),
}

impl FeedMode {
    pub fn category(&self) -> Option<String> {
        match self {
            FeedMode::ByCategory(category) => Some(category.clone()),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<String> {
        match self {
            FeedMode::BySearch(query) => Some(query.clone()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}
