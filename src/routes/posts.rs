use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};

use crate::{
    errors::AppError,
    repositories::records::RecordQuery,
    services::posts::{build_detail, feed_page},
    state::AppState,
    structs::{
        posts::{FeedMode, PageParams, PostPage, SearchParams},
        records::RawRecord,
    },
};

const SEARCH_FIELDS: [&str; 2] = ["title", "content"];

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/category/{category}", get(category))
        .route("/search", get(search))
        .route("/post/{post_id}", get(post))
}

/// 首頁，列出所有文章
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_feed(&state, FeedMode::All).await
}

/// 依分類過濾
async fn category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Html<String>, AppError> {
    render_feed(&state, FeedMode::ByCategory(category)).await
}

/// 以 title、content 全文搜尋
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    render_feed(&state, FeedMode::BySearch(params.query)).await
}

/// 單篇文章，找不到時回 404
async fn post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let record = state.source.find_by_id(&post_id).await?;
    let post = build_detail(record);

    let page = PostPage {
        author: state.config.author.clone(),
        avatar: state.config.avatar.clone(),
        category: post.category.clone(),
        post,
    };

    Ok(Html(page.render()?))
}

async fn render_feed(state: &AppState, mode: FeedMode) -> Result<Html<String>, AppError> {
    let page = load_feed(state, mode).await;

    Ok(Html(page.render()?))
}

/// 取資料失敗時以空列表呈現
pub async fn load_feed(state: &AppState, mode: FeedMode) -> PageParams {
    let records = match fetch_records(state, &mode).await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("{}", err);
            vec![]
        }
    };

    feed_page(&state.config, &mode, records)
}

async fn fetch_records(state: &AppState, mode: &FeedMode) -> Result<Vec<RawRecord>, AppError> {
    match mode {
        FeedMode::All => state.source.find_many(RecordQuery::All).await,
        FeedMode::ByCategory(category) => {
            state
                .source
                .find_many(RecordQuery::CategoryContains(category.clone()))
                .await
        }
        FeedMode::BySearch(query) => state.source.search(query, &SEARCH_FIELDS).await,
    }
}
