use chrono::DateTime;

use crate::{
    config::Config,
    services::markdown::render_markdown,
    structs::{
        posts::{FeedMode, PageParams, PostDetail, PostSummary},
        records::RawRecord,
    },
};

const SUMMARY_CHARS: usize = 200;
const SUMMARY_SUFFIX: &str = "...";

/// Unix 秒數轉成 "November 14, 2023" 格式 (UTC)
pub fn format_create_time(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .unwrap_or_default()
        .format("%B %d, %Y")
        .to_string()
}

/// 取前 200 個字元，不論長短都接上 "..."
pub fn summarize(content: &str) -> String {
    let mut summary: String = content.chars().take(SUMMARY_CHARS).collect();
    summary.push_str(SUMMARY_SUFFIX);
    summary
}

pub fn build_summary(record: RawRecord) -> PostSummary {
    let cover = record.fields.first_cover();
    let summary = summarize(&record.fields.content);

    PostSummary {
        record_id: record.record_id,
        title: record.fields.title,
        content: record.fields.content,
        cover,
        category: record.fields.category,
        create_time: format_create_time(record.create_time),
        summary,
    }
}

/// 保持來源順序，不過濾也不排序
pub fn build_summaries(records: Vec<RawRecord>) -> Vec<PostSummary> {
    records.into_iter().map(build_summary).collect()
}

/// 拆成最新一篇與其餘文章
pub fn split_feed(summaries: Vec<PostSummary>) -> (Option<PostSummary>, Vec<PostSummary>) {
    let mut iter = summaries.into_iter();
    let latest = iter.next();
    (latest, iter.collect())
}

pub fn build_detail(record: RawRecord) -> PostDetail {
    let cover = record.fields.first_cover();
    let markdown_html = render_markdown(&record.fields.content);

    PostDetail {
        record_id: record.record_id,
        title: record.fields.title,
        category: record.fields.category,
        create_time: format_create_time(record.create_time),
        cover,
        markdown_html,
    }
}

pub fn feed_page(config: &Config, mode: &FeedMode, records: Vec<RawRecord>) -> PageParams {
    let (latest_post, posts) = split_feed(build_summaries(records));

    PageParams {
        author: config.author.clone(),
        avatar: config.avatar.clone(),
        latest_post,
        posts,
        category: mode.category(),
        query: mode.query(),
    }
}
