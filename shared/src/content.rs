//! 静态内容与排序
//!
//! 幸存者故事和路线评分都是内置样例数据，不可变。
//! 页面只能选择排序方式，排序是对副本做的稳定排序。

use serde::{Deserialize, Serialize};

/// 列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// 按 id 升序（id 视为发布顺序）
    #[default]
    Latest,
    /// 按热度降序
    Popular,
}

/// 可以参与排序的记录
pub trait Ranked {
    /// 发布顺序
    fn sequence(&self) -> u32;
    /// 热度（点赞数 / 评分）
    fn popularity(&self) -> u32;
}

/// 返回排好序的副本
pub fn sorted<T: Ranked + Clone>(items: &[T], mode: SortMode) -> Vec<T> {
    let mut items = items.to_vec();
    match mode {
        SortMode::Latest => items.sort_by_key(Ranked::sequence),
        SortMode::Popular => items.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
    }
    items
}

// =========================================================
// 幸存者故事
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub author: String,
    /// 相对时间描述，仅用于展示，与 id 顺序不保证一致
    pub date: String,
    pub likes: u32,
}

impl Ranked for Story {
    fn sequence(&self) -> u32 {
        self.id
    }

    fn popularity(&self) -> u32 {
        self.likes
    }
}

pub fn sample_stories() -> Vec<Story> {
    [
        (
            1,
            "How I Found Strength After My Experience",
            "I never thought I would find myself in such a situation, but here I am, months later, sharing my story. It happened on a quiet street near downtown...",
            "Anonymous",
            "3 days ago",
            24,
        ),
        (
            2,
            "My Community Rallied Around Me",
            "After the incident, I was afraid to go out alone. But then something amazing happened. My neighbors, friends, and even strangers from this app...",
            "Sarah J.",
            "1 week ago",
            42,
        ),
        (
            3,
            "The Power of Speaking Up",
            "For months I kept quiet about what happened. I blamed myself and felt ashamed. But when I finally spoke up, I realized I wasn't alone...",
            "Rebecca T.",
            "2 weeks ago",
            38,
        ),
    ]
    .into_iter()
    .map(|(id, title, content, author, date, likes)| Story {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        likes,
    })
    .collect()
}

// =========================================================
// 路线评分
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedRoute {
    pub id: u32,
    pub name: String,
    /// 1..=5
    pub rating: u8,
    pub comment: String,
    pub user: String,
}

impl Ranked for RatedRoute {
    fn sequence(&self) -> u32 {
        self.id
    }

    fn popularity(&self) -> u32 {
        u32::from(self.rating)
    }
}

pub fn recent_route_ratings() -> Vec<RatedRoute> {
    [
        (
            1,
            "Downtown Main St to Central Park",
            4,
            "Well-lit and usually busy with people. Felt safe even at night.",
            "Marie L.",
        ),
        (
            2,
            "Westside Shopping Center Area",
            2,
            "Poor lighting in the parking area. Would avoid at night.",
            "Jessica T.",
        ),
        (
            3,
            "University Campus Walkway",
            5,
            "Security guards present, emergency phones available, excellent lighting.",
            "Amanda K.",
        ),
    ]
    .into_iter()
    .map(|(id, name, rating, comment, user)| RatedRoute {
        id,
        name: name.to_string(),
        rating,
        comment: comment.to_string(),
        user: user.to_string(),
    })
    .collect()
}

/// 评分对应的文字说明；0 表示尚未评分
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        0 => None,
        1 => Some("Unsafe"),
        2 => Some("Somewhat Unsafe"),
        3 => Some("Moderate"),
        4 => Some("Safe"),
        _ => Some("Very Safe"),
    }
}
