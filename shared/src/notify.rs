//! 通知队列
//!
//! 只负责数据：入队、上限裁剪、按 id 关闭。
//! 定时过期由前端在入队后调度 `dismiss` 完成。

use std::collections::VecDeque;

/// 通知样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    /// 错误 / 警示样式
    Destructive,
}

/// 待展示的通知内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// 已入队的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub notice: Notice,
}

/// 通知队列，最新的在最前
#[derive(Debug, Clone)]
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    items: VecDeque<Notification>,
}

impl ToastQueue {
    /// `limit` 至少为 1
    pub fn new(limit: usize) -> Self {
        Self {
            next_id: 1,
            limit: limit.max(1),
            items: VecDeque::new(),
        }
    }

    /// 入队并返回分配的 id；超出上限时丢弃最旧的通知
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        tracing::debug!(id, title = %notice.title, destructive = notice.is_destructive(), "toast queued");
        self.items.push_front(Notification { id, notice });
        self.items.truncate(self.limit);
        id
    }

    /// 关闭指定通知；已过期或不存在时返回 `false`
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOAST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(queue: &ToastQueue) -> Vec<&str> {
        queue.iter().map(|n| n.notice.title.as_str()).collect()
    }

    #[test]
    fn test_newest_first_and_ids_increase() {
        let mut queue = ToastQueue::new(5);
        let a = queue.push(Notice::new("a", ""));
        let b = queue.push(Notice::new("b", ""));
        assert!(b > a);
        assert_eq!(titles(&queue), vec!["b", "a"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.push(Notice::new("a", ""));
        queue.push(Notice::new("b", ""));
        queue.push(Notice::new("c", ""));
        assert_eq!(titles(&queue), vec!["c", "b"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(Notice::new("a", ""));
        queue.push(Notice::destructive("b", "bad"));

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert!(queue.iter().all(|n| n.notice.is_destructive()));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut queue = ToastQueue::new(3);
        queue.push(Notice::new("same", "x"));
        queue.push(Notice::new("same", "x"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut queue = ToastQueue::new(0);
        queue.push(Notice::new("a", ""));
        assert_eq!(queue.len(), 1);
    }
}
