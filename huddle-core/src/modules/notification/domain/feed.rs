use serde::{Deserialize, Serialize};

use super::entities::Notification;
use super::value_objects::{MarkReadOutcome, NotificationId};

/// 通知流聚合根
///
/// 按时间倒序保存（最新在前）。未读数每次从条目重新统计，不单独缓存
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有条目初始化，输入须为最新在前
    pub fn from_entries(entries: Vec<Notification>) -> Self {
        Self { entries }
    }

    /// 插入到最前
    pub fn prepend(&mut self, notification: Notification) {
        self.entries.insert(0, notification);
    }

    pub fn mark_as_read(&mut self, id: NotificationId) -> MarkReadOutcome {
        match self.entries.iter_mut().find(|n| n.id() == id) {
            Some(notification) => notification.mark_read(),
            None => MarkReadOutcome::NotFound,
        }
    }

    /// 全部标记为已读，返回实际变化的条目数
    pub fn mark_all_as_read(&mut self) -> usize {
        self.entries
            .iter_mut()
            .map(|n| n.mark_read())
            .filter(MarkReadOutcome::changed)
            .count()
    }

    /// 清空通知流，返回移除的条目数
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.is_read()).count()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::notification::domain::NotificationKind;

    fn unread(title: &str) -> Notification {
        Notification::new(NotificationKind::System, title, "body", None)
    }

    #[test]
    fn test_prepend_is_newest_first() {
        let mut feed = NotificationFeed::new();
        feed.prepend(unread("first"));
        feed.prepend(unread("second"));

        let titles: Vec<&str> = feed.entries().iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_mark_as_read_is_idempotent() {
        let mut feed = NotificationFeed::new();
        let notification = unread("a");
        let id = notification.id();
        feed.prepend(notification);
        feed.prepend(unread("b"));

        assert_eq!(feed.mark_as_read(id), MarkReadOutcome::Marked);
        assert_eq!(feed.unread_count(), 1);

        assert_eq!(feed.mark_as_read(id), MarkReadOutcome::AlreadyRead);
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_mark_unknown_id_changes_nothing() {
        let mut feed = NotificationFeed::new();
        feed.prepend(unread("a"));

        assert_eq!(
            feed.mark_as_read(NotificationId::new()),
            MarkReadOutcome::NotFound
        );
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_mark_all_counts_only_changed_entries() {
        let mut feed = NotificationFeed::new();
        let already = unread("read");
        let already_id = already.id();
        feed.prepend(already);
        feed.mark_as_read(already_id);
        feed.prepend(unread("x"));
        feed.prepend(unread("y"));

        assert_eq!(feed.mark_all_as_read(), 2);
        assert_eq!(feed.unread_count(), 0);
        assert_eq!(feed.mark_all_as_read(), 0);
    }

    #[test]
    fn test_clear_three_unread() {
        let mut feed = NotificationFeed::new();
        for title in ["a", "b", "c"] {
            feed.prepend(unread(title));
        }
        assert_eq!(feed.unread_count(), 3);

        assert_eq!(feed.clear(), 3);
        assert!(feed.is_empty());
        assert_eq!(feed.unread_count(), 0);
    }
}
