// Notification Commands
//
// 通知面板的界面命令

use serde::{Deserialize, Serialize};

use crate::infrastructure::AppState;
use crate::modules::notification::{MarkReadOutcome, NotificationId};
use crate::shared::{AppResult, NotificationFeedView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub id: NotificationId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub outcome: MarkReadOutcome,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedChangeResponse {
    /// 受影响的条目数
    pub affected: usize,
    pub unread_count: usize,
}

pub async fn notification_list(state: &AppState) -> AppResult<NotificationFeedView> {
    let feed = state.notifications.snapshot().await?;
    Ok(NotificationFeedView::from(feed))
}

pub async fn notification_mark_read(
    state: &AppState,
    request: MarkReadRequest,
) -> AppResult<MarkReadResponse> {
    let outcome = state.notifications.mark_as_read(request.id).await?;
    Ok(MarkReadResponse {
        outcome,
        unread_count: state.notifications.snapshot().await?.unread_count(),
    })
}

pub async fn notification_mark_all_read(state: &AppState) -> AppResult<FeedChangeResponse> {
    let affected = state.notifications.mark_all_as_read().await?;
    Ok(FeedChangeResponse {
        affected,
        unread_count: state.notifications.snapshot().await?.unread_count(),
    })
}

pub async fn notification_clear(state: &AppState) -> AppResult<FeedChangeResponse> {
    let affected = state.notifications.clear().await?;
    Ok(FeedChangeResponse {
        affected,
        unread_count: state.notifications.snapshot().await?.unread_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::notification::NotificationKind;

    #[tokio::test]
    async fn test_notification_panel_flow() {
        let state = AppState::in_memory().await.unwrap();

        let feed = notification_list(&state).await.unwrap();
        assert_eq!(feed.notifications.len(), 3);
        assert_eq!(feed.unread_count, 2);

        let first = feed.notifications[0].id();
        let marked = notification_mark_read(&state, MarkReadRequest { id: first })
            .await
            .unwrap();
        assert_eq!(marked.outcome, MarkReadOutcome::Marked);
        assert_eq!(marked.unread_count, 1);

        let all = notification_mark_all_read(&state).await.unwrap();
        assert_eq!(all.affected, 1);
        assert_eq!(all.unread_count, 0);

        let cleared = notification_clear(&state).await.unwrap();
        assert_eq!(cleared.affected, 3);
        assert!(notification_list(&state).await.unwrap().notifications.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_feed_view_counts_its_own_entries() {
        let state = AppState::in_memory().await.unwrap();

        let notifications = state.notifications.clone();
        let writer = tokio::spawn(async move {
            for i in 0..200 {
                notifications
                    .add_notification(NotificationKind::Message, "New Message", i.to_string(), None)
                    .await
                    .unwrap();
            }
        });

        for _ in 0..200 {
            let view = notification_list(&state).await.unwrap();
            let unread = view.notifications.iter().filter(|n| !n.is_read()).count();
            assert_eq!(view.unread_count, unread);
        }
        writer.await.unwrap();
    }
}
