// Tokio Reply Scheduler
//
// 每个待发回复对应一个 tokio 任务，AbortHandle 按联系人登记在待发表中。
// 任务触发时先从待发表移除自己的 ticket，移除失败说明已被取消，直接退出。

use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::{
    ChatDomainEvent, ReplyCancelledEvent, ReplyDroppedEvent, ReplyPolicy, ReplyScheduledEvent,
};
use crate::modules::chat::ports::{ReplyOutcome, ReplyScheduler, ReplySink, ReplyTicket};
use crate::modules::directory::CounterpartId;

type PendingTable = Arc<Mutex<HashMap<CounterpartId, HashMap<Uuid, AbortHandle>>>>;

pub struct TokioReplyScheduler {
    policy: ReplyPolicy,
    rng: Mutex<StdRng>,
    pending: PendingTable,
    sink: Arc<dyn ReplySink>,
    event_bus: Arc<EventBus>,
}

impl TokioReplyScheduler {
    pub fn new(policy: ReplyPolicy, sink: Arc<dyn ReplySink>, event_bus: Arc<EventBus>) -> Self {
        Self::with_rng(policy, StdRng::from_entropy(), sink, event_bus)
    }

    /// 注入随机源（测试用固定种子）
    pub fn with_rng(
        policy: ReplyPolicy,
        rng: StdRng,
        sink: Arc<dyn ReplySink>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            policy,
            rng: Mutex::new(rng),
            pending: Arc::new(Mutex::new(HashMap::new())),
            sink,
            event_bus,
        }
    }

    pub fn policy(&self) -> &ReplyPolicy {
        &self.policy
    }

    async fn fire(
        ticket: ReplyTicket,
        pending: PendingTable,
        sink: Arc<dyn ReplySink>,
        event_bus: Arc<EventBus>,
    ) -> ReplyOutcome {
        tokio::time::sleep(ticket.delay()).await;

        if !Self::take_ticket(&pending, &ticket).await {
            tracing::debug!("[ReplySimulator] Ticket {} was cancelled", ticket.id);
            return ReplyOutcome::Cancelled;
        }

        let outcome = sink.deliver(&ticket).await;

        if outcome == ReplyOutcome::CounterpartMissing {
            event_bus.publish(AppEvent::Chat(ChatDomainEvent::ReplyDropped(
                ReplyDroppedEvent {
                    counterpart_id: ticket.counterpart_id.clone(),
                    ticket_id: ticket.id,
                    timestamp: Utc::now(),
                },
            )));
        }

        outcome
    }

    /// 从待发表移除 ticket，返回是否仍在表中
    async fn take_ticket(pending: &PendingTable, ticket: &ReplyTicket) -> bool {
        let mut pending = pending.lock().await;
        let Some(tickets) = pending.get_mut(&ticket.counterpart_id) else {
            return false;
        };

        let found = tickets.remove(&ticket.id).is_some();
        if tickets.is_empty() {
            pending.remove(&ticket.counterpart_id);
        }
        found
    }
}

#[async_trait]
impl ReplyScheduler for TokioReplyScheduler {
    async fn maybe_arm(&self, counterpart_id: &CounterpartId) -> Option<ReplyTicket> {
        let delay = {
            let mut rng = self.rng.lock().await;
            self.policy.roll(&mut *rng)
        }?;

        let ticket = ReplyTicket::new(counterpart_id.clone(), delay);

        // 持锁期间登记，任务触发时必须先拿到同一把锁
        let mut pending = self.pending.lock().await;
        let task = tokio::spawn(Self::fire(
            ticket.clone(),
            self.pending.clone(),
            self.sink.clone(),
            self.event_bus.clone(),
        ));
        pending
            .entry(counterpart_id.clone())
            .or_default()
            .insert(ticket.id, task.abort_handle());
        drop(pending);

        tracing::info!(
            "[ReplySimulator] Armed reply {} for {} in {} ms",
            ticket.id,
            counterpart_id,
            ticket.delay_ms
        );

        self.event_bus
            .publish(AppEvent::Chat(ChatDomainEvent::ReplyScheduled(
                ReplyScheduledEvent {
                    counterpart_id: counterpart_id.clone(),
                    ticket_id: ticket.id,
                    delay_ms: ticket.delay_ms,
                    timestamp: Utc::now(),
                },
            )));

        Some(ticket)
    }

    async fn cancel_pending(&self, counterpart_id: &CounterpartId) -> usize {
        let removed = self.pending.lock().await.remove(counterpart_id);
        let Some(tickets) = removed else {
            return 0;
        };

        let cancelled = tickets.len();
        for handle in tickets.into_values() {
            handle.abort();
        }

        tracing::info!(
            "[ReplySimulator] Cancelled {} pending replies for {}",
            cancelled,
            counterpart_id
        );

        self.event_bus
            .publish(AppEvent::Chat(ChatDomainEvent::ReplyCancelled(
                ReplyCancelledEvent {
                    counterpart_id: counterpart_id.clone(),
                    cancelled,
                    timestamp: Utc::now(),
                },
            )));

        cancelled
    }

    async fn pending_count(&self, counterpart_id: &CounterpartId) -> usize {
        self.pending
            .lock()
            .await
            .get(counterpart_id)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    async fn total_pending(&self) -> usize {
        self.pending.lock().await.values().map(HashMap::len).sum()
    }
}
