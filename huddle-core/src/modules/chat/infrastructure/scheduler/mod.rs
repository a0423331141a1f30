// Reply Schedulers

mod tokio_reply_scheduler;

pub use tokio_reply_scheduler::TokioReplyScheduler;
