use async_trait::async_trait;

mod execution;
mod user;

pub use execution::CallOutcome;
pub(crate) use execution::HttpCallExecutor;
pub(crate) use user::VirtualUser;

/// One request/response cycle. Implementations never fail: every problem is
/// folded into the returned [`CallOutcome`].
#[async_trait]
pub(crate) trait CallPort: Send + Sync {
    async fn execute(&self) -> CallOutcome;
}
