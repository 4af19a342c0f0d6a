use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    domain::{LoadProfile, RequestTemplate},
    error::{AppError, AppResult},
    http::{self, CallPort, HttpCallExecutor, VirtualUser},
};

/// Returned once every virtual user has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunCompletion {
    pub(crate) stopped_users: usize,
}

/// Builds the shared transport, then spawns and joins one task per virtual
/// user.
///
/// Nothing is spawned unless the transport and the prepared request both
/// build successfully.
///
/// # Errors
///
/// Returns an orchestration error when the client or request cannot be built,
/// or a join error when a user task panicked.
pub(crate) async fn run_load_test(
    profile: &LoadProfile,
    template: &RequestTemplate,
    shutdown: &CancellationToken,
) -> AppResult<RunCompletion> {
    let client = http::build_transport(profile).map_err(AppError::http)?;
    let request = http::prepare_request(&client, template).map_err(|err| {
        error!("Request parameters are not valid: {}", err);
        AppError::http(err)
    })?;

    info!(
        "Calling {} {} with {} virtual users for {}s (delay {}ms)",
        template.method(),
        request.url(),
        profile.virtual_users,
        profile.duration.as_secs(),
        profile.delay.as_millis()
    );

    let executor = Arc::new(HttpCallExecutor::new(
        client,
        Arc::new(request),
        profile.debug,
    ));
    drive_users(executor, profile, shutdown).await
}

pub(crate) async fn drive_users<E>(
    executor: Arc<E>,
    profile: &LoadProfile,
    shutdown: &CancellationToken,
) -> AppResult<RunCompletion>
where
    E: CallPort + 'static,
{
    let mut users = JoinSet::new();
    for id in 0..profile.virtual_users.get() {
        let user = VirtualUser::new(
            id,
            Arc::clone(&executor),
            profile.delay,
            profile.duration,
            shutdown.clone(),
        );
        users.spawn(user.run());
    }

    let mut stopped_users: usize = 0;
    let mut first_error = None;
    while let Some(joined) = users.join_next().await {
        match joined {
            Ok(report) => {
                debug!(
                    "Virtual user {} finished ({:?}) with {} calls, {} failed",
                    report.id, report.state, report.calls, report.failures
                );
                stopped_users = stopped_users.saturating_add(1);
            }
            Err(err) => {
                error!("Virtual user task failed: {}", err);
                first_error.get_or_insert(err);
            }
        }
    }

    if let Some(err) = first_error {
        return Err(AppError::from(err));
    }
    Ok(RunCompletion { stopped_users })
}
