//! Per-request deadline and cancellation carried into every store call.

use crate::error::StoreError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Clone, Debug)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl RequestContext {
    /// No deadline, never cancelled unless `cancel` is called.
    pub fn background() -> Self {
        RequestContext {
            deadline: None,
            cancel: CancellationToken::new(),
        }
    }

    /// A timeout too large to represent as an instant means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        RequestContext {
            deadline: Instant::now().checked_add(timeout),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        RequestContext {
            deadline: Some(deadline),
            cancel: CancellationToken::new(),
        }
    }

    /// Context whose cancellation follows `parent` (e.g. the server shutdown token).
    pub fn child_of(parent: &CancellationToken, timeout: Duration) -> Self {
        RequestContext {
            deadline: Instant::now().checked_add(timeout),
            cancel: parent.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Fails fast when the context is already done, so no statement is issued.
    pub fn check(&self) -> Result<(), StoreError> {
        if self.cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(StoreError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drive a store future to completion unless the context is cancelled or
    /// its deadline passes first; either way the future is dropped mid-flight.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        self.check()?;
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                    Ok(res) => res.map_err(StoreError::Db),
                    Err(_) => Err(StoreError::DeadlineExceeded),
                },
                None => fut.await.map_err(StoreError::Db),
            }
        };
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(StoreError::Cancelled),
            res = bounded => res,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn expired_deadline_never_polls_the_statement() {
        let ctx = RequestContext::with_timeout(Duration::ZERO);
        let issued = Arc::new(AtomicBool::new(false));
        let flag = issued.clone();
        let res = ctx
            .run(async move {
                flag.store(true, Ordering::SeqCst);
                Ok::<_, sqlx::Error>(1u64)
            })
            .await;
        assert!(matches!(res, Err(StoreError::DeadlineExceeded)));
        assert!(!issued.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn deadline_aborts_in_flight_statement() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(20));
        let res = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, sqlx::Error>(())
            })
            .await;
        assert!(matches!(res, Err(StoreError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn cancelled_context_reports_cancelled() {
        let ctx = RequestContext::background();
        ctx.cancel();
        let res = ctx.run(async { Ok::<_, sqlx::Error>(()) }).await;
        assert!(matches!(res, Err(StoreError::Cancelled)));
    }

    #[tokio::test]
    async fn parent_cancellation_reaches_in_flight_statement() {
        let shutdown = CancellationToken::new();
        let ctx = RequestContext::child_of(&shutdown, Duration::from_secs(30));
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });
        let res = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, sqlx::Error>(())
            })
            .await;
        assert!(matches!(res, Err(StoreError::Cancelled)));
    }

    #[tokio::test]
    async fn unrepresentable_timeout_means_no_deadline() {
        let ctx = RequestContext::child_of(&CancellationToken::new(), Duration::from_secs(u64::MAX));
        assert!(ctx.check().is_ok());
        let res = ctx.run(async { Ok::<_, sqlx::Error>(5u8) }).await;
        assert_eq!(res.unwrap(), 5);
    }

    #[tokio::test]
    async fn driver_error_passes_through() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(5));
        let res = ctx.run(async { Err::<(), _>(sqlx::Error::PoolTimedOut) }).await;
        assert!(matches!(res, Err(StoreError::Db(sqlx::Error::PoolTimedOut))));
    }
}
