//! In-memory `SqlExecutor` that records statements and replays queued results.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use warehouse_api::sql::SqlValue;
use warehouse_api::{AppState, RequestContext, SqlExecutor, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub sql: String,
    pub args: Vec<SqlValue>,
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    execute_results: VecDeque<Result<u64, sqlx::Error>>,
    query_results: VecDeque<Result<Vec<Value>, sqlx::Error>>,
    delay: Option<Duration>,
}

/// Unqueued `execute` calls affect one row; unqueued `query` calls return no rows.
/// Statements go through `RequestContext::run`, so a done context records nothing.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_execute(&self, result: Result<u64, sqlx::Error>) {
        self.inner.lock().unwrap().execute_results.push_back(result);
    }

    pub fn push_rows(&self, rows: Vec<Value>) {
        self.inner.lock().unwrap().query_results.push_back(Ok(rows));
    }

    pub fn push_query_error(&self, err: sqlx::Error) {
        self.inner.lock().unwrap().query_results.push_back(Err(err));
    }

    /// Every statement takes this long to complete.
    pub fn set_delay(&self, delay: Duration) {
        self.inner.lock().unwrap().delay = Some(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no statement was issued")
    }

    fn record(&self, sql: &str, args: &[SqlValue]) -> Option<Duration> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call {
            sql: sql.to_string(),
            args: args.to_vec(),
        });
        inner.delay
    }
}

#[async_trait]
impl SqlExecutor for RecordingExecutor {
    async fn execute(&self, ctx: &RequestContext, sql: &str, args: &[SqlValue]) -> Result<u64, StoreError> {
        ctx.run(async {
            if let Some(delay) = self.record(sql, args) {
                tokio::time::sleep(delay).await;
            }
            let next = self.inner.lock().unwrap().execute_results.pop_front();
            next.unwrap_or(Ok(1))
        })
        .await
    }

    async fn query(&self, ctx: &RequestContext, sql: &str, args: &[SqlValue]) -> Result<Vec<Value>, StoreError> {
        ctx.run(async {
            if let Some(delay) = self.record(sql, args) {
                tokio::time::sleep(delay).await;
            }
            let next = self.inner.lock().unwrap().query_results.pop_front();
            next.unwrap_or(Ok(Vec::new()))
        })
        .await
    }
}

pub fn state_with(db: &RecordingExecutor, request_timeout: Duration) -> AppState {
    AppState::new(Arc::new(db.clone()), request_timeout)
}

pub fn ctx() -> RequestContext {
    RequestContext::with_timeout(Duration::from_secs(5))
}
