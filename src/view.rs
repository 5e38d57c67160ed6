//! The dashboard's load-once state: `Loading` until the single fetch
//! completes, then `Loaded` for good.

use chrono::{DateTime, Utc};

use crate::leaderboard::LeaderboardReport;
use crate::model::LiquidityPosition;

#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Loaded(LoadedPositions),
}

/// Result of the one fetch, live or demo.
#[derive(Debug, Clone)]
pub struct LoadedPositions {
    pub positions: Vec<LiquidityPosition>,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedPositions {
    pub fn new(positions: Vec<LiquidityPosition>) -> Self {
        LoadedPositions {
            positions,
            loaded_at: Utc::now(),
        }
    }

    /// Summary and rows are derived here, on every call.
    pub fn report(&self) -> LeaderboardReport {
        LeaderboardReport::build(&self.positions, self.loaded_at)
    }
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn report(&self) -> Option<LeaderboardReport> {
        match self {
            ViewState::Loading => None,
            ViewState::Loaded(loaded) => Some(loaded.report()),
        }
    }
}

#[cfg(feature = "full")]
pub use dashboard::DashboardView;

#[cfg(feature = "full")]
mod dashboard {
    use std::sync::Arc;

    use tokio::sync::watch;
    use tokio::task::AbortHandle;
    use tracing::info;

    use super::{LoadedPositions, ViewState};
    use crate::subgraph::PositionSource;

    /// Owns the one outstanding fetch and publishes its result.
    ///
    /// Dropping the view aborts the fetch if it is still running; the
    /// result is then discarded.
    pub struct DashboardView {
        state: watch::Receiver<ViewState>,
        task: AbortHandle,
    }

    impl DashboardView {
        /// Start loading. The source is queried exactly once.
        pub fn spawn(source: Arc<dyn PositionSource>) -> Self {
            let (tx, rx) = watch::channel(ViewState::Loading);

            let handle = tokio::spawn(async move {
                let positions = source.fetch_positions().await;
                info!(
                    source = source.name(),
                    count = positions.len(),
                    "dashboard loaded"
                );
                tx.send_replace(ViewState::Loaded(LoadedPositions::new(positions)));
            });

            DashboardView {
                state: rx,
                task: handle.abort_handle(),
            }
        }

        /// Snapshot of the current state.
        pub fn state(&self) -> ViewState {
            self.state.borrow().clone()
        }

        /// Wait for the fetch to finish. `None` if it was aborted.
        pub async fn loaded(&self) -> Option<LoadedPositions> {
            let mut rx = self.state.clone();
            let state = rx
                .wait_for(|s| matches!(s, ViewState::Loaded(_)))
                .await
                .ok()?;
            match &*state {
                ViewState::Loaded(loaded) => Some(loaded.clone()),
                ViewState::Loading => None,
            }
        }
    }

    impl Drop for DashboardView {
        fn drop(&mut self) {
            self.task.abort();
        }
    }
}
