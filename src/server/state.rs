use std::sync::Arc;

use crate::subgraph::PositionSource;
use crate::view::DashboardView;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<DashboardView>,
}

impl AppState {
    /// Start the dashboard's single fetch.
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self {
            view: Arc::new(DashboardView::spawn(source)),
        }
    }
}
