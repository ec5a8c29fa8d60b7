use lujin_optimizer::{optimize::OptimizeParams, solver::search_parameters::SearchParameters};

use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState { config }
    }

    /// Fresh parameters for one request's solver session.
    pub fn optimize_params(&self) -> OptimizeParams {
        OptimizeParams {
            search: SearchParameters::with_time_limit(self.config.solver_time_limit),
        }
    }
}
