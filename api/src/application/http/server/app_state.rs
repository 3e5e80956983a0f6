use std::sync::Arc;

use pantry_keeper_core::application::PantryKeeperService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryKeeperService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryKeeperService) -> Self {
        Self { args, service }
    }
}
