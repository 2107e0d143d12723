use std::sync::Arc;

use promptdeck_core::application::PromptdeckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PromptdeckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PromptdeckService) -> Self {
        Self { args, service }
    }
}
