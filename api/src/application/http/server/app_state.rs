use std::sync::Arc;

use ferrisfit_core::application::FerrisFitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FerrisFitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FerrisFitService) -> Self {
        Self { args, service }
    }
}
