use snapshot_core::holders::handler::HolderClient;

/// Everything the interaction handlers need, built once in `main` and handed
/// to the gateway handler instead of living in globals.
#[derive(Clone)]
pub struct BotDependencies {
    pub holders: HolderClient,
}

impl BotDependencies {
    pub fn new(holders: HolderClient) -> Self {
        Self { holders }
    }
}
