/// Application service. The repository generic covers the record store and
/// its liveness port; the client generic covers the chat-completion side.
#[derive(Debug, Clone)]
pub struct Service<R, C> {
    pub(crate) repository: R,
    pub(crate) suggestion_client: C,
}

impl<R, C> Service<R, C> {
    pub fn new(repository: R, suggestion_client: C) -> Self {
        Self {
            repository,
            suggestion_client,
        }
    }
}
