use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while writing a rendered document to a sink.
pub enum RenderError {
    #[error("I/O error: {0}")]
    /// The sink rejected data.
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
/// Errors produced by [`SharedRegistry`](crate::SharedRegistry) access.
pub enum RegistryError {
    #[error("builder registry lock poisoned")]
    /// A thread panicked while holding the registry lock.
    Poisoned,
}
