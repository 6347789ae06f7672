/// Errors raised while setting up a scroller.
///
/// Conditions that are normal for a UI (no browser, elements that are not laid out yet,
/// disposing twice) are handled silently and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    #[error("no scroll capable host environment is available")]
    HostUnavailable,

    #[error("the scroll source needs a host element but none was provided")]
    MissingElement,

    #[error("no element matches the scroll container selector `{selector}`")]
    ContainerNotFound { selector: String },

    #[error("failed to register the scroll listener: {0}")]
    Listener(String),
}

pub type ScrollResult<T> = Result<T, ScrollError>;
