use std::fmt::Display;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("too many dimensions: rank {rank} does not fit below the cap of {max}")]
    TooManyDims { rank: usize, max: usize },

    #[error("{op} expects {expected} dimensions, got {got}")]
    RankMismatch {
        op: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("unknown element kind `{0}`")]
    UnknownElementKind(String),

    #[error("cannot parse type from `{input}`: {reason}")]
    ParseType { input: String, reason: String },

    #[error("element count of {dims:?} overflows usize")]
    SizeOverflow { dims: Vec<usize> },

    #[error("{inner}\n{backtrace}")]
    WithBacktrace {
        inner: Box<Self>,
        backtrace: Box<std::backtrace::Backtrace>,
    },

    #[error("{context}: {wrapped}")]
    WrappedContext {
        wrapped: Box<dyn std::error::Error + Send + Sync>,
        context: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach a backtrace when `RUST_BACKTRACE` asks for one.
    pub fn bt(self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        match backtrace.status() {
            std::backtrace::BacktraceStatus::Disabled
            | std::backtrace::BacktraceStatus::Unsupported => self,
            _ => Self::WithBacktrace {
                inner: Box::new(self),
                backtrace: Box::new(backtrace),
            },
        }
    }

    /// The error with any backtrace wrapper stripped.
    pub fn root(&self) -> &Self {
        match self {
            Self::WithBacktrace { inner, .. } => inner.root(),
            other => other,
        }
    }
}

pub(crate) mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for std::result::Result<T, E> where E: std::error::Error {}
}

/// Attach more context to an error.
///
/// Inspired by [`anyhow::Context`].
pub trait Context<T>: private::Sealed {
    /// Wrap the error value with context that is evaluated lazily, only once
    /// an error does occur.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        // Not using map_err to keep the closure frame off the captured backtrace.
        match self {
            Ok(ok) => Ok(ok),
            Err(error) => Err(Error::WrappedContext {
                wrapped: Box::new(error),
                context: context().to_string(),
            }
            .bt()),
        }
    }
}
