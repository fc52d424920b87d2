//! Handlers invoked on a successful dispatch.

use std::io;

/// A route target.
///
/// Any I/O error returned here is passed back to the caller of
/// `PathDispatcher::dispatch` unchanged.
pub trait DispatcherHandler<C>: Send + Sync {
    fn handle(&self, context: &mut C) -> io::Result<()>;
}

impl<C, F> DispatcherHandler<C> for F
where
    F: Fn(&mut C) -> io::Result<()> + Send + Sync,
{
    fn handle(&self, context: &mut C) -> io::Result<()> {
        self(context)
    }
}
