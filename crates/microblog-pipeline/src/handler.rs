use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;

/// Consumer side of a [`Pipeline`](crate::Pipeline).
///
/// The handler is moved into the worker task and is never shared, so it may
/// keep mutable state (an open file, counters) without locking.
#[async_trait]
pub trait Handler<T: Send + 'static>: Send + 'static {
    type Error: fmt::Display + Send;

    /// Process one item. Errors are logged by the worker.
    async fn handle(&mut self, item: T) -> Result<(), Self::Error>;

    /// Called once after the queue has been drained and closed.
    async fn finish(&mut self) {}
}

/// Adapts a synchronous closure into a [`Handler`].
pub struct FnHandler<T, F, E> {
    f: F,
    _item: PhantomData<fn(T) -> E>,
}

impl<T, F, E> FnHandler<T, F, E> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T, F, E> Handler<T> for FnHandler<T, F, E>
where
    T: Send + 'static,
    F: FnMut(T) -> Result<(), E> + Send + 'static,
    E: fmt::Display + Send + 'static,
{
    type Error = E;

    async fn handle(&mut self, item: T) -> Result<(), E> {
        (self.f)(item)
    }
}
