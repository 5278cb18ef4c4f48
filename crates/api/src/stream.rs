//! Result emission: the caller-visible asynchronous sequence
//!
//! A [`ResultStream`] either yields every item in order and then
//! completes, or yields exactly one terminal error and nothing after it.
//! Completion and error are mutually exclusive terminal events.
//!
//! The underlying outcome is computed before the stream is constructed,
//! so dropping the stream early never reverts side effects that already
//! occurred.

use futures::stream::Stream;
use reef_core::{Error, Result};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Ordered asynchronous result sequence with a single error channel
#[derive(Debug)]
pub struct ResultStream<T> {
    state: State<T>,
}

#[derive(Debug)]
enum State<T> {
    Items(VecDeque<T>),
    Failed(Error),
    Done,
}

impl<T> ResultStream<T> {
    /// Build a stream from a whole-call outcome.
    pub(crate) fn from_outcome(outcome: Result<Vec<T>>) -> Self {
        let state = match outcome {
            Ok(items) => State::Items(items.into()),
            Err(err) => State::Failed(err),
        };
        Self { state }
    }

    /// Materialize the whole sequence, or the terminal error.
    pub async fn try_collect(self) -> Result<Vec<T>> {
        match self.state {
            State::Items(items) => Ok(items.into_iter().collect()),
            State::Failed(err) => Err(err),
            State::Done => Ok(Vec::new()),
        }
    }
}

impl<T: Unpin> Stream for ResultStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match std::mem::replace(&mut this.state, State::Done) {
            State::Items(mut items) => match items.pop_front() {
                Some(item) => {
                    this.state = State::Items(items);
                    Poll::Ready(Some(Ok(item)))
                }
                None => Poll::Ready(None),
            },
            State::Failed(err) => Poll::Ready(Some(Err(err))),
            State::Done => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Items(items) => (items.len(), Some(items.len())),
            State::Failed(_) => (1, Some(1)),
            State::Done => (0, Some(0)),
        }
    }
}
