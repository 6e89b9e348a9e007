//! Pull based event streams which feed [`Event`]s to model trainers.

use std::fmt::Debug;

use thiserror::Error;

use crate::event::Event;

// -------------------------------------------------------------------------------------------------

pub mod collection;
pub mod empty;
pub mod file;
pub mod from_iter;

// -------------------------------------------------------------------------------------------------

/// Error raised by an [`EventStream`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// [`EventStream::next_event`] was called on a stream with no events left.
    /// Callers are expected to guard every `next_event` call with `has_next`.
    #[error("event stream is exhausted")]
    Exhausted,
}

// -------------------------------------------------------------------------------------------------

/// A single pass, forward only cursor over a sequence of [`Event`]s.
///
/// Events come out in exactly the source order, with no filtering,
/// transformation or reordering. The cursor only moves forward: there is
/// no reset, close or skip.
pub trait EventStream: Debug {
    /// Whether at least one more event remains. Has no side effects and is
    /// safe to call repeatedly.
    fn has_next(&self) -> bool;

    /// Return the next event and advance the cursor by one position.
    /// Fails with [`StreamError::Exhausted`] when no events remain.
    fn next_event(&mut self) -> Result<Event, StreamError>;
}

// -------------------------------------------------------------------------------------------------

/// Standard Iterator impl for [`EventStream`], ending the iteration on
/// exhaustion instead of failing.
impl<'a> Iterator for dyn EventStream + 'a {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().ok()
    }
}

// -------------------------------------------------------------------------------------------------
