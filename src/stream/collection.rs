use std::slice;

use crate::{
    event::Event,
    stream::{EventStream, StreamError},
};

// -------------------------------------------------------------------------------------------------

/// Streams the contents of a caller owned collection of [`Event`]s.
///
/// The collection stays with the caller; the stream only borrows iteration
/// rights over it for its lifetime and yields clones of the events in the
/// collection's order.
#[derive(Clone, Debug)]
pub struct CollectionEventStream<'a> {
    events: slice::Iter<'a, Event>,
}

impl<'a> CollectionEventStream<'a> {
    pub fn new(events: &'a [Event]) -> Self {
        Self {
            events: events.iter(),
        }
    }
}

impl EventStream for CollectionEventStream<'_> {
    fn has_next(&self) -> bool {
        !self.events.as_slice().is_empty()
    }

    fn next_event(&mut self) -> Result<Event, StreamError> {
        self.events.next().cloned().ok_or(StreamError::Exhausted)
    }
}

// -------------------------------------------------------------------------------------------------
