use crate::{
    event::Event,
    stream::{EventStream, StreamError},
};

// -------------------------------------------------------------------------------------------------

/// A stream which is exhausted from the start.
#[derive(Clone, Debug, Default)]
pub struct EmptyEventStream;

impl EventStream for EmptyEventStream {
    fn has_next(&self) -> bool {
        false
    }

    fn next_event(&mut self) -> Result<Event, StreamError> {
        Err(StreamError::Exhausted)
    }
}

// -------------------------------------------------------------------------------------------------
