use std::fmt::Debug;

use crate::{
    event::Event,
    stream::{EventStream, StreamError},
};

// -------------------------------------------------------------------------------------------------

/// Wraps a plain iterator of [`Event`]s into an [`EventStream`].
///
/// One event of lookahead is buffered at all times so that `has_next` can
/// answer without pulling from the underlying iterator.
#[derive(Clone, Debug)]
pub struct IterEventStream<Iter>
where
    Iter: Iterator<Item = Event>,
{
    next: Option<Event>,
    iter: Iter,
}

impl<Iter> IterEventStream<Iter>
where
    Iter: Iterator<Item = Event>,
{
    pub fn new<IntoIter>(events: IntoIter) -> Self
    where
        IntoIter: IntoIterator<Item = Event, IntoIter = Iter>,
    {
        let mut iter = events.into_iter();
        let next = iter.next();
        Self { next, iter }
    }
}

impl<Iter> EventStream for IterEventStream<Iter>
where
    Iter: Iterator<Item = Event> + Debug,
{
    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn next_event(&mut self) -> Result<Event, StreamError> {
        let event = self.next.take().ok_or(StreamError::Exhausted)?;
        self.next = self.iter.next();
        Ok(event)
    }
}

// -------------------------------------------------------------------------------------------------
