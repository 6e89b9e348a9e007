//! Pull based, single pass streams of training events.
//!
//! An [`EventStream`] hands out [`Event`]s one at a time, in source order,
//! through a minimal two method interface: [`EventStream::has_next`] and
//! [`EventStream::next_event`]. Trainers consume streams without caring
//! where the events come from, so in-memory collections, plain iterators
//! and files can be substituted interchangeably.

pub mod event;
pub use event::{Event, ParseEventError};

pub mod stream;
pub use stream::collection::CollectionEventStream;
pub use stream::empty::EmptyEventStream;
pub use stream::file::FileEventStream;
pub use stream::from_iter::IterEventStream;
pub use stream::{EventStream, StreamError};
