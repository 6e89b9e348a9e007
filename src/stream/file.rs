use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    vec,
};

use anyhow::Context;
use log::{debug, warn};

use crate::{
    event::Event,
    stream::{EventStream, StreamError},
};

// -------------------------------------------------------------------------------------------------

/// Streams events from a plain text file with one event per line: the first
/// whitespace separated token is the outcome, the remaining tokens are the
/// context predicates.
///
/// The whole file is read and validated when the stream is opened, so
/// iteration afterwards can only fail with exhaustion. Blank lines are
/// skipped with a warning.
#[derive(Debug)]
pub struct FileEventStream {
    events: vec::IntoIter<Event>,
}

impl FileEventStream {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open event file '{}'", path.display()))?;

        let mut events = Vec::new();
        let mut blank_lines = 0;
        for (line_index, line) in BufReader::new(file).lines().enumerate() {
            let line = line
                .with_context(|| format!("failed to read event file '{}'", path.display()))?;
            if line.trim().is_empty() {
                blank_lines += 1;
                continue;
            }
            let event: Event = line.parse().with_context(|| {
                format!("invalid event in '{}', line {}", path.display(), line_index + 1)
            })?;
            events.push(event);
        }

        if blank_lines > 0 {
            warn!(
                "skipped {} blank line(s) in event file '{}'",
                blank_lines,
                path.display()
            );
        }
        debug!("read {} event(s) from '{}'", events.len(), path.display());

        Ok(Self {
            events: events.into_iter(),
        })
    }
}

impl EventStream for FileEventStream {
    fn has_next(&self) -> bool {
        !self.events.as_slice().is_empty()
    }

    fn next_event(&mut self) -> Result<Event, StreamError> {
        self.events.next().ok_or(StreamError::Exhausted)
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::{env, fs, path::PathBuf, process};

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("evstreams-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_events() -> anyhow::Result<()> {
        let path = write_temp_file(
            "read-events.txt",
            "yes w=rain w-1=cloudy\n\nno w=sun\n   \nyes w=storm\n",
        );
        let mut stream = FileEventStream::open(&path)?;
        fs::remove_file(&path)?;

        let mut streamed = Vec::new();
        while stream.has_next() {
            streamed.push(stream.next_event()?);
        }
        assert_eq!(
            streamed,
            vec![
                Event::new("yes", ["w=rain", "w-1=cloudy"]),
                Event::new("no", ["w=sun"]),
                Event::new("yes", ["w=storm"]),
            ]
        );
        assert_eq!(stream.next_event(), Err(StreamError::Exhausted));
        Ok(())
    }

    #[test]
    fn empty_file() -> anyhow::Result<()> {
        let path = write_temp_file("empty-file.txt", "");
        let mut stream = FileEventStream::open(&path)?;
        fs::remove_file(&path)?;

        assert!(!stream.has_next());
        assert_eq!(stream.next_event(), Err(StreamError::Exhausted));
        Ok(())
    }

    #[test]
    fn invalid_line() {
        let path = write_temp_file("invalid-line.txt", "yes w=rain\noutcome-without-context\n");
        let result = FileEventStream::open(&path);
        fs::remove_file(&path).unwrap();

        let error = result.err().unwrap();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn missing_file() {
        let path = env::temp_dir().join("evstreams-does-not-exist.txt");
        assert!(FileEventStream::open(path).is_err());
    }
}
