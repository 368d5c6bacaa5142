//! In-memory fakes for the crawler's seams, shared by the unit tests.

use crate::error::{FetchError, SinkError};
use crate::fetch::Fetch;
use crate::models::NewsRow;
use crate::outputs::TabularSink;
use crate::scrapers::Pacer;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Scripted web: each URL answers with its queued responses in order, and
/// repeats the last one once the queue is down to a single entry. Unknown
/// URLs answer 404.
#[derive(Debug, Default)]
pub struct FakeWeb {
    responses: RefCell<HashMap<String, VecDeque<Result<String, u16>>>>,
    log: RefCell<Vec<String>>,
}

impl FakeWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: &str, body: &str) -> Self {
        self.push(url, Ok(body.to_string()))
    }

    pub fn status(self, url: &str, status: u16) -> Self {
        self.push(url, Err(status))
    }

    fn push(self, url: &str, response: Result<String, u16>) -> Self {
        self.responses
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Number of requests made for `url`.
    pub fn hits(&self, url: &str) -> usize {
        self.log.borrow().iter().filter(|u| u.as_str() == url).count()
    }

    /// Every requested URL, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Fetch for FakeWeb {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.log.borrow_mut().push(url.to_string());
        let mut responses = self.responses.borrow_mut();
        let response = match responses.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        match response.unwrap_or(Err(404)) {
            Ok(body) => Ok(body),
            Err(status) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
        }
    }
}

/// Pacer that records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pauses: RefCell<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }
}

impl Pacer for &RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses.borrow_mut().push(delay);
    }
}

/// Sink that keeps rows in memory, or fails every write when `broken`.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub writes: usize,
    pub rows: Vec<NewsRow>,
    pub broken: bool,
}

impl TabularSink for MemorySink {
    fn write_rows(&mut self, rows: &[NewsRow]) -> Result<(), SinkError> {
        self.writes += 1;
        if self.broken {
            return Err(SinkError::Io {
                path: PathBuf::from("memory"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}
