//! Mock ports for integration tests.
//!
//! Scripts the sensor, injects store failures and records everything the
//! controller emits or sleeps, so tests can assert on full histories
//! without a serial device or a network.

use std::collections::VecDeque;
use std::time::Duration;

use parkbridge::adapters::memory_store::MemoryStore;
use parkbridge::app::events::AppEvent;
use parkbridge::app::ports::{
    Clock, EventSink, EventSource, RemoteStore, SerialError, StoreError, StoreKey,
};

// ── ScriptedSource ────────────────────────────────────────────

/// Replays a fixed script of reads; an exhausted script reads as idle.
pub struct ScriptedSource {
    script: VecDeque<Result<Option<String>, SerialError>>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn lines(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|l| Ok(Some((*l).to_owned()))).collect(),
        }
    }

    pub fn then_line(mut self, line: &str) -> Self {
        self.script.push_back(Ok(Some(line.to_owned())));
        self
    }

    pub fn then_error(mut self, error: SerialError) -> Self {
        self.script.push_back(Err(error));
        self
    }

    pub fn then_timeout(mut self) -> Self {
        self.script.push_back(Ok(None));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventSource for ScriptedSource {
    fn read_line(&mut self) -> Result<Option<String>, SerialError> {
        self.script.pop_front().unwrap_or(Ok(None))
    }
}

// ── FlakyStore ────────────────────────────────────────────────

/// [`MemoryStore`] that fails selected calls with a transport error.
///
/// Calls are numbered from 1 across `get` and `set`.
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_calls: Vec<usize>,
    calls: usize,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_calls: Vec::new(),
            calls: 0,
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_calls.push(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    fn tick(&mut self) -> Result<(), StoreError> {
        self.calls += 1;
        if self.fail_calls.contains(&self.calls) {
            Err(StoreError::Transport("connection reset".into()))
        } else {
            Ok(())
        }
    }
}

impl RemoteStore for FlakyStore {
    fn get(&mut self, key: StoreKey) -> Result<u64, StoreError> {
        self.tick()?;
        self.inner.get(key)
    }

    fn set(&mut self, key: StoreKey, value: u64) -> Result<(), StoreError> {
        self.tick()?;
        self.inner.set(key, value)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── RecordingClock ────────────────────────────────────────────

/// Clock that records requested pauses instead of sleeping.
#[derive(Default)]
pub struct RecordingClock {
    pub sleeps: Vec<Duration>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for RecordingClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
