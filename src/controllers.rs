//! Controllers for interacting with the chart from external code.
//!
//! A [`ChartController`] records requests which the UI thread drains in
//! FIFO order at the start of the next frame, so programmatic interaction
//! is serialized exactly like button clicks — there is never concurrent
//! handler execution. `subscribe` returns a receiver observing every state
//! mutation as a [`ChartEvent`].

use std::sync::mpsc::Receiver;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use crate::events::ChartEvent;
use crate::palette::FillColor;

/// One queued interaction request.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRequest {
    /// Run a filter pass with the chart's current cutoff and fill.
    ApplyFilter,
    /// Restore every bar to the baseline look.
    Reset,
    /// Select the fill used by subsequent filter passes.
    SetFill(FillColor),
    /// Set the cutoff used by subsequent filter passes.
    SetCutoff(f64),
}

/// Controller to drive the chart and subscribe to its events.
#[derive(Clone, Default)]
pub struct ChartController {
    pub(crate) inner: Arc<Mutex<ChartCtrlInner>>, // crate-visible for the UI
}

#[derive(Default)]
pub(crate) struct ChartCtrlInner {
    pub(crate) requests: Vec<ChartRequest>,
    pub(crate) listeners: Vec<Sender<ChartEvent>>,
}

impl ChartController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a filter pass (applied by the UI thread on the next frame).
    pub fn request_filter(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(ChartRequest::ApplyFilter);
    }

    /// Request an unconditional reset to the baseline look.
    pub fn request_reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(ChartRequest::Reset);
    }

    /// Select the fill used by subsequent filter passes.
    pub fn set_fill(&self, fill: FillColor) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(ChartRequest::SetFill(fill));
    }

    /// Set the numeric cutoff used by subsequent filter passes. Non-finite
    /// or negative values are rejected when the request is drained and
    /// surface as [`ChartEvent::CutoffRejected`].
    pub fn set_cutoff(&self, cutoff: f64) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(ChartRequest::SetCutoff(cutoff));
    }

    /// Subscribe to chart events. The returned receiver observes every
    /// state mutation until it is dropped.
    pub fn subscribe(&self) -> Receiver<ChartEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }

    /// Take all pending requests in FIFO order (UI thread).
    pub(crate) fn take_requests(&self) -> Vec<ChartRequest> {
        std::mem::take(&mut self.inner.lock().unwrap().requests)
    }

    /// Broadcast an event to subscribers, pruning closed ones (UI thread).
    pub(crate) fn publish(&self, event: &ChartEvent) {
        let mut inner = self.inner.lock().unwrap();
        crate::events::broadcast(&mut inner.listeners, event);
    }
}
