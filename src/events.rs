//! Chart events delivered to controller subscribers.
//!
//! Every state mutation emits exactly one event, so external code can audit
//! the interaction flow without polling the UI. Events are fanned out over
//! plain mpsc channels; subscribers whose receiver was dropped are pruned on
//! the next send.

use std::sync::mpsc::Sender;

use crate::palette::FillColor;

/// One state mutation or load notification.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// The dataset finished loading; `rows` bars will be rendered.
    DatasetLoaded { rows: usize },
    /// A filter pass ran: `collapsed` bars were retargeted to zero width,
    /// `restored` bars to their natural width in `fill`.
    FilterApplied {
        cutoff: f64,
        fill: FillColor,
        collapsed: usize,
        restored: usize,
    },
    /// All bars were retargeted to the baseline fill and natural width.
    ResetApplied,
    /// The active fill changed. No repaint until the next filter pass.
    FillChanged(FillColor),
    /// The cutoff changed. No repaint until the next filter pass.
    CutoffChanged(f64),
    /// A cutoff commit was rejected; the previous value stays active.
    CutoffRejected { input: String },
}

/// Fan a single event out to all listeners, dropping closed ones.
pub(crate) fn broadcast(listeners: &mut Vec<Sender<ChartEvent>>, event: &ChartEvent) {
    listeners.retain(|tx| tx.send(event.clone()).is_ok());
}
