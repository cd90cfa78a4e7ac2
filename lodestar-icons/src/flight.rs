//! De-duplication of concurrent resolutions for the same cache key.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};

use crate::error::IconError;
use crate::pixmap::Pixmap;

type Outcome = Result<Option<Pixmap>, IconError>;

/// One pending resolution. The owner publishes its outcome; joiners block
/// on the condvar until it lands.
pub(crate) struct Flight {
    slot: Mutex<Option<Outcome>>,
    ready: Condvar,
}

impl Flight {
    fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            ready: Condvar::new(),
        }
    }

    fn publish(&self, outcome: Outcome) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(outcome);
        self.ready.notify_all();
    }

    pub(crate) fn wait(&self) -> Outcome {
        let mut slot = self.slot.lock().unwrap();
        while slot.is_none() {
            slot = self.ready.wait(slot).unwrap();
        }
        slot.as_ref().unwrap().clone()
    }
}

/// Keyed table of pending resolutions. At most one resolution runs per key;
/// everyone else joins the owner's flight and shares its outcome.
pub(crate) struct FlightTable {
    pending: Mutex<HashMap<String, Arc<Flight>>>,
}

impl FlightTable {
    pub(crate) fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Join the flight for `key`. The boolean is true for the caller that
    /// owns the resolution and must later call [`FlightTable::finish`].
    pub(crate) fn join(&self, key: &str) -> (Arc<Flight>, bool) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(existing) = pending.get(key) {
            return (Arc::clone(existing), false);
        }
        let flight = Arc::new(Flight::new());
        pending.insert(key.to_string(), Arc::clone(&flight));
        (flight, true)
    }

    /// Publish the owner's outcome and retire the flight. Failed or empty
    /// resolutions are not cached, so retiring keeps the key re-attemptable
    /// by later calls.
    pub(crate) fn finish(&self, key: &str, flight: &Flight, outcome: Outcome) {
        flight.publish(outcome);
        self.pending.lock().unwrap().remove(key);
    }
}
