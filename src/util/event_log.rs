use cosmwasm_std::{Event, Response};

use super::constants::SALMON_EVENT_NAME;
use super::event_attributes::EventAttributes;

/// Collects the events produced while a single contract invocation runs.  A fresh log is created
/// by each entrypoint and handed to the operations it calls, then folded into the response.
#[derive(Default)]
pub struct EventLog {
    events: Vec<Event>,
}
impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, attributes: EventAttributes) {
        self.events
            .push(Event::new(SALMON_EVENT_NAME).add_attributes(attributes));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Appends every recorded event to the response, in the order they were recorded.
    pub fn append_to<T>(self, response: Response<T>) -> Response<T> {
        response.add_events(self.events)
    }
}
