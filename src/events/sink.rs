use super::Event;

/// Receiver of engine [`Event`]s. Implemented for crossbeam channel senders
/// and plain closures; implement it yourself for custom delivery.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // Disconnected receivers are ignored.
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

impl<F> EventSink for F
where
    F: Fn(Event),
{
    fn send(&self, event: Event) {
        self(event);
    }
}
