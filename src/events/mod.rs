mod event;
mod sink;

pub use event::{
    Event, PayloadDemoLoad, PayloadDemoRelease, PayloadGroupSelect, PayloadSlideSelect,
};
pub use sink::EventSink;
