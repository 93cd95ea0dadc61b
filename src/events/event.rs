use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadSlideSelect {
    pub uid: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadGroupSelect {
    pub uid: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadDemoLoad {
    pub uid: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadDemoRelease {
    pub uid: usize,
}

/// Notification published by the engine when navigation or demo lifecycle
/// state changes. Load and release events fire only on actual transitions,
/// not on idempotent repeats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    SlideSelect(PayloadSlideSelect),
    GroupSelect(PayloadGroupSelect),
    DemoLoad(PayloadDemoLoad),
    DemoRelease(PayloadDemoRelease),
}
