mod bounds;
mod config;
mod cursor;
mod elements;
mod engine;

#[cfg(feature = "events")]
pub mod events;

pub use self::bounds::{scale_to_box, Bounds};
pub use self::config::{
    ConfigError, GalleryConfig, GroupDescriptor, Skin, SkinTable, SlideDescriptor,
};
pub use self::cursor::Cursor;
pub use self::elements::{Group, Slide};
pub use self::engine::{GalleryEngine, NavState, NavTarget};
