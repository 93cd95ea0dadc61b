mod group;
mod slide;

pub use group::Group;
pub use slide::Slide;
