use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::GroupDescriptor;

/// Stores properties of an instantiated group region.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    uid: usize,
    name: String,

    position: Pos2,
    size: Vec2,
    text_offset: Vec2,

    target_scale: f32,
}

impl Group {
    pub fn from_descriptor(descriptor: &GroupDescriptor, uid: usize) -> Self {
        Self {
            uid,
            name: descriptor.name.clone(),

            position: Pos2::new(descriptor.x, descriptor.y),
            size: Vec2::new(descriptor.width, descriptor.height),
            text_offset: Vec2::new(descriptor.text_x, descriptor.text_y),

            target_scale: 1.,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn text_offset(&self) -> Vec2 {
        self.text_offset
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Group center; navigation targets for groups anchor here.
    pub fn center(&self) -> Pos2 {
        self.position + self.size / 2.
    }

    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }

    pub fn set_target_scale(&mut self, target_scale: f32) {
        self.target_scale = target_scale;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn center_is_origin_plus_half_extent() {
        let group = Group::from_descriptor(
            &GroupDescriptor {
                x: -2400.,
                y: -1900.,
                width: 2200.,
                height: 1150.,
                text_x: 20.,
                text_y: 20.,
                name: "Feeds".to_owned(),
            },
            0,
        );
        assert_eq!(group.center(), Pos2::new(-1300., -1325.));
        assert_eq!(group.rect().size(), Vec2::new(2200., 1150.));
    }
}
