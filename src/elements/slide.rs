use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::{Skin, SlideDescriptor};

/// Stores properties of an instantiated slide.
///
/// Built once from a [`SlideDescriptor`] and a [`Skin`] row; lives for the
/// whole application run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Slide {
    uid: usize,
    gid: usize,
    device: usize,
    name: String,

    image_source: String,
    color: String,
    mask_offset: Vec2,

    /// Top left corner on the canvas, centered around the descriptor origin.
    position: Pos2,
    /// Descriptor origin; navigation targets anchor here, not at the runtime
    /// position.
    origin: Pos2,
    size: Vec2,
    scale: f32,
    demo_size: Vec2,

    url: Option<String>,

    target_scale: f32,
    loaded: bool,
}

impl Slide {
    pub fn from_descriptor(descriptor: &SlideDescriptor, skin: &Skin, uid: usize) -> Self {
        let origin = Pos2::new(descriptor.x, descriptor.y);
        let size = Vec2::new(skin.width, skin.height);
        Self {
            uid,
            gid: descriptor.gid,
            device: descriptor.device,
            name: descriptor.name.clone(),

            image_source: skin.image_source.clone(),
            color: skin.color.clone(),
            mask_offset: Vec2::new(skin.mask_horizontal_offset, skin.mask_vertical_offset),

            position: origin - size / 2.,
            origin,
            size,
            scale: skin.scale,
            demo_size: Vec2::new(skin.demo_width, skin.demo_height),

            url: descriptor.url.clone(),

            target_scale: 1.,
            loaded: false,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn gid(&self) -> usize {
        self.gid
    }

    pub fn device(&self) -> usize {
        self.device
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn mask_offset(&self) -> Vec2 {
        self.mask_offset
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Dimensions the fit-to-viewport scale is computed against: the usable
    /// demo area inside the device chrome.
    pub fn target_size(&self) -> Vec2 {
        self.demo_size
    }

    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }

    pub fn set_target_scale(&mut self, target_scale: f32) {
        self.target_scale = target_scale;
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Starts the slide's demo content. Idempotent.
    pub fn load_demo(&mut self) {
        self.loaded = true;
    }

    /// Stops and frees the slide's demo content. Idempotent.
    pub fn release_demo(&mut self) {
        self.loaded = false;
    }

    /// Canvas rectangle the slide covers at its display scale, half an
    /// extent around the runtime position on each side.
    pub fn scaled_extent(&self) -> Rect {
        let half = self.size / 2.;
        Rect::from_min_max(
            ((self.position - half).to_vec2() * self.scale).to_pos2(),
            ((self.position + half).to_vec2() * self.scale).to_pos2(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::GalleryConfig;

    fn sample() -> Slide {
        let config = GalleryConfig::builtin();
        let descriptor = &config.slides[0];
        let skin = config.skins.skin(descriptor.device).unwrap();
        Slide::from_descriptor(descriptor, &skin, 0)
    }

    #[test]
    fn centered_around_origin() {
        let slide = sample();
        // device 3 is 758x564
        assert_eq!(slide.origin(), Pos2::new(-800., -1500.));
        assert_eq!(slide.position(), Pos2::new(-800. - 379., -1500. - 282.));
        assert_eq!(slide.size(), Vec2::new(758., 564.));
    }

    #[test]
    fn demo_lifecycle_is_idempotent() {
        let mut slide = sample();
        assert!(!slide.loaded());
        slide.load_demo();
        slide.load_demo();
        assert!(slide.loaded());
        slide.release_demo();
        slide.release_demo();
        assert!(!slide.loaded());
    }

    #[test]
    fn scaled_extent_applies_display_scale() {
        let mut slide = sample();
        slide.scale = 0.5;
        let extent = slide.scaled_extent();
        let half = slide.size() / 2.;
        assert_eq!(
            extent.min,
            ((slide.position() - half).to_vec2() * 0.5).to_pos2()
        );
        assert_eq!(
            extent.max,
            ((slide.position() + half).to_vec2() * 0.5).to_pos2()
        );
    }
}
