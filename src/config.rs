use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Static description of a single slide: where it sits on the canvas, which
/// group and device skin it belongs to, and what content it points at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    pub x: f32,
    pub y: f32,
    /// Index of the owning group.
    pub gid: usize,
    /// Content url, if the slide hosts loadable content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Row index into the skin table.
    pub device: usize,
    pub name: String,
}

/// Static description of a labeled group region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Label offset from the group origin.
    pub text_x: f32,
    pub text_y: f32,
    pub name: String,
}

/// Parallel arrays of per-device chrome parameters, indexed by `device`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinTable {
    pub image_sources: Vec<String>,
    pub widths: Vec<f32>,
    pub heights: Vec<f32>,
    pub scales: Vec<f32>,
    pub demo_widths: Vec<f32>,
    pub demo_heights: Vec<f32>,
    pub mask_horizontal_offsets: Vec<f32>,
    pub mask_vertical_offsets: Vec<f32>,
    pub colors: Vec<String>,
}

/// One row of the skin table, resolved for a concrete device id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub image_source: String,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub demo_width: f32,
    pub demo_height: f32,
    pub mask_horizontal_offset: f32,
    pub mask_vertical_offset: f32,
    pub color: String,
}

impl SkinTable {
    pub fn len(&self) -> usize {
        self.image_sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_sources.is_empty()
    }

    /// Resolves the row for `device`, or `None` if the id is out of range.
    pub fn skin(&self, device: usize) -> Option<Skin> {
        if device >= self.len() {
            return None;
        }
        Some(Skin {
            image_source: self.image_sources[device].clone(),
            width: self.widths[device],
            height: self.heights[device],
            scale: self.scales[device],
            demo_width: self.demo_widths[device],
            demo_height: self.demo_heights[device],
            mask_horizontal_offset: self.mask_horizontal_offsets[device],
            mask_vertical_offset: self.mask_vertical_offsets[device],
            color: self.colors[device].clone(),
        })
    }

    fn coherent(&self) -> bool {
        let n = self.len();
        self.widths.len() == n
            && self.heights.len() == n
            && self.scales.len() == n
            && self.demo_widths.len() == n
            && self.demo_heights.len() == n
            && self.mask_horizontal_offsets.len() == n
            && self.mask_vertical_offsets.len() == n
            && self.colors.len() == n
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("skin tables disagree on length")]
    SkinTableMismatch,
    #[error("navigation order is not a permutation of 0..{expected}")]
    BadNavigationOrder { expected: usize },
    #[error("group navigation order is not a permutation of 0..{expected}")]
    BadGroupNavigationOrder { expected: usize },
}

/// Full static configuration of a gallery: descriptor tables, skin table and
/// the two visiting orders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub slides: Vec<SlideDescriptor>,
    pub groups: Vec<GroupDescriptor>,
    pub skins: SkinTable,
    /// Visiting order over slide uids. A permutation of `0..slides.len()`,
    /// distinct from creation order.
    pub navigation_order: Vec<usize>,
    /// Visiting order over group uids.
    pub group_navigation_order: Vec<usize>,
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

impl GalleryConfig {
    /// Checks table coherence and that both visiting orders are permutations
    /// of their respective descriptor lists.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.skins.coherent() {
            return Err(ConfigError::SkinTableMismatch);
        }
        if !is_permutation(&self.navigation_order, self.slides.len()) {
            return Err(ConfigError::BadNavigationOrder {
                expected: self.slides.len(),
            });
        }
        if !is_permutation(&self.group_navigation_order, self.groups.len()) {
            return Err(ConfigError::BadGroupNavigationOrder {
                expected: self.groups.len(),
            });
        }
        Ok(())
    }

    /// The built-in gallery: 14 demo slides in 6 groups across 8 device
    /// skins.
    pub fn builtin() -> Self {
        let slide = |x: f32, y: f32, gid: usize, url: &str, device: usize, name: &str| {
            SlideDescriptor {
                x,
                y,
                gid,
                url: (!url.is_empty()).then(|| url.to_owned()),
                device,
                name: name.to_owned(),
            }
        };
        let group = |x: f32, y: f32, width: f32, height: f32, text_x: f32, text_y: f32, name: &str| {
            GroupDescriptor {
                x,
                y,
                width,
                height,
                text_x,
                text_y,
                name: name.to_owned(),
            }
        };

        Self {
            slides: vec![
                slide(-800., -1500., 0, "demos/rssnews/rssnews.qml", 3, "Rss Reader"),
                slide(-1800., -1400., 0, "demos/gridrssnews/main.qml", 6, "Rss Reader"),
                slide(-1200., -1050., 0, "demos/tweetsearch/tweetsearch.qml", 2, "TweetSearch"),
                slide(1750., -1650., 1, "demos/heartmonitor/main.qml", 4, "Heart Monitor"),
                slide(1100., -1500., 1, "demos/canvasclock/canvasClock.qml", 4, "Canvas Clock"),
                slide(900., -300., 2, "demos/video/main.qml", 7, "Qt Video"),
                slide(-100., -100., 2, "demos/radio/radio.qml", 4, "Internet Radio"),
                slide(-1500., 0., 3, "demos/maroon/Maroon.qml", 1, "Maroon in\n  Trouble"),
                slide(-2200., 100., 3, "demos/samegame/samegame.qml", 1, "SameGame"),
                slide(2200., 1100., 5, "demos/particledemo/particledemo.qml", 6, "Particle Paint"),
                slide(1000., 1280., 5, "demos/shaders/main.qml", 5, "Shaders"),
                slide(-400., 1000., 4, "demos/calqlatr/Calqlatr.qml", 0, "Calqlatr"),
                slide(-1300., 1200., 4, "demos/photosurface/photosurface.qml", 5, "Photo Surface"),
                slide(-2100., 1450., 4, "demos/touchgallery/main.qml", 2, "Widget Gallery"),
            ],
            groups: vec![
                group(-2400., -1900., 2200., 1150., 20., 20., "Feeds"),
                group(600., -2000., 1700., 1000., 20., 20., "Canvas"),
                group(-600., -750., 2100., 1250., 20., 20., "Multimedia"),
                group(-2600., -450., 1600., 1100., 20., 20., "Games"),
                group(-2400., 700., 2400., 1200., 50., 50., "Applications"),
                group(500., 600., 2500., 1400., 50., 50., "Particles & Shaders"),
            ],
            skins: SkinTable {
                image_sources: [
                    "phone1.png",
                    "phone2.png",
                    "phone3.png",
                    "tablet1.png",
                    "medical_device.png",
                    "laptop1.png",
                    "laptop2.png",
                    "tv.png",
                ]
                .map(|s| format!("images/{s}"))
                .to_vec(),
                widths: vec![300., 360., 366., 758., 600., 918., 923., 800.],
                heights: vec![605., 706., 720., 564., 488., 600., 600., 638.],
                scales: vec![1.0, 0.8, 0.6, 0.9, 1.0, 0.9, 1.0, 1.0],
                demo_widths: vec![269., 322., 322., 642., 482., 688., 691., 726.],
                demo_heights: vec![404., 482., 482., 402., 322., 431., 432., 456.],
                mask_horizontal_offsets: vec![1.; 8],
                mask_vertical_offsets: vec![20., 32., 15., 24., 45., 59., 57., 56.],
                colors: vec!["#4353c3".to_owned(); 8],
            },
            navigation_order: vec![1, 2, 0, 4, 3, 5, 6, 7, 8, 13, 12, 11, 10, 9],
            group_navigation_order: vec![0, 1, 2, 3, 4, 5],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        let config = GalleryConfig::builtin();
        config.validate().unwrap();
        assert_eq!(config.slides.len(), 14);
        assert_eq!(config.groups.len(), 6);
        assert_eq!(config.skins.len(), 8);
    }

    #[test]
    fn skin_lookup_out_of_range() {
        let config = GalleryConfig::builtin();
        assert!(config.skins.skin(7).is_some());
        assert!(config.skins.skin(8).is_none());
    }

    #[test]
    fn mismatched_skin_tables_rejected() {
        let mut config = GalleryConfig::builtin();
        config.skins.widths.pop();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SkinTableMismatch)
        ));
    }

    #[test]
    fn navigation_order_must_be_permutation() {
        let mut config = GalleryConfig::builtin();
        config.navigation_order[0] = 2; // duplicate
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadNavigationOrder { expected: 14 })
        ));

        let mut config = GalleryConfig::builtin();
        config.navigation_order[0] = 14; // out of range
        assert!(config.validate().is_err());

        let mut config = GalleryConfig::builtin();
        config.group_navigation_order.pop(); // wrong length
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadGroupNavigationOrder { expected: 6 })
        ));
    }
}
