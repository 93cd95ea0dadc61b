use egui::{Pos2, Rect, Vec2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    bounds::{scale_to_box, Bounds},
    config::{ConfigError, GalleryConfig},
    cursor::Cursor,
    elements::{Group, Slide},
};

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadDemoLoad, PayloadDemoRelease, PayloadGroupSelect, PayloadSlideSelect,
};

/// Zoom level a [`NavTarget`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavState {
    /// Group-level focus.
    Group = 1,
    /// Slide-level focus.
    Slide = 2,
}

/// On-screen focus target for the caller's view transition: where to center
/// and how far to zoom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavTarget {
    pub position: Pos2,
    pub target_scale: f32,
    pub nav_state: NavState,
}

/// Navigation and layout state of a gallery canvas.
///
/// Owns the slide and group registries, the two cyclic cursors over the
/// visiting orders, and the target-scale bookkeeping. Construct it once at
/// startup from a [`GalleryConfig`] and let the UI controller query it; all
/// operations are synchronous index arithmetic plus O(N) scans.
///
/// Navigation queries return `None` when nothing matches; callers are
/// expected to null-check and stay put. With the `events` feature enabled,
/// selection and demo lifecycle transitions are also published to an
/// optional [`EventSink`].
pub struct GalleryEngine {
    slides: Vec<Slide>,
    groups: Vec<Group>,

    navigation_order: Vec<usize>,
    group_navigation_order: Vec<usize>,

    slide_cursor: Cursor,
    group_cursor: Cursor,

    #[cfg(feature = "events")]
    events_sink: Option<Box<dyn EventSink>>,
}

impl GalleryEngine {
    /// Validates `config` and instantiates both registries.
    ///
    /// A slide whose device id has no skin-table row is skipped with a
    /// warning; its uid is not reserved.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the skin tables disagree on length or
    /// a visiting order is not a permutation of its descriptor list.
    pub fn new(config: GalleryConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut slides = Vec::with_capacity(config.slides.len());
        for descriptor in &config.slides {
            let Some(skin) = config.skins.skin(descriptor.device) else {
                warn!(
                    "skipping slide {:?}: no skin for device {}",
                    descriptor.name, descriptor.device
                );
                continue;
            };
            slides.push(Slide::from_descriptor(descriptor, &skin, slides.len()));
        }

        let mut groups = Vec::with_capacity(config.groups.len());
        for descriptor in &config.groups {
            groups.push(Group::from_descriptor(descriptor, groups.len()));
        }

        debug!(
            "gallery initialized: {} slides, {} groups",
            slides.len(),
            groups.len()
        );

        Ok(Self {
            slides,
            groups,

            navigation_order: config.navigation_order,
            group_navigation_order: config.group_navigation_order,

            slide_cursor: Cursor::new(),
            group_cursor: Cursor::new(),

            #[cfg(feature = "events")]
            events_sink: None,
        })
    }

    #[cfg(feature = "events")]
    /// Supply a sink that will receive selection and lifecycle events.
    /// Works with `crossbeam::channel::Sender<Event>`, closures `Fn(Event)`,
    /// or custom implementations.
    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.events_sink = Some(sink);
        self
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Slide the cursor currently points at, if any.
    pub fn selected_slide(&self) -> Option<&Slide> {
        let pos = self.slide_cursor.current(self.slides.len())?;
        let uid = *self.navigation_order.get(pos)?;
        self.slides.get(uid)
    }

    /// Starts the currently selected demo. No-op while nothing is selected.
    pub fn load_current_demo(&mut self) {
        let Some(pos) = self.slide_cursor.current(self.slides.len()) else {
            return;
        };
        let Some(&uid) = self.navigation_order.get(pos) else {
            return;
        };
        if let Some(slide) = self.slides.get_mut(uid) {
            let was_loaded = slide.loaded();
            slide.load_demo();
            if !was_loaded {
                #[cfg(feature = "events")]
                self.publish_event(Event::DemoLoad(PayloadDemoLoad { uid }));
            }
        }
    }

    /// Stops every slide's demo content, selected or not.
    pub fn release_demos(&mut self) {
        let mut released = Vec::new();
        for slide in &mut self.slides {
            if slide.loaded() {
                released.push(slide.uid());
            }
            slide.release_demo();
        }
        #[cfg(feature = "events")]
        for uid in released {
            self.publish_event(Event::DemoRelease(PayloadDemoRelease { uid }));
        }
        #[cfg(not(feature = "events"))]
        let _ = released;
    }

    /// Re-resolves the current slide selection without moving the cursor.
    pub fn current_slide(&mut self) -> Option<NavTarget> {
        let pos = self.slide_cursor.current(self.slides.len())?;
        let uid = *self.navigation_order.get(pos)?;
        self.select_target(uid)
    }

    /// Advances the slide cursor, wrapping past the end, and resolves the
    /// new selection.
    pub fn next_slide(&mut self) -> Option<NavTarget> {
        let pos = self.slide_cursor.next(self.slides.len())?;
        let uid = *self.navigation_order.get(pos)?;
        self.select_target(uid)
    }

    /// Steps the slide cursor back, wrapping below zero, and resolves the
    /// new selection.
    pub fn previous_slide(&mut self) -> Option<NavTarget> {
        let pos = self.slide_cursor.prev(self.slides.len())?;
        let uid = *self.navigation_order.get(pos)?;
        self.select_target(uid)
    }

    /// Selects the slide with the given uid and releases every other
    /// slide's demo content, keeping at most one demo active.
    ///
    /// The release sweep covers the whole registry and happens even when no
    /// slide matches. On a match the slide cursor is re-anchored to the
    /// uid's position in the visiting order and the group cursor follows the
    /// slide's group. The returned target anchors at the descriptor origin,
    /// not the slide's runtime position.
    pub fn select_target(&mut self, uid: usize) -> Option<NavTarget> {
        let mut found = None;
        let mut released = Vec::new();
        for (idx, slide) in self.slides.iter_mut().enumerate() {
            if slide.uid() == uid {
                found = Some(idx);
            } else {
                if slide.loaded() {
                    released.push(slide.uid());
                }
                slide.release_demo();
            }
        }
        #[cfg(feature = "events")]
        for released_uid in released {
            self.publish_event(Event::DemoRelease(PayloadDemoRelease { uid: released_uid }));
        }
        #[cfg(not(feature = "events"))]
        let _ = released;

        let idx = found?;
        match self.navigation_order.iter().position(|&u| u == idx) {
            Some(pos) => self.slide_cursor.set(pos),
            None => self.slide_cursor.clear(),
        }
        let slide = &self.slides[idx];
        self.group_cursor.set(slide.gid());

        #[cfg(feature = "events")]
        self.publish_event(Event::SlideSelect(PayloadSlideSelect { uid }));

        Some(NavTarget {
            position: self.slides[idx].origin(),
            target_scale: self.slides[idx].target_scale(),
            nav_state: NavState::Slide,
        })
    }

    /// Re-resolves the current group selection without moving the cursor.
    pub fn current_group(&mut self) -> Option<NavTarget> {
        let pos = self.group_cursor.current(self.groups.len())?;
        let uid = *self.group_navigation_order.get(pos)?;
        self.select_group(uid)
    }

    /// Advances the group cursor, wrapping past the end.
    pub fn next_group(&mut self) -> Option<NavTarget> {
        let pos = self.group_cursor.next(self.groups.len())?;
        let uid = *self.group_navigation_order.get(pos)?;
        self.select_group(uid)
    }

    /// Steps the group cursor back, wrapping below zero.
    pub fn previous_group(&mut self) -> Option<NavTarget> {
        let pos = self.group_cursor.prev(self.groups.len())?;
        let uid = *self.group_navigation_order.get(pos)?;
        self.select_group(uid)
    }

    /// Selects the first group matching the given uid. Unlike
    /// [`Self::select_target`] there is no release side effect; groups own
    /// no loadable content.
    pub fn select_group(&mut self, uid: usize) -> Option<NavTarget> {
        let idx = self.groups.iter().position(|g| g.uid() == uid)?;
        match self.group_navigation_order.iter().position(|&u| u == idx) {
            Some(pos) => self.group_cursor.set(pos),
            None => self.group_cursor.clear(),
        }

        #[cfg(feature = "events")]
        self.publish_event(Event::GroupSelect(PayloadGroupSelect { uid }));

        let group = &self.groups[idx];
        Some(NavTarget {
            position: group.center(),
            target_scale: group.target_scale(),
            nav_state: NavState::Group,
        })
    }

    /// Axis-aligned box covering every slide's scaled extent. [`Rect::ZERO`]
    /// while the registry is empty.
    pub fn bounding_box(&self) -> Rect {
        let mut bounds = Bounds::default();
        for slide in &self.slides {
            bounds.expand(slide.scaled_extent());
        }
        bounds.rect()
    }

    /// Recomputes every slide's fit-to-viewport scale against its demo area.
    /// Call whenever the output size changes.
    pub fn update_slide_scales(&mut self, dest: Vec2) {
        debug!("updating slide scales for viewport {dest:?}");
        for slide in &mut self.slides {
            slide.set_target_scale(scale_to_box(dest, slide.target_size()));
        }
    }

    /// Recomputes every group's fit-to-viewport scale against its static
    /// extent. Call whenever the output size changes.
    pub fn update_group_scales(&mut self, dest: Vec2) {
        debug!("updating group scales for viewport {dest:?}");
        for group in &mut self.groups {
            group.set_target_scale(scale_to_box(dest, group.size()));
        }
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = &self.events_sink {
            sink.send(event);
        }
    }
}
