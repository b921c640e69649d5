use tracing::{debug, trace};

use crate::profile::Profile;

/// Full-screen photo viewer state for one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    open: Option<OpenGallery>,
}

#[derive(Debug, Clone, PartialEq)]
struct OpenGallery {
    name: String,
    images: Vec<String>,
    active: usize,
}

impl GalleryState {
    /// Show `profile`'s photos starting at the first one. A profile without
    /// images leaves the gallery as it was and returns `false`.
    pub fn open(&mut self, profile: &Profile) -> bool {
        if profile.images.is_empty() {
            trace!("Profile {} has no images, gallery not opened", profile.id);
            return false;
        }
        debug!(
            "Opening gallery for {} ({} photos)",
            profile.id,
            profile.images.len()
        );
        self.open = Some(OpenGallery {
            name: profile.name.clone(),
            images: profile.images.clone(),
            active: 0,
        });
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.open.as_ref().map(|g| g.name.as_str())
    }

    pub fn images(&self) -> &[String] {
        self.open.as_ref().map(|g| g.images.as_slice()).unwrap_or(&[])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.open.as_ref().map(|g| g.active)
    }

    /// One entry per image; exactly the active one is `true`.
    pub fn dot_states(&self) -> Vec<bool> {
        match &self.open {
            Some(g) => (0..g.images.len()).map(|i| i == g.active).collect(),
            None => Vec::new(),
        }
    }

    /// Update the active dot from the strip's horizontal scroll position.
    /// The nearest image boundary wins.
    pub fn on_scroll(&mut self, scroll_left: f64, viewport_width: f64) -> usize {
        let Some(g) = self.open.as_mut() else {
            return 0;
        };
        g.active = snap_index(scroll_left, viewport_width, g.images.len());
        g.active
    }

    /// Scroll offset that brings image `index` into view.
    pub fn scroll_target(index: usize, viewport_width: f64) -> f64 {
        viewport_width.max(0.0) * index as f64
    }
}

fn snap_index(scroll_left: f64, viewport_width: f64, count: usize) -> usize {
    if count == 0 || viewport_width.is_nan() || viewport_width <= 0.0 || !scroll_left.is_finite() {
        return 0;
    }
    let raw = (scroll_left / viewport_width).round().max(0.0) as usize;
    raw.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileId;

    fn profile_with_images(n: usize) -> Profile {
        Profile {
            id: ProfileId::new(0, 0),
            name: "Quinn".to_string(),
            age: 30,
            city: "Harlem".to_string(),
            title: "Nurse".to_string(),
            bio: String::new(),
            tags: vec!["Yoga".to_string()],
            images: (0..n).map(|i| format!("img-{}", i)).collect(),
        }
    }

    #[test]
    fn test_open_without_images_is_noop() {
        let mut gallery = GalleryState::default();
        assert!(!gallery.open(&profile_with_images(0)));
        assert!(!gallery.is_open());
        assert!(gallery.dot_states().is_empty());
    }

    #[test]
    fn test_open_starts_at_first_image() {
        let mut gallery = GalleryState::default();
        assert!(gallery.open(&profile_with_images(3)));
        assert_eq!(gallery.name(), Some("Quinn"));
        assert_eq!(gallery.images().len(), 3);
        assert_eq!(gallery.dot_states(), vec![true, false, false]);
    }

    #[test]
    fn test_scroll_marks_exactly_one_dot() {
        let mut gallery = GalleryState::default();
        gallery.open(&profile_with_images(4));

        assert_eq!(gallery.on_scroll(800.0, 400.0), 2);
        assert_eq!(gallery.dot_states(), vec![false, false, true, false]);

        // Past the halfway point snaps forward.
        assert_eq!(gallery.on_scroll(610.0, 400.0), 2);
        assert_eq!(gallery.on_scroll(590.0, 400.0), 1);
        assert_eq!(gallery.dot_states().iter().filter(|d| **d).count(), 1);
    }

    #[test]
    fn test_scroll_clamps_and_handles_zero_width() {
        let mut gallery = GalleryState::default();
        gallery.open(&profile_with_images(2));
        assert_eq!(gallery.on_scroll(5000.0, 400.0), 1);
        assert_eq!(gallery.on_scroll(-30.0, 400.0), 0);
        assert_eq!(gallery.on_scroll(300.0, 0.0), 0);
    }

    #[test]
    fn test_close_and_scroll_target() {
        let mut gallery = GalleryState::default();
        gallery.open(&profile_with_images(2));
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.active_index(), None);
        assert_eq!(GalleryState::scroll_target(3, 375.0), 1125.0);
    }
}
