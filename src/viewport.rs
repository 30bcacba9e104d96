//! Viewport classes and the layout profile each one uses.
//!
//! The browser reports its window size; the class decides how deep the tree
//! goes, how big the nodes are and how tall the canvas must be at least.

use serde::{Deserialize, Serialize};

use crate::label::{PARENTS_ONLY, WITH_GRANDPARENTS};
use crate::layout::{LayoutProfile, LayoutResult};

/// Widest window still treated as a phone.
pub const MOBILE_MAX_WIDTH: f64 = 767.0;
/// Narrowest window treated as a large desktop.
pub const LARGE_DESKTOP_MIN_WIDTH: f64 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    MobilePortrait,
    MobileLandscape,
    #[default]
    Desktop,
    LargeDesktop,
}

impl ViewportClass {
    pub fn classify(width: f64, height: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            if width > height {
                ViewportClass::MobileLandscape
            } else {
                ViewportClass::MobilePortrait
            }
        } else if width >= LARGE_DESKTOP_MIN_WIDTH {
            ViewportClass::LargeDesktop
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "mobile_portrait" | "portrait" | "mobile" => ViewportClass::MobilePortrait,
            "mobile_landscape" | "landscape" => ViewportClass::MobileLandscape,
            "large_desktop" | "large" => ViewportClass::LargeDesktop,
            _ => ViewportClass::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::MobilePortrait => "mobile_portrait",
            ViewportClass::MobileLandscape => "mobile_landscape",
            ViewportClass::Desktop => "desktop",
            ViewportClass::LargeDesktop => "large_desktop",
        }
    }

    /// How far up relationship labels are classified for this class.
    pub fn max_ancestor_depth(&self) -> u8 {
        match self {
            ViewportClass::MobilePortrait | ViewportClass::MobileLandscape => PARENTS_ONLY,
            ViewportClass::Desktop | ViewportClass::LargeDesktop => WITH_GRANDPARENTS,
        }
    }

    /// Longest first name and surname shown on a node before truncation.
    pub fn caption_limits(&self) -> (usize, usize) {
        match self {
            ViewportClass::MobilePortrait | ViewportClass::MobileLandscape => (10, 8),
            ViewportClass::Desktop | ViewportClass::LargeDesktop => (12, 14),
        }
    }

    pub fn profile(&self, container_width: f64, container_height: f64) -> LayoutProfile {
        let base = LayoutProfile {
            container_width,
            container_height,
            ..LayoutProfile::default()
        };
        match self {
            ViewportClass::MobilePortrait => LayoutProfile {
                include_grandparents: false,
                node_width: 95.0,
                node_height: 55.0,
                grandparent_node_width: 95.0,
                grandparent_node_height: 55.0,
                horizontal_spacing: 105.0,
                vertical_spacing: 100.0,
                start_y: 20.0,
                bottom_padding: 40.0,
                ..base
            },
            ViewportClass::MobileLandscape => LayoutProfile {
                include_grandparents: false,
                node_width: 110.0,
                node_height: 65.0,
                grandparent_node_width: 110.0,
                grandparent_node_height: 65.0,
                horizontal_spacing: 130.0,
                vertical_spacing: 90.0,
                start_y: 30.0,
                bottom_padding: 40.0,
                fit_min_vertical_spacing: Some(70.0),
                ..base
            },
            ViewportClass::Desktop => base,
            ViewportClass::LargeDesktop => LayoutProfile {
                node_width: 150.0,
                node_height: 80.0,
                grandparent_node_width: 130.0,
                grandparent_node_height: 70.0,
                horizontal_spacing: 170.0,
                vertical_spacing: 130.0,
                ..base
            },
        }
    }

    /// Canvas height for a computed layout, applying this class's minimum.
    pub fn canvas_height(&self, result: &LayoutResult, container_height: f64) -> f64 {
        let required = result.required_height;
        match self {
            // extra room under the last row once the tree outgrows the minimum
            ViewportClass::MobilePortrait => {
                if required > 400.0 { required + 50.0 } else { 400.0 }
            }
            ViewportClass::MobileLandscape => required.max(container_height),
            ViewportClass::Desktop => required.max(500.0),
            ViewportClass::LargeDesktop => required.max(600.0),
        }
    }
}
