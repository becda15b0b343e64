//! Swipe recognition.
//!
//! A press/release pair of the left mouse button is the terminal's
//! touchstart/touchend. Cell coordinates are scaled to device-independent
//! pixels so the threshold means the same thing on any terminal font.

use crate::core::config::SwipeSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Finger moved left: advance.
    SwipeLeft,
    /// Finger moved right: go back.
    SwipeRight,
    /// Not a swipe; treat as a click at the release cell.
    Tap(u16, u16),
}

#[derive(Debug)]
pub struct SwipeTracker {
    settings: SwipeSettings,
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(settings: SwipeSettings) -> Self {
        Self {
            settings,
            start: None,
        }
    }

    pub fn press(&mut self, col: u16, row: u16) {
        self.start = Some((col, row));
    }

    /// Finish a gesture. A release without a press is a tap.
    pub fn release(&mut self, col: u16, row: u16) -> Gesture {
        let Some((start_col, start_row)) = self.start.take() else {
            return Gesture::Tap(col, row);
        };
        let dx = (f64::from(col) - f64::from(start_col)) * self.settings.cell_width_px;
        let dy = (f64::from(row) - f64::from(start_row)) * self.settings.cell_height_px;
        classify(dx, dy, self.settings.threshold_px).unwrap_or(Gesture::Tap(col, row))
    }
}

/// Horizontal swipe if `|dx|` beats both `|dy|` and the threshold.
pub fn classify(dx: f64, dy: f64, threshold: f64) -> Option<Gesture> {
    let (distance_x, distance_y) = (dx.abs(), dy.abs());
    if distance_x > distance_y && distance_x > threshold {
        Some(if dx < 0.0 {
            Gesture::SwipeLeft
        } else {
            Gesture::SwipeRight
        })
    } else {
        None
    }
}
