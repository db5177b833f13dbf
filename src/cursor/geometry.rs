use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Ratio between pad motion and screen motion.
pub const AREA_SCALE: f32 = 0.4;
/// Cursor rows at or above this offset past the top edge hide the overlay.
pub const MIN_CURSOR_Y: i32 = -150;
/// Minimum travel, in pixels, before a tracker touch counts as a drag.
pub const CLICK_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    pub fn half(self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

/// Display size in pixels, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            bail!(
                "screen bounds must be positive, got {}x{}",
                self.width,
                self.height
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Zone {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x.saturating_add(self.width)
            && point.y < self.y.saturating_add(self.height)
    }

    /// Converts a screen point into coordinates relative to the zone's top-left.
    pub fn local(&self, point: Point) -> Point {
        Point::new(point.x.saturating_sub(self.x), point.y.saturating_sub(self.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Pixel sizes of the overlay elements for the current display density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementMetrics {
    pub tracker_size: i32,
    pub cursor_size: i32,
    pub pad_width: i32,
    pub pad_height: i32,
}

impl Default for ElementMetrics {
    fn default() -> Self {
        Self {
            tracker_size: 120,
            cursor_size: 40,
            pad_width: 240,
            pad_height: 360,
        }
    }
}

impl ElementMetrics {
    pub fn tracker(&self) -> Size {
        Size::square(self.tracker_size)
    }

    pub fn cursor(&self) -> Size {
        Size::square(self.cursor_size)
    }

    pub fn pad(&self) -> Size {
        Size::new(self.pad_width, self.pad_height)
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("tracker_size", self.tracker_size),
            ("cursor_size", self.cursor_size),
            ("pad_width", self.pad_width),
            ("pad_height", self.pad_height),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                bail!("element metric {name} must be positive, got {value}");
            }
        }
        Ok(())
    }
}

/// Result of mapping a tracker placement onto the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMapping {
    Place { tracker: Point, cursor: Point },
    /// The cursor would land too far above the screen; the gesture is dropped.
    Hide,
}

/// Left pad at the bottom-left corner, right pad at the bottom-right corner.
pub fn pad_zones(screen: ScreenBounds, metrics: &ElementMetrics) -> (Zone, Zone) {
    let pad = metrics.pad();
    let y = screen.height - pad.height;
    (
        Zone::at(Point::new(0, y), pad),
        Zone::at(Point::new(screen.width - pad.width, y), pad),
    )
}

pub fn map_pad_drag_to_cursor(
    raw: Point,
    side: Side,
    screen: ScreenBounds,
    metrics: &ElementMetrics,
) -> CursorMapping {
    let (half_w, half_h) = metrics.tracker().half();
    map_tracker_to_cursor(raw.offset(-half_w, -half_h), side, screen, metrics)
}

/// Direct drag of the tracker: the finger keeps the grip offset it pressed at.
pub fn map_tracker_drag_to_cursor(
    raw: Point,
    press_local: Point,
    side: Side,
    screen: ScreenBounds,
    metrics: &ElementMetrics,
) -> CursorMapping {
    let tracker = raw.offset(press_local.x.saturating_neg(), press_local.y.saturating_neg());
    map_tracker_to_cursor(tracker, side, screen, metrics)
}

fn map_tracker_to_cursor(
    tracker: Point,
    side: Side,
    screen: ScreenBounds,
    metrics: &ElementMetrics,
) -> CursorMapping {
    let cursor = cursor_from_tracker(tracker, metrics.tracker_size, side, screen);
    if cursor.y <= MIN_CURSOR_Y {
        return CursorMapping::Hide;
    }

    CursorMapping::Place {
        tracker: clamp_to_element_bounds(tracker, metrics.tracker(), screen),
        cursor: clamp_to_element_bounds(cursor, metrics.cursor(), screen),
    }
}

/// Unclamped cursor top-left for a tracker top-left.
pub fn cursor_from_tracker(
    tracker: Point,
    tracker_size: i32,
    side: Side,
    screen: ScreenBounds,
) -> Point {
    let half = tracker_size as f32 / 2.0;
    let center_x = tracker.x as f32 + half;
    let center_y = tracker.y as f32 + half;
    let width = screen.width as f32;
    let height = screen.height as f32;

    let x = match side {
        Side::Left => center_x / AREA_SCALE,
        Side::Right => width - (width - center_x) / AREA_SCALE,
    };
    let y = height - (height - center_y) / AREA_SCALE;

    Point::new(x.round() as i32, y.round() as i32)
}

/// Keeps at least one pixel of the element on screen and never lets it travel
/// past its own half-extent beyond the far edges.
pub fn clamp_to_element_bounds(point: Point, element: Size, screen: ScreenBounds) -> Point {
    let (half_w, half_h) = element.half();
    let min_x = -half_w + 1;
    let max_x = screen.width - 1 - half_w;
    let min_y = -half_h + 1;
    let max_y = screen.height - 1 - half_h;

    Point::new(
        point.x.max(min_x).min(max_x),
        point.y.max(min_y).min(max_y),
    )
}

pub fn euclidean_distance(a: Point, b: Point) -> f32 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt() as f32
}

/// Center of an element placed with its top-left at `origin`.
pub fn element_center(origin: Point, element: Size) -> Point {
    let (half_w, half_h) = element.half();
    origin.offset(half_w, half_h)
}
