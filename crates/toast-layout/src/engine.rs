//! Popup placement.
//!
//! Pure computation: given the screen extent, the placement configuration
//! and the ordered sizes of every visible window, produce one position per
//! window. Windows stack away from the anchor corner along the configured
//! direction; the first window in the list sits closest to the anchor.
//!
//! Each anchor is handled by its own arm so the edge arithmetic stays
//! auditable per corner.

use crate::config::{Anchor, Direction, LayoutConfig};
use crate::geometry::{Point, Size};

/// Compute a screen position for every window, in input order.
///
/// The cursor starts at the anchor corner, inset by the margins of the two
/// adjacent screen edges. Every window is placed with its anchor-nearest
/// edge at the cursor, then the cursor advances along the stacking axis by
/// that window's extent. The cross-axis coordinate never changes, so all
/// windows share the anchor's cross-axis edge.
pub fn compute_positions(config: &LayoutConfig, screen: Size, sizes: &[Size]) -> Vec<Point> {
    let mut positions = Vec::with_capacity(sizes.len());
    let margins = config.margins;
    let screen_w = screen.width as i32;
    let screen_h = screen.height as i32;

    match config.anchor {
        Anchor::NorthWest => {
            let mut cursor = Point::new(margins.left as i32, margins.top as i32);
            for size in sizes {
                positions.push(cursor);
                match config.direction {
                    Direction::Vertical => cursor.y += size.height as i32,
                    Direction::Horizontal => cursor.x += size.width as i32,
                }
            }
        }
        Anchor::NorthEast => {
            let mut cursor = Point::new(screen_w - margins.right as i32, margins.top as i32);
            for size in sizes {
                positions.push(Point::new(cursor.x - size.width as i32, cursor.y));
                match config.direction {
                    Direction::Vertical => cursor.y += size.height as i32,
                    Direction::Horizontal => cursor.x -= size.width as i32,
                }
            }
        }
        Anchor::SouthWest => {
            let mut cursor = Point::new(margins.left as i32, screen_h - margins.bottom as i32);
            for size in sizes {
                positions.push(Point::new(cursor.x, cursor.y - size.height as i32));
                match config.direction {
                    Direction::Vertical => cursor.y -= size.height as i32,
                    Direction::Horizontal => cursor.x += size.width as i32,
                }
            }
        }
        Anchor::SouthEast => {
            let mut cursor = Point::new(
                screen_w - margins.right as i32,
                screen_h - margins.bottom as i32,
            );
            for size in sizes {
                positions.push(Point::new(
                    cursor.x - size.width as i32,
                    cursor.y - size.height as i32,
                ));
                match config.direction {
                    Direction::Vertical => cursor.y -= size.height as i32,
                    Direction::Horizontal => cursor.x -= size.width as i32,
                }
            }
        }
    }

    positions
}
