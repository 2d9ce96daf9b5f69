//! Scene rendering
//!
//! The game draws through the small [`Surface`] trait: filled rectangles,
//! stroked circles, dashed lines, and text. The browser backs it with a
//! Canvas 2D context; headless runs and tests record into a [`DrawList`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;
pub mod palette;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};
pub use scene::draw_scene;

use glam::Vec2;

/// A 2D drawing target in pixel coordinates (top-left origin)
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// `dash` is [on, off] lengths in pixels
    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}
