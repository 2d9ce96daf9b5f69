//! Recording surface

use glam::Vec2;

use super::Surface;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// Surface that keeps every call, in order
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget the previous frame
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles filled with exactly `color`
    pub fn rects_with_color<'a>(&'a self, color: &'a str) -> impl Iterator<Item = &'a DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::FillRect { color: fill, .. } if fill == color))
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
