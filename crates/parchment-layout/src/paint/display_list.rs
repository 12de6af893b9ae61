//! Display List - a recorded sequence of drawing commands
//!
//! The display list is a [`Paint`] surface that stores every call instead of
//! rasterizing it. Replaying it onto another surface reproduces the paint.

use core::fmt;

use serde::Serialize;

use crate::layout::Rect;
use crate::style::ColorValue;

use super::Paint;

/// A single drawing command.
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    ///
    /// Used for backgrounds, borders and underlines.
    FillRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle.
        width: f32,
        /// Height of the rectangle.
        height: f32,
        /// Fill color.
        color: ColorValue,
    },

    /// Outline a rectangle. Used for the hit-test highlight.
    StrokeRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle.
        width: f32,
        /// Height of the rectangle.
        height: f32,
        /// Stroke color.
        color: ColorValue,
    },

    /// Draw text at a position.
    DrawText {
        /// X coordinate of the text baseline origin.
        x: f32,
        /// Y coordinate of the text baseline origin.
        y: f32,
        /// The text content to draw.
        text: String,
        /// Font key selecting the host font.
        font_key: String,
        /// Text color.
        color: ColorValue,
    },
}

impl DisplayCommand {
    /// Execute this command on `surface`.
    pub fn replay(&self, surface: &mut dyn Paint) {
        match self {
            Self::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => surface.fill(Rect::new(*x, *y, *width, *height), *color),
            Self::StrokeRect {
                x,
                y,
                width,
                height,
                color,
            } => surface.stroke(Rect::new(*x, *y, *width, *height), *color),
            Self::DrawText {
                x,
                y,
                text,
                font_key,
                color,
            } => surface.draw_text(text, *x, *y, font_key, *color),
        }
    }
}

impl fmt::Display for DisplayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => write!(f, "fill   ({x}, {y}) {width}x{height} {color}"),
            Self::StrokeRect {
                x,
                y,
                width,
                height,
                color,
            } => write!(f, "stroke ({x}, {y}) {width}x{height} {color}"),
            Self::DrawText {
                x,
                y,
                text,
                font_key,
                color,
            } => write!(f, "text   ({x}, {y}) {font_key} {color} {text:?}"),
        }
    }
}

/// A list of drawing commands in painting order.
///
/// Commands are stored in back-to-front order, so a renderer can simply
/// iterate and execute each command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command onto `surface`, in order.
    pub fn replay(&self, surface: &mut dyn Paint) {
        for command in &self.commands {
            command.replay(surface);
        }
    }
}

impl Paint for DisplayList {
    fn fill(&mut self, rect: Rect, color: ColorValue) {
        self.push(DisplayCommand::FillRect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color,
        });
    }

    fn stroke(&mut self, rect: Rect, color: ColorValue) {
        self.push(DisplayCommand::StrokeRect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_key: &str, color: ColorValue) {
        self.push(DisplayCommand::DrawText {
            x,
            y,
            text: text.to_string(),
            font_key: font_key.to_string(),
            color,
        });
    }
}

impl fmt::Display for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_reproduces_commands() {
        let mut recorded = DisplayList::new();
        recorded.fill(Rect::new(0.0, 0.0, 4.0, 4.0), ColorValue::WHITE);
        recorded.draw_text("hi", 1.0, 2.0, "base", ColorValue::BLACK);
        recorded.stroke(Rect::new(1.0, 1.0, 2.0, 2.0), ColorValue::RED);

        let mut copy = DisplayList::new();
        recorded.replay(&mut copy);
        assert_eq!(copy, recorded);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_display_is_one_line_per_command() {
        let mut list = DisplayList::new();
        list.draw_text("hi", 1.0, 2.0, "bold", ColorValue::BLACK);
        assert_eq!(list.to_string(), "text   (1, 2) bold #000000 \"hi\"\n");
    }
}
