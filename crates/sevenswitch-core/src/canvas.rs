//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, ImageRef};
use crate::widget::{Canvas, TextStyle};
use crate::{CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Each recorded command is self-contained: the active clip (intersection of
/// the clip stack) and opacity (product of the opacity stack) are folded in
/// as `Clip`/`Opacity` wrappers at record time.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a backend)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    opacity_stack: Vec<f32>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the current accumulated opacity.
    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    fn record(&mut self, command: DrawCommand) {
        if self.current_opacity() <= 0.0 {
            return;
        }
        let mut command = command.with_opacity(self.current_opacity());
        if let Some(clip) = self.current_clip() {
            command = command.with_clip(clip);
        }
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn draw_box(&mut self, rect: Rect, radius: CornerRadius, style: &BoxStyle) {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: &ImageRef, bounds: Rect) {
        self.record(DrawCommand::Image {
            image: image.clone(),
            bounds,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        // An empty intersection clips everything.
        let clip = match self.current_clip() {
            Some(current) => current
                .intersection(&rect)
                .unwrap_or_else(|| Rect::new(rect.x, rect.y, 0.0, 0.0)),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_opacity(&mut self, alpha: f32) {
        let alpha = self.current_opacity() * alpha.clamp(0.0, 1.0);
        self.opacity_stack.push(alpha);
    }

    fn pop_opacity(&mut self) {
        self.opacity_stack.pop();
    }
}
