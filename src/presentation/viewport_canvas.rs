use iced::mouse;
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Size};

use crate::core::services::{DrawCommand, OverlayColor, PixelRect, StrokeStyle, ViewportFrame};
use crate::presentation::app_theme::to_iced_color;

/// Paints a magnifier frame; an empty canvas before the first selection.
pub struct ViewportCanvas<'a> {
    frame: Option<&'a ViewportFrame>,
}

impl<'a> ViewportCanvas<'a> {
    pub fn new(frame: Option<&'a ViewportFrame>) -> Self {
        Self { frame }
    }
}

fn to_overlay_color(color: OverlayColor) -> Color {
    Color::from_rgba8(color.red, color.green, color.blue, color.alpha as f32 / 255.0)
}

fn to_stroke(style: StrokeStyle) -> canvas::Stroke<'static> {
    canvas::Stroke::default()
        .with_color(to_overlay_color(style.color))
        .with_width(style.width)
}

fn top_left(rect: PixelRect) -> Point {
    Point::new(rect.x as f32, rect.y as f32)
}

fn size_of(rect: PixelRect) -> Size {
    Size::new(rect.width as f32, rect.height as f32)
}

impl<'a, Message> canvas::Program<Message> for ViewportCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<iced::Renderer>> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let Some(viewport_frame) = self.frame else {
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            );
            return vec![frame.into_geometry()];
        };

        for command in &viewport_frame.commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    frame.fill_rectangle(top_left(*rect), size_of(*rect), to_iced_color(*color));
                }
                DrawCommand::StrokeRect { rect, style } => {
                    let path = canvas::Path::rectangle(top_left(*rect), size_of(*rect));
                    frame.stroke(&path, to_stroke(*style));
                }
                DrawCommand::Line { from, to, style } => {
                    let path = canvas::Path::line(
                        Point::new(from.0 as f32, from.1 as f32),
                        Point::new(to.0 as f32, to.1 as f32),
                    );
                    frame.stroke(&path, to_stroke(*style));
                }
            }
        }

        vec![frame.into_geometry()]
    }
}
