use crate::core::models::{PixelBuffer, PixelColor, ZoomConfig};
use crate::global_constants::{BORDER_RGBA, CROSSHAIR_RGBA, GRID_RGBA, LOG_TAG_VIEWPORT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl OverlayColor {
    pub const fn from_rgba(rgba: (u8, u8, u8, u8)) -> Self {
        Self {
            red: rgba.0,
            green: rgba.1,
            blue: rgba.2,
            alpha: rgba.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: OverlayColor,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportStyle {
    pub crosshair: StrokeStyle,
    pub grid: StrokeStyle,
    pub border: StrokeStyle,
}

impl Default for ViewportStyle {
    fn default() -> Self {
        Self {
            crosshair: StrokeStyle {
                color: OverlayColor::from_rgba(CROSSHAIR_RGBA),
                width: 1.0,
            },
            grid: StrokeStyle {
                color: OverlayColor::from_rgba(GRID_RGBA),
                width: 1.0,
            },
            border: StrokeStyle {
                color: OverlayColor::from_rgba(BORDER_RGBA),
                width: 1.0,
            },
        }
    }
}

/// Integer rectangle, either in viewport pixels or in source buffer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: PixelRect,
        color: PixelColor,
    },
    StrokeRect {
        rect: PixelRect,
        style: StrokeStyle,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        style: StrokeStyle,
    },
}

/// Everything needed to paint one magnifier frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportFrame {
    pub viewport: PixelRect,
    /// Zoom-sized source window centered on the sample.
    pub crop: PixelRect,
    /// Source pixels actually drawn: the crop plus the partial edge cells needed to cover
    /// the viewport once the sampled cell is aligned under the crosshair square.
    pub source: PixelRect,
    /// Viewport rectangle outlining the sampled pixel.
    pub crosshair_square: PixelRect,
    pub sample_x: i32,
    pub sample_y: i32,
    pub sampled_color: PixelColor,
    pub commands: Vec<DrawCommand>,
}

impl ViewportFrame {
    pub fn cell_at(&self, x: i32, y: i32) -> Option<PixelColor> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::FillRect { rect, color }
                if x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom() =>
            {
                Some(*color)
            }
            _ => None,
        })
    }
}

pub struct ViewportRenderer;

impl ViewportRenderer {
    pub fn render(
        buffer: &PixelBuffer,
        local_x: i32,
        local_y: i32,
        zoom: &ZoomConfig,
        style: &ViewportStyle,
    ) -> ViewportFrame {
        let viewport = PixelRect::new(0, 0, zoom.viewport_width(), zoom.viewport_height());
        let crop = Self::compute_crop(local_x, local_y, zoom);
        let crosshair_square = Self::compute_crosshair_square(zoom);
        let source = Self::compute_source(local_x, local_y, zoom, crosshair_square);

        let mut commands = Vec::new();
        Self::push_magnified_cells(
            &mut commands,
            buffer,
            local_x,
            local_y,
            zoom,
            crosshair_square,
            source,
        );
        Self::push_grid(&mut commands, zoom, crosshair_square, style.grid);
        Self::push_crosshair(&mut commands, zoom, crosshair_square, style.crosshair);
        commands.push(DrawCommand::StrokeRect {
            rect: viewport,
            style: style.border,
        });

        let sampled_color = buffer.get(local_x, local_y);

        log::trace!(
            "{} rendered ({}, {}) with {} commands, color {}",
            LOG_TAG_VIEWPORT,
            local_x,
            local_y,
            commands.len(),
            sampled_color.to_hex()
        );

        ViewportFrame {
            viewport,
            crop,
            source,
            crosshair_square,
            sample_x: local_x,
            sample_y: local_y,
            sampled_color,
            commands,
        }
    }

    pub fn compute_crop(local_x: i32, local_y: i32, zoom: &ZoomConfig) -> PixelRect {
        PixelRect::new(
            local_x - zoom.zoom_width() / 2,
            local_y - zoom.zoom_height() / 2,
            zoom.zoom_width(),
            zoom.zoom_height(),
        )
    }

    pub fn compute_crosshair_square(zoom: &ZoomConfig) -> PixelRect {
        PixelRect::new(
            zoom.half_width() - zoom.zoom_midpoint(),
            zoom.half_height() - zoom.zoom_midpoint(),
            zoom.zoom_factor(),
            zoom.zoom_factor(),
        )
    }

    /// Source rectangle whose cells, with the sample under `square`, cover the viewport.
    pub fn compute_source(
        local_x: i32,
        local_y: i32,
        zoom: &ZoomConfig,
        square: PixelRect,
    ) -> PixelRect {
        let cell = zoom.zoom_factor();
        let (first_column, last_column) = cell_range(square.x, zoom.viewport_width(), cell);
        let (first_row, last_row) = cell_range(square.y, zoom.viewport_height(), cell);

        PixelRect::new(
            local_x + first_column,
            local_y + first_row,
            last_column - first_column + 1,
            last_row - first_row + 1,
        )
    }

    /// Nearest-neighbor blocks, one per `source` pixel. Edge blocks are clipped to the viewport.
    fn push_magnified_cells(
        commands: &mut Vec<DrawCommand>,
        buffer: &PixelBuffer,
        local_x: i32,
        local_y: i32,
        zoom: &ZoomConfig,
        square: PixelRect,
        source: PixelRect,
    ) {
        let cell = zoom.zoom_factor();

        for source_y in source.y..source.bottom() {
            let top = square.y + (source_y - local_y) * cell;
            let clipped_top = top.max(0);
            let clipped_bottom = (top + cell).min(zoom.viewport_height());

            for source_x in source.x..source.right() {
                let left = square.x + (source_x - local_x) * cell;
                let clipped_left = left.max(0);
                let clipped_right = (left + cell).min(zoom.viewport_width());

                commands.push(DrawCommand::FillRect {
                    rect: PixelRect::new(
                        clipped_left,
                        clipped_top,
                        clipped_right - clipped_left,
                        clipped_bottom - clipped_top,
                    ),
                    color: buffer.get(source_x, source_y),
                });
            }
        }
    }

    fn push_grid(
        commands: &mut Vec<DrawCommand>,
        zoom: &ZoomConfig,
        square: PixelRect,
        style: StrokeStyle,
    ) {
        let cell = zoom.zoom_factor();
        let width = zoom.viewport_width();
        let height = zoom.viewport_height();

        let vertical = grid_positions(square.x, square.right(), width, cell);
        let horizontal = grid_positions(square.y, square.bottom(), height, cell);

        commands.extend(vertical.into_iter().map(|x| DrawCommand::Line {
            from: (x, 0),
            to: (x, height),
            style,
        }));
        commands.extend(horizontal.into_iter().map(|y| DrawCommand::Line {
            from: (0, y),
            to: (width, y),
            style,
        }));
    }

    fn push_crosshair(
        commands: &mut Vec<DrawCommand>,
        zoom: &ZoomConfig,
        square: PixelRect,
        style: StrokeStyle,
    ) {
        let center_x = zoom.half_width();
        let center_y = zoom.half_height();

        commands.push(DrawCommand::StrokeRect {
            rect: square,
            style,
        });

        commands.push(DrawCommand::Line {
            from: (center_x, 0),
            to: (center_x, square.y),
            style,
        });
        commands.push(DrawCommand::Line {
            from: (center_x, square.bottom()),
            to: (center_x, zoom.viewport_height()),
            style,
        });
        commands.push(DrawCommand::Line {
            from: (0, center_y),
            to: (square.x, center_y),
            style,
        });
        commands.push(DrawCommand::Line {
            from: (square.right(), center_y),
            to: (zoom.viewport_width(), center_y),
            style,
        });
    }
}

/// Cell offsets, relative to the crosshair cell, needed to cover `[0, extent)`.
fn cell_range(square_start: i32, extent: i32, cell: i32) -> (i32, i32) {
    let before = (square_start + cell - 1) / cell;
    let after = (extent - square_start + cell - 1) / cell;
    (-before, after - 1)
}

/// Line positions on magnified-pixel boundaries, walking out from the crosshair square.
fn grid_positions(square_start: i32, square_end: i32, extent: i32, cell: i32) -> Vec<i32> {
    let mut positions = Vec::new();

    let mut position = square_start;
    while position > 0 {
        positions.push(position);
        position -= cell;
    }

    let mut position = square_end;
    while position < extent {
        positions.push(position);
        position += cell;
    }

    positions
}
