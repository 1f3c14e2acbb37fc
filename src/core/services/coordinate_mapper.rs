use crate::core::models::{CursorSample, DisplaySurface, ScreenPoint};
use crate::global_constants::LOG_TAG_MAPPER;

/// Maps global desktop coordinates onto a single monitor's capture buffer.
pub struct CoordinateMapper;

impl CoordinateMapper {
    pub fn surface_at<'a>(
        point: ScreenPoint,
        surfaces: &'a [DisplaySurface],
    ) -> Option<&'a DisplaySurface> {
        surfaces
            .iter()
            .find(|surface| !surface.is_empty() && surface.contains(point))
    }

    /// Returns `None` only when there is no usable surface at all. Points in a gap between
    /// monitors, or beyond the desktop, are clamped onto the nearest surface.
    pub fn to_local(point: ScreenPoint, surfaces: &[DisplaySurface]) -> Option<CursorSample> {
        let surface = match Self::surface_at(point, surfaces) {
            Some(surface) => surface,
            None => {
                let nearest = Self::nearest_surface(point, surfaces)?;
                log::debug!(
                    "{} ({}, {}) is outside every surface, clamping to {}",
                    LOG_TAG_MAPPER,
                    point.x_position,
                    point.y_position,
                    nearest.name
                );
                nearest
            }
        };

        let clamped = surface.clamp_point(point);

        Some(CursorSample {
            global_point: point,
            surface: surface.clone(),
            local_x: clamped.x_position - surface.x_position,
            local_y: clamped.y_position - surface.y_position,
        })
    }

    fn nearest_surface(point: ScreenPoint, surfaces: &[DisplaySurface]) -> Option<&DisplaySurface> {
        surfaces
            .iter()
            .filter(|surface| !surface.is_empty())
            .min_by_key(|surface| surface.squared_distance_to(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_by_side_surfaces() -> Vec<DisplaySurface> {
        vec![
            DisplaySurface::build(1, "left", 0, 0, 1920, 1080).with_primary(true),
            DisplaySurface::build(2, "right", 1920, 0, 1920, 1080),
        ]
    }

    #[test]
    fn test_to_local_maps_point_on_second_monitor() {
        let surfaces = side_by_side_surfaces();

        let sample = CoordinateMapper::to_local(ScreenPoint::at_coordinates(2000, 500), &surfaces)
            .unwrap();

        assert_eq!(sample.surface.id, 2);
        assert_eq!((sample.local_x, sample.local_y), (80, 500));
    }

    #[test]
    fn test_to_local_clamps_point_left_of_all_surfaces() {
        let surfaces = side_by_side_surfaces();

        let sample =
            CoordinateMapper::to_local(ScreenPoint::at_coordinates(-5, 500), &surfaces).unwrap();

        assert_eq!(sample.surface.id, 1);
        assert_eq!((sample.local_x, sample.local_y), (0, 500));
        assert_eq!(sample.global_point, ScreenPoint::at_coordinates(-5, 500));
        assert_eq!(sample.clamped_global_point(), ScreenPoint::at_coordinates(0, 500));
    }

    #[test]
    fn test_to_local_handles_negative_offsets() {
        let surfaces = vec![
            DisplaySurface::build(1, "main", 0, 0, 1920, 1080),
            DisplaySurface::build(2, "above-left", -1280, -1024, 1280, 1024),
        ];

        let sample =
            CoordinateMapper::to_local(ScreenPoint::at_coordinates(-1, -1), &surfaces).unwrap();

        assert_eq!(sample.surface.id, 2);
        assert_eq!((sample.local_x, sample.local_y), (1279, 1023));
    }

    #[test]
    fn test_to_local_clamps_gap_between_non_abutting_monitors() {
        let surfaces = vec![
            DisplaySurface::build(1, "left", 0, 0, 1920, 1080),
            DisplaySurface::build(2, "right", 2000, 200, 1280, 720),
        ];

        let near_left =
            CoordinateMapper::to_local(ScreenPoint::at_coordinates(1950, 100), &surfaces).unwrap();
        let near_right =
            CoordinateMapper::to_local(ScreenPoint::at_coordinates(1990, 300), &surfaces).unwrap();

        assert_eq!(near_left.surface.id, 1);
        assert_eq!((near_left.local_x, near_left.local_y), (1919, 100));
        assert_eq!(near_right.surface.id, 2);
        assert_eq!((near_right.local_x, near_right.local_y), (0, 100));
    }

    #[test]
    fn test_to_local_below_shorter_monitor_clamps_to_its_bottom_edge() {
        let surfaces = vec![
            DisplaySurface::build(1, "tall", 0, 0, 1920, 1200),
            DisplaySurface::build(2, "short", 1920, 0, 1920, 1080),
        ];

        let sample =
            CoordinateMapper::to_local(ScreenPoint::at_coordinates(2500, 1150), &surfaces).unwrap();

        assert_eq!(sample.surface.id, 2);
        assert_eq!((sample.local_x, sample.local_y), (580, 1079));
    }

    #[test]
    fn test_to_local_without_surfaces_returns_none() {
        assert!(CoordinateMapper::to_local(ScreenPoint::at_coordinates(0, 0), &[]).is_none());
    }

    #[test]
    fn test_to_local_ignores_zero_sized_surfaces() {
        let surfaces = vec![
            DisplaySurface::build(1, "ghost", 0, 0, 0, 0),
            DisplaySurface::build(2, "real", 100, 0, 100, 100),
        ];

        let sample =
            CoordinateMapper::to_local(ScreenPoint::at_coordinates(0, 0), &surfaces).unwrap();

        assert_eq!(sample.surface.id, 2);
        assert_eq!((sample.local_x, sample.local_y), (0, 0));
    }
}
