use crate::error::ChartError;
use crate::geometry::Point;
use crate::graph::Positions;

/// Resolved chart dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn check_dimension(name: &str, value: Option<f64>) -> Result<(), ChartError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ChartError::InvalidChartSize {
            message: format!("{name} must be a positive number, got {v}"),
        }),
        _ => Ok(()),
    }
}

/// Map positions onto the chart's coordinate space.
///
/// Each axis is first scaled to [0, 1] by its own range. A missing width or
/// height is derived from the data's aspect ratio (square when the ratio is
/// undefined). The axis of the larger chart dimension is then stretched by
/// the chart's aspect ratio, so the shorter side spans about 1 and both axes
/// use the same unit.
pub fn rescale(
    positions: &Positions,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<(Positions, ChartSize), ChartError> {
    check_dimension("width", width)?;
    check_dimension("height", height)?;
    if let Some((node, p)) = positions.iter().find(|(_, p)| !p.is_finite()) {
        return Err(ChartError::InvalidPosition {
            node: node.clone(),
            x: p.x,
            y: p.y,
        });
    }

    let (x_min, x_max) = extent(positions.values().map(|p| p.x));
    let (y_min, y_max) = extent(positions.values().map(|p| p.y));
    let x_range = x_max - x_min;
    let y_range = y_max - y_min;
    let ratio_defined = x_range > 0.0 && y_range > 0.0;

    let size = match (width, height) {
        (None, None) => {
            return Err(ChartError::InvalidChartSize {
                message: "width and height cannot both be unset".to_string(),
            });
        }
        (Some(width), Some(height)) => ChartSize { width, height },
        (None, Some(height)) => ChartSize {
            width: if ratio_defined {
                height * x_range / y_range
            } else {
                height
            },
            height,
        },
        (Some(width), None) => ChartSize {
            width,
            height: if ratio_defined {
                width * y_range / x_range
            } else {
                width
            },
        },
    };

    let unit = |v: f64, min: f64, range: f64| if range > 0.0 { (v - min) / range } else { 0.0 };
    let (x_stretch, y_stretch) = if size.width >= size.height {
        (size.width / size.height, 1.0)
    } else {
        (1.0, size.height / size.width)
    };

    let scaled = positions
        .iter()
        .map(|(name, p)| {
            let x = unit(p.x, x_min, x_range) * x_stretch;
            let y = unit(p.y, y_min, y_range) * y_stretch;
            (name.clone(), Point::new(x, y))
        })
        .collect();

    Ok((scaled, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(entries: &[(&str, f64, f64)]) -> Positions {
        entries
            .iter()
            .map(|&(name, x, y)| (name.to_string(), Point::new(x, y)))
            .collect()
    }

    #[test]
    fn test_both_sizes_stretch_wider_axis() {
        let pos = positions(&[("a", -1.0, 10.0), ("b", 3.0, 12.0)]);

        let (scaled, size) = rescale(&pos, Some(500.0), Some(250.0)).unwrap();

        assert_eq!(size, ChartSize { width: 500.0, height: 250.0 });
        assert!(scaled["a"].approx_eq(Point::new(0.0, 0.0), 1e-12));
        assert!(scaled["b"].approx_eq(Point::new(2.0, 1.0), 1e-12));
    }

    #[test]
    fn test_taller_chart_stretches_y() {
        let pos = positions(&[("a", 0.0, 0.0), ("b", 1.0, 1.0)]);

        let (scaled, _) = rescale(&pos, Some(100.0), Some(300.0)).unwrap();

        assert!(scaled["b"].approx_eq(Point::new(1.0, 3.0), 1e-12));
    }

    #[test]
    fn test_missing_height_follows_data_aspect() {
        let pos = positions(&[("a", 0.0, 0.0), ("b", 4.0, 1.0)]);

        let (scaled, size) = rescale(&pos, Some(400.0), None).unwrap();

        assert_eq!(size.height, 100.0);
        // Units match: 4 data units across, 1 up
        assert!(scaled["b"].approx_eq(Point::new(4.0, 1.0), 1e-12));
    }

    #[test]
    fn test_missing_width_with_flat_data_is_square() {
        let pos = positions(&[("a", 0.0, 5.0), ("b", 2.0, 5.0)]);

        let (scaled, size) = rescale(&pos, None, Some(300.0)).unwrap();

        assert_eq!(size.width, 300.0);
        assert!(scaled["a"].approx_eq(Point::new(0.0, 0.0), 1e-12));
        assert!(scaled["b"].approx_eq(Point::new(1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_single_point_maps_to_origin() {
        let pos = positions(&[("only", 7.0, -3.0)]);

        let (scaled, _) = rescale(&pos, Some(500.0), Some(300.0)).unwrap();

        assert_eq!(scaled["only"], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_sizes_are_validated() {
        let pos = positions(&[("a", 0.0, 0.0)]);

        assert!(matches!(
            rescale(&pos, None, None),
            Err(ChartError::InvalidChartSize { .. })
        ));
        assert!(rescale(&pos, Some(-5.0), Some(10.0)).is_err());
        assert!(rescale(&pos, Some(f64::NAN), None).is_err());
    }

    #[test]
    fn test_non_finite_positions_are_rejected() {
        let pos = positions(&[("a", 0.0, 0.0), ("b", f64::INFINITY, 1.0), ("c", 2.0, 1.0)]);

        let err = rescale(&pos, Some(500.0), Some(300.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidPosition { node, .. } if node == "b"));

        let pos = positions(&[("a", 0.0, 0.0), ("c", 2.0, f64::NAN)]);
        assert!(matches!(
            rescale(&pos, Some(500.0), None),
            Err(ChartError::InvalidPosition { node, .. }) if node == "c"
        ));
    }
}
