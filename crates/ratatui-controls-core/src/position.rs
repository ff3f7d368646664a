//! Maps slider values onto percentage offsets for the bar fill and handles.

use crate::slider::SliderValue;

/// Fill segment of the bar, in percent of the bar width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarPosition {
    pub offset: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandlePosition {
    /// Offset from the start of the container, in percent.
    pub percent: f64,
    /// Same offset in cells of the measured container.
    pub px: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionDescriptor {
    pub bar: BarPosition,
    /// One entry per value element, index-aligned with the handles.
    pub handles: Vec<HandlePosition>,
}

pub fn percent(value: f64, max: f64, min: f64) -> f64 {
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Computes where the fill and every handle should be drawn.
///
/// An unmeasured (or zero-width) container yields a neutral descriptor: an empty fill and
/// every handle at the start.
pub fn map(
    container_width: Option<f64>,
    value: &SliderValue,
    max: f64,
    min: f64,
) -> PositionDescriptor {
    let handle_count = value.len();
    let Some(width) = container_width.filter(|w| *w > 0.0) else {
        return PositionDescriptor {
            bar: BarPosition::default(),
            handles: vec![HandlePosition::default(); handle_count],
        };
    };

    let handle = |v: f64| {
        let pct = percent(v, max, min);
        HandlePosition {
            percent: pct,
            px: pct / 100.0 * width,
        }
    };

    match value {
        SliderValue::Single(v) => {
            let h = handle(*v);
            PositionDescriptor {
                bar: BarPosition {
                    offset: 0.0,
                    width: h.percent,
                },
                handles: vec![h],
            }
        }
        SliderValue::Multi(values) => {
            let handles: Vec<HandlePosition> = values.iter().copied().map(handle).collect();
            let lowest = handles
                .iter()
                .map(|h| h.percent)
                .fold(f64::INFINITY, f64::min);
            let highest = handles
                .iter()
                .map(|h| h.percent)
                .fold(f64::NEG_INFINITY, f64::max);
            let bar = if handles.is_empty() {
                BarPosition::default()
            } else {
                BarPosition {
                    offset: lowest,
                    width: highest - lowest,
                }
            };
            PositionDescriptor { bar, handles }
        }
    }
}
