use crate::quantize::RangeConfig;

/// Value of a slider: one scalar per handle.
///
/// `Multi` values are kept in ascending order; a handle can be dragged up to its neighbours but
/// not past them.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderValue {
    Single(f64),
    Multi(Vec<f64>),
}

impl Default for SliderValue {
    fn default() -> Self {
        SliderValue::Single(1.0)
    }
}

impl From<f64> for SliderValue {
    fn from(v: f64) -> Self {
        SliderValue::Single(v)
    }
}

impl From<Vec<f64>> for SliderValue {
    fn from(values: Vec<f64>) -> Self {
        SliderValue::Multi(values)
    }
}

impl SliderValue {
    /// Number of handles.
    pub fn len(&self) -> usize {
        match self {
            SliderValue::Single(_) => 1,
            SliderValue::Multi(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, SliderValue::Multi(_))
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            SliderValue::Single(v) => std::slice::from_ref(v),
            SliderValue::Multi(values) => values,
        }
    }

    /// Value targeted by `handle`. A single value ignores the index.
    pub fn get(&self, handle: Option<usize>) -> Option<f64> {
        match self {
            SliderValue::Single(v) => Some(*v),
            SliderValue::Multi(values) => handle.and_then(|i| values.get(i).copied()),
        }
    }

    /// Index of the handle closest to `goal`; ties go to the lowest index.
    /// `None` for single values and empty sequences.
    pub fn nearest_handle(&self, goal: f64) -> Option<usize> {
        let SliderValue::Multi(values) = self else {
            return None;
        };
        if values.is_empty() {
            return None;
        }
        let nearest = values
            .iter()
            .enumerate()
            .fold(0, |acc, (index, curr)| {
                if (curr - goal).abs() < (values[acc] - goal).abs() {
                    index
                } else {
                    acc
                }
            });
        Some(nearest)
    }

    /// Aligns every element to `range` and restores ascending order.
    pub fn aligned(self, range: &RangeConfig) -> Self {
        match self {
            SliderValue::Single(v) => SliderValue::Single(range.align(v)),
            SliderValue::Multi(mut values) => {
                for v in &mut values {
                    *v = range.align(*v);
                }
                values.sort_by(f64::total_cmp);
                SliderValue::Multi(values)
            }
        }
    }

    /// Replaces the value targeted by `handle`, bounded by its neighbours.
    ///
    /// Returns `false` (and leaves the value untouched) when a multi value has no such handle.
    pub(crate) fn replace(&mut self, handle: Option<usize>, next: f64) -> bool {
        match self {
            SliderValue::Single(v) => {
                *v = next;
                true
            }
            SliderValue::Multi(values) => {
                let Some(i) = handle.filter(|i| *i < values.len()) else {
                    return false;
                };
                let lo = if i > 0 { values[i - 1] } else { f64::NEG_INFINITY };
                let hi = values.get(i + 1).copied().unwrap_or(f64::INFINITY);
                values[i] = next.clamp(lo, hi);
                true
            }
        }
    }
}
