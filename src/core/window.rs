/// Default x:y span ratio of a chart window.
pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Data extent of a chart, anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub max_x: f64,
    pub max_y: f64,
}

/// Pads the raw data extent and widens one axis so that `max_x / max_y`
/// equals `ratio`. Spans never drop below one metre.
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64, ratio: f64) -> AxisWindow {
    let raw_max_x = raw_max_x.max(0.0);
    let raw_max_y = raw_max_y.max(0.0);
    let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

    let mut max_x = (raw_max_x + x_pad).max(1.0);
    let mut max_y = (raw_max_y + y_pad).max(1.0);

    if max_x / max_y < ratio {
        max_x = max_y * ratio;
    } else {
        max_y = max_x / ratio;
    }

    AxisWindow { max_x, max_y }
}

/// Window covering every point of every series.
pub fn window_for_points<I>(points: I, ratio: f64) -> AxisWindow
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (max_x, max_y) = points
        .into_iter()
        .fold((0.0f64, 0.0f64), |(mx, my), (x, y)| (mx.max(x), my.max(y)));
    fixed_ratio_axis_window(max_x, max_y, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_extent_grows_height_to_keep_ratio() {
        let window = fixed_ratio_axis_window(1000.0, 10.0, DISTANCE_TO_HEIGHT_RATIO);

        assert_eq!(window.max_x, 1060.0);
        assert_eq!(window.max_y, 530.0);
    }

    #[test]
    fn tall_extent_grows_width_to_keep_ratio() {
        let window = fixed_ratio_axis_window(10.0, 100.0, DISTANCE_TO_HEIGHT_RATIO);

        assert_eq!(window.max_y, 110.0);
        assert_eq!(window.max_x, 220.0);
    }

    #[test]
    fn empty_data_still_yields_a_usable_window() {
        let window = window_for_points(std::iter::empty(), DISTANCE_TO_HEIGHT_RATIO);

        assert!(window.max_x >= 1.0 && window.max_y >= 1.0);
        assert_eq!(window.max_x / window.max_y, DISTANCE_TO_HEIGHT_RATIO);
    }
}
