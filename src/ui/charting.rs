use cubetime::Time;

/// Chart points: solve number on X, seconds on Y
pub fn solve_points(times: &[Time]) -> Vec<(f64, f64)> {
    times
        .iter()
        .enumerate()
        .map(|(i, t)| ((i + 1) as f64, t.milliseconds() as f64 / 1000.0))
        .collect()
}

/// Compute X (solve count) and Y (seconds) bounds for the history chart
pub fn compute_chart_params(points: &[(f64, f64)]) -> (f64, f64) {
    let mut slowest = 0.0;
    for &(_, secs) in points {
        if secs > slowest {
            slowest = secs;
        }
    }

    let mut solve_count = match points.last() {
        Some(x) => x.0,
        None => 1.0,
    };
    if solve_count < 1.0 {
        solve_count = 1.0;
    }

    (solve_count, slowest.ceil().max(1.0))
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
