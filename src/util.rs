use itertools::Itertools;

pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Middle value after sorting; the average of the two central values for an even count
pub fn median(data: &[f64]) -> Option<f64> {
    let sorted = data
        .iter()
        .copied()
        .sorted_by(|a, b| a.total_cmp(b))
        .collect::<Vec<f64>>();
    let count = sorted.len();

    match count {
        0 => None,
        odd if odd % 2 == 1 => Some(sorted[count / 2]),
        _ => Some((sorted[count / 2 - 1] + sorted[count / 2]) / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10., 20., 30., 15., 22.]), Some(19.4));
        assert_eq!(mean(&[15., 7., 55., 12., 4.]), Some(18.6));
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_empty_slice() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_fractional() {
        assert_eq!(mean(&[1000.0, 1001.0]), Some(1000.5));
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3000., 1000., 2000.]), Some(2000.0));
    }

    #[test]
    fn test_median_even_averages_center() {
        assert_eq!(median(&[1000., 3000.]), Some(2000.0));
        assert_eq!(median(&[4., 1., 3., 2.]), Some(2.5));
    }

    #[test]
    fn test_median_empty_slice() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_does_not_touch_input_order() {
        let data = [5.0, 1.0, 3.0];
        let _ = median(&data);
        assert_eq!(data, [5.0, 1.0, 3.0]);
    }
}
