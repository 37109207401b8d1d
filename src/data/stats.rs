use super::model::{MeasurementSeries, StatisticsRecord};

/// Compute descriptive statistics for a validated series.
///
/// # Panics
///
/// Panics if the series is empty. The validator never produces one, so this
/// indicates a bug rather than bad input.
pub fn compute(series: &MeasurementSeries) -> StatisticsRecord {
    assert!(!series.is_empty(), "statistics need at least one value");

    let sorted = series.sorted();
    let count = sorted.len();
    let mean = mean(&sorted);

    let std_dev = (count >= 2).then(|| {
        let squares = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (squares / (count - 1) as f64).sqrt()
    });

    let record = StatisticsRecord {
        count,
        mean,
        median: percentile_sorted(&sorted, 0.5),
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
        q1: percentile_sorted(&sorted, 0.25),
        q3: percentile_sorted(&sorted, 0.75),
    };
    log::debug!("Computed statistics: {record:?}");
    record
}

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Quantile `q` (0.0..=1.0) of ascending values using linear interpolation
/// between the ranks `floor(q * (n - 1))` and `ceil(q * (n - 1))`.
///
/// `q = 0.5` is the median: the middle value, or the average of the two
/// middle values for an even count.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(sorted.is_sorted_by(|a, b| a <= b), "values must be sorted");
    if sorted.is_empty() {
        return f64::NAN;
    }

    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    if lower == upper {
        sorted[lower]
    } else {
        let (a, b) = (sorted[lower], sorted[upper]);
        // Rounding must not push the result outside its two ranks.
        (a + (b - a) * fraction).clamp(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{SimpleRng, sample_mark};

    fn series(values: &[f64]) -> MeasurementSeries {
        MeasurementSeries::from_values(values.to_vec())
    }

    #[test]
    fn boundary_values() {
        let stats = compute(&series(&[0.0, 50.0, 100.0]));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.mean, 50.0);
        assert_eq!(stats.median, 50.0);
        assert_eq!(stats.q1, 25.0);
        assert_eq!(stats.q3, 75.0);
        assert_eq!(stats.std_dev, Some(50.0));
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let stats = compute(&series(&[40.0, 10.0, 30.0, 20.0]));
        assert_eq!(stats.median, 25.0);
        assert_eq!(stats.q1, 17.5);
        assert_eq!(stats.q3, 32.5);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        let stats = compute(&series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert_eq!(stats.mean, 5.0);
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((stats.std_dev.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn identical_values_have_zero_spread() {
        let stats = compute(&series(&[75.0, 75.0, 75.0]));
        assert_eq!(stats.std_dev, Some(0.0));
        assert_eq!(stats.q1, 75.0);
        assert_eq!(stats.q3, 75.0);
    }

    #[test]
    fn single_value_has_no_std_dev() {
        let stats = compute(&series(&[42.0]));
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std_dev, None);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.q1, 42.0);
    }

    #[test]
    fn quantiles_are_ordered() {
        let samples: &[&[f64]] = &[
            &[1.0, 2.0],
            &[99.0, 0.5, 12.25, 12.25, 70.0],
            &[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0],
            &[100.0, 0.0],
        ];
        for values in samples {
            let s = compute(&series(values));
            assert!(s.min <= s.q1, "{s:?}");
            assert!(s.q1 <= s.median, "{s:?}");
            assert!(s.median <= s.q3, "{s:?}");
            assert!(s.q3 <= s.max, "{s:?}");
        }
    }

    #[test]
    fn quantiles_are_ordered_for_generated_marks() {
        // Wide spread clips many marks to 0 or 100, so repeats are common.
        for seed in 0..16 {
            let mut rng = SimpleRng::new(seed);
            for len in 2..=41 {
                let values: Vec<f64> = (0..len)
                    .map(|_| sample_mark(&mut rng, 60.0, 35.0))
                    .collect();
                let s = compute(&series(&values));
                assert_eq!(s.count, len);
                assert!(s.min <= s.q1, "seed {seed}, len {len}: {s:?}");
                assert!(s.q1 <= s.median, "seed {seed}, len {len}: {s:?}");
                assert!(s.median <= s.q3, "seed {seed}, len {len}: {s:?}");
                assert!(s.q3 <= s.max, "seed {seed}, len {len}: {s:?}");
                assert!(s.std_dev.is_some_and(|sd| sd >= 0.0));
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn empty_series_is_a_bug() {
        compute(&MeasurementSeries::from_values(vec![]));
    }
}
