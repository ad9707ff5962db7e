//! Forward/backward fill pass over indicator columns.

/// Füllt `NaN`-Zellen erst vorwärts, dann rückwärts (pandas
/// `ffill().bfill()`). Eine Spalte ganz ohne endliche Werte bleibt
/// unverändert.
pub fn ffill_bfill(values: &mut [f64]) {
    let mut prev = f64::NAN;
    for v in values.iter_mut() {
        if v.is_nan() {
            if !prev.is_nan() {
                *v = prev;
            }
        } else {
            prev = *v;
        }
    }

    let mut next = f64::NAN;
    for v in values.iter_mut().rev() {
        if v.is_nan() {
            if !next.is_nan() {
                *v = next;
            }
        } else {
            next = *v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_interior_gap_carries_forward() {
        let mut values = vec![1.0, f64::NAN, f64::NAN, 4.0];
        ffill_bfill(&mut values);
        assert_eq!(values, vec![1.0, 1.0, 1.0, 4.0]);
    }

    #[test]
    fn test_fill_leading_gap_carries_backward() {
        let mut values = vec![f64::NAN, f64::NAN, 3.0, 4.0];
        ffill_bfill(&mut values);
        assert_eq!(values, vec![3.0, 3.0, 3.0, 4.0]);
    }

    #[test]
    fn test_fill_trailing_gap_carries_forward() {
        let mut values = vec![1.0, 2.0, f64::NAN];
        ffill_bfill(&mut values);
        assert_eq!(values, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_fill_all_nan_untouched() {
        let mut values = vec![f64::NAN, f64::NAN];
        ffill_bfill(&mut values);
        assert!(values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_fill_no_gaps_is_identity() {
        let mut values = vec![1.0, 2.0, 3.0];
        ffill_bfill(&mut values);
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }
}
