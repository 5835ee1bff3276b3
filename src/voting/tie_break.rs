use rand::Rng;

/// Index of the smallest entry of `values`, ties broken uniformly at random.
///
/// Entries tie only on exact equality. When several indices share the
/// minimum, one of them is drawn uniformly from `rng`; a unique minimum
/// consumes no randomness.
///
/// # Panics
/// If `values` is empty.
pub fn argmin_random<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> usize {
    pick_extreme(values, rng, |candidate, best| candidate < best)
}

/// Index of the largest entry of `values`, ties broken uniformly at random.
///
/// # Panics
/// If `values` is empty.
pub fn argmax_random<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> usize {
    pick_extreme(values, rng, |candidate, best| candidate > best)
}

fn pick_extreme<R, F>(values: &[f64], rng: &mut R, better: F) -> usize
where
    R: Rng + ?Sized,
    F: Fn(f64, f64) -> bool,
{
    assert!(!values.is_empty(), "cannot pick from an empty vote vector");

    let mut best = values[0];
    let mut tied = vec![0];
    for (index, &value) in values.iter().enumerate().skip(1) {
        if better(value, best) {
            best = value;
            tied.clear();
            tied.push(index);
        } else if value == best {
            tied.push(index);
        }
    }

    match tied.len() {
        1 => tied[0],
        len => tied[rng.random_range(0..len)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn unique_minimum_is_returned() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(argmin_random(&[3.0, 1.0, 2.0], &mut rng), 1);
        assert_eq!(argmin_random(&[0.5], &mut rng), 0);
    }

    #[test]
    fn unique_maximum_is_returned() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(argmax_random(&[3.0, 1.0, 2.0], &mut rng), 0);
    }

    #[test]
    fn ties_only_pick_tied_indices() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = [2.0, 1.0, 5.0, 1.0, 1.0];
        for _ in 0..200 {
            let picked = argmin_random(&values, &mut rng);
            assert!([1, 3, 4].contains(&picked));
        }
    }

    #[test]
    fn ties_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let values = [1.0, 4.0, 1.0, 1.0];
        let mut counts = [0usize; 4];
        let draws = 30_000;
        for _ in 0..draws {
            counts[argmin_random(&values, &mut rng)] += 1;
        }

        assert_eq!(counts[1], 0);
        for index in [0, 2, 3] {
            let frequency = counts[index] as f64 / draws as f64;
            assert!((frequency - 1.0 / 3.0).abs() < 0.02, "index {index}: {frequency}");
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let values = [1.0; 10];
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                argmin_random(&values, &mut first),
                argmin_random(&values, &mut second)
            );
        }
    }

    #[test]
    #[should_panic]
    fn empty_input_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        argmin_random(&[], &mut rng);
    }
}
