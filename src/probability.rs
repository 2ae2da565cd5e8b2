//! Conversion of typo distances into probabilities.

/// Maps a typo distance to the probability that the user meant the candidate.
pub trait ProbabilityModel: Send + Sync {
    /// Probability in `[0, 1]`, non-increasing in `distance`.
    fn probability_of(&self, distance: f64, expected_distance: f64, max_distance: f64) -> f64;
}

impl<P: ProbabilityModel + ?Sized> ProbabilityModel for &P {
    fn probability_of(&self, distance: f64, expected_distance: f64, max_distance: f64) -> f64 {
        (**self).probability_of(distance, expected_distance, max_distance)
    }
}

/// Poisson probability mass `lambda^k / k! * e^-lambda`.
pub fn poisson_pdf(lambda: f64, k: u32) -> f64 {
    let mut lk_kfac = 1.0;
    for i in 1..=k {
        lk_kfac *= lambda / i as f64;
    }
    lk_kfac * (-lambda).exp()
}

/// Treats the number of typos as Poisson distributed with mean
/// `expected_distance` and scores a distance `d` by `P(X >= ceil(d))`:
/// the chance that at least that many typos happened.
///
/// Anything beyond `max_distance` scores zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypoProbability;

impl ProbabilityModel for TypoProbability {
    fn probability_of(&self, distance: f64, expected_distance: f64, max_distance: f64) -> f64 {
        if distance.is_nan() || distance > max_distance {
            return 0.0;
        }
        if distance <= 0.0 {
            return 1.0;
        }
        let k = distance.ceil() as u32;
        let below: f64 = (0..k).map(|i| poisson_pdf(expected_distance, i)).sum();
        (1.0 - below).clamp(0.0, 1.0)
    }
}
