//! Random-value helpers shared by the schema generators.
//!
//! Ranges are half-open `[min, max)` and sampled uniformly.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Uniform pick from a non-empty list.
pub fn pick<'v, R: Rng + ?Sized>(values: &[&'v str], rng: &mut R) -> &'v str {
    if values.is_empty() {
        return "";
    }
    values[rng.random_range(0..values.len())]
}

/// Uniform float in `[min, max)`.
pub fn float_in<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// Uniform float in `[min, max)` rounded to cents, clamped back below `max`.
pub fn money<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    let value = (float_in(min, max, rng) * 100.0).floor() / 100.0;
    value.max(min)
}

/// Uniform integer in `[min, max)`.
pub fn int_in<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// Uniform instant in `[now - days, now)`.
pub fn past_within<R: Rng + ?Sized>(now: DateTime<Utc>, days: i64, rng: &mut R) -> DateTime<Utc> {
    let offset = int_in(1, days * SECONDS_PER_DAY + 1, rng);
    now - TimeDelta::seconds(offset)
}

/// Uniform instant in `[now, now + days)`.
pub fn future_within<R: Rng + ?Sized>(
    now: DateTime<Utc>,
    days: i64,
    rng: &mut R,
) -> DateTime<Utc> {
    let offset = int_in(0, days * SECONDS_PER_DAY, rng);
    now + TimeDelta::seconds(offset)
}

/// Random `first last` pair.
pub fn person_name<'v, R: Rng + ?Sized>(
    first_names: &[&'v str],
    last_names: &[&'v str],
    rng: &mut R,
) -> (&'v str, &'v str) {
    (pick(first_names, rng), pick(last_names, rng))
}

/// Lowercase, alphanumeric-only slug used in emails and domains.
pub fn slug(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// `first.last@domain`.
pub fn email(first: &str, last: &str, domain: &str) -> String {
    format!("{}.{}@{}", slug(first), slug(last), domain)
}

/// North-American style phone number.
pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+1-{}-{}-{:04}",
        int_in(200, 1000, rng),
        int_in(200, 1000, rng),
        int_in(0, 10000, rng)
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn ranges_stay_half_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..5_000 {
            let value = float_in(1_000_000.0, 51_000_000.0, &mut rng);
            assert!((1_000_000.0..51_000_000.0).contains(&value));
            let value = money(10.0, 10_010.0, &mut rng);
            assert!((10.0..10_010.0).contains(&value));
            let value = int_in(0, 100, &mut rng);
            assert!((0..100).contains(&value));
        }
    }

    #[test]
    fn degenerate_ranges_return_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(int_in(5, 5, &mut rng), 5);
        assert_eq!(float_in(2.0, 1.0, &mut rng), 2.0);
        assert_eq!(pick(&[], &mut rng), "");
    }

    #[test]
    fn dates_fall_in_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        for _ in 0..2_000 {
            let past = past_within(now, 30, &mut rng);
            assert!(past < now && past >= now - TimeDelta::days(30));
            let future = future_within(now, 180, &mut rng);
            assert!(future >= now && future < now + TimeDelta::days(180));
        }
    }

    #[test]
    fn emails_are_slugged() {
        assert_eq!(email("Mary", "O'Brien", "acme.com"), "mary.obrien@acme.com");
        assert_eq!(slug("Research & Development"), "researchdevelopment");
    }
}
