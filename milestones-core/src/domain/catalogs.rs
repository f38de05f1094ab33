//! Numeric pattern catalogs.
//!
//! Each catalog yields the integers of one pattern family up to a bound
//! expressed in the family's own unit. Catalogs know nothing about dates;
//! the assembler pairs their output with a unit and projects it.
//!
//! Every bound used by the generator is the 100-year horizon in the relevant
//! unit, so output volume stays fixed no matter the origin.

/// Upper age covered by the generator
pub const MAX_YEARS: u32 = 100;
pub const DAYS_IN_100_YEARS: u64 = 36_525;
pub const HOURS_IN_100_YEARS: u64 = DAYS_IN_100_YEARS * 24;
pub const MINUTES_IN_100_YEARS: u64 = HOURS_IN_100_YEARS * 60;
pub const SECONDS_IN_100_YEARS: u64 = MINUTES_IN_100_YEARS * 60;

pub const HOURLY_SAMPLES: [u64; 6] = [10_000, 50_000, 100_000, 200_000, 250_000, 500_000];
pub const WEEKLY_SAMPLES: [u64; 8] = [500, 1_000, 1_500, 2_000, 2_500, 3_000, 4_000, 5_000];
pub const MONTHLY_SAMPLES: [u64; 10] = [200, 300, 400, 500, 600, 700, 800, 900, 1_000, 1_200];
pub const MINUTE_SAMPLES: [u64; 4] = [10_000_000, 50_000_000, 100_000_000, 500_000_000];
pub const SECOND_SAMPLES: [u64; 4] = [1_000_000_000, 1_500_000_000, 2_000_000_000, 3_000_000_000];

const STANDARD_SEED: [u64; 7] = [1, 5, 10, 20, 25, 50, 75];
const STANDARD_STEP: u64 = 500;
const NAMED_STANDARD: [u64; 10] = [500, 1_000, 1_500, 2_000, 2_500, 5_000, 7_500, 15_000, 25_000, 30_000];

const SEQUENCES: [u64; 9] = [123, 1_234, 12_345, 123_456, 12_321, 121, 101, 1_001, 2_002];

const PI_PREFIXES: [u64; 3] = [314, 3_141, 31_415];
const FIBONACCI_FLOOR: u64 = 100;
const SQUARE_MIN_ROOT: u64 = 10;

/// 10, 100, 1000, ... up to `bound`
pub fn powers_of_ten(bound: u64) -> Vec<u64> {
    let mut numbers = Vec::new();
    let mut current: u64 = 10;
    while current <= bound {
        numbers.push(current);
        match current.checked_mul(10) {
            Some(next) => current = next,
            None => break,
        }
    }
    numbers
}

/// Round and half-round numbers: a small seed list plus every multiple of 500
pub fn standard_numbers(bound: u64) -> Vec<u64> {
    let mut numbers: Vec<u64> = STANDARD_SEED.iter().copied().filter(|n| *n <= bound).collect();
    numbers.extend((STANDARD_STEP..=bound).step_by(STANDARD_STEP as usize));
    numbers.extend(NAMED_STANDARD.iter().copied().filter(|n| *n <= bound));
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

/// One digit repeated (11, 222, 3333...), above 10 and up to `bound`, ascending
pub fn repdigits(bound: u64) -> Vec<u64> {
    let mut numbers = Vec::new();
    for digit in 1..=9u64 {
        let mut current = digit;
        while current <= bound {
            if current > 10 {
                numbers.push(current);
            }
            match current.checked_mul(10).and_then(|n| n.checked_add(digit)) {
                Some(next) => current = next,
                None => break,
            }
        }
    }
    numbers.sort_unstable();
    numbers
}

/// Curated digit patterns, in their listed order
pub fn sequences(bound: u64) -> Vec<u64> {
    SEQUENCES.iter().copied().filter(|n| *n <= bound).collect()
}

/// Why a Math-family value was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathKind {
    /// Leading digits of pi
    Pi,
    Fibonacci,
    /// `root * root`
    Square { root: u64 },
}

impl MathKind {
    /// Short lowercase name used in milestone IDs
    pub fn slug(&self) -> &'static str {
        match self {
            MathKind::Pi => "pi",
            MathKind::Fibonacci => "fibonacci",
            MathKind::Square { .. } => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathEntry {
    pub value: u64,
    pub kind: MathKind,
}

/// Pi prefixes, then Fibonacci numbers above 100, then curated squares.
///
/// The same value may appear under two kinds (144 is both Fibonacci and 12²).
pub fn math_numbers(bound: u64) -> Vec<MathEntry> {
    let mut entries: Vec<MathEntry> = PI_PREFIXES
        .iter()
        .filter(|n| **n <= bound)
        .map(|n| MathEntry { value: *n, kind: MathKind::Pi })
        .collect();

    let (mut a, mut b): (u64, u64) = (0, 1);
    while b <= bound {
        if b > FIBONACCI_FLOOR {
            entries.push(MathEntry { value: b, kind: MathKind::Fibonacci });
        }
        match a.checked_add(b) {
            Some(next) => {
                a = b;
                b = next;
            }
            None => break,
        }
    }

    let mut root = SQUARE_MIN_ROOT;
    while let Some(square) = root.checked_mul(root).filter(|s| *s <= bound) {
        if is_curated_square_root(root) {
            entries.push(MathEntry { value: square, kind: MathKind::Square { root } });
        }
        root += 1;
    }

    entries
}

/// Roots whose squares are worth a milestone: multiples of 25, plus 12, 50 and 100
pub fn is_curated_square_root(root: u64) -> bool {
    root % 25 == 0 || matches!(root, 12 | 50 | 100)
}

/// Fixed samples that fit inside `bound`
pub fn samples_within(samples: &[u64], bound: u64) -> Vec<u64> {
    samples.iter().copied().filter(|n| *n <= bound).collect()
}

/// Week samples whose length in days fits the horizon
pub fn weekly_samples() -> Vec<u64> {
    WEEKLY_SAMPLES
        .iter()
        .copied()
        .filter(|w| w * 7 <= DAYS_IN_100_YEARS)
        .collect()
}

/// Month samples whose approximate length (30 days each) fits the horizon
pub fn monthly_samples() -> Vec<u64> {
    MONTHLY_SAMPLES
        .iter()
        .copied()
        .filter(|m| m * 30 <= DAYS_IN_100_YEARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powers_of_ten() {
        assert_eq!(powers_of_ten(DAYS_IN_100_YEARS), vec![10, 100, 1_000, 10_000]);
        assert_eq!(powers_of_ten(100), vec![10, 100]);
        assert!(powers_of_ten(9).is_empty());
        assert_eq!(powers_of_ten(u64::MAX).len(), 19);
    }

    #[test]
    fn test_standard_numbers() {
        let numbers = standard_numbers(DAYS_IN_100_YEARS);
        assert_eq!(&numbers[..9], &[1, 5, 10, 20, 25, 50, 75, 500, 1_000]);
        assert_eq!(numbers.last(), Some(&36_500));
        assert_eq!(numbers.len(), 7 + 73);
        for named in NAMED_STANDARD {
            assert!(numbers.contains(&named), "missing {}", named);
        }
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_standard_numbers_small_bound() {
        assert_eq!(standard_numbers(30), vec![1, 5, 10, 20, 25]);
        assert_eq!(standard_numbers(1_200), vec![1, 5, 10, 20, 25, 50, 75, 500, 1_000]);
    }

    #[test]
    fn test_repdigits() {
        let numbers = repdigits(DAYS_IN_100_YEARS);
        assert_eq!(&numbers[..9], &[11, 22, 33, 44, 55, 66, 77, 88, 99]);
        assert_eq!(&numbers[numbers.len() - 3..], &[11_111, 22_222, 33_333]);
        assert_eq!(numbers.len(), 30);
        assert!(!numbers.contains(&44_444));
        assert!(numbers.iter().all(|n| *n > 10));
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sequences_keep_listed_order() {
        assert_eq!(
            sequences(DAYS_IN_100_YEARS),
            vec![123, 1_234, 12_345, 12_321, 121, 101, 1_001, 2_002]
        );
        assert_eq!(sequences(150), vec![123, 121, 101]);
    }

    #[test]
    fn test_math_numbers() {
        let entries = math_numbers(DAYS_IN_100_YEARS);

        let pi: Vec<u64> = entries.iter().filter(|e| e.kind == MathKind::Pi).map(|e| e.value).collect();
        assert_eq!(pi, vec![314, 3_141, 31_415]);

        let fibonacci: Vec<u64> = entries
            .iter()
            .filter(|e| e.kind == MathKind::Fibonacci)
            .map(|e| e.value)
            .collect();
        assert_eq!(
            fibonacci,
            vec![144, 233, 377, 610, 987, 1_597, 2_584, 4_181, 6_765, 10_946, 17_711, 28_657]
        );

        let squares: Vec<(u64, u64)> = entries
            .iter()
            .filter_map(|e| match e.kind {
                MathKind::Square { root } => Some((root, e.value)),
                _ => None,
            })
            .collect();
        assert_eq!(
            squares,
            vec![
                (12, 144),
                (25, 625),
                (50, 2_500),
                (75, 5_625),
                (100, 10_000),
                (125, 15_625),
                (150, 22_500),
                (175, 30_625),
            ]
        );
        assert_eq!(entries.len(), 23);
    }

    #[test]
    fn test_math_numbers_order_is_pi_fibonacci_squares() {
        let kinds: Vec<&str> = math_numbers(1_000).iter().map(|e| e.kind.slug()).collect();
        assert_eq!(
            kinds,
            vec!["pi", "fibonacci", "fibonacci", "fibonacci", "fibonacci", "fibonacci", "square", "square"]
        );
    }

    #[test]
    fn test_curated_square_roots() {
        assert!(is_curated_square_root(12));
        assert!(is_curated_square_root(25));
        assert!(is_curated_square_root(50));
        assert!(is_curated_square_root(100));
        assert!(is_curated_square_root(175));
        assert!(!is_curated_square_root(11));
        assert!(!is_curated_square_root(13));
        assert!(!is_curated_square_root(99));
    }

    #[test]
    fn test_samples_respect_horizon() {
        assert_eq!(samples_within(&HOURLY_SAMPLES, HOURS_IN_100_YEARS), HOURLY_SAMPLES.to_vec());
        assert_eq!(samples_within(&MINUTE_SAMPLES, MINUTES_IN_100_YEARS), vec![10_000_000, 50_000_000]);
        assert_eq!(samples_within(&SECOND_SAMPLES, SECONDS_IN_100_YEARS), SECOND_SAMPLES.to_vec());
        assert_eq!(weekly_samples(), WEEKLY_SAMPLES.to_vec());
        assert_eq!(monthly_samples(), MONTHLY_SAMPLES.to_vec());
    }

    #[test]
    fn test_horizon_constants() {
        assert_eq!(HOURS_IN_100_YEARS, 876_600);
        assert_eq!(MINUTES_IN_100_YEARS, 52_596_000);
        assert_eq!(SECONDS_IN_100_YEARS, 3_155_760_000);
    }
}
