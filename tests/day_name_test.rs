use make_day::DayName;
use quickcheck::TestResult;

#[test]
fn single_digits_are_zero_padded() {
    for n in 0..=9u64 {
        assert_eq!(DayName::from_number(n).as_str(), format!("day0{n}"));
    }
}

#[test]
fn two_digit_days_are_unchanged() {
    assert_eq!(DayName::from_number(10).as_str(), "day10");
    assert_eq!(DayName::from_number(25).as_str(), "day25");
}

#[quickcheck_macros::quickcheck]
fn prop_large_days_keep_every_digit(n: u64) -> TestResult {
    if n < 100 {
        return TestResult::discard();
    }
    let name = DayName::from_number(n);
    TestResult::from_bool(name.as_str() == format!("day{n}"))
}

#[quickcheck_macros::quickcheck]
fn prop_name_is_day_prefix_plus_at_least_two_digits(n: u64) -> bool {
    let name = DayName::from_number(n);
    let digits = name.as_str().strip_prefix("day").unwrap_or_default();
    digits.len() >= 2
        && digits.chars().all(|c| c.is_ascii_digit())
        && digits.parse::<u64>() == Ok(n)
}
