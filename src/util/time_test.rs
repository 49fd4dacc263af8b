use super::*;

#[test]
fn epoch_zero_is_midnight() {
    assert_eq!(locale_time(0.0), "00:00:00");
}

#[test]
fn wraps_to_time_of_day() {
    // 12h 34m 56s after midnight, in milliseconds.
    assert_eq!(locale_time(45_296_000.0), "12:34:56");
}

#[test]
fn drops_whole_days() {
    assert_eq!(locale_time(86_400_000.0 + 1_000.0), "00:00:01");
}

#[test]
fn negative_timestamps_wrap_backwards() {
    assert_eq!(locale_time(-1_000.0), "23:59:59");
}

#[test]
fn non_finite_timestamps_render_midnight() {
    assert_eq!(locale_time(f64::NAN), "00:00:00");
    assert_eq!(locale_time(f64::INFINITY), "00:00:00");
}
