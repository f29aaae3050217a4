use super::*;

#[test]
fn progress_scales_with_elapsed_time() {
    let mut c = AnimationClock::new(0.0, 1000.0).unwrap();
    assert_eq!(c.progress(0.0), 0.0);
    assert_eq!(c.progress(500.0), 0.5);
    assert_eq!(c.progress(1000.0), 1.0);
    assert_eq!(c.progress(2500.0), 1.0);
}

#[test]
fn progress_is_monotonic() {
    let mut c = AnimationClock::new(100.0, 1000.0).unwrap();
    assert_eq!(c.progress(600.0), 0.5);
    assert_eq!(c.progress(300.0), 0.5);
    assert_eq!(c.progress(50.0), 0.5);
}

#[test]
fn before_start_is_zero() {
    let mut c = AnimationClock::new(1000.0, 500.0).unwrap();
    assert_eq!(c.progress(10.0), 0.0);
    assert_eq!(c.elapsed_ms(10.0), 0.0);
}

#[test]
fn invalid_durations_fail() {
    assert!(AnimationClock::new(0.0, 0.0).is_err());
    assert!(AnimationClock::new(0.0, -5.0).is_err());
    assert!(AnimationClock::new(f64::NAN, 5.0).is_err());
}
