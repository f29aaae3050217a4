use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn non_decreasing_on_unit_interval() {
    for ease in Ease::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=200 {
            let v = ease.apply(f64::from(i) / 200.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_of_range_inputs_clamp() {
    assert_eq!(Ease::OutQuart.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuart.apply(2.0), 1.0);
}

#[test]
fn out_cubic_half_way() {
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
    assert_eq!(Ease::OutQuart.apply(0.5), 0.9375);
}
