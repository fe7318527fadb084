use super::*;

#[test]
fn test_mse_known_value() {
    let y_true = [7.0, 6.0, 8.0, 7.0, 5.0];
    let y_pred = [7.0, 6.0, 7.0, 7.0, 6.0];

    let error = mse(&y_pred, &y_true).expect("valid shapes");
    assert!((error - 0.4).abs() < 1e-12);
}

#[test]
fn test_mse_zero_for_identical() {
    let y = [7.0, 6.0, 8.0, 7.0, 5.0];
    assert_eq!(mse(&y, &y).expect("valid shapes"), 0.0);
}

#[test]
fn test_mse_positive_for_any_difference() {
    let y_true = [1.0, 2.0, 3.0];
    let y_pred = [1.0, 2.0, 3.001];
    assert!(mse(&y_pred, &y_true).expect("valid shapes") > 0.0);
}

#[test]
fn test_mse_shape_mismatch() {
    let result = mse(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(DormirError::ShapeMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_mse_rejects_empty() {
    let result = mse(&[], &[]);
    assert!(matches!(result, Err(DormirError::ShapeMismatch { .. })));
}

#[test]
fn test_rmse_is_sqrt_of_mse() {
    let y_true = [7.0, 6.0, 8.0, 7.0, 5.0];
    let y_pred = [7.0, 6.0, 7.0, 7.0, 6.0];

    let root = rmse(&y_pred, &y_true).expect("valid shapes");
    assert!((root - 0.4_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_mae_known_value() {
    let y_true = [7.0, 6.0, 8.0, 7.0, 5.0];
    let y_pred = [7.0, 6.0, 7.0, 7.0, 6.0];

    let error = mae(&y_pred, &y_true).expect("valid shapes");
    assert!((error - 0.4).abs() < 1e-12);
}

#[test]
fn test_mae_zero_for_identical() {
    let y = [1.5, 2.5, 3.5];
    assert_eq!(mae(&y, &y).expect("valid shapes"), 0.0);
}

#[test]
fn test_r_squared_perfect_fit() {
    let y = [7.0, 6.0, 8.0, 7.0, 5.0];
    let r2 = r_squared(&y, &y).expect("positive variance");
    assert!((r2 - 1.0).abs() < 1e-12);
}

#[test]
fn test_r_squared_known_value() {
    let y_true = [7.0, 6.0, 8.0, 7.0, 5.0];
    let y_pred = [7.0, 6.0, 7.0, 7.0, 6.0];

    let r2 = r_squared(&y_pred, &y_true).expect("positive variance");
    // SS_res = 2.0, SS_tot = 5.2 about the mean 6.6.
    assert!((r2 - (1.0 - 2.0 / 5.2)).abs() < 1e-12);
    assert!(r2 <= 1.0);
}

#[test]
fn test_r_squared_negative_for_bad_predictions() {
    let y_true = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y_pred = [10.0, 20.0, 30.0, 40.0, 50.0];

    let r2 = r_squared(&y_pred, &y_true).expect("positive variance");
    assert!(r2 < 0.0);
}

#[test]
fn test_r_squared_zero_variance_is_degenerate() {
    let y_true = [7.0, 7.0, 7.0];
    let y_pred = [6.0, 7.0, 8.0];

    let result = r_squared(&y_pred, &y_true);
    assert!(matches!(result, Err(DormirError::DegenerateInput { .. })));
}

#[test]
fn test_r_squared_shape_mismatch() {
    let result = r_squared(&[1.0], &[1.0, 2.0]);
    assert!(matches!(result, Err(DormirError::ShapeMismatch { .. })));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn mse_is_non_negative(
            pairs in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 1..32)
        ) {
            let y_pred: Vec<f64> = pairs.iter().map(|(p, _)| *p).collect();
            let y_true: Vec<f64> = pairs.iter().map(|(_, t)| *t).collect();
            let error = mse(&y_pred, &y_true).expect("equal non-empty lengths");
            prop_assert!(error >= 0.0);
        }

        #[test]
        fn mse_of_identical_sequences_is_zero(
            y in prop::collection::vec(-100.0..100.0f64, 1..32)
        ) {
            let error = mse(&y, &y).expect("equal non-empty lengths");
            prop_assert!(error.abs() < 1e-9);
        }

        #[test]
        fn r_squared_never_exceeds_one(
            pairs in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..32)
        ) {
            let y_pred: Vec<f64> = pairs.iter().map(|(p, _)| *p).collect();
            let y_true: Vec<f64> = pairs.iter().map(|(_, t)| *t).collect();
            match r_squared(&y_pred, &y_true) {
                Ok(r2) => prop_assert!(r2 <= 1.0 + 1e-9),
                Err(DormirError::DegenerateInput { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        #[test]
        fn accuracy_stays_in_unit_interval(
            pairs in prop::collection::vec((0..10i64, 0..10i64), 1..32)
        ) {
            let y_pred: Vec<i64> = pairs.iter().map(|(p, _)| *p).collect();
            let y_true: Vec<i64> = pairs.iter().map(|(_, t)| *t).collect();
            let acc = classification::accuracy(&y_pred, &y_true)
                .expect("equal non-empty lengths");
            prop_assert!((0.0..=1.0).contains(&acc));
        }
    }
}
