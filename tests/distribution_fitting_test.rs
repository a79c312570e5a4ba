// tests/distribution_fitting_test.rs

use eda_plots::data_analysis::box_cox::{self, LambdaGrid};
use eda_plots::data_analysis::distributions::{
    normal_ppcc, normal_quantile, tukey_lambda_ppcc_scan, uniform_order_medians, ParameterGrid,
};
use eda_plots::data_analysis::weibull::{plotting_positions, weibull_fit};

/// Sample laid out at the exact quantiles of the target distribution, so fits
/// recover the parameters without sampling noise.
fn weibull_quantile_sample(n: usize, shape: f64, scale: f64) -> Vec<f64> {
    plotting_positions(n)
        .unwrap()
        .into_iter()
        .map(|p| scale * (-(1.0 - p).ln()).powf(1.0 / shape))
        .collect()
}

#[test]
fn weibull_fit_recovers_shape_and_scale_across_parameter_values() {
    for &(shape, scale) in &[(0.5, 1.0), (1.0, 3.0), (2.0, 10.0), (5.0, 0.2)] {
        let sample = weibull_quantile_sample(200, shape, scale);
        let fit = weibull_fit(&sample).unwrap();
        assert!(
            (fit.shape - shape).abs() / shape < 0.02,
            "shape {shape}: fitted {}",
            fit.shape
        );
        assert!(
            (fit.scale - scale).abs() / scale < 0.02,
            "scale {scale}: fitted {}",
            fit.scale
        );
        assert!(fit.r > 0.999);
    }
}

#[test]
fn normal_quantile_sample_has_a_near_perfect_ppcc() {
    let sample: Vec<f64> = uniform_order_medians(80)
        .unwrap()
        .into_iter()
        .map(|p| 10.0 + 2.0 * normal_quantile(p).unwrap())
        .collect();
    assert!(normal_ppcc(&sample).unwrap() > 0.9999);
}

#[test]
fn box_cox_normality_scan_undoes_an_exponentiation() {
    // exp of a normal quantile pattern is log-normal; the scan should pick a
    // lambda near zero (the log transform).
    let sample: Vec<f64> = uniform_order_medians(60)
        .unwrap()
        .into_iter()
        .map(|p| normal_quantile(p).unwrap().exp())
        .collect();
    let scan = box_cox::normality_scan(&sample, &box_cox::default_lambda_grid()).unwrap();
    assert!(
        scan.optimal_lambda.abs() < 0.15,
        "optimum {}",
        scan.optimal_lambda
    );
    assert!(scan.optimal_correlation > 0.999);
}

#[test]
fn box_cox_linearity_scan_undoes_a_square() {
    // y = x^2 linearizes under lambda = 2.
    let x: Vec<f64> = (1..=50).map(|i| i as f64 * 0.2).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();
    let grid = LambdaGrid {
        min: -2.0,
        max: 3.0,
        points: 101,
    };
    let scan = box_cox::linearity_scan(&x, &y, &grid).unwrap();
    assert!(
        (scan.optimal_lambda - 2.0).abs() < 0.11,
        "optimum {}",
        scan.optimal_lambda
    );
}

#[test]
fn ppcc_scan_separates_heavy_and_light_tails() {
    // Logistic quantile spacing should give an optimum near lambda = 0,
    // uniform spacing near lambda = 1.
    let logistic: Vec<f64> = uniform_order_medians(60)
        .unwrap()
        .into_iter()
        .map(|p| (p / (1.0 - p)).ln())
        .collect();
    let uniform: Vec<f64> = uniform_order_medians(60).unwrap();

    let grid = ParameterGrid {
        min: -2.0,
        max: 2.0,
        points: 161,
    };
    let logistic_scan = tukey_lambda_ppcc_scan(&logistic, &grid).unwrap();
    let uniform_scan = tukey_lambda_ppcc_scan(&uniform, &grid).unwrap();

    assert!(
        logistic_scan.optimal_shape.abs() < 0.1,
        "logistic optimum {}",
        logistic_scan.optimal_shape
    );
    assert!(
        (uniform_scan.optimal_shape - 1.0).abs() < 0.1,
        "uniform optimum {}",
        uniform_scan.optimal_shape
    );
}

// tests/distribution_fitting_test.rs
