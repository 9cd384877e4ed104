use approx::assert_relative_eq;
use mpfit::core::parameter::IdentifierOption;
use mpfit::core::{DerivativeOrder, FitError};
use mpfit::mp1::Mp1;
use ndarray::arr1;
use std::error::Error;

const PARAMETERS: &str = "tests/mp1/test_parameters.json";

#[test]
fn ideal_gas_only() -> Result<(), Box<dyn Error>> {
    let ideal = Mp1::from_json("ideal", PARAMETERS, IdentifierOption::Name)?;
    // tt = 2, dd = 0.5
    let t = arr1(&[0.5]);
    let d = arr1(&[0.5]);
    let a = ideal.helmholtz(t.view(), d.view(), DerivativeOrder::Second)?;
    assert_relative_eq!(a.ideal_gas.f[0], -0.693147, epsilon = 1e-6);
    assert_eq!(a.ideal_gas.fy[0], 2.0);
    assert_eq!(a.ideal_gas.fx[0], 0.0);
    assert_eq!(a.ideal_gas.fxx[0], 0.0);
    assert_eq!(a.ideal_gas.fyy[0], -4.0);
    assert!(a.residual.f.iter().all(|&v| v == 0.0));
    assert_eq!(a.total, a.ideal_gas);
    Ok(())
}

#[test]
fn total_is_sum_of_parts() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[300.0, 500.0, 700.0]);
    let d = arr1(&[990.0, 5.0, 150.0]);
    let a = demo.helmholtz(t.view(), d.view(), DerivativeOrder::Second)?;
    assert_eq!(a.total.f, &a.ideal_gas.f + &a.residual.f);
    assert_eq!(a.total.fxy, &a.ideal_gas.fxy + &a.residual.fxy);
    assert!(a.ideal_gas.fxy.iter().all(|&v| v == 0.0));
    Ok(())
}

#[test]
fn derivatives_match_finite_differences() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let (tc, dc) = (demo.tc(), demo.dc());
    let (tt, dd) = (1.4, 0.8);
    let h = 1e-5;

    // evaluates the total reduced Helmholtz energy at (tt, dd)
    let a = |tt: f64, dd: f64| -> Result<f64, FitError> {
        let t = arr1(&[tc / tt]);
        let d = arr1(&[dd * dc]);
        Ok(demo.helmholtz(t.view(), d.view(), DerivativeOrder::Zeroth)?.total.f[0])
    };
    let exact = demo
        .helmholtz(
            arr1(&[tc / tt]).view(),
            arr1(&[dd * dc]).view(),
            DerivativeOrder::Second,
        )?
        .total;

    let at = (a(tt + h, dd)? - a(tt - h, dd)?) / (2.0 * h);
    let ad = (a(tt, dd + h)? - a(tt, dd - h)?) / (2.0 * h);
    let h = 1e-4;
    let upper = a(tt + h, dd + h)? - a(tt + h, dd - h)?;
    let lower = a(tt - h, dd + h)? - a(tt - h, dd - h)?;
    let atd = (upper - lower) / (4.0 * h * h);
    assert_relative_eq!(exact.fx[0], at, max_relative = 1e-7);
    assert_relative_eq!(exact.fy[0], ad, max_relative = 1e-7);
    assert_relative_eq!(exact.fxy[0], atd, max_relative = 1e-4);
    Ok(())
}

#[test]
fn requested_order_only() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[350.0, 450.0]);
    let d = arr1(&[800.0, 20.0]);
    let a = demo.helmholtz(t.view(), d.view(), DerivativeOrder::First)?;
    assert!(a.total.fxx.iter().all(|&v| v == 0.0));
    assert!(a.total.fyy.iter().all(|&v| v == 0.0));
    assert!(a.total.fx.iter().all(|&v| v != 0.0));
    Ok(())
}

#[test]
fn invalid_records() {
    assert!(matches!(
        Mp1::from_json("broken", PARAMETERS, IdentifierOption::Name),
        Err(FitError::UnsortedCoefficients(_))
    ));
    assert!(matches!(
        Mp1::from_json("steam", PARAMETERS, IdentifierOption::Name),
        Err(FitError::Parameter(_))
    ));
}
