use approx::assert_relative_eq;
use mpfit::core::parameter::IdentifierOption;
use mpfit::core::{DerivativeOrder, FitError};
use mpfit::mp1::Mp1;
use ndarray::{arr1, Array1};
use std::error::Error;

const PARAMETERS: &str = "tests/mp1/test_parameters.json";

#[test]
fn ideal_gas_law() -> Result<(), Box<dyn Error>> {
    let ideal = Mp1::from_json("ideal", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[0.5, 1.0, 300.0]);
    let d = arr1(&[0.5, 2.0, 1.2]);
    let p = ideal.p_d(t.view(), d.view())?;
    assert_eq!(p, arr1(&[0.125, 1.0, 180.0]));
    assert_eq!(ideal.z_d(t.view(), d.view())?, Array1::<f64>::ones(3));
    Ok(())
}

#[test]
fn pressure_from_helmholtz_energy() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[300.0, 450.0, 600.0, 900.0]);
    let d = arr1(&[995.0, 15.0, 400.0, 2.0]);
    let p = demo.p_d(t.view(), d.view())?;
    let a = demo.helmholtz(t.view(), d.view(), DerivativeOrder::First)?;
    for i in 0..t.len() {
        let dd = d[i] / demo.dc();
        let expected = demo.r() * t[i] * d[i] * (1.0 + dd * a.residual.fy[i]);
        assert_relative_eq!(p[i], expected, max_relative = 1e-14);
    }
    Ok(())
}

#[test]
fn compressibility_factor() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[300.0, 450.0, 600.0, 900.0]);
    let d = arr1(&[995.0, 15.0, 400.0, 2.0]);
    let p = demo.p_d(t.view(), d.view())?;
    let z = demo.z_d(t.view(), d.view())?;
    for i in 0..t.len() {
        assert_relative_eq!(z[i], p[i] / (d[i] * demo.r() * t[i]), max_relative = 1e-14);
    }
    assert!(z.iter().any(|&z| (z - 1.0).abs() > 1e-3));
    Ok(())
}

#[test]
fn pressure_is_density_derivative() -> Result<(), Box<dyn Error>> {
    // p = d^2 (dA/dd) at constant T with A = r T a
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let (t, d) = (520.0, 250.0);
    let h = 1e-3;
    let a = |d: f64| -> Result<f64, FitError> {
        let res = demo.helmholtz(arr1(&[t]).view(), arr1(&[d]).view(), DerivativeOrder::Zeroth)?;
        Ok(demo.r() * t * res.total.f[0])
    };
    let dadd = (a(d + h)? - a(d - h)?) / (2.0 * h);
    let p = demo.p_d(arr1(&[t]).view(), arr1(&[d]).view())?;
    assert_relative_eq!(p[0], d * d * dadd, max_relative = 1e-7);
    Ok(())
}

#[test]
fn incompatible_shapes() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[300.0, 400.0]);
    let d = arr1(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        demo.p_d(t.view(), d.view()),
        Err(FitError::IncompatibleShapes(2, 3))
    ));
    Ok(())
}
