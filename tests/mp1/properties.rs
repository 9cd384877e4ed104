use approx::assert_relative_eq;
use mpfit::core::parameter::IdentifierOption;
use mpfit::mp1::Mp1;
use ndarray::arr1;
use std::error::Error;

const PARAMETERS: &str = "tests/mp1/test_parameters.json";

#[test]
fn enthalpy_is_energy_plus_flow_work() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[300.0, 450.0, 700.0]);
    let d = arr1(&[990.0, 12.0, 300.0]);
    let e = demo.e_d(t.view(), d.view())?;
    let h = demo.h_d(t.view(), d.view())?;
    let p = demo.p_d(t.view(), d.view())?;
    let expected = &e + &(&p / &d);
    for i in 0..t.len() {
        assert_relative_eq!(h[i], expected[i], max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn heat_capacity_from_energy_and_entropy() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    let (t, d) = (480.0, 150.0);
    let dt = 1e-3;
    let ts = arr1(&[t - dt, t, t + dt]);
    let ds = arr1(&[d; 3]);
    let e = demo.e_d(ts.view(), ds.view())?;
    let s = demo.s_d(ts.view(), ds.view())?;
    let cv = demo.cv_d(ts.view(), ds.view())?;
    // cv = (de/dT)_d = T (ds/dT)_d
    assert_relative_eq!(cv[1], (e[2] - e[0]) / (2.0 * dt), max_relative = 1e-6);
    assert_relative_eq!(cv[1], t * (s[2] - s[0]) / (2.0 * dt), max_relative = 1e-6);
    Ok(())
}

#[test]
fn ideal_gas_properties() -> Result<(), Box<dyn Error>> {
    // without temperature terms the ideal gas has no energy and no heat capacity
    let ideal = Mp1::from_json("ideal", PARAMETERS, IdentifierOption::Name)?;
    let t = arr1(&[0.5, 2.0]);
    let d = arr1(&[0.5, 4.0]);
    assert_eq!(ideal.e_d(t.view(), d.view())?, arr1(&[0.0, 0.0]));
    assert_eq!(ideal.cv_d(t.view(), d.view())?, arr1(&[0.0, 0.0]));
    assert_eq!(ideal.h_d(t.view(), d.view())?, arr1(&[0.25, 1.0]));
    let s = ideal.s_d(t.view(), d.view())?;
    assert_relative_eq!(s[0], -0.5 * 0.5f64.ln(), max_relative = 1e-15);
    assert_relative_eq!(s[1], -0.5 * 4.0f64.ln(), max_relative = 1e-15);
    Ok(())
}

#[test]
fn accessors() -> Result<(), Box<dyn Error>> {
    let demo = Mp1::from_json("demo", PARAMETERS, IdentifierOption::Name)?;
    assert_eq!(demo.mw(), 18.015268);
    assert_eq!(demo.tc(), 647.096);
    assert_eq!(demo.dc(), 322.0);
    assert_eq!(demo.r(), 0.46151805);
    assert_eq!(demo.identifier().formula.as_deref(), Some("H2O"));
    assert_eq!(demo.residual().weighted.len(), 2);
    assert_eq!(
        demo.to_string(),
        "Mp1(Identifier(name=demo, formula=H2O), mw=18.015268, tc=647.096, dc=322, r=0.46151805, weighted_groups=2)"
    );
    Ok(())
}
