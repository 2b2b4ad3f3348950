//! Network Parameter Tests
//!
//! Tests for S/Z/Y/T parameter views, reference impedance handling and the
//! scalar projections.

use approx::assert_relative_eq;
use ndarray::{s, Array1, Array2, Array3};
use num_complex::Complex64;
use skrf_params::math::{s2z, z2s};
use skrf_params::{Network, NetworkError, ParamKind, PortImpedance, ProjectionKind};

/// Helper to create a test network with known S-parameters
fn create_simple_network() -> Network {
    let mut s = Array3::<Complex64>::zeros((2, 2, 2));
    s[[0, 0, 0]] = Complex64::new(-0.1, -0.2);
    s[[0, 0, 1]] = Complex64::new(0.7, 0.1);
    s[[0, 1, 0]] = Complex64::new(0.7, 0.1);
    s[[0, 1, 1]] = Complex64::new(-0.2, -0.1);
    s[[1, 0, 0]] = Complex64::new(-0.15, -0.25);
    s[[1, 0, 1]] = Complex64::new(0.65, 0.15);
    s[[1, 1, 0]] = Complex64::new(0.65, 0.15);
    s[[1, 1, 1]] = Complex64::new(-0.25, -0.15);
    let z0 = Array1::from_elem(2, Complex64::new(50.0, 0.0));
    Network::new(vec![1e9, 2e9], s, z0).unwrap()
}

fn assert_tensor_close(a: &Array3<Complex64>, b: &Array3<Complex64>, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(x.re, y.re, epsilon = tol, max_relative = tol);
        assert_relative_eq!(x.im, y.im, epsilon = tol, max_relative = tol);
    }
}

// ============================================================================
// Basic Parameter Access Tests
// ============================================================================

#[test]
fn test_s_parameters() {
    let ntwk = create_simple_network();

    let s = ntwk.s();
    let v = s.value().unwrap();
    assert_eq!(v.shape(), &[2, 2, 2]);
    assert_relative_eq!(v[[0, 0, 0]].re, -0.1, epsilon = 1e-15);
    assert_relative_eq!(v[[0, 0, 0]].im, -0.2, epsilon = 1e-15);
    assert_eq!(s.kind(), ParamKind::S);
}

#[test]
fn test_z_parameters() {
    let ntwk = create_simple_network();

    let z = ntwk.z();
    let z = z.value().unwrap();
    assert_eq!(z.shape(), &[2, 2, 2]);

    // Converting back with the same reference recovers S
    let s_back = z2s(z, &PortImpedance::from(50.0)).unwrap();
    assert_tensor_close(&s_back, ntwk.s().value().unwrap(), 1e-12);
}

#[test]
fn test_y_parameters() {
    let ntwk = create_simple_network();

    let z = ntwk.z();
    let y = ntwk.y();
    let (z, y) = (z.value().unwrap(), y.value().unwrap());

    // Y is the matrix inverse of Z at every frequency
    for f in 0..2usize {
        let prod = z.slice(s![f, .., ..]).dot(&y.slice(s![f, .., ..]));
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[[i, j]].re, expected, epsilon = 1e-10);
                assert_relative_eq!(prod[[i, j]].im, 0.0, epsilon = 1e-10);
            }
        }
    }
}

#[test]
fn test_t_parameters() {
    let ntwk = create_simple_network();

    let t = ntwk.t();
    let t = t.value().unwrap();
    assert_eq!(t.shape(), &[2, 2, 2]);

    let s21 = Complex64::new(0.7, 0.1);
    let t22 = t[[0, 1, 1]];
    assert_relative_eq!(t22.re, s21.inv().re, epsilon = 1e-14);
    assert_relative_eq!(t22.im, s21.inv().im, epsilon = 1e-14);
}

#[test]
fn test_conversions_round_trip() {
    let ntwk = create_simple_network();
    let s = ntwk.s().value().unwrap().clone();

    for kind in [ParamKind::Z, ParamKind::Y, ParamKind::T] {
        let view = ntwk.param(kind);
        let data = view.value().unwrap();
        let back = skrf_params::math::convert(
            data,
            kind,
            ParamKind::S,
            &PortImpedance::from(50.0),
        )
        .unwrap();
        assert_tensor_close(&back, &s, 1e-12);
    }
}

#[test]
fn test_view_values_are_stable() {
    let ntwk = create_simple_network();
    let z = ntwk.z();
    let first = z.value().unwrap().clone();
    let second = z.value().unwrap();
    assert_eq!(&first, second);

    // A fresh view computes the same numbers
    let again = ntwk.z();
    assert_eq!(&first, again.value().unwrap());
}

#[test]
fn test_network_convert() {
    let ntwk = create_simple_network();

    let z = ntwk.convert(ParamKind::S, ParamKind::Z).unwrap();
    assert_tensor_close(&z, ntwk.z().value().unwrap(), 1e-12);

    let y = ntwk.convert(ParamKind::Z, ParamKind::Y).unwrap();
    assert_tensor_close(&y, ntwk.y().value().unwrap(), 1e-10);

    let err = ntwk.convert(ParamKind::Y, ParamKind::T).unwrap_err();
    assert_eq!(
        err,
        NetworkError::UnsupportedConversion {
            from: ParamKind::Y,
            to: ParamKind::T
        }
    );
}

// ============================================================================
// Reference Impedance Tests
// ============================================================================

#[test]
fn test_z0_scalar() {
    let ntwk = Network::new(3usize, vec![0.0; 3], 75.0).unwrap();
    assert_eq!(ntwk.z0().dim(), (3, 1));
    assert_relative_eq!(ntwk.z().get([2, 0, 0]).unwrap().re, 75.0, epsilon = 1e-12);
}

#[test]
fn test_z0_vector() {
    let ntwk = create_simple_network();
    let mut other = ntwk.clone();
    other.set_z0(vec![50.0, 75.0]).unwrap();

    assert_eq!(other.z0()[[1, 1]].re, 75.0);
    // Same S, different reference -> different Z
    let z_a = ntwk.z().get([0, 1, 1]).unwrap();
    let z_b = other.z().get([0, 1, 1]).unwrap();
    assert!((z_a - z_b).norm() > 1.0);
}

#[test]
fn test_z0_complex() {
    // Matched to a complex reference: Z equals z0
    let z0 = Complex64::new(50.0, 10.0);
    let ntwk = Network::new(1usize, 0.0, z0).unwrap();
    let z = ntwk.z().get([0, 0, 0]).unwrap();
    assert_relative_eq!(z.re, 50.0, epsilon = 1e-12);
    assert_relative_eq!(z.im, 10.0, epsilon = 1e-12);
}

#[test]
fn test_z0_full_matches_free_function() {
    let ntwk = create_simple_network();
    let full = Array2::from_shape_fn((2, 2), |(f, p)| Complex64::new(40.0 + 10.0 * (f + p) as f64, 0.0));
    let mut other = ntwk.clone();
    other.set_z0(PortImpedance::Full(full.clone())).unwrap();

    let expected = s2z(ntwk.s().value().unwrap(), &PortImpedance::Full(full)).unwrap();
    assert_tensor_close(other.z().value().unwrap(), &expected, 1e-12);
}

// ============================================================================
// Scalar Projection Tests
// ============================================================================

#[test]
fn test_s_db() {
    let ntwk = create_simple_network();
    let s = ntwk.s();

    // |S11|^2 = 0.05 at the first frequency
    let expected = 10.0 * 0.05_f64.log10();
    assert_relative_eq!(s.db().get([0, 0, 0]).unwrap(), expected, epsilon = 1e-12);
    assert_relative_eq!(s.db20().get([0, 0, 0]).unwrap(), expected, epsilon = 1e-12);
    assert_relative_eq!(s.db10().get([0, 0, 0]).unwrap(), expected / 2.0, epsilon = 1e-12);
    assert_eq!(s.db().unit(), "dB");
}

#[test]
fn test_s_deg() {
    let ntwk = create_simple_network();
    let deg = ntwk.s().deg().port(0, 0).unwrap();
    let expected = (-0.2_f64).atan2(-0.1).to_degrees();
    assert_relative_eq!(deg[0], expected, epsilon = 1e-12);
    assert!(deg.iter().all(|d| (-180.0..=180.0).contains(d)));
}

#[test]
fn test_s_rad() {
    let ntwk = create_simple_network();
    let s = ntwk.s();
    let rad = s.rad().value().unwrap();
    let deg = s.deg().value().unwrap();
    for (r, d) in rad.iter().zip(deg.iter()) {
        assert_relative_eq!(r.to_degrees(), *d, epsilon = 1e-10);
    }
}

#[test]
fn test_s_re_im_mag() {
    let ntwk = create_simple_network();
    let s = ntwk.s();
    assert_relative_eq!(s.re().get([1, 0, 1]).unwrap(), 0.65);
    assert_relative_eq!(s.im().get([1, 0, 1]).unwrap(), 0.15);
    assert_relative_eq!(
        s.mag().get([1, 0, 1]).unwrap(),
        Complex64::new(0.65, 0.15).norm(),
        epsilon = 1e-15
    );
    assert_eq!(s.project(ProjectionKind::Im).kind(), ProjectionKind::Im);
}

// ============================================================================
// Indexing Tests
// ============================================================================

#[test]
fn test_frequency_access() {
    let ntwk = create_simple_network();
    let m = ntwk.s().freq(1).unwrap();
    assert_eq!(m.dim(), (2, 2));
    assert_relative_eq!(m[[1, 1]].re, -0.25);
}

#[test]
fn test_slice_access() {
    let ntwk = create_simple_network();
    let s = ntwk.s();
    let s21 = s.slice(s![.., 1usize, 0usize]).unwrap();
    assert_eq!(s21.len(), 2);
    assert_relative_eq!(s21[1].re, 0.65);
}

#[test]
fn test_nports_nfreq() {
    let ntwk = create_simple_network();
    assert_eq!(ntwk.nports(), 2);
    assert_eq!(ntwk.nfreq(), 2);
    assert_eq!(ntwk.z().nports(), 2);
}

#[test]
fn test_t_on_three_port() {
    let ntwk = Network::new(1usize, Array3::<Complex64>::zeros((1, 3, 3)), 50.0).unwrap();
    let err = ntwk.t().value().unwrap_err();
    assert!(matches!(err, NetworkError::Dimension { expected: 2, actual: 3, .. }));
    // Projections surface the same error
    assert!(ntwk.t().db().value().is_err());
}
