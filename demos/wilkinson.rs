//! Polish random guesses on a perturbed Wilkinson polynomial, retrying at quad
//! precision whenever double precision cannot meet the tolerance.

use f128::f128;
use fastrand::Rng;
use laguerre_poly::{
    __testing::{widen, wilkinson_10},
    complex,
    roots::LaguerreConfig,
    Poly128, Poly64, RealScalar,
};

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let p64: Poly64 = wilkinson_10();
    let p128: Poly128 = p64.cast();
    let config64 = LaguerreConfig::default().with_epsilon(1E-12).with_max_iter(20);
    let config128 = LaguerreConfig::default()
        .with_epsilon(f128::cast_from_f64(1E-12))
        .with_max_iter(20);

    let mut rng = Rng::with_seed(10);
    for _ in 0..10 {
        let z0 = complex!(rng.f64() * 11.0, rng.f64() - 0.5);
        let report = p64.laguerre(z0, &config64, None)?;
        if !report.failed {
            log::info!(
                "f64:  {z0:.3} -> {:.12} after {} steps",
                report.root,
                report.iterations
            );
            continue;
        }

        log::warn!("f64 did not converge from {z0:.3}, retrying with f128");
        let report = p128.laguerre(widen(&z0), &config128, None)?;
        let root = report.into_root()?;
        log::info!(
            "f128: {z0:.3} -> {:.12}",
            complex!(root.re.cast_to_f64(), root.im.cast_to_f64())
        );
    }
    Ok(())
}
