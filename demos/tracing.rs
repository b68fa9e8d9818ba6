//! Inspect every step of a run, either collected or sent to the logger.

use laguerre_poly::{
    complex, poly,
    roots::{LaguerreConfig, LaguerreStep, LogTrace},
};

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Debug)?;

    // (x - 1)(x - 2)(x - 3)(x + 4i)
    let p = poly![(0.0, -24.0), (-6.0, 44.0), (11.0, -24.0), (-6.0, 4.0), (1.0, 0.0)];
    let config = LaguerreConfig::default().with_epsilon(1E-14);

    let mut history: Vec<LaguerreStep<f64>> = vec![];
    let report = p.laguerre(complex!(-1.0, -1.0), &config, Some(&mut history))?;
    println!("step  root                                            |dx|  |p(x)|");
    for step in &history {
        println!("{step}");
    }
    println!("{:?}", report.termination);

    // the same run, logged instead
    let mut sink = LogTrace::new(log::Level::Info);
    p.laguerre(complex!(-1.0, -1.0), &config, Some(&mut sink))?;
    Ok(())
}
