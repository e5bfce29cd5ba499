// src/main.rs
use anyhow::{anyhow, Context, Result};
use ndarray::Array2;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use seiswiggle::section::{traces, Scene, SessionConfig, WiggleOptions};
use seiswiggle::viewer;
const SAMPLES: usize = 1000;
const TRACES: usize = 100;
/// Standard-normal noise section.
fn gaussian_section(rows: usize, cols: usize, rng: &mut StdRng) -> Result<Array2<f64>> {
    let normal = Normal::new(0.0, 1.0).context("building standard normal distribution")?;
    Ok(Array2::from_shape_simple_fn((rows, cols), || normal.sample(&mut *rng)))
}
fn main() -> Result<()> {
    env_logger::init();
    let mut rng = StdRng::from_entropy();
    let data = gaussian_section(SAMPLES, TRACES, &mut rng)?;
    let mut scene = Scene::new();
    traces(
        &mut scene,
        data.view(),
        None,
        None,
        &WiggleOptions::default(),
        &SessionConfig::default(),
    )
    .context("laying out demo section")?;
    viewer::show(scene, "seiswiggle").map_err(|e| anyhow!("viewer failed: {e}"))
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn demo_section_has_requested_shape_and_spread() {
        let mut rng = StdRng::seed_from_u64(11);
        let data = gaussian_section(400, 5, &mut rng).unwrap();
        assert_eq!(data.dim(), (400, 5));
        let std = data.std(0.0);
        assert!((0.8..1.2).contains(&std), "std = {std}");
    }
}
