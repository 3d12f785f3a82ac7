use fast_poisson_disk::prelude::*;
use fast_poisson_disk_examples::{render_points_to_png, PointStyle, RenderConfig};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    let domain_extent = DVec2::new(100.0, 100.0);
    let render = RenderConfig::new((800, 800), domain_extent);

    for tries in [3.0, 10.0, 30.0] {
        let strategy = PoissonDiskSampling::new(2.0).with_tries(tries);
        let mut rng = StdRng::seed_from_u64(1234);
        let points: Vec<DVec2> = strategy
            .generate(domain_extent.into(), &mut rng)
            .into_iter()
            .map(DVec2::from)
            .collect();
        println!("tries {tries:>2}: {} points", points.len());

        render_points_to_png(
            &[(points.as_slice(), PointStyle::new([30, 110, 60], 2))],
            &render,
            format!("sampler-tries-{tries}.png"),
        )?;
    }
    Ok(())
}
