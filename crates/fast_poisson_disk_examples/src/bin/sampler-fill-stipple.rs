use fast_poisson_disk::prelude::*;
use fast_poisson_disk_examples::{render_points_to_png, PointStyle, RenderConfig};
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    let domain_extent = DVec2::new(100.0, 100.0);
    let config = SamplerConfig::new(domain_extent, 1.5);

    let mut sampler = Sampler::with_seed(config, 42)?;
    let count = sampler.fill().len();
    println!(
        "{} points, radius {}, {} tries per point",
        count,
        config.radius,
        sampler.max_tries()
    );

    let render = RenderConfig::new((1000, 1000), domain_extent);
    render_points_to_png(
        &[(sampler.points(), PointStyle::new([20, 20, 20], 3))],
        &render,
        "sampler-fill-stipple.png",
    )?;
    Ok(())
}
