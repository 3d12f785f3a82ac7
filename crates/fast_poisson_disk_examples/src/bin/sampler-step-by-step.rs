use fast_poisson_disk::prelude::*;
use fast_poisson_disk_examples::{render_points_to_png, PointStyle, RenderConfig};
use glam::DVec2;

const REPORT_EVERY: usize = 250;

fn main() -> anyhow::Result<()> {
    let domain_extent = DVec2::new(160.0, 90.0);
    let config = SamplerConfig::new(domain_extent, 2.0).with_tries(20.0);
    let mut sampler = Sampler::with_seed(config, 7)?;

    // Seed from fixed positions instead of a random one.
    let seeds = [
        DVec2::new(20.0, 20.0),
        DVec2::new(140.0, 70.0),
        DVec2::new(80.0, 45.0),
    ];
    for seed in seeds {
        sampler
            .add_point(seed)
            .ok_or_else(|| anyhow::anyhow!("seed {seed} is outside the domain"))?;
    }
    // The upper bound is exclusive.
    anyhow::ensure!(sampler.add_point(DVec2::new(160.0, 10.0)).is_none());

    let mut steps = 0;
    while sampler.next().is_some() {
        steps += 1;
        if steps % REPORT_EVERY == 0 {
            println!(
                "step {steps}: {} points, {} active",
                sampler.len(),
                sampler.active_len()
            );
        }
    }
    println!("done after {steps} steps with {} points", sampler.len());

    let render = RenderConfig::new((1600, 900), domain_extent).with_background([235, 235, 225]);
    render_points_to_png(
        &[
            (&sampler.points()[seeds.len()..], PointStyle::new([40, 90, 160], 4)),
            (&seeds[..], PointStyle::new([200, 40, 40], 8)),
        ],
        &render,
        "sampler-step-by-step.png",
    )?;
    Ok(())
}
