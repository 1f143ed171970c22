//! Bouncing Cubes headless runner
//!
//! Drives the demo with a synthetic 60 Hz clock, logs what happens and prints
//! the final object states as JSON.
//!
//! Usage: `bouncing-cubes [CONFIG.json] [FRAMES]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use bouncing_cubes::sim::SimEvent;
    use bouncing_cubes::{Demo, SimConfig};

    env_logger::init();
    log::info!("Bouncing Cubes (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SimConfig::default(),
    };
    let frames: u32 = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid frame count {n:?}"))?,
        None => 3600,
    };

    let mut demo = Demo::new(config).context("starting demo")?;
    let (mut bounces, mut swaps, mut spawns) = (0usize, 0usize, 0usize);

    for n in 1..=frames {
        let frame = demo.frame(n as f64 * 1000.0 / 60.0);
        for event in &frame.events {
            match event {
                SimEvent::Bounced { .. } => bounces += 1,
                SimEvent::TextureChanged { id, to, .. } => {
                    swaps += 1;
                    log::info!(
                        "Object {} now wears {}",
                        id,
                        demo.texture_name(*to).unwrap_or("?")
                    );
                }
                SimEvent::Spawned { parent, child, size } => {
                    spawns += 1;
                    log::info!("Object {} split off {} at size {}", parent, child, size);
                }
                SimEvent::Saturated { live } => {
                    log::info!("Switching to plane geometry ({} objects)", live);
                }
            }
        }
    }

    let sim = demo.simulation();
    log::info!(
        "Ran {} frames: {} bounces, {} texture swaps, {} spawns, {} live",
        sim.frame_index(),
        bounces,
        swaps,
        spawns,
        sim.live_count()
    );

    let snapshot = serde_json::to_string_pretty(sim.objects()).context("serializing objects")?;
    println!("{snapshot}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; the host page drives `Demo::frame`
}
