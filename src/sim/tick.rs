//! Per-frame driver
//!
//! Steps every live object once, in creation order, then runs its spawn and
//! texture triggers.

use super::object::Axis;
use super::projection::BoundsProjector;
use super::state::{SimEvent, Simulation};
use super::step::{step, try_change_texture, try_spawn};
use crate::settings::ChildActivation;

/// Advance the whole simulation by one frame of `dt` seconds
pub fn tick<P: BoundsProjector + ?Sized>(
    sim: &mut Simulation,
    dt: f32,
    projector: &P,
) -> Vec<SimEvent> {
    sim.frame_index += 1;
    let mut events = Vec::new();
    let live_at_start = sim.objects.len();

    let mut i = 0;
    loop {
        // Children pushed below extend the walk only in same-frame mode
        let limit = match sim.config.child_activation {
            ChildActivation::SameFrame => sim.objects.len(),
            ChildActivation::NextFrame => live_at_start,
        };
        if i >= limit {
            break;
        }

        let population = sim.population();
        let object = &mut sim.objects[i];
        let outcome = step(object, dt, projector, population, &mut sim.rng);
        for axis in Axis::BOTH {
            if outcome.bounced(axis) {
                let count = object.bounce_count[axis.index()];
                log::debug!("Object {} bounced on {:?} ({})", object.id, axis, count);
                events.push(SimEvent::Bounced {
                    id: object.id,
                    axis,
                    count,
                });
            }
        }

        let child_id = sim.next_id;
        if let Some(child) = try_spawn(&mut sim.objects[i], population, &sim.config, child_id) {
            sim.next_id += 1;
            let parent = sim.objects[i].id;
            log::debug!("Object {} spawned {} (size {})", parent, child.id, child.size);
            events.push(SimEvent::Spawned {
                parent,
                child: child.id,
                size: child.size,
            });
            sim.objects.push(child);
        }

        let object = &mut sim.objects[i];
        if let Some((from, to)) = try_change_texture(object, &sim.config, &mut sim.rng) {
            log::debug!("Object {} texture {} -> {}", object.id, from, to);
            events.push(SimEvent::TextureChanged {
                id: object.id,
                from,
                to,
            });
        }

        i += 1;
    }

    if !sim.saturated && sim.is_saturated() {
        sim.saturated = true;
        let live = sim.objects.len();
        log::info!("Population saturated at {} objects (frame {})", live, sim.frame_index);
        events.push(SimEvent::Saturated { live });
    }

    events
}
