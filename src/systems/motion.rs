use crate::entities::traffic::Traffic;
use crate::map::LaneBounds;

/// Advance every traffic entity along its lane. Each archetype evaluates
/// its wrap rule before integrating, so nothing drifts permanently out of
/// the lane window. Runs in every mode; the street never stops.
pub fn run(traffic: &mut [Traffic], dt: f32, bounds: &LaneBounds) {
    for vehicle in traffic.iter_mut() {
        vehicle.update(dt, bounds);
    }
}
