//! Missile/rock annihilation and the player's collide cell
//!
//! Annihilation runs across the full lane width before the collide cell is
//! read, so the report reflects a single coherent snapshot of the tick.

use serde::{Deserialize, Serialize};

use super::lane::LaneBuffer;
use super::missile::MissileTrack;
use super::state::{Cell, Lane, PerLane};
use crate::consts::WIDTH;

/// Result of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionReport {
    /// Rock/missile pairs destroyed in each lane
    pub annihilated: PerLane<u8>,
    /// Lane the player occupied when the collide cell was read
    pub lane: Lane,
    /// What that lane exposes at index 0
    pub collide_with: Cell,
}

/// Clear every rock that shares an index with a missile, along with the
/// missile. Returns the number of pairs removed.
pub fn annihilate(lane: &mut LaneBuffer, track: &mut MissileTrack) -> u8 {
    let mut hits = 0;
    for i in 0..WIDTH {
        if track.is_present(i) && lane.get(i) == Some(Cell::Rock) {
            track.clear(i);
            lane.clear(i);
            hits += 1;
        }
    }
    hits
}

/// Run annihilation in both lanes, then report the player's collide cell
pub fn resolve(
    lanes: &mut PerLane<LaneBuffer>,
    tracks: &mut PerLane<MissileTrack>,
    player_lane: Lane,
) -> CollisionReport {
    let mut annihilated = PerLane::<u8>::default();
    for lane in Lane::ALL {
        let hits = annihilate(&mut lanes[lane], &mut tracks[lane]);
        if hits > 0 {
            log::debug!("{} rock(s) destroyed in {:?} lane", hits, lane);
        }
        annihilated[lane] = hits;
    }

    CollisionReport {
        annihilated,
        lane: player_lane,
        collide_with: lanes[player_lane].leading(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missile_and_rock_clear_together() {
        let mut lanes = PerLane::<LaneBuffer>::default();
        let mut tracks = PerLane::<MissileTrack>::default();
        lanes.bottom.set(7, Cell::Rock);
        tracks.bottom.set(7);
        // A missile beside a rock does nothing
        lanes.top.set(4, Cell::Rock);
        tracks.top.set(5);

        let report = resolve(&mut lanes, &mut tracks, Lane::Top);
        assert_eq!(report.annihilated, PerLane::new(0, 1));
        assert_eq!(lanes.bottom.get(7), Some(Cell::Empty));
        assert!(!tracks.bottom.is_present(7));
        assert_eq!(lanes.top.get(4), Some(Cell::Rock));
        assert!(tracks.top.is_present(5));
    }

    #[test]
    fn test_missile_passes_over_pickup() {
        let mut lanes = PerLane::<LaneBuffer>::default();
        let mut tracks = PerLane::<MissileTrack>::default();
        lanes.top.set(2, Cell::AmmoPickup);
        tracks.top.set(2);

        let report = resolve(&mut lanes, &mut tracks, Lane::Top);
        assert_eq!(report.annihilated.top, 0);
        assert_eq!(lanes.top.get(2), Some(Cell::AmmoPickup));
        assert!(tracks.top.is_present(2));
    }

    #[test]
    fn test_reports_player_lane_leading_cell() {
        let mut lanes = PerLane::<LaneBuffer>::default();
        let mut tracks = PerLane::<MissileTrack>::default();
        lanes.top.set(0, Cell::Rock);
        lanes.bottom.set(0, Cell::AmmoPickup);

        let top = resolve(&mut lanes, &mut tracks, Lane::Top);
        assert_eq!(top.collide_with, Cell::Rock);
        assert_eq!(top.lane, Lane::Top);

        let bottom = resolve(&mut lanes, &mut tracks, Lane::Bottom);
        assert_eq!(bottom.collide_with, Cell::AmmoPickup);
    }

    #[test]
    fn test_annihilation_precedes_report() {
        let mut lanes = PerLane::<LaneBuffer>::default();
        let mut tracks = PerLane::<MissileTrack>::default();
        lanes.top.set(0, Cell::Rock);
        tracks.top.set(0);

        let report = resolve(&mut lanes, &mut tracks, Lane::Top);
        assert_eq!(report.collide_with, Cell::Empty);
    }
}
