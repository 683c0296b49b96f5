//! Property tests over random button scripts

use proptest::prelude::*;

use super::collision::annihilate;
use super::*;
use crate::consts::WIDTH;
use crate::tuning::Tuning;

fn fast_tuning(obstacle_base_period: u32, missile_period: u32) -> Tuning {
    Tuning {
        obstacle_base_period,
        missile_period,
        ramp_interval: 50,
        ..Tuning::default()
    }
}

fn input_for(press: Option<usize>) -> TickInput {
    match press.and_then(|i| Button::PRIORITY.get(i).copied()) {
        Some(button) => TickInput::press(button),
        None => TickInput::default(),
    }
}

fn presses() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::weighted(0.3, 0usize..4), 1..1500)
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::Rock), Just(Cell::AmmoPickup)]
}

proptest! {
    #[test]
    fn player_invariants_hold(
        script in presses(),
        base in 1u32..20,
        missile_period in 1u32..10,
    ) {
        let tuning = fast_tuning(base, missile_period);
        let mut state = GameState::new(tuning);
        let mut shields = state.player.shields;

        for press in script {
            let out = tick(&mut state, &input_for(press));
            let p = state.player;

            prop_assert!(p.ammo <= state.tuning.ammo_cap);
            prop_assert_eq!(p.destroyed, p.shields == 0);
            if out.restarted {
                prop_assert_eq!(&state, &GameState::new(tuning));
            } else {
                prop_assert!(p.shields <= shields);
            }
            shields = p.shields;

            for (_, lane) in state.lanes.iter() {
                prop_assert_eq!(lane.cells().len(), WIDTH);
            }
            for (_, track) in state.missiles.iter() {
                prop_assert_eq!(track.flags().len(), WIDTH);
                prop_assert!(!track.is_present(0));
            }
        }
    }

    #[test]
    fn pattern_index_always_in_catalog(seeds in prop::collection::vec(any::<u64>(), 1..50)) {
        let mut g = ObstacleGenerator::new();
        let mut source = ScriptedSeeds::new(&seeds);
        for _ in 0..seeds.len() * 8 {
            g.next_column(0, &mut source);
            prop_assert!(g.selected.get() < crate::consts::PATTERN_COUNT);
        }
    }

    #[test]
    fn annihilation_is_mutual(
        cells in prop::collection::vec(cell(), WIDTH),
        flags in prop::collection::vec(any::<bool>(), WIDTH),
    ) {
        let mut lane = LaneBuffer::new();
        let mut track = MissileTrack::new();
        for i in 0..WIDTH {
            lane.set(i, cells[i]);
            if flags[i] {
                track.set(i);
            }
        }
        let rocks_before = lane.cells().iter().filter(|c| **c == Cell::Rock).count();
        let missiles_before = track.count();

        let hits = usize::from(annihilate(&mut lane, &mut track));
        let rocks_after = lane.cells().iter().filter(|c| **c == Cell::Rock).count();

        prop_assert_eq!(rocks_before - rocks_after, hits);
        prop_assert_eq!(missiles_before - track.count(), hits);
        for i in 0..WIDTH {
            prop_assert!(!(track.is_present(i) && lane.get(i) == Some(Cell::Rock)));
            if cells[i] != Cell::Rock {
                prop_assert_eq!(lane.get(i), Some(cells[i]));
            }
        }
    }

    #[test]
    fn obstacle_period_non_increasing(a in any::<u64>(), b in any::<u64>(), step in 0u32..600) {
        let tuning = Tuning { ramp_step: step, ..Tuning::default() };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tuning.obstacle_period(hi) <= tuning.obstacle_period(lo));
        prop_assert!(tuning.obstacle_period(hi) >= tuning.obstacle_min_period);
    }
}
