//! Randomized positions: whatever the solver plays from them must replay
//! cleanly through the rules oracle. The rng is seeded, so failures reproduce.

mod common;

use common::Replay;
use dobutsu::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn scrambled_setup(rng: &mut StdRng) -> Vec<PieceSetup> {
    use PieceKind::*;

    let mut squares: Vec<Square> = (1..=NUM_ROWS)
        .flat_map(|row| (1..=NUM_COLS).map(move |col| sq(row, col)))
        .collect();
    squares.shuffle(rng);

    // The retail piece set, dealt to random owners and squares.
    let mut kinds = [Lion, Lion, Giraffe, Giraffe, Elephant, Elephant, Chick, Chick];
    kinds.shuffle(rng);

    PieceId::all()
        .zip(kinds)
        .map(|(id, kind)| {
            let owner = if rng.gen() { P0 } else { P1 };
            if rng.gen_ratio(1, 4) {
                PieceSetup::in_hand(id, kind, owner)
            } else {
                PieceSetup::on_board(id, kind, owner, squares.pop().expect("12 squares for 8 pieces"))
            }
        })
        .collect()
}

#[test_log::test]
fn scrambled_positions_replay_cleanly() {
    let mut rng = StdRng::seed_from_u64(0x5eed_d0b0);
    let mut played = 0;

    for round in 0..10 {
        let setup = scrambled_setup(&mut rng);
        let horizon = rng.gen_range(1..=4);
        let problem = TrajectoryProblem {
            setup: setup.clone(),
            constraints: Vec::new(),
            horizon,
        };

        match solve_trajectory(problem) {
            Ok(Some(solution)) => {
                played += 1;
                assert_eq!(solution.moves.len(), horizon as usize, "round {round}");
                let mut replay = Replay::from_setup(&setup);
                for mv in &solution.moves {
                    replay.apply(mv);
                }
            }
            // Positions where a side to move has nothing legal are fine.
            Ok(None) => {}
            Err(error) => panic!("round {round}: backend failure: {error}"),
        }
    }

    assert!(played > 0, "no scrambled position admitted any play");
}

#[test_log::test]
fn scrambled_reachability_witnesses_end_on_the_target() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..6 {
        let setup = scrambled_setup(&mut rng);
        let on_board: Vec<PieceSetup> = setup
            .iter()
            .copied()
            .filter(|piece| matches!(piece.placement, Placement::Board(_)))
            .collect();
        let mover = *on_board
            .choose(&mut rng)
            .expect("some piece starts on the board");
        let target = sq(rng.gen_range(1..=NUM_ROWS), rng.gen_range(1..=NUM_COLS));

        let problem = ReachabilityProblem {
            setup: setup.clone(),
            piece_id: mover.id,
            target,
            owner: mover.owner,
            horizon: 3,
        };

        if let Some(solution) = solve_reachability(&problem).unwrap() {
            let mut replay = Replay::from_setup(&setup);
            for mv in &solution.moves {
                replay.apply(mv);
            }
            let cell = replay.piece(mover.id);
            assert_eq!(cell.loc, common::Loc::On(target));
            assert_eq!(cell.owner, mover.owner);
        }
    }
}
