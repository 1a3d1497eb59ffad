/// Half-move index into a trajectory. Index 0 is the first mover's first action;
/// a horizon of N admits states at 0..=N and moves at 0..N.
pub type TimeStep = usize;

/// The caller-supplied upper bound on the number of half-moves.
pub type Horizon = u32;
