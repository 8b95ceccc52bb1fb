/// A byte count from an announce request (uploaded, downloaded or left).
///
/// A peer with `left == 0` is a seeder; anything above zero marks a leecher.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct NumberOfBytes(pub i64);
