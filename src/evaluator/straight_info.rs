/// A run of five consecutive face values, possibly with holes for jokers to fill.
///
/// Values run 1..=14 where 1 is the Ace played low.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StraightInfo {
    pub top: u8,
    pub missing: Vec<u8>,
}

impl StraightInfo {
    /// Highest window whose holes `jokers` can fill, trying top=Ace down to the wheel.
    ///
    /// `present` is indexed by face value; slot 1 should mirror slot 14 so the
    /// Ace can play low.
    pub fn best(present: &[bool; 15], jokers: usize) -> Option<Self> {
        (5u8..=14).rev().find_map(|top| {
            let missing: Vec<u8> =
                (top - 4..=top).rev().filter(|&v| !present[v as usize]).collect();
            (missing.len() <= jokers).then_some(StraightInfo { top, missing })
        })
    }

    /// Face values of the run, top first.
    pub fn values(&self) -> impl Iterator<Item = u8> {
        (self.top - 4..=self.top).rev()
    }

    pub fn is_wheel(&self) -> bool {
        self.top == 5
    }
}
