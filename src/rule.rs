use ca_rules::{ParseLife, ParseRuleError};
use std::str::FromStr;

/// A totalistic Life-like rule, e.g. `B3/S23`.
///
/// Birth and survival conditions are stored as bitmasks indexed by the number
/// of live neighbors, 0 through 8.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Rule {
    /// The next state of a cell, given its current state and its number of
    /// live neighbors.
    pub fn next_state(self, alive: bool, neighbor_count: u32) -> bool {
        if alive {
            self.survival & 1 << neighbor_count != 0
        } else {
            self.birth & 1 << neighbor_count != 0
        }
    }
}

impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        if b.contains(&0) {
            unimplemented!("B0 rules are not yet supported.")
        }
        let birth = b.into_iter().fold(0_u16, |mask, n| mask | 1 << n);
        let survival = s.into_iter().fold(0_u16, |mask, n| mask | 1 << n);
        Rule { birth, survival }
    }
}

impl Default for Rule {
    fn default() -> Self {
        "B3/S23".parse().unwrap()
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse_rule(s)
    }
}
