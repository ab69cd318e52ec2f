use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which search [`Pathfinder`](crate::Pathfinder) runs.
///
/// Selected by name with the literal strings `"A*"` and `"Djikstra"`
/// (case-sensitive); anything else selects A*.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "A*"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "Djikstra"))]
    Dijkstra,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::Dijkstra];

    /// The selector name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Djikstra",
        }
    }

    /// Look up an algorithm by selector name, falling back to A*.
    pub fn from_name(name: &str) -> Self {
        match name {
            "A*" => Algorithm::AStar,
            "Djikstra" => Algorithm::Dijkstra,
            other => {
                log::debug!("unknown algorithm {other:?}, using A*");
                Algorithm::AStar
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(a.name()), a);
            assert_eq!(a.to_string(), a.name());
        }
    }

    #[test]
    fn unknown_names_fall_back_to_astar() {
        assert_eq!(Algorithm::from_name("Dijkstra"), Algorithm::AStar);
        assert_eq!(Algorithm::from_name("djikstra"), Algorithm::AStar);
        assert_eq!(Algorithm::from_name(""), Algorithm::AStar);
        assert_eq!("Djikstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!(Algorithm::default(), Algorithm::AStar);
    }
}
