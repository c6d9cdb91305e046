//! Activation intervals
//!
//! A boundary condition is enforced only while the simulation time lies in
//! its activation interval. Configured as a 2-element array `[begin, end]`;
//! the keyword `"End"` stands for an effectively unbounded right edge.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Right edge used for "until the end of the simulation".
pub const UNBOUNDED_END: f64 = 1e30;

/// Closed time interval during which a condition is enforced.
///
/// An inverted interval (begin > end) is accepted as configured and simply
/// never contains any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationInterval {
    pub begin: f64,
    pub end: f64,
}

impl ActivationInterval {
    pub fn new(begin: f64, end: f64) -> Self {
        Self { begin, end }
    }

    /// Inclusive membership test
    pub fn contains(&self, time: f64) -> bool {
        self.begin <= time && time <= self.end
    }
}

impl Default for ActivationInterval {
    /// Effectively always active: `[0.0, 1e30]`
    fn default() -> Self {
        Self::new(0.0, UNBOUNDED_END)
    }
}

impl<'de> Deserialize<'de> for ActivationInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Bound {
            Number(f64),
            Keyword(String),
        }

        fn resolve<E: de::Error>(bound: Bound) -> Result<f64, E> {
            match bound {
                Bound::Number(v) => Ok(v),
                Bound::Keyword(s) if s == "End" => Ok(UNBOUNDED_END),
                Bound::Keyword(s) => Err(E::custom(format!(
                    "interval bound must be a number or \"End\", got {:?}",
                    s
                ))),
            }
        }

        let [begin, end] = <[Bound; 2]>::deserialize(deserializer)?;
        Ok(ActivationInterval::new(resolve(begin)?, resolve(end)?))
    }
}
