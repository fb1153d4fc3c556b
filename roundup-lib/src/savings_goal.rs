use serde::{Deserialize, Serialize};

use crate::Money;

/// A named amount the account holder is saving toward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    /// The unique ID associated with the goal
    pub savings_goal_uid: String,

    /// The name of the goal
    pub name: String,

    /// The amount saved so far
    pub total_saved: Money,

    /// The amount being saved toward. Goals without a target read as zero.
    #[serde(default)]
    pub target: Money,
}

impl SavingsGoal {
    /// The share of the target saved so far, as a percentage in `[0, 100]`.
    ///
    /// A goal with a zero target is reported as 0%, and a goal that has been
    /// overshot is reported as 100%.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn percentage_saved(&self) -> f64 {
        let target = self.target.to_major_units();
        if target == 0.0 {
            return 0.0;
        }

        let ratio = self.total_saved.to_major_units() / target;
        if ratio.is_nan() {
            return 0.0;
        }

        ratio.clamp(0.0, 1.0) * 100.0
    }
}
