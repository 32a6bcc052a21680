//! Status lines for lifecycle outcomes that leave no plan to show.

use std::fmt;

use crate::lifecycle::Transition;

/// One italic markdown line describing a [`Transition`].
///
/// ```rust
/// use cram_core::{display::TransitionStatus, Transition};
///
/// let line = TransitionStatus(Transition::Cancelled).to_string();
/// assert_eq!(line, "_Generation cancelled; nothing was saved._\n");
/// ```
pub struct TransitionStatus(pub Transition);

impl fmt::Display for TransitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.0 {
            Transition::Succeeded => "Study plan generated.",
            Transition::Failed => "Study plan generation failed.",
            Transition::Cancelled => "Generation cancelled; nothing was saved.",
            Transition::Discarded => "A superseded generation result was ignored.",
            Transition::Reset => "Plan cleared.",
            Transition::Imported => "Plan imported.",
            Transition::Unchanged => "Nothing to do.",
        };
        writeln!(f, "_{text}_")
    }
}
