//! Display implementations for domain models.
//!
//! Plans render as markdown: the title as a level-one header, each week as a
//! level-two header with its progress, each day as a level-three header and
//! each task as a list item with a status icon and its one-based position.

use std::fmt;

use crate::models::{ComfortLevel, PlanProgress, StudyPlan, Task};

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tasks, {}%",
            self.completed_tasks,
            self.total_tasks,
            self.percent()
        )
    }
}

impl Task {
    /// Status icon for the task's completion flag.
    ///
    /// ```rust
    /// use cram_core::models::Task;
    ///
    /// let mut task = Task {
    ///     title: "Flashcards".to_string(),
    ///     description: "Review vocabulary.".to_string(),
    ///     completed: false,
    /// };
    /// assert_eq!(task.icon(), "○");
    /// task.completed = true;
    /// assert_eq!(task.icon(), "✓");
    /// ```
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Progress: {}", PlanProgress::from(self))?;

        if self.weeks.is_empty() {
            writeln!(f, "\nNo weeks in this plan.")?;
            return Ok(());
        }

        for (w, week) in self.weeks.iter().enumerate() {
            writeln!(
                f,
                "\n## Week {}: {} ({})",
                week.week_number,
                week.theme,
                PlanProgress::from(week)
            )?;

            for (d, day) in week.daily_tasks.iter().enumerate() {
                writeln!(f, "\n### {}", day.label)?;
                writeln!(f)?;
                if day.tasks.is_empty() {
                    writeln!(f, "_Rest day_")?;
                }
                for (t, task) in day.tasks.iter().enumerate() {
                    writeln!(
                        f,
                        "- {} `{}.{}.{}` **{}**: {}",
                        task.icon(),
                        w + 1,
                        d + 1,
                        t + 1,
                        task.title,
                        task.description
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{tests::create_test_plan, StudyPlan};

    #[test]
    fn test_plan_display() {
        let output = create_test_plan().to_string();

        assert!(output.starts_with("# Organic Chemistry Sprint\n"));
        assert!(output.contains("- Progress: 1/4 tasks, 25%"));
        assert!(output.contains("## Week 1: Foundations (1/3 tasks, 33%)"));
        assert!(output.contains("### Monday, October 19"));
        assert!(output.contains(
            "- ○ `1.1.1` **Functional groups**: Work through Functional groups."
        ));
        assert!(output.contains("- ✓ `1.1.2` **Nomenclature drills**"));
        assert!(output.contains("- ○ `2.2.1` **Final review**"));
    }

    #[test]
    fn test_rest_day_display() {
        let output = create_test_plan().to_string();
        assert!(output.contains("### Monday, October 26\n\n_Rest day_"));
    }

    #[test]
    fn test_empty_plan_display() {
        let plan = StudyPlan {
            title: "Empty".to_string(),
            weeks: vec![],
        };
        let output = plan.to_string();
        assert!(output.contains("0/0 tasks, 0%"));
        assert!(output.contains("No weeks in this plan."));
    }
}
