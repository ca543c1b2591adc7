use crate::features::doctors::Problem;
use std::fmt::Write as _;

/// Specializations for one problem, default first; every problem when none is
/// given.
#[must_use]
pub fn recommend(problem: Option<Problem>) -> String {
    let mut out = String::new();
    match problem {
        Some(problem) => {
            for (index, specialization) in problem.specializations().iter().enumerate() {
                let marker = if index == 0 { " (default)" } else { "" };
                let _ = writeln!(out, "{specialization}{marker}");
            }
        }
        None => {
            for problem in Problem::ALL {
                let _ = writeln!(out, "{:<24} {}", problem, problem.default_specialization());
            }
        }
    }
    out
}
