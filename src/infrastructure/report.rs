// Infrastructure: presentation of a selection report

use std::fmt;

use crate::application::SelectionReport;

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(total_return) = self.total_return else {
            return writeln!(f, "No optimal solution found.");
        };

        writeln!(f, "Solution found:")?;
        writeln!(f, "Status: Optimal ({})", self.solver)?;
        writeln!(f, "Total expected return: {:.2}", total_return)?;
        if let Some(total_cost) = self.total_cost {
            writeln!(f, "Total cost: {:.2}", total_cost)?;
        }
        for project in &self.selected {
            writeln!(
                f,
                "Project {}: expected return = {:.2}, cost = {:.2}, risk = {}",
                project.id, project.expected_return, project.expected_cost, project.risk_category
            )?;
        }
        Ok(())
    }
}

pub fn render_text(report: &SelectionReport) -> String {
    report.to_string()
}

pub fn render_json(report: &SelectionReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
