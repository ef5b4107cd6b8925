//! JSON output renderer.
//!
//! Outputs the outcome with a `status` tag: `{"status": "qualified", ...}`.

use crate::models::PensionOutcome;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, outcome: &PensionOutcome) -> String {
        let mut rendered =
            serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pension::calculate_pension;

    #[test]
    fn render_json_qualified() {
        let output = JsonRenderer.render(&calculate_pension(24_000, 300));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["status"], "qualified");
        assert_eq!(parsed["pension_pay"], 975.0);
        assert_eq!(parsed["pension_right"], 48.75);
        assert_eq!(parsed["extra_months"], 120);
        assert_eq!(parsed["currency"], "GHS");
    }

    #[test]
    fn render_json_not_qualified() {
        let output = JsonRenderer.render(&calculate_pension(24_000, 100));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["status"], "not_qualified");
        assert_eq!(parsed["months_short"], 80);
        assert!(parsed.get("pension_pay").is_none());
    }

    #[test]
    fn render_json_parses_back() {
        let outcome = calculate_pension(30_000, 250);
        let output = JsonRenderer.render(&outcome);
        let parsed: PensionOutcome = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, outcome);
    }
}
