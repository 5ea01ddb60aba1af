//! Assembles the analysis prompt sent to the Gemini API.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

const ANALYSIS_TEMPLATE: &str = r#"You are an expert software project manager for a crypto bounty platform. Analyze the following GitHub issue description.

Task:
1. Create a short, catchy title for the bounty.
2. Summarize the task in one sentence.
3. Suggest a fair bounty price in USDC (integers only) based on complexity (Generous rates: Easy=$50-200, Medium=$200-500, Hard=$500-1500, Expert=$1500+).
4. Rate difficulty: Easy, Medium, Hard, or Expert.
5. Suggest 3 relevant technical tags.

Issue Description:
"{{ issue_content }}"
"#;

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template("analysis", ANALYSIS_TEMPLATE)
            .expect("Embedded analysis template must parse");
        env
    })
}

/// Render the analysis prompt for the given issue content.
pub fn render_analysis_prompt(issue_content: &str) -> Result<String, AppError> {
    let template = environment()
        .get_template("analysis")
        .map_err(|e| AppError::AnalysisApi { message: e.to_string(), status: None })?;
    template
        .render(context! { issue_content => issue_content })
        .map_err(|e| AppError::AnalysisApi { message: e.to_string(), status: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_issue_content() {
        let prompt = render_analysis_prompt("Login fails on Safari").unwrap();
        assert!(prompt.contains("\"Login fails on Safari\""));
        assert!(prompt.starts_with("You are an expert software project manager"));
    }

    #[test]
    fn prompt_lists_difficulty_scale() {
        let prompt = render_analysis_prompt("x").unwrap();
        assert!(prompt.contains("Easy, Medium, Hard, or Expert"));
    }
}
