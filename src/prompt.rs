//! Instruction text sent to the image model.

pub fn generation_prompt(description: &str) -> String {
    format!(
        "A professional, modern, vector logo for '{}'. Simple, memorable, and on a clean white background. SVG style.",
        description
    )
}

/// Text part that follows the prior image in a refinement request.
pub fn refinement_prompt(feedback: &str) -> String {
    format!("Refine this logo with the following feedback: \"{}\"", feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_prompt() {
        assert_eq!(
            generation_prompt("CodeAndBrew"),
            "A professional, modern, vector logo for 'CodeAndBrew'. Simple, memorable, and on a clean white background. SVG style."
        );
    }

    #[test]
    fn test_refinement_prompt() {
        assert_eq!(
            refinement_prompt("use more blue"),
            "Refine this logo with the following feedback: \"use more blue\""
        );
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let description = "bakery \"Crumbs\" in O'Hare\nopen 24/7";
        assert_eq!(generation_prompt(description), generation_prompt(description));
        assert!(generation_prompt(description).contains(description));
        assert!(refinement_prompt(description).contains(description));
    }
}
