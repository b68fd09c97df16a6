// Prompt constants for the fact-check invoker.

/// Fact-check prompt template. Replace `{claim}` before sending.
///
/// The wording is fixed: every claim gets the same instructions, with the
/// claim text appended verbatim after `Statement: `.
pub const FACT_CHECK_PROMPT_TEMPLATE: &str = "You are a professional fact-checker. \
    Analyze the following statement for accuracy. \
    Provide a verdict (True, False, or Partially True), a detailed explanation, \
    and list credible sources if possible.\n\nStatement: {claim}";

/// Builds the prompt sent to the model for `claim`.
pub fn build_fact_check_prompt(claim: &str) -> String {
    FACT_CHECK_PROMPT_TEMPLATE.replace("{claim}", claim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_claim_verbatim() {
        let claim = "The Great Wall of China is visible from the moon.";
        let prompt = build_fact_check_prompt(claim);
        assert!(prompt.contains(claim));
        assert!(prompt.ends_with(&format!("Statement: {claim}")));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let claim = "Water boils at 100C at sea level.";
        assert_eq!(build_fact_check_prompt(claim), build_fact_check_prompt(claim));
    }

    #[test]
    fn test_prompt_names_the_closed_verdict_set() {
        let prompt = build_fact_check_prompt("x");
        assert!(prompt.starts_with("You are a professional fact-checker."));
        assert!(prompt.contains("(True, False, or Partially True)"));
        assert!(prompt.contains("credible sources"));
    }

    #[test]
    fn test_prompt_keeps_placeholder_like_text_in_claim() {
        // Only the template placeholder is substituted, never text inside the claim.
        let claim = "Some people write {claim} in templates.";
        let prompt = build_fact_check_prompt(claim);
        assert!(prompt.ends_with(claim));
    }

    #[test]
    fn test_prompt_preserves_whitespace_and_unicode() {
        let claim = "  Le café  est né en Éthiopie ☕\n";
        let prompt = build_fact_check_prompt(claim);
        assert!(prompt.contains(claim));
    }

    #[test]
    fn test_template_has_no_leading_indentation_in_prompt() {
        let prompt = build_fact_check_prompt("x");
        assert!(!prompt.contains("  Analyze"));
        assert!(prompt.contains("accuracy. Provide a verdict"));
    }
}
