//! Rule catalog - validity and message for every known rule.

use crate::checks::{
    has_capital, has_letter, has_lowercase, has_number, has_special_char, match_check,
    max_length_check, min_length_check, no_spaces_check, not_empty_check,
};
use crate::config::{ChecklistProps, PasswordInput};
use crate::rule::RuleName;

/// Outcome of a single rule for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub valid: bool,
    pub message: String,
}

/// Outcomes of all rules, whether or not they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    outcomes: [RuleOutcome; RuleName::ALL.len()],
}

impl RuleCatalog {
    /// Evaluates every rule against `input`.
    pub fn evaluate(props: &ChecklistProps, input: &PasswordInput) -> Self {
        let outcomes = RuleName::ALL.map(|rule| RuleOutcome {
            valid: rule_is_valid(rule, props, input),
            message: props
                .message_override(rule)
                .map(str::to_string)
                .unwrap_or_else(|| default_message(rule, props)),
        });
        Self { outcomes }
    }

    pub fn get(&self, rule: RuleName) -> &RuleOutcome {
        &self.outcomes[rule.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleName, &RuleOutcome)> {
        RuleName::ALL.into_iter().zip(self.outcomes.iter())
    }
}

fn rule_is_valid(rule: RuleName, props: &ChecklistProps, input: &PasswordInput) -> bool {
    let value = input.value();
    match rule {
        RuleName::MinLength => min_length_check(value, props.min_length),
        RuleName::MaxLength => max_length_check(value, props.max_length),
        RuleName::SpecialChar => has_special_char(value, &props.special_chars),
        RuleName::Number => has_number(value),
        RuleName::Capital => has_capital(value),
        RuleName::Lowercase => has_lowercase(value),
        RuleName::CapitalAndLowercase => has_capital(value) && has_lowercase(value),
        RuleName::Letter => has_letter(value),
        RuleName::NotEmpty => not_empty_check(value, input.value_again()),
        RuleName::NoSpaces => no_spaces_check(value),
        RuleName::Match => match_check(value, input.value_again()),
    }
}

fn default_message(rule: RuleName, props: &ChecklistProps) -> String {
    match rule {
        RuleName::MinLength => format!("Minimum {} characters", props.min_length),
        RuleName::MaxLength => format!("No more than {} characters", props.max_length),
        RuleName::SpecialChar => "A special character".to_string(),
        RuleName::Number => "A number".to_string(),
        RuleName::Capital => "A capital letter".to_string(),
        RuleName::Lowercase => "A lowercase letter".to_string(),
        RuleName::CapitalAndLowercase => "An uppercase and a lowercase letter".to_string(),
        RuleName::Letter => "A letter".to_string(),
        RuleName::NotEmpty => "Fields cannot be empty".to_string(),
        RuleName::NoSpaces => "No spaces".to_string(),
        RuleName::Match => "Passwords must be matched.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn input(value: &str, again: Option<&str>) -> PasswordInput {
        let input = PasswordInput::new(SecretString::new(value.to_string().into()));
        match again {
            Some(a) => input.with_again(SecretString::new(a.to_string().into())),
            None => input,
        }
    }

    #[test]
    fn test_default_messages() {
        let props = ChecklistProps::default().min_length(6).max_length(16);
        let catalog = RuleCatalog::evaluate(&props, &input("", None));

        assert_eq!(catalog.get(RuleName::MinLength).message, "Minimum 6 characters");
        assert_eq!(catalog.get(RuleName::MaxLength).message, "No more than 16 characters");
        assert_eq!(catalog.get(RuleName::SpecialChar).message, "A special character");
        assert_eq!(
            catalog.get(RuleName::CapitalAndLowercase).message,
            "An uppercase and a lowercase letter"
        );
        assert_eq!(catalog.get(RuleName::NotEmpty).message, "Fields cannot be empty");
        assert_eq!(catalog.get(RuleName::Match).message, "Passwords must be matched.");
    }

    #[test]
    fn test_empty_value_fails_content_rules() {
        let catalog = RuleCatalog::evaluate(&ChecklistProps::default(), &input("", Some("")));

        for (rule, outcome) in catalog.iter() {
            if rule == RuleName::MaxLength {
                assert!(outcome.valid);
            } else {
                assert!(!outcome.valid, "{rule} should fail on an empty value");
            }
        }
    }

    #[test]
    fn test_all_rules_pass_for_strong_matching_input() {
        let catalog = RuleCatalog::evaluate(
            &ChecklistProps::default(),
            &input("Str0ng!Pass", Some("Str0ng!Pass")),
        );
        assert!(catalog.iter().all(|(_, outcome)| outcome.valid));
    }

    #[test]
    fn test_capital_and_lowercase_needs_both() {
        let props = ChecklistProps::default();
        let lower_only =
            RuleCatalog::evaluate(&props, &input("i have only lowercase letters", None));
        assert!(!lower_only.get(RuleName::CapitalAndLowercase).valid);

        let both = RuleCatalog::evaluate(
            &props,
            &input("I have only lowercase and CAPITAL letters", None),
        );
        assert!(both.get(RuleName::CapitalAndLowercase).valid);
    }

    #[test]
    fn test_override_replaces_only_that_message() {
        let props =
            ChecklistProps::default().message(RuleName::MinLength, "Custom minLength Message");
        let catalog = RuleCatalog::evaluate(&props, &input("test", Some("test")));

        let min = catalog.get(RuleName::MinLength);
        assert_eq!(min.message, "Custom minLength Message");
        assert!(!min.valid);
        assert_eq!(catalog.get(RuleName::Number).message, "A number");
    }

    #[test]
    fn test_override_does_not_change_validity() {
        let props = ChecklistProps::default().message(RuleName::Match, "Custom match Message");
        let catalog = RuleCatalog::evaluate(&props, &input("test", Some("test")));
        let outcome = catalog.get(RuleName::Match);
        assert!(outcome.valid);
        assert_eq!(outcome.message, "Custom match Message");
    }
}
