//! Checklist engine - rule selection, aggregate validity and change notification.

use crate::catalog::{RuleCatalog, RuleOutcome};
use crate::config::{ChecklistProps, PasswordInput};
use crate::rule::RuleName;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

/// Callback invoked with `(is_valid, failed_rules)` when either changes.
pub type ChangeListener = Box<dyn FnMut(bool, &[RuleName])>;

/// Result of evaluating the requested rules once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Requested rules that exist in the catalog, in request order.
    pub enabled_rules: Vec<RuleName>,
    pub is_valid: bool,
    /// Enabled rules that failed, in the same relative order.
    pub failed_rules: Vec<RuleName>,
    catalog: RuleCatalog,
}

impl EvaluationResult {
    pub fn outcome(&self, rule: RuleName) -> &RuleOutcome {
        self.catalog.get(rule)
    }

    pub fn is_enabled(&self, rule: RuleName) -> bool {
        self.enabled_rules.contains(&rule)
    }

    pub fn is_failing(&self, rule: RuleName) -> bool {
        self.failed_rules.contains(&rule)
    }
}

/// A change in `(is_valid, failed_rules)`, as delivered over a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistChange {
    pub is_valid: bool,
    pub failed_rules: Vec<RuleName>,
}

/// Filters requested names down to known rules, keeping their order.
pub fn enabled_rules<S: AsRef<str>>(requested: &[S]) -> Vec<RuleName> {
    requested
        .iter()
        .filter_map(|name| match name.as_ref().parse::<RuleName>() {
            Ok(rule) => Some(rule),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Dropping requested rule: {}", _e);
                None
            }
        })
        .collect()
}

/// Evaluates `props.rules` against `input` without any notification.
pub fn evaluate_checklist(props: &ChecklistProps, input: &PasswordInput) -> EvaluationResult {
    let catalog = RuleCatalog::evaluate(props, input);
    let enabled_rules = enabled_rules(props.rules.as_slice());

    let failed_rules: Vec<RuleName> = enabled_rules
        .iter()
        .copied()
        .filter(|rule| !catalog.get(*rule).valid)
        .collect();

    EvaluationResult {
        is_valid: failed_rules.is_empty(),
        enabled_rules,
        failed_rules,
        catalog,
    }
}

/// Builds the single-line summary used in message-only mode.
///
/// A failing `match` rule is reported on its own. Otherwise the failing
/// messages are joined after `prefix`. Returns `None` when nothing fails.
pub fn condensed_message(result: &EvaluationResult, prefix: &str) -> Option<String> {
    if result.is_enabled(RuleName::Match) && result.is_failing(RuleName::Match) {
        return Some(result.outcome(RuleName::Match).message.clone());
    }

    if result.failed_rules.is_empty() {
        return None;
    }

    let error_text = result
        .failed_rules
        .iter()
        .map(|rule| result.outcome(*rule).message.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("{} {}", prefix, error_text))
}

/// Evaluates checklists and notifies listeners when the outcome changes.
///
/// The engine only remembers the previous `(is_valid, failed_rules)` pair.
///
/// ```rust
/// use pwd_checklist::{ChecklistEngine, ChecklistProps, PasswordInput, RuleName};
/// use secrecy::SecretString;
///
/// let props = ChecklistProps::new(["minLength", "number"]).min_length(6);
/// let mut engine = ChecklistEngine::new();
/// engine.on_change(|is_valid, failed| println!("valid={is_valid} failed={failed:?}"));
///
/// let input = PasswordInput::new(SecretString::new("abc".to_string().into()));
/// let result = engine.evaluate(&props, &input);
/// assert_eq!(result.failed_rules, vec![RuleName::MinLength, RuleName::Number]);
/// ```
#[derive(Default)]
pub struct ChecklistEngine {
    listeners: Vec<ChangeListener>,
    last: Option<(bool, Vec<RuleName>)>,
}

impl ChecklistEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. It fires after the next evaluation whose
    /// outcome differs from the previous one (or after the first evaluation).
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(bool, &[RuleName]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Forwards every change into `tx`. A dropped receiver is ignored.
    #[cfg(feature = "async")]
    pub fn on_change_channel(&mut self, tx: mpsc::UnboundedSender<ChecklistChange>) {
        self.on_change(move |is_valid, failed_rules| {
            let change = ChecklistChange {
                is_valid,
                failed_rules: failed_rules.to_vec(),
            };
            if let Err(_e) = tx.send(change) {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send checklist change: {}", _e);
            }
        });
    }

    pub fn evaluate(&mut self, props: &ChecklistProps, input: &PasswordInput) -> EvaluationResult {
        let result = evaluate_checklist(props, input);

        let changed = match &self.last {
            Some((is_valid, failed_rules)) => {
                *is_valid != result.is_valid || *failed_rules != result.failed_rules
            }
            None => true,
        };

        if changed {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Checklist changed: is_valid={} failed_rules={:?}",
                result.is_valid,
                result.failed_rules
            );

            self.last = Some((result.is_valid, result.failed_rules.clone()));
            for listener in self.listeners.iter_mut() {
                listener(result.is_valid, &result.failed_rules);
            }
        }

        result
    }

    /// Forgets the previous outcome so the next evaluation always notifies.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl std::fmt::Debug for ChecklistEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecklistEngine")
            .field("listeners", &self.listeners.len())
            .field("last", &self.last)
            .finish()
    }
}
