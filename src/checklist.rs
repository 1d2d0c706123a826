//! The checklist widget: props plus an engine, re-rendered on every input change.

use crate::config::{ChecklistProps, PasswordInput};
use crate::engine::{ChecklistEngine, EvaluationResult};
use crate::render::{Rendered, render};
use crate::rule::RuleName;

#[derive(Debug)]
pub struct PasswordChecklist {
    props: ChecklistProps,
    engine: ChecklistEngine,
    last_result: Option<EvaluationResult>,
}

impl PasswordChecklist {
    pub fn new(props: ChecklistProps) -> Self {
        Self {
            props,
            engine: ChecklistEngine::new(),
            last_result: None,
        }
    }

    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(bool, &[RuleName]) + 'static,
    {
        self.engine.on_change(listener);
    }

    #[cfg(feature = "async")]
    pub fn on_change_channel(
        &mut self,
        tx: tokio::sync::mpsc::UnboundedSender<crate::engine::ChecklistChange>,
    ) {
        self.engine.on_change_channel(tx);
    }

    pub fn props(&self) -> &ChecklistProps {
        &self.props
    }

    /// Replaces the props and re-evaluates `input` against them right away.
    pub fn set_props(&mut self, props: ChecklistProps, input: &PasswordInput) -> Rendered {
        self.props = props;
        self.update(input)
    }

    /// Evaluates the new input and renders it.
    pub fn update(&mut self, input: &PasswordInput) -> Rendered {
        let result = self.engine.evaluate(&self.props, input);
        let rendered = render(&result, &self.props);
        self.last_result = Some(result);
        rendered
    }

    pub fn last_result(&self) -> Option<&EvaluationResult> {
        self.last_result.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.last_result.as_ref().is_some_and(|r| r.is_valid)
    }
}
