//! Screening engine
//!
//! Runs one interaction cycle synchronously: descriptor lookup, vector
//! assembly, arity check, inference, label formatting. Each cycle is
//! independent and stateless; the only long-lived state is the immutable
//! model registry constructed at startup.

use crate::error::ScreenerError;
use crate::models::Diagnosis;
use crate::observability::ScreenerMetrics;
use crate::predictor::ModelRegistry;
use crate::screen::{LabelRule, Screen};
use crate::vector;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Coordinates the registry, schemas and label rules for all screens
pub struct ScreeningEngine {
    registry: ModelRegistry,
    metrics: ScreenerMetrics,
    label_overrides: HashMap<Screen, LabelRule>,
}

impl ScreeningEngine {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry,
            metrics: ScreenerMetrics::new(),
            label_overrides: HashMap::new(),
        }
    }

    /// Replace a screen's label rule, for artifact revisions whose class
    /// convention differs from the shipped descriptors.
    pub fn with_label_rule(mut self, screen: Screen, rule: LabelRule) -> Self {
        self.label_overrides.insert(screen, rule);
        self
    }

    /// Screens the underlying registry can serve
    pub fn available_screens(&self) -> Vec<Screen> {
        self.registry.registered()
    }

    fn label_rule(&self, screen: Screen) -> &LabelRule {
        self.label_overrides
            .get(&screen)
            .unwrap_or(&screen.descriptor().labels)
    }

    /// Run one screening cycle for the given screen and field values.
    pub fn screen(
        &self,
        screen: Screen,
        values: &HashMap<String, f64>,
    ) -> Result<Diagnosis, ScreenerError> {
        let result = self.run_cycle(screen, values);
        match &result {
            Ok(diagnosis) => {
                self.metrics.inc_predictions(screen.id());
                info!(
                    event = "diagnosis_generated",
                    screen = %screen,
                    class_label = diagnosis.class_label,
                    outcome = ?diagnosis.outcome,
                    "Generated diagnosis"
                );
            }
            Err(error) => {
                self.metrics.inc_prediction_errors(screen.id());
                debug!(screen = %screen, error = %error, "Screening cycle failed");
            }
        }
        result
    }

    fn run_cycle(
        &self,
        screen: Screen,
        values: &HashMap<String, f64>,
    ) -> Result<Diagnosis, ScreenerError> {
        let descriptor = screen.descriptor();
        let vector = vector::build(descriptor, values)?;
        let classifier = self.registry.resolve(screen)?;

        // The bound artifact addresses features by position only, so a
        // schema/artifact disagreement must fail before invocation.
        if vector.len() != classifier.arity() {
            return Err(ScreenerError::ArityMismatch {
                expected: classifier.arity(),
                got: vector.len(),
            });
        }

        let start = Instant::now();
        let label = classifier.predict(&vector)?;
        self.metrics.observe_inference_latency(start.elapsed().as_secs_f64());

        let rule = self.label_rule(screen);
        let outcome = rule
            .outcome(label)
            .ok_or(ScreenerError::UnknownLabel { screen, label })?;

        Ok(Diagnosis {
            screen,
            outcome,
            message: rule.message(outcome).to_string(),
            class_label: label,
            schema_version: descriptor.schema_version.to_string(),
            generated_at: chrono::Utc::now().timestamp(),
        })
    }
}
