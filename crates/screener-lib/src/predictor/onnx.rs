//! ONNX inference using tract
//!
//! Wraps a pre-trained scikit-learn style classifier exported to ONNX. The
//! model consumes a `[1, N]` f32 row and emits either an int64 label tensor
//! or a float score row reduced by argmax.

use super::{check_arity, Classifier};
use crate::error::ScreenerError;
use crate::models::{ClassLabel, FeatureVector};
use crate::screen::Screen;
use anyhow::{Context, Result};
use tract_onnx::prelude::*;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-backed classifier for one screen's artifact
pub struct OnnxClassifier {
    screen: Screen,
    plan: TractModel,
    arity: usize,
}

impl OnnxClassifier {
    /// Parse and optimize an ONNX artifact for a fixed input arity.
    pub fn from_bytes(screen: Screen, model_bytes: &[u8], arity: usize) -> Result<Self> {
        let plan = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(model_bytes))
            .context("Failed to parse ONNX model")?
            .with_input_fact(0, f32::fact([1, arity]).into())
            .context("Failed to set input shape")?
            .into_optimized()
            .context("Failed to optimize model")?
            .into_runnable()
            .context("Failed to create runnable model")?;
        Ok(Self { screen, plan, arity })
    }

    fn features_to_tensor(&self, features: &FeatureVector) -> Result<Tensor> {
        let tensor =
            tract_ndarray::Array2::from_shape_vec((1, self.arity), features.values.clone())
                .context("Failed to shape feature vector")?
                .into();
        Ok(tensor)
    }

    fn label_from_output(output: &Tensor) -> Result<ClassLabel> {
        // sklearn-converted classifiers emit an int64 label tensor; plain
        // networks emit a float score row instead.
        if let Ok(view) = output.to_array_view::<i64>() {
            return view.iter().next().copied().context("Empty label tensor");
        }

        let view = output
            .to_array_view::<f32>()
            .context("Unsupported model output type")?;
        let (argmax, _) = view
            .iter()
            .enumerate()
            .fold((0usize, f32::NEG_INFINITY), |(best, max), (i, &v)| {
                if v > max {
                    (i, v)
                } else {
                    (best, max)
                }
            });
        Ok(argmax as ClassLabel)
    }
}

impl Classifier for OnnxClassifier {
    fn arity(&self) -> usize {
        self.arity
    }

    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ScreenerError> {
        check_arity(self.arity, features.len())?;

        let run = || -> Result<ClassLabel> {
            let input = self.features_to_tensor(features)?;
            let result = self.plan.run(tvec!(input.into()))?;
            let output = result.get(0).context("No output from model")?;
            Self::label_from_output(output)
        };

        run().map_err(|source| ScreenerError::Inference {
            screen: self.screen,
            source,
        })
    }
}
