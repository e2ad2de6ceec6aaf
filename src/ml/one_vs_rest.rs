//! One-vs-rest ensemble of binary classifiers.
//!
//! One estimator is trained per label column of the indicator matrix. A column
//! that holds a single value in the training data cannot be learned and
//! becomes a constant predictor instead.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SympredError};
use crate::ml::logistic::{LogisticRegression, LogisticRegressionParams};
use crate::ml::sparse::SparseVector;

/// Per-label binary estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BinaryEstimator {
    /// Label was constant in the training data.
    Constant(f64),
    /// Fitted logistic regression.
    Logistic(LogisticRegression),
}

impl BinaryEstimator {
    /// Probability that the label applies to `x`.
    pub fn predict_proba(&self, x: &SparseVector) -> f64 {
        match self {
            BinaryEstimator::Constant(p) => *p,
            BinaryEstimator::Logistic(model) => model.predict_proba(x),
        }
    }
}

/// A fitted one-vs-rest classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneVsRestClassifier {
    /// Label names in estimator order.
    classes: Vec<String>,
    estimators: Vec<BinaryEstimator>,
    n_features: usize,
}

impl OneVsRestClassifier {
    /// Fit one estimator per column of `targets`.
    ///
    /// `targets[i][j]` is 1 when sample `i` carries label `classes[j]`.
    pub fn fit(
        samples: &[&SparseVector],
        targets: &[Vec<u8>],
        classes: &[String],
        n_features: usize,
        params: &LogisticRegressionParams,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(SympredError::training("no training samples"));
        }
        if samples.len() != targets.len() {
            return Err(SympredError::training(format!(
                "{} samples but {} label rows",
                samples.len(),
                targets.len()
            )));
        }
        if let Some(row) = targets.iter().find(|row| row.len() != classes.len()) {
            return Err(SympredError::training(format!(
                "label row has {} columns, expected {}",
                row.len(),
                classes.len()
            )));
        }

        let mut estimators = Vec::with_capacity(classes.len());
        let mut unconverged = 0;
        for (j, class) in classes.iter().enumerate() {
            let column: Vec<u8> = targets.iter().map(|row| row[j]).collect();
            let positives = column.iter().filter(|&&t| t != 0).count();

            let estimator = if positives == 0 || positives == column.len() {
                debug!("Label '{class}' is constant in training data ({positives} positives)");
                BinaryEstimator::Constant(if positives == 0 { 0.0 } else { 1.0 })
            } else {
                let (model, fit) = LogisticRegression::fit(samples, &column, n_features, params);
                if !fit.converged {
                    unconverged += 1;
                }
                debug!(
                    "Label '{class}': {positives} positives, {} iterations, converged={}",
                    fit.iterations, fit.converged
                );
                BinaryEstimator::Logistic(model)
            };
            estimators.push(estimator);
        }

        info!(
            "Trained {} one-vs-rest estimators on {} samples ({} did not converge)",
            estimators.len(),
            samples.len(),
            unconverged
        );

        Ok(Self {
            classes: classes.to_vec(),
            estimators,
            n_features,
        })
    }

    /// Per-label probabilities in class order.
    pub fn predict_proba(&self, x: &SparseVector) -> Vec<f64> {
        self.estimators
            .iter()
            .map(|estimator| estimator.predict_proba(x))
            .collect()
    }

    /// Indicator prediction: a label is set when its probability exceeds 0.5.
    pub fn predict(&self, x: &SparseVector) -> Vec<u8> {
        self.predict_proba(x)
            .into_iter()
            .map(|p| u8::from(p > 0.5))
            .collect()
    }

    /// Label names in estimator order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Check internal consistency after deserialization.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.estimators.len() != self.classes.len() {
            return Err(SympredError::corrupt(format!(
                "classifier has {} estimators for {} classes",
                self.estimators.len(),
                self.classes.len()
            )));
        }
        let mismatched = self.estimators.iter().any(|estimator| match estimator {
            BinaryEstimator::Logistic(model) => model.n_features() != self.n_features,
            BinaryEstimator::Constant(p) => !(0.0..=1.0).contains(p),
        });
        if mismatched {
            return Err(SympredError::corrupt(
                "classifier estimator does not match its feature dimension",
            ));
        }
        Ok(())
    }
}
