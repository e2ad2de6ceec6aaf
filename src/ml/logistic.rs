//! L2-regularized binary logistic regression on sparse features.
//!
//! Minimizes
//!
//! ```text
//! f(w, b) = ½‖w‖² + C · Σᵢ log(1 + exp(−yᵢ (w·xᵢ + b)))      yᵢ ∈ {−1, +1}
//! ```
//!
//! with full-batch gradient descent and a backtracking (Armijo) line search.
//! The intercept is not penalized. Every accepted step lowers the objective,
//! so the weights held when the iteration budget runs out are the best found.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::ml::sparse::SparseVector;

/// Optimizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionParams {
    /// Inverse regularization strength.
    pub c: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Converged once the largest gradient component is below this.
    pub tolerance: f64,
}

impl Default for LogisticRegressionParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            max_iterations: 300,
            tolerance: 1e-4,
        }
    }
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticFit {
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the gradient tolerance was reached.
    pub converged: bool,
    /// Final objective value.
    pub objective: f64,
}

/// A fitted binary logistic regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
}

/// Smallest step tried before the line search gives up.
const MIN_STEP: f64 = 1e-12;
/// Sufficient-decrease constant of the Armijo condition.
const ARMIJO_C: f64 = 1e-4;

impl LogisticRegression {
    /// Fit on `samples` with binary `targets` (non-zero = positive) in `n_features` dimensions.
    pub fn fit(
        samples: &[&SparseVector],
        targets: &[u8],
        n_features: usize,
        params: &LogisticRegressionParams,
    ) -> (Self, LogisticFit) {
        let signs: Vec<f64> = targets
            .iter()
            .map(|&t| if t != 0 { 1.0 } else { -1.0 })
            .collect();

        let mut model = LogisticRegression {
            weights: vec![0.0; n_features],
            intercept: 0.0,
        };
        let mut objective = model.objective(samples, &signs, params.c);
        let mut step = 1.0;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < params.max_iterations {
            let (grad_w, grad_b) = model.gradient(samples, &signs, params.c);
            let max_component = grad_w
                .iter()
                .fold(grad_b.abs(), |acc, g| acc.max(g.abs()));
            if max_component < params.tolerance {
                converged = true;
                break;
            }
            let grad_sq = grad_w.iter().map(|g| g * g).sum::<f64>() + grad_b * grad_b;

            let mut accepted = None;
            while step >= MIN_STEP {
                let candidate = LogisticRegression {
                    weights: model
                        .weights
                        .iter()
                        .zip(&grad_w)
                        .map(|(w, g)| w - step * g)
                        .collect(),
                    intercept: model.intercept - step * grad_b,
                };
                let candidate_objective = candidate.objective(samples, &signs, params.c);
                if candidate_objective <= objective - ARMIJO_C * step * grad_sq {
                    accepted = Some((candidate, candidate_objective));
                    break;
                }
                step *= 0.5;
            }

            iterations += 1;
            match accepted {
                Some((candidate, candidate_objective)) => {
                    model = candidate;
                    objective = candidate_objective;
                    step *= 2.0;
                }
                // No descent possible at machine precision.
                None => break,
            }
        }

        if !converged {
            warn!(
                "Logistic regression stopped after {iterations} iterations without converging (objective {objective:.6})"
            );
        }

        (
            model,
            LogisticFit {
                iterations,
                converged,
                objective,
            },
        )
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, x: &SparseVector) -> f64 {
        sigmoid(self.decision_function(x))
    }

    /// Raw score `w·x + b`.
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        x.dot(&self.weights) + self.intercept
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Learned weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Learned intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn objective(&self, samples: &[&SparseVector], signs: &[f64], c: f64) -> f64 {
        let penalty = 0.5 * self.weights.iter().map(|w| w * w).sum::<f64>();
        let loss: f64 = samples
            .iter()
            .zip(signs)
            .map(|(x, y)| log_one_plus_exp(-y * self.decision_function(x)))
            .sum();
        penalty + c * loss
    }

    fn gradient(&self, samples: &[&SparseVector], signs: &[f64], c: f64) -> (Vec<f64>, f64) {
        let mut grad_w = self.weights.clone();
        let mut grad_b = 0.0;
        for (x, y) in samples.iter().zip(signs) {
            // d/dz log(1 + exp(-y z)) = -y σ(-y z)
            let coef = -y * sigmoid(-y * self.decision_function(x)) * c;
            for &(i, v) in x.entries() {
                if let Some(g) = grad_w.get_mut(i) {
                    *g += coef * v;
                }
            }
            grad_b += coef;
        }
        (grad_w, grad_b)
    }
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Numerically stable `ln(1 + e^z)`.
fn log_one_plus_exp(z: f64) -> f64 {
    if z > 0.0 {
        z + (-z).exp().ln_1p()
    } else {
        z.exp().ln_1p()
    }
}
