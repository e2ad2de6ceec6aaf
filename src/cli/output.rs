//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SympredArgs};
use crate::error::Result;
use crate::model::ModelMetadata;
use crate::service::{Diagnosis, DiseaseSummary};
use crate::training::TrainingReport;

/// Result structure for a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_dir: String,
    #[serde(flatten)]
    pub report: TrainingReport,
}

/// Result structure for a prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub symptoms: Vec<String>,
    #[serde(flatten)]
    pub diagnosis: Diagnosis,
}

/// Result structure for the symptom catalogue.
#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomsResult {
    pub total: usize,
    pub symptoms: Vec<String>,
}

/// Result structure for the disease catalogue.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiseasesResult {
    pub total: usize,
    pub diseases: Vec<DiseaseSummary>,
}

/// Human-readable rendering of a command result.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

impl HumanReadable for TrainingResult {
    fn to_human(&self) -> String {
        format!(
            "Model saved to: {}\nAccuracy:       {:.4}\nF1 (weighted):  {:.4}\nTraining time:  {:.2}s",
            self.model_dir,
            self.report.accuracy,
            self.report.f1,
            self.report.training_time_seconds
        )
    }
}

impl HumanReadable for DiagnosisResult {
    fn to_human(&self) -> String {
        let mut out = format!("Symptoms: {}\n", self.symptoms.join(", "));
        match &self.diagnosis {
            Diagnosis::InsufficientSignal { message, advice } => {
                out.push_str(&format!("{message}\n{advice}"));
            }
            Diagnosis::Confident { primary, others } => {
                out.push_str(&format!(
                    "Most likely: {} ({})\n  {}\n  Advice: {}",
                    primary.disease,
                    format_confidence(primary.confidence),
                    primary.description,
                    primary.advice
                ));
                if !others.is_empty() {
                    out.push_str("\nOther possibilities:");
                    for other in others {
                        out.push_str(&format!(
                            "\n  {} ({})",
                            other.disease,
                            format_confidence(other.confidence)
                        ));
                    }
                }
            }
        }
        out
    }
}

impl HumanReadable for SymptomsResult {
    fn to_human(&self) -> String {
        let mut out = format!("{} symptoms", self.total);
        for symptom in &self.symptoms {
            out.push_str(&format!("\n  {symptom}"));
        }
        out
    }
}

impl HumanReadable for DiseasesResult {
    fn to_human(&self) -> String {
        let mut out = format!("{} diseases", self.total);
        for disease in &self.diseases {
            out.push_str(&format!("\n  {}: {}", disease.name, disease.description));
        }
        out
    }
}

impl HumanReadable for ModelMetadata {
    fn to_human(&self) -> String {
        format!(
            "Model id:           {}\nTrained at:         {}\nDiseases:           {}\nFeatures:           {}\nTraining samples:   {}\nValidation samples: {}\nAccuracy:           {:.4}\nF1 (weighted):      {:.4}",
            self.model_id,
            self.trained_at.to_rfc3339(),
            self.n_classes,
            self.n_features,
            self.training_samples,
            self.validation_samples,
            self.accuracy,
            self.f1
        )
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &SympredArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &SympredArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SympredArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::PredictionResult;
    use crate::service::PrimaryDiagnosis;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.812), "81.2%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }

    #[test]
    fn test_diagnosis_json_shape() {
        let result = DiagnosisResult {
            symptoms: vec!["sốt".to_string()],
            diagnosis: Diagnosis::Confident {
                primary: PrimaryDiagnosis {
                    disease: "Cảm cúm".to_string(),
                    confidence: 0.9,
                    description: "d".to_string(),
                    advice: "a".to_string(),
                },
                others: vec![PredictionResult {
                    disease: "Cảm lạnh".to_string(),
                    confidence: 0.4,
                }],
            },
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "confident");
        assert_eq!(value["primary"]["disease"], "Cảm cúm");
        assert_eq!(value["others"][0]["confidence"], 0.4);
        assert!(result.to_human().contains("Other possibilities"));
    }

    #[test]
    fn test_insufficient_signal_human() {
        let result = DiagnosisResult {
            symptoms: vec!["xyz".to_string()],
            diagnosis: Diagnosis::InsufficientSignal {
                message: "no answer".to_string(),
                advice: "see a doctor".to_string(),
            },
        };
        let text = result.to_human();
        assert!(text.contains("no answer"));
        assert!(text.contains("see a doctor"));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "insufficient_signal");
    }
}
