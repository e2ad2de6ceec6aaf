//! Command implementations for the sympred CLI.

use anyhow::{Context, Result};
use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SympredConfig;
use crate::service::DiagnosisService;

/// Execute a CLI command.
pub fn execute_command(args: SympredArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Train(train_args) => train(train_args, config, &args),
        Command::Predict(predict_args) => predict(predict_args, config, &args),
        Command::Symptoms(dataset_args) => list_symptoms(dataset_args, config, &args),
        Command::Diseases(model_args) => list_diseases(model_args, config, &args),
        Command::Info(model_args) => show_info(model_args, config, &args),
    }
}

/// Load the configuration file if one was given, then apply environment overrides.
fn load_config(args: &SympredArgs) -> Result<SympredConfig> {
    let config = match &args.config {
        Some(path) => SympredConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SympredConfig::default(),
    };
    let config = config.with_env_overrides()?;
    debug!("Configuration: {config:?}");
    Ok(config)
}

fn open_service(config: SympredConfig) -> Result<DiagnosisService> {
    config.validate()?;
    let model_dir = config.model_dir.clone();
    DiagnosisService::open(config)
        .with_context(|| format!("failed to open model in {}", model_dir.display()))
}

fn train(args: &TrainArgs, mut config: SympredConfig, cli_args: &SympredArgs) -> Result<()> {
    if let Some(dataset) = &args.dataset {
        config.dataset.path = dataset.clone();
    }
    if let Some(model_dir) = &args.model_dir {
        config.model_dir = model_dir.clone();
    }
    if let Some(seed) = args.seed {
        config.training.random_seed = seed;
    }
    if args.no_augment {
        config.training.augment = false;
    }
    config.validate()?;

    let dataset = config.dataset.path.clone();
    let service = DiagnosisService::new(config);
    let report = service
        .train()
        .with_context(|| format!("training on {} failed", dataset.display()))?;

    output_result(
        "Training complete",
        &TrainingResult {
            model_dir: service.store().dir().display().to_string(),
            report,
        },
        cli_args,
    )?;
    Ok(())
}

fn predict(args: &PredictArgs, mut config: SympredConfig, cli_args: &SympredArgs) -> Result<()> {
    if let Some(model_dir) = &args.model_dir {
        config.model_dir = model_dir.clone();
    }
    if let Some(max_predictions) = args.max_predictions {
        config.prediction.max_predictions = max_predictions;
    }
    if let Some(min_confidence) = args.min_confidence {
        config.prediction.min_confidence = min_confidence;
    }

    let service = open_service(config)?;
    let diagnosis = service.diagnose(args.symptoms.as_slice())?;

    output_result(
        "Diagnosis",
        &DiagnosisResult {
            symptoms: args.symptoms.clone(),
            diagnosis,
        },
        cli_args,
    )?;
    Ok(())
}

fn list_symptoms(args: &DatasetArgs, mut config: SympredConfig, cli_args: &SympredArgs) -> Result<()> {
    if let Some(dataset) = &args.dataset {
        config.dataset.path = dataset.clone();
    }
    config.validate()?;

    let symptoms = DiagnosisService::new(config).symptoms()?;
    output_result(
        "Symptoms in dataset",
        &SymptomsResult {
            total: symptoms.len(),
            symptoms,
        },
        cli_args,
    )?;
    Ok(())
}

fn list_diseases(args: &ModelArgs, mut config: SympredConfig, cli_args: &SympredArgs) -> Result<()> {
    if let Some(model_dir) = &args.model_dir {
        config.model_dir = model_dir.clone();
    }

    let diseases = open_service(config)?.diseases()?;
    output_result(
        "Diseases known to the model",
        &DiseasesResult {
            total: diseases.len(),
            diseases,
        },
        cli_args,
    )?;
    Ok(())
}

fn show_info(args: &ModelArgs, mut config: SympredConfig, cli_args: &SympredArgs) -> Result<()> {
    if let Some(model_dir) = &args.model_dir {
        config.model_dir = model_dir.clone();
    }

    let metadata = open_service(config)?.model_info()?;
    output_result("Model information", &metadata, cli_args)?;
    Ok(())
}
