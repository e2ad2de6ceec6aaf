//! On-disk persistence of a [`TrainedModel`].
//!
//! A model directory holds three independently loadable files:
//!
//! ```text
//! <model_dir>/
//! ├── vectorizer.bin      TF-IDF vocabulary and IDF weights
//! ├── label_encoder.bin   disease label space
//! └── classifier.bin      one-vs-rest weights and model metadata
//! ```
//!
//! Each file is a `bincode` envelope holding a format version, the artifact
//! kind, the model id shared by all three files, and a CRC32 of the payload.
//! Files are written through a temporary file and renamed into place. Loading
//! requires all three files, intact, and carrying the same model id.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::error::{Result, SympredError};
use crate::ml::{LabelEncoder, OneVsRestClassifier, TfIdfVectorizer};
use crate::model::trained::{ModelMetadata, TrainedModel};

/// File name of the vectorizer artifact.
pub const VECTORIZER_FILE: &str = "vectorizer.bin";
/// File name of the label encoder artifact.
pub const LABEL_ENCODER_FILE: &str = "label_encoder.bin";
/// File name of the classifier artifact.
pub const CLASSIFIER_FILE: &str = "classifier.bin";

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum ArtifactKind {
    Vectorizer,
    LabelEncoder,
    Classifier,
}

impl ArtifactKind {
    fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Vectorizer => VECTORIZER_FILE,
            ArtifactKind::LabelEncoder => LABEL_ENCODER_FILE,
            ArtifactKind::Classifier => CLASSIFIER_FILE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    format_version: u32,
    kind: ArtifactKind,
    model_id: Uuid,
    checksum: u32,
    payload: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ClassifierArtifact {
    metadata: ModelMetadata,
    classifier: OneVsRestClassifier,
}

/// Reads and writes models in one directory.
#[derive(Debug, Clone)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    /// Create a store rooted at `dir`. Nothing is touched until save or load.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// The model directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether all three artifact files are present.
    pub fn exists(&self) -> bool {
        self.missing_artifacts().is_empty()
    }

    /// Persist `model`, replacing any model already in the directory.
    pub fn save(&self, model: &TrainedModel) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let model_id = model.model_id();

        self.write_artifact(ArtifactKind::Vectorizer, model_id, model.vectorizer())?;
        self.write_artifact(ArtifactKind::LabelEncoder, model_id, model.label_encoder())?;
        self.write_artifact(
            ArtifactKind::Classifier,
            model_id,
            &ClassifierArtifact {
                metadata: model.metadata().clone(),
                classifier: model.classifier().clone(),
            },
        )?;

        info!("Saved model {} to {}", model_id, self.dir.display());
        Ok(())
    }

    /// Load the model in the directory.
    ///
    /// Fails with [`SympredError::ModelNotFound`] when any artifact is missing
    /// and with [`SympredError::CorruptModel`] when the artifacts are unreadable
    /// or mismatched.
    pub fn load(&self) -> Result<TrainedModel> {
        let missing = self.missing_artifacts();
        if !missing.is_empty() {
            let paths: Vec<String> = missing
                .iter()
                .map(|kind| self.path_of(*kind).display().to_string())
                .collect();
            return Err(SympredError::model_not_found(paths.join(", ")));
        }

        let (vectorizer_id, vectorizer): (Uuid, TfIdfVectorizer) =
            self.read_artifact(ArtifactKind::Vectorizer)?;
        let (encoder_id, mut label_encoder): (Uuid, LabelEncoder) =
            self.read_artifact(ArtifactKind::LabelEncoder)?;
        let (classifier_id, artifact): (Uuid, ClassifierArtifact) =
            self.read_artifact(ArtifactKind::Classifier)?;

        if vectorizer_id != encoder_id
            || vectorizer_id != classifier_id
            || classifier_id != artifact.metadata.model_id
        {
            return Err(SympredError::corrupt(format!(
                "artifacts belong to different models (vectorizer {vectorizer_id}, label encoder {encoder_id}, classifier {classifier_id})"
            )));
        }

        label_encoder.rebuild_index();
        let model = TrainedModel::new(
            vectorizer,
            label_encoder,
            artifact.classifier,
            artifact.metadata,
        )?;
        info!(
            "Loaded model {} ({} diseases, {} features) from {}",
            model.model_id(),
            model.classes().len(),
            model.vectorizer().vocabulary_size(),
            self.dir.display()
        );
        Ok(model)
    }

    fn path_of(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    fn missing_artifacts(&self) -> Vec<ArtifactKind> {
        [
            ArtifactKind::Vectorizer,
            ArtifactKind::LabelEncoder,
            ArtifactKind::Classifier,
        ]
        .into_iter()
        .filter(|kind| !self.path_of(*kind).is_file())
        .collect()
    }

    fn write_artifact<T: Serialize>(
        &self,
        kind: ArtifactKind,
        model_id: Uuid,
        value: &T,
    ) -> Result<()> {
        let payload = bincode::serialize(value)?;
        let envelope = Envelope {
            format_version: FORMAT_VERSION,
            kind,
            model_id,
            checksum: crc32fast::hash(&payload),
            payload,
        };
        let bytes = bincode::serialize(&envelope)?;

        let path = self.path_of(kind);
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| SympredError::Io(e.error))?;

        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn read_artifact<T: DeserializeOwned>(&self, kind: ArtifactKind) -> Result<(Uuid, T)> {
        let path = self.path_of(kind);
        let bytes = fs::read(&path)?;
        let envelope: Envelope = bincode::deserialize(&bytes).map_err(|e| {
            SympredError::corrupt(format!("{} is not a model artifact: {e}", path.display()))
        })?;

        if envelope.format_version != FORMAT_VERSION {
            return Err(SympredError::corrupt(format!(
                "{} has format version {}, expected {}",
                path.display(),
                envelope.format_version,
                FORMAT_VERSION
            )));
        }
        if envelope.kind != kind {
            return Err(SympredError::corrupt(format!(
                "{} holds a {:?} artifact, expected {:?}",
                path.display(),
                envelope.kind,
                kind
            )));
        }
        if crc32fast::hash(&envelope.payload) != envelope.checksum {
            return Err(SympredError::corrupt(format!(
                "{} failed its checksum",
                path.display()
            )));
        }

        let value = bincode::deserialize(&envelope.payload).map_err(|e| {
            SympredError::corrupt(format!("{} has an unreadable payload: {e}", path.display()))
        })?;
        Ok((envelope.model_id, value))
    }
}
