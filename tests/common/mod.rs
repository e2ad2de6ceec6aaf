//! Shared dataset fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sympred::config::SympredConfig;
use sympred::corpus::{DatasetLoader, DiseaseRecord};
use sympred::error::Result;

/// Five diseases with disjoint symptom vocabularies, five rows each.
pub const DATASET: &str = "\
benh,trieu_chung
Flu,fever;cough;headache;fatigue
Flu,fever;cough;headache;chills;fatigue
Flu,fever;cough;fatigue;body ache
Flu,fever;headache;chills;body ache;cough
Flu,cough;headache;fatigue;chills
Cold,runny nose;sneezing;stuffy nose;watery eyes
Cold,sneezing;runny nose;scratchy throat;stuffy nose
Cold,runny nose;watery eyes;sneezing;mild congestion
Cold,stuffy nose;sneezing;scratchy throat;mild congestion;watery eyes
Cold,runny nose;sneezing;mild congestion;scratchy throat
Gastritis,stomach pain;nausea;bloating;vomiting
Gastritis,stomach pain;nausea;heartburn;loss of appetite
Gastritis,bloating;heartburn;stomach pain;vomiting;nausea
Gastritis,nausea;loss of appetite;bloating;stomach pain
Gastritis,heartburn;vomiting;stomach pain;bloating
Eczema,itchy skin;dry skin;rash;redness
Eczema,dry skin;skin peeling;itchy skin;rash
Eczema,redness;rash;skin peeling;dry skin;itchy skin
Eczema,itchy skin;redness;dry skin;skin peeling
Eczema,rash;itchy skin;skin peeling;redness
Asthma,wheezing;shortness of breath;chest tightness;rapid breathing
Asthma,shortness of breath;wheezing;chest tightness;difficulty sleeping
Asthma,chest tightness;rapid breathing;wheezing;difficulty sleeping;shortness of breath
Asthma,wheezing;difficulty sleeping;shortness of breath;rapid breathing
Asthma,rapid breathing;chest tightness;wheezing;shortness of breath
";

/// Vietnamese rows using names from the disease information table.
pub const VIETNAMESE_DATASET: &str = "\
benh,trieu_chung
Cảm cúm,sốt cao;ho;đau đầu;mệt mỏi
Cảm cúm,sốt cao;ho;đau nhức cơ thể;mệt mỏi
Cảm cúm,ho;đau đầu;ớn lạnh;sốt cao;mệt mỏi
Cảm cúm,sốt cao;đau đầu;đau nhức cơ thể;ớn lạnh
Viêm dạ dày,đau bụng;buồn nôn;đầy hơi;ợ chua
Viêm dạ dày,buồn nôn;ợ chua;chán ăn;đau bụng
Viêm dạ dày,đầy hơi;đau bụng;chán ăn;buồn nôn;ợ chua
Viêm dạ dày,ợ chua;đầy hơi;buồn nôn;đau bụng
Viêm da,ngứa da;phát ban;da khô;mẩn đỏ
Viêm da,da khô;mẩn đỏ;bong tróc da;ngứa da
Viêm da,phát ban;bong tróc da;ngứa da;da khô;mẩn đỏ
Viêm da,mẩn đỏ;ngứa da;phát ban;bong tróc da
";

/// A single disease whose rows vary around one presentation.
pub const FLU_ONLY_DATASET: &str = "\
benh,trieu_chung
Flu,fever;cough;headache;fatigue
Flu,fever;cough;headache;chills
Flu,fever;cough;fatigue;body ache
Flu,cough;headache;fatigue;chills
Flu,fever;headache;fatigue;body ache
";

/// Write `contents` to `dir/name` and return the path.
pub fn write_dataset(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Load the English fixture through the CSV loader.
pub fn records(dir: &Path) -> Result<Vec<DiseaseRecord>> {
    let path = write_dataset(dir, "dataset.csv", DATASET)?;
    DatasetLoader::default().load(path)
}

/// Configuration pointing at a dataset and model directory under `dir`.
pub fn config(dir: &Path, contents: &str) -> Result<SympredConfig> {
    let mut config = SympredConfig::default();
    config.dataset.path = write_dataset(dir, "dataset.csv", contents)?;
    config.model_dir = dir.join("models");
    Ok(config)
}
