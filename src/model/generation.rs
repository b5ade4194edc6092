use serde::{Deserialize, Serialize};

pub const JOB_TYPE_ARENA: &str = "arena";

pub const STATUS_QUEUED: &str = "queued";
pub const STATUS_RUNNING: &str = "running";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// Number of steps in the arena pipeline.
pub const ARENA_PIPELINE_STEPS: i32 = 8;

/// Human-readable step labels, indexed by step number minus one. Used in
/// progress logging and failure records on the job row.
pub const ARENA_STEP_LABELS: [&str; 8] = [
    "concept brief",
    "lore and voice script",
    "background art",
    "ambient video",
    "voice intro",
    "soundtrack",
    "asset manifest",
    "persist arena",
];

/// Request parameters stored on the job row and read back by the worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub name: String,
    pub theme: String,
    pub difficulty: i32,
}

/// Output of the concept step: a short creative brief the later steps
/// build their prompts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptBrief {
    pub summary: String,
    pub palette: String,
    pub mood: String,
}

/// Output of the lore step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LorePack {
    pub lore: String,
    /// Script read by the voice intro step, kept short for TTS cost.
    pub voice_script: String,
}

/// Final asset manifest assembled before the arena row is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub name: String,
    pub theme: String,
    pub difficulty: i32,
    pub background_url: Option<String>,
    pub video_url: Option<String>,
    pub voice_intro_url: Option<String>,
    pub music_url: Option<String>,
}
