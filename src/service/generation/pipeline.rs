//! The arena generation pipeline.
//!
//! Eight sequential steps, each recorded on the job row as it completes:
//! concept brief and lore from Anthropic, background art and an ambient
//! video loop from ComfyUI, a voice intro from ElevenLabs, a soundtrack
//! pick from a static mood table, manifest assembly, and finally the arena
//! row itself. A failure marks the job failed with the step and error and
//! stops; artifacts from completed steps stay on the job for inspection.

use serde_json::{json, Map, Value};
use tracing::{error, info};

use crate::{
    data::{arena::ArenaRepository, generation::GenerationJobRepository},
    error::generation::GenerationError,
    model::{
        arena::CreateArenaParams,
        generation::{AssetManifest, ConceptBrief, GenerationRequest, LorePack, ARENA_STEP_LABELS},
    },
    service::generation::clients::{AnthropicClient, ComfyUiClient, ElevenLabsClient},
    state::AppState,
};

/// Static soundtrack table keyed by the brief's mood.
///
/// The first entry whose mood keyword appears in the brief wins; the last
/// row is the fallback.
const SOUNDTRACKS: [(&str, &str); 6] = [
    ("dark", "/static/music/shadow-depths.mp3"),
    ("mystic", "/static/music/arcane-winds.mp3"),
    ("battle", "/static/music/steel-resolve.mp3"),
    ("serene", "/static/music/still-waters.mp3"),
    ("triumphant", "/static/music/crowned-dawn.mp3"),
    ("", "/static/music/neutral-ground.mp3"),
];

/// Runs one generation job to completion.
///
/// Spawned onto its own tokio task by the generation service; never
/// returns an error, every failure path lands on the job row instead.
pub async fn run(state: AppState, job_id: i32, request: GenerationRequest) {
    let repo = GenerationJobRepository::new(&state.db);

    if let Err(e) = repo.mark_running(job_id).await {
        error!("Generation job {} could not be marked running: {}", job_id, e);
        return;
    }

    info!(
        "Generation job {} started for arena '{}' ({})",
        job_id, request.name, request.theme
    );

    match run_steps(&state, job_id, &request).await {
        Ok((arena_id, manifest)) => {
            if let Err(e) = repo.mark_completed(job_id, arena_id, manifest).await {
                error!("Generation job {} finished but could not be closed: {}", job_id, e);
                return;
            }
            info!("Generation job {} completed, arena {}", job_id, arena_id);
        }
        Err((step, e)) => {
            let label = ARENA_STEP_LABELS
                .get((step - 1) as usize)
                .copied()
                .unwrap_or("unknown");
            error!("Generation job {} failed at step {} ({}): {}", job_id, step, label, e);

            let message = format!("{}: {}", label, e);
            if let Err(e) = repo.mark_failed(job_id, step, &message).await {
                error!("Generation job {} failure could not be recorded: {}", job_id, e);
            }
        }
    }
}

/// Executes the step sequence, tagging any failure with its step number.
async fn run_steps(
    state: &AppState,
    job_id: i32,
    request: &GenerationRequest,
) -> Result<(i32, Value), (i32, GenerationError)> {
    let repo = GenerationJobRepository::new(&state.db);
    let mut artifacts = Map::new();

    // Step 1: concept brief
    let brief = concept_brief(state, request).await.map_err(|e| (1, e))?;
    artifacts.insert("brief".to_string(), json!(brief));
    record(&repo, job_id, 1, &artifacts).await?;

    // Step 2: lore and voice script
    let lore = lore_pack(state, request, &brief).await.map_err(|e| (2, e))?;
    artifacts.insert("lore".to_string(), json!(lore));
    record(&repo, job_id, 2, &artifacts).await?;

    // Step 3: background art
    let background_url = comfyui_asset(state, &image_workflow(request, &brief))
        .await
        .map_err(|e| (3, e))?;
    artifacts.insert("background_url".to_string(), json!(background_url));
    record(&repo, job_id, 3, &artifacts).await?;

    // Step 4: ambient video loop
    let video_url = comfyui_asset(state, &video_workflow(request, &brief))
        .await
        .map_err(|e| (4, e))?;
    artifacts.insert("video_url".to_string(), json!(video_url));
    record(&repo, job_id, 4, &artifacts).await?;

    // Step 5: voice intro
    let voice_intro_url = voice_intro(state, job_id, &lore).await.map_err(|e| (5, e))?;
    artifacts.insert("voice_intro_url".to_string(), json!(voice_intro_url));
    record(&repo, job_id, 5, &artifacts).await?;

    // Step 6: soundtrack pick
    let music_url = soundtrack_for_mood(&brief.mood).to_string();
    artifacts.insert("music_url".to_string(), json!(music_url));
    record(&repo, job_id, 6, &artifacts).await?;

    // Step 7: asset manifest
    let manifest = AssetManifest {
        name: request.name.clone(),
        theme: request.theme.clone(),
        difficulty: request.difficulty,
        background_url: Some(background_url),
        video_url: Some(video_url),
        voice_intro_url: Some(voice_intro_url),
        music_url: Some(music_url),
    };
    artifacts.insert("manifest".to_string(), json!(manifest));
    record(&repo, job_id, 7, &artifacts).await?;

    // Step 8: persist the arena
    let arena = ArenaRepository::new(&state.db)
        .create(CreateArenaParams {
            name: manifest.name.clone(),
            theme: manifest.theme.clone(),
            description: lore.lore.clone(),
            background_url: manifest.background_url.clone(),
            video_url: manifest.video_url.clone(),
            voice_intro_url: manifest.voice_intro_url.clone(),
            music_url: manifest.music_url.clone(),
            special_rules: None,
            difficulty: manifest.difficulty,
        })
        .await
        .map_err(|e| (8, GenerationError::DbErr(e)))?;

    Ok((arena.id, Value::Object(artifacts)))
}

async fn record(
    repo: &GenerationJobRepository<'_>,
    job_id: i32,
    step: i32,
    artifacts: &Map<String, Value>,
) -> Result<(), (i32, GenerationError)> {
    repo.record_step(job_id, step, Value::Object(artifacts.clone()))
        .await
        .map_err(|e| (step, GenerationError::DbErr(e)))
}

/// Step 1: asks for a short creative brief as JSON.
async fn concept_brief(
    state: &AppState,
    request: &GenerationRequest,
) -> Result<ConceptBrief, GenerationError> {
    let client = AnthropicClient::from_config(&state.http_client, &state.config)?;

    let prompt = format!(
        "Design a concept brief for a trading card game arena named \"{}\" with the \
         theme \"{}\" at difficulty {} of 5. Respond with only a JSON object with keys \
         \"summary\" (two sentences), \"palette\" (short color description), and \
         \"mood\" (one word, lowercase).",
        request.name, request.theme, request.difficulty
    );

    let text = client.complete(&prompt).await?;
    parse_json_reply(&text)
}

/// Step 2: expands the brief into lore and a short voice script.
async fn lore_pack(
    state: &AppState,
    request: &GenerationRequest,
    brief: &ConceptBrief,
) -> Result<LorePack, GenerationError> {
    let client = AnthropicClient::from_config(&state.http_client, &state.config)?;

    let prompt = format!(
        "Write lore for the arena \"{}\" ({}). Concept: {}. Respond with only a JSON \
         object with keys \"lore\" (one paragraph of world lore) and \"voice_script\" \
         (at most 40 words, spoken by the arena announcer as a match begins).",
        request.name, request.theme, brief.summary
    );

    let text = client.complete(&prompt).await?;
    parse_json_reply(&text)
}

/// Steps 3 and 4: runs a ComfyUI workflow and returns the output asset URL.
async fn comfyui_asset(state: &AppState, workflow: &Value) -> Result<String, GenerationError> {
    let client = ComfyUiClient::from_config(&state.http_client, &state.config)?;
    client.generate(workflow.clone()).await
}

/// Step 5: synthesizes the announcer intro and stores it as a job asset.
async fn voice_intro(
    state: &AppState,
    job_id: i32,
    lore: &LorePack,
) -> Result<String, GenerationError> {
    let client = ElevenLabsClient::from_config(&state.http_client, &state.config)?;
    client
        .synthesize(&lore.voice_script, &format!("arena_{}_intro.mp3", job_id))
        .await
}

/// Picks a soundtrack for the brief's mood from the static table.
fn soundtrack_for_mood(mood: &str) -> &'static str {
    let mood = mood.to_lowercase();

    SOUNDTRACKS
        .iter()
        .find(|(keyword, _)| mood.contains(keyword))
        .map(|(_, track)| *track)
        // the "" fallback row always matches, but be explicit
        .unwrap_or("/static/music/neutral-ground.mp3")
}

/// Parses a model reply that should be a JSON object, tolerating prose
/// around it by slicing from the first `{` to the last `}`.
fn parse_json_reply<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, GenerationError> {
    let start = text.find('{');
    let end = text.rfind('}');

    let slice = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(GenerationError::Api {
                service: "anthropic",
                detail: "reply carried no JSON object".to_string(),
            })
        }
    };

    Ok(serde_json::from_str(slice)?)
}

/// Minimal text-to-image workflow for the arena background.
fn image_workflow(request: &GenerationRequest, brief: &ConceptBrief) -> Value {
    json!({
        "3": {
            "class_type": "KSampler",
            "inputs": { "seed": request.difficulty, "steps": 30 }
        },
        "6": {
            "class_type": "CLIPTextEncode",
            "inputs": {
                "text": format!(
                    "trading card game arena background, {}, {} palette, {} mood, no text",
                    request.theme, brief.palette, brief.mood
                )
            }
        },
        "9": {
            "class_type": "SaveImage",
            "inputs": { "filename_prefix": "arena_bg" }
        }
    })
}

/// Minimal image-to-video workflow for the ambient loop.
fn video_workflow(request: &GenerationRequest, brief: &ConceptBrief) -> Value {
    json!({
        "3": {
            "class_type": "KSampler",
            "inputs": { "seed": request.difficulty, "steps": 20 }
        },
        "6": {
            "class_type": "CLIPTextEncode",
            "inputs": {
                "text": format!(
                    "slow ambient loop of a {} arena, {} mood, subtle motion",
                    request.theme, brief.mood
                )
            }
        },
        "9": {
            "class_type": "SaveAnimatedWEBP",
            "inputs": { "filename_prefix": "arena_loop" }
        }
    })
}
