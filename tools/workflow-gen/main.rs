use clap::Parser;
use rand::{Rng, rngs::ThreadRng};
use serde_json::{Value, json};
use shinsa::capability::{CapabilityRecord, CapabilitySnapshot};
use std::fs;

/// A CLI tool to generate sample workflows and capability snapshots for the Shinsa validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated workflow JSON to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// The path to write the generated capability status JSON to
    #[arg(long, default_value = "generated_status.json")]
    status_output: String,

    /// The number of camera pipelines to generate
    #[arg(long, default_value_t = 2)]
    pipelines: usize,

    /// Inject configuration defects (missing ids, bad polygons, out-of-range thresholds)
    #[arg(long)]
    with_defects: bool,

    /// Add a feedback edge so the workflow contains a loop
    #[arg(long)]
    with_cycle: bool,
}

const MODEL_IDS: [&str; 4] = [
    "yolov8n",
    "face-recognition-v1",
    "crowd-counter-v1",
    "license-plate-v1",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.pipelines == 0 {
        eprintln!("Error: --pipelines must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating workflow with {} pipeline(s) (defects: {}, cycle: {})...",
        cli.pipelines, cli.with_defects, cli.with_cycle
    );

    let workflow = generate_workflow(&mut rng, cli.pipelines, cli.with_defects, cli.with_cycle);
    let snapshot = generate_snapshot();

    fs::write(&cli.output, serde_json::to_string_pretty(&workflow)?)?;
    println!("Successfully saved workflow to '{}'", cli.output);

    fs::write(&cli.status_output, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Successfully saved capability status to '{}'", cli.status_output);

    Ok(())
}

fn generate_workflow(rng: &mut ThreadRng, pipelines: usize, defects: bool, cycle: bool) -> Value {
    let mut nodes: Vec<Value> = Vec::new();
    let mut edges: Vec<Value> = Vec::new();

    for index in 0..pipelines {
        let row = index as f64 * 260.0;

        let camera_id = format!("camera-{}", index);
        let model_id = format!("model-{}", index);
        let action_id = format!("action-{}", index);

        // A defective pipeline may lose its camera assignment.
        let camera_data = if defects && rng.random_bool(0.5) {
            json!({})
        } else {
            json!({"cameraId": format!("cam-{}", index)})
        };
        nodes.push(json!({
            "id": camera_id,
            "type": "camera",
            "position": {"x": 0.0, "y": row},
            "data": camera_data,
        }));

        let confidence = if defects && rng.random_bool(0.3) {
            1.5
        } else {
            rng.random_range(0.25..0.9)
        };
        let selected_model = MODEL_IDS[rng.random_range(0..MODEL_IDS.len())];
        let model_data = if defects && rng.random_bool(0.3) {
            json!({"confidence": confidence})
        } else {
            json!({"modelId": selected_model, "confidence": confidence})
        };
        nodes.push(json!({
            "id": model_id,
            "type": "model",
            "position": {"x": 280.0, "y": row},
            "data": model_data,
        }));
        edges.push(json!({"source": camera_id, "target": model_id}));

        let mut upstream = model_id.clone();
        if rng.random_bool(0.5) {
            let zone_id = format!("zone-{}", index);
            let polygon = if defects && rng.random_bool(0.5) {
                json!([[0, 0], [120, 0]])
            } else {
                json!([[0, 0], [240, 0], [240, 180], [0, 180]])
            };
            nodes.push(json!({
                "id": zone_id,
                "type": "zone",
                "position": {"x": 560.0, "y": row},
                "data": {"polygon": polygon},
            }));
            edges.push(json!({"source": upstream, "target": zone_id}));
            upstream = zone_id;
        }

        let action_data = if defects && rng.random_bool(0.5) {
            json!({"actionType": "email", "config": {}})
        } else {
            json!({"actionType": "webhook", "config": {"url": "http://localhost:9000/hook"}})
        };
        nodes.push(json!({
            "id": action_id,
            "type": "action",
            "position": {"x": 840.0, "y": row},
            "data": action_data,
        }));
        edges.push(json!({"source": upstream, "target": action_id}));

        println!("-> Generated pipeline {} ({} -> ... -> {})", index, camera_id, action_id);
    }

    // A free-floating sticky note; the validator leaves these alone.
    nodes.push(json!({
        "id": "note-0",
        "type": "default",
        "position": {"x": 0.0, "y": -180.0},
        "data": {"label": "Generated for validator testing"},
    }));

    if cycle {
        edges.push(json!({"source": "action-0", "target": "model-0"}));
        println!("-> Added feedback edge action-0 -> model-0");
    }

    json!({"nodes": nodes, "edges": edges})
}

/// A snapshot resembling a mid-rollout deployment: most components ready,
/// one beta, one unported, and two needing setup of different shapes.
fn generate_snapshot() -> CapabilitySnapshot {
    let mut snapshot = CapabilitySnapshot::default();

    snapshot
        .models
        .insert("yolov8n".to_string(), CapabilityRecord::ready());
    snapshot.models.insert(
        "face-recognition-v1".to_string(),
        CapabilityRecord::beta("Face matching accuracy is still being tuned"),
    );
    snapshot.models.insert(
        "crowd-counter-v1".to_string(),
        CapabilityRecord::not_implemented("Crowd counting has not been ported to the new runtime"),
    );
    snapshot.models.insert(
        "license-plate-v1".to_string(),
        CapabilityRecord::needs_config(
            vec!["easyocr".to_string()],
            vec!["Install: pip install easyocr".to_string()],
            false,
        ),
    );

    snapshot
        .inputs
        .insert("camera".to_string(), CapabilityRecord::ready());
    snapshot.inputs.insert(
        "youtube".to_string(),
        CapabilityRecord::needs_config(
            vec!["yt-dlp".to_string()],
            vec!["Install: pip install yt-dlp".to_string()],
            true,
        ),
    );

    snapshot
        .processing
        .insert("zone".to_string(), CapabilityRecord::ready());

    snapshot
        .actions
        .insert("webhook".to_string(), CapabilityRecord::ready());
    snapshot.actions.insert(
        "email".to_string(),
        CapabilityRecord::needs_config(
            vec!["smtp credentials".to_string()],
            vec!["Set SMTP_HOST and SMTP_PASSWORD in the environment".to_string()],
            false,
        ),
    );
    snapshot.actions.insert(
        "telegram".to_string(),
        CapabilityRecord::not_implemented("Telegram delivery is not wired up yet"),
    );

    snapshot
        .outputs
        .insert("dataPreview".to_string(), CapabilityRecord::ready());

    snapshot
        .drone
        .insert("droneInput".to_string(), CapabilityRecord::beta("Drone link drops under load"));

    snapshot
}
