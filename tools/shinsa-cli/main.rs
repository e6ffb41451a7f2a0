use clap::Parser;
use shinsa::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A rule-based workflow graph validation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file (canvas export)
    workflow_path: Option<String>,
    /// Optional path to the capability status JSON file
    status_path: Option<String>,

    /// Print the report as JSON instead of human-readable text
    #[arg(short, long)]
    json: bool,

    /// Write a Graphviz DOT rendering of the workflow to this path
    #[arg(long, value_name = "FILE")]
    dot: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = if cli.human {
        run_interactive()
    } else {
        run_non_interactive(cli)
    };
    std::process::exit(exit_code);
}

fn run_validation(
    workflow_path: String,
    status_path: Option<String>,
    json_output: bool,
    dot_path: Option<String>,
) -> i32 {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let workflow_json = fs::read_to_string(&workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &workflow_path, e
        ))
    });

    let status_json = status_path.map(|path| {
        fs::read_to_string(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read status file '{}': {}", path, e)))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let workflow = WorkflowDefinition::from_canvas_json(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let snapshot = match &status_json {
        Some(json) => {
            Some(CapabilitySnapshot::from_json(json).unwrap_or_else(|e| exit_with_error(&e.to_string())))
        }
        None => {
            if !json_output {
                println!("No capability snapshot provided. Assuming all components are available.");
            }
            None
        }
    };

    // --- 3. Validation ---
    let validate_start = Instant::now();
    let validator = Validator::new();
    let report = validator.validate(&workflow, snapshot.as_ref());
    let validate_duration = validate_start.elapsed();

    // --- 4. Optional DOT Export ---
    if let Some(path) = dot_path {
        fs::write(&path, workflow.to_dot())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write DOT file '{}': {}", path, e)));
        if !json_output {
            println!("Wrote DOT rendering to '{}'", path);
        }
    }

    // --- 5. Report ---
    if json_output {
        let serialized = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
        println!("{}", serialized);
    } else {
        println!();
        print!("{}", ReportFormatter::format_report(&report));

        let total_duration = total_start.elapsed();
        println!("\n--- Performance Summary ---");
        println!("File Loading:  {:?}", load_duration);
        println!("Validation:    {:?}", validate_duration);
        println!("Total:         {:?}", total_duration);
        println!(
            "Graph Size:    {} nodes, {} edges",
            workflow.nodes.len(),
            workflow.edges.len()
        );
        println!();
    }

    if !report.can_deploy {
        2
    } else if report.should_warn {
        1
    } else {
        0
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) -> i32 {
    let workflow_path = cli.workflow_path.unwrap_or_else(|| {
        exit_with_error("Workflow path is required in non-interactive mode.");
    });

    run_validation(workflow_path, cli.status_path, cli.json, cli.dot)
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() -> i32 {
    println!("--- Shinsa Interactive Mode ---");

    let workflow_path = prompt_for_input("Enter workflow path", Some("data/workflow.json"));
    let status_path_str = prompt_for_input(
        "Enter capability status path (optional)",
        Some("data/status.json"),
    );

    let status_path = if status_path_str.is_empty() {
        None
    } else {
        Some(status_path_str)
    };

    run_validation(workflow_path, status_path, false, None)
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

/// Blocked, unreadable, and unparseable all map to the blocking exit code.
fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(2);
}
