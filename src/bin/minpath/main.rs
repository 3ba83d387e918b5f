mod cli;
mod logging;

use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use minpath::{
    description::{GraphDescription, Report},
    error::GraphError,
    shortest_paths::{self, ShortestPaths},
    Graph,
};
use thiserror::Error;
use tracing::debug;

use cli::{Cli, OutputFormat};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("invalid graph description: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError<String>),

    #[error(transparent)]
    Solve(#[from] shortest_paths::Error<String>),

    #[error("target vertex {0:?} does not exist")]
    UnknownTarget(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let result = read_input(&cli).and_then(|input| solve(&cli, &input));
    finish(result)
}

/// Prints the output or the error and maps the outcome to the exit code.
fn finish(result: Result<String, CliError>) -> ExitCode {
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    match &cli.input {
        Some(path) if !cli.reads_stdin() => {
            debug!(path = %path.display(), "reading graph description");
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parses the description, runs the solver and renders the output.
fn solve(cli: &Cli, input: &str) -> Result<String, CliError> {
    let description: GraphDescription<String, f64> = serde_json::from_str(input)?;
    let graph = description.into_graph()?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );

    let mut builder = ShortestPaths::on(&graph);
    if cli.decrease_key {
        builder = builder.decrease_key();
    }
    let paths = builder.run(&cli.source)?;

    match (&cli.to, cli.format) {
        (Some(target), OutputFormat::Text) => render_path_text(&paths, target),
        (Some(target), OutputFormat::Json) => render_path_json(&paths, target),
        (None, OutputFormat::Text) => Ok(render_text(&graph, &paths)),
        (None, OutputFormat::Json) => Ok(serde_json::to_string_pretty(&Report::new(
            &graph, &paths,
        ))?),
    }
}

fn render_text(graph: &Graph<String, f64>, paths: &ShortestPaths<String, f64>) -> String {
    let distances = graph
        .vertices()
        .map(|v| format!("{v}: {}", paths[v]))
        .collect::<Vec<_>>();

    let previous = graph
        .vertices()
        .map(|v| match paths.pred(v) {
            Some(pred) => format!("{v}: {pred}"),
            None => format!("{v}: null"),
        })
        .collect::<Vec<_>>();

    format!(
        "Distances: {{ {} }}\nPrevious vertices: {{ {} }}",
        distances.join(", "),
        previous.join(", ")
    )
}

fn render_path_text(
    paths: &ShortestPaths<String, f64>,
    target: &String,
) -> Result<String, CliError> {
    let distance = paths
        .dist(target)
        .ok_or_else(|| CliError::UnknownTarget(target.clone()))?;

    Ok(match paths.path_to(target) {
        Some(path) => format!("{} (distance {distance})", path.join(" -> ")),
        None => format!("{target} is not reachable from {}", paths.source()),
    })
}

fn render_path_json(
    paths: &ShortestPaths<String, f64>,
    target: &String,
) -> Result<String, CliError> {
    let distance = paths
        .dist(target)
        .ok_or_else(|| CliError::UnknownTarget(target.clone()))?;

    let output = serde_json::json!({
        "source": paths.source(),
        "target": target,
        "distance": distance,
        "path": paths.path_to(target),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}
