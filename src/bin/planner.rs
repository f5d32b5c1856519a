use clap::Parser;
use pacsearch::{
    agent::{Agent, AgentError, ClosestDotAgent, SearchAgent},
    config::AgentConfig,
    grid::{Layout, Position},
    search::{
        problem_formulations::{CostFunctionName, ProblemName},
        HeuristicName, SearchEngineName, Verbosity,
    },
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Plan a path through a maze.
struct Cli {
    #[arg(help = "The maze layout file", short = 'l', long = "layout", id = "LAYOUT")]
    layout: PathBuf,
    #[arg(
        help = "A TOML agent configuration, overrides the search flags below",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Bfs
    )]
    engine: SearchEngineName,
    #[arg(
        value_enum,
        help = "The search problem to solve",
        short = 'p',
        long = "problem",
        id = "PROBLEM",
        default_value_t = ProblemName::Position
    )]
    problem: ProblemName,
    #[arg(
        value_enum,
        help = "The heuristic to guide the search with",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Zero
    )]
    heuristic: HeuristicName,
    #[arg(
        help = "The goal cell of the position problem, as x,y",
        long = "goal",
        id = "GOAL",
        value_parser = parse_position
    )]
    goal: Option<Position>,
    #[arg(
        value_enum,
        help = "The step cost function of the position and capsule problems",
        long = "cost",
        id = "COST",
        default_value_t = CostFunctionName::Unit
    )]
    cost: CostFunctionName,
    #[arg(
        help = "The wall-clock budget of the search, e.g. 30s",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Eat all the food by walking to the closest dot repeatedly, \
        ignores the search flags",
        long = "closest-dot"
    )]
    closest_dot: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn parse_position(text: &str) -> Result<Position, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {:?}", text))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate {:?}: {}", value, e))
    };
    Ok(Position::new(parse(x)?, parse(y)?))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            println!("No plan found: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AgentError> {
    let layout = Layout::from_path(&cli.layout)?;
    info!(width = layout.width(), height = layout.height(), start = %layout.start());

    if cli.closest_dot {
        let mut agent = ClosestDotAgent::new();
        agent.register_initial_state(&layout)?;
        report(agent.plan().to_string(), agent.total_cost(), agent.expanded());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AgentConfig::from_path(path)?,
        None => AgentConfig {
            goal: cli.goal,
            cost: cli.cost,
            time_limit: cli.time_limit,
            ..AgentConfig::new(cli.engine, cli.problem, cli.heuristic)
        },
    };
    let mut agent = SearchAgent::new(config)?;
    agent.register_initial_state(&layout)?;
    report(agent.plan().to_string(), agent.total_cost(), agent.expanded());
    Ok(())
}

fn report(plan: String, total_cost: f64, expanded: usize) {
    println!("Plan found:");
    println!("{}", plan);
    println!("Path found with total cost of {}", total_cost);
    println!("Search nodes expanded: {}", expanded);
}
