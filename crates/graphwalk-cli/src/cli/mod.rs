//! Clap CLI definition: root struct, subcommands, and shared argument types.
use clap::{Args, Parser, Subcommand, ValueEnum};
use graphwalk_core::{DEFAULT_EDGE_PROBABILITY, DEFAULT_VERTICES, Strategy, Vertex};

/// An explicit edge given on the command line as `U-V` (or `U,V`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeArg {
    pub u: Vertex,
    pub v: Vertex,
}

impl std::str::FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (u, v) = s
            .split_once(['-', ','])
            .ok_or_else(|| format!("expected an edge like `3-7`, got {s:?}"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<Vertex>()
                .map_err(|e| format!("invalid vertex {part:?} in edge {s:?}: {e}"))
        };
        Ok(EdgeArg {
            u: parse(u)?,
            v: parse(v)?,
        })
    }
}

/// Output format for CLI commands.
///
/// `Human` prints one line per result to stdout. `Json` prints a single JSON
/// document.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// Which traversal strategies the `search` subcommand runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Breadth-first search only.
    Bfs,
    /// Depth-first search only.
    Dfs,
    /// Breadth-first, then depth-first (default).
    Both,
}

impl StrategyArg {
    /// The core strategies to run, in order.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyArg::Bfs => &[Strategy::BreadthFirst],
            StrategyArg::Dfs => &[Strategy::DepthFirst],
            StrategyArg::Both => &Strategy::ALL,
        }
    }
}

/// Parameters of the random graph shared by `search` and `generate`.
#[derive(Args, Clone, Debug)]
pub struct GraphArgs {
    /// Number of vertices.
    #[arg(long, short = 'n', env = "GRAPHWALK_VERTICES", default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Chance, in percent, that each vertex pair is joined by an edge.
    #[arg(
        long,
        short = 'p',
        env = "GRAPHWALK_PROBABILITY",
        default_value_t = DEFAULT_EDGE_PROBABILITY,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub probability: u8,

    /// Seed for the random generator. A fresh seed is drawn when omitted.
    #[arg(long, short = 's', env = "GRAPHWALK_SEED")]
    pub seed: Option<u64>,
}

/// All top-level subcommands exposed by the `graphwalk` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Search for a path between two vertices with BFS and/or DFS.
    Search {
        #[command(flatten)]
        graph: GraphArgs,
        /// Use this edge instead of random generation (repeatable, `U-V`).
        #[arg(long = "edge", short = 'e', value_name = "U-V")]
        edges: Vec<EdgeArg>,
        /// Start vertex.
        #[arg(long, default_value_t = 0)]
        start: Vertex,
        /// Target vertex (default: the last vertex).
        #[arg(long)]
        target: Option<Vertex>,
        /// Strategy to run: bfs, dfs, or both (default).
        #[arg(long, default_value = "both", value_enum)]
        strategy: StrategyArg,
    },

    /// Generate a random graph and print its edge list.
    Generate {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print the graphwalk-core library version.
    Version,
}

/// Root CLI struct for the `graphwalk` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Breadth-first and depth-first path search on undirected graphs",
    long_about = "Builds an undirected graph (random or from explicit edges), searches\n\
                  it from a start vertex to a target vertex with breadth-first and\n\
                  depth-first traversal, and prints the paths found."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log search progress to stderr and list visited vertices
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable ANSI color codes in log output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}
