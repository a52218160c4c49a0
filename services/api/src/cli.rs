use crate::demo::{
    run_demo, run_score, run_stress_batch, run_stress_predict, ScoreArgs, StressBatchArgs,
    StressPredictArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use edusight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "edusight",
    about = "Score holistic student assessments and classify survey stress levels",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute an EduSight 360 score from a JSON assessment file
    Score(ScoreArgs),
    /// Run the stress classifier on one survey or a CSV cohort
    Stress {
        #[command(subcommand)]
        command: StressCommand,
    },
    /// Score a built-in sample student and survey
    Demo,
}

#[derive(Subcommand, Debug)]
enum StressCommand {
    /// Classify a single JSON survey and print its intervention plan
    Predict(StressPredictArgs),
    /// Classify every row of a survey CSV export
    Batch(StressBatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Stress {
            command: StressCommand::Predict(args),
        } => run_stress_predict(args),
        Command::Stress {
            command: StressCommand::Batch(args),
        } => run_stress_batch(args),
        Command::Demo => run_demo(),
    }
}
