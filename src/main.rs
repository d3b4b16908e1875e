use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use spelling_trainer::config::Config;
use spelling_trainer::logging;
use spelling_trainer::seed;
use spelling_trainer::shell::Session;
use spelling_trainer::{load_or_create, JsonFilePersistence, Trainer};

#[derive(Parser)]
#[command(author, version, about = "Spelling trainer: type the word that matches the picture")]
struct Cli {
    /// Where progress is stored (overrides SPELLING_TRAINER_DATA)
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON word list to quiz on (overrides SPELLING_TRAINER_PAIRS)
    #[arg(long)]
    pairs: Option<PathBuf>,

    /// Zero the stored statistics before starting
    #[arg(long, default_value_t = false)]
    reset_stats: bool,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.data, cli.pairs);
    let _log_guard = logging::init_tracing(&config);

    let pairs = match config.pairs_path.as_deref() {
        Some(path) => match seed::load_pairs(path) {
            Ok(pairs) => pairs,
            Err(err) => {
                tracing::error!(error = %err, "failed to load word list");
                return ExitCode::FAILURE;
            }
        },
        None => seed::default_pairs(),
    };

    let store = JsonFilePersistence::new(&config.data_path);
    let mut rng = rand::rng();

    let mut trainer: Trainer = match load_or_create(&store, pairs, &mut rng) {
        Ok(trainer) => trainer,
        Err(err) => {
            tracing::error!(error = %err, path = %config.data_path.display(), "cannot start trainer");
            return ExitCode::FAILURE;
        }
    };

    if cli.reset_stats {
        trainer.reset_statistics();
    }

    let stdin = std::io::stdin();
    let mut session = Session::new(trainer, &store, rng);
    if let Err(err) = session.run(stdin.lock(), std::io::stdout()) {
        tracing::error!(error = %err, "terminal i/o failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
