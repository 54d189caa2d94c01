use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value;

use rref::{
    payload::{matrix_from_value, MatrixResponse, RrefResponse, VerifyResponse},
    server, telemetry, ApiError, Difficulty, Matrix, MatrixGenerator, RrefError, RrefSolver,
    ServerConfig,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "RREF - generate practice matrices and check reduced row-echelon forms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = ServerConfig::DEFAULT_PORT)]
        port: u16,

        /// Worker threads (one per core when unset)
        #[arg(long)]
        workers: Option<usize>,

        /// Maximum request body in bytes
        #[arg(long, default_value_t = ServerConfig::DEFAULT_PAYLOAD_LIMIT)]
        payload_limit: usize,

        /// Absolute tolerance for answer checks
        #[arg(
            long,
            default_value_t = ServerConfig::DEFAULT_ANSWER_TOLERANCE,
            value_parser = parse_tolerance
        )]
        answer_tolerance: f64,

        /// Emit logs as JSON lines
        #[arg(long)]
        log_json: bool,
    },
    /// Print a practice matrix as JSON
    Generate {
        /// easy, medium or hard (anything else means easy)
        #[arg(long)]
        difficulty: Option<String>,

        /// Seed for a reproducible matrix
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the RREF of a JSON matrix, e.g. '[[2, 4], [1, 3]]'
    Reduce {
        /// Matrix as a JSON array of rows
        matrix: String,
    },
    /// Check a proposed RREF against the reduction of a matrix
    Verify {
        /// Matrix as a JSON array of rows
        matrix: String,

        /// Proposed answer as a JSON array of rows
        answer: String,
    },
    /// Talk to a running server
    #[cfg(feature = "client")]
    Remote {
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        url: String,

        #[command(subcommand)]
        action: RemoteAction,
    },
}

#[cfg(feature = "client")]
#[derive(Subcommand)]
enum RemoteAction {
    /// Fetch a practice matrix
    GetMatrix {
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Reduce a JSON matrix on the server
    CheckRref { matrix: String },
}

fn parse_tolerance(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(_) => Err("tolerance must be a finite, non-negative number".to_string()),
        Err(err) => Err(err.to_string()),
    }
}

fn parse_matrix(raw: &str) -> Result<Matrix, ApiError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| RrefError::InvalidInput)?;
    Ok(matrix_from_value(Some(&value))?)
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let log_json = matches!(cli.command, Commands::Serve { log_json: true, .. });
    telemetry::init(log_json)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            workers,
            payload_limit,
            answer_tolerance,
            ..
        } => {
            let mut config = ServerConfig::with_address(host, port)
                .with_payload_limit(payload_limit)
                .with_answer_tolerance(answer_tolerance);
            if let Some(workers) = workers {
                config = config.with_workers(workers);
            }
            server::run(config).await?;
        }
        Commands::Generate { difficulty, seed } => {
            let difficulty = Difficulty::parse_or_default(difficulty.as_deref());
            let matrix = match seed {
                Some(seed) => MatrixGenerator::generate(difficulty, &mut StdRng::seed_from_u64(seed)),
                None => MatrixGenerator::generate(difficulty, &mut rand::thread_rng()),
            };
            println!("{}", serde_json::to_string(&MatrixResponse { matrix })?);
        }
        Commands::Reduce { matrix } => {
            let matrix = parse_matrix(&matrix)?;
            let rref = RrefSolver::new().reduce(&matrix).map_err(ApiError::from)?;
            println!("{}", serde_json::to_string(&RrefResponse { rref })?);
        }
        Commands::Verify { matrix, answer } => {
            let matrix = parse_matrix(&matrix)?;
            let answer = parse_matrix(&answer)?;
            let (check, rref) = RrefSolver::new()
                .verify(&matrix, &answer, ServerConfig::DEFAULT_ANSWER_TOLERANCE)
                .map_err(ApiError::from)?;
            println!(
                "{}",
                serde_json::to_string(&VerifyResponse::new(check, rref))?
            );
        }
        #[cfg(feature = "client")]
        Commands::Remote { url, action } => {
            let client = rref::PracticeClient::new(&url);
            match action {
                RemoteAction::GetMatrix { difficulty } => {
                    let difficulty = Difficulty::parse_or_default(difficulty.as_deref());
                    let matrix = client.get_matrix(difficulty).await?;
                    println!("{}", serde_json::to_string(&MatrixResponse { matrix })?);
                }
                RemoteAction::CheckRref { matrix } => {
                    let matrix = parse_matrix(&matrix)?;
                    let rref = client.check_rref(&matrix).await?;
                    println!("{}", serde_json::to_string(&RrefResponse { rref })?);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tolerance() {
        assert_eq!(parse_tolerance("1e-6"), Ok(1e-6));
        assert_eq!(parse_tolerance("0"), Ok(0.0));
        assert!(parse_tolerance("NaN").is_err());
        assert!(parse_tolerance("inf").is_err());
        assert!(parse_tolerance("-1").is_err());
        assert!(parse_tolerance("abc").is_err());
    }

    #[test]
    fn test_serve_rejects_nan_tolerance() {
        let parsed = Cli::try_parse_from(["rref", "serve", "--answer-tolerance", "NaN"]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from(["rref", "serve", "--answer-tolerance", "1e-6"]);
        assert!(matches!(
            parsed.map(|cli| cli.command),
            Ok(Commands::Serve { answer_tolerance, .. }) if answer_tolerance == 1e-6
        ));
    }
}
