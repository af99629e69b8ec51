//! CLI front end for payment form validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate one form submission
//! cardform validate --card-number 4111111145551142 --exp-date 08/27 \
//!     --cvv 557 --first-name John --last-name Doe
//!
//! # Replay a form session: one JSON record per stdin line
//! echo '{"cardNumber":"4111111145551142","expDate":"08/27","cvv":"557","firstName":"John","lastName":"Doe"}' \
//!     | cardform session
//!
//! # Pin "today" for expiry checks (YYYY-MM or YYYY-MM-DD)
//! cardform validate --today 2025-06 ...
//!
//! # Forget the issuer between session records
//! cardform session --reset-issuer < records.jsonl
//!
//! # Field helpers
//! cardform luhn 4111111145551142
//! cardform detect 371449635398431
//! cardform generate --issuer amex --count 3
//! ```
//!
//! Exit codes: 0 when everything validated, 1 when validation failed, 2 on
//! bad CLI input. Set `RUST_LOG=cardform=debug` to see each validation step.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use cardform::clock::{Clock, FixedClock, SystemClock};
use cardform::{
    generate, issuer, luhn, mask, CardData, CardErrors, Field, Issuer, Validator,
    ValidatorOptions,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Payment card form validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one payment form submission
    Validate {
        /// Card number, digits only
        #[arg(long, default_value = "")]
        card_number: String,

        /// Expiration date as MM/YY
        #[arg(long, default_value = "")]
        exp_date: String,

        /// Card verification code
        #[arg(long, default_value = "")]
        cvv: String,

        /// Cardholder first name
        #[arg(long, default_value = "")]
        first_name: String,

        /// Cardholder last name
        #[arg(long, default_value = "")]
        last_name: String,

        /// Month used as "today" for expiry checks (YYYY-MM or YYYY-MM-DD)
        #[arg(long, value_parser = parse_today)]
        today: Option<FixedClock>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a stream of JSON form records through one stateful validator
    Session {
        /// Forget the issuer between records
        #[arg(long, alias = "strict")]
        reset_issuer: bool,

        /// Month used as "today" for expiry checks (YYYY-MM or YYYY-MM-DD)
        #[arg(long, value_parser = parse_today)]
        today: Option<FixedClock>,
    },

    /// Check a card number against the Luhn checksum
    Luhn {
        /// Card number, digits only
        card_number: String,
    },

    /// Detect the issuer of a card number
    Detect {
        /// Card number, digits only
        card_number: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Issuer to generate for
        #[arg(short, long, default_value = "visa", value_parser = parse_issuer)]
        issuer: Issuer,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Failures of the CLI itself, as opposed to validation results.
#[derive(Debug)]
enum CliError {
    /// A session line was not a JSON form record.
    InvalidRecord {
        line: usize,
        source: serde_json::Error,
    },
    /// Reading stdin or writing stdout failed.
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRecord { line, source } => {
                write!(f, "line {}: invalid form record: {}", line, source)
            }
            Self::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

fn parse_today(input: &str) -> Result<FixedClock, String> {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(FixedClock::new(date));
    }

    // Expiry checks only look at the month, so a bare YYYY-MM pins its first day
    let (year, month) = input
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .ok_or_else(|| format!("expected YYYY-MM or YYYY-MM-DD, got '{}'", input))?;

    FixedClock::ymd(year, month, 1).ok_or_else(|| format!("no such month: '{}'", input))
}

fn parse_issuer(input: &str) -> Result<Issuer, String> {
    input.parse().map_err(|e: issuer::ParseIssuerError| e.to_string())
}

fn clock_from(today: Option<FixedClock>) -> Box<dyn Clock> {
    match today {
        Some(clock) => Box::new(clock),
        None => Box::new(SystemClock),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            card_number,
            exp_date,
            cvv,
            first_name,
            last_name,
            today,
            output,
        } => {
            let data = CardData::new(card_number, exp_date, cvv, first_name, last_name);
            Ok(cmd_validate(data, clock_from(today), output))
        }
        Commands::Session {
            reset_issuer,
            today,
        } => cmd_session(reset_issuer, clock_from(today)),
        Commands::Luhn { card_number } => Ok(cmd_luhn(&card_number)),
        Commands::Detect { card_number } => Ok(cmd_detect(&card_number)),
        Commands::Generate { issuer, count } => Ok(cmd_generate(issuer, count)),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "cardform failed");
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn print_text_errors(errors: &CardErrors) {
    for field in Field::ALL {
        match errors.message(field) {
            Some(message) => println!("{:<12} {}", field.label(), message),
            None => println!("{:<12} ok", field.label()),
        }
    }
}

fn cmd_validate(data: CardData, clock: Box<dyn Clock>, output: OutputFormat) -> bool {
    let mut validator = Validator::with_clock(clock);
    let errors = validator.validate(data).clone();
    let valid = errors.is_empty();

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if valid { "yes" } else { "no" });
            if let Some(issuer) = validator.issuer() {
                println!("Issuer: {}", issuer);
            }
            println!(
                "Card: {}",
                mask::mask_number(validator.card_data().card_number())
            );
            print_text_errors(&errors);
            if valid {
                println!("Payment Successful");
            }
        }
        OutputFormat::Json => {
            let body = json!({
                "valid": valid,
                "issuer": validator.issuer(),
                "errors": errors,
            });
            println!("{}", body);
        }
    }

    valid
}

fn cmd_session(reset_issuer: bool, clock: Box<dyn Clock>) -> Result<bool, CliError> {
    let options = if reset_issuer {
        ValidatorOptions::strict()
    } else {
        ValidatorOptions::default()
    };
    let mut validator = Validator::with_options(clock, options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &mut validator)
}

/// Feeds one JSON form record per input line through `validator` and writes
/// one `{"valid", "errors"}` object per record. Blank lines are skipped.
fn run_session<R, W, C>(
    input: R,
    mut out: W,
    validator: &mut Validator<C>,
) -> Result<bool, CliError>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let mut all_valid = true;
    let mut records = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let data: CardData =
            serde_json::from_str(&line).map_err(|source| CliError::InvalidRecord {
                line: index + 1,
                source,
            })?;
        records += 1;

        let errors = validator.validate(data);
        all_valid &= errors.is_empty();
        let body = json!({
            "valid": errors.is_empty(),
            "errors": errors,
        });
        writeln!(out, "{}", body)?;
    }

    tracing::info!(records, all_valid, "session finished");
    Ok(all_valid)
}

fn cmd_luhn(card_number: &str) -> bool {
    let pass = luhn::contains_only_numbers(card_number) && luhn::is_luhn_valid(card_number);
    println!("Luhn check: {}", if pass { "PASS" } else { "FAIL" });
    pass
}

fn cmd_detect(card_number: &str) -> bool {
    if !luhn::contains_only_numbers(card_number) {
        eprintln!("Error: card number must contain only digits");
        return false;
    }

    match issuer::classify(card_number) {
        Some(issuer) => {
            println!("Detected Issuer: {}", issuer.name());
            println!("Valid Lengths: {:?}", issuer.valid_lengths());
            println!("CVV Length: {}", issuer.cvv_length());
            true
        }
        None => {
            println!("Detected Issuer: Unknown");
            false
        }
    }
}

fn cmd_generate(issuer: Issuer, count: usize) -> bool {
    for _ in 0..count {
        println!("{}", generate::generate_card(issuer));
    }
    true
}
