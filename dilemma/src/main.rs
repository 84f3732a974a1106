use clap::{ArgAction, Parser, ValueEnum};
use dilemmalib::{
    error::{DilemmaError, Result},
    formats::{csv::Csv, text::Text, xml::Xml},
    model::InputData,
    strategy::{brute_force::BruteForceStrategy, recursive::RecursiveStrategy},
    traits::{ReadInput, Strategy, WriteSolution},
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Csv,
    Xml,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Algo {
    Recursive,
    BruteForce,
}

#[derive(Parser, Debug)]
#[command(
    name = "dilemma",
    version,
    about = "Поиск ожидаемых платежей, сумма которых равна банковскому переводу"
)]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат входа
    #[arg(long = "in-format", value_enum, default_value = "text")]
    in_format: Fmt,

    /// Формат выхода
    #[arg(long = "out-format", value_enum, default_value = "text")]
    out_format: Fmt,

    /// Алгоритм поиска
    #[arg(long = "strategy", value_enum, default_value = "recursive")]
    strategy: Algo,

    /// Не отсекать ветки даже при неотрицательных суммах
    #[arg(long = "no-pruning")]
    no_pruning: bool,

    /// Не проверять заранее одиночный платёж, равный переводу
    #[arg(long = "no-shortcut")]
    no_shortcut: bool,

    /// Подробнее логировать (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG имеет приоритет над -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let input: InputData = match cli.in_format {
        Fmt::Text => Text::read(br),
        Fmt::Csv => Csv::read(br),
        Fmt::Xml => Xml::read(br),
    }?;

    let solution = match cli.strategy {
        Algo::Recursive => RecursiveStrategy::new()
            .with_pruning(!cli.no_pruning)
            .with_shortcut(!cli.no_shortcut)
            .find_solution(&input),
        Algo::BruteForce => BruteForceStrategy.find_solution(&input),
    }?;

    match &solution {
        Some(s) => tracing::info!(items = s.len(), "solution found"),
        None => tracing::info!("no subset matches the transfer"),
    }

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        Fmt::Text => Text::write(&mut writer, solution.as_ref()),
        Fmt::Csv => Csv::write(&mut writer, solution.as_ref()),
        Fmt::Xml => Xml::write(&mut writer, solution.as_ref()),
    }?;

    writer.flush().map_err(DilemmaError::from)
}
