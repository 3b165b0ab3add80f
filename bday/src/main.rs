use bdaylib::{
    error::{BdayError, Result},
    formats::{csv::Csv, json::Json, xml::SimpleXml},
    queries::{budget, months, next_birthdays},
    traits::ReadPhonebook,
};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
    Xml,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Query {
    Next,
    Months,
    Budget,
}

#[derive(Parser, Debug)]
#[command(name="bday", version, about="Ближайшие дни рождения и бюджет на подарки")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short='i', long="input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short='o', long="output")]
    output: Option<String>,

    /// Формат телефонной книги
    #[arg(long="format", value_enum)]
    format: Fmt,

    /// Запрос
    #[arg(long="query", value_enum)]
    query: Query,

    /// Дата отсчёта ДД.ММ.ГГГГ (для --query next)
    #[arg(long="date")]
    date: Option<String>,

    /// Подробные логи
    #[arg(short='v', long="verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let phone_list = match cli.format {
        Fmt::Csv => Csv::read(br),
        Fmt::Json => Json::read(br),
        Fmt::Xml => SimpleXml::read(br),
    }?;

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.query {
        Query::Next => {
            let date = cli
                .date
                .ok_or(BdayError::Unsupported("--query next требует --date"))?;
            let next = next_birthdays::get_next_birthdays(&date, &phone_list);
            serde_json::to_writer_pretty(&mut writer, &next)?;
        }
        Query::Months => {
            let groups = months::get_months_list(&phone_list);
            serde_json::to_writer_pretty(&mut writer, &groups)?;
        }
        Query::Budget => {
            let plan = budget::get_minimum_presents_price(&phone_list);
            serde_json::to_writer_pretty(&mut writer, &plan)?;
        }
    }
    writeln!(writer)?;

    writer.flush().map_err(BdayError::from)
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
