//! IMO Bench CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use imobench_cli::commands::{
    check_counts, count_datasets, list_answers, list_gradings, list_proofs,
};
use imobench_cli::logging::{LogConfig, LogFormat, init_logging};
use imobench_cli::output::{
    answers_table, counts_table, gradings_table, proofs_table, to_json,
};
use imobench_ingest::{AnswerBenchQuery, BenchLoader, GradingBenchQuery, ProofBenchQuery};
use imobench_model::Category;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{AnswerArgs, Cli, Command, GradingArgs, LogFormatArg, LogLevelArg, ProofArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    init_logging(&log_config);
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let loader = BenchLoader::new(cli.data_dir.as_deref())?;
    match cli.command {
        Command::Check(args) => {
            let counts = count_datasets(&loader, !args.no_validate)?;
            println!("{}", counts_table(&counts));
            if args.counts {
                check_counts(&counts)?;
                println!("Dataset counts look right.");
            }
        }
        Command::Answer(args) => run_answer(&loader, args)?,
        Command::Proof(args) => run_proof(&loader, args)?,
        Command::Grading(args) => run_grading(&loader, args)?,
    }
    Ok(())
}

fn run_answer(loader: &BenchLoader, args: AnswerArgs) -> Result<()> {
    let mut query = AnswerBenchQuery::default().with_validation(!args.list.no_validate);
    if let Some(category) = args.category {
        query = query.with_category(Category::from(category));
    }
    if let Some(subcategory) = args.subcategory {
        query = query.with_subcategory(subcategory);
    }
    if let Some(source) = args.source {
        query = query.with_source(source);
    }
    let problems = list_answers(loader, &query, args.list.limit)?;
    if args.list.json {
        println!("{}", to_json(&problems)?);
    } else {
        println!("{}", answers_table(&problems));
    }
    Ok(())
}

fn run_proof(loader: &BenchLoader, args: ProofArgs) -> Result<()> {
    let mut query = ProofBenchQuery::default().with_validation(!args.list.no_validate);
    if let Some(category) = args.category {
        query = query.with_category(Category::from(category));
    }
    if let Some(level) = args.level {
        query = query.with_level(level);
    }
    let problems = list_proofs(loader, &query, args.list.limit)?;
    if args.list.json {
        println!("{}", to_json(&problems)?);
    } else {
        println!("{}", proofs_table(&problems));
    }
    Ok(())
}

fn run_grading(loader: &BenchLoader, args: GradingArgs) -> Result<()> {
    let mut query = GradingBenchQuery::default().with_validation(!args.list.no_validate);
    if let Some(problem_id) = args.problem_id {
        query = query.with_problem_id(problem_id);
    }
    if let Some(points) = args.min_points {
        query = query.with_min_points(points);
    }
    if let Some(points) = args.max_points {
        query = query.with_max_points(points);
    }
    let entries = list_gradings(loader, query, args.list.limit)?;
    if args.list.json {
        println!("{}", to_json(&entries)?);
    } else {
        println!("{}", gradings_table(&entries));
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
