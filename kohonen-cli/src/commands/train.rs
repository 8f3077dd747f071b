#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use kohonen_cli::extensions::train::config::{read_config, Config, SelectionType, TrainParams};
use kohonen_cli::extensions::train::formats::{write_rgb, write_state};
use kohonen_cli::extensions::train::interruption::create_interruption_quota;
use kohonen_cli::extensions::train::run_training;
use kohonen_cli::kohonen::prelude::*;
use std::io::BufReader;
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "config";
const GRID_SIZE_ARG_NAME: &str = "grid-size";
const DIMENSION_ARG_NAME: &str = "dimension";
const ITERATIONS_ARG_NAME: &str = "iterations";
const INPUTS_ARG_NAME: &str = "inputs";
const INITIAL_RADIUS_ARG_NAME: &str = "initial-radius";
const LEARNING_RATE_ARG_NAME: &str = "learning-rate";
const SELECTION_ARG_NAME: &str = "selection";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const TIME_ARG_NAME: &str = "max-time";
const FORMAT_ARG_NAME: &str = "format";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains a randomly initialized network on randomly generated inputs")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to training config file, command line arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GRID_SIZE_ARG_NAME)
                .help("Specifies grid size, the network has size x size nodes")
                .short('g')
                .long(GRID_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DIMENSION_ARG_NAME)
                .help("Specifies dimension of inputs")
                .short('d')
                .long(DIMENSION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies amount of training iterations")
                .short('i')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(INPUTS_ARG_NAME)
                .help("Specifies amount of randomly generated inputs")
                .short('n')
                .long(INPUTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(INITIAL_RADIUS_ARG_NAME)
                .help("Specifies initial neighbourhood radius, must be greater than 1")
                .short('r')
                .long(INITIAL_RADIUS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LEARNING_RATE_ARG_NAME)
                .help("Specifies initial learning rate")
                .short('l')
                .long(LEARNING_RATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SELECTION_ARG_NAME)
                .help("Specifies how inputs are selected during training")
                .short('s')
                .long(SELECTION_ARG_NAME)
                .required(false)
                .value_parser(["sequential", "sequential-early-stop", "random"]),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed to make the run repeatable")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max training time in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output format: network state or rows of rgb colors")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .default_value("state")
                .value_parser(["state", "rgb"]),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether training progress is written into stderr")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_train(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let params = get_params_from_args(matches)?;

    let logger: InfoLogger =
        if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let random: Arc<dyn Random + Send + Sync> = match params.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let quota = create_interruption_quota(params.max_time, &logger);
    let environment = Environment::new(random, Some(quota), logger);

    let (network, report) =
        run_training(&params, &environment).map_err(|err| format!("cannot train network: '{err}'"))?;

    if report.termination == TerminationReason::QuotaReached {
        (environment.logger)(&format!("training interrupted after {} iterations", report.iterations));
    }

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut out_buffer = out_writer_func(out_result);

    match matches.get_one::<String>(FORMAT_ARG_NAME).map(|format| format.as_str()) {
        Some("rgb") => write_rgb(&mut out_buffer, &network),
        _ => write_state(&mut out_buffer, &network),
    }
    .map_err(|err| err.to_string())?;

    out_buffer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}

fn get_params_from_args(matches: &ArgMatches) -> Result<TrainParams, String> {
    let file_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            open_file(path, "config")
                .and_then(|file| read_config(BufReader::new(file)).map_err(|err| err.to_string()))
        })
        .transpose()?
        .unwrap_or_default();

    let args_config = Config {
        grid_size: parse_int_value(matches, GRID_SIZE_ARG_NAME, "grid size")?,
        dimension: parse_int_value(matches, DIMENSION_ARG_NAME, "dimension")?,
        iterations: parse_int_value(matches, ITERATIONS_ARG_NAME, "iterations")?,
        inputs: parse_int_value(matches, INPUTS_ARG_NAME, "inputs")?,
        initial_radius: parse_float_value(matches, INITIAL_RADIUS_ARG_NAME, "initial radius")?,
        learning_rate: parse_float_value(matches, LEARNING_RATE_ARG_NAME, "learning rate")?,
        selection: matches
            .get_one::<String>(SELECTION_ARG_NAME)
            .map(|selection| selection.parse::<SelectionType>().map_err(|err| err.to_string()))
            .transpose()?,
        seed: parse_int_value(matches, RANDOM_SEED_ARG_NAME, "random seed")?,
        max_time: parse_int_value(matches, TIME_ARG_NAME, "max time")?,
    };

    TrainParams::try_from(file_config.merge(args_config)).map_err(|err| format!("invalid training parameters: '{err}'"))
}
