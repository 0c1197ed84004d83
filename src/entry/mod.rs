mod plan;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{TesterArgs, normalize_legacy_flags};
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose);

    let Some(plan) = build_plan(&args)? else {
        TesterArgs::command().print_help()?;
        println!();
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<(TesterArgs, ArgMatches)> {
    let raw_args = normalize_legacy_flags(std::env::args_os());
    let matches = TesterArgs::command().get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
