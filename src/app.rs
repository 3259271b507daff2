//! Command handlers
//!
//! Direct subcommands are operator-facing: store failures propagate and the
//! process exits non-zero. The chat path is the bot boundary: it answers
//! with the generic try-again lines and keeps the error detail on stderr.

use crate::bot::{Intent, parse_message, reply};
use crate::core;
use crate::error::AppError;
use crate::output::{
    NumberFormat, TableOptions, output_leaderboard_json, output_record_json, output_stats_json,
    print_help, print_leaderboard_table, print_log_help, print_stats_card,
};
use crate::store::LogStore;
use crate::utils::{DateSpec, Timezone};

pub(crate) struct CommandContext<'a> {
    pub(crate) store: &'a LogStore,
    pub(crate) username: &'a str,
    pub(crate) timezone: Timezone,
    pub(crate) json: bool,
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn table_opts(&self) -> TableOptions {
        TableOptions {
            use_color: self.use_color,
            number_format: self.number_format,
        }
    }
}

pub(crate) fn handle_record(ctx: &CommandContext<'_>, steps: u32, date: &str) -> Result<(), AppError> {
    let date = DateSpec::parse(date)?.resolve(ctx.timezone);
    let id = core::record(ctx.store, ctx.username, steps, date)?;
    if ctx.json {
        println!("{}", output_record_json(id, ctx.username, steps, date));
    } else {
        println!("{}", reply::logged(ctx.username, steps, date, ctx.number_format));
    }
    Ok(())
}

pub(crate) fn handle_stats(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match core::user_stats(ctx.store, ctx.username)? {
        Some(stats) => {
            if ctx.json {
                println!("{}", output_stats_json(&stats));
            } else {
                print_stats_card(&stats, ctx.table_opts());
            }
        }
        None => {
            if ctx.json {
                println!("null");
            } else {
                println!("{}", reply::no_stats_yet(ctx.username));
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_leaderboard(ctx: &CommandContext<'_>, limit: u32) -> Result<(), AppError> {
    let rows = core::leaderboard(ctx.store, limit)?;
    if ctx.json {
        println!("{}", output_leaderboard_json(&rows));
    } else if rows.is_empty() {
        println!("{}", reply::empty_leaderboard());
    } else {
        print_leaderboard_table(&rows, ctx.table_opts());
    }
    Ok(())
}

/// Feed one chat message through the interpreter and answer as the bot
/// would. Always returns Ok: a store failure is an answered conversation,
/// not a failed command.
pub(crate) fn handle_chat(ctx: &CommandContext<'_>, text: &str) -> Result<(), AppError> {
    let intent = match parse_message(text) {
        Ok(Some(intent)) => intent,
        // Not addressed to the bot; stay silent.
        Ok(None) => return Ok(()),
        Err(AppError::InvalidDate { .. }) => {
            println!("{}", reply::bad_date());
            return Ok(());
        }
        Err(AppError::InvalidSteps { .. }) => {
            println!("{}", reply::bad_steps());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match intent {
        Intent::RecordSteps { steps, date } => {
            let date = date.resolve(ctx.timezone);
            match core::record(ctx.store, ctx.username, steps, date) {
                Ok(_) => println!("{}", reply::logged(ctx.username, steps, date, ctx.number_format)),
                Err(e) => {
                    eprintln!("Error logging steps: {e}");
                    println!("{}", reply::record_failed());
                }
            }
        }
        Intent::ShowStats => match core::user_stats(ctx.store, ctx.username) {
            Ok(Some(stats)) => print_stats_card(&stats, ctx.table_opts()),
            Ok(None) => println!("{}", reply::no_stats_yet(ctx.username)),
            Err(e) => {
                eprintln!("Error fetching user stats: {e}");
                println!("{}", reply::stats_failed());
            }
        },
        Intent::ShowLeaderboard => {
            match core::leaderboard(ctx.store, crate::consts::DEFAULT_LEADERBOARD_LIMIT) {
                Ok(rows) if rows.is_empty() => println!("{}", reply::empty_leaderboard()),
                Ok(rows) => print_leaderboard_table(&rows, ctx.table_opts()),
                Err(e) => {
                    eprintln!("Error fetching leaderboard: {e}");
                    println!("{}", reply::leaderboard_failed());
                }
            }
        }
        Intent::ShowLogHelp => print_log_help(ctx.use_color),
        Intent::ShowHelp => print_help(ctx.use_color),
    }
    Ok(())
}
