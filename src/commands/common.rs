//! Shared helpers for rendering command output and building stats queries.

use serde::Serialize;

use crate::{
    api::StatsQuery,
    cli::StatsArgs,
    stats::DecodePolicy,
    Result,
};

pub fn policy_for(lenient: bool) -> DecodePolicy {
    if lenient {
        DecodePolicy::Lenient
    } else {
        DecodePolicy::Strict
    }
}

/// Translate the stats flags into a facade query.
pub fn stats_query(args: &StatsArgs) -> StatsQuery {
    let query = StatsQuery::new(args.stat_types.iter().cloned(), args.groups.iter().copied())
        .policy(policy_for(args.lenient));
    match args.season {
        Some(season) => query.season(season.as_u16()),
        None => query,
    }
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print pretty JSON to stdout; logs go to stderr.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}
