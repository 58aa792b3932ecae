//! sumac - check field values against declared constraints.
//!
//! Exit codes: 0 when every hard constraint holds, 1 when violations were
//! found, 2 when the schema or values could not be loaded or evaluated.

mod args;
mod report;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sumac_constraint::ConstraintChecker;
use sumac_registry::{load_values, KindTable, SchemaConfig};

use args::{Arguments, CheckOptions, Command};
use report::Outcome;

fn main() -> ExitCode {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let result = match &args.command {
        Command::Check(opts) => check(opts),
        Command::Kinds => {
            kinds();
            Ok(Outcome::Passed)
        }
    };

    match result {
        Ok(Outcome::Passed) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn check(opts: &CheckOptions) -> anyhow::Result<Outcome> {
    let registry = SchemaConfig::from_path(&opts.schema)
        .and_then(|schema| schema.into_registry(KindTable::builtin()))
        .with_context(|| format!("invalid schema {}", opts.schema.display()))?;

    let values = load_values(&opts.values)
        .with_context(|| format!("invalid values {}", opts.values.display()))?;

    let violations = ConstraintChecker::new(&registry).check_all(&values)?;
    let outcome = Outcome::of(&violations, opts.strict);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report::json(&violations, outcome))?);
    } else {
        println!("{}", report::human(&violations));
    }

    Ok(outcome)
}

fn kinds() {
    let table = KindTable::builtin();
    for name in table.names() {
        if let Some(kind) = table.get(name) {
            println!("{:<12} {:?}", name, kind.applicability);
        }
    }
}
