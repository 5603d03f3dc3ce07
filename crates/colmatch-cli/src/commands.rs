use anyhow::{Context, Result};
use tracing::info_span;

use colmatch_cli::fixture::{RunOptions, SessionFixture, run_fixture};

use crate::cli::{FieldsArgs, MatchArgs};
use crate::summary::{print_fields, print_outcome};

pub fn run_match(args: &MatchArgs) -> Result<i32> {
    let span = info_span!("fixture", path = %args.fixture.display());
    let _guard = span.enter();
    let fixture = SessionFixture::load(&args.fixture)?;
    let options = RunOptions {
        auto_match: args.auto_match,
        allow_invalid_submit: args.allow_invalid_submit,
        sample_rows: args.sample_rows,
    };
    let outcome = run_fixture(fixture, options)?;
    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("serialize outcome")?;
        println!("{json}");
    } else {
        print_outcome(&outcome);
    }
    Ok(outcome.exit_code(args.accept_unmatched))
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let fixture = SessionFixture::load(&args.fixture)?;
    print_fields(&fixture.fields);
    Ok(())
}
