//! Split command: offline preview of how a migration file breaks into
//! statements. Makes no remote calls.

use anyhow::Result;
use sf_core::split::split_statements;

use crate::cli::{GlobalArgs, SplitArgs};
use crate::commands::common::read_migration_file;

pub(crate) async fn execute(args: &SplitArgs, global: &GlobalArgs) -> Result<()> {
    let raw_sql = read_migration_file(&args.file)?;
    if global.verbose {
        eprintln!(
            "[verbose] Migration file size: {} characters",
            raw_sql.len()
        );
    }

    let statements = split_statements(&raw_sql);
    println!("{} executable statements in {}", statements.len(), args.file);
    for (index, statement) in statements.iter().enumerate() {
        println!("{:>4}. {}", index + 1, statement.preview());
    }

    Ok(())
}
