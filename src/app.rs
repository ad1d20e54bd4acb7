use std::io::{stderr, stdout, BufWriter, Read, Write};

use crate::{
    common::error::AppError,
    domain::ledger::LedgerRegistry,
    io::{reader, writer},
    worker::processor::{Outcome, Processor},
};

/// Replays a CSV command script against a fresh ledger. Statements for
/// `view` commands go to stderr as they happen; the account summary goes to
/// stdout at the end.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let file = std::fs::File::open(input_path)?;
    let stdout = stdout();
    let stderr = stderr();
    replay(
        file,
        BufWriter::new(stdout.lock()),
        BufWriter::new(stderr.lock()),
    )?;
    log::info!("finished {input_path}");

    Ok(())
}

/// Runs every command in `input`, rendering statements into `statements`
/// and the final account summary into `summary`.
pub fn replay<R, W, S>(input: R, summary: W, mut statements: S) -> Result<(), AppError>
where
    R: Read,
    W: Write,
    S: Write,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut ledger = LedgerRegistry::new();
    let mut processor = Processor::new();

    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        if let Outcome::Statement(info) = processor.process(&mut ledger, command) {
            write!(statements, "{info}").map_err(AppError::Output)?;
        }
    }
    statements.flush().map_err(AppError::Output)?;
    log::info!(
        "processed {} commands: {} applied, {} rejected",
        processor.applied() + processor.rejected(),
        processor.applied(),
        processor.rejected()
    );

    writer::write_accounts(summary, ledger.customers())?;
    Ok(())
}
