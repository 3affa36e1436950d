use clap::Parser;
use miette::{Report, Result};
use tracing_subscriber::EnvFilter;
use twosat::{cli::Args, dimacs, Solver, SolverResult};

fn main() -> Result<SolverResult> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let contents = args.content()?;

    let formula = match dimacs::parse(&contents) {
        Ok(formula) => formula,
        Err(err) => return Err(Report::new(err).with_source_code(contents)),
    };

    let mut solver = Solver::new(args.config());
    let result = solver.solve(&formula)?;
    println!("s {result}");

    Ok(result)
}
