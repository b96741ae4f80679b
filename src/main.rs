use anyhow::{bail, Context};
use schedsim::report::Report;
use schedsim::sim::{workload, ProcessSpec};
use schedsim::{simulate, PolicyKind};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let specs = parse_args(env::args().skip(1))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Choose scheduling algorithm:");
    println!("1. First Come First Serve (FCFS)");
    println!("2. Round Robin (RR)");
    println!("3. Shortest Process Next [non-p] (SPN)");
    println!("4. Shortest Remaining Time First [p] (SRTF)");
    println!("5. Highest Priority [non-p]");
    println!("6. Highest Priority [p]");
    println!("7. Highest Response Ratio Next (HRRN)");
    println!("8. Longest Remaining Time First [p] (LRTF)");
    print!("Enter your choice: ");
    io::stdout().flush()?;

    let choice: u32 = read_line(&mut lines)?
        .trim()
        .parse()
        .context("policy choice must be a number")?;

    let quantum = if choice == 2 {
        print!("Enter time slice for Round Robin: ");
        io::stdout().flush()?;
        let q: i64 = read_line(&mut lines)?
            .trim()
            .parse()
            .context("time quantum must be a number")?;
        Some(q)
    } else {
        None
    };

    let kind = PolicyKind::from_choice(choice, quantum)?;
    let procs = simulate(kind, specs)?;

    let report = Report::new(&procs);
    print!("{}", report.render_stats());
    print!("{}", report.render_timeline());

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Vec<ProcessSpec>> {
    let mut args = args;
    let mut horizon: Option<u64> = None;
    let mut seed = 0u64;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--random" => {
                horizon = Some(
                    args.next()
                        .context("--random requires a tick horizon")?
                        .parse()
                        .context("--random horizon must be a number")?,
                );
            }
            "--seed" => {
                seed = args
                    .next()
                    .context("--seed requires a value")?
                    .parse()
                    .context("--seed must be a number")?;
            }
            other => bail!("unrecognized argument: {other}"),
        }
    }

    Ok(match horizon {
        Some(horizon) => workload::bernoulli(horizon, 0.3, 0.3, 2, 6, seed),
        None => workload::demo_set(),
    })
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<String> {
    lines
        .next()
        .context("unexpected end of input")?
        .context("failed to read stdin")
}
