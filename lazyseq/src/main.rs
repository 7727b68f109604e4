mod cli;
mod funs;
mod read;

use clap::Parser;
use cli::{Cli, Combiner, Command};
use core::fmt::{self, Display, Formatter};
use funs::ValR;
use lazyseq_core::{Buffered, OneShot, Sequence, Zip};
use serde_json::Value;
use std::cell::Cell;
use std::io::{self, Write};
use std::process::{ExitCode, Termination};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format(|buf, record| match record.level() {
            log::Level::Error => write!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();

    let cli = Cli::parse();
    match real_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.report()
        }
    }
}

fn real_main(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Command::Zip { with, inputs } => {
            let seqs = read::values(inputs)?.into_iter().map(read::seq);
            zip(seqs.collect::<Result<_, _>>()?, *with)
        }
        Command::Buffer {
            passes,
            take,
            input,
        } => {
            let input: Vec<String> = input.iter().cloned().collect();
            read::values(&input)?
                .into_iter()
                .try_for_each(|v| buffer(v, *passes, *take))
        }
    }
}

fn zip(seqs: Vec<read::Seq>, with: Option<Combiner>) -> Result<(), Error> {
    log::debug!("zipping {} sequences", seqs.len());
    match with {
        None => print(Zip::with(seqs, |xs: Vec<Value>| Ok(Value::Array(xs)))),
        Some(c) if c.arity() == Some(2) => {
            print(Zip::spread(seqs, move |lr: [Value; 2]| c.binary(lr))?)
        }
        Some(c) => print(Zip::with(seqs, move |xs: Vec<Value>| c.fold(xs))),
    }
}

fn print(mut seq: impl Sequence<Value = ValR>) -> Result<(), Error> {
    let mut out = io::stdout().lock();
    seq.iter().try_for_each(|(_k, v)| Ok(writeln!(out, "{}", v?)?))
}

/// Traverse the elements of `v` `passes` times,
/// preceded by a partial traversal of `take` elements if given.
fn buffer(v: Value, passes: usize, take: Option<usize>) -> Result<(), Error> {
    let pairs = read::pairs(v)?;
    let total = pairs.len();
    let pulled = Cell::new(0);
    let count = |_: &(Value, Value)| pulled.set(pulled.get() + 1);
    let mut buf = Buffered::new(OneShot::new(|| pairs.into_iter().inspect(count)));

    let mut out = io::stdout().lock();
    if let Some(n) = take {
        traverse(&mut buf, n, &mut out)?;
        log::debug!("partial pass buffered {} elements", buf.buffered_len());
    }
    for _ in 0..passes {
        traverse(&mut buf, usize::MAX, &mut out)?;
    }
    log::debug!("pulled {} of {} elements", pulled.get(), total);
    Ok(())
}

fn traverse<S>(seq: &mut S, n: usize, out: &mut impl Write) -> io::Result<()>
where
    S: Sequence<Key = Value, Value = Value>,
{
    let kvs = seq.iter().take(n);
    kvs.map(|(k, v)| Value::Array(Vec::from([k, v])))
        .try_for_each(|kv| writeln!(out, "{kv}"))
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(String),
    Iter(Value),
    Combine(&'static str, Value),
    Seq(lazyseq_core::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Parse(e) => write!(f, "failed to parse: {e}"),
            Self::Iter(v) => write!(f, "cannot iterate over {v}"),
            Self::Combine(name, v) => write!(f, "cannot {name} {v}"),
            Self::Seq(e) => e.fmt(f),
        }
    }
}

impl Termination for Error {
    fn report(self) -> ExitCode {
        ExitCode::from(match self {
            Self::Io(_) | Self::Parse(_) => 2,
            Self::Iter(_) | Self::Combine(..) | Self::Seq(_) => 5,
        })
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<lazyseq_core::Error> for Error {
    fn from(e: lazyseq_core::Error) -> Self {
        Self::Seq(e)
    }
}
