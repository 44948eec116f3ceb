mod report;

use clap::Parser;
use derive_more::Display;
use disksanity::io::std::FileIO;
use disksanity::DiskSanity;
use thiserror::Error;

#[derive(Debug, Display, Error)]
enum Error {
    #[display("Open {_0}: {_1}")]
    Open(String, std::io::Error),
    #[display("{_0}")]
    Check(disksanity::error::Error<std::io::Error>),
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Scan the image for partitions/volumes
    #[clap(long)]
    scan: bool,
    /// Path to disk image. E.g. '/path/to/file.dd' or '/dev/sdb'
    disk: String,
}

fn run(args: &Args) -> Result<(), Error> {
    let io = FileIO::open(&args.disk).map_err(|e| Error::Open(args.disk.clone(), e))?;
    let mut sanity = DiskSanity::new(io);
    let findings = sanity.check(args.scan).map_err(Error::Check)?;
    report::print(&findings);
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stdout).init();

    if let Err(error) = run(&args) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
