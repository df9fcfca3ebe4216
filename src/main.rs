use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pcmprobe::{report, SoundBuffer};

const USAGE: &str = "usage: pcmprobe <audio-file>";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(path) = env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let stdout = io::stdout();
    match run(&path, stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("failed to write report: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load `path` and print either the report or the failure line.
fn run<W: Write>(path: &Path, mut out: W) -> io::Result<ExitCode> {
    match SoundBuffer::open(path) {
        Ok(buffer) => {
            log::debug!("{} decoded, duration {:?}", path.display(), buffer.duration());
            report::write_report(&buffer, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("{}: {e}", path.display());
            report::write_failure(&mut out)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
