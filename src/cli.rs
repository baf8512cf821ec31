use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use tempfile::NamedTempFile;

use std::{fs, path::Path, sync::mpsc::channel, time::Duration};

use crate::errors::{Error, Result};
use crate::{rotate_file, RotateConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Rotation angle in degrees (clockwise; may be negative)
    #[arg(short, long, allow_negative_numbers = true)]
    angle: f64,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,
}

/// Top-level configuration used by the `svgrot` command-line process.
///
/// This is typically derived from command line arguments and passed to
/// `run()`. 'front-end' settings (input/output paths, watch mode) live
/// directly in this struct; the rotation itself is configured by the
/// embedded `RotateConfig`.
#[derive(Clone)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (requires input_path is not stdin)
    pub watch: bool,
    /// rotation config options
    pub transform: RotateConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            // Arguably creating this struct shouldn't do any IO, but this is a
            // deliberate UX safety restriction on the CLI which is worth keeping
            // as high-level as possible to keep the lower level API cleaner.
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            transform: RotateConfig { angle: args.angle },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

fn rotate_to_output(config: &Config) -> Result<()> {
    if config.output_path == "-" {
        rotate_file(&config.input_path, "-", &config.transform)
    } else {
        let out_temp = NamedTempFile::new().map_err(Error::Io)?;
        let temp_path = out_temp.path().to_string_lossy().to_string();
        rotate_file(&config.input_path, &temp_path, &config.transform)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems; some apps (e.g. eog) also fail to
        // react to 'moved-over' files.
        fs::copy(out_temp.path(), &config.output_path).map_err(Error::Io)?;
        Ok(())
    }
}

/// Run the `svgrot` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        rotate_to_output(&config)?;
    } else if config.input_path != "-" {
        let watch = config.input_path.clone();
        let (tx, rx) = channel();
        let mut watcher =
            new_debouncer(Duration::from_millis(250), tx).expect("Could not create watcher");
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(Path::new(&watch), RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        rotate_to_output(&config).unwrap_or_else(|e| {
            eprintln!("rotate failed: {e}");
        });
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize().map_err(Error::Io)?
                            == watch_path.canonicalize().map_err(Error::Io)?
                        {
                            eprintln!("{} changed", event.path.to_string_lossy());
                            rotate_to_output(&config).unwrap_or_else(|e| {
                                eprintln!("rotate failed: {e}");
                            });
                        }
                    }
                }
                Ok(Err(e)) => eprintln!("Watch error {e:?}"),
                Err(e) => eprintln!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
