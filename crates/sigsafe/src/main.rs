use std::error::Error;
use std::path::{Path, PathBuf};
use std::{fs, io, process};

use clap::{Parser, Subcommand};
use sigsafe_core::remote::read_remote_vec;
use sigsafe_core::{describe_raw, Address, ErrorCode, SigsafeError, TaskHandle};
use sigsafe_utils::{format_hexdump, info, init_logging, parse_address, parse_byte_size};

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Size of each read from the copy input
const COPY_CHUNK: usize = 4096;

/// Drive the async-signal-safe crash-reporter primitives from a shell.
#[derive(Parser, Debug)]
#[command(name = "sigsafe")]
#[command(version)]
#[command(about = "Drive the async-signal-safe crash-reporter primitives from a shell", long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Read memory from another process and print a hexdump
    Peek
    {
        /// Process ID (PID) to read from
        pid: u32,
        /// Start address (hex format: 0x1000 or decimal)
        #[arg(value_parser = parse_address)]
        address: u64,
        /// Number of bytes to read
        #[arg(short, long, default_value_t = 64)]
        length: usize,
        /// Bytes per hexdump row
        #[arg(short, long, default_value_t = 16)]
        width: usize,
    },
    /// Append input to a file through a bounded writer
    Copy
    {
        /// File to append to (created if missing)
        output: PathBuf,
        /// Read from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Maximum bytes to accept, e.g. 4096, 64K, 2M (0 = unlimited)
        #[arg(long, env = "SIGSAFE_OUTPUT_LIMIT", value_parser = parse_byte_size, default_value = "0")]
        limit: u64,
    },
    /// List every error code with its message
    Errors,
    /// Print the message for a numeric error code
    Strerror
    {
        /// Numeric error code
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

/// Result of a `copy` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CopyOutcome
{
    accepted: u64,
    limit_hit: bool,
}

fn main()
{
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> CliResult<()>
{
    match cli.command {
        Commands::Peek {
            pid,
            address,
            length,
            width,
        } => {
            let address = Address::new(address);
            let bytes = peek(pid, address, length)?;
            print!("{}", format_hexdump(address.value(), &bytes, width));
            Ok(())
        }
        Commands::Copy { output, input, limit } => {
            let outcome = copy(&output, input.as_deref(), limit)?;
            println!("{} bytes written to {}", outcome.accepted, output.display());
            if outcome.limit_hit {
                return Err(format!("output limit of {limit} bytes reached").into());
            }
            Ok(())
        }
        Commands::Errors => {
            for code in ErrorCode::ALL {
                println!("{:>2}  {:<16}{}", code.raw(), format!("{code:?}"), code.message());
            }
            Ok(())
        }
        Commands::Strerror { code } => {
            println!("{}", describe_raw(code));
            Ok(())
        }
    }
}

fn peek(pid: u32, address: Address, length: usize) -> CliResult<Vec<u8>>
{
    info!(pid, %address, length, "peeking remote memory");
    let task = TaskHandle::for_pid(pid)?;
    let read = read_remote_vec(task, address, length);
    task.release()?;

    match read {
        Ok(bytes) => Ok(bytes),
        Err(SigsafeError::RemoteRead { result, .. }) => Err(format!(
            "cannot read {length} bytes at {address}: {result} ({})",
            result.error_code().message()
        )
        .into()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn copy(output: &Path, input: Option<&Path>, limit: u64) -> CliResult<CopyOutcome>
{
    // Open the input first so a bad path never leaves an output descriptor behind.
    match input {
        Some(path) => copy_from(fs::File::open(path)?, output, limit),
        None => copy_from(io::stdin().lock(), output, limit),
    }
}

#[cfg(not(unix))]
fn copy(_output: &Path, _input: Option<&Path>, _limit: u64) -> CliResult<CopyOutcome>
{
    Err("copy writes through a raw file descriptor and needs a Unix platform".into())
}

#[cfg(unix)]
fn copy_from<R: io::Read>(input: R, output: &Path, limit: u64) -> CliResult<CopyOutcome>
{
    use std::os::unix::io::IntoRawFd;

    use sigsafe_core::{BoundedWriter, FileDescriptor, OutputHandle};

    let file = fs::OpenOptions::new().create(true).append(true).open(output)?;
    let mut fd = FileDescriptor::from_raw(file.into_raw_fd());
    info!(output = %output.display(), limit, "copying through bounded writer");

    let mut writer: BoundedWriter<_> = BoundedWriter::new(&mut fd, limit);
    let pumped = pump(input, &mut writer);
    let accepted = writer.total_written();

    let closed = match writer.flush() {
        Ok(()) => writer.close(),
        Err(err) => {
            drop(writer);
            // close() keeps the descriptor open after a failed flush; release it here.
            let _ = fd.close_raw();
            Err(err)
        }
    };

    let limit_hit = pumped?;
    closed?;
    Ok(CopyOutcome { accepted, limit_hit })
}

/// Feed `input` to `writer` until EOF or the limit. Returns whether the limit was hit.
#[cfg(unix)]
fn pump<R, H>(mut input: R, writer: &mut sigsafe_core::BoundedWriter<H>) -> CliResult<bool>
where
    R: io::Read,
    H: sigsafe_core::OutputHandle,
{
    use sigsafe_core::WriteError;

    let mut chunk = [0u8; COPY_CHUNK];

    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => return Ok(false),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        match writer.write(&chunk[..n]) {
            Ok(()) => {}
            Err(WriteError::LimitExceeded { requested, remaining }) => {
                sigsafe_utils::warn!(requested, remaining, "output limit reached, dropping the rest of the input");
                return Ok(true);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
