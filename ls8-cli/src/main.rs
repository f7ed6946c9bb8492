use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use ls8_runtime::{HaltReason, VMConfig, VM};
use ls8_spec::Program;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run LS-8 programs", long_about = None)]
struct Args {
    /// Program image (`.ls8`, one binary byte per line)
    program: PathBuf,

    /// Treat the input as mnemonic assembly instead of a binary image
    #[arg(long, action = ArgAction::SetTrue)]
    asm: bool,

    /// Print a disassembly listing and exit without running
    #[arg(long, action = ArgAction::SetTrue)]
    disasm: bool,

    /// Log machine state before every instruction
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,

    /// Stop after this many instructions
    #[arg(long)]
    max_cycles: Option<u64>,
}

fn init_tracing(trace: bool) {
    // `ls8` is this binary's target; keep its load and finish lines visible
    let default = if trace {
        "warn,ls8=info,ls8_runtime=trace"
    } else {
        "warn,ls8=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(args: &Args) -> Result<Program> {
    let source = fs::read_to_string(&args.program)
        .with_context(|| format!("failed to read program {}", args.program.display()))?;

    let program = if args.asm {
        ls8_assembler::assemble(&source)
    } else {
        ls8_assembler::load_image(&source)
    }
    .with_context(|| format!("failed to load program {}", args.program.display()))?;

    Ok(program)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.trace);

    let program = load(&args)?;
    info!(
        path = %args.program.display(),
        bytes = program.len(),
        sha256 = %program.digest_hex(),
        "loaded program"
    );

    if args.disasm {
        let listing = ls8_disassembler::disassemble(&program).context("disassembly failed")?;
        print!("{listing}");
        return Ok(());
    }

    let config = VMConfig {
        max_cycles: args.max_cycles,
        trace: args.trace,
    };

    let result = VM::new(program, config)
        .with_output(std::io::stdout())
        .run()
        .context("execution failed")?;

    info!(cycles = result.cycles, "finished");

    if result.halt_reason == HaltReason::CycleLimit {
        bail!("cycle limit of {} reached", result.cycles);
    }

    Ok(())
}
