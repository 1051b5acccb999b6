use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the cloud automation handlers workspace",
    long_about = "Builds and packages the Lambda handlers and runs CI checks\n\
                  for the cloud automation handlers workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and package Lambda zip artifacts (one `bootstrap` per handler)
    ServerlessPackage {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
        /// Package a single handler instead of all of them
        #[arg(value_enum, long)]
        handler: Option<Handler>,
        /// Directory receiving the zip files
        #[arg(long, env = "LAMBDA_DIST_DIR", default_value = "dist")]
        dist_dir: String,
    },
    /// Run CI checks
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Workspace tests only
    Test,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Handler {
    StartInstances,
    StopInstances,
    QueueRelay,
    EncryptedCopy,
    EmrStep,
}

impl Handler {
    const ALL: [Handler; 5] = [
        Handler::StartInstances,
        Handler::StopInstances,
        Handler::QueueRelay,
        Handler::EncryptedCopy,
        Handler::EmrStep,
    ];

    fn bin_name(self) -> &'static str {
        match self {
            Self::StartInstances => "start_instances_lambda",
            Self::StopInstances => "stop_instances_lambda",
            Self::QueueRelay => "queue_relay_lambda",
            Self::EncryptedCopy => "encrypted_copy_lambda",
            Self::EmrStep => "emr_step_lambda",
        }
    }

    fn artifact_name(self) -> &'static str {
        match self {
            Self::StartInstances => "start_instances.zip",
            Self::StopInstances => "stop_instances.zip",
            Self::QueueRelay => "queue_relay.zip",
            Self::EncryptedCopy => "encrypted_copy.zip",
            Self::EmrStep => "emr_step.zip",
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_serverless_lambdas(
    target: &str,
    profile: BuildProfile,
    handlers: &[Handler],
    dist_dir: &Path,
) {
    ensure_rust_target_installed(target);

    step("Build automation lambda binaries");

    let mut cargo_args = vec!["build", "-p", "automation_lambda", "--target", target];
    for handler in handlers {
        cargo_args.push("--bin");
        cargo_args.push(handler.bin_name());
    }
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package lambda zip artifacts");
    let target_dir = Path::new("target").join(target).join(profile.dir_name());
    fs::create_dir_all(dist_dir).expect("failed to create lambda dist directory");

    eprintln!("\nPackaged artifacts:");
    for handler in handlers {
        let zip_path = dist_dir.join(handler.artifact_name());
        package_lambda_zip(&target_dir.join(handler.bin_name()), &zip_path);
        eprintln!("- {}", zip_path.display());
    }
}

/// Fails early when the Lambda target triple is missing; skipped when
/// `rustup` is unavailable.
fn ensure_rust_target_installed(target: &str) {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        eprintln!("warning: rustup not found; skipping check for target `{target}`");
        return;
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if output.status.success() && !installed.lines().any(|line| line.trim() == target) {
        eprintln!("error: rust target `{target}` is missing; run `rustup target add {target}`");
        exit(1);
    }
}

/// Lambda's `provided.al2023` runtime executes the archive entry named
/// `bootstrap`, so every handler binary is stored under that name.
fn package_lambda_zip(binary_path: &Path, zip_path: &Path) {
    let binary = fs::read(binary_path).unwrap_or_else(|error| {
        panic!(
            "expected lambda binary at '{}': {error}",
            binary_path.display()
        )
    });

    let file = fs::File::create(zip_path).expect("failed to create lambda zip");
    let mut zip = ZipWriter::new(file);
    zip.start_file(
        "bootstrap",
        FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o755),
    )
    .expect("failed to start bootstrap entry in lambda zip");
    zip.write_all(&binary).expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish lambda zip");
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    ci_test();
}

fn ci_test() {
    step("Test automation_core");
    run_cargo(&["test", "-p", "automation_core"]);

    step("Test automation_lambda");
    run_cargo(&["test", "-p", "automation_lambda"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::ServerlessPackage {
            target,
            profile,
            handler,
            dist_dir,
        } => {
            let handlers = match handler {
                Some(value) => vec![value],
                None => Handler::ALL.to_vec(),
            };
            package_serverless_lambdas(&target, profile, &handlers, Path::new(&dist_dir));
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Test => ci_test(),
            }
            eprintln!("\nCI job passed.");
        }
    }
}
