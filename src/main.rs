//! Generates an iOS `AppIcon.appiconset` and Android adaptive icons from a
//! single source image.
//!
//! ```shell
//! appicons path/to/logo.png --out path/to/icons
//! ```

use appicons::{Options, Stage};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "appicons",
    version,
    about = "Generate iOS AppIcon.appiconset and Android adaptive icons from a source image."
)]
struct Args {
    /// Path to the source image (PNG or JPEG).
    #[arg(value_name = "SRC")]
    src: PathBuf,

    /// Output root directory.
    #[arg(short, long, value_name = "DIR", default_value = appicons::DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Force a flat background color for the Android background layer.
    /// The background layer is always opaque, so this currently has no effect.
    #[arg(long)]
    force_bg: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Options {
        Options {
            source: args.src,
            out_dir: args.out,
            force_bg: args.force_bg,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::from(Args::parse());
    let result = appicons::run_with_progress(&options, |stage| match stage {
        Stage::IosStarted(dir) => {
            println!("[+] Generating iOS AppIcon.appiconset -> {}", dir.display())
        }
        Stage::IosFinished(count) => println!("    {} icons written", count),
        Stage::AndroidStarted(dir) => {
            println!("[+] Generating Android adaptive icons -> {}", dir.display())
        }
        Stage::AndroidFinished => println!("    adaptive icon layers written"),
    });

    match result {
        Ok(report) => {
            let [r, g, b] = report.background_color().0;
            println!(
                "[+] Done. Check the output folder for AppIcon.appiconset and android_adaptive."
            );
            println!(
                "    {} iOS icons, Android background color #{:02x}{:02x}{:02x}",
                report.ios_icon_count(),
                r,
                g,
                b
            );
            println!("Example input used: {}", options.source.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
