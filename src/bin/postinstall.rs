//! Post-install hook for `meson.add_install_script`
//!
//! Usage:
//!   postinstall                    Refresh caches under $MESON_INSTALL_PREFIX
//!   postinstall --dry-run          Print the refresh commands without running them
//!   postinstall --prefix /usr      Override the install prefix

use anyhow::{Context, Result};
use clap::Parser;
use pixelconvert_postinstall::config::{DESTDIR_VAR, PREFIX_VAR};
use pixelconvert_postinstall::{output, HookConfig, PostInstallHook};
use std::ffi::OsString;

#[derive(Parser)]
#[command(name = "postinstall")]
#[command(about = "Refresh GSettings, icon and desktop caches after meson install")]
#[command(version)]
struct Cli {
    /// Installation prefix (default: /usr/local)
    #[arg(short, long, env = PREFIX_VAR)]
    prefix: Option<OsString>,

    /// Staging root; when set, cache refresh is skipped
    #[arg(short, long, env = DESTDIR_VAR)]
    destdir: Option<OsString>,

    /// Print the refresh commands instead of running them
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() {
    if let Err(e) = run() {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = HookConfig::new(cli.prefix, cli.destdir).with_dry_run(cli.dry_run);
    let prefix = config.prefix().display().to_string();

    PostInstallHook::new(config)
        .run()
        .with_context(|| format!("post-install hook failed for prefix {}", prefix))?;

    Ok(())
}
