//! Renders the `brandly` man pages and shell completions into `OUT_DIR`.
//!
//! The top-level page gets EXIT STATUS, ENVIRONMENT and FILES sections so
//! scripts can rely on the documented exit codes.

use std::fmt::{Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::Shell;

#[allow(dead_code)]
#[path = "src/cli.rs"]
mod cli;
#[path = "src/exit_code.rs"]
mod exit_code;

const BIN: &str = "brandly";

/// Variables read by the CLI, in addition to the per-flag `env` entries.
const ENVIRONMENT: &[(&str, &str)] = &[
    ("BRANDLY_PROFILE", "Profile to use when --profile is absent."),
    ("BRANDLY_BASE_URL", "Catalogue API root, overriding the profile."),
    ("BRANDLY_OUTPUT", "Default output format."),
    ("BRANDLY_TIMEOUT", "Request timeout in seconds; 0 disables it."),
    ("BRANDLY_INSECURE", "Accept invalid TLS certificates."),
    (
        "BRANDLY_PROFILES__<NAME>__<KEY>",
        "Override one key of a config profile, e.g. BRANDLY_PROFILES__DEFAULT__BASE_URL.",
    ),
    ("RUST_LOG", "tracing filter for diagnostics on stderr; overrides -v and -q."),
];

const FILES: &[(&str, &str)] = &[(
    "$XDG_CONFIG_HOME/brandly/config.toml",
    "Profiles and defaults. Created by `brandly config init` and never rewritten by other commands. Shown by `brandly config path`.",
)];

const COMPLETION_SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");
    println!("cargo::rerun-if-changed=src/exit_code.rs");

    let out_dir: PathBuf = std::env::var_os("OUT_DIR")
        .expect("OUT_DIR not set by Cargo")
        .into();
    let mut cmd = cli::Cli::command();

    let man_dir = create_dir(&out_dir, "man");
    write_manpages(&cmd, &man_dir, true);

    let completion_dir = create_dir(&out_dir, "completions");
    for shell in COMPLETION_SHELLS {
        clap_complete::generate_to(shell, &mut cmd, BIN, &completion_dir)
            .unwrap_or_else(|e| panic!("failed to write {shell} completions: {e}"));
    }
}

fn create_dir(parent: &Path, name: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("failed to create {}: {e}", dir.display()));
    dir
}

/// One page per visible command: `brandly.1`, `brandly-brands.1`,
/// `brandly-brands-get.1`, ...
fn write_manpages(cmd: &clap::Command, dir: &Path, top_level: bool) {
    let name = cmd.get_name().to_owned();
    let path = dir.join(format!("{name}.1"));

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("failed to render man page for `{name}`: {e}"));
    if top_level {
        page.extend(roff_section("EXIT STATUS", exit_code::MEANINGS).into_bytes());
        page.extend(roff_section("ENVIRONMENT", ENVIRONMENT).into_bytes());
        page.extend(roff_section("FILES", FILES).into_bytes());
    }
    fs::write(&path, page).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        write_manpages(&sub, dir, false);
    }
}

/// A `.SH` section of tagged paragraphs with a bold tag per row.
fn roff_section<T: Display>(title: &str, rows: &[(T, &str)]) -> String {
    let mut out = format!(".SH \"{title}\"\n");
    for (tag, text) in rows {
        let tag = roff_escape(&tag.to_string());
        let text = roff_escape(text);
        let _ = write!(out, ".TP\n\\fB{tag}\\fR\n{text}\n");
    }
    out
}

fn roff_escape(text: &str) -> String {
    text.replace('\\', "\\e").replace('-', "\\-")
}
