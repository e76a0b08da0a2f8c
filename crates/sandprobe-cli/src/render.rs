//! Terminal rendering of probe outcomes.
//!
//! Every outcome becomes one or more status lines prefixed with a fixed
//! marker. Lines for one outcome are written under a single lock, so the
//! background network report never splits another probe's lines.

use console::{style, Emoji};
use parking_lot::Mutex;
use sandprobe_core::{Access, DirectoryListing, EntryKind, Outcome, ProbeTargets, Tally};
use sandprobe_probes::{ProbeKind, Reporter};
use std::io::{self, Write};
use std::path::Path;

static CHECK: Emoji = Emoji("✓", "+");
static CROSS: Emoji = Emoji("✗", "x");
static WARN: Emoji = Emoji("⚠", "!");
static SEARCH: Emoji = Emoji("🔍 ", "");
static TARGET: Emoji = Emoji("🎯 ", "");

const ENTRY_INDENT: &str = "      ";

/// Reporter that writes status lines to a terminal (or any writer).
pub struct TerminalReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalReporter {
    /// Create a reporter writing to the given sink.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Create a reporter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Print the run header.
    pub fn header(&self, targets: &ProbeTargets, cwd: Option<&Path>) {
        let title = format!("sandprobe {}", env!("CARGO_PKG_VERSION"));
        let cwd = cwd
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        self.write_lines(&[
            format!("{}{}", SEARCH, style(&title).bold()),
            "=".repeat(title.len() + 3),
            format!("Sandbox home: {}", targets.sandbox_home.display()),
            format!("Real home:    {}", targets.real_home.display()),
            format!("Current dir:  {}", cwd),
            String::new(),
        ]);
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = self.out.lock();
        for line in lines {
            // Nothing sensible to do if stdout is gone
            let _ = writeln!(out, "{}", line);
        }
        let _ = out.flush();
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, kind: ProbeKind, name: &str, outcome: &Outcome) {
        self.write_lines(&outcome_lines(kind, name, outcome));
    }

    fn finish(&self, tally: &Tally) {
        self.write_lines(&summary_lines(tally));
    }
}

/// Format the status lines for one outcome.
///
/// File contents never appear here; a readable sensitive file is reported
/// by size only.
pub fn outcome_lines(kind: ProbeKind, name: &str, outcome: &Outcome) -> Vec<String> {
    let ok = style(CHECK).green();
    let bad = style(CROSS).red();

    match (kind, outcome) {
        (ProbeKind::Write, Outcome::Success(content)) => {
            vec![format!("  {} {}: {}", ok, name, content)]
        }
        (ProbeKind::Write, Outcome::Error(msg)) => {
            vec![format!("  {} {} failed: {}", bad, name, msg)]
        }
        (ProbeKind::SensitiveFile, Outcome::Blocked { .. }) => {
            vec![format!("  {} Protected: {}", ok, name)]
        }
        (ProbeKind::RealHome, Outcome::Blocked { .. }) => {
            vec![format!("  {} Real home directory blocked: {}", ok, name)]
        }
        (ProbeKind::Network, Outcome::Success(detail)) => {
            vec![format!("  {} Network reachable: {} ({})", ok, name, detail)]
        }
        (ProbeKind::Network, Outcome::Error(msg)) => {
            vec![format!("  {} Network error: {}", bad, msg)]
        }
        (_, Outcome::Success(detail)) => vec![format!("  {} {}: {}", ok, name, detail)],
        (_, Outcome::Blocked { .. }) => vec![format!("  {} Blocked: {}", ok, name)],
        (_, Outcome::UnexpectedAccess(Access::Readable { bytes })) => vec![format!(
            "  {} Security issue: can read {} ({} bytes)",
            bad, name, bytes
        )],
        (_, Outcome::UnexpectedAccess(Access::Listed(listing))) => {
            let what = if kind == ProbeKind::RealHome {
                "real home directory "
            } else {
                ""
            };
            let mut lines = vec![format!(
                "  {} Can access {}{} ({} entries)",
                bad, what, name, listing.total_count
            )];
            lines.extend(listing_lines(listing));
            lines
        }
        (_, Outcome::Error(msg)) => vec![format!("  {} {}: {}", bad, name, msg)],
        (_, Outcome::Timeout(after)) => vec![format!(
            "  {} Timed out after {} ms: {}",
            style(WARN).yellow(),
            after.as_millis(),
            name
        )],
    }
}

/// Format the sampled entries of a listing, plus the remainder line.
pub fn listing_lines(listing: &DirectoryListing) -> Vec<String> {
    let mut lines: Vec<String> = listing
        .entries
        .iter()
        .map(|entry| match (entry.kind, entry.size_bytes) {
            (EntryKind::File, Some(size)) => {
                format!("{}[file] {} ({} bytes)", ENTRY_INDENT, entry.name, size)
            }
            (EntryKind::File, None) => format!("{}[file] {}", ENTRY_INDENT, entry.name),
            (EntryKind::Directory, _) => format!("{}[dir]  {}", ENTRY_INDENT, entry.name),
            (EntryKind::Unknown, _) => format!("{}[?]    {}", ENTRY_INDENT, entry.name),
        })
        .collect();

    if listing.is_truncated() {
        lines.push(format!("{}... and {} more", ENTRY_INDENT, listing.remaining()));
    }
    lines
}

/// Format the closing banner and counts.
pub fn summary_lines(tally: &Tally) -> Vec<String> {
    let unexpected = if tally.unexpected_access > 0 {
        style(tally.unexpected_access).red()
    } else {
        style(tally.unexpected_access).green()
    };
    let errors = if tally.errors > 0 {
        style(tally.errors).red()
    } else {
        style(tally.errors).green()
    };

    vec![
        String::new(),
        format!("{}{}", TARGET, style("Sandbox check complete").bold()),
        format!("  Protected: {}", style(tally.blocked).green()),
        format!("  Unexpected access: {}", unexpected),
        format!("  Errors: {}", errors),
    ]
}
