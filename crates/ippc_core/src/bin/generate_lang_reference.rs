//! Generate a Markdown reference from `ippc_core::lang` registries.
//!
//! This binary renders the vocabulary registries (opcodes, operand roles, frames, base types, exit codes) into a
//! single human-readable document at `docs/reference.md`.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the registries instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p ippc_core --bin generate_lang_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use ippc_core::lang::{self, exit_codes, frames, opcodes, operands, types};

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn start_section(out: &mut String, heading: &str) {
    trim_trailing_newlines_to_at_most_two(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
    out.push_str(heading);
    out.push_str("\n\n");
}

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs");
    fs::create_dir_all(&out_dir).expect("create docs/");

    write_reference(&out_dir.join("reference.md"));
}

/// Write `docs/reference.md`.
fn write_reference(path: &Path) {
    let mut out = String::new();
    out.push_str(&format!("# {} reference\n\n", lang::LANGUAGE_NAME));
    out.push_str("> Generated file. Regenerate with `cargo run -p ippc_core --bin generate_lang_reference`.\n\n");
    out.push_str(&format!(
        "Every program starts with the header line `{}`. Comments run from `#` to the end of the line.\n",
        lang::HEADER_MARKER
    ));

    render_opcodes_section(&mut out);
    render_operands_section(&mut out);
    render_frames_section(&mut out);
    render_types_section(&mut out);
    render_exit_codes_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    out.push('\n');
    fs::write(path, out).expect("write reference.md");
}

fn render_opcodes_section(out: &mut String) {
    start_section(out, "## Instructions");

    out.push_str("| Opcode | Operands | Category | Description |\n");
    out.push_str("|---|---|---|---|\n");

    for o in opcodes::OPCODES {
        let operands = o
            .operands
            .iter()
            .map(|r| format!("`{}`", r))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "| `{}` | {} | {:?} | {} |\n",
            o.canonical, operands, o.category, o.description
        ));
    }
}

fn render_operands_section(out: &mut String) {
    start_section(out, "## Operand roles");

    out.push_str("| Role | Accepts |\n");
    out.push_str("|---|---|\n");
    for r in operands::OPERAND_ROLES {
        out.push_str(&format!("| `<{}>` | {} |\n", r.canonical, r.description));
    }
}

fn render_frames_section(out: &mut String) {
    start_section(out, "## Frames");

    out.push_str("| Prefix | Id | Description |\n");
    out.push_str("|---|---|---|\n");
    for f in frames::FRAMES {
        out.push_str(&format!("| `{}@` | {:?} | {} |\n", f.canonical, f.id, f.description));
    }
}

fn render_types_section(out: &mut String) {
    start_section(out, "## Types");

    out.push_str("| Name | Description |\n");
    out.push_str("|---|---|\n");
    for t in types::TYPES {
        out.push_str(&format!("| `{}` | {} |\n", t.canonical, t.description));
    }
}

fn render_exit_codes_section(out: &mut String) {
    start_section(out, "## Exit codes");

    out.push_str("| Code | Name | Meaning |\n");
    out.push_str("|---|---|---|\n");
    for e in exit_codes::EXIT_CODES {
        out.push_str(&format!("| {} | `{}` | {} |\n", e.code, e.canonical, e.description));
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}
