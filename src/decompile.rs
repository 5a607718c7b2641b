//! External class-file decompilation
//!
//! Class entries are not parsed here. The bytes are handed to an external
//! decompiler process (`java -jar <decompiler> <file>`); whatever comes
//! back is either Java source ready for highlighting or a failure text
//! rendered verbatim. Without a working decompiler the viewer falls back
//! to a class-file description: version read from the magic header plus a
//! hex dump.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What came out of a decompilation attempt
#[derive(Debug)]
pub enum DecompileOutput {
    /// Decompiled Java source, ready for highlighting
    Source(String),
    /// Failure reason plus a class-file description, rendered verbatim
    Failure(String),
}

/// Runs the configured external decompiler
pub struct Decompiler {
    jar: PathBuf,
}

impl Decompiler {
    /// Create a decompiler invoking the given jar
    pub fn new(jar: PathBuf) -> Self {
        Self { jar }
    }

    /// Decompile class bytes, falling back to a class-file description
    /// when the decompiler is missing or fails
    pub fn decompile(&self, class_bytes: &[u8]) -> DecompileOutput {
        if !self.jar.exists() {
            return DecompileOutput::Failure(format!(
                "// Decompiler not found at: {}\n// Set decompiler-jar in the config file to enable decompilation.\n\n{}",
                self.jar.display(),
                describe_class(class_bytes)
            ));
        }
        match run_decompiler(&self.jar, class_bytes) {
            Ok(source) => DecompileOutput::Source(source),
            Err(reason) => DecompileOutput::Failure(format!(
                "// {}\n\n{}",
                reason,
                describe_class(class_bytes)
            )),
        }
    }
}

/// Write the bytes to a scratch file and run the decompiler on it
fn run_decompiler(jar: &Path, class_bytes: &[u8]) -> std::result::Result<String, String> {
    let mut scratch = tempfile::Builder::new()
        .suffix(".class")
        .tempfile()
        .map_err(|e| format!("Failed to create scratch file: {}", e))?;
    scratch
        .write_all(class_bytes)
        .map_err(|e| format!("Failed to write scratch file: {}", e))?;

    let output = Command::new("java")
        .arg("-jar")
        .arg(jar)
        .arg(scratch.path())
        .output()
        .map_err(|e| format!("Failed to run java: {}", e))?;

    if output.status.success() && !output.stdout.is_empty() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(format!(
            "Decompilation failed (exit status {}, {} bytes of output)",
            output.status,
            output.stdout.len()
        ))
    }
}

/// Describe a class file without decompiling it: size, version from the
/// magic header, and a hex dump with offsets and an ASCII column
pub fn describe_class(bytes: &[u8]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Class file ({} bytes)", bytes.len());
    if bytes.len() >= 8 && bytes[..4] == [0xCA, 0xFE, 0xBA, 0xBE] {
        let minor = u16::from_be_bytes([bytes[4], bytes[5]]);
        let major = u16::from_be_bytes([bytes[6], bytes[7]]);
        let _ = writeln!(out, "// Java class version: {}.{}", major, minor);
    } else {
        let _ = writeln!(out, "// Not a valid class file (bad magic number)");
    }
    out.push_str("//\n// Hex dump:\n");
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "// {:08X}: ", row * 16);
        for byte in chunk {
            let _ = write!(out, "{:02X} ", byte);
        }
        for _ in chunk.len()..16 {
            out.push_str("   ");
        }
        out.push_str(" | ");
        for &byte in chunk {
            out.push(if (32..127).contains(&byte) {
                byte as char
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_class_reads_version() {
        let bytes = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34];
        let description = describe_class(&bytes);
        assert!(description.contains("Java class version: 52.0"));
        assert!(description.contains("00000000: CA FE BA BE"));
    }

    #[test]
    fn test_describe_class_bad_magic() {
        let description = describe_class(b"PK\x03\x04 not a class");
        assert!(description.contains("bad magic number"));
    }

    #[test]
    fn test_describe_class_ascii_column() {
        let description = describe_class(b"\xCA\xFE\xBA\xBEABCD");
        assert!(description.contains("| ....ABCD"));
    }

    #[test]
    fn test_missing_decompiler_falls_back() {
        let decompiler = Decompiler::new(PathBuf::from("/nonexistent/cfr.jar"));
        match decompiler.decompile(&[0xCA, 0xFE, 0xBA, 0xBE, 0, 0, 0, 52]) {
            DecompileOutput::Failure(text) => {
                assert!(text.contains("Decompiler not found"));
                assert!(text.contains("Java class version: 52.0"));
            }
            DecompileOutput::Source(_) => panic!("expected fallback"),
        }
    }
}
