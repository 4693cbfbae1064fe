//! Shell quoting helpers shared by the shell clients.

/// Quote `value` for a POSIX shell unless it is made only of safe characters.
///
/// Embedded single quotes become `'"'"'`, so `$'b` is emitted as `'$'"'"'b'`.
pub fn quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return value.to_string();
    }

    format!("'{}'", value.replace('\'', "'\"'\"'"))
}

/// Escape carriage returns and newlines so the value stays on one line.
pub fn escape(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_/.@%^=:".contains(c)
}
