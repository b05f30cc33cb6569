//! Helper-method and import injection
//!
//! Both passes are driven by exact substring containment: a helper is added
//! when its call appears and its definition does not, an import is added
//! when its exact line is absent.

/// A Java helper method some replacements call
#[derive(Debug, Clone, Copy)]
pub struct Helper {
    /// Text that marks a call site
    pub reference: &'static str,
    /// Text that marks an existing definition
    pub definition: &'static str,
    /// The method source, unindented
    pub code: &'static str,
}

pub const PERCENT_TO_PIXEL: Helper = Helper {
    reference: "percentToPixel(",
    definition: "static int percentToPixel(",
    code: r#"private static int percentToPixel(org.openqa.selenium.WebDriver driver, String value, boolean horizontal) {
    org.openqa.selenium.Dimension size = driver.manage().window().getSize();
    int extent = horizontal ? size.getWidth() : size.getHeight();
    String trimmed = value.trim();
    if (trimmed.endsWith("%")) {
        double percent = Double.parseDouble(trimmed.substring(0, trimmed.length() - 1).trim());
        return (int) Math.round(percent * extent / 100.0);
    }
    return (int) Math.round(Double.parseDouble(trimmed));
}"#,
};

pub const APP_IDENTIFIER: Helper = Helper {
    reference: "appIdentifier(",
    definition: "static String appIdentifier(",
    code: r#"// Maps a Perfecto application name to a package / bundle id. Adjust per app.
private static String appIdentifier(String appName) {
    return "com.example." + appName.toLowerCase().replaceAll("[^a-z0-9]", "");
}"#,
};

pub const HELPERS: &[Helper] = &[PERCENT_TO_PIXEL, APP_IDENTIFIER];

const HELPER_HEADER: &str = "// Helper methods added by appiumize";

/// Add every helper the code calls but does not define
///
/// The block goes in front of the brace that closes the last top-level
/// `class`, `interface` or `enum` body, provided that brace ends the text.
/// Anything else (a snippet, a trailing `if` block, a brace inside a string)
/// gets the block appended at the end.
pub fn inject_helpers(code: &str) -> String {
    let needed: Vec<&Helper> = HELPERS
        .iter()
        .filter(|h| code.contains(h.reference) && !code.contains(h.definition))
        .collect();

    if needed.is_empty() {
        return code.to_string();
    }

    match type_body_end(code) {
        Some(close) => {
            let block = render_helpers(&needed, "    ");
            let head = code[..close].trim_end();
            format!("{head}\n\n{block}\n{}", &code[close..])
        }
        None => {
            let block = render_helpers(&needed, "");
            format!("{}\n\n{block}\n", code.trim_end())
        }
    }
}

const TYPE_KEYWORDS: &[&[u8]] = &[b"class", b"interface", b"enum"];

/// Byte offset of the final `}` when it closes a top-level type body
///
/// Braces inside string and char literals and comments are skipped.
fn type_body_end(code: &str) -> Option<usize> {
    let bytes = code.as_bytes();
    let last = code.trim_end().len().checked_sub(1)?;
    if bytes[last] != b'}' {
        return None;
    }

    let mut depth = 0usize;
    let mut in_type = false;
    let mut body_end = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => i = literal_end(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = find_from(bytes, i, b"\n"),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = find_from(bytes, i + 2, b"*/") + 1,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 && in_type {
                    in_type = false;
                    body_end = Some(i);
                } else if depth == 0 {
                    body_end = None;
                }
            }
            _ if depth == 0 && starts_type_keyword(bytes, i) => in_type = true,
            _ => {}
        }
        i += 1;
    }

    body_end.filter(|&end| end == last && depth == 0)
}

fn starts_type_keyword(bytes: &[u8], at: usize) -> bool {
    let is_ident = |b: u8| b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'.';
    if at > 0 && is_ident(bytes[at - 1]) {
        return false;
    }
    TYPE_KEYWORDS.iter().any(|kw| {
        bytes[at..].starts_with(kw)
            && bytes.get(at + kw.len()).is_some_and(|b| b.is_ascii_whitespace())
    })
}

/// Index of the quote closing the literal that opens at `start`
fn literal_end(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index of the first byte of `needle` at or after `from`, or the end
fn find_from(bytes: &[u8], from: usize, needle: &[u8]) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.windows(needle.len()).position(|w| w == needle))
        .map_or(bytes.len(), |pos| from + pos)
}

fn render_helpers(helpers: &[&Helper], indent: &str) -> String {
    let mut lines = vec![format!("{indent}{HELPER_HEADER}")];
    for (i, helper) in helpers.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(helper.code.lines().map(|line| format!("{indent}{line}")));
    }
    lines.join("\n")
}

/// Imports every converted file needs
pub const REQUIRED_IMPORTS: &[&str] = &[
    "import org.openqa.selenium.By;",
    "import io.appium.java_client.AppiumBy;",
    "import com.google.common.collect.ImmutableMap;",
];

/// Imports needed only when a replacement used the type
pub const CONDITIONAL_IMPORTS: &[(&str, &str)] = &[
    ("ScreenOrientation.", "import org.openqa.selenium.ScreenOrientation;"),
    ("new Location(", "import org.openqa.selenium.html5.Location;"),
    ("Duration.of", "import java.time.Duration;"),
    ("new KeyEvent(", "import io.appium.java_client.android.nativekey.KeyEvent;"),
    ("AndroidKey.", "import io.appium.java_client.android.nativekey.AndroidKey;"),
];

/// The import lines `code` is missing, in declaration order
pub fn missing_imports(code: &str) -> Vec<&'static str> {
    let conditional = CONDITIONAL_IMPORTS
        .iter()
        .filter(|(trigger, _)| code.contains(trigger))
        .map(|(_, line)| *line);

    REQUIRED_IMPORTS
        .iter()
        .copied()
        .chain(conditional)
        .filter(|line| !code.contains(line))
        .collect()
}

/// Add the missing imports
///
/// They go right after a `package` declaration when there is one, otherwise
/// at the top of the text. Imports the caller already wrote stay where they
/// are.
pub fn inject_imports(code: &str) -> String {
    let missing = missing_imports(code);
    if missing.is_empty() {
        return code.to_string();
    }
    let block = missing.join("\n");

    match package_line_end(code) {
        Some(end) if end < code.len() => {
            // `end` points just past the package line's newline
            format!("{}\n{block}\n{}", &code[..end], &code[end..])
        }
        Some(_) => format!("{code}\n\n{block}\n"),
        None => format!("{block}\n\n{code}"),
    }
}

/// Byte offset just past the `package ...;` line, including its newline
fn package_line_end(code: &str) -> Option<usize> {
    let mut offset = 0;
    for line in code.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with("package ") && trimmed.ends_with(';') {
            return Some(offset + line.len());
        }
        offset += line.len();
    }
    None
}
