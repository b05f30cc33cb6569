//! Platform branches emitted by rules and resolved after rewriting
//!
//! A rule that needs different output per platform wraps both variants in a
//! sentinel block. The Android variant is active and the iOS variant is
//! commented out, so unresolved text still reads as code:
//!
//! ```text
//! //<appiumize:android>
//! driver.activateApp(appIdentifier("Maps"));
//! //<appiumize:ios>
//! // driver.executeScript("mobile: launchApp", ImmutableMap.of("bundleId", appIdentifier("Maps")));
//! //</appiumize>
//! ```
//!
//! The sentinels are matched literally and never overlap ordinary comment
//! text, so free-form guidance such as `// For iOS:` is left alone.

use appiumize_core::Platform;

pub const ANDROID_MARKER: &str = "//<appiumize:android>";
pub const IOS_MARKER: &str = "//<appiumize:ios>";
pub const END_MARKER: &str = "//</appiumize>";

/// Emit a platform branch
///
/// `android` and `ios` may span several lines. Every line after the first
/// sentinel is prefixed with `indent`; the block itself starts wherever the
/// caller splices it.
pub fn platform_branch(indent: &str, android: &str, ios: &str) -> String {
    let mut out = String::from(ANDROID_MARKER);
    for line in android.lines() {
        out.push('\n');
        out.push_str(indent);
        out.push_str(line);
    }

    out.push('\n');
    out.push_str(indent);
    out.push_str(IOS_MARKER);
    for line in ios.lines() {
        out.push('\n');
        out.push_str(indent);
        out.push_str("// ");
        out.push_str(line);
    }

    out.push('\n');
    out.push_str(indent);
    out.push_str(END_MARKER);
    out
}

/// Replace every platform branch in `text` with the `platform` variant
///
/// Blocks with a missing inner or closing sentinel are left untouched.
pub fn resolve_platform_branches(text: &str, platform: Platform) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(found) = text[pos..].find(ANDROID_MARKER) {
        let start = pos + found;
        let android_start = start + ANDROID_MARKER.len();

        let Some(ios_at) = text[android_start..]
            .find(IOS_MARKER)
            .map(|i| android_start + i)
        else {
            break;
        };
        let ios_start = ios_at + IOS_MARKER.len();
        let Some(end_at) = text[ios_start..].find(END_MARKER).map(|i| ios_start + i) else {
            break;
        };

        // A nested android sentinel means the block is malformed.
        if text[android_start..ios_at].contains(ANDROID_MARKER) {
            out.push_str(&text[pos..android_start]);
            pos = android_start;
            continue;
        }

        let body = match platform {
            Platform::Android => branch_lines(&text[android_start..ios_at], false),
            Platform::Ios => branch_lines(&text[ios_start..end_at], true),
        };

        out.push_str(&text[pos..start]);
        out.push_str(body.join("\n").trim_start());
        pos = end_at + END_MARKER.len();
    }

    out.push_str(&text[pos..]);
    out
}

/// Lines of one branch body, optionally uncommented
///
/// The body runs from the end of one sentinel to the start of the next, so
/// the first segment is the remainder of the sentinel line and the last is
/// the indentation in front of the next sentinel; both are dropped.
fn branch_lines(body: &str, uncomment: bool) -> Vec<String> {
    let segments: Vec<&str> = body.split('\n').collect();
    if segments.len() < 3 {
        return Vec::new();
    }

    segments[1..segments.len() - 1]
        .iter()
        .map(|line| {
            if uncomment {
                uncomment_line(line)
            } else {
                (*line).to_string()
            }
        })
        .collect()
}

fn uncomment_line(line: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    let rest = rest
        .strip_prefix("// ")
        .or_else(|| rest.strip_prefix("//"))
        .unwrap_or(rest);
    format!("{indent}{rest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_shape() {
        let block = platform_branch("  ", "a();", "b();");
        assert_eq!(
            block,
            "//<appiumize:android>\n  a();\n  //<appiumize:ios>\n  // b();\n  //</appiumize>"
        );
    }

    #[test]
    fn test_resolve_android() {
        let text = format!("  {}\nnext();", platform_branch("  ", "a();", "b();"));
        assert_eq!(resolve_platform_branches(&text, Platform::Android), "  a();\nnext();");
    }

    #[test]
    fn test_resolve_ios_uncomments() {
        let text = format!("  {}\nnext();", platform_branch("  ", "a();", "b();\n// note"));
        assert_eq!(
            resolve_platform_branches(&text, Platform::Ios),
            "  b();\n  // note\nnext();"
        );
    }

    #[test]
    fn test_multiple_blocks() {
        let text = format!(
            "{}\n{}",
            platform_branch("", "a1();", "i1();"),
            platform_branch("", "a2();", "i2();")
        );
        assert_eq!(resolve_platform_branches(&text, Platform::Android), "a1();\na2();");
        assert_eq!(resolve_platform_branches(&text, Platform::Ios), "i1();\ni2();");
    }

    #[test]
    fn test_plain_comments_untouched() {
        let text = "// For Android:\na();\n// For iOS:\n// b();\n";
        assert_eq!(resolve_platform_branches(text, Platform::Ios), text);
        assert_eq!(resolve_platform_branches(text, Platform::Android), text);
    }

    #[test]
    fn test_unterminated_block_left_alone() {
        let text = "//<appiumize:android>\na();\n//<appiumize:ios>\n// b();";
        assert_eq!(resolve_platform_branches(text, Platform::Ios), text);
    }

    #[test]
    fn test_mid_line_block() {
        let text = format!("Object r = {}", platform_branch("", "a();", "b();"));
        assert_eq!(resolve_platform_branches(&text, Platform::Ios), "Object r = b();");
    }
}
