//! Device control and keyboard commands

use super::{number, quoted, receiver, script, script_bare, REST};
use crate::platform::platform_branch;
use crate::{ReplaceError, Result, Rule, RuleMatch};

pub(super) fn device_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::computed(
            "device-rotate",
            &script("mobile:device:rotate", &format!("{}{REST}", quoted("state", "state"))),
            rotate,
            "Convert mobile:device:rotate to driver.rotate(ScreenOrientation)",
        )?,
        Rule::computed(
            "device-lock",
            &script(
                "mobile:screen:lock",
                &format!("(?:{})?{REST}", number("timeout", "timeout")),
            ),
            lock,
            "Convert mobile:screen:lock to lockDevice",
        )?,
        Rule::literal(
            "device-reboot",
            &script_bare("mobile:device:reboot"),
            "// Appium has no device reboot command; restart the device outside the test session.",
            "Replace mobile:device:reboot with guidance (no Appium equivalent)",
        )?,
        Rule::computed(
            "device-press-key",
            &script("mobile:presskey", &format!("{}{REST}", quoted("keySequence", "key"))),
            press_key,
            "Convert mobile:presskey to pressKey (Android) / mobile: pressButton (iOS) by key name",
        )?,
    ])
}

pub(super) fn keyboard_rules() -> Result<Vec<Rule>> {
    Ok(vec![Rule::computed(
        "keyboard-display",
        &script("mobile:keyboard:display", &format!("{}{REST}", quoted("mode", "mode"))),
        keyboard_display,
        "Convert mobile:keyboard:display off to hideKeyboard",
    )?])
}

fn rotate(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let state = m.require("state")?;
    Ok(match state.trim().to_ascii_lowercase().as_str() {
        "landscape" => format!("{driver}.rotate(ScreenOrientation.LANDSCAPE);"),
        "portrait" => format!("{driver}.rotate(ScreenOrientation.PORTRAIT);"),
        _ => format!(
            "// Unsupported rotation state '{state}'; use {driver}.rotate(ScreenOrientation.LANDSCAPE or PORTRAIT)."
        ),
    })
}

fn lock(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    Ok(match m.name("timeout") {
        Some(seconds) => format!("{driver}.lockDevice(Duration.ofSeconds({}));", whole_seconds(seconds)),
        None => format!("{driver}.lockDevice();"),
    })
}

/// Perfecto allows fractional seconds; `Duration.ofSeconds` takes a long
fn whole_seconds(raw: &str) -> String {
    raw.split('.').next().unwrap_or(raw).to_string()
}

fn press_key(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let key = m.require("key")?;
    let normalized = key.trim().to_ascii_uppercase();

    let (android_key, ios_button) = match normalized.as_str() {
        "HOME" => ("HOME", Some("home")),
        "BACK" => ("BACK", None),
        "VOL_UP" | "VOLUME_UP" => ("VOLUME_UP", Some("volumeUp")),
        "VOL_DOWN" | "VOLUME_DOWN" => ("VOLUME_DOWN", Some("volumeDown")),
        "ENTER" => ("ENTER", None),
        _ => {
            return Ok(format!(
                "// Key sequence '{key}' has no direct Appium equivalent; press each key with pressKey (Android) or mobile: pressButton (iOS)."
            ))
        }
    };

    let android = format!("{driver}.pressKey(new KeyEvent(AndroidKey.{android_key}));");
    let ios = match (ios_button, android_key) {
        (Some(button), _) => format!(
            r#"{driver}.executeScript("mobile: pressButton", ImmutableMap.of("name", "{button}"));"#
        ),
        (None, "BACK") => format!("{driver}.navigate().back();"),
        (None, _) => format!(
            "// iOS has no hardware {android_key} key; send \"\\n\" to the focused field instead."
        ),
    };

    Ok(platform_branch(m.indent(), &android, &ios))
}

fn keyboard_display(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let mode = m.require("mode")?;
    Ok(match mode.trim().to_ascii_lowercase().as_str() {
        "off" | "hide" | "false" => format!("{driver}.hideKeyboard();"),
        _ => format!(
            "// Keyboard mode '{mode}': Appium shows the keyboard when an input is focused; click the target field instead."
        ),
    })
}
