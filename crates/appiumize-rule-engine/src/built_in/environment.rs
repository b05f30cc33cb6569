//! Geolocation, notifications, browser and network settings

use super::{params, quoted, receiver, script, script_bare, script_expr, DRIVER, REST, SEP};
use crate::platform::platform_branch;
use crate::{ReplaceError, Result, Rule, RuleMatch};

pub(super) fn geolocation_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::literal(
            "location-set",
            &script(
                "mobile:location:set",
                &format!(
                    r"'coordinates'\s*:\s*'\s*(?P<lat>-?\d+(?:\.\d+)?)\s*,\s*(?P<lon>-?\d+(?:\.\d+)?)\s*'{REST}"
                ),
            ),
            format!("{DRIVER}.setLocation(new Location(${{lat}}, ${{lon}}, 0));"),
            "Convert mobile:location:set coordinates to setLocation",
        )?,
        Rule::literal(
            "location-set-by-address",
            &script("mobile:location:set", &format!("{}{REST}", quoted("address", "address"))),
            "// Appium cannot geocode '${address}'; look up its latitude/longitude and call setLocation with them.",
            "Replace mobile:location:set by address with guidance",
        )?,
        Rule::literal(
            "location-get",
            &script_expr("mobile:location:get", r#"[^"}]*"#),
            format!("{DRIVER}.location()"),
            "Convert mobile:location:get to location()",
        )?,
        Rule::literal(
            "location-reset",
            &script_bare("mobile:location:reset"),
            "// Appium has no location reset; set the device's real coordinates again with setLocation.",
            "Replace mobile:location:reset with guidance",
        )?,
    ])
}

pub(super) fn notification_rules() -> Result<Vec<Rule>> {
    Ok(vec![Rule::computed(
        "notifications-open",
        &script_bare("mobile:notifications:open"),
        open_notifications,
        "Convert mobile:notifications:open to openNotifications (Android) / a top-edge swipe (iOS)",
    )?])
}

pub(super) fn browser_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::literal(
            "browser-goto",
            &script("mobile:browser:goto", &format!("{}{REST}", quoted("url", "url"))),
            format!(r#"{DRIVER}.get("${{url}}");"#),
            "Convert mobile:browser:goto to driver.get",
        )?,
        Rule::computed(
            "browser-open",
            &script_bare("mobile:browser:open"),
            open_browser,
            "Convert mobile:browser:open to a web context switch",
        )?,
        Rule::literal(
            "browser-clean",
            &script_bare("mobile:browser:clean"),
            format!("{DRIVER}.manage().deleteAllCookies();"),
            "Convert mobile:browser:clean to deleteAllCookies",
        )?,
        Rule::literal(
            "browser-close",
            &script_bare("mobile:browser:close"),
            format!(r#"{DRIVER}.context("NATIVE_APP");"#),
            "Convert mobile:browser:close to a switch back to the native context",
        )?,
    ])
}

pub(super) fn network_rules() -> Result<Vec<Rule>> {
    Ok(vec![Rule::computed(
        "network-settings-set",
        &script(
            "mobile:network.settings:set",
            &format!(r"(?P<settings>'[^']*'\s*:\s*'[^']*'(?:{SEP}'[^']*'\s*:\s*'[^']*')*)"),
        ),
        network_settings,
        "Convert mobile:network.settings:set to mobile: setConnectivity (Android) with iOS guidance",
    )?])
}

fn open_notifications(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    Ok(platform_branch(
        m.indent(),
        &format!("{driver}.openNotifications();"),
        &format!(
            "// iOS has no notification shade command; swipe down from the top edge.\n\
             {driver}.executeScript(\"mobile: dragFromToForDuration\", ImmutableMap.of(\"fromX\", 10, \"fromY\", 0, \"toX\", 10, \"toY\", 600, \"duration\", 0.5));"
        ),
    ))
}

fn open_browser(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    Ok(platform_branch(
        m.indent(),
        &format!(
            "// Start the session with browserName=Chrome, or open the browser app, then switch context.\n\
             {driver}.context(\"CHROMIUM\");"
        ),
        &format!(
            "// Start the session with browserName=Safari, or open Safari, then switch context.\n\
             {driver}.context(\"WEBVIEW_1\");"
        ),
    ))
}

/// One toggle of `mobile:network.settings:set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Wifi(bool),
    Data(bool),
    Airplane(bool),
}

impl Toggle {
    fn parse(key: &str, value: &str) -> Option<Self> {
        let enabled = match value.trim().to_ascii_lowercase().as_str() {
            "enabled" | "enable" | "on" | "true" => true,
            "disabled" | "disable" | "off" | "false" => false,
            _ => return None,
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "wifi" => Some(Self::Wifi(enabled)),
            "data" => Some(Self::Data(enabled)),
            "airplanemode" => Some(Self::Airplane(enabled)),
            _ => None,
        }
    }

    /// The `mobile: setConnectivity` argument pair
    fn connectivity_arg(self) -> String {
        match self {
            Self::Wifi(on) => format!(r#""wifi", {on}"#),
            Self::Data(on) => format!(r#""data", {on}"#),
            Self::Airplane(on) => format!(r#""airplaneMode", {on}"#),
        }
    }
}

fn network_settings(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let settings = m.require("settings")?;

    let mut toggles = Vec::new();
    let mut unknown = Vec::new();
    for (key, value) in params(settings) {
        match Toggle::parse(key, value) {
            Some(toggle) => toggles.push(toggle),
            None => unknown.push(format!("{key}={value}")),
        }
    }

    if toggles.is_empty() {
        return Ok(format!(
            "// Unsupported network settings ({}); Appium supports wifi, data and airplanemode on Android only.",
            unknown.join(", ")
        ));
    }

    let args: Vec<String> = toggles.iter().map(|t| t.connectivity_arg()).collect();
    let mut android = String::new();
    if !unknown.is_empty() {
        android.push_str(&format!("// Ignored network settings: {}\n", unknown.join(", ")));
    }
    android.push_str(&format!(
        r#"{driver}.executeScript("mobile: setConnectivity", ImmutableMap.of({}));"#,
        args.join(", ")
    ));
    let ios = "// iOS does not allow changing network settings from a test; use Control Center or a device profile.";

    Ok(platform_branch(m.indent(), &android, ios))
}
