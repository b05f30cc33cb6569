//! Application lifecycle: open, close, install, uninstall, clean

use super::{quoted, receiver, script, DRIVER, REST};
use crate::platform::platform_branch;
use crate::{ReplaceError, Result, Rule, RuleMatch};

pub(super) fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::computed(
            "app-open-by-name",
            &script("mobile:application:open", &format!("{}{REST}", quoted("name", "app"))),
            open_by_name,
            "Convert mobile:application:open by name to activateApp / mobile: launchApp",
        )?,
        Rule::literal(
            "app-open-by-identifier",
            &script("mobile:application:open", &format!("{}{REST}", quoted("identifier", "id"))),
            format!(r#"{DRIVER}.activateApp("${{id}}");"#),
            "Convert mobile:application:open by identifier to activateApp",
        )?,
        Rule::literal(
            "app-close-by-name",
            &script("mobile:application:close", &format!("{}{REST}", quoted("name", "app"))),
            format!(r#"{DRIVER}.terminateApp(appIdentifier("${{app}}"));"#),
            "Convert mobile:application:close by name to terminateApp",
        )?,
        Rule::literal(
            "app-close-by-identifier",
            &script("mobile:application:close", &format!("{}{REST}", quoted("identifier", "id"))),
            format!(r#"{DRIVER}.terminateApp("${{id}}");"#),
            "Convert mobile:application:close by identifier to terminateApp",
        )?,
        Rule::literal(
            "app-install",
            &script("mobile:application:install", &format!("{}{REST}", quoted("file", "file"))),
            format!(r#"{DRIVER}.installApp("${{file}}");"#),
            "Convert mobile:application:install to installApp",
        )?,
        Rule::literal(
            "app-uninstall-by-name",
            &script("mobile:application:uninstall", &format!("{}{REST}", quoted("name", "app"))),
            format!(r#"{DRIVER}.removeApp(appIdentifier("${{app}}"));"#),
            "Convert mobile:application:uninstall by name to removeApp",
        )?,
        Rule::literal(
            "app-uninstall-by-identifier",
            &script(
                "mobile:application:uninstall",
                &format!("{}{REST}", quoted("identifier", "id")),
            ),
            format!(r#"{DRIVER}.removeApp("${{id}}");"#),
            "Convert mobile:application:uninstall by identifier to removeApp",
        )?,
        Rule::computed(
            "app-clean",
            &script("mobile:application:clean", &format!("{}{REST}", quoted("name", "app"))),
            clean_app,
            "Convert mobile:application:clean to mobile: clearApp (Android) with iOS guidance",
        )?,
    ])
}

fn open_by_name(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let app = m.require("app")?;
    Ok(platform_branch(
        m.indent(),
        &format!(r#"{driver}.activateApp(appIdentifier("{app}"));"#),
        &format!(
            r#"{driver}.executeScript("mobile: launchApp", ImmutableMap.of("bundleId", appIdentifier("{app}")));"#
        ),
    ))
}

fn clean_app(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let app = m.require("app")?;
    Ok(platform_branch(
        m.indent(),
        &format!(
            r#"{driver}.executeScript("mobile: clearApp", ImmutableMap.of("appId", appIdentifier("{app}")));"#
        ),
        &format!(
            "// iOS cannot clear app data in place; reinstall the app instead.\n\
             {driver}.removeApp(appIdentifier(\"{app}\"));"
        ),
    ))
}
