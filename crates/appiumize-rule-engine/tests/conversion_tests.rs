//! End-to-end rewrites through the built-in catalog
//!
//! These tests drive [`rewrite`] the way the CLI and the stdio server do and
//! check the observable output for each command family.

use appiumize_core::{Platform, Status};
use appiumize_rule_engine::{load_built_in_catalog, rewrite, Catalog, Rule};

fn catalog() -> Catalog {
    load_built_in_catalog().expect("Failed to load built-in rules")
}

fn convert(source: &str, platform: Platform) -> String {
    let result = rewrite(source, platform, &catalog());
    assert_eq!(result.status, Status::Success, "{:?}", result.message);
    result.converted_code.expect("successful result carries code")
}

fn assert_no_sentinels(code: &str) {
    assert!(!code.contains("appiumize:"), "unresolved branch in:\n{code}");
    assert!(!code.contains("</appiumize>"), "unresolved branch in:\n{code}");
}

// ============================================================================
// Element finding
// ============================================================================

#[test]
fn test_login_button_locator() {
    let source = r#"driver.findElement(PerfectoMobileBy.id("login-button")).click();"#;
    let result = rewrite(source, Platform::Android, &catalog());

    assert!(result.is_success());
    assert_eq!(result.rules_applied_count, Some(1));
    assert_eq!(result.original_code, source);

    let code = result.converted_code.unwrap();
    assert!(code.contains(r#"driver.findElement(By.id("login-button")).click();"#));
    assert!(code.contains("import org.openqa.selenium.By;"));
    assert!(code.contains("import io.appium.java_client.AppiumBy;"));
    assert!(!code.contains("PerfectoMobileBy"));
}

#[test]
fn test_every_locator_converted() {
    let source = r#"
driver.findElement(PerfectoMobileBy.name("user"));
driver.findElement(PerfectoMobileBy.xpath("//a[@id=\"x\"]"));
driver.findElement(PerfectoMobileBy.accessibilityId("Submit"));
driver.findElement(PerfectoMobileBy.cssSelector(".btn"));
"#;
    let code = convert(source, Platform::Ios);

    assert!(code.contains(r#"By.name("user")"#));
    assert!(code.contains(r#"By.xpath("//a[@id=\"x\"]")"#));
    assert!(code.contains(r#"AppiumBy.accessibilityId("Submit")"#));
    assert!(code.contains(r#"By.cssSelector(".btn")"#));
}

// ============================================================================
// Platform branches
// ============================================================================

#[test]
fn test_app_open_is_platform_exclusive() {
    let source = r#"driver.executeScript("mobile:application:open", "{'name':'Maps'}");"#;

    let android = convert(source, Platform::Android);
    assert!(android.contains(r#"driver.activateApp(appIdentifier("Maps"));"#));
    assert!(!android.contains("mobile: launchApp"));
    assert_no_sentinels(&android);

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(
        r#"driver.executeScript("mobile: launchApp", ImmutableMap.of("bundleId", appIdentifier("Maps")));"#
    ));
    assert!(!ios.contains("activateApp"));
    assert_no_sentinels(&ios);

    // Both variants call the helper, so both carry its definition.
    assert!(android.contains("static String appIdentifier("));
    assert!(ios.contains("static String appIdentifier("));
}

#[test]
fn test_branch_keeps_indentation() {
    let source = r#"class LoginTest {
    void open() {
        driver.executeScript("mobile:application:open", "{'name':'Maps'}");
    }
}
"#;
    let android = convert(source, Platform::Android);
    assert!(android.contains("        driver.activateApp(appIdentifier(\"Maps\"));\n    }"));

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains("        driver.executeScript(\"mobile: launchApp\""));
}

#[test]
fn test_ios_guidance_comment_survives() {
    let source = r#"driver.executeScript("mobile:application:clean", "{'name':'Maps'}");"#;
    let ios = convert(source, Platform::Ios);
    assert!(ios.contains("// iOS cannot clear app data in place; reinstall the app instead."));
    assert!(ios.contains(r#"driver.removeApp(appIdentifier("Maps"));"#));
    assert_no_sentinels(&ios);
}

#[test]
fn test_cast_receiver() {
    let source = r#"((JavascriptExecutor) driver).executeScript("mobile:application:open", "{'identifier':'com.acme.app'}");"#;
    let code = convert(source, Platform::Android);
    assert!(code.contains(r#"driver.activateApp("com.acme.app");"#));
    assert!(!code.contains("JavascriptExecutor"));
}

// ============================================================================
// Gestures
// ============================================================================

#[test]
fn test_swipe_left_on_ios() {
    let source = r#"driver.executeScript("mobile:touch:swipe", "{'start':'80%,10%','end':'20%,10%'}");"#;
    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(r#""direction", "left""#));
    assert!(ios.contains("mobile: swipe"));
    assert_no_sentinels(&ios);
}

#[test]
fn test_swipe_on_android_uses_pixels() {
    let source = r#"driver.executeScript("mobile:touch:swipe", "{'start':'50%,80%','end':'50%,20%'}");"#;
    let android = convert(source, Platform::Android);
    assert!(android.contains("// swipe up"));
    assert!(android.contains("mobile: dragGesture"));
    assert!(android.contains(r#"percentToPixel(driver, "80%", false)"#));
    assert!(android.contains("static int percentToPixel("));
}

#[test]
fn test_long_press_wins_over_tap() {
    let source =
        r#"driver.executeScript("mobile:touch:tap", "{'location':'50%,50%','duration':'3'}");"#;

    let android = convert(source, Platform::Android);
    assert!(android.contains(r#""mobile: longClickGesture""#));
    assert!(android.contains(r#""duration", 3000"#));
    assert!(!android.contains(r#""mobile: clickGesture""#));

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(r#""mobile: touchAndHold""#));
    assert!(ios.contains(r#""duration", 3.0"#));
}

#[test]
fn test_plain_tap() {
    let source = r#"driver.executeScript("mobile:touch:tap", "{'location':'100,200'}");"#;
    let android = convert(source, Platform::Android);
    assert!(android.contains(
        r#"driver.executeScript("mobile: clickGesture", ImmutableMap.of("x", percentToPixel(driver, "100", true), "y", percentToPixel(driver, "200", false)));"#
    ));
}

#[test]
fn test_long_press_without_location() {
    let source = r#"driver.executeScript("mobile:touch:tap", "{'duration':3}");"#;

    let result = rewrite(source, Platform::Android, &catalog());
    assert_eq!(result.rules_applied_count, Some(1));
    let android = result.converted_code.unwrap();
    assert!(android.contains(
        r#"driver.executeScript("mobile: longClickGesture", ImmutableMap.of("duration", 3000));"#
    ));
    assert!(android.contains("// The tap had no location"));
    assert!(!android.contains(r#""mobile:touch:tap""#));

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(
        r#"driver.executeScript("mobile: touchAndHold", ImmutableMap.of("duration", 3.0));"#
    ));
    assert!(!ios.contains(r#""mobile:touch:tap""#));
    assert_no_sentinels(&ios);
}

#[test]
fn test_long_press_duration_before_location() {
    let source =
        r#"driver.executeScript("mobile:touch:tap", "{'duration':'3','location':'1,2'}");"#;

    let result = rewrite(source, Platform::Android, &catalog());
    assert_eq!(result.rules_applied_count, Some(1));
    let android = result.converted_code.unwrap();
    assert!(android.contains(
        r#"driver.executeScript("mobile: longClickGesture", ImmutableMap.of("x", percentToPixel(driver, "1", true), "y", percentToPixel(driver, "2", false), "duration", 3000));"#
    ));
    assert!(!android.contains(r#""mobile:touch:tap""#));

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(r#""mobile: touchAndHold""#));
    assert!(ios.contains(r#""duration", 3.0"#));
}

#[test]
fn test_tap_location_after_other_keys() {
    let source = r#"driver.executeScript("mobile:touch:tap", "{'unit':'percent','location':'10,20'}");"#;
    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(
        r#"driver.executeScript("mobile: tap", ImmutableMap.of("x", percentToPixel(driver, "10", true), "y", percentToPixel(driver, "20", false)));"#
    ));
}

#[test]
fn test_scroll_to_text_precedes_plain_find() {
    let source = r#"driver.executeScript("mobile:text:find", "{'content':'Settings','scrolling':'scroll'}");"#;
    let android = convert(source, Platform::Android);
    assert!(android.contains("UiScrollable"));
    assert!(!android.contains("getPageSource"));
}

// ============================================================================
// Device, checks, environment
// ============================================================================

#[test]
fn test_press_home() {
    let source = r#"driver.executeScript("mobile:presskey", "{'keySequence':'HOME'}");"#;

    let android = convert(source, Platform::Android);
    assert!(android.contains("driver.pressKey(new KeyEvent(AndroidKey.HOME));"));
    assert!(android.contains("import io.appium.java_client.android.nativekey.KeyEvent;"));

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains(r#"ImmutableMap.of("name", "home")"#));
}

#[test]
fn test_rotate_adds_import() {
    let source = r#"driver.executeScript("mobile:device:rotate", "{'state':'landscape'}");"#;
    let code = convert(source, Platform::Android);
    assert!(code.contains("driver.rotate(ScreenOrientation.LANDSCAPE);"));
    assert!(code.contains("import org.openqa.selenium.ScreenOrientation;"));
}

#[test]
fn test_text_checkpoint_keeps_indent() {
    let source = "    driver.executeScript(\"mobile:checkpoint:text\", \"{'content':'Welcome'}\");";
    let code = convert(source, Platform::Android);
    assert!(code.contains(
        "    if (!driver.getPageSource().contains(\"Welcome\")) {\n        throw new AssertionError(\"Text checkpoint failed: Welcome\");\n    }"
    ));
}

#[test]
fn test_helper_lands_after_trailing_checkpoint() {
    let source = r#"driver.executeScript("mobile:application:open", "{'name':'Maps'}");
driver.executeScript("mobile:checkpoint:text", "{'content':'Welcome'}");"#;
    let code = convert(source, Platform::Android);

    let block = "if (!driver.getPageSource().contains(\"Welcome\")) {\n    throw new AssertionError(\"Text checkpoint failed: Welcome\");\n}";
    let block_at = code.find(block).expect("checkpoint block left intact");
    let helper_at = code.find("static String appIdentifier(").expect("helper injected");
    assert!(helper_at > block_at + block.len(), "helper inside the if block:\n{code}");
    assert_eq!(code.matches("static String appIdentifier(").count(), 1);
}

#[test]
fn test_timers() {
    let source = r#"driver.executeScript("mobile:timer:start", "{'timerId':'login'}");
long elapsed = (Long) driver.executeScript("mobile:timer:info", "{'type':'elapsed','timerId':'login'}");"#;
    let code = convert(source, Platform::Android);
    assert!(code.contains("long loginStart = System.currentTimeMillis();"));
    assert!(code.contains("long elapsed = (Long) (System.currentTimeMillis() - loginStart);"));
}

#[test]
fn test_set_location() {
    let source = r#"driver.executeScript("mobile:location:set", "{'coordinates':'40.7128,-74.0060'}");"#;
    let code = convert(source, Platform::Ios);
    assert!(code.contains("driver.setLocation(new Location(40.7128, -74.0060, 0));"));
    assert!(code.contains("import org.openqa.selenium.html5.Location;"));
}

#[test]
fn test_network_settings() {
    let source = r#"driver.executeScript("mobile:network.settings:set", "{'wifi':'enabled','airplanemode':'disabled'}");"#;

    let android = convert(source, Platform::Android);
    assert!(android.contains(
        r#"driver.executeScript("mobile: setConnectivity", ImmutableMap.of("wifi", true, "airplaneMode", false));"#
    ));

    let ios = convert(source, Platform::Ios);
    assert!(ios.contains("// iOS does not allow changing network settings"));
    assert!(!ios.contains("setConnectivity"));
}

#[test]
fn test_browser_commands() {
    let source = r#"driver.executeScript("mobile:browser:goto", "{'url':'https://example.com'}");
driver.executeScript("mobile:browser:clean", "{}");"#;
    let code = convert(source, Platform::Android);
    assert!(code.contains(r#"driver.get("https://example.com");"#));
    assert!(code.contains("driver.manage().deleteAllCookies();"));
}

// ============================================================================
// Engine guarantees
// ============================================================================

#[test]
fn test_failure_does_not_mutate() {
    let source = r#"driver.findElement(PerfectoMobileBy.id("a"));
driver.executeScript("mobile:touch:swipe", "{'start':'abc,10%','end':'20%,10%'}");"#;
    let result = rewrite(source, Platform::Android, &catalog());

    assert_eq!(result.status, Status::Error);
    assert_eq!(result.original_code, source);
    assert!(result.converted_code.is_none());
    let message = result.message.unwrap();
    assert!(message.contains("touch-swipe"), "{message}");
    assert!(message.contains("abc"), "{message}");
}

#[test]
fn test_unmatched_input_still_gets_imports() {
    let result = rewrite("int x = 1;", Platform::Android, &catalog());
    assert!(result.is_success());
    assert_eq!(result.rules_applied_count, Some(0));
    let code = result.converted_code.unwrap();
    assert!(code.ends_with("int x = 1;"));
    assert!(code.starts_with("import org.openqa.selenium.By;"));
}

#[test]
fn test_empty_input() {
    let result = rewrite("", Platform::Ios, &catalog());
    assert!(result.is_success());
    assert_eq!(result.rules_applied_count, Some(0));
}

#[test]
fn test_second_conversion_is_stable() {
    let source = r#"package com.acme;

public class LoginTest {
    public void run() {
        driver.findElement(PerfectoMobileBy.id("login-button")).click();
        driver.executeScript("mobile:application:open", "{'name':'Maps'}");
        driver.executeScript("mobile:touch:swipe", "{'start':'80%,10%','end':'20%,10%'}");
        driver.executeScript("mobile:device:rotate", "{'state':'portrait'}");
    }
}
"#;
    for platform in Platform::all() {
        let once = convert(source, *platform);
        let twice = convert(&once, *platform);
        assert_eq!(once, twice, "second pass changed {platform} output");
        assert_eq!(once.matches("import org.openqa.selenium.By;").count(), 1);
        assert_eq!(once.matches("static int percentToPixel(").count(), 1);
    }
}

#[test]
fn test_imports_follow_package() {
    let source = "package com.acme;\n\nclass T {}\n";
    let code = convert(source, Platform::Android);
    assert!(code.starts_with("package com.acme;\n\nimport org.openqa.selenium.By;"));
}

#[test]
fn test_later_category_sees_earlier_output() {
    let mut catalog = catalog();
    catalog.add_rule(
        "custom",
        Rule::literal("rename-login", r#"By\.id\("login-button"\)"#, r#"By.id("login")"#, "").unwrap(),
    );

    let source = r#"driver.findElement(PerfectoMobileBy.id("login-button"));"#;
    let result = rewrite(source, Platform::Android, &catalog);
    assert_eq!(result.rules_applied_count, Some(2));
    assert!(result.converted_code.unwrap().contains(r#"By.id("login")"#));
}

// ============================================================================
// Every built-in rule
// ============================================================================

/// (rule, minimal input, Android fragment, iOS fragment)
const RULE_CASES: &[(&str, &str, &str, &str)] = &[
    (
        "perfecto-by-id",
        r#"driver.findElement(PerfectoMobileBy.id("a"));"#,
        r#"driver.findElement(By.id("a"));"#,
        r#"driver.findElement(By.id("a"));"#,
    ),
    (
        "perfecto-by-name",
        r#"driver.findElement(PerfectoMobileBy.name("a"));"#,
        r#"By.name("a")"#,
        r#"By.name("a")"#,
    ),
    (
        "perfecto-by-xpath",
        r#"driver.findElement(PerfectoMobileBy.xpath("//a"));"#,
        r#"By.xpath("//a")"#,
        r#"By.xpath("//a")"#,
    ),
    (
        "perfecto-by-class-name",
        r#"driver.findElement(PerfectoMobileBy.className("a"));"#,
        r#"By.className("a")"#,
        r#"By.className("a")"#,
    ),
    (
        "perfecto-by-accessibility-id",
        r#"driver.findElement(PerfectoMobileBy.accessibilityId("a"));"#,
        r#"AppiumBy.accessibilityId("a")"#,
        r#"AppiumBy.accessibilityId("a")"#,
    ),
    (
        "perfecto-by-link-text",
        r#"driver.findElement(PerfectoMobileBy.linkText("a"));"#,
        r#"By.linkText("a")"#,
        r#"By.linkText("a")"#,
    ),
    (
        "perfecto-by-css-selector",
        r#"driver.findElement(PerfectoMobileBy.cssSelector(".a"));"#,
        r#"By.cssSelector(".a")"#,
        r#"By.cssSelector(".a")"#,
    ),
    (
        "app-open-by-name",
        r#"driver.executeScript("mobile:application:open", "{'name':'Maps'}");"#,
        r#"driver.activateApp(appIdentifier("Maps"));"#,
        r#"driver.executeScript("mobile: launchApp", ImmutableMap.of("bundleId", appIdentifier("Maps")));"#,
    ),
    (
        "app-open-by-identifier",
        r#"driver.executeScript("mobile:application:open", "{'identifier':'com.acme'}");"#,
        r#"driver.activateApp("com.acme");"#,
        r#"driver.activateApp("com.acme");"#,
    ),
    (
        "app-close-by-name",
        r#"driver.executeScript("mobile:application:close", "{'name':'Maps'}");"#,
        r#"driver.terminateApp(appIdentifier("Maps"));"#,
        r#"driver.terminateApp(appIdentifier("Maps"));"#,
    ),
    (
        "app-close-by-identifier",
        r#"driver.executeScript("mobile:application:close", "{'identifier':'com.acme'}");"#,
        r#"driver.terminateApp("com.acme");"#,
        r#"driver.terminateApp("com.acme");"#,
    ),
    (
        "app-install",
        r#"driver.executeScript("mobile:application:install", "{'file':'app.apk'}");"#,
        r#"driver.installApp("app.apk");"#,
        r#"driver.installApp("app.apk");"#,
    ),
    (
        "app-uninstall-by-name",
        r#"driver.executeScript("mobile:application:uninstall", "{'name':'Maps'}");"#,
        r#"driver.removeApp(appIdentifier("Maps"));"#,
        r#"driver.removeApp(appIdentifier("Maps"));"#,
    ),
    (
        "app-uninstall-by-identifier",
        r#"driver.executeScript("mobile:application:uninstall", "{'identifier':'com.acme'}");"#,
        r#"driver.removeApp("com.acme");"#,
        r#"driver.removeApp("com.acme");"#,
    ),
    (
        "app-clean",
        r#"driver.executeScript("mobile:application:clean", "{'name':'Maps'}");"#,
        r#"driver.executeScript("mobile: clearApp", ImmutableMap.of("appId", appIdentifier("Maps")));"#,
        r#"driver.removeApp(appIdentifier("Maps"));"#,
    ),
    (
        "device-rotate",
        r#"driver.executeScript("mobile:device:rotate", "{'state':'portrait'}");"#,
        "driver.rotate(ScreenOrientation.PORTRAIT);",
        "driver.rotate(ScreenOrientation.PORTRAIT);",
    ),
    (
        "device-lock",
        r#"driver.executeScript("mobile:screen:lock", "{'timeout':'5'}");"#,
        "driver.lockDevice(Duration.ofSeconds(5));",
        "driver.lockDevice(Duration.ofSeconds(5));",
    ),
    (
        "device-reboot",
        r#"driver.executeScript("mobile:device:reboot", "{}");"#,
        "// Appium has no device reboot command",
        "// Appium has no device reboot command",
    ),
    (
        "device-press-key",
        r#"driver.executeScript("mobile:presskey", "{'keySequence':'BACK'}");"#,
        "driver.pressKey(new KeyEvent(AndroidKey.BACK));",
        "driver.navigate().back();",
    ),
    (
        "keyboard-display",
        r#"driver.executeScript("mobile:keyboard:display", "{'mode':'off'}");"#,
        "driver.hideKeyboard();",
        "driver.hideKeyboard();",
    ),
    (
        "touch-swipe",
        r#"driver.executeScript("mobile:touch:swipe", "{'start':'50%,80%','end':'50%,20%'}");"#,
        r#""mobile: dragGesture""#,
        r#"driver.executeScript("mobile: swipe", ImmutableMap.of("direction", "up"));"#,
    ),
    (
        "touch-long-press",
        r#"driver.executeScript("mobile:touch:tap", "{'location':'10,20','duration':'2'}");"#,
        r#""mobile: longClickGesture""#,
        r#""mobile: touchAndHold""#,
    ),
    (
        "touch-tap",
        r#"driver.executeScript("mobile:touch:tap", "{'location':'10,20'}");"#,
        r#""mobile: clickGesture""#,
        r#""mobile: tap""#,
    ),
    (
        "touch-drag",
        r#"driver.executeScript("mobile:touch:drag", "{'location':'10,20,30,40'}");"#,
        r#""mobile: dragGesture""#,
        r#""mobile: dragFromToForDuration""#,
    ),
    (
        "scroll-to-text",
        r#"driver.executeScript("mobile:text:find", "{'content':'Settings','scrolling':'scroll'}");"#,
        "new UiScrollable(new UiSelector().scrollable(true))",
        r#""predicateString", "label CONTAINS 'Settings'""#,
    ),
    (
        "scroll-direction",
        r#"driver.executeScript("mobile:scroll", "{'direction':'down'}");"#,
        r#""mobile: scrollGesture""#,
        r#"driver.executeScript("mobile: scroll", ImmutableMap.of("direction", "down"));"#,
    ),
    (
        "checkpoint-text",
        r#"driver.executeScript("mobile:checkpoint:text", "{'content':'Welcome'}");"#,
        r#"if (!driver.getPageSource().contains("Welcome")) {"#,
        r#"if (!driver.getPageSource().contains("Welcome")) {"#,
    ),
    (
        "text-find",
        r#"boolean found = (Boolean) driver.executeScript("mobile:text:find", "{'content':'Login'}");"#,
        r#"boolean found = (Boolean) driver.getPageSource().contains("Login");"#,
        r#"boolean found = (Boolean) driver.getPageSource().contains("Login");"#,
    ),
    (
        "checkpoint-image",
        r#"driver.executeScript("mobile:checkpoint:image", "{'content':'logo.png'}");"#,
        "// Image checkpoint:",
        "// Image checkpoint:",
    ),
    (
        "image-find",
        r#"driver.executeScript("mobile:image:find", "{'content':'logo.png'}");"#,
        "// Image find:",
        "// Image find:",
    ),
    (
        "timer-start",
        r#"driver.executeScript("mobile:timer:start", "{'timerId':'login'}");"#,
        "long loginStart = System.currentTimeMillis();",
        "long loginStart = System.currentTimeMillis();",
    ),
    (
        "timer-info",
        r#"long t = (Long) driver.executeScript("mobile:timer:info", "{'type':'elapsed','timerId':'login'}");"#,
        "long t = (Long) (System.currentTimeMillis() - loginStart);",
        "long t = (Long) (System.currentTimeMillis() - loginStart);",
    ),
    (
        "location-set",
        r#"driver.executeScript("mobile:location:set", "{'coordinates':'1.5,2.5'}");"#,
        "driver.setLocation(new Location(1.5, 2.5, 0));",
        "driver.setLocation(new Location(1.5, 2.5, 0));",
    ),
    (
        "location-set-by-address",
        r#"driver.executeScript("mobile:location:set", "{'address':'Boston'}");"#,
        "// Appium cannot geocode 'Boston'",
        "// Appium cannot geocode 'Boston'",
    ),
    (
        "location-get",
        r#"Object here = driver.executeScript("mobile:location:get", "{}");"#,
        "Object here = driver.location();",
        "Object here = driver.location();",
    ),
    (
        "location-reset",
        r#"driver.executeScript("mobile:location:reset", "{}");"#,
        "// Appium has no location reset",
        "// Appium has no location reset",
    ),
    (
        "notifications-open",
        r#"driver.executeScript("mobile:notifications:open", "{}");"#,
        "driver.openNotifications();",
        r#""mobile: dragFromToForDuration""#,
    ),
    (
        "browser-goto",
        r#"driver.executeScript("mobile:browser:goto", "{'url':'https://example.com'}");"#,
        r#"driver.get("https://example.com");"#,
        r#"driver.get("https://example.com");"#,
    ),
    (
        "browser-open",
        r#"driver.executeScript("mobile:browser:open", "{}");"#,
        r#"driver.context("CHROMIUM");"#,
        r#"driver.context("WEBVIEW_1");"#,
    ),
    (
        "browser-clean",
        r#"driver.executeScript("mobile:browser:clean", "{}");"#,
        "driver.manage().deleteAllCookies();",
        "driver.manage().deleteAllCookies();",
    ),
    (
        "browser-close",
        r#"driver.executeScript("mobile:browser:close", "{}");"#,
        r#"driver.context("NATIVE_APP");"#,
        r#"driver.context("NATIVE_APP");"#,
    ),
    (
        "network-settings-set",
        r#"driver.executeScript("mobile:network.settings:set", "{'wifi':'enabled'}");"#,
        r#"driver.executeScript("mobile: setConnectivity", ImmutableMap.of("wifi", true));"#,
        "// iOS does not allow changing network settings",
    ),
];

/// A Perfecto `"mobile:<family>:<command>"` string left in `code`
///
/// Appium's own commands are written `"mobile: <name>"`, with a space.
fn leftover_perfecto_command(code: &str) -> Option<&str> {
    code.match_indices("\"mobile:").find_map(|(at, _)| {
        let rest = &code[at + 1..];
        let end = rest.find('"').unwrap_or(rest.len());
        (!rest["mobile:".len()..].starts_with(' ')).then(|| &rest[..end])
    })
}

#[test]
fn test_rule_cases_cover_catalog() {
    let catalog = catalog();
    let in_catalog: std::collections::BTreeSet<&str> = catalog.rules().map(|r| r.name()).collect();
    let in_table: std::collections::BTreeSet<&str> = RULE_CASES.iter().map(|c| c.0).collect();
    assert_eq!(in_table.len(), RULE_CASES.len(), "duplicate rule in table");
    assert_eq!(in_catalog, in_table);
}

#[test]
fn test_each_rule_fires_alone_on_both_platforms() {
    let catalog = catalog();
    for (rule, source, android, ios) in RULE_CASES {
        for (platform, expected) in [(Platform::Android, android), (Platform::Ios, ios)] {
            let result = rewrite(source, platform, &catalog);
            assert!(result.is_success(), "{rule} on {platform}: {:?}", result.message);
            assert_eq!(result.rules_applied_count, Some(1), "{rule} on {platform}");

            let code = result.converted_code.unwrap();
            assert!(code.contains(expected), "{rule} on {platform}, expected {expected} in:\n{code}");
            assert!(!code.contains("PerfectoMobileBy"), "{rule} on {platform}:\n{code}");
            assert_eq!(leftover_perfecto_command(&code), None, "{rule} on {platform}:\n{code}");
            assert!(!code.contains("//<appiumize"), "{rule} on {platform}:\n{code}");
            assert_no_sentinels(&code);
        }
    }
}
