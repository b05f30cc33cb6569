//! Touch gestures and scrolling

use super::{param, params, point, quoted, receiver, script, REST, SEP};
use crate::platform::platform_branch;
use crate::swipe::swipe_direction;
use crate::{ReplaceError, Result, Rule, RuleMatch};

pub(super) fn gesture_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::computed(
            "touch-swipe",
            &script(
                "mobile:touch:swipe",
                &format!("{}{SEP}{}{REST}", point("start", "start_"), point("end", "end_")),
            ),
            swipe,
            "Convert mobile:touch:swipe to mobile: dragGesture (Android) / mobile: swipe (iOS)",
        )?,
        // Parameters may come in any order, so both tap rules take the whole
        // parameter string. The long press must precede the plain tap.
        Rule::computed(
            "touch-long-press",
            &script("mobile:touch:tap", &tap_params("duration")),
            long_press,
            "Convert mobile:touch:tap with duration to mobile: longClickGesture / mobile: touchAndHold",
        )?,
        Rule::computed(
            "touch-tap",
            &script("mobile:touch:tap", &tap_params("location")),
            tap,
            "Convert mobile:touch:tap to mobile: clickGesture / mobile: tap",
        )?,
        Rule::computed(
            "touch-drag",
            &script(
                "mobile:touch:drag",
                &format!(
                    r"'location'\s*:\s*'(?P<start_x>[^',]+),(?P<start_y>[^',]+),(?P<end_x>[^',]+),(?P<end_y>[^',]+)'{REST}"
                ),
            ),
            drag,
            "Convert mobile:touch:drag to mobile: dragGesture / mobile: dragFromToForDuration",
        )?,
    ])
}

pub(super) fn scrolling_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        // Text lookups that ask Perfecto to scroll belong here rather than in
        // the assertions category, which would only search the visible page.
        Rule::computed(
            "scroll-to-text",
            &script(
                "mobile:text:find",
                &format!(
                    r"{}{SEP}'scrolling'\s*:\s*'scroll'{REST}",
                    quoted("content", "content")
                ),
            ),
            scroll_to_text,
            "Convert mobile:text:find with scrolling to a UiScrollable lookup / mobile: scroll",
        )?,
        Rule::computed(
            "scroll-direction",
            &script("mobile:scroll", &format!("{}{REST}", quoted("direction", "direction"))),
            scroll_direction,
            "Convert mobile:scroll to mobile: scrollGesture (Android) / mobile: scroll (iOS)",
        )?,
    ])
}

/// A `mobile:touch:tap` parameter string that mentions `key` anywhere
fn tap_params(key: &str) -> String {
    format!(r#"(?P<params>[^"}}]*'{key}'[^"}}]*)"#)
}

/// `x,y` from a `'location'` value
fn location<'h>(
    m: &RuleMatch<'h, '_>,
    pairs: &[(&str, &'h str)],
) -> std::result::Result<Option<(&'h str, &'h str)>, ReplaceError> {
    let Some(raw) = param(pairs, "location") else {
        return Ok(None);
    };
    match raw.split_once(',') {
        Some((x, y)) if !x.trim().is_empty() && !y.trim().is_empty() => Ok(Some((x, y))),
        _ => Err(ReplaceError::Unsupported(format!(
            "invalid location '{raw}' in `{}`",
            m.full()
        ))),
    }
}

/// `percentToPixel(driver, "<value>", <horizontal>)`
fn pixel(driver: &str, value: &str, horizontal: bool) -> String {
    format!(r#"percentToPixel({driver}, "{}", {horizontal})"#, value.trim())
}

fn swipe(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let (sx, sy) = (m.require("start_x")?, m.require("start_y")?);
    let (ex, ey) = (m.require("end_x")?, m.require("end_y")?);
    let direction = swipe_direction(sx, sy, ex, ey)?;

    let android = format!(
        "// swipe {direction}\n\
         {driver}.executeScript(\"mobile: dragGesture\", ImmutableMap.of(\"startX\", {}, \"startY\", {}, \"endX\", {}, \"endY\", {}));",
        pixel(driver, sx, true),
        pixel(driver, sy, false),
        pixel(driver, ex, true),
        pixel(driver, ey, false),
    );
    let ios = format!(
        r#"{driver}.executeScript("mobile: swipe", ImmutableMap.of("direction", "{direction}"));"#
    );

    Ok(platform_branch(m.indent(), &android, &ios))
}

fn long_press(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let pairs = params(m.require("params")?);
    let seconds = param(&pairs, "duration")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| ReplaceError::Unsupported(format!("invalid duration in `{}`", m.full())))?;
    let millis = (seconds * 1000.0).round() as u64;

    let (android, ios) = match location(m, &pairs)? {
        Some((x, y)) => (
            format!(
                r#"{driver}.executeScript("mobile: longClickGesture", ImmutableMap.of("x", {}, "y", {}, "duration", {millis}));"#,
                pixel(driver, x, true),
                pixel(driver, y, false),
            ),
            format!(
                r#"{driver}.executeScript("mobile: touchAndHold", ImmutableMap.of("x", {}, "y", {}, "duration", {seconds:.1}));"#,
                pixel(driver, x, true),
                pixel(driver, y, false),
            ),
        ),
        None => (
            format!(
                "// The tap had no location; add \"x\"/\"y\" or \"elementId\" for the target.\n\
                 {driver}.executeScript(\"mobile: longClickGesture\", ImmutableMap.of(\"duration\", {millis}));"
            ),
            format!(
                "// The tap had no location; add \"x\"/\"y\" or \"elementId\" for the target.\n\
                 {driver}.executeScript(\"mobile: touchAndHold\", ImmutableMap.of(\"duration\", {seconds:.1}));"
            ),
        ),
    };

    Ok(platform_branch(m.indent(), &android, &ios))
}

fn tap(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let pairs = params(m.require("params")?);
    let (x, y) = location(m, &pairs)?
        .ok_or_else(|| ReplaceError::Unsupported(format!("missing location in `{}`", m.full())))?;

    let android = format!(
        r#"{driver}.executeScript("mobile: clickGesture", ImmutableMap.of("x", {}, "y", {}));"#,
        pixel(driver, x, true),
        pixel(driver, y, false),
    );
    let ios = format!(
        r#"{driver}.executeScript("mobile: tap", ImmutableMap.of("x", {}, "y", {}));"#,
        pixel(driver, x, true),
        pixel(driver, y, false),
    );

    Ok(platform_branch(m.indent(), &android, &ios))
}

fn drag(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let (sx, sy) = (m.require("start_x")?, m.require("start_y")?);
    let (ex, ey) = (m.require("end_x")?, m.require("end_y")?);

    let android = format!(
        r#"{driver}.executeScript("mobile: dragGesture", ImmutableMap.of("startX", {}, "startY", {}, "endX", {}, "endY", {}));"#,
        pixel(driver, sx, true),
        pixel(driver, sy, false),
        pixel(driver, ex, true),
        pixel(driver, ey, false),
    );
    let ios = format!(
        r#"{driver}.executeScript("mobile: dragFromToForDuration", ImmutableMap.of("fromX", {}, "fromY", {}, "toX", {}, "toY", {}, "duration", 1.0));"#,
        pixel(driver, sx, true),
        pixel(driver, sy, false),
        pixel(driver, ex, true),
        pixel(driver, ey, false),
    );

    Ok(platform_branch(m.indent(), &android, &ios))
}

fn scroll_to_text(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let content = m.require("content")?;

    let android = format!(
        r#"{driver}.findElement(AppiumBy.androidUIAutomator("new UiScrollable(new UiSelector().scrollable(true)).scrollIntoView(new UiSelector().textContains(\"{content}\"))"));"#
    );
    let ios = format!(
        r#"{driver}.executeScript("mobile: scroll", ImmutableMap.of("predicateString", "label CONTAINS '{content}'"));"#
    );

    Ok(platform_branch(m.indent(), &android, &ios))
}

fn scroll_direction(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let raw = m.require("direction")?;
    let direction = raw.trim().to_ascii_lowercase();

    if !matches!(direction.as_str(), "up" | "down" | "left" | "right") {
        return Ok(format!(
            "// Unsupported scroll direction '{raw}'; expected up, down, left or right."
        ));
    }

    let android = format!(
        r#"{driver}.executeScript("mobile: scrollGesture", ImmutableMap.of("left", 0, "top", 0, "width", {driver}.manage().window().getSize().getWidth(), "height", {driver}.manage().window().getSize().getHeight(), "direction", "{direction}"));"#
    );
    let ios = format!(
        r#"{driver}.executeScript("mobile: scroll", ImmutableMap.of("direction", "{direction}"));"#
    );

    Ok(platform_branch(m.indent(), &android, &ios))
}
