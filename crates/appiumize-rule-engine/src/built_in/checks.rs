//! Text and image checkpoints, timers

use super::{java_identifier, quoted, receiver, script, script_bare, script_expr, DRIVER, REST};
use crate::{ReplaceError, Result, Rule, RuleMatch};

pub(super) fn assertion_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::computed(
            "checkpoint-text",
            &script("mobile:checkpoint:text", &format!("{}{REST}", quoted("content", "content"))),
            text_checkpoint,
            "Convert mobile:checkpoint:text to a page source assertion",
        )?,
        // Expression form: the result of mobile:text:find is often assigned.
        Rule::literal(
            "text-find",
            &script_expr("mobile:text:find", &format!("{}{REST}", quoted("content", "content"))),
            format!(r#"{DRIVER}.getPageSource().contains("${{content}}")"#),
            "Convert mobile:text:find to a page source lookup",
        )?,
        Rule::literal(
            "checkpoint-image",
            &script_bare("mobile:checkpoint:image"),
            "// Image checkpoint: Appium has no built-in image recognition; verify the element or add an image comparison plugin.",
            "Replace mobile:checkpoint:image with a placeholder comment",
        )?,
        Rule::literal(
            "image-find",
            &script_bare("mobile:image:find"),
            "// Image find: Appium has no built-in image recognition; locate the element with AppiumBy instead.",
            "Replace mobile:image:find with a placeholder comment",
        )?,
    ])
}

pub(super) fn timer_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::computed(
            "timer-start",
            &script("mobile:timer:start", &format!("{}{REST}", quoted("timerId", "id"))),
            timer_start,
            "Convert mobile:timer:start to a System.currentTimeMillis() local",
        )?,
        Rule::computed(
            "timer-info",
            &script_expr("mobile:timer:info", &format!("[^\"}}]*?{}{REST}", quoted("timerId", "id"))),
            timer_info,
            "Convert mobile:timer:info to an elapsed-milliseconds expression",
        )?,
    ])
}

fn text_checkpoint(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let driver = receiver(m)?;
    let content = m.require("content")?;
    let indent = m.indent();
    Ok(format!(
        "if (!{driver}.getPageSource().contains(\"{content}\")) {{\n\
         {indent}    throw new AssertionError(\"Text checkpoint failed: {content}\");\n\
         {indent}}}"
    ))
}

fn timer_start(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let id = java_identifier(m.require("id")?);
    Ok(format!("long {id}Start = System.currentTimeMillis();"))
}

fn timer_info(m: &RuleMatch<'_, '_>) -> std::result::Result<String, ReplaceError> {
    let id = java_identifier(m.require("id")?);
    Ok(format!("(System.currentTimeMillis() - {id}Start)"))
}
