use crate::dom;
use web_sys as web;

const REMINDER_ID: &str = "reminder";
const REMINDER_TEXT: &str = "Double click for a surprise!";
const REMINDER_STYLE: &str = "position:fixed;bottom:20px;left:50%;transform:translateX(-50%);\
padding:10px 20px;background-color:rgba(232,212,247,0.9);color:#524669;\
font-family:Arial,sans-serif;border-radius:10px;box-shadow:0 2px 10px rgba(0,0,0,0.2);\
z-index:1001";
const CLOSE_STYLE: &str = "margin-left:10px;background:transparent;border:none;color:#524669;\
font-size:16px;cursor:pointer;padding:0";

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(REMINDER_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Append the burst reminder banner with its close button to `<body>`.
pub fn show_reminder(document: &web::Document) -> anyhow::Result<()> {
    let js = |e| anyhow::anyhow!("{:?}", e);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let reminder = document.create_element("div").map_err(js)?;
    reminder.set_id(REMINDER_ID);
    reminder.set_text_content(Some(REMINDER_TEXT));
    reminder.set_attribute("style", REMINDER_STYLE).map_err(js)?;

    let close = document.create_element("button").map_err(js)?;
    close.set_text_content(Some("x"));
    close.set_attribute("style", CLOSE_STYLE).map_err(js)?;
    let doc = document.clone();
    dom::add_click_listener(&close, move || hide(&doc));

    reminder.append_child(&close).map_err(js)?;
    body.append_child(&reminder).map_err(js)?;
    Ok(())
}
