use web_sys as web;

pub const LOADER_ELEMENT_ID: &str = "vault-loader";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ELEMENT_ID) {
        let _ = el.set_attribute("style", "");
        let _ = el.set_attribute("aria-busy", "true");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ELEMENT_ID) {
        let _ = el.set_attribute("style", "display:none");
        let _ = el.set_attribute("aria-busy", "false");
    }
}
