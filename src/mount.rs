//! Host Mounting
//!
//! Finds the host container, reads motion overrides from it and mounts the
//! app inside it.

use std::fmt;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::{MotionConfig, MOTION_ATTRIBUTE};

/// Id of the container element the host page provides
pub const HOST_ELEMENT_ID: &str = "card-stack-root";

/// Rendering environment failures at mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No `window` or `document` available
    NoDocument,
    /// No element with the given id
    MissingHost(String),
    /// Element exists but is not an HTML element (e.g. SVG)
    HostNotHtml(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoDocument => write!(f, "no document available to mount into"),
            MountError::MissingHost(id) => write!(f, "host element #{} not found", id),
            MountError::HostNotHtml(id) => write!(f, "host element #{} is not an HTML element", id),
        }
    }
}

impl std::error::Error for MountError {}

/// Look up the host container by id
pub fn host_element(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingHost(id.to_string()))?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::HostNotHtml(id.to_string()))
}

/// Motion settings from the host's `data-motion` attribute, falling back to
/// defaults when it is malformed
pub fn read_motion_config(host: &web_sys::Element) -> MotionConfig {
    let raw = host.get_attribute(MOTION_ATTRIBUTE);
    match MotionConfig::from_attribute(raw.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("[MOUNT] Ignoring invalid {}: {}", MOTION_ATTRIBUTE, e).into(),
            );
            MotionConfig::default()
        }
    }
}

/// Mount the card stack into the host element with the given id
pub fn mount_card_stack(id: &str) -> Result<(), MountError> {
    let host = host_element(id)?;
    let motion = read_motion_config(&host);
    web_sys::console::log_1(&format!("[MOUNT] Mounting card stack into #{}", id).into());
    leptos::mount::mount_to(host, move || view! { <App motion=motion /> }).forget();
    Ok(())
}
