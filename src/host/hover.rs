//! Magnetic hover listeners.

use super::dom::{Dom, bounds, listen_mouse, mouse_point, set_style};
use crate::config::Selectors;
use crate::error::FxError;
use crate::magnetic::MagneticTransform;

pub fn bind(dom: &Dom, selectors: &Selectors) -> Result<(), FxError> {
    let elements = dom.query_all(&selectors.magnetic)?;
    for el in &elements {
        let target = el.clone();
        listen_mouse(el, "mousemove", move |event| {
            let pull = MagneticTransform::on_move(bounds(&target), mouse_point(&event));
            set_style(&target, "transform", &pull.css());
        })?;

        let target = el.clone();
        listen_mouse(el, "mouseleave", move |_| {
            set_style(&target, "transform", &MagneticTransform::on_leave().css());
        })?;
    }
    log::debug!("magnetic hover on {} elements", elements.len());
    Ok(())
}
