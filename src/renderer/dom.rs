//! Browser DOM display

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::layout::{self, BackgroundLayout, px};
use crate::sim::{GameState, Level};

/// Create an element with an optional class attribute
fn elt(document: &Document, tag: &str, class: Option<&str>) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if let Some(class) = class {
        el.set_attribute("class", class)?;
    }
    Ok(el)
}

fn draw_grid(document: &Document, level: &Level, scale: f32) -> Result<Element, JsValue> {
    let layout = BackgroundLayout::new(level, scale);
    let table = elt(document, "table", Some("background"))?;
    table.set_attribute("style", &format!("width: {}", px(layout.width_px)))?;

    for row in &layout.rows {
        let tr = elt(document, "tr", None)?;
        tr.set_attribute("style", &format!("height: {}", px(layout.row_height_px)))?;
        for &class in row {
            tr.append_child(&elt(document, "td", Some(class))?)?;
        }
        table.append_child(&tr)?;
    }
    Ok(table)
}

/// A level drawn into a parent element
pub struct DomDisplay {
    document: Document,
    dom: Element,
    actor_layer: Option<Element>,
    scale: f32,
}

impl DomDisplay {
    pub fn new(
        document: &Document,
        parent: &Element,
        level: &Level,
        scale: f32,
    ) -> Result<Self, JsValue> {
        let dom = elt(document, "div", Some("game"))?;
        dom.append_child(&draw_grid(document, level, scale)?)?;
        parent.append_child(&dom)?;

        log::info!(
            "Drew {} by {} grid at {}px per unit",
            level.width,
            level.height,
            scale
        );

        Ok(Self {
            document: document.clone(),
            dom,
            actor_layer: None,
            scale,
        })
    }

    /// Replace the actor layer with the actors of `state`
    pub fn sync_state(&mut self, state: &GameState) -> Result<(), JsValue> {
        if let Some(layer) = self.actor_layer.take() {
            layer.remove();
        }

        let layer = elt(&self.document, "div", None)?;
        for sprite in layout::actor_sprites(&state.actors, self.scale) {
            let el = elt(&self.document, "div", Some(sprite.class.as_str()))?;
            el.set_attribute("style", &sprite.style())?;
            layer.append_child(&el)?;
        }
        self.dom.append_child(&layer)?;
        self.actor_layer = Some(layer);

        self.dom.set_attribute("class", &layout::game_class(state))?;
        Ok(())
    }
}
