//! Rasterization of a DOM subtree.
//!
//! The subtree is cloned with every computed style inlined, wrapped in an SVG
//! `foreignObject`, loaded as an image and painted onto a canvas, which is then
//! encoded as JPEG.

use common::app_const::{EXPORT_JPEG_QUALITY, EXPORT_MIME_TYPE};
use common::card_export::EXPORT_ROOT_STYLE_OVERRIDES;
use common::errors::ExportError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlImageElement, Window};

use crate::js_error::describe;

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const SVG_NS: &str = "http://www.w3.org/2000/svg";
// jpeg has no alpha channel
const CANVAS_BACKGROUND: &str = "white";

fn rasterize_err(e: impl AsRef<JsValue>) -> ExportError {
    ExportError::Rasterize(describe(e.as_ref()))
}

pub(super) async fn to_jpeg_data_url(node: &Element) -> Result<String, ExportError> {
    let window = web_sys::window().ok_or(ExportError::NoWindow)?;
    let document = window.document().ok_or(ExportError::NoWindow)?;

    let rect = node.get_bounding_client_rect();
    let (width, height) = (rect.width().ceil(), rect.height().ceil());
    if width <= 0.0 || height <= 0.0 {
        return Err(ExportError::Rasterize(format!("card has an empty box ({width}x{height})")));
    }

    let svg_url = to_svg_data_url(&window, node, width, height)?;
    let image = load_image(&svg_url).await?;

    let ratio = window.device_pixel_ratio().max(1.0);
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(rasterize_err)?
        .dyn_into()
        .map_err(rasterize_err)?;
    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(rasterize_err)?
        .ok_or_else(|| ExportError::Rasterize("2d canvas context unavailable".to_string()))?
        .dyn_into()
        .map_err(rasterize_err)?;
    context.scale(ratio, ratio).map_err(rasterize_err)?;
    context.set_fill_style_str(CANVAS_BACKGROUND);
    context.fill_rect(0.0, 0.0, width, height);
    context
        .draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, width, height)
        .map_err(rasterize_err)?;

    canvas
        .to_data_url_with_type_and_encoder_options(EXPORT_MIME_TYPE, &JsValue::from_f64(EXPORT_JPEG_QUALITY))
        .map_err(rasterize_err)
}

fn to_svg_data_url(window: &Window, node: &Element, width: f64, height: f64) -> Result<String, ExportError> {
    let clone: Element = node
        .clone_node_with_deep(true)
        .map_err(rasterize_err)?
        .dyn_into()
        .map_err(rasterize_err)?;
    inline_computed_styles(window, node, &clone)?;
    if let Some(root) = clone.dyn_ref::<web_sys::HtmlElement>() {
        for (name, value) in EXPORT_ROOT_STYLE_OVERRIDES {
            root.style().set_property(name, value).map_err(rasterize_err)?;
        }
    }
    clone.set_attribute("xmlns", XHTML_NS).map_err(rasterize_err)?;

    let xhtml = web_sys::XmlSerializer::new()
        .map_err(rasterize_err)?
        .serialize_to_string(&clone)
        .map_err(rasterize_err)?;
    let svg = format!(
        r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><foreignObject x="0" y="0" width="100%" height="100%">{xhtml}</foreignObject></svg>"#
    );
    Ok(format!("data:image/svg+xml;charset=utf-8,{}", String::from(js_sys::encode_uri_component(&svg))))
}

/// Copies the computed style of every element under `original` onto the
/// matching element under `clone`. Both trees must have the same shape.
fn inline_computed_styles(window: &Window, original: &Element, clone: &Element) -> Result<(), ExportError> {
    if let Some(computed) = window.get_computed_style(original).map_err(rasterize_err)? {
        if let Some(target) = clone.dyn_ref::<web_sys::HtmlElement>() {
            let target_style = target.style();
            for i in 0..computed.length() {
                let name = computed.item(i);
                let value = computed.get_property_value(&name).map_err(rasterize_err)?;
                let priority = computed.get_property_priority(&name);
                target_style
                    .set_property_with_priority(&name, &value, &priority)
                    .map_err(rasterize_err)?;
            }
        }
    }

    let original_children = original.children();
    let clone_children = clone.children();
    for i in 0..original_children.length() {
        if let (Some(o), Some(c)) = (original_children.item(i), clone_children.item(i)) {
            inline_computed_styles(window, &o, &c)?;
        }
    }
    Ok(())
}

async fn load_image(src: &str) -> Result<HtmlImageElement, ExportError> {
    let image = HtmlImageElement::new().map_err(rasterize_err)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);
    JsFuture::from(loaded)
        .await
        .map_err(|_| ExportError::Rasterize("card image failed to load".to_string()))?;
    image.set_onload(None);
    image.set_onerror(None);
    Ok(image)
}
