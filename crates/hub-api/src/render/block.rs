//! One content block.

use maud::{Markup, html};

use hub_entity::Block;

use super::{css_color, safe_url};

/// Render a visible block. Square blocks put the image beside the text,
/// landscape and portrait blocks stack the image above it.
pub(super) fn render_block(block: &Block, fallback_accent: &str) -> Markup {
    let accent = css_color(&block.accent_color, fallback_accent);
    let layout = if block.aspect_ratio.is_side_by_side() {
        "block block--side"
    } else {
        "block block--stacked"
    };
    let body = block_body(block, accent);

    match safe_url(&block.url) {
        Some(href) => html! {
            a class=(layout) href=(href) target="_blank" rel="noopener noreferrer"
                data-block=(block.id) data-aspect=(block.aspect_ratio.as_str()) style={ "--accent:" (accent) } {
                (body)
            }
        },
        None => html! {
            div class=(layout) data-block=(block.id) data-aspect=(block.aspect_ratio.as_str())
                style={ "--accent:" (accent) } {
                (body)
            }
        },
    }
}

fn block_body(block: &Block, accent: &str) -> Markup {
    let media_class = match block.aspect_ratio.as_str() {
        "9:16" => "block__media block__media--portrait",
        "16:9" => "block__media block__media--landscape",
        _ => "block__media block__media--square",
    };

    html! {
        div class=(media_class) {
            @if let Some(src) = safe_url(&block.image_url) {
                img src=(src) alt=(block.title) loading="lazy";
            } @else {
                div class="block__placeholder" { "No image" }
            }
            @if let Some(badge) = block.badge.as_deref().filter(|b| !b.trim().is_empty()) {
                span class="block__badge" style={ "color:" (accent) } { (badge) }
            }
        }
        div class="block__text" {
            h3 class="block__title" { (block.title) }
            @if !block.description.is_empty() {
                p class="block__description" { (block.description) }
            }
            span class="block__cta" { "Open" }
        }
    }
}
