//! The full hub page and the not-found page.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use hub_entity::hub::model::{DEFAULT_BACKGROUND_COLOR, DEFAULT_BLOCK_COLOR, DEFAULT_FONT};
use hub_entity::{Block, Hub, Section};

use super::block::render_block;
use super::{css_color, font_family, google_fonts_url, safe_url};

const BASE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:var(--bg);color:#fff;font-family:var(--body-font),sans-serif;-webkit-font-smoothing:antialiased}
h1,h2,h3{font-family:var(--header-font),sans-serif}
a{color:inherit;text-decoration:none}
.hub{max-width:430px;margin:0 auto;padding:24px 20px 80px}
.sponsor{display:flex;align-items:center;justify-content:center;height:100px;margin-bottom:24px;border-radius:16px;border:1px solid rgba(255,255,255,.06);background:rgba(255,255,255,.03)}
.sponsor img{max-height:60px;max-width:100%}
.sponsor span{font-size:12px;color:#6b7280}
.hero{text-align:center;margin-bottom:32px}
.hero__logo{width:64px;height:64px;margin:0 auto 16px;border-radius:16px;display:flex;align-items:center;justify-content:center;overflow:hidden;color:var(--primary);font-size:24px;font-weight:700;border:1px solid rgba(255,255,255,.1)}
.hero__logo img{width:40px;height:40px;object-fit:contain}
.hero__image{width:100%;border-radius:16px;margin-bottom:16px}
.hero h1{font-size:24px}
.hero p{font-size:14px;margin-top:8px;color:#9ca3af}
.blocks{display:flex;flex-direction:column;gap:12px}
.block{display:block;border-radius:16px;overflow:hidden;border:1px solid rgba(255,255,255,.06);background:rgba(255,255,255,.03)}
.block--side{display:flex}
.block--side .block__media{width:33%;flex-shrink:0;aspect-ratio:1/1}
.block__media{position:relative;width:100%}
.block__media--landscape{aspect-ratio:16/9}
.block__media--portrait{aspect-ratio:9/16}
.block__media img{width:100%;height:100%;object-fit:cover}
.block__placeholder{width:100%;height:100%;display:flex;align-items:center;justify-content:center;font-size:10px;color:#4b5563}
.block__badge{position:absolute;top:8px;left:8px;padding:2px 8px;border-radius:999px;font-size:9px;font-weight:700;text-transform:uppercase;background:rgba(0,0,0,.5)}
.block__text{padding:12px 16px}
.block__title{font-size:14px}
.block__description{font-size:12px;color:#9ca3af;margin-top:4px}
.block__cta{display:block;font-size:10px;font-weight:600;margin-top:8px;color:var(--accent)}
.empty{text-align:center;padding:40px 0;color:#6b7280;font-size:14px}
.social{display:flex;flex-wrap:wrap;justify-content:center;gap:12px;margin-top:32px}
.social a{font-size:12px;padding:6px 12px;border-radius:999px;border:1px solid rgba(255,255,255,.1)}
footer{text-align:center;margin-top:40px;font-size:12px;text-transform:uppercase;letter-spacing:.05em;color:#4b5563}
"#;

/// Render a hub as a complete HTML document.
pub fn render_hub(hub: &Hub) -> Markup {
    let primary = css_color(&hub.block_color, DEFAULT_BLOCK_COLOR);
    let background = css_color(&hub.background_color, DEFAULT_BACKGROUND_COLOR);
    let header_font = font_family(&hub.header_font, DEFAULT_FONT);
    let body_font = font_family(&hub.body_font, DEFAULT_FONT);
    let variables = format!(
        ":root{{--bg:{background};--primary:{primary};--accent:{primary};--header-font:'{header_font}';--body-font:'{body_font}'}}"
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (hub.event_name) }
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link rel="stylesheet" href=(google_fonts_url(&[header_font.as_str(), body_font.as_str()]));
                @if let Some(custom) = safe_url(&hub.custom_font_url) {
                    link rel="stylesheet" href=(custom);
                }
                style { (PreEscaped(&variables)) (PreEscaped(BASE_CSS)) }
            }
            body {
                main class="hub" {
                    @for section in &hub.section_order {
                        @match section {
                            Section::Sponsor => { (sponsor(hub)) }
                            Section::Hero => { (hero(hub)) }
                            Section::Blocks => { (blocks(hub, primary)) }
                        }
                    }
                    (social_links(hub))
                    footer { "Powered by Interaction Hub" }
                }
            }
        }
    }
}

fn sponsor(hub: &Hub) -> Markup {
    let banner = safe_url(&hub.sponsor_banner_url);
    let link = safe_url(&hub.sponsor_link);
    if banner.is_none() && link.is_none() {
        return html! {};
    }

    let inner = html! {
        @if let Some(src) = banner {
            img src=(src) alt="Sponsor";
        } @else {
            span { "Headline Sponsor" }
        }
    };

    html! {
        @if let Some(href) = link {
            a class="sponsor" href=(href) target="_blank" rel="noopener noreferrer sponsored" { (inner) }
        } @else {
            div class="sponsor" { (inner) }
        }
    }
}

fn hero(hub: &Hub) -> Markup {
    let initial = hub.event_name.chars().next().map(String::from).unwrap_or_default();

    html! {
        section class="hero" {
            div class="hero__logo" {
                @if let Some(src) = safe_url(&hub.logo_url) {
                    img src=(src) alt=(hub.event_name);
                } @else {
                    span { (initial) }
                }
            }
            @if let Some(src) = safe_url(&hub.hero_image_url) {
                img class="hero__image" src=(src) alt="";
            }
            @if !hub.hero_tagline.is_empty() {
                h1 { (hub.hero_tagline) }
            } @else {
                h1 { (hub.event_name) }
            }
            @if !hub.hero_subtext.is_empty() {
                p { (hub.hero_subtext) }
            }
        }
    }
}

fn blocks(hub: &Hub, primary: &str) -> Markup {
    let mut visible: Vec<&Block> = hub.visible_blocks().collect();
    visible.sort_by_key(|b| b.sort_order);

    html! {
        section class="blocks" {
            @if visible.is_empty() {
                p class="empty" { "Nothing here yet. Check back soon." }
            } @else {
                @for block in visible {
                    (render_block(block, primary))
                }
            }
        }
    }
}

fn social_links(hub: &Hub) -> Markup {
    let links: Vec<_> = hub
        .social_links
        .iter()
        .filter_map(|l| safe_url(&l.url).map(|href| (l.platform.label(), href)))
        .collect();
    if links.is_empty() {
        return html! {};
    }

    html! {
        nav class="social" aria-label="Social links" {
            @for (label, href) in links {
                a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
            }
        }
    }
}

/// The 404 page for missing and unpublished hubs.
pub fn not_found_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Hub not found" }
                style { (PreEscaped(BASE_CSS)) }
            }
            body style={ "--bg:" (DEFAULT_BACKGROUND_COLOR) } {
                main class="hub" {
                    section class="hero" {
                        h1 { "Hub not found" }
                        p { "This page doesn't exist or hasn't been published yet." }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_entity::{AspectRatio, SocialLink, SocialPlatform};

    fn hub() -> Hub {
        let mut hub = Hub::new("volleyverse", "Volleyverse <Finals>");
        hub.hero_tagline = "Welcome".into();
        hub.is_published = true;
        for (i, title) in ["First", "Hidden", "Second"].into_iter().enumerate() {
            let mut block = Block::new(format!("b{i}"), i as i32);
            block.title = title.into();
            block.is_visible = title != "Hidden";
            block.aspect_ratio = AspectRatio::Landscape;
            hub.blocks.push(block);
        }
        hub
    }

    #[test]
    fn test_renders_visible_blocks_in_order() {
        let html = render_hub(&hub()).into_string();
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(!html.contains("Hidden"));
        assert!(html.contains("Volleyverse &lt;Finals&gt;"));
    }

    #[test]
    fn test_sort_order_wins_over_list_position() {
        let mut hub = hub();
        hub.blocks[0].sort_order = 9;
        let html = render_hub(&hub).into_string();
        assert!(html.find("Second").unwrap() < html.find("First").unwrap());
    }

    #[test]
    fn test_empty_state() {
        let mut hub = hub();
        hub.blocks.clear();
        let html = render_hub(&hub).into_string();
        assert!(html.contains("Nothing here yet"));
    }

    #[test]
    fn test_section_order() {
        let mut hub = hub();
        hub.sponsor_link = "https://sponsor.example.com".into();
        hub.section_order = vec![Section::Blocks, Section::Hero, Section::Sponsor];
        let html = render_hub(&hub).into_string();
        let blocks = html.find(r#"class="blocks""#).unwrap();
        let hero = html.find(r#"class="hero""#).unwrap();
        let sponsor = html.find(r#"class="sponsor""#).unwrap();
        assert!(blocks < hero && hero < sponsor);
        assert!(html.contains(r#"href="https://sponsor.example.com""#));
    }

    #[test]
    fn test_social_links_and_hostile_values() {
        let mut hub = hub();
        hub.background_color = "red;}</style><script>".into();
        hub.custom_font_url = "javascript:alert(1)".into();
        hub.social_links = vec![
            SocialLink { platform: SocialPlatform::Instagram, url: "https://instagram.com/v".into() },
            SocialLink { platform: SocialPlatform::Website, url: "javascript:alert(1)".into() },
        ];
        let html = render_hub(&hub).into_string();
        assert!(html.contains("Instagram"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(&format!("--bg:{DEFAULT_BACKGROUND_COLOR}")));
    }
}
