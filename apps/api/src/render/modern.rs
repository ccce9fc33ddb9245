//! Modern: centered hero with a gradient headline and glass feature cards.

use crate::models::content::GeneratedContent;
use crate::render::{escape, feature_items, LayoutRenderer, Page};
use crate::theme::StyleTokens;

pub struct ModernLayout;

impl LayoutRenderer for ModernLayout {
    fn render(
        &self,
        content: &GeneratedContent,
        industry: &str,
        audience: &str,
        tokens: &StyleTokens,
    ) -> Page {
        let features = feature_items(&content.features, |i, feature| {
            format!(
                r#"<li class="feature-card" style="background:{card_bg};border:1px solid {card_border};border-radius:24px;padding:40px;list-style:none">
<div style="font-size:24px;font-weight:700;color:{feature_text}">{n}</div>
<h3 style="color:{feature_text}">Feature {n}</h3>
<p style="color:{muted};line-height:1.6"><span style="color:{accent}">&#10003;</span> {feature}</p>
</li>"#,
                card_bg = tokens.card_background,
                card_border = tokens.card_border,
                feature_text = tokens.feature_text,
                muted = tokens.muted_text,
                accent = tokens.accent,
                n = i + 1,
            )
        });

        let body = format!(
            r#"<div class="layout layout-modern" style="min-height:100vh;background:{bg};color:{text};font-family:system-ui,sans-serif;padding-bottom:80px">
<section class="hero" style="min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;padding:32px">
<div class="badge" style="display:inline-block;padding:10px 24px;border-radius:999px;background:{banner_bg};border:1px solid {border};color:{banner_text};font-weight:600;text-transform:uppercase;letter-spacing:0.05em">{industry} &bull; {audience}</div>
<h1 style="font-size:4.5rem;font-weight:800;line-height:1.1;background:linear-gradient(90deg,{accent},{accent_secondary});-webkit-background-clip:text;background-clip:text;color:transparent">{hero}</h1>
<p class="sub-headline" style="font-size:1.5rem;color:{muted};max-width:48rem;line-height:1.6;font-weight:300">{sub}</p>
<button class="cta" type="button" style="display:inline-block;margin-top:32px;padding:20px 40px;border-radius:999px;background:{button_bg};color:{button_text};font-weight:700;cursor:pointer">{cta} &rarr;</button>
</section>
<section class="features" style="padding:128px 32px;background:{surface}">
<h2 style="text-align:center;font-size:3rem;font-weight:700">Why Choose Us?</h2>
<div style="width:96px;height:6px;margin:0 auto 96px;border-radius:999px;background:linear-gradient(90deg,{accent},{accent_secondary})"></div>
<ol style="display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:32px;max-width:80rem;margin:0 auto;padding:0">
{features}
</ol>
</section>
</div>"#,
            bg = tokens.background,
            text = tokens.text,
            muted = tokens.muted_text,
            border = tokens.border,
            accent = tokens.accent,
            accent_secondary = tokens.accent_secondary,
            banner_bg = tokens.banner_background,
            banner_text = tokens.banner_text,
            button_bg = tokens.button_background,
            button_text = tokens.button_text,
            surface = tokens.surface,
            industry = escape(industry),
            audience = escape(audience),
            hero = escape(&content.hero_headline),
            sub = escape(&content.sub_headline),
            cta = escape(&content.cta_text),
        );

        Page {
            title: content.hero_headline.clone(),
            description: content.seo_meta_description.clone(),
            body,
        }
    }
}
