//! Minimal: left-aligned editorial hero, quiet feature cards on a tinted band.

use crate::models::content::GeneratedContent;
use crate::render::{escape, feature_items, LayoutRenderer, Page};
use crate::theme::StyleTokens;

pub struct MinimalLayout;

impl LayoutRenderer for MinimalLayout {
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
<div style="width:56px;height:56px;border-radius:16px;display:flex;align-items:center;justify-content:center;background:{text};color:{accent};font-weight:700">{n}</div>
<h3 style="font-size:1.5rem;font-weight:500">Feature {n}</h3>
<p style="color:{feature_text};font-size:1.125rem;line-height:1.6;font-weight:300">{feature}</p>
</li>"#,
                card_bg = tokens.card_background,
                card_border = tokens.card_border,
                text = tokens.text,
                accent = tokens.accent,
                feature_text = tokens.feature_text,
                n = i + 1,
            )
        });

        let body = format!(
            r#"<div class="layout layout-minimal" style="min-height:100vh;background:{bg};color:{text};font-family:system-ui,sans-serif">
<section class="hero" style="max-width:1400px;margin:0 auto;padding:80px 48px 128px">
<div class="badge" style="display:inline-flex;align-items:center;gap:8px;padding:4px 12px;border-radius:999px;background:{banner_bg};color:{banner_text};font-size:12px;font-weight:500;text-transform:uppercase;letter-spacing:0.05em"><span style="width:6px;height:6px;border-radius:999px;background:{accent}"></span>{industry} &bull; {audience}</div>
<h1 style="font-size:6rem;font-weight:500;letter-spacing:-0.05em;line-height:0.95;max-width:56rem">{hero}</h1>
<div style="display:flex;flex-wrap:wrap;gap:48px;align-items:flex-start;border-top:1px solid {border};padding-top:48px">
<p class="sub-headline" style="font-size:1.5rem;color:{muted};max-width:36rem;line-height:1.6;font-weight:300">{sub}</p>
<button class="cta" type="button" style="display:inline-block;padding:16px 32px;border-radius:999px;background:{button_bg};color:{button_text};font-weight:500;font-size:1.125rem;cursor:pointer">{cta} &rarr;</button>
</div>
</section>
<section class="features" style="padding:128px 48px;background:{surface}">
<div style="max-width:1400px;margin:0 auto">
<h2 style="font-size:2.25rem;font-weight:500;letter-spacing:-0.025em">Everything you need to scale.</h2>
<ol style="display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:32px;padding:0">
{features}
</ol>
</div>
</section>
</div>"#,
            bg = tokens.background,
            text = tokens.text,
            muted = tokens.muted_text,
            border = tokens.border,
            accent = tokens.accent,
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
