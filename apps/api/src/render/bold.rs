//! Bold: full-bleed poster page with a marquee strip and numbered feature blocks.

use crate::models::content::GeneratedContent;
use crate::render::{escape, feature_items, LayoutRenderer, Page};
use crate::theme::StyleTokens;

const MARQUEE_REPEATS: usize = 3;

pub struct BoldLayout;

impl LayoutRenderer for BoldLayout {
    fn render(
        &self,
        content: &GeneratedContent,
        industry: &str,
        audience: &str,
        tokens: &StyleTokens,
    ) -> Page {
        let industry = escape(industry);
        let audience = escape(audience);
        let marquee = format!("{industry} /// {audience} /// ").repeat(MARQUEE_REPEATS);

        let features = feature_items(&content.features, |i, feature| {
            format!(
                r#"<li class="feature-block" style="list-style:none;padding:48px;min-height:300px;border-right:4px solid {card_border};background:{card_bg};display:flex;flex-direction:column;justify-content:space-between">
<div style="width:64px;height:64px;display:flex;align-items:center;justify-content:center;font-size:1.5rem;font-weight:700;background:{button_bg};color:{button_text};border:2px solid {border}">{n:02}</div>
<p style="font-size:1.875rem;font-weight:700;text-transform:uppercase;line-height:1.2;color:{feature_text}">{feature}</p>
</li>"#,
                card_border = tokens.card_border,
                card_bg = tokens.card_background,
                button_bg = tokens.button_background,
                button_text = tokens.button_text,
                border = tokens.border,
                feature_text = tokens.feature_text,
                n = i + 1,
            )
        });

        let body = format!(
            r#"<div class="layout layout-bold" style="min-height:100vh;background:{bg};color:{text};font-family:ui-monospace,monospace">
<div class="marquee" style="background:{banner_bg};color:{banner_text};padding:12px 0;white-space:nowrap;overflow:hidden;border-bottom:4px solid {border};font-weight:700;text-transform:uppercase;letter-spacing:0.1em">{marquee}</div>
<section class="hero" style="min-height:100vh;display:flex;flex-direction:column;justify-content:center;padding:48px;border-bottom:4px solid {border}">
<h1 style="font-size:8rem;font-weight:900;text-transform:uppercase;line-height:0.9;letter-spacing:-0.05em;overflow-wrap:break-word">{hero}</h1>
<div style="display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:48px;align-items:end;border-top:4px solid {border};padding-top:48px">
<p class="sub-headline" style="font-size:2.25rem;font-weight:700;line-height:1.2;color:{muted}">{sub}</p>
<button class="cta" type="button" style="justify-self:end;padding:24px 32px;background:{button_bg};color:{button_text};border:4px solid {border};font-size:1.5rem;font-weight:900;text-transform:uppercase;cursor:pointer">{cta} &nearr;</button>
</div>
</section>
<section class="features" style="background:{surface}">
<ol style="display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));margin:0;padding:0">
{features}
</ol>
</section>
</div>"#,
            bg = tokens.background,
            text = tokens.text,
            muted = tokens.muted_text,
            border = tokens.border,
            banner_bg = tokens.banner_background,
            banner_text = tokens.banner_text,
            button_bg = tokens.button_background,
            button_text = tokens.button_text,
            surface = tokens.surface,
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
