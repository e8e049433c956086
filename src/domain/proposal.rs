//! Proposal email rendering. HTML for the preview and export, plain text for
//! the clipboard and the `mailto:` body. All three templates render from one
//! context built per quote.

use minijinja::{context, Environment, Value};
use serde::Serialize;
use thiserror::Error;
use url::{form_urlencoded, Url};

use super::{
    entities::{ProductLine, QuoteMeta},
    pricing::{PricingMode, PricingResult, QuoteSummary},
};
use crate::util::format::{money, sqft};

const BODY_TEMPLATE: &str = include_str!("templates/proposal_body.html");
const DOCUMENT_TEMPLATE: &str = include_str!("templates/proposal.html");
const TEXT_TEMPLATE: &str = include_str!("templates/proposal.txt");

#[derive(Debug, Error)]
pub enum ProposalError {
    #[error("failed to render proposal: {0}")]
    Render(#[from] minijinja::Error),
    #[error("failed to build mailto link: {0}")]
    Mailto(#[from] url::ParseError),
}

pub struct Proposal<'a> {
    pub meta: &'a QuoteMeta,
    pub summary: &'a QuoteSummary,
}

#[derive(Serialize)]
struct OptionCopy {
    heading: &'static str,
    tagline: Option<&'static str>,
    pitch_html: &'static str,
    pitch_text: &'static str,
    warranty_html: &'static str,
    warranty_text: &'static str,
    accent: &'static str,
}

fn option_copy(product: ProductLine) -> OptionCopy {
    match product {
        ProductLine::PremiumCeramic => OptionCopy {
            heading: "🌟 Option A — Premium Ceramic Window Film (TSER 69%+)",
            tagline: Some(
                "Our most advanced and most popular choice, combining performance and long-term value.",
            ),
            pitch_html: "Engineered to materially reduce solar heat gain and glare while maintaining optical clarity. This film delivers a <strong>Total Solar Energy Rejection of 69%+</strong>, helps stabilize interior temperatures, supports HVAC efficiency, and <strong>enhances the glass to elevate the exterior aesthetic.</strong>",
            pitch_text: "Engineered to materially reduce solar heat gain and glare while maintaining optical clarity. This film delivers a Total Solar Energy Rejection of 69%+, helps stabilize interior temperatures, supports HVAC efficiency, and enhances the glass to elevate the exterior aesthetic.",
            warranty_html: "- Residential: Lifetime warranty on film and workmanship<br>\n- Commercial: 12-year warranty on film and workmanship",
            warranty_text: "- Residential: Lifetime warranty on film and workmanship\n- Commercial: 12-year warranty on film and workmanship",
            accent: "#0d6efd",
        },
        ProductLine::SolarControl => OptionCopy {
            heading: "Option B — Solar Control Film (Budget-Friendly)",
            tagline: None,
            pitch_html: "A cost-optimized solution that reduces heat and glare compared to untreated glass, offering a clean, neutral appearance. While designed for value, it is still installed to the same professional standards, ensuring durability and customer satisfaction.",
            pitch_text: "A cost-optimized solution that reduces heat and glare compared to untreated glass, offering a clean, neutral appearance. While designed for value, it is still installed to the same professional standards, ensuring durability and customer satisfaction.",
            warranty_html: "This film comes with <strong>limited coverage supported by our professional installation team</strong>, giving you added peace of mind knowing that you’re in good hands.",
            warranty_text: "This film comes with limited coverage supported by our professional installation team, giving you added peace of mind knowing that you’re in good hands.",
            accent: "#444",
        },
    }
}

const WHY_US_HTML: &str = "We are <strong>Veteran owned and operated</strong> and consistently recognized as a <strong>5-star rated provider</strong>, trusted by homeowners and businesses alike. Our team is committed to delivering a seamless experience and results that elevate comfort, performance, and aesthetic appeal.";
const WHY_US_TEXT: &str = "We are Veteran owned and operated and consistently recognized as a 5-star rated provider, trusted by homeowners and businesses alike. Our team is committed to delivering a seamless experience and results that elevate comfort, performance, and aesthetic appeal.";

/// One priced product line as the templates see it.
#[derive(Serialize)]
struct OptionContext<'a> {
    copy: OptionCopy,
    shop_minimum: bool,
    tier_label: &'a str,
    savings_percent: u32,
    original_price: String,
    final_price: String,
    savings: String,
}

impl<'a> OptionContext<'a> {
    fn new(product: ProductLine, result: &'a PricingResult) -> Self {
        Self {
            copy: option_copy(product),
            shop_minimum: result.mode == PricingMode::ShopMinimum,
            tier_label: &result.tier_label,
            savings_percent: result.savings_percent,
            original_price: money(result.original_price),
            final_price: money(result.final_price),
            savings: money(result.savings),
        }
    }
}

// Auto-escaping follows the template name: `.html` escapes, `.txt` does not.
fn environment() -> Result<Environment<'static>, ProposalError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template("proposal_body.html", BODY_TEMPLATE)?;
    env.add_template("proposal.html", DOCUMENT_TEMPLATE)?;
    env.add_template("proposal.txt", TEXT_TEMPLATE)?;
    Ok(env)
}

impl<'a> Proposal<'a> {
    pub fn new(meta: &'a QuoteMeta, summary: &'a QuoteSummary) -> Self {
        Self { meta, summary }
    }

    pub fn subject(&self) -> String {
        format!("Your Window Film Proposal — {}", self.meta.project_name)
    }

    fn result(&self, product: ProductLine) -> &PricingResult {
        match product {
            ProductLine::PremiumCeramic => &self.summary.ceramic,
            ProductLine::SolarControl => &self.summary.solar,
        }
    }

    fn context(&self) -> Value {
        let options: Vec<OptionContext<'_>> = ProductLine::ALL
            .into_iter()
            .map(|product| OptionContext::new(product, self.result(product)))
            .collect();
        context! {
            subject => self.subject(),
            meta => self.meta,
            total_sqft => sqft(self.summary.total_sqft),
            options,
            why_us_html => WHY_US_HTML,
            why_us_text => WHY_US_TEXT,
        }
    }

    fn render(&self, name: &str) -> Result<String, ProposalError> {
        let env = environment()?;
        let template = env.get_template(name)?;
        Ok(template.render(self.context())?)
    }

    /// Body markup without the surrounding document, for inline preview.
    pub fn html_fragment(&self) -> Result<String, ProposalError> {
        self.render("proposal_body.html")
    }

    pub fn html_document(&self) -> Result<String, ProposalError> {
        self.render("proposal.html")
    }

    pub fn plain_text(&self) -> Result<String, ProposalError> {
        self.render("proposal.txt")
    }

    /// `mailto:` link addressed to the client with the plain-text body.
    pub fn mailto_link(&self) -> Result<Url, ProposalError> {
        let raw = format!(
            "mailto:{}?subject={}&body={}",
            encode_component(self.meta.client_email.trim()),
            encode_component(&self.subject()),
            encode_component(&self.plain_text()?)
        );
        Ok(Url::parse(&raw)?)
    }
}

// Mail clients expect %20 rather than the form-encoded '+'. A literal '+' is
// already emitted as %2B, so the swap is unambiguous.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%40", "@")
}
