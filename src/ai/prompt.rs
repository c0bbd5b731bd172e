//! Reusable prompts using Handlebars for templating. Strict mode is
//! on so a missing profile field fails loudly instead of rendering
//! an empty string into the prompt.

use std::fmt;

use anyhow::Result;
use handlebars::{Handlebars, no_escape};
use serde_json::json;

use crate::core::BusinessProfile;

#[derive(Debug)]
pub enum Prompt {
    SalesAssistant,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const SALES_ASSISTANT_PROMPT: &str = r"
You are a specialized sales and customer service chatbot for {{name}}.

BUSINESS OVERVIEW:
- Business Type: {{category}}
- Products/Services: {{products}}
- Target Customers: {{target_customers}}
- Personality: {{personality}}

YOUR CHATBOT'S MAIN JOBS:
1. Greet customers warmly and ask how you can assist them.
2. Provide detailed information about our products and services.
3. Answer questions about pricing, appointment scheduling, and getting the most out of our services.
4. Promote special offers or discounts for loyal customers.
5. Ensure customers feel confident and excited about choosing {{name}}.

CONVERSATION RULES:
- Always be friendly and empathetic.
- Focus on topics related to the business and avoid unrelated subjects.
- Provide clear and concise answers to questions.
- Offer helpful tips when appropriate.

RESPONSE STYLE:
- Casual and approachable, but professional.
- Use simple language that is easy for all customers to understand.
- Keep responses concise but informative.

CUSTOM BUSINESS RULES:
- Highlight the value our services bring to customers.
- Mention any seasonal promotions or discounts.
- Reassure customers about the quality and care behind everything we offer.

WHAT MAKES YOUR BUSINESS SPECIAL:
At {{name}}, we treat every customer like family and make sure they leave happy.
";

pub fn templates<'a>() -> Result<Handlebars<'a>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(no_escape);
    registry.register_template_string(&Prompt::SalesAssistant.to_string(), SALES_ASSISTANT_PROMPT)?;
    Ok(registry)
}

/// Render the instructions that open every new conversation. The
/// output only depends on `profile`.
pub fn build_system_prompt(profile: &BusinessProfile) -> Result<String> {
    let data = json!({
        "name": profile.name,
        "category": profile.category,
        "products": profile.products_services.join(", "),
        "target_customers": profile.target_customers,
        "personality": profile.personality,
    });
    let prompt = templates()?.render(&Prompt::SalesAssistant.to_string(), &data)?;
    Ok(prompt)
}
