//! HTML pages rendered from the business catalog. Unlike prompts,
//! these keep Handlebars' default HTML escaping.

use std::fmt;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

use crate::core::BusinessCatalog;

#[derive(Debug, Clone, Copy)]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
}

impl Page {
    fn title(&self) -> &'static str {
        match self {
            Page::Home => "Chat with us",
            Page::About => "About",
            Page::Services => "Services",
            Page::Contact => "Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const LAYOUT_PARTIAL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}} - {{profile.business_name}}</title>
</head>
<body>
  <header>
    <h1 id="businessName">{{profile.business_name}}</h1>
    <p id="businessDescription">{{profile.business_type}}</p>
    <nav>
      <a href="/">Chat</a> | <a href="/about">About</a> | <a href="/services">Services</a> | <a href="/contact">Contact</a>
    </nav>
  </header>
  <main>
    {{> @partial-block}}
  </main>
</body>
</html>
"#;

const HOME_PAGE: &str = r#"{{#> layout}}
<section id="chat">
  <div id="chatMessages"></div>
  <form id="chatForm">
    <input id="messageInput" type="text" placeholder="Type your message..." autocomplete="off">
    <button type="submit">Send</button>
    <button type="button" id="resetButton">Reset</button>
  </form>
</section>
<script>
  const userId = 'user_' + Math.random().toString(36).slice(2, 11);
  const messages = document.getElementById('chatMessages');
  const input = document.getElementById('messageInput');
  function addMessage(who, text) {
    const p = document.createElement('p');
    p.textContent = who + ': ' + text;
    messages.appendChild(p);
  }
  document.getElementById('chatForm').addEventListener('submit', async (e) => {
    e.preventDefault();
    const message = input.value;
    input.value = '';
    addMessage('You', message);
    const resp = await fetch('/api/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ message, user_id: userId }),
    });
    const data = await resp.json();
    addMessage(data.business_name || 'Error', data.response || data.error);
  });
  document.getElementById('resetButton').addEventListener('click', async () => {
    await fetch('/api/reset-chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ user_id: userId }),
    });
    messages.innerHTML = '';
  });
</script>
{{/layout}}
"#;

const ABOUT_PAGE: &str = r#"{{#> layout}}
<h2>About {{profile.business_name}}</h2>
<p>{{profile.business_type}}</p>
<p>Who we serve: {{profile.target_customers}}</p>
<p>{{profile.business_personality}}</p>
{{/layout}}
"#;

const SERVICES_PAGE: &str = r#"{{#> layout}}
<h2>Services</h2>
<ul>
{{#each products}}
  <li><span>{{image}}</span> <strong>{{name}}</strong> {{price}}<br>{{description}}</li>
{{else}}
{{#each profile.products_services}}
  <li>{{this}}</li>
{{/each}}
{{/each}}
</ul>
{{/layout}}
"#;

const CONTACT_PAGE: &str = r#"{{#> layout}}
<h2>Contact</h2>
<p>Phone: {{profile.phone}}</p>
<p>Email: <a href="mailto:{{profile.email}}">{{profile.email}}</a></p>
<p>Address: {{profile.address}}</p>
{{/layout}}
"#;

pub fn templates<'a>() -> Result<Handlebars<'a>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_partial("layout", LAYOUT_PARTIAL)?;
    registry.register_template_string(&Page::Home.to_string(), HOME_PAGE)?;
    registry.register_template_string(&Page::About.to_string(), ABOUT_PAGE)?;
    registry.register_template_string(&Page::Services.to_string(), SERVICES_PAGE)?;
    registry.register_template_string(&Page::Contact.to_string(), CONTACT_PAGE)?;
    Ok(registry)
}

pub fn render_page(registry: &Handlebars, page: Page, catalog: &BusinessCatalog) -> Result<String> {
    let data = json!({
        "title": page.title(),
        "profile": catalog.profile,
        "products": catalog.products,
    });
    Ok(registry.render(&page.to_string(), &data)?)
}
