use crate::session::ViewState;
use crate::view::{AssetCard, DashboardView, MetricsPanel, TrendCard};
use configuration::settings::Theme;
use core_types::UserProfile;

/// Renders the full dashboard page.
///
/// Layout is intentionally non-normative; the typed view-model decided
/// everything that matters (ranking, partition, colors, formatting) and
/// this module only interpolates it into markup.
pub fn render_dashboard(view: &DashboardView, theme: &Theme) -> String {
    let auth_section = match &view.view_state {
        ViewState::Anonymous => render_hero(theme),
        ViewState::Authenticated(user) => render_welcome(user, theme),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Skyra AI Powered Investor - Home</title>
<style>{style}</style>
</head>
<body>
<div class="container">
{header}
{auth_section}
{quote}
{features}
{trends}
{assets}
{footer}
</div>
</body>
</html>"#,
        style = page_style(theme),
        header = render_header(&view.view_state),
        auth_section = auth_section,
        quote = render_quote(view, theme),
        features = render_features(theme),
        trends = render_trends(view),
        assets = render_asset_grid(view),
        footer = render_footer(),
    )
}

fn page_style(theme: &Theme) -> String {
    format!(
        r#"
body {{ background-color: {background}; margin: 0; }}
.container {{ max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }}
h1, h2, h3, h4 {{ font-family: 'Inter', Arial, sans-serif; font-weight: 600; color: {text}; }}
p, div, span, a {{ font-family: 'Inter', Arial, sans-serif; color: {text_secondary}; }}
.card {{ background-color: {background}; border-radius: 8px; padding: 1.5rem;
        margin-bottom: 1rem; border: 1px solid {border};
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05); }}
.btn {{ background-color: {primary}; color: white; border: none; padding: 0.75rem 1.5rem;
       border-radius: 6px; font-weight: 500; cursor: pointer; }}
.btn-outline {{ background-color: transparent; border: 1px solid {primary}; color: {primary};
               padding: 0.75rem 1.5rem; border-radius: 6px; cursor: pointer; }}
.nav-link {{ color: {text_secondary}; text-decoration: none; margin-right: 1.5rem; font-weight: 500; }}
.divider {{ height: 1px; background-color: {border}; margin: 2rem 0; border: none; }}
.badge {{ display: inline-block; padding: 0.25rem 0.5rem; border-radius: 4px;
         font-size: 0.75rem; font-weight: 500;
         background-color: rgba(37, 99, 235, 0.1); color: {primary}; }}
.grid {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }}
.grid-3 {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }}
.flex {{ display: flex; }}
.items-center {{ align-items: center; }}
.justify-between {{ justify-content: space-between; }}
"#,
        background = theme.background,
        text = theme.text,
        text_secondary = theme.text_secondary,
        border = theme.border,
        primary = theme.primary,
    )
}

fn render_header(view_state: &ViewState) -> String {
    let auth_control = match view_state {
        ViewState::Anonymous => {
            r#"<a href="/authentication"><button class="btn">Sign In</button></a>"#.to_string()
        }
        ViewState::Authenticated(user) => format!(
            r#"<span style="margin-right: 1rem;">Welcome, {name}</span>
<a href="/profile"><button class="btn-outline">Profile</button></a>"#,
            name = user.full_name,
        ),
    };

    format!(
        r#"<div class="flex justify-between" style="margin-bottom: 2rem;">
  <div class="flex items-center"><h1 style="margin: 0;">Skyra AI Powered Investor</h1></div>
  <div class="flex items-center">
    <a href="/" class="nav-link">Home</a>
    <a href="/esg-education" class="nav-link">ESG Education</a>
    <a href="/markets" class="nav-link">Markets</a>
    <a href="/portfolio" class="nav-link">Portfolio</a>
    <a href="/advisor" class="nav-link">AI Advisor</a>
    {auth_control}
  </div>
</div>"#
    )
}

/// The marketing banner unauthenticated visitors see.
fn render_hero(theme: &Theme) -> String {
    format!(
        r#"<div class="card" style="margin-bottom: 3rem;">
  <div class="flex justify-between items-center">
    <div style="max-width: 60%;">
      <h2>Sustainable investing for a better future</h2>
      <p>Our AI-powered platform helps you build profitable portfolios while making
         a positive impact on the planet.</p>
      <div class="flex" style="gap: 1rem; flex-wrap: wrap;">
        <span style="color: {secondary};">&#10003; ESG-focused investments</span>
        <span style="color: {primary};">&#10003; AI-powered recommendations</span>
        <span style="color: {accent};">&#10003; Real-time analytics</span>
      </div>
    </div>
    <div><a href="/authentication"><button class="btn">Get Started</button></a></div>
  </div>
</div>"#,
        secondary = theme.secondary,
        primary = theme.primary,
        accent = theme.accent,
    )
}

/// The welcome banner plus metrics row signed-in users see.
fn render_welcome(user: &UserProfile, theme: &Theme) -> String {
    let metrics = MetricsPanel::placeholder();
    format!(
        r#"<div class="card" style="margin-bottom: 2rem;">
  <h2 style="margin: 0 0 0.25rem 0;">Welcome back, {first_name}</h2>
  <p style="margin: 0;">Your sustainable investment dashboard</p>
</div>
<div class="grid-3" style="margin-bottom: 2rem;">
  <div class="card">
    <p style="margin: 0; font-size: 0.875rem;">ESG Impact</p>
    <p style="margin: 0; font-size: 1.25rem; font-weight: 600; color: {text};">{esg_impact}</p>
  </div>
  <div class="card">
    <p style="margin: 0; font-size: 0.875rem;">Portfolio Value</p>
    <p style="margin: 0; font-size: 1.25rem; font-weight: 600; color: {text};">{portfolio_value}</p>
  </div>
  <div class="card">
    <p style="margin: 0; font-size: 0.875rem;">Performance</p>
    <p style="margin: 0; font-size: 1.25rem; font-weight: 600; color: {positive};">{performance}</p>
  </div>
</div>"#,
        first_name = user.first_name(),
        text = theme.text,
        positive = theme.positive,
        esg_impact = metrics.esg_impact,
        portfolio_value = metrics.portfolio_value,
        performance = metrics.performance,
    )
}

fn render_quote(view: &DashboardView, theme: &Theme) -> String {
    format!(
        r#"<div class="card" style="margin: 2rem 0; border-left: 3px solid {primary};">
  <p style="font-style: italic; margin-bottom: 0.5rem;">"{text}"</p>
  <p style="font-weight: 500;">&mdash; {author}</p>
</div>"#,
        primary = theme.primary,
        text = view.quote.text,
        author = view.quote.author,
    )
}

fn render_features(theme: &Theme) -> String {
    let feature = |title: &str, body: &str, href: &str, action: &str, color: &str| {
        format!(
            r#"  <div class="card" style="height: 100%;">
    <h3 style="margin-top: 0;">{title}</h3>
    <p style="margin-bottom: 1.5rem;">{body}</p>
    <a href="{href}"><button class="btn" style="width: 100%; background-color: {color};">{action}</button></a>
  </div>"#
        )
    };

    format!(
        r#"<h3>Key Features</h3>
<div class="divider"></div>
<div class="grid-3">
{analytics}
{portfolio}
{advisor}
</div>"#,
        analytics = feature(
            "Market Analytics",
            "Comprehensive ESG ratings and financial metrics for all assets.",
            "/markets",
            "Explore",
            &theme.primary,
        ),
        portfolio = feature(
            "Portfolio Manager",
            "Build and track portfolios aligned with your values.",
            "/portfolio",
            "Manage",
            &theme.secondary,
        ),
        advisor = feature(
            "AI Advisor",
            "Personalized recommendations based on your profile.",
            "/advisor",
            "Get Advice",
            &theme.accent,
        ),
    )
}

fn render_trends(view: &DashboardView) -> String {
    let cards: String = view.trends.iter().map(render_trend_card).collect();
    format!(
        r#"<h3>Market Trends</h3>
<div class="divider"></div>
<div class="grid-3">
{cards}
</div>"#
    )
}

fn render_trend_card(trend: &TrendCard) -> String {
    format!(
        r#"  <div class="card">
    <div class="flex justify-between items-center" style="margin-bottom: 0.8rem;">
      <h4 style="margin: 0; font-size: 1.1rem;">{title}</h4>
      <span class="badge">Confidence: {confidence}%</span>
    </div>
    <p style="margin-bottom: 1rem;">{description}</p>
    <div class="flex items-center">
      <span style="font-weight: 600; margin-right: 0.5rem;">Impact:</span>
      <span style="color: {impact_color};">{impact}</span>
    </div>
  </div>"#,
        title = trend.title,
        confidence = trend.confidence,
        description = trend.description,
        impact_color = trend.impact_color,
        impact = trend.impact,
    )
}

fn render_asset_grid(view: &DashboardView) -> String {
    let row = |cards: &[AssetCard]| -> String {
        let cells: String = cards.iter().map(render_asset_card).collect();
        format!("<div class=\"grid\" style=\"margin-bottom: 1rem;\">\n{cells}</div>\n")
    };

    let mut rows = row(&view.primary_assets);
    if !view.secondary_assets.is_empty() {
        rows.push_str(&row(&view.secondary_assets));
    }

    format!(
        r#"<h3>Top Performing Assets</h3>
<div class="divider"></div>
{rows}"#
    )
}

fn render_asset_card(card: &AssetCard) -> String {
    format!(
        r#"  <div class="card">
    <div class="flex justify-between items-center" style="margin-bottom: 0.5rem;">
      <h4 style="margin: 0; font-size: 1rem;">{symbol}</h4>
      <span style="font-size: 0.8rem;">{class_label}</span>
    </div>
    <p style="margin: 0 0 0.5rem 0; font-weight: 500;">{name}</p>
    <div class="flex justify-between" style="margin-bottom: 0.5rem;">
      <span>Price:</span><span>{price}</span>
    </div>
    <div class="flex justify-between" style="margin-bottom: 0.5rem;">
      <span>24h:</span><span style="color: {change_color};">{change}</span>
    </div>
    <div class="flex justify-between">
      <span>ESG Score:</span><span>{esg}</span>
    </div>
  </div>
"#,
        symbol = card.symbol,
        class_label = card.class_label,
        name = card.name,
        price = card.price,
        change_color = card.change_color,
        change = card.change_24h,
        esg = card.esg,
    )
}

fn render_footer() -> String {
    r##"<div class="divider"></div>
<div class="flex justify-between" style="margin-top: 2rem;">
  <p style="font-size: 0.875rem;">&copy; 2025 Skyra AI Powered Investor</p>
  <div>
    <a href="#" class="nav-link">Terms</a>
    <a href="#" class="nav-link">Privacy</a>
    <a href="#" class="nav-link">Contact</a>
  </div>
</div>"##
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::demo_profile;
    use crate::view::DashboardView;
    use configuration::settings::Config;
    use core_types::Quote;

    fn sample_view(view_state: ViewState) -> DashboardView {
        DashboardView::assemble(
            view_state,
            Quote {
                text: "Test quote".to_string(),
                author: "Tester".to_string(),
            },
            Vec::new(),
            Vec::new(),
            &Config::default(),
        )
        .unwrap()
    }

    #[test]
    fn anonymous_page_carries_the_hero_banner() {
        let theme = Theme::default();
        let html = render_dashboard(&sample_view(ViewState::Anonymous), &theme);
        assert!(html.contains("Sustainable investing for a better future"));
        assert!(html.contains("Sign In"));
        assert!(!html.contains("Welcome back"));
    }

    #[test]
    fn authenticated_page_carries_the_metrics_panel() {
        let theme = Theme::default();
        let html = render_dashboard(
            &sample_view(ViewState::Authenticated(demo_profile())),
            &theme,
        );
        assert!(html.contains("Welcome back, Maya"));
        assert!(html.contains("$24,680"));
        assert!(!html.contains("Get Started"));
    }
}
