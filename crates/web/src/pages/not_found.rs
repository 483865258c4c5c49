use crate::components::{animated_title, HeadingTag, TitleStyle};
use crate::layout::PageMeta;

pub const META: PageMeta = PageMeta::new(
    "Page Not Found | EASI",
    "The page you are looking for does not exist.",
    "/404",
)
.noindex();

pub fn render() -> String {
    format!(
        r#"<section class="page-hero not-found"><div class="container narrow">
<p class="pill">404</p>
{title}
<p class="lead">The page you are looking for has moved or never existed.</p>
<div class="cta-row"><a class="btn btn-primary" href="/">Back to Home</a><a class="btn btn-outline" href="/contact">Contact Us</a></div>
</div></section>"#,
        title = animated_title("Page Not Found", HeadingTag::H1, "page-title", TitleStyle::default()),
    )
}
