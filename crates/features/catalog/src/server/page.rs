use crate::Catalog;
use crate::service::CatalogService;
use axum::Form;
use axum::extract::{Query, State};
use axum::response::Html;
use rig_domain::constants::ALL_CATEGORIES;
use rig_kernel::server::{ApiState, ApiStateError};
use serde::Deserialize;
use std::fmt::Write;

/// Fields posted by either form of the page.
///
/// Each form carries the other form's inputs as hidden fields, so both result panes
/// survive a submit. A missing category means every category.
#[derive(Debug, Clone, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub query: String,
    #[serde(default = "all_categories")]
    pub category: String,
    #[serde(default)]
    pub selected: String,
}

impl Default for PageForm {
    fn default() -> Self {
        Self { query: String::new(), category: all_categories(), selected: String::new() }
    }
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_owned()
}

/// Everything one render of the page shows.
#[derive(Debug, Default)]
struct PageView<'a> {
    title: &'a str,
    query: &'a str,
    category: &'a str,
    results: String,
    selected: &'a str,
    total: String,
}

/// Escapes text for use in HTML element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render(view: &PageView<'_>) -> String {
    let title = escape_html(view.title);

    let mut options = String::new();
    for option in CatalogService::categories() {
        let selected = if option == view.category { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{0}"{selected}>{0}</option>"#, escape_html(option));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<section>
<h2>Search Parts</h2>
<form method="post" action="/search">
<label>Search Query <input type="text" name="query" value="{query}" placeholder="Enter part name or description..."></label>
<label>Category <select name="category">{options}</select></label>
<input type="hidden" name="selected" value="{selected}">
<button type="submit">Search</button>
</form>
<pre id="results">{results}</pre>
</section>
<section>
<h2>Calculate Total</h2>
<form method="post" action="/total">
<label>Selected Parts <input type="text" name="selected" value="{selected}" placeholder="Enter part names separated by commas"></label>
<input type="hidden" name="query" value="{query}">
<input type="hidden" name="category" value="{category}">
<button type="submit">Calculate Total</button>
</form>
<pre id="total">{total}</pre>
</section>
</body>
</html>
"#,
        query = escape_html(view.query),
        category = escape_html(view.category),
        results = escape_html(&view.results),
        selected = escape_html(view.selected),
        total = escape_html(&view.total),
    )
}

/// `GET /`: the form, pre-filled with the whole catalog.
pub(super) async fn index_handler(state: State<ApiState>) -> Result<Html<String>, ApiStateError> {
    page(&state, &PageForm::default()).await
}

/// `GET /search?query=..&category=..`, for bookmarkable searches.
pub(super) async fn search_query_handler(
    state: State<ApiState>,
    Query(form): Query<PageForm>,
) -> Result<Html<String>, ApiStateError> {
    page(&state, &form).await
}

/// `POST /search` from the search form.
pub(super) async fn search_form_handler(
    state: State<ApiState>,
    Form(form): Form<PageForm>,
) -> Result<Html<String>, ApiStateError> {
    page(&state, &form).await
}

/// `POST /total` from the price-total form.
pub(super) async fn total_form_handler(
    state: State<ApiState>,
    Form(form): Form<PageForm>,
) -> Result<Html<String>, ApiStateError> {
    page(&state, &form).await
}

/// Renders both panes from the submitted inputs. The total pane stays empty until a
/// selection has been submitted.
async fn page(state: &ApiState, form: &PageForm) -> Result<Html<String>, ApiStateError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let results = catalog.service.search(&form.query, &form.category).await;
    let total = if form.selected.is_empty() {
        String::new()
    } else {
        catalog.service.total(&form.selected).await
    };

    Ok(Html(render(&PageView {
        title: &catalog.title,
        query: &form.query,
        category: &form.category,
        results,
        selected: &form.selected,
        total,
    })))
}
