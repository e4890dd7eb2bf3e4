use super::ViewRenderer;
use crate::models::{MovieDetail, MovieSummary};

const POSTER_PLACEHOLDER: &str = "🎬";

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for one result card
pub fn movie_card(movie: &MovieSummary) -> String {
    let title = escape_html(&movie.title);
    let poster = match &movie.poster_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(url),
            title
        ),
        None => format!(r#"<div class="movie-poster-placeholder">{}</div>"#, POSTER_PLACEHOLDER),
    };

    format!(
        r#"<div class="movie-card" data-imdbid="{id}">
    <div class="movie-poster">{poster}</div>
    <div class="movie-info">
        <h3 class="movie-title">{title}</h3>
        <div class="movie-meta">
            <span class="movie-year">{year}</span>
            <span class="movie-type">{kind}</span>
        </div>
    </div>
</div>
"#,
        id = escape_html(&movie.id),
        poster = poster,
        title = title,
        year = escape_html(&movie.year),
        kind = movie.kind,
    )
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-row"><span class="detail-label">{}:</span> <span class="detail-value">{}</span></div>
"#,
        label,
        escape_html(value)
    )
}

fn detail_paragraph(label: &str, value: &str) -> String {
    format!(
        r#"<p class="detail-description"><strong>{}:</strong> {}</p>
"#,
        label,
        escape_html(value)
    )
}

/// Markup for the detail view. Absent fields produce no row.
pub fn movie_detail(detail: &MovieDetail) -> String {
    let title = escape_html(&detail.title);
    let poster = match &detail.poster_url {
        Some(url) => format!(r#"<img src="{}" alt="{}">"#, escape_html(url), title),
        None => format!(r#"<div class="movie-poster-placeholder">{}</div>"#, POSTER_PLACEHOLDER),
    };

    let rating = detail.rating_line();
    let rows: String = [
        ("Year", detail.year.as_deref()),
        ("Rating", rating.as_deref()),
        ("Runtime", detail.runtime.as_deref()),
        ("Rated", detail.rated.as_deref()),
        ("Genre", detail.genre.as_deref()),
        ("Director", detail.director.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| detail_row(label, v)))
    .collect();

    let mut html = format!(
        r#"<div class="movie-detail">
    <div class="movie-detail-poster">{poster}</div>
    <div class="movie-detail-info">
        <h2 class="detail-title">{title}</h2>
        <div class="detail-meta">
{rows}        </div>
    </div>
</div>
"#
    );

    if let Some(plot) = &detail.plot {
        html.push_str(&format!(
            r#"<p class="detail-description"><strong>Plot:</strong><br>{}</p>
"#,
            escape_html(plot)
        ));
    }

    for (label, value) in [
        ("Cast", &detail.actors),
        ("Awards", &detail.awards),
        ("Languages", &detail.language),
        ("Countries", &detail.country),
    ] {
        if let Some(value) = value {
            html.push_str(&detail_paragraph(label, value));
        }
    }

    html
}

/// Snapshot of everything on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub loading: bool,
    pub error: Option<String>,
    pub search_info: String,
    pub results_html: String,
    pub empty_state_visible: bool,
    pub detail_html: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            search_info: String::new(),
            results_html: String::new(),
            empty_state_visible: true,
            detail_html: None,
        }
    }
}

fn hidden_unless(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

impl Page {
    /// Renders the snapshot as a standalone HTML document
    pub fn to_document(&self) -> String {
        let error = self
            .error
            .as_deref()
            .map(|message| format!("⚠️ {}", escape_html(message)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>MovieFinder</title>
</head>
<body>
<main class="container">
<p id="searchInfo" class="search-info">{search_info}</p>
<div id="loadingSpinner" class="loading{loading_hidden}"></div>
<div id="errorMessage" class="error-message{error_hidden}">{error}</div>
<div id="emptyState" class="empty-state{empty_hidden}">No movies found</div>
<div id="resultsContainer" class="results-grid">
{results}</div>
<div id="movieModal" class="modal{modal_hidden}">
<div id="movieDetails" class="modal-body">
{detail}</div>
</div>
</main>
</body>
</html>
"#,
            search_info = escape_html(&self.search_info),
            loading_hidden = hidden_unless(self.loading),
            error_hidden = hidden_unless(self.error.is_some()),
            error = error,
            empty_hidden = hidden_unless(self.empty_state_visible),
            results = self.results_html,
            modal_hidden = hidden_unless(self.detail_html.is_some()),
            detail = self.detail_html.as_deref().unwrap_or_default(),
        )
    }
}

/// Renders into an in-memory [`Page`] of markup
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    page: Page,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

impl ViewRenderer for HtmlRenderer {
    fn set_loading(&mut self, loading: bool) {
        self.page.loading = loading;
    }

    fn show_error(&mut self, message: &str) {
        self.page.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.page.error = None;
    }

    fn render_results(&mut self, movies: &[MovieSummary]) {
        self.page.results_html = movies.iter().map(movie_card).collect();
        self.page.empty_state_visible = movies.is_empty();
    }

    fn render_empty(&mut self) {
        self.page.results_html.clear();
        self.page.search_info.clear();
        self.page.empty_state_visible = true;
    }

    fn clear_results(&mut self) {
        self.page.results_html.clear();
        self.page.search_info.clear();
        self.page.empty_state_visible = false;
    }

    fn reset_results(&mut self) {
        let idle = Page::default();
        self.page.results_html = idle.results_html;
        self.page.search_info = idle.search_info;
        self.page.empty_state_visible = idle.empty_state_visible;
    }

    fn render_detail(&mut self, detail: &MovieDetail) {
        self.page.detail_html = Some(movie_detail(detail));
    }

    fn set_search_info(&mut self, text: &str) {
        self.page.search_info = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn summary(title: &str, poster: Option<&str>) -> MovieSummary {
        MovieSummary {
            id: "tt0372784".to_string(),
            title: title.to_string(),
            year: "2005".to_string(),
            kind: MediaKind::Movie,
            poster_url: poster.map(String::from),
        }
    }

    fn shawshank() -> MovieDetail {
        MovieDetail {
            id: "tt0111161".to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: Some("1994".to_string()),
            kind: MediaKind::Movie,
            poster_url: None,
            rated: None,
            runtime: Some("142 min".to_string()),
            genre: Some("Drama".to_string()),
            director: Some("Frank Darabont".to_string()),
            writer: None,
            actors: Some("Tim Robbins, Morgan Freeman".to_string()),
            plot: None,
            language: None,
            country: None,
            awards: None,
            imdb_rating: Some("9.3".to_string()),
            imdb_votes: Some("2,900,000".to_string()),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>Tom & "Jerry's"</b>"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&#039;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_card_with_poster() {
        let html = movie_card(&summary("Batman Begins", Some("https://img/bb.jpg")));
        assert!(html.contains(r#"data-imdbid="tt0372784""#));
        assert!(html.contains(r#"<img src="https://img/bb.jpg" alt="Batman Begins" loading="lazy">"#));
        assert!(html.contains(r#"<span class="movie-type">movie</span>"#));
        assert!(!html.contains("movie-poster-placeholder"));
    }

    #[test]
    fn test_card_escapes_title_and_uses_placeholder() {
        let html = movie_card(&summary("<script>alert(1)</script>", None));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("movie-poster-placeholder"));
    }

    #[test]
    fn test_detail_shows_present_fields_only() {
        let html = movie_detail(&shawshank());

        assert!(html.contains("The Shawshank Redemption"));
        assert!(html.contains("⭐ 9.3 / 10 (2,900,000 votes)"));
        assert!(html.contains("142 min"));
        assert!(html.contains("Drama"));
        assert!(html.contains("Frank Darabont"));
        assert!(html.contains("<strong>Cast:</strong> Tim Robbins, Morgan Freeman"));
        assert!(!html.contains("Rated:"));
        assert!(!html.contains("Plot:"));
        assert!(!html.contains("Awards:"));
        assert!(!html.contains("N/A"));
    }

    #[test]
    fn test_renderer_tracks_page_state() {
        let mut renderer = HtmlRenderer::new();
        assert!(renderer.page().empty_state_visible);

        renderer.set_loading(true);
        renderer.render_results(&[summary("Batman Begins", None)]);
        renderer.set_search_info("Found: 1 results");
        renderer.set_loading(false);

        let page = renderer.page();
        assert!(!page.loading);
        assert!(!page.empty_state_visible);
        assert!(page.results_html.contains("Batman Begins"));

        renderer.show_error("Invalid API key");
        renderer.clear_results();
        let page = renderer.page();
        assert_eq!(page.error.as_deref(), Some("Invalid API key"));
        assert!(page.results_html.is_empty());
        assert!(page.search_info.is_empty());
    }

    #[test]
    fn test_document_reflects_visibility() {
        let mut renderer = HtmlRenderer::new();
        renderer.render_detail(&shawshank());
        renderer.show_error("a < b");

        let document = renderer.page().to_document();
        assert!(document.contains(r#"<div id="errorMessage" class="error-message">⚠️ a &lt; b</div>"#));
        assert!(document.contains(r#"<div id="movieModal" class="modal">"#));
        assert!(document.contains(r#"<div id="loadingSpinner" class="loading hidden">"#));

        renderer.clear_error();
        let document = renderer.page().to_document();
        assert!(document.contains(r#"class="error-message hidden""#));
        assert!(!HtmlRenderer::new().page().to_document().contains(r#"class="modal">"#));
    }

    #[test]
    fn test_reset_restores_idle_page() {
        let mut renderer = HtmlRenderer::new();
        renderer.render_results(&[summary("Batman Begins", None)]);
        renderer.set_search_info("Found: 1 results");
        renderer.show_error("Invalid API key");
        renderer.clear_results();

        renderer.reset_results();
        renderer.clear_error();

        assert_eq!(renderer.page(), HtmlRenderer::new().page());
    }
}
