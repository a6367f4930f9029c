//! HTML rendering for the form page at `/`.
//!
//! One page, three states: empty form, form + outcome, form + error message.
//! All user- and model-supplied text goes through `escape_html`.

use crate::pipeline::RecommendationOutcome;

const PAGE_TITLE: &str = "SHL Assessment Recommendation Engine";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_form(query: &str) -> String {
    page(query, "")
}

pub fn render_outcome(query: &str, outcome: &RecommendationOutcome) -> String {
    let mut body = String::new();
    body.push_str(&intent_block(&outcome.raw_intent));

    body.push_str("<h2>Top Recommendations</h2>\n");
    if outcome.results.is_empty() {
        body.push_str("<p>No matching assessments found.</p>\n");
        return page(query, &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Assessment</th><th>Remote Testing</th><th>IRT Supported</th>\
         <th>Duration</th><th>Test Type</th><th>Similarity</th></tr></thead>\n<tbody>\n",
    );
    for r in &outcome.results {
        body.push_str(&format!(
            "<tr><td><a href=\"{url}\">{name}</a></td><td>{remote}</td><td>{irt}</td>\
             <td>{duration}</td><td>{test_type}</td><td>{similarity:.4}</td></tr>\n",
            url = escape_html(&r.product_url),
            name = escape_html(&r.product_name),
            remote = escape_html(&r.remote_testing),
            irt = escape_html(&r.irt_supported),
            duration = escape_html(&r.duration),
            test_type = escape_html(&r.test_type),
            similarity = r.similarity,
        ));
    }
    body.push_str("</tbody>\n</table>\n");
    page(query, &body)
}

/// Error page. A reply that failed to parse is still shown above the message;
/// results never are.
pub fn render_error(query: &str, raw_intent: Option<&str>, message: &str) -> String {
    let mut body = raw_intent.map(intent_block).unwrap_or_default();
    body.push_str(&format!(
        "<p class=\"error\">{}</p>\n",
        escape_html(message)
    ));
    page(query, &body)
}

fn intent_block(raw_intent: &str) -> String {
    format!(
        "<h2>Extracted Intent</h2>\n<pre>{}</pre>\n",
        escape_html(raw_intent)
    )
}

fn page(query: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{PAGE_TITLE}</title>
<style>
body {{ font-family: sans-serif; max-width: 960px; margin: 2rem auto; }}
textarea {{ width: 100%; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem; text-align: left; }}
.error {{ color: #b00020; }}
</style>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<form method="post" action="/">
<label for="query">Enter job description or hiring need:</label>
<textarea id="query" name="query" rows="6">{query}</textarea>
<button type="submit">Get Recommendations</button>
</form>
{body}</body>
</html>
"#,
        query = escape_html(query),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::parser::ExtractedIntent;
    use crate::models::assessment::RankedResult;

    fn outcome(results: Vec<RankedResult>) -> RecommendationOutcome {
        RecommendationOutcome {
            raw_intent: "job_role: <Analyst>\nrequired_skills: SQL\npreferred_difficulty: Low"
                .to_string(),
            intent: ExtractedIntent {
                job_role: "<Analyst>".to_string(),
                required_skills: "SQL".to_string(),
                preferred_difficulty: "Low".to_string(),
                max_duration: None,
            },
            results,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_form_has_textarea_and_no_table() {
        let html = render_form("");
        assert!(html.contains("<textarea"));
        assert!(html.contains("name=\"query\""));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_outcome_shows_intent_then_table() {
        let html = render_outcome(
            "need an analyst",
            &outcome(vec![RankedResult {
                product_name: "Data Insight".to_string(),
                product_url: "https://example.test/data".to_string(),
                remote_testing: "Yes".to_string(),
                irt_supported: "No".to_string(),
                duration: "30".to_string(),
                test_type: "Knowledge".to_string(),
                similarity: 0.5,
            }]),
        );

        let pre = html.find("<pre>").unwrap();
        let table = html.find("<table>").unwrap();
        assert!(pre < table);
        assert!(html.contains("job_role: &lt;Analyst&gt;"));
        assert!(html.contains("<a href=\"https://example.test/data\">Data Insight</a>"));
        assert!(html.contains("0.5000"));
        assert!(html.contains(">need an analyst</textarea>"));
    }

    #[test]
    fn test_outcome_without_results() {
        let html = render_outcome("q", &outcome(Vec::new()));
        assert!(html.contains("No matching assessments found."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_error_page_has_message_only() {
        let html = render_error(
            "<script>",
            None,
            "The intent extraction service is unavailable. Please try again later.",
        );
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Please try again later."));
        assert!(!html.contains("<pre>"));
        assert!(!html.contains("<table>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_parse_error_page_keeps_raw_reply() {
        let html = render_error(
            "need a <dev>",
            Some("job_role: Dev\nno colon here"),
            "Failed to extract intent. Please rephrase your query.",
        );
        let pre = html.find("<pre>job_role: Dev\nno colon here</pre>").unwrap();
        let error = html.find("class=\"error\"").unwrap();
        assert!(pre < error);
        assert!(!html.contains("<table>"));
    }
}
