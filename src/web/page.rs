// src/web/page.rs

const STYLE: &str = r#"
        :root { --primary: #2c3e50; --secondary: #3498db; --light: #ecf0f1; --dark: #2c3e50; }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: 'Roboto', sans-serif; line-height: 1.6; color: var(--dark); background-color: #f5f7fa; }
        .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
        header { background-color: var(--primary); color: white; padding: 2rem 0; margin-bottom: 2rem; }
        .header-content { max-width: 1200px; margin: 0 auto; padding: 0 2rem; }
        h1 { font-family: 'Playfair Display', serif; font-size: 2.5rem; margin-bottom: 0.5rem; }
        .tagline { font-weight: 300; opacity: 0.9; }
        .main { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-bottom: 3rem; }
        @media (max-width: 768px) { .main { grid-template-columns: 1fr; } }
        .card { background: white; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); overflow: hidden; }
        .card-header { background-color: var(--primary); color: white; padding: 1rem 1.5rem; font-weight: 500; }
        .card-body { padding: 1.5rem; }
        .form-group { margin-bottom: 1.5rem; }
        label { display: block; margin-bottom: 0.5rem; font-weight: 500; }
        select, textarea { width: 100%; padding: 0.75rem; border: 1px solid #ddd; border-radius: 4px; font-family: inherit; font-size: 1rem; }
        textarea { min-height: 150px; resize: vertical; }
        .btn { display: block; width: 100%; background-color: var(--secondary); color: white; border: none; padding: 0.75rem 1.5rem; border-radius: 4px; font-size: 1rem; cursor: pointer; }
        .result-container { margin-top: 2rem; border-top: 1px solid #eee; padding-top: 1.5rem; }
        .result-title { font-weight: 500; margin-bottom: 1rem; color: var(--primary); }
        .result-content { background-color: var(--light); padding: 1rem; border-radius: 4px; white-space: pre-wrap; font-family: 'Courier New', monospace; font-size: 0.9rem; max-height: 400px; overflow-y: auto; }
        footer { text-align: center; padding: 2rem 0; color: #7f8c8d; font-size: 0.9rem; }
"#;

/// What the page shows besides its two forms.
#[derive(Debug, Default)]
pub struct PageContext<'a> {
    pub draft_result: Option<&'a str>,
    pub analysis_result: Option<&'a str>,
    pub current_year: i32,
}

pub fn render(ctx: &PageContext<'_>) -> String {
    let draft = ctx
        .draft_result
        .map(|text| result_block("Generated Document", text))
        .unwrap_or_default();
    let analysis = ctx
        .analysis_result
        .map(|text| result_block("Analysis Results", text))
        .unwrap_or_default();
    let year = ctx.current_year;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>LegalEase Assistant</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <div class="header-content">
            <h1>LegalEase Assistant</h1>
            <p class="tagline">Your smart legal document companion</p>
        </div>
    </header>
    <div class="container">
        <div class="main">
            <div class="card">
                <div class="card-header">Document Drafting</div>
                <div class="card-body">
                    <form action="/draft" method="post">
                        <div class="form-group">
                            <label for="doc_type">Document Type</label>
                            <select id="doc_type" name="doc_type">
                                <option value="nda">Non-Disclosure Agreement</option>
                                <option value="contract">Service Contract</option>
                                <option value="will">Last Will</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="details">Describe Your Needs</label>
                            <textarea id="details" name="details" placeholder="Example: 'I need an NDA between my tech startup and a potential investor for 2 years protecting our software designs'"></textarea>
                        </div>
                        <button type="submit" class="btn">Generate Document</button>
                    </form>
{draft}
                </div>
            </div>
            <div class="card">
                <div class="card-header">Document Analysis</div>
                <div class="card-body">
                    <form action="/analyze" method="post">
                        <div class="form-group">
                            <label for="text">Paste Legal Text</label>
                            <textarea id="text" name="text" placeholder="Paste any legal document or contract text here for analysis"></textarea>
                        </div>
                        <button type="submit" class="btn">Analyze Document</button>
                    </form>
{analysis}
                </div>
            </div>
        </div>
    </div>
    <footer>
        <p>&copy; {year} LegalEase Assistant. All rights reserved.</p>
        <p>This tool provides document templates and pattern-based analysis only. It is not legal advice.</p>
    </footer>
</body>
</html>
"#
    )
}

fn result_block(title: &str, text: &str) -> String {
    format!(
        r#"                    <div class="result-container">
                        <div class="result-title">{title}</div>
                        <div class="result-content">{}</div>
                    </div>"#,
        escape_html(text)
    )
}

/// Escapes text for use inside element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
