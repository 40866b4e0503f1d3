use crate::types::FileEntry;
use chrono::NaiveDateTime;

pub struct IndexPage<'a> {
    pub entries: &'a [FileEntry],
    pub generated_at: NaiveDateTime,
}

#[must_use]
pub fn render_index(page: &IndexPage) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("    <title>PDF Files</title>\n");
    html.push_str(&render_styles());
    html.push_str("</head>\n<body>\n");

    html.push_str("    <h1>📄 PDF Files</h1>\n\n");

    html.push_str("    <ul class=\"pdf-list\" id=\"pdfList\">\n");
    html.push_str(&render_items(page.entries));
    html.push_str("\n    </ul>\n\n");

    html.push_str(&render_footer(page));
    html.push_str(&render_script());

    html.push_str("</body>\n</html>");

    html
}

fn render_items(entries: &[FileEntry]) -> String {
    if entries.is_empty() {
        return r#"        <li class="no-files">
            No PDF files found in this directory
        </li>"#
            .to_string();
    }

    let mut html = String::new();
    for entry in entries {
        // href is escaped for the attribute but not URL-encoded, so it still
        // resolves to the literal file name
        html.push_str(&format!(
            r#"        <li class="pdf-item">
            <a href="{}" class="pdf-link" target="_blank">
                <span class="pdf-icon">📄</span>
                <span>{}</span>
                <span class="file-size">{}</span>
            </a>
        </li>
"#,
            escape_html(&entry.name),
            escape_html(&entry.label()),
            escape_html(&entry.size_label)
        ));
    }
    html
}

fn render_footer(page: &IndexPage) -> String {
    format!(
        r#"    <div class="footer">
        Generated on {} • {} PDF file(s) found
    </div>

"#,
        page.generated_at.format("%Y-%m-%d %H:%M:%S"),
        page.entries.len()
    )
}

fn render_script() -> String {
    r"    <script>
        // Add click tracking
        document.querySelectorAll('.pdf-link').forEach(link => {
            link.addEventListener('click', function() {
                console.log('Opening PDF:', this.href);
            });
        });
    </script>
"
    .to_string()
}

fn render_styles() -> String {
    r"    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
            color: #333;
        }

        h1 {
            color: #2c3e50;
            border-bottom: 2px solid #3498db;
            padding-bottom: 10px;
        }

        .pdf-list {
            list-style: none;
            padding: 0;
        }

        .pdf-item {
            background: #f8f9fa;
            margin: 10px 0;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #e74c3c;
            transition: background-color 0.3s ease;
        }

        .pdf-item:hover {
            background: #e9ecef;
        }

        .pdf-link {
            text-decoration: none;
            color: #2c3e50;
            font-weight: 500;
            display: flex;
            align-items: center;
        }

        .pdf-link:hover {
            color: #3498db;
        }

        .pdf-icon {
            margin-right: 10px;
            font-size: 1.2em;
        }

        .file-size {
            color: #6c757d;
            font-size: 0.9em;
            margin-left: auto;
        }

        .no-files {
            text-align: center;
            color: #6c757d;
            font-style: italic;
            padding: 40px 0;
        }

        .footer {
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid #dee2e6;
            color: #6c757d;
            font-size: 0.9em;
            text-align: center;
        }
    </style>
"
    .to_string()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
