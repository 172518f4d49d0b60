//! Documentation-XML artifact: the same body as the Markdown artifact,
//! rendered to HTML and rewritten into the docs-toolchain tag vocabulary.

use pulldown_cmark::{html, Options, Parser};

/// Literal, ordered tag rewrites applied to the rendered HTML. The tag set
/// and substitution order are a compatibility contract with the docs
/// toolchain; this stays string-level and must not grow an HTML parser.
const TAG_SUBSTITUTIONS: [(&str, &str); 10] = [
    ("<p>", "<paragraph>"),
    ("</p>", "</paragraph>"),
    ("<a href=", "<external-ref href="),
    ("</a>", "</external-ref>"),
    ("<ul>", "<unordered-list>"),
    ("</ul>", "</unordered-list>"),
    ("<li>", "<list-item>"),
    ("</li>", "</list-item>"),
    ("<b>", "<strong>"),
    ("</b>", "</strong>"),
];

/// Wrapper vocabulary for the XML artifact.
///
/// Historically the wrapper was picked by comparing the repository name
/// against `sync_gateway` inside the renderer; the branch is now an
/// explicit dialect the caller selects (and can override on the command
/// line), with [`DocumentDialect::for_repository`] keeping the exact
/// name match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentDialect {
    /// `<topic>`/`<body>` skeleton used by every other repository.
    Generic,
    /// `<article>`/`<introduction>` skeleton for the Sync Gateway docs.
    SyncGateway,
}

impl DocumentDialect {
    pub fn for_repository(repository: &str) -> Self {
        if repository == "sync_gateway" {
            DocumentDialect::SyncGateway
        } else {
            DocumentDialect::Generic
        }
    }
}

/// Rewrite rendered HTML into the custom tag vocabulary.
pub fn translate_tags(html: &str) -> String {
    let mut out = html.to_string();
    for (from, to) in TAG_SUBSTITUTIONS {
        out = out.replace(from, to);
    }
    out
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Produce the full XML artifact for one milestone.
pub fn render_xml(
    dialect: DocumentDialect,
    milestone_title: &str,
    markdown_body: &str,
    footer: Option<&str>,
) -> String {
    let mut content = translate_tags(&markdown_to_html(markdown_body));
    if let Some(footer) = footer {
        content.push_str(footer);
        if !footer.ends_with('\n') {
            content.push('\n');
        }
    }

    let compact = milestone_title.replace('.', "");
    match dialect {
        DocumentDialect::Generic => format!(
            "<topic id=\"release-notes-{compact}\">\n\
             <title>Release Notes for {milestone_title}</title>\n\
             <body>\n{content}</body>\n</topic>\n"
        ),
        DocumentDialect::SyncGateway => format!(
            "<article id=\"release-notes-{compact}\">\n\
             <title>Release Notes for {milestone_title}</title>\n\
             <introduction>\n{content}</introduction>\n</article>\n"
        ),
    }
}
